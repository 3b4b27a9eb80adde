use hex;

pub const HASH_LENGTH: usize = 32;
pub const MAX_ENCRYPTED_DATA_LENGTH: usize = 256;
pub const MAX_LOCATION_LENGTH: usize = 100;
pub const MAX_GRACE_PERIOD: u64 = 30;
pub const MAX_INTEREST_RATE: u64 = 20;

pub const DEFAULT_MAX_DECLARATIONS: u64 = 10_000;
pub const DEFAULT_REGISTRATION_FEE: u64 = 500;
pub const DEFAULT_FEE_DENOM: &str = "uusd";

/// Well-known burn address. Nobody holds its key, so it can never act as authority.
pub const BURN_ADDRESS: &str = "terra1sk06e3dyexuq4shw77y3dsv480xv42mq73anxu";

pub fn is_burn_address(address: &str) -> bool {
    address == BURN_ADDRESS
}

pub fn is_valid_hash(hash: &[u8]) -> bool {
    hash.len() == HASH_LENGTH
}

pub fn is_valid_encrypted_data(data: &[u8]) -> bool {
    data.len() <= MAX_ENCRYPTED_DATA_LENGTH
}

// Length is counted in unicode scalar values, not bytes.
pub fn is_valid_location(location: &str) -> bool {
    let length = location.chars().count();
    length > 0 && length <= MAX_LOCATION_LENGTH
}

pub fn is_valid_grace_period(grace_period: u64) -> bool {
    grace_period <= MAX_GRACE_PERIOD
}

pub fn is_valid_interest_rate(interest_rate: u64) -> bool {
    interest_rate <= MAX_INTEREST_RATE
}

pub fn convert_hash_to_hex_string(hash: &[u8]) -> String {
    hex::encode(hash)
}
