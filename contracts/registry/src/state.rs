use asset_declaration::registry::{Currency, DeclarationType};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use cosmwasm_std::{Binary, CanonicalAddr};
use cw_storage_plus::{Item, Map, U64Key};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Config {
    pub declaration_counter: u64,
    pub max_declarations: u64,
    pub registration_fee: u64,
    pub fee_denom: String,
    pub authority_contract: Option<CanonicalAddr>,
}

pub const CONFIG: Item<Config> = Item::new("CONFIG");

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct Declaration {
    pub hash: Binary,
    pub timestamp: u64,
    pub encrypted_data: Binary,
    pub status: bool,
    pub currency: Currency,
    pub location: String,
    pub grace_period: u64,
    pub interest_rate: u64,
    pub declaration_type: DeclarationType,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeclarationUpdate {
    pub update_hash: Binary,
    pub update_timestamp: u64,
    pub updater: CanonicalAddr,
}

/// Keyed by (canonical owner, declaration id)
pub const DECLARATIONS: Map<(Vec<u8>, U64Key), Declaration> = Map::new("DECLARATIONS");

/// Latest update per declaration, same key as DECLARATIONS
pub const DECLARATION_UPDATES: Map<(Vec<u8>, U64Key), DeclarationUpdate> =
    Map::new("DECLARATION_UPDATES");

/// Declaration type label -> most recently registered id of that type
pub const DECLARATIONS_BY_TYPE: Map<String, u64> = Map::new("DECLARATIONS_BY_TYPE");

pub fn declaration_key(owner: &CanonicalAddr, declaration_id: u64) -> (Vec<u8>, U64Key) {
    (owner.to_vec(), U64Key::new(declaration_id))
}
