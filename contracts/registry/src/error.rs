use cosmwasm_std::{StdError, Uint128};
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    /// Reserved: governance only requires the authority to be configured.
    #[error("NotAuthorized: Sender {sender} is not the authority.")]
    NotAuthorized { sender: String },

    #[error("AlreadyDeclared")]
    AlreadyDeclared {},

    #[error("AuthorityAlreadySet: Authority is already {authority}.")]
    AuthorityAlreadySet { authority: String },

    #[error("InvalidHash: Hash must be exactly 32 bytes, got {length}.")]
    InvalidHash { length: usize },

    #[error("InvalidEncryptedData: Encrypted data must be at most 256 bytes, got {length}.")]
    InvalidEncryptedData { length: usize },

    /// Reserved: the block height is supplied by the chain and never rejected.
    #[error("InvalidTimestamp")]
    InvalidTimestamp {},

    #[error("DeclarationNotFound: Declaration {declaration_id} of {owner} does not exist.")]
    DeclarationNotFound { owner: String, declaration_id: u64 },

    #[error("InvalidOfficial")]
    InvalidOfficial {},

    #[error("MaxDeclarationsExceeded: Limit of {max_declarations} reached.")]
    MaxDeclarationsExceeded { max_declarations: u64 },

    #[error("InvalidUpdateParam")]
    InvalidUpdateParam {},

    #[error("AuthorityNotVerified")]
    AuthorityNotVerified {},

    /// Reserved: no operation changes a declaration's status yet.
    #[error("InvalidStatus")]
    InvalidStatus {},

    #[error("InvalidCurrency")]
    InvalidCurrency {},

    #[error("InvalidLocation")]
    InvalidLocation {},

    #[error("InvalidGracePeriod")]
    InvalidGracePeriod {},

    #[error("InvalidInterestRate")]
    InvalidInterestRate {},

    #[error("InvalidDeclarationType")]
    InvalidDeclarationType {},

    #[error("InsufficientFund")]
    InsufficientFund { amount: Uint128, required: Uint128 },
}

impl ContractError {
    /// Numeric code shared with existing clients of the registry.
    /// Errors that originate outside the registry's own checks have none.
    pub fn code(&self) -> Option<u32> {
        match self {
            ContractError::NotAuthorized { .. } => Some(100),
            ContractError::AlreadyDeclared {} => Some(101),
            ContractError::AuthorityAlreadySet { .. } => Some(101),
            ContractError::InvalidHash { .. } => Some(102),
            ContractError::InvalidEncryptedData { .. } => Some(103),
            ContractError::InvalidTimestamp {} => Some(104),
            ContractError::DeclarationNotFound { .. } => Some(105),
            ContractError::InvalidOfficial {} => Some(106),
            ContractError::MaxDeclarationsExceeded { .. } => Some(107),
            ContractError::InvalidUpdateParam {} => Some(108),
            ContractError::AuthorityNotVerified {} => Some(109),
            ContractError::InvalidStatus {} => Some(110),
            ContractError::InvalidCurrency {} => Some(114),
            ContractError::InvalidLocation {} => Some(115),
            ContractError::InvalidGracePeriod {} => Some(116),
            ContractError::InvalidInterestRate {} => Some(117),
            ContractError::InvalidDeclarationType {} => Some(119),
            ContractError::Std(_) | ContractError::InsufficientFund { .. } => None,
        }
    }
}
