use cosmwasm_std::{Addr, Binary};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct InstantiateMsg {
    /// Ceiling on the number of registrations. Defaults to 10000.
    pub max_declarations: Option<u64>,
    /// Fee charged per registration, paid to the authority. Defaults to 500.
    pub registration_fee: Option<u64>,
    /// Native denom the fee is paid in. Defaults to "uusd".
    pub fee_denom: Option<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ExecuteMsg {
    /// One-shot: the authority cannot be replaced once set.
    SetAuthorityContract {
        address: String,
    },
    SetMaxDeclarations {
        max_declarations: u64,
    },
    SetRegistrationFee {
        fee: u64,
    },
    /// Must be sent with at least `registration_fee` of the fee denom attached.
    RegisterDeclaration {
        hash: Binary,
        encrypted_data: Binary,
        currency: String,
        location: String,
        grace_period: u64,
        interest_rate: u64,
        declaration_type: String,
    },
    /// Only the sender's own declarations can be updated.
    UpdateDeclaration {
        declaration_id: u64,
        update_hash: Binary,
        update_encrypted_data: Binary,
    },
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum QueryMsg {
    GetDeclaration { owner: String, declaration_id: u64 },
    GetDeclarationUpdate { owner: String, declaration_id: u64 },
    GetDeclarationCount {},
    CheckDeclarationExistence { declaration_type: String },
    GetLatestDeclarationId { declaration_type: String },
    GetConfig {},
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    Stx,
    Usd,
    Btc,
}

impl Currency {
    pub fn from_label(label: &str) -> Option<Currency> {
        match label {
            "STX" => Some(Currency::Stx),
            "USD" => Some(Currency::Usd),
            "BTC" => Some(Currency::Btc),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::Stx => "STX",
            Currency::Usd => "USD",
            Currency::Btc => "BTC",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationType {
    Annual,
    Quarterly,
    Special,
}

impl DeclarationType {
    pub fn from_label(label: &str) -> Option<DeclarationType> {
        match label {
            "annual" => Some(DeclarationType::Annual),
            "quarterly" => Some(DeclarationType::Quarterly),
            "special" => Some(DeclarationType::Special),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DeclarationType::Annual => "annual",
            DeclarationType::Quarterly => "quarterly",
            DeclarationType::Special => "special",
        }
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeclarationInfo {
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
pub struct DeclarationResponse {
    pub declaration: Option<DeclarationInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeclarationUpdateInfo {
    pub update_hash: Binary,
    pub update_timestamp: u64,
    pub updater: Addr,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeclarationUpdateResponse {
    pub update: Option<DeclarationUpdateInfo>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeclarationCountResponse {
    pub count: u64,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct DeclarationExistenceResponse {
    pub exists: bool,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct LatestDeclarationIdResponse {
    pub declaration_id: Option<u64>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct ConfigResponse {
    pub declaration_counter: u64,
    pub max_declarations: u64,
    pub registration_fee: u64,
    pub fee_denom: String,
    pub authority_contract: Option<Addr>,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, JsonSchema)]
pub struct MigrateMsg {}
