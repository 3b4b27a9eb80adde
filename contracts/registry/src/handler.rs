use crate::error::ContractError;
use crate::state::{
    declaration_key, Config, Declaration, DeclarationUpdate, CONFIG, DECLARATIONS,
    DECLARATIONS_BY_TYPE, DECLARATION_UPDATES,
};
use asset_declaration::registry::{
    ConfigResponse, Currency, DeclarationCountResponse, DeclarationExistenceResponse,
    DeclarationInfo, DeclarationResponse, DeclarationType, DeclarationUpdateInfo,
    DeclarationUpdateResponse, LatestDeclarationIdResponse,
};
use asset_declaration::utils::{
    convert_hash_to_hex_string, is_burn_address, is_valid_encrypted_data,
    is_valid_grace_period, is_valid_hash, is_valid_interest_rate, is_valid_location,
};
use cosmwasm_std::{
    Addr, BankMsg, Binary, CanonicalAddr, Coin, CosmosMsg, Deps, DepsMut, Env, MessageInfo,
    Response, StdResult, Uint128,
};

fn verified_authority(config: &Config) -> Result<CanonicalAddr, ContractError> {
    config
        .authority_contract
        .clone()
        .ok_or(ContractError::AuthorityNotVerified {})
}

pub fn set_authority_contract(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    if is_burn_address(&address) {
        return Err(ContractError::InvalidOfficial {});
    }
    let mut config = CONFIG.load(deps.storage)?;
    if let Some(authority) = &config.authority_contract {
        return Err(ContractError::AuthorityAlreadySet {
            authority: deps.api.addr_humanize(authority)?.to_string(),
        });
    }

    let authority = deps.api.addr_validate(&address)?;
    config.authority_contract = Some(deps.api.addr_canonicalize(authority.as_str())?);
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_authority_contract")
        .add_attribute("authority", authority))
}

pub fn set_max_declarations(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    max_declarations: u64,
) -> Result<Response, ContractError> {
    if max_declarations == 0 {
        return Err(ContractError::InvalidUpdateParam {});
    }
    let mut config = CONFIG.load(deps.storage)?;
    verified_authority(&config)?;

    // May drop below the current counter, which closes registration for good.
    config.max_declarations = max_declarations;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_max_declarations")
        .add_attribute("max_declarations", max_declarations.to_string()))
}

pub fn set_registration_fee(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    fee: u64,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;
    verified_authority(&config)?;

    config.registration_fee = fee;
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "set_registration_fee")
        .add_attribute("registration_fee", fee.to_string())
        .add_attribute("fee_denom", config.fee_denom))
}

/// Builds the bank messages paying the registration fee to the authority
/// and returning everything else attached back to the sender.
fn collect_registration_fee(
    info: &MessageInfo,
    config: &Config,
    authority: &Addr,
) -> Result<Vec<CosmosMsg>, ContractError> {
    let required = Uint128::from(config.registration_fee);
    let paid = info
        .funds
        .iter()
        .filter(|fund| fund.denom == config.fee_denom)
        .fold(Uint128::zero(), |total, fund| total + fund.amount);
    if paid < required {
        return Err(ContractError::InsufficientFund {
            amount: paid,
            required,
        });
    }

    let mut messages: Vec<CosmosMsg> = vec![];
    if !required.is_zero() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: authority.to_string(),
            amount: vec![Coin {
                denom: config.fee_denom.clone(),
                amount: required,
            }],
        }));
    }

    let mut refund: Vec<Coin> = info
        .funds
        .iter()
        .filter(|fund| fund.denom != config.fee_denom && !fund.amount.is_zero())
        .cloned()
        .collect();
    let surplus = paid - required;
    if !surplus.is_zero() {
        refund.insert(
            0,
            Coin {
                denom: config.fee_denom.clone(),
                amount: surplus,
            },
        );
    }
    if !refund.is_empty() {
        messages.push(CosmosMsg::Bank(BankMsg::Send {
            to_address: info.sender.to_string(),
            amount: refund,
        }));
    }
    Ok(messages)
}

pub fn register_declaration(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    hash: Binary,
    encrypted_data: Binary,
    currency: String,
    location: String,
    grace_period: u64,
    interest_rate: u64,
    declaration_type: String,
) -> Result<Response, ContractError> {
    let mut config = CONFIG.load(deps.storage)?;

    // The order of these checks decides which error a caller sees.
    if config.declaration_counter >= config.max_declarations {
        return Err(ContractError::MaxDeclarationsExceeded {
            max_declarations: config.max_declarations,
        });
    }
    if !is_valid_hash(hash.as_slice()) {
        return Err(ContractError::InvalidHash { length: hash.len() });
    }
    if !is_valid_encrypted_data(encrypted_data.as_slice()) {
        return Err(ContractError::InvalidEncryptedData {
            length: encrypted_data.len(),
        });
    }
    let currency = Currency::from_label(&currency).ok_or(ContractError::InvalidCurrency {})?;
    if !is_valid_location(&location) {
        return Err(ContractError::InvalidLocation {});
    }
    if !is_valid_grace_period(grace_period) {
        return Err(ContractError::InvalidGracePeriod {});
    }
    if !is_valid_interest_rate(interest_rate) {
        return Err(ContractError::InvalidInterestRate {});
    }
    let declaration_type = DeclarationType::from_label(&declaration_type)
        .ok_or(ContractError::InvalidDeclarationType {})?;
    let authority = verified_authority(&config)?;

    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    let declaration_id = config.declaration_counter + 1;
    if DECLARATIONS
        .may_load(deps.storage, declaration_key(&owner, declaration_id))?
        .is_some()
    {
        return Err(ContractError::AlreadyDeclared {});
    }

    let authority = deps.api.addr_humanize(&authority)?;
    let messages = collect_registration_fee(&info, &config, &authority)?;

    let hex_hash = convert_hash_to_hex_string(hash.as_slice());
    DECLARATIONS.save(
        deps.storage,
        declaration_key(&owner, declaration_id),
        &Declaration {
            hash,
            timestamp: env.block.height,
            encrypted_data,
            status: true,
            currency,
            location,
            grace_period,
            interest_rate,
            declaration_type,
        },
    )?;
    DECLARATIONS_BY_TYPE.save(
        deps.storage,
        declaration_type.as_str().to_string(),
        &declaration_id,
    )?;
    config.declaration_counter = declaration_id;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_messages(messages)
        .add_attribute("method", "register_declaration")
        .add_attribute("declaration_id", declaration_id.to_string())
        .add_attribute("owner", info.sender)
        .add_attribute("hash", hex_hash)
        .add_attribute("declaration_type", declaration_type.as_str())
        .add_attribute("fee", config.registration_fee.to_string())
        .add_attribute("authority", authority)
        .add_attribute("block_height", env.block.height.to_string()))
}

pub fn update_declaration(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    declaration_id: u64,
    update_hash: Binary,
    update_encrypted_data: Binary,
) -> Result<Response, ContractError> {
    // Only the owner's own key is ever resolved, so nobody can touch another's declaration.
    let owner = deps.api.addr_canonicalize(info.sender.as_str())?;
    let mut declaration = DECLARATIONS
        .may_load(deps.storage, declaration_key(&owner, declaration_id))?
        .ok_or_else(|| ContractError::DeclarationNotFound {
            owner: info.sender.to_string(),
            declaration_id,
        })?;
    if !is_valid_hash(update_hash.as_slice()) {
        return Err(ContractError::InvalidHash {
            length: update_hash.len(),
        });
    }
    if !is_valid_encrypted_data(update_encrypted_data.as_slice()) {
        return Err(ContractError::InvalidEncryptedData {
            length: update_encrypted_data.len(),
        });
    }

    let hex_hash = convert_hash_to_hex_string(update_hash.as_slice());
    declaration.hash = update_hash.clone();
    declaration.encrypted_data = update_encrypted_data;
    declaration.timestamp = env.block.height;
    DECLARATIONS.save(
        deps.storage,
        declaration_key(&owner, declaration_id),
        &declaration,
    )?;
    DECLARATION_UPDATES.save(
        deps.storage,
        declaration_key(&owner, declaration_id),
        &DeclarationUpdate {
            update_hash,
            update_timestamp: env.block.height,
            updater: owner,
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "update_declaration")
        .add_attribute("declaration_id", declaration_id.to_string())
        .add_attribute("updater", info.sender)
        .add_attribute("hash", hex_hash)
        .add_attribute("block_height", env.block.height.to_string()))
}

pub fn query_declaration(
    deps: Deps,
    owner: String,
    declaration_id: u64,
) -> StdResult<DeclarationResponse> {
    // An address that can not own anything has no declarations
    let owner = match deps.api.addr_canonicalize(owner.as_str()) {
        Ok(owner) => owner,
        Err(_) => return Ok(DeclarationResponse { declaration: None }),
    };
    let declaration = DECLARATIONS
        .may_load(deps.storage, declaration_key(&owner, declaration_id))?
        .map(|declaration| DeclarationInfo {
            hash: declaration.hash,
            timestamp: declaration.timestamp,
            encrypted_data: declaration.encrypted_data,
            status: declaration.status,
            currency: declaration.currency,
            location: declaration.location,
            grace_period: declaration.grace_period,
            interest_rate: declaration.interest_rate,
            declaration_type: declaration.declaration_type,
        });
    Ok(DeclarationResponse { declaration })
}

pub fn query_declaration_update(
    deps: Deps,
    owner: String,
    declaration_id: u64,
) -> StdResult<DeclarationUpdateResponse> {
    let owner = match deps.api.addr_canonicalize(owner.as_str()) {
        Ok(owner) => owner,
        Err(_) => return Ok(DeclarationUpdateResponse { update: None }),
    };
    let update =
        DECLARATION_UPDATES.may_load(deps.storage, declaration_key(&owner, declaration_id))?;
    if let Some(update) = update {
        let updater = deps.api.addr_humanize(&update.updater)?;
        return Ok(DeclarationUpdateResponse {
            update: Some(DeclarationUpdateInfo {
                update_hash: update.update_hash,
                update_timestamp: update.update_timestamp,
                updater,
            }),
        });
    }
    Ok(DeclarationUpdateResponse { update: None })
}

pub fn query_declaration_count(deps: Deps) -> StdResult<DeclarationCountResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(DeclarationCountResponse {
        count: config.declaration_counter,
    })
}

pub fn check_declaration_existence(
    deps: Deps,
    declaration_type: String,
) -> StdResult<DeclarationExistenceResponse> {
    let latest = DECLARATIONS_BY_TYPE.may_load(deps.storage, declaration_type)?;
    Ok(DeclarationExistenceResponse {
        exists: latest.is_some(),
    })
}

pub fn query_latest_declaration_id(
    deps: Deps,
    declaration_type: String,
) -> StdResult<LatestDeclarationIdResponse> {
    let declaration_id = DECLARATIONS_BY_TYPE.may_load(deps.storage, declaration_type)?;
    Ok(LatestDeclarationIdResponse { declaration_id })
}

pub fn get_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    let authority_contract = match config.authority_contract {
        Some(authority) => Some(deps.api.addr_humanize(&authority)?),
        None => None,
    };
    Ok(ConfigResponse {
        declaration_counter: config.declaration_counter,
        max_declarations: config.max_declarations,
        registration_fee: config.registration_fee,
        fee_denom: config.fee_denom,
        authority_contract,
    })
}
