use crate::error::ContractError;
use crate::handler::{
    check_declaration_existence, get_config, query_declaration, query_declaration_count,
    query_declaration_update, query_latest_declaration_id, register_declaration,
    set_authority_contract, set_max_declarations, set_registration_fee, update_declaration,
};
use crate::state::{Config, CONFIG};
use asset_declaration::registry::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use asset_declaration::utils::{
    DEFAULT_FEE_DENOM, DEFAULT_MAX_DECLARATIONS, DEFAULT_REGISTRATION_FEE,
};
#[cfg(not(feature = "library"))]
use cosmwasm_std::entry_point;
use cosmwasm_std::{to_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult};
use cw2::set_contract_version;

// version info for migration info
const CONTRACT_NAME: &str = "crates.io:declaration-registry";
const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    let max_declarations = msg.max_declarations.unwrap_or(DEFAULT_MAX_DECLARATIONS);
    if max_declarations == 0 {
        return Err(ContractError::InvalidUpdateParam {});
    }
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;
    let config = Config {
        declaration_counter: 0,
        max_declarations,
        registration_fee: msg.registration_fee.unwrap_or(DEFAULT_REGISTRATION_FEE),
        fee_denom: msg
            .fee_denom
            .unwrap_or_else(|| String::from(DEFAULT_FEE_DENOM)),
        // Authority is configured afterwards with SetAuthorityContract
        authority_contract: None,
    };
    CONFIG.save(deps.storage, &config)?;
    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("creator", info.sender)
        .add_attribute("max_declarations", max_declarations.to_string())
        .add_attribute("registration_fee", config.registration_fee.to_string())
        .add_attribute("fee_denom", config.fee_denom))
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        ExecuteMsg::SetAuthorityContract { address } => {
            set_authority_contract(deps, env, info, address)
        }
        ExecuteMsg::SetMaxDeclarations { max_declarations } => {
            set_max_declarations(deps, env, info, max_declarations)
        }
        ExecuteMsg::SetRegistrationFee { fee } => set_registration_fee(deps, env, info, fee),
        ExecuteMsg::RegisterDeclaration {
            hash,
            encrypted_data,
            currency,
            location,
            grace_period,
            interest_rate,
            declaration_type,
        } => register_declaration(
            deps,
            env,
            info,
            hash,
            encrypted_data,
            currency,
            location,
            grace_period,
            interest_rate,
            declaration_type,
        ),
        ExecuteMsg::UpdateDeclaration {
            declaration_id,
            update_hash,
            update_encrypted_data,
        } => update_declaration(
            deps,
            env,
            info,
            declaration_id,
            update_hash,
            update_encrypted_data,
        ),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::GetDeclaration {
            owner,
            declaration_id,
        } => to_binary(&query_declaration(deps, owner, declaration_id)?),
        QueryMsg::GetDeclarationUpdate {
            owner,
            declaration_id,
        } => to_binary(&query_declaration_update(deps, owner, declaration_id)?),
        QueryMsg::GetDeclarationCount {} => to_binary(&query_declaration_count(deps)?),
        QueryMsg::CheckDeclarationExistence { declaration_type } => {
            to_binary(&check_declaration_existence(deps, declaration_type)?)
        }
        QueryMsg::GetLatestDeclarationId { declaration_type } => {
            to_binary(&query_latest_declaration_id(deps, declaration_type)?)
        }
        QueryMsg::GetConfig {} => to_binary(&get_config(deps)?),
    }
}

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(_deps: DepsMut, _env: Env, _msg: MigrateMsg) -> StdResult<Response> {
    Ok(Response::default())
}
