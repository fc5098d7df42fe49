//! Contract Mapping Gateway - Entry Points
//!
//! The implementation is modularized into:
//! - `execute/` - Execute message handlers
//! - `query` - Query message handlers
//! - `pending`, `directory`, `signature` - the mapping building blocks

use cosmwasm_std::{
    entry_point, to_json_binary, Binary, Deps, DepsMut, Env, MessageInfo, Response, StdResult,
};
use cw2::set_contract_version;

use crate::error::ContractError;
use crate::execute::{
    execute_add_authorized_contract_mapping, execute_add_contract_mapping, execute_add_oracle,
    execute_remove_oracle, execute_update_owner, execute_verify_contract_creators,
};
use crate::msg::{ExecuteMsg, InstantiateMsg, MigrateMsg, QueryMsg};
use crate::permission::grant_permission;
use crate::query::{
    query_config, query_contract_mapping, query_is_oracle, query_oracles, query_resolve_to_foreign,
    query_resolve_to_local, query_state, query_unverified_contract_creators,
};
use crate::state::{
    Config, GatewayState, CONFIG, CONTRACT_NAME, CONTRACT_VERSION, GATEWAY_STATE, ORACLE_ROLE,
    VERIFY_CREATORS_PERM,
};

// ============================================================================
// Instantiate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn instantiate(
    deps: DepsMut,
    _env: Env,
    _info: MessageInfo,
    msg: InstantiateMsg,
) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    let owner = deps.api.addr_validate(&msg.owner)?;
    CONFIG.save(deps.storage, &Config { owner: owner.clone() })?;

    GATEWAY_STATE.save(
        deps.storage,
        &GatewayState {
            next_contract_mapping_id: 0,
        },
    )?;

    for oracle_str in &msg.oracles {
        let oracle = deps.api.addr_validate(oracle_str)?;
        grant_permission(deps.storage, &oracle, VERIFY_CREATORS_PERM, ORACLE_ROLE)?;
    }

    Ok(Response::new()
        .add_attribute("method", "instantiate")
        .add_attribute("owner", owner)
        .add_attribute("oracle_count", msg.oracles.len().to_string()))
}

// ============================================================================
// Execute
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn execute(
    deps: DepsMut,
    _env: Env,
    info: MessageInfo,
    msg: ExecuteMsg,
) -> Result<Response, ContractError> {
    match msg {
        // Contract mapping flow
        ExecuteMsg::AddContractMapping {
            foreign_contract,
            local_contract,
            foreign_contract_creator_sig,
            foreign_contract_tx_hash,
        } => execute_add_contract_mapping(
            deps,
            foreign_contract,
            local_contract,
            foreign_contract_creator_sig,
            foreign_contract_tx_hash,
        ),
        ExecuteMsg::VerifyContractCreators { creators } => {
            execute_verify_contract_creators(deps, info, creators)
        }

        // Owner operations
        ExecuteMsg::AddAuthorizedContractMapping {
            foreign_contract,
            local_contract,
        } => execute_add_authorized_contract_mapping(deps, info, foreign_contract, local_contract),
        ExecuteMsg::AddOracle { address } => execute_add_oracle(deps, info, address),
        ExecuteMsg::RemoveOracle { address } => execute_remove_oracle(deps, info, address),
        ExecuteMsg::UpdateOwner { owner } => execute_update_owner(deps, info, owner),
    }
}

// ============================================================================
// Query
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn query(deps: Deps, _env: Env, msg: QueryMsg) -> StdResult<Binary> {
    match msg {
        QueryMsg::UnverifiedContractCreators {} => {
            to_json_binary(&query_unverified_contract_creators(deps)?)
        }
        QueryMsg::ResolveToLocal { foreign_contract } => {
            to_json_binary(&query_resolve_to_local(deps, foreign_contract)?)
        }
        QueryMsg::ResolveToForeign { local_contract } => {
            to_json_binary(&query_resolve_to_foreign(deps, local_contract)?)
        }
        QueryMsg::ContractMapping { from } => to_json_binary(&query_contract_mapping(deps, from)?),
        QueryMsg::State {} => to_json_binary(&query_state(deps)?),
        QueryMsg::Config {} => to_json_binary(&query_config(deps)?),
        QueryMsg::Oracles {} => to_json_binary(&query_oracles(deps)?),
        QueryMsg::IsOracle { address } => to_json_binary(&query_is_oracle(deps, address)?),
    }
}

// ============================================================================
// Migrate
// ============================================================================

#[cfg_attr(not(feature = "library"), entry_point)]
pub fn migrate(deps: DepsMut, _env: Env, _msg: MigrateMsg) -> Result<Response, ContractError> {
    set_contract_version(deps.storage, CONTRACT_NAME, CONTRACT_VERSION)?;

    if GATEWAY_STATE.may_load(deps.storage)?.is_none() {
        GATEWAY_STATE.save(
            deps.storage,
            &GatewayState {
                next_contract_mapping_id: 0,
            },
        )?;
    }

    Ok(Response::new()
        .add_attribute("action", "migrate")
        .add_attribute("version", CONTRACT_VERSION))
}
