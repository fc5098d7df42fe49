//! Query handlers for the contract mapping gateway.
//!
//! This module contains all query message handlers for retrieving contract state.

use common::ChainAddress;
use cosmwasm_std::{Deps, StdResult};

use crate::directory;
use crate::msg::{
    ConfigResponse, ContractMappingResponse, IsOracleResponse, OraclesResponse,
    ResolvedAddressResponse, StateResponse, UnverifiedContractCreator,
    UnverifiedContractCreatorsResponse,
};
use crate::pending;
use crate::permission::{has_permission, holders};
use crate::state::{CONFIG, GATEWAY_STATE, ORACLE_ROLE, VERIFY_CREATORS_PERM};

// ============================================================================
// Contract Mapping Queries
// ============================================================================

/// Pending mappings for oracles to verify, id-ascending.
pub fn query_unverified_contract_creators(
    deps: Deps,
) -> StdResult<UnverifiedContractCreatorsResponse> {
    let creators = pending::list(deps.storage)?
        .into_iter()
        .map(|mapping| UnverifiedContractCreator {
            contract_mapping_id: mapping.id,
            contract_tx_hash: mapping.foreign_contract_tx_hash,
        })
        .collect();
    Ok(UnverifiedContractCreatorsResponse { creators })
}

pub fn query_resolve_to_local(
    deps: Deps,
    foreign_contract: ChainAddress,
) -> StdResult<ResolvedAddressResponse> {
    let address = directory::resolve_to_local(deps.storage, &foreign_contract)?;
    Ok(ResolvedAddressResponse { address })
}

pub fn query_resolve_to_foreign(
    deps: Deps,
    local_contract: ChainAddress,
) -> StdResult<ResolvedAddressResponse> {
    let address = directory::resolve_to_foreign(deps.storage, &local_contract)?;
    Ok(ResolvedAddressResponse { address })
}

/// Confirmed counterpart of `from`, falling back to pending submissions.
pub fn query_contract_mapping(
    deps: Deps,
    from: ChainAddress,
) -> StdResult<ContractMappingResponse> {
    if let Some(mapped) = directory::may_resolve(deps.storage, &from)? {
        return Ok(ContractMappingResponse {
            mapped_address: Some(mapped),
            is_pending: false,
        });
    }

    let is_pending = pending::find_by_contract(deps.storage, &from)?.is_some();
    Ok(ContractMappingResponse {
        mapped_address: None,
        is_pending,
    })
}

// ============================================================================
// Gateway Queries
// ============================================================================

pub fn query_state(deps: Deps) -> StdResult<StateResponse> {
    let state = GATEWAY_STATE.load(deps.storage)?;
    Ok(StateResponse {
        next_contract_mapping_id: state.next_contract_mapping_id,
    })
}

pub fn query_config(deps: Deps) -> StdResult<ConfigResponse> {
    let config = CONFIG.load(deps.storage)?;
    Ok(ConfigResponse {
        owner: config.owner,
    })
}

pub fn query_oracles(deps: Deps) -> StdResult<OraclesResponse> {
    let oracles = holders(deps.storage, VERIFY_CREATORS_PERM, ORACLE_ROLE)?;
    Ok(OraclesResponse { oracles })
}

pub fn query_is_oracle(deps: Deps, address: String) -> StdResult<IsOracleResponse> {
    let addr = deps.api.addr_validate(&address)?;
    let is_oracle = has_permission(deps.storage, &addr, VERIFY_CREATORS_PERM, &[ORACLE_ROLE])?;
    Ok(IsOracleResponse { is_oracle })
}
