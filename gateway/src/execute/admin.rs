//! Owner operations handlers.
//!
//! This module handles:
//! - Oracle management (add/remove)
//! - Owner transfer
//! - Authorized contract mappings (bypass the creator signature round trip)

use common::ChainAddress;
use cosmwasm_std::{DepsMut, MessageInfo, Response, Storage};

use crate::directory;
use crate::error::ContractError;
use crate::permission::{grant_permission, revoke_permission};
use crate::state::{Config, CONFIG, ORACLE_ROLE, VERIFY_CREATORS_PERM};

use super::validate_contract_pair;

fn ensure_owner(storage: &dyn Storage, info: &MessageInfo) -> Result<Config, ContractError> {
    let config = CONFIG.load(storage)?;
    if info.sender != config.owner {
        return Err(ContractError::Unauthorized);
    }
    Ok(config)
}

// ============================================================================
// Oracle Management
// ============================================================================

/// Grant an address the oracle verify-creators permission.
pub fn execute_add_oracle(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let oracle = deps.api.addr_validate(&address)?;
    grant_permission(deps.storage, &oracle, VERIFY_CREATORS_PERM, ORACLE_ROLE)?;

    Ok(Response::new()
        .add_attribute("method", "add_oracle")
        .add_attribute("oracle", oracle))
}

/// Revoke the oracle verify-creators permission.
pub fn execute_remove_oracle(
    deps: DepsMut,
    info: MessageInfo,
    address: String,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    let oracle = deps.api.addr_validate(&address)?;
    revoke_permission(deps.storage, &oracle, VERIFY_CREATORS_PERM, ORACLE_ROLE);

    Ok(Response::new()
        .add_attribute("method", "remove_oracle")
        .add_attribute("oracle", oracle))
}

// ============================================================================
// Owner Transfer
// ============================================================================

pub fn execute_update_owner(
    deps: DepsMut,
    info: MessageInfo,
    owner: String,
) -> Result<Response, ContractError> {
    let mut config = ensure_owner(deps.storage, &info)?;

    config.owner = deps.api.addr_validate(&owner)?;
    CONFIG.save(deps.storage, &config)?;

    Ok(Response::new()
        .add_attribute("method", "update_owner")
        .add_attribute("previous_owner", info.sender)
        .add_attribute("owner", config.owner))
}

// ============================================================================
// Authorized Mappings
// ============================================================================

/// Map two contracts directly (owner only, no creator signature).
pub fn execute_add_authorized_contract_mapping(
    deps: DepsMut,
    info: MessageInfo,
    foreign_contract: ChainAddress,
    local_contract: ChainAddress,
) -> Result<Response, ContractError> {
    ensure_owner(deps.storage, &info)?;

    validate_contract_pair(&foreign_contract, &local_contract)?;
    directory::record(deps.storage, &foreign_contract, &local_contract)?;

    Ok(Response::new()
        .add_attribute("method", "add_authorized_contract_mapping")
        .add_attribute("foreign_contract", foreign_contract.to_string())
        .add_attribute("local_contract", local_contract.to_string()))
}
