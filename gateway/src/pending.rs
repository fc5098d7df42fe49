//! Pending contract mapping store
//!
//! Submitted mappings wait here, keyed by their allocated id, until an oracle
//! reports on them. Each entry is a single-use ticket: `take` removes it
//! whatever the outcome of the report.

use common::ChainAddress;
use cosmwasm_std::{Binary, Order, StdError, StdResult, Storage};

use crate::state::{GatewayState, PendingContractMapping, GATEWAY_STATE, PENDING_CONTRACT_MAPPINGS};

/// A mapping about to be submitted, before an id is allocated
#[derive(Debug, Clone, PartialEq)]
pub struct NewContractMapping {
    pub foreign_contract: ChainAddress,
    pub local_contract: ChainAddress,
    /// Must come from signature recovery
    pub foreign_contract_creator: ChainAddress,
    pub foreign_contract_tx_hash: Binary,
}

/// Store a new pending mapping under the next id and persist the bumped counter.
pub fn submit(
    storage: &mut dyn Storage,
    state: &mut GatewayState,
    mapping: NewContractMapping,
) -> StdResult<u64> {
    let id = state.next_contract_mapping_id;
    let next_id = id
        .checked_add(1)
        .ok_or_else(|| StdError::generic_err("contract mapping id space exhausted"))?;

    let pending = PendingContractMapping {
        id,
        foreign_contract: mapping.foreign_contract,
        local_contract: mapping.local_contract,
        foreign_contract_creator: mapping.foreign_contract_creator,
        foreign_contract_tx_hash: mapping.foreign_contract_tx_hash,
    };
    PENDING_CONTRACT_MAPPINGS.save(storage, id, &pending)?;

    state.next_contract_mapping_id = next_id;
    GATEWAY_STATE.save(storage, state)?;

    Ok(id)
}

/// All pending mappings, id-ascending.
///
/// A record that fails to decode fails the whole listing.
pub fn list(storage: &dyn Storage) -> StdResult<Vec<PendingContractMapping>> {
    PENDING_CONTRACT_MAPPINGS
        .range(storage, None, None, Order::Ascending)
        .map(|item| item.map(|(_, mapping)| mapping))
        .collect()
}

/// Remove and return the pending mapping with `id`, if there is one.
pub fn take(storage: &mut dyn Storage, id: u64) -> StdResult<Option<PendingContractMapping>> {
    let mapping = PENDING_CONTRACT_MAPPINGS.may_load(storage, id)?;
    PENDING_CONTRACT_MAPPINGS.remove(storage, id);
    Ok(mapping)
}

/// First pending mapping that involves `contract` on either side
pub fn find_by_contract(
    storage: &dyn Storage,
    contract: &ChainAddress,
) -> StdResult<Option<PendingContractMapping>> {
    for item in PENDING_CONTRACT_MAPPINGS.range(storage, None, None, Order::Ascending) {
        let (_, mapping) = item?;
        if &mapping.foreign_contract == contract || &mapping.local_contract == contract {
            return Ok(Some(mapping));
        }
    }
    Ok(None)
}
