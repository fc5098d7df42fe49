//! Contract mapping submit/confirm handlers.
//!
//! - `AddContractMapping` - record a creator-signed mapping as pending
//! - `VerifyContractCreators` - oracles confirm or reject pending mappings

use common::ChainAddress;
use cosmwasm_std::{Api, Binary, DepsMut, Event, MessageInfo, Response, Storage};

use crate::directory;
use crate::error::ContractError;
use crate::msg::VerifiedContractCreator;
use crate::pending::{self, NewContractMapping};
use crate::permission::has_permission;
use crate::signature::recover_creator;
use crate::state::{PendingContractMapping, GATEWAY_STATE, ORACLE_ROLE, VERIFY_CREATORS_PERM};

use super::validate_contract_pair;

// ============================================================================
// Submit
// ============================================================================

/// Submit a creator-signed contract mapping for oracle confirmation.
pub fn execute_add_contract_mapping(
    deps: DepsMut,
    foreign_contract: Option<ChainAddress>,
    local_contract: Option<ChainAddress>,
    foreign_contract_creator_sig: Option<Binary>,
    foreign_contract_tx_hash: Option<Binary>,
) -> Result<Response, ContractError> {
    let (foreign_contract, local_contract, creator_sig, tx_hash) = match (
        foreign_contract,
        local_contract,
        foreign_contract_creator_sig,
        foreign_contract_tx_hash,
    ) {
        (Some(foreign), Some(local), Some(sig), Some(tx_hash))
            if !sig.is_empty() && !tx_hash.is_empty() =>
        {
            (foreign, local, sig, tx_hash)
        }
        _ => {
            return Err(ContractError::invalid_request(
                "foreign_contract, local_contract, foreign_contract_creator_sig and \
                 foreign_contract_tx_hash are required",
            ))
        }
    };

    validate_contract_pair(&foreign_contract, &local_contract)?;

    if let Some(addr) =
        directory::existing_side(deps.storage, &foreign_contract, &local_contract)?
    {
        return Err(ContractError::ContractMappingExists {
            address: addr.to_string(),
        });
    }

    let mut state = GATEWAY_STATE.load(deps.storage)?;

    let creator = recover_creator(
        deps.api,
        &foreign_contract,
        &local_contract,
        creator_sig.as_slice(),
    )?;

    let id = pending::submit(
        deps.storage,
        &mut state,
        NewContractMapping {
            foreign_contract: foreign_contract.clone(),
            local_contract: local_contract.clone(),
            foreign_contract_creator: creator.clone(),
            foreign_contract_tx_hash: tx_hash.clone(),
        },
    )?;

    Ok(Response::new()
        .add_attribute("method", "add_contract_mapping")
        .add_attribute("contract_mapping_id", id.to_string())
        .add_attribute("foreign_contract", foreign_contract.to_string())
        .add_attribute("local_contract", local_contract.to_string())
        .add_attribute("foreign_contract_creator", creator.to_string())
        .add_attribute("foreign_contract_tx_hash", tx_hash.to_base64()))
}

// ============================================================================
// Confirm
// ============================================================================

/// Why a pending mapping was discarded instead of committed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    CreatorMismatch,
    ContractMismatch,
    AlreadyMapped,
}

impl RejectReason {
    pub fn as_str(&self) -> &'static str {
        match self {
            RejectReason::CreatorMismatch => "creator_mismatch",
            RejectReason::ContractMismatch => "contract_mismatch",
            RejectReason::AlreadyMapped => "already_mapped",
        }
    }
}

/// Result of checking one oracle report against its consumed pending mapping
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfirmationOutcome {
    Confirmed,
    Rejected(RejectReason),
}

/// Confirm the creators of pending contract mappings (oracle only).
pub fn execute_verify_contract_creators(
    deps: DepsMut,
    info: MessageInfo,
    creators: Vec<VerifiedContractCreator>,
) -> Result<Response, ContractError> {
    if !has_permission(
        deps.storage,
        &info.sender,
        VERIFY_CREATORS_PERM,
        &[ORACLE_ROLE],
    )? {
        return Err(ContractError::NotAuthorized);
    }

    if creators.is_empty() {
        return Err(ContractError::invalid_request(
            "no contract creators to verify",
        ));
    }

    let mut events = Vec::with_capacity(creators.len());
    let mut confirmed = 0u32;
    let mut rejected = 0u32;
    let mut skipped = 0u32;

    for claim in &creators {
        // Already processed, never submitted, or listed twice in this batch
        let mapping = match pending::take(deps.storage, claim.contract_mapping_id)? {
            Some(mapping) => mapping,
            None => {
                skipped += 1;
                continue;
            }
        };

        let outcome = confirm_contract_mapping(deps.storage, deps.api, &mapping, claim)?;
        match outcome {
            ConfirmationOutcome::Confirmed => {
                confirmed += 1;
                events.push(
                    Event::new("contract_mapping_confirmed")
                        .add_attribute("contract_mapping_id", mapping.id.to_string())
                        .add_attribute("foreign_contract", mapping.foreign_contract.to_string())
                        .add_attribute("local_contract", mapping.local_contract.to_string()),
                );
            }
            ConfirmationOutcome::Rejected(reason) => {
                rejected += 1;
                events.push(
                    Event::new("contract_mapping_rejected")
                        .add_attribute("contract_mapping_id", mapping.id.to_string())
                        .add_attribute("reason", reason.as_str())
                        .add_attribute(
                            "expected_creator",
                            mapping.foreign_contract_creator.to_string(),
                        )
                        .add_attribute("actual_creator", claim.creator.to_string())
                        .add_attribute("expected_contract", mapping.foreign_contract.to_string())
                        .add_attribute("actual_contract", claim.contract.to_string()),
                );
            }
        }
    }

    Ok(Response::new()
        .add_attribute("method", "verify_contract_creators")
        .add_attribute("oracle", info.sender)
        .add_attribute("confirmed", confirmed.to_string())
        .add_attribute("rejected", rejected.to_string())
        .add_attribute("skipped", skipped.to_string())
        .add_events(events))
}

/// Check an oracle report against a pending mapping that has already been
/// taken out of the pending store, committing the mapping on a full match.
///
/// A mismatch is a disagreeing or fraudulent report, not a fault: it is logged
/// and reported as `Rejected`. Only store failures are returned as errors.
pub fn confirm_contract_mapping(
    storage: &mut dyn Storage,
    api: &dyn Api,
    mapping: &PendingContractMapping,
    claim: &VerifiedContractCreator,
) -> Result<ConfirmationOutcome, ContractError> {
    let creator_matches = mapping.foreign_contract_creator.chain_id == claim.creator.chain_id
        && mapping.foreign_contract_creator.local == claim.creator.local;
    let contract_matches = mapping.foreign_contract.chain_id == claim.contract.chain_id
        && mapping.foreign_contract.local == claim.contract.local;

    let reason = if !creator_matches {
        Some(RejectReason::CreatorMismatch)
    } else if !contract_matches {
        Some(RejectReason::ContractMismatch)
    } else if directory::existing_side(storage, &mapping.foreign_contract, &mapping.local_contract)?
        .is_some()
    {
        // A competing submission for one of the contracts was confirmed first
        Some(RejectReason::AlreadyMapped)
    } else {
        None
    };

    if let Some(reason) = reason {
        api.debug(&format!(
            "[Contract Mapping] failed to verify foreign contract creator: id={} reason={} \
             expected-contract={} expected-creator={} actual-contract={} actual-creator={}",
            mapping.id,
            reason.as_str(),
            mapping.foreign_contract,
            mapping.foreign_contract_creator,
            claim.contract,
            claim.creator,
        ));
        return Ok(ConfirmationOutcome::Rejected(reason));
    }

    directory::record(storage, &mapping.foreign_contract, &mapping.local_contract)?;
    Ok(ConfirmationOutcome::Confirmed)
}
