//! Confirmed contract mapping directory
//!
//! Every confirmed mapping is stored twice, once keyed by each side, so
//! routing can resolve in either direction with a single read. Entries are
//! permanent: there is no update or delete path.

use std::any::type_name;

use common::ChainAddress;
use cosmwasm_std::{StdError, StdResult, Storage};

use crate::error::ContractError;
use crate::state::{contract_address_key, ContractAddressMapping, CONTRACT_ADDRESS_MAPPINGS};

fn may_load_mapping(
    storage: &dyn Storage,
    addr: &ChainAddress,
) -> StdResult<Option<ContractAddressMapping>> {
    match contract_address_key(addr) {
        Some(key) => CONTRACT_ADDRESS_MAPPINGS.may_load(storage, key),
        None => Ok(None),
    }
}

/// Counterpart of `addr`; `StdError::NotFound` when it has none
pub fn resolve(storage: &dyn Storage, addr: &ChainAddress) -> StdResult<ChainAddress> {
    may_load_mapping(storage, addr)?
        .map(|mapping| mapping.to)
        .ok_or_else(|| StdError::not_found(type_name::<ContractAddressMapping>()))
}

pub fn may_resolve(storage: &dyn Storage, addr: &ChainAddress) -> StdResult<Option<ChainAddress>> {
    Ok(may_load_mapping(storage, addr)?.map(|mapping| mapping.to))
}

/// Local contract mapped to a foreign contract
pub fn resolve_to_local(storage: &dyn Storage, foreign: &ChainAddress) -> StdResult<ChainAddress> {
    resolve(storage, foreign)
}

/// Foreign contract mapped to a local contract
pub fn resolve_to_foreign(storage: &dyn Storage, local: &ChainAddress) -> StdResult<ChainAddress> {
    resolve(storage, local)
}

/// Entries are decoded, so an unreadable record is an error rather than "mapped"
pub fn is_mapped(storage: &dyn Storage, addr: &ChainAddress) -> StdResult<bool> {
    Ok(may_load_mapping(storage, addr)?.is_some())
}

/// First side of the pair that already has a mapping
pub fn existing_side<'a>(
    storage: &dyn Storage,
    foreign: &'a ChainAddress,
    local: &'a ChainAddress,
) -> StdResult<Option<&'a ChainAddress>> {
    for addr in [foreign, local] {
        if is_mapped(storage, addr)? {
            return Ok(Some(addr));
        }
    }
    Ok(None)
}

/// Write both directions of a confirmed mapping.
///
/// Fails without writing if either side is already mapped or cannot be keyed.
pub fn record(
    storage: &mut dyn Storage,
    foreign: &ChainAddress,
    local: &ChainAddress,
) -> Result<(), ContractError> {
    if let Some(addr) = existing_side(storage, foreign, local)? {
        return Err(ContractError::ContractMappingExists {
            address: addr.to_string(),
        });
    }

    let (Some(foreign_key), Some(local_key)) =
        (contract_address_key(foreign), contract_address_key(local))
    else {
        return Err(ContractError::invalid_request(
            "chain id is too long to be indexed",
        ));
    };

    CONTRACT_ADDRESS_MAPPINGS.save(
        storage,
        foreign_key,
        &ContractAddressMapping {
            from: foreign.clone(),
            to: local.clone(),
        },
    )?;
    CONTRACT_ADDRESS_MAPPINGS.save(
        storage,
        local_key,
        &ContractAddressMapping {
            from: local.clone(),
            to: foreign.clone(),
        },
    )?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::mock_dependencies;
    use cosmwasm_std::StdError;

    fn foreign() -> ChainAddress {
        ChainAddress::new("eth", vec![0xAA; 20])
    }

    fn local() -> ChainAddress {
        ChainAddress::new("default", vec![0xBB; 20])
    }

    #[test]
    fn test_record_resolves_both_directions() {
        let mut deps = mock_dependencies();
        record(&mut deps.storage, &foreign(), &local()).unwrap();

        assert_eq!(resolve_to_local(&deps.storage, &foreign()).unwrap(), local());
        assert_eq!(resolve_to_foreign(&deps.storage, &local()).unwrap(), foreign());

        // Round trip returns the original address
        let there = resolve_to_local(&deps.storage, &foreign()).unwrap();
        let back = resolve_to_foreign(&deps.storage, &there).unwrap();
        assert_eq!(back, foreign());
    }

    #[test]
    fn test_unmapped_is_not_found() {
        let deps = mock_dependencies();
        let err = resolve(&deps.storage, &foreign()).unwrap_err();
        assert!(matches!(err, StdError::NotFound { .. }));
        assert_eq!(may_resolve(&deps.storage, &foreign()).unwrap(), None);
    }

    #[test]
    fn test_chain_id_is_part_of_key() {
        let mut deps = mock_dependencies();
        record(&mut deps.storage, &foreign(), &local()).unwrap();

        // Same local bytes on another chain is a different address
        let other_chain = ChainAddress::new("bsc", vec![0xAA; 20]);
        assert!(!is_mapped(&deps.storage, &other_chain).unwrap());
        assert!(resolve(&deps.storage, &other_chain).is_err());
    }

    #[test]
    fn test_record_refuses_overwrite() {
        let mut deps = mock_dependencies();
        record(&mut deps.storage, &foreign(), &local()).unwrap();

        let other_local = ChainAddress::new("default", vec![0xCC; 20]);
        let err = record(&mut deps.storage, &foreign(), &other_local).unwrap_err();
        assert_eq!(
            err,
            ContractError::ContractMappingExists {
                address: foreign().to_string()
            }
        );

        // Neither the original nor the rejected pair changed
        assert_eq!(resolve(&deps.storage, &foreign()).unwrap(), local());
        assert!(!is_mapped(&deps.storage, &other_local).unwrap());
    }

    #[test]
    fn test_unindexable_chain_id_is_not_found() {
        let mut deps = mock_dependencies();
        let oversized = ChainAddress::new("e".repeat(70_000), vec![0xAA; 20]);

        let err = resolve(&deps.storage, &oversized).unwrap_err();
        assert!(matches!(err, StdError::NotFound { .. }));
        assert_eq!(may_resolve(&deps.storage, &oversized).unwrap(), None);
        assert!(!is_mapped(&deps.storage, &oversized).unwrap());
        assert_eq!(
            existing_side(&deps.storage, &oversized, &local()).unwrap(),
            None
        );

        let err = record(&mut deps.storage, &oversized, &local()).unwrap_err();
        assert!(matches!(err, ContractError::InvalidRequest { .. }));
        assert!(!is_mapped(&deps.storage, &local()).unwrap());
    }

    #[test]
    fn test_corrupt_entry_is_an_error() {
        let mut deps = mock_dependencies();
        let binding = local();
        let key = contract_address_key(&binding).unwrap();
        deps.storage
            .set(&CONTRACT_ADDRESS_MAPPINGS.key(key), b"not a mapping");

        assert!(matches!(
            is_mapped(&deps.storage, &local()).unwrap_err(),
            StdError::ParseErr { .. }
        ));
        assert!(existing_side(&deps.storage, &foreign(), &local()).is_err());

        // Nothing is written when the pre-check cannot read the directory
        assert!(record(&mut deps.storage, &foreign(), &local()).is_err());
        assert_eq!(may_resolve(&deps.storage, &foreign()).unwrap(), None);
    }
}
