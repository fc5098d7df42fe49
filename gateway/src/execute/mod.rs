//! Execute handlers for the contract mapping gateway.
//!
//! This module contains all execute message handlers, organized by category:
//! - `mapping` - AddContractMapping and VerifyContractCreators (submit/confirm)
//! - `admin` - Oracle management, owner transfer, and authorized mappings

mod admin;
mod mapping;

pub use admin::*;
pub use mapping::*;

use common::ChainAddress;

use crate::error::ContractError;
use crate::state::MAX_CHAIN_ID_LENGTH;

/// Checks shared by every path that creates a mapping between two contracts
pub(crate) fn validate_contract_pair(
    foreign: &ChainAddress,
    local: &ChainAddress,
) -> Result<(), ContractError> {
    if !foreign.is_complete() || !local.is_complete() {
        return Err(ContractError::invalid_request(
            "contract addresses must carry a chain id and a local address",
        ));
    }
    if [foreign, local]
        .iter()
        .any(|addr| addr.chain_id.len() > MAX_CHAIN_ID_LENGTH)
    {
        return Err(ContractError::invalid_request(format!(
            "chain id exceeds {} bytes",
            MAX_CHAIN_ID_LENGTH
        )));
    }
    if foreign == local {
        return Err(ContractError::invalid_request(
            "a contract cannot be mapped to itself",
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_contract_pair() {
        let foreign = ChainAddress::new("eth", vec![0xAA; 20]);
        let local = ChainAddress::new("default", vec![0xBB; 20]);
        assert!(validate_contract_pair(&foreign, &local).is_ok());

        let no_bytes = ChainAddress::new("default", Vec::<u8>::new());
        let no_chain = ChainAddress::new("", vec![0xBB; 20]);
        let at_bound = ChainAddress::new("c".repeat(MAX_CHAIN_ID_LENGTH), vec![0xBB; 20]);
        let past_bound = ChainAddress::new("c".repeat(MAX_CHAIN_ID_LENGTH + 1), vec![0xBB; 20]);

        assert!(validate_contract_pair(&foreign, &at_bound).is_ok());
        for bad in [&no_bytes, &no_chain, &past_bound, &foreign] {
            let err = validate_contract_pair(&foreign, bad).unwrap_err();
            assert!(matches!(err, ContractError::InvalidRequest { .. }));
        }
        let err = validate_contract_pair(&past_bound, &local).unwrap_err();
        assert!(matches!(err, ContractError::InvalidRequest { .. }));
    }
}
