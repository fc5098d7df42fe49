//! State definitions for the contract mapping gateway
//!
//! This module defines the persisted records and the storage namespaces for
//! pending submissions, confirmed mappings, and the gateway counter.

use common::ChainAddress;
use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Addr, Binary};
use cw_storage_plus::{Item, Map};

// ============================================================================
// Core Configuration
// ============================================================================

/// Contract configuration
#[cw_serde]
pub struct Config {
    /// Owner address; manages oracles and authorized mappings
    pub owner: Addr,
}

/// Gateway-wide mutable state
#[cw_serde]
pub struct GatewayState {
    /// Id handed to the next accepted contract mapping submission.
    /// Strictly increasing, never reused.
    pub next_contract_mapping_id: u64,
}

// ============================================================================
// Contract Mapping Records
// ============================================================================

/// A submitted, not yet confirmed contract mapping
#[cw_serde]
pub struct PendingContractMapping {
    /// Allocated mapping id
    pub id: u64,
    /// Contract on the foreign chain
    pub foreign_contract: ChainAddress,
    /// Contract on this chain
    pub local_contract: ChainAddress,
    /// Signer recovered from the creator signature, on the foreign chain
    pub foreign_contract_creator: ChainAddress,
    /// Hash of the tx that deployed the foreign contract
    pub foreign_contract_tx_hash: Binary,
}

/// A confirmed mapping, stored once per direction
#[cw_serde]
pub struct ContractAddressMapping {
    pub from: ChainAddress,
    pub to: ChainAddress,
}

// ============================================================================
// Constants
// ============================================================================

/// Contract name for cw2 migration info
pub const CONTRACT_NAME: &str = "crates.io:contract-mapping-gateway";

/// Contract version for cw2 migration info
pub const CONTRACT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Role held by oracles
pub const ORACLE_ROLE: &str = "oracle";

/// Permission required to confirm contract creators
pub const VERIFY_CREATORS_PERM: &str = "verify-creators";

/// Longest chain identifier a submitted contract address may carry
pub const MAX_CHAIN_ID_LENGTH: usize = 64;

// ============================================================================
// Storage
// ============================================================================

pub const CONFIG: Item<Config> = Item::new("config");

pub const GATEWAY_STATE: Item<GatewayState> = Item::new("gateway_state");

/// Pending mappings
/// Key: mapping id (u64, big-endian so iteration is id-ascending)
pub const PENDING_CONTRACT_MAPPINGS: Map<u64, PendingContractMapping> =
    Map::new("pending_contract_mappings");

/// Confirmed mappings, one entry per direction
/// Key: (chain_id, local address bytes)
pub const CONTRACT_ADDRESS_MAPPINGS: Map<(&str, &[u8]), ContractAddressMapping> =
    Map::new("contract_address_mappings");

/// Storage key of an address in `CONTRACT_ADDRESS_MAPPINGS`.
///
/// `None` when the chain id cannot be length-prefixed (over 0xFFFF bytes);
/// such an address can never have been recorded.
pub fn contract_address_key(addr: &ChainAddress) -> Option<(&str, &[u8])> {
    if addr.chain_id.len() > u16::MAX as usize {
        return None;
    }
    Some((addr.chain_id.as_str(), addr.local.as_slice()))
}
