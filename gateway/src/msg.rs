//! Message types for the contract mapping gateway
//!
//! This module defines all messages for instantiation, execution, and queries.

use common::ChainAddress;
use cosmwasm_schema::{cw_serde, QueryResponses};
use cosmwasm_std::{Addr, Binary};

// ============================================================================
// Instantiate & Migrate
// ============================================================================

/// Migrate message
#[cw_serde]
pub struct MigrateMsg {}

/// Instantiate message
#[cw_serde]
pub struct InstantiateMsg {
    /// Owner address for gateway management
    pub owner: String,
    /// Addresses granted the oracle verify-creators permission
    pub oracles: Vec<String>,
}

// ============================================================================
// Execute Messages
// ============================================================================

/// An oracle's report of who created a foreign contract
#[cw_serde]
pub struct VerifiedContractCreator {
    /// Pending mapping the report is about
    pub contract_mapping_id: u64,
    /// Creator observed on the foreign chain
    pub creator: ChainAddress,
    /// Contract the creator deployed
    pub contract: ChainAddress,
}

/// Execute messages
#[cw_serde]
pub enum ExecuteMsg {
    // ========================================================================
    // Contract Mapping Flow
    // ========================================================================
    /// Submit a mapping between a foreign contract and a local contract
    ///
    /// Authorization: Anyone
    ///
    /// The foreign contract's creator authorizes the mapping by signing
    /// `keccak256(foreign || local)`; the recovered signer is recorded and
    /// must later be confirmed by an oracle. All fields are required.
    AddContractMapping {
        foreign_contract: Option<ChainAddress>,
        local_contract: Option<ChainAddress>,
        /// 66-byte typed signature `[scheme][r][s][v]`
        foreign_contract_creator_sig: Option<Binary>,
        /// Hash of the tx that deployed the foreign contract
        foreign_contract_tx_hash: Option<Binary>,
    },

    /// Report the actual creators of pending foreign contracts
    ///
    /// Authorization: Oracle only (verify-creators permission)
    ///
    /// Reports are processed in order. Every referenced pending mapping is
    /// consumed; only reports matching the recorded creator and contract
    /// commit a mapping. Unknown ids are skipped.
    VerifyContractCreators { creators: Vec<VerifiedContractCreator> },

    // ========================================================================
    // Owner Operations
    // ========================================================================
    /// Map two contracts directly, without a creator signature
    ///
    /// Authorization: Owner only
    AddAuthorizedContractMapping {
        foreign_contract: ChainAddress,
        local_contract: ChainAddress,
    },

    /// Grant the oracle verify-creators permission
    ///
    /// Authorization: Owner only
    AddOracle { address: String },

    /// Revoke the oracle verify-creators permission
    ///
    /// Authorization: Owner only
    RemoveOracle { address: String },

    /// Hand the gateway over to a new owner
    ///
    /// Authorization: Owner only
    UpdateOwner { owner: String },
}

// ============================================================================
// Query Messages
// ============================================================================

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Pending mappings awaiting oracle confirmation
    #[returns(UnverifiedContractCreatorsResponse)]
    UnverifiedContractCreators {},

    /// Local contract mapped to a foreign contract
    #[returns(ResolvedAddressResponse)]
    ResolveToLocal { foreign_contract: ChainAddress },

    /// Foreign contract mapped to a local contract
    #[returns(ResolvedAddressResponse)]
    ResolveToForeign { local_contract: ChainAddress },

    /// Confirmed counterpart of an address, or whether a submission is pending
    #[returns(ContractMappingResponse)]
    ContractMapping { from: ChainAddress },

    #[returns(StateResponse)]
    State {},

    #[returns(ConfigResponse)]
    Config {},

    #[returns(OraclesResponse)]
    Oracles {},

    #[returns(IsOracleResponse)]
    IsOracle { address: String },
}

// ============================================================================
// Query Responses
// ============================================================================

#[cw_serde]
pub struct UnverifiedContractCreator {
    pub contract_mapping_id: u64,
    pub contract_tx_hash: Binary,
}

#[cw_serde]
pub struct UnverifiedContractCreatorsResponse {
    pub creators: Vec<UnverifiedContractCreator>,
}

#[cw_serde]
pub struct ResolvedAddressResponse {
    pub address: ChainAddress,
}

#[cw_serde]
pub struct ContractMappingResponse {
    /// Confirmed counterpart, if any
    pub mapped_address: Option<ChainAddress>,
    /// A submission involving the address awaits confirmation
    pub is_pending: bool,
}

#[cw_serde]
pub struct StateResponse {
    pub next_contract_mapping_id: u64,
}

#[cw_serde]
pub struct ConfigResponse {
    pub owner: Addr,
}

#[cw_serde]
pub struct OraclesResponse {
    pub oracles: Vec<Addr>,
}

#[cw_serde]
pub struct IsOracleResponse {
    pub is_oracle: bool,
}
