//! Error types for the contract mapping gateway

use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    /// Store faults, decode faults of persisted records, and `NotFound`
    /// surfaced by resolve lookups
    #[error("{0}")]
    Std(#[from] StdError),

    // ========================================================================
    // Authorization Errors
    // ========================================================================

    #[error("Unauthorized: only owner can perform this action")]
    Unauthorized,

    #[error("Not authorized: caller lacks the oracle verify-creators permission")]
    NotAuthorized,

    // ========================================================================
    // Request Errors
    // ========================================================================

    #[error("Invalid request: {reason}")]
    InvalidRequest { reason: String },

    #[error("Signature recovery failed: {reason}")]
    SignatureRecoveryFailed { reason: String },

    // ========================================================================
    // Mapping Errors
    // ========================================================================

    #[error("Contract mapping already exists for {address}")]
    ContractMappingExists { address: String },
}

impl ContractError {
    pub(crate) fn invalid_request(reason: impl Into<String>) -> Self {
        ContractError::InvalidRequest {
            reason: reason.into(),
        }
    }

    pub(crate) fn signature(reason: impl Into<String>) -> Self {
        ContractError::SignatureRecoveryFailed {
            reason: reason.into(),
        }
    }
}
