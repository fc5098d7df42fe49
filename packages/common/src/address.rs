//! Chain-qualified addresses.
//!
//! An address is only meaningful together with the chain it lives on, so
//! identity is the pair `(chain_id, local)`. There is no implicit default
//! chain: every address carries its chain identifier explicitly.

use std::fmt;

use cosmwasm_schema::cw_serde;
use cosmwasm_std::{Binary, StdError, StdResult};

/// Address of an account or contract on a specific chain
#[cw_serde]
#[derive(Eq)]
pub struct ChainAddress {
    /// Chain identifier (e.g. "eth", "default")
    pub chain_id: String,
    /// Chain-local address bytes (20 bytes for EVM chains)
    pub local: Binary,
}

impl ChainAddress {
    pub fn new(chain_id: impl Into<String>, local: impl Into<Binary>) -> Self {
        Self {
            chain_id: chain_id.into(),
            local: local.into(),
        }
    }

    /// Parse an EVM address from a hex string (with or without 0x prefix)
    pub fn from_evm_hex(chain_id: impl Into<String>, hex_addr: &str) -> StdResult<Self> {
        let stripped = hex_addr.strip_prefix("0x").unwrap_or(hex_addr);
        let bytes = hex::decode(stripped)
            .map_err(|e| StdError::generic_err(format!("Invalid hex address: {}", e)))?;
        if bytes.len() != 20 {
            return Err(StdError::generic_err(format!(
                "Invalid EVM address length: expected 20 bytes, got {}",
                bytes.len()
            )));
        }
        Ok(Self::new(chain_id, bytes))
    }

    /// Both the chain identifier and the local address are present
    pub fn is_complete(&self) -> bool {
        !self.chain_id.is_empty() && !self.local.is_empty()
    }

    /// Lowercase 0x-prefixed hex of the local address
    pub fn local_hex(&self) -> String {
        format!("0x{}", hex::encode(self.local.as_slice()))
    }
}

impl fmt::Display for ChainAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.chain_id, self.local_hex())
    }
}
