//! Contract Mapping Gateway - Foreign/Local Contract Bindings
//!
//! This contract binds a contract deployed on a foreign (EVM) chain to its
//! counterpart on this chain, so bridged transfers and calls can be routed to
//! the right target.
//!
//! # Mapping Flow (Submit / Confirm)
//! 1. The foreign contract's creator signs `(foreign, local)` off-chain
//! 2. Anyone calls `AddContractMapping` with the signature and the creation
//!    tx hash; the recovered signer is stored as a pending mapping
//! 3. Oracles poll `UnverifiedContractCreators`, look up the tx hash on the
//!    foreign chain, and report the real creator via `VerifyContractCreators`
//! 4. A report that matches the pending record on every field commits the
//!    bidirectional mapping; any report consumes the pending record
//!
//! # Security
//! - Creator identity only ever comes from signature recovery
//! - Confirmation requires the `verify-creators` permission under the
//!   `oracle` role
//! - Pending records are single-use tickets
//! - Confirmed mappings are never overwritten

pub mod contract;
pub mod directory;
pub mod error;
mod execute;
pub mod hash;
pub mod msg;
pub mod pending;
pub mod permission;
mod query;
pub mod signature;
pub mod state;

pub use crate::error::ContractError;
pub use crate::hash::{contract_mapping_hash, keccak256};
pub use crate::signature::{recover_creator, SignatureScheme, TypedSignature};
