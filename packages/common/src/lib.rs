//! Common - Shared Types for the Contract Mapping Gateway
//!
//! This package provides the chain-qualified address type used by the
//! gateway contract, its messages, and off-chain oracle clients.

pub mod address;

pub use address::ChainAddress;
