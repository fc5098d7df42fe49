//! Hash computation for contract mapping signatures
//!
//! The creator of a foreign contract authorizes a mapping by signing the
//! packed pair of addresses, matching Solidity's
//! `keccak256(abi.encodePacked(address foreignContract, address localContract))`.
//!
//! # Byte Layout (40 bytes total)
//! - Bytes 0-19:  foreign contract address (20 bytes)
//! - Bytes 20-39: local contract address (20 bytes)

use tiny_keccak::{Hasher, Keccak};

/// Prefix geth's `personal_sign` / `eth_sign` prepend to a 32-byte message
pub const ETH_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// Prefix Trezor firmware prepends to a 32-byte message (length as a raw byte)
pub const TREZOR_SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n\x20";

/// Compute keccak256 hash of arbitrary data
pub fn keccak256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Keccak::v256();
    hasher.update(data);
    let mut output = [0u8; 32];
    hasher.finalize(&mut output);
    output
}

/// Convert arbitrary bytes to a 20-byte EVM address
///
/// Longer input keeps its last 20 bytes, shorter input is left-padded with
/// zeros (same as go-ethereum's `BytesToAddress`).
pub fn to_evm_address(bytes: &[u8]) -> [u8; 20] {
    let mut result = [0u8; 20];
    let src = if bytes.len() > 20 {
        &bytes[bytes.len() - 20..]
    } else {
        bytes
    };
    result[20 - src.len()..].copy_from_slice(src);
    result
}

/// Compute the hash the foreign contract creator signs to authorize a mapping
pub fn contract_mapping_hash(foreign_local: &[u8], local_local: &[u8]) -> [u8; 32] {
    let mut data = [0u8; 40];
    data[0..20].copy_from_slice(&to_evm_address(foreign_local));
    data[20..40].copy_from_slice(&to_evm_address(local_local));
    keccak256(&data)
}

/// Hash a 32-byte message under a signed-message prefix
pub fn prefixed_message_hash(prefix: &[u8], hash: &[u8; 32]) -> [u8; 32] {
    let mut data = Vec::with_capacity(prefix.len() + 32);
    data.extend_from_slice(prefix);
    data.extend_from_slice(hash);
    keccak256(&data)
}

/// Derive the EVM address of an uncompressed secp256k1 public key
///
/// Takes the 65-byte SEC1 encoding (`0x04 || x || y`) and returns the last
/// 20 bytes of `keccak256(x || y)`.
pub fn evm_address_from_pubkey(pubkey: &[u8]) -> Option<[u8; 20]> {
    if pubkey.len() != 65 || pubkey[0] != 0x04 {
        return None;
    }
    let hash = keccak256(&pubkey[1..]);
    let mut address = [0u8; 20];
    address.copy_from_slice(&hash[12..]);
    Some(address)
}

/// Convert 32-byte hash to hex string (for attributes/logging)
pub fn bytes32_to_hex(bytes: &[u8; 32]) -> String {
    format!("0x{}", hex::encode(bytes))
}
