//! Typed signature recovery
//!
//! A typed signature is a 66-byte secp256k1 signature prefixed by a scheme
//! tag that says which digest the signer actually signed:
//!
//! ```text
//! | scheme (1) | r (32) | s (32) | v (1) |
//! ```
//!
//! `v` may be given as a raw recovery id (0/1) or in Ethereum form (27/28).

use common::ChainAddress;
use cosmwasm_std::Api;

use crate::error::ContractError;
use crate::hash::{
    contract_mapping_hash, evm_address_from_pubkey, prefixed_message_hash,
    ETH_SIGNED_MESSAGE_PREFIX, TREZOR_SIGNED_MESSAGE_PREFIX,
};

/// Length of a typed signature in bytes
pub const TYPED_SIGNATURE_LENGTH: usize = 66;

/// Signing schemes a typed signature can declare
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignatureScheme {
    /// Signature over the raw hash
    Eip712,
    /// `eth_sign` style: hash prefixed with "\x19Ethereum Signed Message:\n32"
    Geth,
    /// Trezor style: length in the prefix is a raw byte (0x20)
    Trezor,
}

impl SignatureScheme {
    pub fn tag(self) -> u8 {
        match self {
            SignatureScheme::Eip712 => 0,
            SignatureScheme::Geth => 1,
            SignatureScheme::Trezor => 2,
        }
    }

    /// Digest that was signed under this scheme for the given message hash
    pub fn digest(self, hash: &[u8; 32]) -> [u8; 32] {
        match self {
            SignatureScheme::Eip712 => *hash,
            SignatureScheme::Geth => prefixed_message_hash(ETH_SIGNED_MESSAGE_PREFIX, hash),
            SignatureScheme::Trezor => prefixed_message_hash(TREZOR_SIGNED_MESSAGE_PREFIX, hash),
        }
    }
}

impl TryFrom<u8> for SignatureScheme {
    type Error = ContractError;

    fn try_from(tag: u8) -> Result<Self, Self::Error> {
        match tag {
            0 => Ok(SignatureScheme::Eip712),
            1 => Ok(SignatureScheme::Geth),
            2 => Ok(SignatureScheme::Trezor),
            other => Err(ContractError::signature(format!(
                "unsupported signature scheme {}",
                other
            ))),
        }
    }
}

/// Parsed typed signature
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedSignature {
    pub scheme: SignatureScheme,
    /// r || s
    pub signature: [u8; 64],
    /// Recovery id normalized to 0 or 1
    pub recovery_param: u8,
}

impl TypedSignature {
    pub fn parse(bytes: &[u8]) -> Result<Self, ContractError> {
        if bytes.len() != TYPED_SIGNATURE_LENGTH {
            return Err(ContractError::signature(format!(
                "expected {} bytes, got {}",
                TYPED_SIGNATURE_LENGTH,
                bytes.len()
            )));
        }

        let scheme = SignatureScheme::try_from(bytes[0])?;

        let mut signature = [0u8; 64];
        signature.copy_from_slice(&bytes[1..65]);

        let recovery_param = match bytes[65] {
            0 | 1 => bytes[65],
            27 | 28 => bytes[65] - 27,
            v => {
                return Err(ContractError::signature(format!(
                    "invalid recovery byte {}",
                    v
                )))
            }
        };

        Ok(Self {
            scheme,
            signature,
            recovery_param,
        })
    }

    /// Encode back to the 66-byte wire form (v in Ethereum form)
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(TYPED_SIGNATURE_LENGTH);
        out.push(self.scheme.tag());
        out.extend_from_slice(&self.signature);
        out.push(self.recovery_param + 27);
        out
    }

    /// Recover the EVM address that signed `hash` under this signature's scheme
    pub fn recover_signer(&self, api: &dyn Api, hash: &[u8; 32]) -> Result<[u8; 20], ContractError> {
        let digest = self.scheme.digest(hash);
        let pubkey = api
            .secp256k1_recover_pubkey(&digest, &self.signature, self.recovery_param)
            .map_err(|e| ContractError::signature(e.to_string()))?;
        evm_address_from_pubkey(&pubkey)
            .ok_or_else(|| ContractError::signature("recovered key is not an uncompressed point"))
    }
}

/// Recover the address that authorized mapping `foreign` to `local`
///
/// The returned address lives on the foreign chain: the signer claims to be
/// the creator of the foreign contract. Whether that claim is true is for the
/// oracles to establish from the deployment tx.
pub fn recover_creator(
    api: &dyn Api,
    foreign: &ChainAddress,
    local: &ChainAddress,
    signature: &[u8],
) -> Result<ChainAddress, ContractError> {
    let typed = TypedSignature::parse(signature)?;
    let hash = contract_mapping_hash(foreign.local.as_slice(), local.local.as_slice());
    let signer = typed.recover_signer(api, &hash)?;
    Ok(ChainAddress::new(foreign.chain_id.clone(), signer.to_vec()))
}
