//! Shared setup for gateway integration tests.

#![allow(dead_code)]

use common::ChainAddress;
use cosmwasm_std::{Addr, Binary, Empty};
use cw_multi_test::{App, AppResponse, Contract, ContractWrapper, Executor};
use k256::ecdsa::SigningKey;

use gateway::hash::{contract_mapping_hash, evm_address_from_pubkey};
use gateway::msg::{
    ExecuteMsg, InstantiateMsg, QueryMsg, StateResponse, UnverifiedContractCreator,
    UnverifiedContractCreatorsResponse, VerifiedContractCreator,
};
use gateway::{SignatureScheme, TypedSignature};

pub const FOREIGN_CHAIN: &str = "eth";
pub const LOCAL_CHAIN: &str = "default";

pub fn contract_gateway() -> Box<dyn Contract<Empty>> {
    let contract = ContractWrapper::new(
        gateway::contract::execute,
        gateway::contract::instantiate,
        gateway::contract::query,
    );
    Box::new(contract)
}

pub struct Suite {
    pub app: App,
    pub gateway: Addr,
    pub owner: Addr,
    pub oracle: Addr,
    pub user: Addr,
}

pub fn setup() -> Suite {
    let mut app = App::default();

    let owner = Addr::unchecked("terra1owner");
    let oracle = Addr::unchecked("terra1oracle");
    let user = Addr::unchecked("terra1user");

    let code_id = app.store_code(contract_gateway());
    let gateway = app
        .instantiate_contract(
            code_id,
            owner.clone(),
            &InstantiateMsg {
                owner: owner.to_string(),
                oracles: vec![oracle.to_string()],
            },
            &[],
            "contract-mapping-gateway",
            Some(owner.to_string()),
        )
        .unwrap();

    Suite {
        app,
        gateway,
        owner,
        oracle,
        user,
    }
}

// ============================================================================
// Addresses & Signatures
// ============================================================================

pub fn foreign_contract(byte: u8) -> ChainAddress {
    ChainAddress::new(FOREIGN_CHAIN, vec![byte; 20])
}

pub fn local_contract(byte: u8) -> ChainAddress {
    ChainAddress::new(LOCAL_CHAIN, vec![byte; 20])
}

pub fn creator_key(seed: u8) -> SigningKey {
    SigningKey::from_slice(&[seed; 32]).unwrap()
}

/// EVM address of a signing key, on the foreign chain
pub fn creator_address(key: &SigningKey) -> ChainAddress {
    let point = key.verifying_key().to_encoded_point(false);
    let address = evm_address_from_pubkey(point.as_bytes()).unwrap();
    ChainAddress::new(FOREIGN_CHAIN, address.to_vec())
}

/// Typed signature by `key` authorizing `foreign` -> `local`
pub fn sign_mapping(
    key: &SigningKey,
    scheme: SignatureScheme,
    foreign: &ChainAddress,
    local: &ChainAddress,
) -> Binary {
    let hash = contract_mapping_hash(foreign.local.as_slice(), local.local.as_slice());
    let digest = scheme.digest(&hash);
    let (sig, recid) = key.sign_prehash_recoverable(&digest).unwrap();

    let mut signature = [0u8; 64];
    signature.copy_from_slice(&sig.to_bytes());
    let typed = TypedSignature {
        scheme,
        signature,
        recovery_param: recid.to_byte(),
    };
    Binary::from(typed.to_bytes())
}

// ============================================================================
// Messages
// ============================================================================

impl Suite {
    /// Submit a mapping; error is the root cause message
    pub fn submit(
        &mut self,
        foreign: &ChainAddress,
        local: &ChainAddress,
        sig: Binary,
        tx_hash: &[u8],
    ) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                self.user.clone(),
                self.gateway.clone(),
                &ExecuteMsg::AddContractMapping {
                    foreign_contract: Some(foreign.clone()),
                    local_contract: Some(local.clone()),
                    foreign_contract_creator_sig: Some(sig),
                    foreign_contract_tx_hash: Some(Binary::from(tx_hash.to_vec())),
                },
                &[],
            )
            .map_err(|e| e.root_cause().to_string())
    }

    /// Submit a mapping signed by `key` with the raw hash scheme
    pub fn submit_signed(
        &mut self,
        key: &SigningKey,
        foreign: &ChainAddress,
        local: &ChainAddress,
        tx_hash: &[u8],
    ) -> Result<AppResponse, String> {
        let sig = sign_mapping(key, SignatureScheme::Eip712, foreign, local);
        self.submit(foreign, local, sig, tx_hash)
    }

    pub fn verify(
        &mut self,
        sender: &Addr,
        creators: Vec<VerifiedContractCreator>,
    ) -> Result<AppResponse, String> {
        self.app
            .execute_contract(
                sender.clone(),
                self.gateway.clone(),
                &ExecuteMsg::VerifyContractCreators { creators },
                &[],
            )
            .map_err(|e| e.root_cause().to_string())
    }

    pub fn execute_as(&mut self, sender: &Addr, msg: &ExecuteMsg) -> Result<AppResponse, String> {
        self.app
            .execute_contract(sender.clone(), self.gateway.clone(), msg, &[])
            .map_err(|e| e.root_cause().to_string())
    }

    pub fn unverified(&self) -> Vec<UnverifiedContractCreator> {
        let res: UnverifiedContractCreatorsResponse = self
            .app
            .wrap()
            .query_wasm_smart(
                self.gateway.clone(),
                &QueryMsg::UnverifiedContractCreators {},
            )
            .unwrap();
        res.creators
    }

    pub fn next_mapping_id(&self) -> u64 {
        let res: StateResponse = self
            .app
            .wrap()
            .query_wasm_smart(self.gateway.clone(), &QueryMsg::State {})
            .unwrap();
        res.next_contract_mapping_id
    }

    pub fn query<T: serde::de::DeserializeOwned>(&self, msg: &QueryMsg) -> Result<T, String> {
        self.app
            .wrap()
            .query_wasm_smart(self.gateway.clone(), msg)
            .map_err(|e| e.to_string())
    }
}

pub fn claim(id: u64, creator: &ChainAddress, contract: &ChainAddress) -> VerifiedContractCreator {
    VerifiedContractCreator {
        contract_mapping_id: id,
        creator: creator.clone(),
        contract: contract.clone(),
    }
}

/// Value of `key` on the first wasm event of type `ty` (without the wasm- prefix)
pub fn event_attr(res: &AppResponse, ty: &str, key: &str) -> Option<String> {
    let full_ty = format!("wasm-{}", ty);
    res.events
        .iter()
        .filter(|e| e.ty == full_ty)
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}

pub fn count_events(res: &AppResponse, ty: &str) -> usize {
    let full_ty = format!("wasm-{}", ty);
    res.events.iter().filter(|e| e.ty == full_ty).count()
}

pub fn wasm_attr(res: &AppResponse, key: &str) -> Option<String> {
    res.events
        .iter()
        .filter(|e| e.ty == "wasm")
        .flat_map(|e| e.attributes.iter())
        .find(|a| a.key == key)
        .map(|a| a.value.clone())
}
