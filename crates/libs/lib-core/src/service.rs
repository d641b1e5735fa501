//! # Service Traits
//!
//! Seams between the panel logic and its two external collaborators: the
//! vault backend ([`VaultApi`]) and the connected wallet ([`WalletSigner`]).
//! The web app implements them over `fetch` and EIP-1193; tests use in-memory
//! fakes.
//!
//! Both traits are `?Send` because browser futures are not `Send`.

use std::str::FromStr;

use alloy_primitives::{hex, Address, Bytes, U256};
use async_trait::async_trait;
use serde::Serialize;
use shared::dto::vault::{
    CalldataPayload, CreateTransactionRequest, PositionRequest, SlippageRequest, Stablecoin,
};

use crate::erc20;
use crate::error::{AppError, Result};
use crate::transfer::Direction;

/// Backend endpoint paths, relative to a deployment base URL.
pub mod endpoints {
    pub const POSITION: &str = "/position";
    pub const PRICE: &str = "/price";
    pub const CANONICAL_PRICE: &str = "/canonicalPrice";
    pub const SUPPORTED_STABLECOINS: &str = "/supportedStablecoins";
    pub const SLIPPAGE: &str = "/slippage";
    pub const VAULT_ADDRESS: &str = "/vaultAddress";
    pub const CREATE_DEPOSIT_TX: &str = "/createDepositTx";
    pub const CREATE_WITHDRAW_TX: &str = "/createWithdrawTx";

    /// Join a deployment base URL and an endpoint path.
    pub fn url(base_url: &str, path: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), path)
    }
}

/// Parse a `0x`-prefixed 20-byte address.
pub fn parse_address(raw: &str) -> Result<Address> {
    Address::from_str(raw.trim())
        .map_err(|e| AppError::InvalidInput(format!("invalid address '{}': {}", raw, e)))
}

/// The wallet connection as this app sees it; owned by the wallet, read-only here.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Connection {
    pub address: Option<String>,
    pub chain_id: Option<u64>,
}

impl Connection {
    pub fn require_address(&self) -> Result<Address> {
        let raw = self
            .address
            .as_deref()
            .ok_or_else(|| AppError::Wallet("no wallet account connected".to_string()))?;
        parse_address(raw)
    }
}

/// A transaction handed to the wallet for signing and broadcast.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransactionRequest {
    pub from: Address,
    pub to: Address,
    pub data: Bytes,
    /// Always zero: no native currency moves with vault calls
    pub value: U256,
    pub chain_id: Option<u64>,
    pub gas: Option<u64>,
    pub gas_price: Option<u128>,
}

impl TransactionRequest {
    /// Wrap backend calldata into a wallet transaction sent from `from`.
    pub fn from_calldata(from: Address, payload: &CalldataPayload, chain_id: Option<u64>) -> Result<Self> {
        let to = parse_address(&payload.to)?;
        let data = Bytes::from_str(payload.input.trim())
            .map_err(|e| AppError::Decoding(format!("calldata input is not hex: {}", e)))?;

        Ok(Self {
            from,
            to,
            data,
            value: U256::ZERO,
            chain_id,
            gas: Some(payload.gas),
            gas_price: Some(payload.gas_price),
        })
    }

    /// `eth_sendTransaction` parameter object (hex quantities).
    pub fn to_rpc(&self) -> RpcTransaction {
        RpcTransaction {
            from: self.from.to_string(),
            to: self.to.to_string(),
            data: hex::encode_prefixed(&self.data),
            value: format!("0x{:x}", self.value),
            chain_id: self.chain_id.map(|id| format!("{:#x}", id)),
            gas: self.gas.map(|gas| format!("{:#x}", gas)),
            gas_price: self.gas_price.map(|price| format!("{:#x}", price)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RpcTransaction {
    pub from: String,
    pub to: String,
    pub data: String,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chain_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gas_price: Option<String>,
}

/// An ERC-20 allowance: let `spender` move up to `amount` of `token` owned by `from`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApprovalRequest {
    pub token: Address,
    pub spender: Address,
    pub amount: U256,
    pub from: Address,
    pub chain_id: Option<u64>,
}

impl ApprovalRequest {
    /// The `approve` call as a plain transaction to the token contract.
    pub fn to_transaction(&self) -> TransactionRequest {
        TransactionRequest {
            from: self.from,
            to: self.token,
            data: erc20::encode_approve(self.spender, self.amount),
            value: U256::ZERO,
            chain_id: self.chain_id,
            gas: None,
            gas_price: None,
        }
    }
}

#[async_trait(?Send)]
pub trait VaultApi {
    async fn supported_stablecoins(&self) -> Result<Vec<Stablecoin>>;

    async fn position(&self, request: &PositionRequest) -> Result<f64>;

    /// Receipt token price on the connected deployment.
    async fn price(&self) -> Result<f64>;

    /// Receipt token price on the reference chain.
    async fn canonical_price(&self) -> Result<f64>;

    async fn slippage(&self, request: &SlippageRequest) -> Result<f64>;

    async fn vault_address(&self) -> Result<String>;

    async fn create_transaction(
        &self,
        direction: Direction,
        request: &CreateTransactionRequest,
    ) -> Result<CalldataPayload>;
}

/// Fire-and-forget signer: returns once the wallet has accepted the request
/// (with the transaction hash), never waits for inclusion.
#[async_trait(?Send)]
pub trait WalletSigner {
    async fn send_transaction(&self, transaction: &TransactionRequest) -> Result<String>;

    async fn approve(&self, request: &ApprovalRequest) -> Result<String> {
        self.send_transaction(&request.to_transaction()).await
    }
}
