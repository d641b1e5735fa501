//! # Transfer Flow Tests
//!
//! Drives [`TransferFlow`] against in-memory fakes of the backend and wallet.

mod approve;

use std::cell::RefCell;
use std::collections::VecDeque;

use async_trait::async_trait;
use shared::dto::vault::{CalldataPayload, CreateTransactionRequest, PositionRequest, SlippageRequest, Stablecoin};
use tokio::sync::oneshot;

use super::*;
use crate::error::AppError;
use crate::service::{TransactionRequest, VaultApi, WalletSigner};

pub const OWNER: &str = "0x00000000000000000000000000000000000000aa";
pub const VAULT: &str = "0x83f20f44975d03b1b09e64809b757c47f942beea";
pub const USDC: &str = "0xa0b86991c6218b36c1d19d4a2e9eb0ce3606eb48";
pub const DAI: &str = "0x6b175474e89094c44da98b954eedeac495271d0f";

pub fn usdc() -> Stablecoin {
    Stablecoin {
        symbol: "USDC".to_string(),
        address: USDC.to_string(),
        decimals: 6,
    }
}

pub fn dai() -> Stablecoin {
    Stablecoin {
        symbol: "DAI".to_string(),
        address: DAI.to_string(),
        decimals: 18,
    }
}

pub fn connected(chain_id: u64) -> Connection {
    Connection {
        address: Some(OWNER.to_string()),
        chain_id: Some(chain_id),
    }
}

pub fn test_config() -> FrontendConfig {
    FrontendConfig::with_origin("http://localhost:8080")
}

/// Backend fake that records every request it sees. A `None` figure makes
/// the matching endpoint fail.
pub struct FakeApi {
    pub slippage: Option<f64>,
    pub price: Option<f64>,
    pub canonical_price: Option<f64>,
    pub position: Option<f64>,
    pub vault: String,
    pub calldata: CalldataPayload,
    pub fail_create: bool,
    /// Pending `/slippage` responses, handed out in call order. While
    /// non-empty, each call waits for its sender instead of using `slippage`.
    pub slippage_gates: RefCell<VecDeque<oneshot::Receiver<f64>>>,
    pub slippage_requests: RefCell<Vec<SlippageRequest>>,
    pub position_requests: RefCell<Vec<PositionRequest>>,
    pub create_requests: RefCell<Vec<(Direction, CreateTransactionRequest)>>,
}

fn unavailable(endpoint: &str) -> AppError {
    AppError::Api(format!("HTTP 500: {} unavailable", endpoint))
}

impl Default for FakeApi {
    fn default() -> Self {
        Self {
            slippage: Some(0.25),
            price: Some(1.0),
            canonical_price: Some(1.0),
            position: Some(0.0),
            vault: VAULT.to_string(),
            calldata: CalldataPayload {
                input: "0x6e553f65".to_string(),
                to: VAULT.to_string(),
                gas: 250_000,
                gas_price: 1_000_000_000,
            },
            fail_create: false,
            slippage_gates: RefCell::new(VecDeque::new()),
            slippage_requests: RefCell::new(Vec::new()),
            position_requests: RefCell::new(Vec::new()),
            create_requests: RefCell::new(Vec::new()),
        }
    }
}

#[async_trait(?Send)]
impl VaultApi for FakeApi {
    async fn supported_stablecoins(&self) -> Result<Vec<Stablecoin>> {
        Ok(vec![usdc(), dai()])
    }

    async fn position(&self, request: &PositionRequest) -> Result<f64> {
        self.position_requests.borrow_mut().push(request.clone());
        self.position.ok_or_else(|| unavailable("position"))
    }

    async fn price(&self) -> Result<f64> {
        self.price.ok_or_else(|| unavailable("price"))
    }

    async fn canonical_price(&self) -> Result<f64> {
        self.canonical_price.ok_or_else(|| unavailable("canonicalPrice"))
    }

    async fn slippage(&self, request: &SlippageRequest) -> Result<f64> {
        self.slippage_requests.borrow_mut().push(request.clone());
        let gate = self.slippage_gates.borrow_mut().pop_front();
        match gate {
            Some(gate) => gate.await.map_err(|_| unavailable("slippage")),
            None => self.slippage.ok_or_else(|| unavailable("slippage")),
        }
    }

    async fn vault_address(&self) -> Result<String> {
        Ok(self.vault.clone())
    }

    async fn create_transaction(
        &self,
        direction: Direction,
        request: &CreateTransactionRequest,
    ) -> Result<CalldataPayload> {
        self.create_requests.borrow_mut().push((direction, request.clone()));
        if self.fail_create {
            return Err(AppError::Api("HTTP 400: amount too large".to_string()));
        }
        Ok(self.calldata.clone())
    }
}

/// Wallet fake: accepts everything unless `reject` is set.
#[derive(Default)]
pub struct FakeWallet {
    pub reject: bool,
    pub sent: RefCell<Vec<TransactionRequest>>,
}

#[async_trait(?Send)]
impl WalletSigner for FakeWallet {
    async fn send_transaction(&self, transaction: &TransactionRequest) -> Result<String> {
        if self.reject {
            return Err(AppError::Wallet("User rejected the request.".to_string()));
        }
        let mut sent = self.sent.borrow_mut();
        sent.push(transaction.clone());
        Ok(format!("0x{:064x}", sent.len()))
    }
}
