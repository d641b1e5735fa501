//! # Deposit / Withdraw Flow
//!
//! The orchestration behind both transfer panels. Each step is independent and
//! user-retriable; nothing rolls back when a later step fails.
//!
//! ```text
//! amount / coin change ──► quote_slippage ──► displayed slippage (0 on failure)
//! [Approve]            ──► GET /vaultAddress ──► wallet approve(token, vault, amount)
//! [Submit]             ──► POST /create{Deposit,Withdraw}Tx ──► wallet eth_sendTransaction
//! ```
//!
//! Wallet calls are fire-and-forget: the flow returns the transaction hash the
//! wallet hands back and never waits for confirmation.

use std::fmt;

use alloy_primitives::U256;
use shared::dto::vault::{CreateTransactionRequest, SlippageRequest, Stablecoin};
use tracing::{debug, info, instrument, warn};

use crate::amount::Amount;
use crate::config::{ApprovalTarget, FrontendConfig};
use crate::error::{AppError, Result};
use crate::sequence::{RequestSequencer, RequestTicket};
use crate::service::{endpoints, parse_address, ApprovalRequest, Connection, TransactionRequest, VaultApi, WalletSigner};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Deposit,
    Withdraw,
}

impl Direction {
    pub fn endpoint(&self) -> &'static str {
        match self {
            Direction::Deposit => endpoints::CREATE_DEPOSIT_TX,
            Direction::Withdraw => endpoints::CREATE_WITHDRAW_TX,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Direction::Deposit => "Deposit",
            Direction::Withdraw => "Withdraw",
        }
    }

    /// Noun used on the submit button ("Create deposit transaction for 10").
    pub fn noun(&self) -> &'static str {
        match self {
            Direction::Deposit => "deposit",
            Direction::Withdraw => "withdrawal",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.noun())
    }
}

/// `amount` in `coin`'s smallest unit; it must be exact and non-zero.
fn transfer_units(amount: &Amount, coin: &Stablecoin) -> Result<U256> {
    let units = amount.to_base_units(coin.decimals)?;
    if units.is_zero() {
        return Err(AppError::InvalidInput(format!(
            "amount must be greater than zero, got {} {}",
            amount, coin.symbol
        )));
    }
    Ok(units)
}

/// One panel's view of the flow: which backend, which wallet, which direction.
pub struct TransferFlow<'a> {
    api: &'a dyn VaultApi,
    wallet: &'a dyn WalletSigner,
    config: &'a FrontendConfig,
    direction: Direction,
}

impl<'a> TransferFlow<'a> {
    pub fn new(
        api: &'a dyn VaultApi,
        wallet: &'a dyn WalletSigner,
        config: &'a FrontendConfig,
        direction: Direction,
    ) -> Self {
        Self {
            api,
            wallet,
            config,
            direction,
        }
    }

    /// Estimated slippage (percent) for moving `amount` of `coin`.
    ///
    /// Never fails: a backend error is logged and reported as `0.0` so the
    /// panel always shows a number.
    #[instrument(skip(self, coin), fields(direction = %self.direction, coin = %coin.symbol))]
    pub async fn quote_slippage(&self, amount: &Amount, coin: &Stablecoin, owner: Option<&str>) -> f64 {
        let request = SlippageRequest {
            amount: amount.to_string(),
            address: owner.map(str::to_string),
            input_token: coin.symbol.clone(),
        };

        match self.api.slippage(&request).await {
            Ok(slippage) => {
                debug!(slippage, "slippage quoted");
                slippage
            }
            Err(e) => {
                warn!(error = %e, "Failed to fetch slippage, defaulting to zero");
                0.0
            }
        }
    }

    /// [`quote_slippage`](Self::quote_slippage) for the panel: `None` when a
    /// quote issued after `ticket` has been requested in the meantime.
    pub async fn quote_latest(
        &self,
        sequencer: &RequestSequencer,
        ticket: RequestTicket,
        amount: &Amount,
        coin: &Stablecoin,
        owner: Option<&str>,
    ) -> Option<f64> {
        let slippage = self.quote_slippage(amount, coin, owner).await;
        let accepted = sequencer.accept(ticket, slippage);
        if accepted.is_none() {
            debug!(?ticket, "dropping superseded slippage quote");
        }
        accepted
    }

    /// Authorize the vault to move up to `amount` (scaled by `coin.decimals`).
    ///
    /// Which token contract is approved follows
    /// [`FrontendConfig::approval_target`] for this direction.
    #[instrument(skip(self, coin, connection), fields(direction = %self.direction, coin = %coin.symbol))]
    pub async fn approve(&self, amount: &Amount, coin: &Stablecoin, connection: &Connection) -> Result<String> {
        let from = connection.require_address()?;
        let units = transfer_units(amount, coin)?;
        let vault = parse_address(&self.api.vault_address().await?)?;

        let token = match self.config.approval_target(self.direction) {
            ApprovalTarget::Stablecoin => parse_address(&coin.address)?,
            ApprovalTarget::ReceiptToken => vault,
        };

        let request = ApprovalRequest {
            token,
            spender: vault,
            amount: units,
            from,
            chain_id: connection.chain_id,
        };
        let hash = self.wallet.approve(&request).await?;
        info!(%token, spender = %vault, amount = %units, %hash, "approval submitted");
        Ok(hash)
    }

    /// Ask the backend for calldata moving `amount` of `coin` and wrap it into
    /// a wallet transaction.
    #[instrument(skip(self, coin, connection), fields(direction = %self.direction, coin = %coin.symbol))]
    pub async fn build_transaction(
        &self,
        amount: &Amount,
        coin: &Stablecoin,
        connection: &Connection,
    ) -> Result<TransactionRequest> {
        let from = connection.require_address()?;
        let request = CreateTransactionRequest {
            amount: transfer_units(amount, coin)?.to_string(),
            from: from.to_string(),
            token: coin.symbol.clone(),
        };

        let payload = self.api.create_transaction(self.direction, &request).await?;
        debug!(to = %payload.to, gas = payload.gas, "calldata received");

        TransactionRequest::from_calldata(from, &payload, connection.chain_id)
    }

    /// Hand a transaction to the wallet. Returns the hash; does not wait for inclusion.
    pub async fn submit(&self, transaction: &TransactionRequest) -> Result<String> {
        let hash = self.wallet.send_transaction(transaction).await?;
        info!(direction = %self.direction, to = %transaction.to, %hash, "transaction submitted");
        Ok(hash)
    }

    /// [`build_transaction`](Self::build_transaction) followed by [`submit`](Self::submit).
    pub async fn execute(&self, amount: &Amount, coin: &Stablecoin, connection: &Connection) -> Result<String> {
        let transaction = self.build_transaction(amount, coin, connection).await?;
        self.submit(&transaction).await
    }
}

#[cfg(test)]
pub(crate) mod tests;
