//! # Core Library
//!
//! Everything the vault front-end decides without touching the browser:
//! configuration and deployment routing, amount scaling, the stablecoin
//! catalog, price statistics, and the deposit/withdraw flow.
//!
//! The outside world is reached only through two traits in [`service`]:
//! [`VaultApi`] (the vault backend) and [`WalletSigner`] (the connected
//! wallet). The web crate implements both; the tests here use fakes.
//!
//! ## Modules
//!
//! - [`config`] - front-end configuration and base URL derivation
//! - [`deployment`] - chain id to backend deployment mapping
//! - [`amount`] - decimal amount parsing and base-unit scaling
//! - [`catalog`] - stablecoin reference catalog and selector rules
//! - [`stats`] - statistics refresh and price deviation
//! - [`transfer`] - approve / slippage / submit orchestration
//! - [`sequence`] - latest-wins ordering for informational fetches
//! - [`erc20`] - `approve` ABI encoding
//! - [`error`] - error type shared by all of the above

pub mod amount;
pub mod catalog;
pub mod config;
pub mod deployment;
pub mod erc20;
pub mod error;
pub mod sequence;
pub mod service;
pub mod stats;
pub mod transfer;

// Re-export commonly used types
pub use amount::Amount;
pub use config::{ApprovalTarget, FrontendConfig};
pub use deployment::Deployment;
pub use error::{AppError, Result};
pub use sequence::{RequestSequencer, RequestTicket};
pub use service::{ApprovalRequest, Connection, TransactionRequest, VaultApi, WalletSigner};
pub use stats::{StatsFlow, StatsSnapshot};
pub use transfer::{Direction, TransferFlow};
