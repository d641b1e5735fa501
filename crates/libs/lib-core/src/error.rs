//! # Centralized Error Handling
//!
//! This module defines the error type [`AppError`] used across the core library
//! and by the web front-end's service adapters. It follows the `thiserror`
//! pattern for ergonomic error handling.
//!
//! ## Error Categories
//!
//! 1. **Input** - the user or caller handed us something unusable
//!    - [`InvalidInput`](AppError::InvalidInput) (bad amount, bad address)
//!    - [`Config`](AppError::Config) (bad configuration override)
//!
//! 2. **Backend** - the vault backend failed or answered something unexpected
//!    - [`Api`](AppError::Api) (network failure, non-2xx status)
//!    - [`Decoding`](AppError::Decoding) (malformed JSON, bad hex)
//!
//! 3. **Wallet** - the connected wallet refused or failed
//!    - [`Wallet`](AppError::Wallet) (no provider, user rejection, RPC error)
//!
//! None of these are fatal: callers log them and leave the affected display
//! field stale or zeroed.
//!
//! ## Usage Example
//!
//! ```rust
//! use lib_core::error::{AppError, Result};
//!
//! fn require_decimals(decimals: u8) -> Result<u8> {
//!     if decimals > 36 {
//!         return Err(AppError::InvalidInput(format!("unsupported decimals: {}", decimals)));
//!     }
//!     Ok(decimals)
//! }
//! ```

use thiserror::Error;

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AppError {
    /// Configuration error while loading or validating [`crate::config::FrontendConfig`].
    #[error("Configuration error: {0}")]
    Config(String),

    /// Backend request failed (network error or non-success status).
    #[error("API error: {0}")]
    Api(String),

    /// Backend answered with a body we could not decode.
    #[error("Decoding error: {0}")]
    Decoding(String),

    /// Invalid user input.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Wallet provider missing, rejected the request, or failed.
    #[error("Wallet error: {0}")]
    Wallet(String),
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Decoding(err.to_string())
    }
}
