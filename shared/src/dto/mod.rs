//! # Data Transfer Objects (DTOs)
//!
//! Structures exchanged with the vault backend over its REST API.
//!
//! ## Module Organization
//!
//! - [`vault`] - Request and response bodies for every backend endpoint
//! - [`wire`] - Field-level decoders for numbers, quantities and embedded JSON
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /main/slippage
//! Content-Type: application/json
//!
//! {
//!   "amount": "250",
//!   "address": "0x1234...",
//!   "inputToken": "DAI"
//! }
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//! Content-Type: application/json
//!
//! { "slippage": 0.0132 }
//! ```

pub mod vault;
pub mod wire;

pub use vault::*;
