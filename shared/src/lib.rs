//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between the vault front-end and the
//! backend deployment it talks to. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::vault`]**: Stablecoin catalog, quotes, prices and calldata DTOs
//!   - **[`dto::wire`]**: Lenient field decoders for the backend's mixed number encodings
//! - **[`utils`]**: Shared utility functions
//!   - **[`utils::format_address`]**: Format wallet addresses for display
//!   - **[`utils::truncate_address`]**: Truncate addresses with ellipsis
//!
//! ## Wire Format
//!
//! The backend uses camelCase for multi-word fields (`inputToken`, `gasPrice`).
//! Numeric values arrive either as JSON numbers or as decimal strings depending
//! on the endpoint, so every numeric response field goes through a [`dto::wire`]
//! decoder rather than a plain `f64`.
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::vault::{CalldataResponse, SlippageRequest};
//!
//! let request = SlippageRequest {
//!     amount: "12.5".to_string(),
//!     address: None,
//!     input_token: "USDC".to_string(),
//! };
//! let body = serde_json::to_string(&request).unwrap();
//! assert_eq!(body, r#"{"amount":"12.5","inputToken":"USDC"}"#);
//!
//! let response: CalldataResponse = serde_json::from_str(
//!     r#"{"calldata":"{\"input\":\"0x\",\"to\":\"0x0000000000000000000000000000000000000001\",\"gas\":\"0x5208\",\"gasPrice\":\"0x1\"}"}"#,
//! ).unwrap();
//! assert_eq!(response.calldata.gas, 21_000);
//! ```

pub mod dto;
pub mod utils;

// Re-export commonly used types for convenience
pub use dto::*;
pub use utils::*;
