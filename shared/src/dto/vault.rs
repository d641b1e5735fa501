//! # Vault Data Transfer Objects
//!
//! Request and response bodies for the vault backend. Paths are relative to a
//! deployment base URL (`{origin}/main` or `{origin}/opt`).
//!
//! | Endpoint | Method | Request | Response |
//! |---|---|---|---|
//! | `/position` | POST | [`PositionRequest`] | [`PositionResponse`] |
//! | `/price` | GET | - | [`PriceResponse`] |
//! | `/canonicalPrice` | GET | - | [`PriceResponse`] |
//! | `/supportedStablecoins` | GET | - | `Vec<`[`Stablecoin`]`>` |
//! | `/slippage` | POST | [`SlippageRequest`] | [`SlippageResponse`] |
//! | `/vaultAddress` | GET | - | [`VaultAddressResponse`] |
//! | `/createDepositTx` | POST | [`CreateTransactionRequest`] | [`CalldataResponse`] |
//! | `/createWithdrawTx` | POST | [`CreateTransactionRequest`] | [`CalldataResponse`] |

use serde::{Deserialize, Serialize};

use super::wire;

/// A stablecoin the backend accepts, as listed by `/supportedStablecoins`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Stablecoin {
    /// Ticker, also used as the token identifier in request bodies (`"USDC"`)
    pub symbol: String,
    /// ERC-20 contract address on the connected chain
    pub address: String,
    /// Decimal precision of the token contract
    pub decimals: u8,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionRequest {
    pub address: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stablecoin: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PositionResponse {
    #[serde(deserialize_with = "wire::f64_from_number_or_string")]
    pub position: f64,
}

/// Response of both `/price` and `/canonicalPrice`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PriceResponse {
    #[serde(deserialize_with = "wire::f64_from_number_or_string")]
    pub price: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlippageRequest {
    /// Human-readable decimal amount (`"12.5"`), not scaled by token decimals
    pub amount: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(rename = "inputToken")]
    pub input_token: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlippageResponse {
    #[serde(deserialize_with = "wire::f64_from_number_or_string")]
    pub slippage: f64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VaultAddressResponse {
    pub address: String,
}

/// Body of `/createDepositTx` and `/createWithdrawTx`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateTransactionRequest {
    /// Amount in the token's smallest unit, as a base-10 integer string
    pub amount: String,
    pub from: String,
    pub token: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CalldataResponse {
    #[serde(deserialize_with = "wire::embedded_json")]
    pub calldata: CalldataPayload,
}

/// Opaque transaction parameters produced by the backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalldataPayload {
    /// `0x`-prefixed ABI-encoded call data
    pub input: String,
    /// Contract the transaction is sent to
    pub to: String,
    #[serde(deserialize_with = "wire::u64_quantity")]
    pub gas: u64,
    #[serde(rename = "gasPrice", deserialize_with = "wire::u128_quantity")]
    pub gas_price: u128,
}

/// Error body returned by the backend on 4xx responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_supported_stablecoins_decode() {
        let body = r#"[
            {"symbol":"DAI","address":"0x6B175474E89094C44Da98b954EedeAC495271d0F","decimals":18},
            {"symbol":"USDC","address":"0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48","decimals":6}
        ]"#;
        let coins: Vec<Stablecoin> = serde_json::from_str(body).unwrap();
        assert_eq!(coins.len(), 2);
        assert_eq!(coins[0].symbol, "DAI");
        assert_eq!(coins[1].decimals, 6);
    }

    #[test]
    fn test_position_request_omits_missing_stablecoin() {
        let request = PositionRequest {
            address: "0xabc".to_string(),
            stablecoin: None,
        };
        assert_eq!(serde_json::to_string(&request).unwrap(), r#"{"address":"0xabc"}"#);

        let request = PositionRequest {
            address: "0xabc".to_string(),
            stablecoin: Some("USDC".to_string()),
        };
        assert_eq!(
            serde_json::to_string(&request).unwrap(),
            r#"{"address":"0xabc","stablecoin":"USDC"}"#
        );
    }

    #[test]
    fn test_position_accepts_decimal_string() {
        let response: PositionResponse = serde_json::from_str(r#"{"position":"104.25"}"#).unwrap();
        assert_eq!(response.position, 104.25);
    }

    #[test]
    fn test_calldata_string_encoded() {
        let body = r#"{"calldata":"{\"input\":\"0x6e553f65\",\"to\":\"0x83F20F44975D03b1b09e64809B757c47f942BEeA\",\"gas\":\"0x3d090\",\"gasPrice\":\"0x3b9aca00\"}"}"#;
        let response: CalldataResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.calldata.input, "0x6e553f65");
        assert_eq!(response.calldata.gas, 250_000);
        assert_eq!(response.calldata.gas_price, 1_000_000_000);
    }

    #[test]
    fn test_calldata_inline_object() {
        let body = r#"{"calldata":{"input":"0x","to":"0x0000000000000000000000000000000000000002","gas":21000,"gasPrice":"7"}}"#;
        let response: CalldataResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.calldata.gas, 21_000);
        assert_eq!(response.calldata.gas_price, 7);
    }

    #[test]
    fn test_calldata_malformed_inner_json() {
        let body = r#"{"calldata":"{not json"}"#;
        assert!(serde_json::from_str::<CalldataResponse>(body).is_err());
    }
}
