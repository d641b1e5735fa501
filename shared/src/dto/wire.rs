//! # Wire Decoders
//!
//! The backend is not consistent about how it encodes numbers: prices come back
//! as decimal strings, slippage as a JSON float, gas quantities as `0x` hex, and
//! the calldata object is itself JSON-encoded inside a string. These helpers are
//! used with `#[serde(deserialize_with = ...)]` so the DTOs stay plain structs.

use serde::de::{self, DeserializeOwned, Deserializer};
use serde::Deserialize;

#[derive(Deserialize)]
#[serde(untagged)]
enum NumberOrText {
    Number(f64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum QuantityRepr {
    Number(u64),
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Embedded<T> {
    Encoded(String),
    Inline(T),
}

/// Parse an Ethereum JSON-RPC style quantity.
///
/// Accepts `0x`-prefixed hex (`"0x5208"`) or plain decimal (`"21000"`).
///
/// ```rust
/// use shared::dto::wire::parse_quantity;
///
/// assert_eq!(parse_quantity("0x5208"), Some(21_000));
/// assert_eq!(parse_quantity("21000"), Some(21_000));
/// assert_eq!(parse_quantity("0x"), None);
/// ```
pub fn parse_quantity(raw: &str) -> Option<u128> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) if !hex.is_empty() => u128::from_str_radix(hex, 16).ok(),
        Some(_) => None,
        None => raw.parse::<u128>().ok(),
    }
}

/// Decode a finite `f64` sent either as a JSON number or a decimal string.
///
/// `"NaN"` and `"inf"` parse as `f64` but are rejected.
pub fn f64_from_number_or_string<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = match NumberOrText::deserialize(deserializer)? {
        NumberOrText::Number(value) => value,
        NumberOrText::Text(text) => text
            .trim()
            .parse::<f64>()
            .map_err(|e| de::Error::custom(format!("invalid decimal '{}': {}", text, e)))?,
    };
    if !value.is_finite() {
        return Err(de::Error::custom(format!("non-finite decimal {}", value)));
    }
    Ok(value)
}

/// Decode a `u64` quantity (hex string, decimal string or number).
pub fn u64_quantity<'de, D>(deserializer: D) -> Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let value = quantity(deserializer)?;
    u64::try_from(value).map_err(|_| de::Error::custom(format!("quantity {} overflows u64", value)))
}

/// Decode a `u128` quantity (hex string, decimal string or number).
pub fn u128_quantity<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    quantity(deserializer)
}

fn quantity<'de, D>(deserializer: D) -> Result<u128, D::Error>
where
    D: Deserializer<'de>,
{
    match QuantityRepr::deserialize(deserializer)? {
        QuantityRepr::Number(value) => Ok(u128::from(value)),
        QuantityRepr::Text(text) => parse_quantity(&text)
            .ok_or_else(|| de::Error::custom(format!("invalid quantity '{}'", text))),
    }
}

/// Decode a value that may be JSON-encoded inside a string, or inlined as an object.
pub fn embedded_json<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    match Embedded::<T>::deserialize(deserializer)? {
        Embedded::Encoded(text) => serde_json::from_str(&text).map_err(de::Error::custom),
        Embedded::Inline(value) => Ok(value),
    }
}
