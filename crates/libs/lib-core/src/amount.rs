//! # Amount Entry
//!
//! User-typed token amounts, kept as exact decimal digits so that scaling to a
//! token's smallest unit never goes through floating point. `0.1` USDC is
//! `100000`, and `1.000000000000000001` DAI is `1000000000000000001`, with no
//! rounding drift for 18-decimal tokens.
//!
//! Parsing is forgiving in the way an input box needs: anything that is not a
//! plain unsigned decimal (`""`, `"abc"`, `"-3"`, `"1e3"`, `"1.2.3"`) becomes
//! zero instead of an error.

use std::fmt;

use alloy_primitives::U256;

use crate::error::{AppError, Result};

/// An unsigned decimal amount as entered by the user.
///
/// Stored normalized: no leading zeros in the whole part (`"0"` when empty),
/// no trailing zeros in the fraction.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Amount {
    whole: String,
    fraction: String,
}

impl Default for Amount {
    fn default() -> Self {
        Self::zero()
    }
}

impl Amount {
    pub fn zero() -> Self {
        Self {
            whole: "0".to_string(),
            fraction: String::new(),
        }
    }

    /// Parse free text from an input box; invalid input yields zero.
    ///
    /// ```rust
    /// use lib_core::amount::Amount;
    ///
    /// assert_eq!(Amount::parse(" 12.50 ").to_string(), "12.5");
    /// assert_eq!(Amount::parse(".5").to_string(), "0.5");
    /// assert!(Amount::parse("abc").is_zero());
    /// assert!(Amount::parse("-1").is_zero());
    /// ```
    pub fn parse(text: &str) -> Self {
        Self::try_parse(text).unwrap_or_default()
    }

    /// Strict variant of [`Amount::parse`]: `None` for anything that is not
    /// `digits[.digits]` (either side may be empty, not both).
    pub fn try_parse(text: &str) -> Option<Self> {
        let text = text.trim();
        let (whole, fraction) = match text.split_once('.') {
            Some((whole, fraction)) => (whole, fraction),
            None => (text, ""),
        };

        if whole.is_empty() && fraction.is_empty() {
            return None;
        }
        if !whole.bytes().all(|b| b.is_ascii_digit()) || !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }

        let whole = whole.trim_start_matches('0');
        let fraction = fraction.trim_end_matches('0');

        Some(Self {
            whole: if whole.is_empty() { "0".to_string() } else { whole.to_string() },
            fraction: fraction.to_string(),
        })
    }

    pub fn is_zero(&self) -> bool {
        self.whole == "0" && self.fraction.is_empty()
    }

    /// Scale to the token's smallest unit: `self × 10^decimals`.
    ///
    /// Exact or an error: an amount with more significant fractional digits
    /// than the token has decimals is rejected rather than rounded, and so is
    /// a result that does not fit in a `uint256`.
    ///
    /// ```rust
    /// use lib_core::amount::Amount;
    ///
    /// let amount = Amount::parse("1.5");
    /// assert_eq!(amount.to_base_units(6).unwrap().to_string(), "1500000");
    /// assert_eq!(amount.to_base_units(18).unwrap().to_string(), "1500000000000000000");
    /// assert!(Amount::parse("0.0000009").to_base_units(6).is_err());
    /// ```
    pub fn to_base_units(&self, decimals: u8) -> Result<U256> {
        let decimals = usize::from(decimals);
        if self.fraction.len() > decimals {
            return Err(AppError::InvalidInput(format!(
                "amount {} has more than {} decimal places",
                self, decimals
            )));
        }

        let mut digits = String::with_capacity(self.whole.len() + decimals);
        digits.push_str(&self.whole);
        digits.push_str(&self.fraction);
        digits.extend(std::iter::repeat('0').take(decimals - self.fraction.len()));

        U256::from_str_radix(&digits, 10).map_err(|e| {
            AppError::InvalidInput(format!("amount {} does not fit in uint256: {}", self, e))
        })
    }

    /// [`Amount::to_base_units`] rendered as a base-10 integer string, the
    /// form the transaction endpoints expect.
    pub fn base_units_string(&self, decimals: u8) -> Result<String> {
        self.to_base_units(decimals).map(|units| units.to_string())
    }

    /// Whether this amount can be approved or transferred for a token with
    /// `decimals`: exactly representable and strictly positive.
    pub fn is_transferable(&self, decimals: u8) -> bool {
        self.to_base_units(decimals).is_ok_and(|units| !units.is_zero())
    }
}

impl fmt::Display for Amount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.fraction.is_empty() {
            f.write_str(&self.whole)
        } else {
            write!(f, "{}.{}", self.whole, self.fraction)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_invalid_input_is_zero() {
        for text in ["", " ", ".", "abc", "-1", "+1", "1e3", "1,000", "1.2.3", "0x10", "NaN", "Infinity"] {
            assert!(Amount::parse(text).is_zero(), "'{}' should parse to zero", text);
            assert_eq!(Amount::parse(text).base_units_string(18).unwrap(), "0");
        }
    }

    #[test]
    fn test_normalization() {
        assert_eq!(Amount::parse("007").to_string(), "7");
        assert_eq!(Amount::parse("7.").to_string(), "7");
        assert_eq!(Amount::parse("0.000").to_string(), "0");
        assert_eq!(Amount::parse("000.0100").to_string(), "0.01");
    }

    #[test]
    fn test_high_precision_scaling() {
        let amount = Amount::parse("1.000000000000000001");
        assert_eq!(amount.base_units_string(18).unwrap(), "1000000000000000001");

        // 0.1 + 0.2 style drift would show up here with float multiplication
        let amount = Amount::parse("0.3");
        assert_eq!(amount.base_units_string(18).unwrap(), "300000000000000000");
    }

    #[test]
    fn test_excess_precision_is_rejected() {
        let amount = Amount::parse("2.1234567");
        assert!(matches!(amount.to_base_units(6), Err(AppError::InvalidInput(_))));
        assert!(matches!(amount.to_base_units(0), Err(AppError::InvalidInput(_))));
        assert_eq!(amount.base_units_string(7).unwrap(), "21234567");

        // trailing zeros are not significant
        assert_eq!(Amount::parse("2.1234560").base_units_string(6).unwrap(), "2123456");
    }

    #[test]
    fn test_dust_is_not_transferable() {
        let dust = Amount::parse("0.0000009");
        assert!(!dust.is_zero());
        assert!(!dust.is_transferable(6));
        assert!(dust.is_transferable(18));

        assert!(!Amount::zero().is_transferable(18));
        assert!(Amount::parse("1").is_transferable(0));
    }

    #[test]
    fn test_large_amounts() {
        let amount = Amount::parse("123456789012345678901234567890");
        assert_eq!(
            amount.base_units_string(18).unwrap(),
            "123456789012345678901234567890000000000000000000"
        );
    }

    #[test]
    fn test_overflow_is_error() {
        let amount = Amount::parse(&"9".repeat(80));
        assert!(matches!(amount.to_base_units(18), Err(AppError::InvalidInput(_))));
    }

    proptest! {
        #[test]
        fn scaling_is_exact(
            whole in any::<u64>(),
            fraction in "[0-9]{0,18}",
            decimals in 0u8..=18,
        ) {
            let text = if fraction.is_empty() {
                whole.to_string()
            } else {
                format!("{}.{}", whole, fraction)
            };
            let amount = Amount::parse(&text);

            let significant = fraction.trim_end_matches('0');
            if significant.len() > usize::from(decimals) {
                prop_assert!(amount.to_base_units(decimals).is_err());
            } else {
                let padded = format!("{:0<width$}", significant, width = usize::from(decimals));
                let ten = U256::from(10u64);
                let mut expected = U256::from(whole) * ten.pow(U256::from(decimals));
                if !padded.is_empty() {
                    expected += U256::from_str_radix(&padded, 10).unwrap();
                }
                prop_assert_eq!(amount.to_base_units(decimals).unwrap(), expected);
            }
        }

        #[test]
        fn parse_display_is_stable(text in "[0-9]{0,12}(\\.[0-9]{0,12})?") {
            let once = Amount::parse(&text);
            let twice = Amount::parse(&once.to_string());
            prop_assert_eq!(once, twice);
        }
    }
}
