//! # Formatting Utilities
//!
//! Number formatting for the panels. For address formatting, use
//! [`shared::utils::truncate_address`].

/// Shown wherever a value is not available yet.
pub const PLACEHOLDER: &str = "—";

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
pub fn format_number(value: f64, decimals: usize) -> String {
    if !value.is_finite() {
        return PLACEHOLDER.to_string();
    }

    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((formatted.as_str(), ""));

    // Add commas to integer part
    let mut result = String::new();
    for (i, ch) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(ch);
    }
    let integer_with_commas: String = result.chars().rev().collect();
    let sign = if value < 0.0 && formatted.bytes().any(|b| b.is_ascii_digit() && b != b'0') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, integer_with_commas)
    } else {
        format!("{}{}.{}", sign, integer_with_commas, decimal_part)
    }
}

/// Optional value with a fixed number of decimals, or the placeholder.
pub fn format_optional(value: Option<f64>, decimals: usize) -> String {
    value
        .map(|v| format_number(v, decimals))
        .unwrap_or_else(|| PLACEHOLDER.to_string())
}

/// Price deviation as a percentage ("2.00%"), or the placeholder when it
/// cannot be computed.
pub fn format_deviation(deviation: Option<f64>) -> String {
    match deviation {
        Some(pct) if pct.is_finite() => format!("{:.2}%", pct),
        _ => PLACEHOLDER.to_string(),
    }
}

/// Estimated slippage (already a percentage)
pub fn format_slippage(slippage: f64) -> String {
    format!("{:.2}%", slippage)
}
