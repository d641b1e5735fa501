//! # Shared Utility Functions
//!
//! Display helpers used by the front-end and by log lines in the core library.
//!
//! ## Address Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - `0x` + 4 leading hex digits, 4 trailing
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0x83F20F44975D03b1b09e64809B757c47f942BEeA";
//! assert_eq!(format_address(address, 6, 4), "0x83F2...BEeA");
//! ```

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0x83F20F44975D03b1b09e64809B757c47f942BEeA";
/// assert_eq!(format_address(addr, 6, 4), "0x83F2...BEeA");
/// assert_eq!(format_address("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an EVM address as `0xABCD...WXYZ`.
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0x83F20F44975D03b1b09e64809B757c47f942BEeA";
/// assert_eq!(truncate_address(addr), "0x83F2...BEeA");
/// ```
pub fn truncate_address(address: &str) -> String {
    format_address(address, 6, 4)
}
