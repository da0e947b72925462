//! # Shared Utility Functions
//!
//! Display formatting used by the session render model and the wallet UI.
//!
//! ## Amount Formatting
//!
//! - [`format_number`] - Format numbers with comma separators
//! - [`format_lamports_to_sol`] - Convert lamports to SOL with 4 decimals
//! - [`format_usd`] - Dollar amount with 2 decimals
//!
//! ## Address and Signature Formatting
//!
//! - [`format_address`] - Format address with ellipsis (first N and last M characters)
//! - [`truncate_address`] - Alias for `format_address` with default parameters
//! - [`truncate_hash`] - Signature prefix with trailing ellipsis
//! - [`format_block_time`] - Unix seconds as a UTC timestamp
//!
//! ## Usage
//!
//! ```rust
//! use shared::utils::{format_address, format_lamports_to_sol};
//!
//! let address = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
//! assert_eq!(format_address(address, 4, 4), "8W6Q...JKAL");
//! assert_eq!(format_lamports_to_sol(2_500_000_000), "2.5000");
//! ```

use chrono::DateTime;

/// 1 SOL = 10^9 lamports
pub const LAMPORTS_PER_SOL: u64 = 1_000_000_000;

/// Format a number with commas (e.g., 1234567.89 -> "1,234,567.89")
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_number;
///
/// assert_eq!(format_number(1234567.89, 2), "1,234,567.89");
/// assert_eq!(format_number(100.0, 2), "100.00");
/// ```
pub fn format_number(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((int, frac)) => (int, frac),
        None => (formatted.as_str(), ""),
    };

    let mut grouped = String::with_capacity(integer_part.len() + integer_part.len() / 3);
    for (i, ch) in integer_part.chars().enumerate() {
        if i > 0 && (integer_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if value.is_sign_negative() && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };

    if decimal_part.is_empty() {
        format!("{}{}", sign, grouped)
    } else {
        format!("{}{}.{}", sign, grouped, decimal_part)
    }
}

/// Lamports as SOL with 4 decimal places.
///
/// ```rust
/// use shared::utils::format_lamports_to_sol;
///
/// assert_eq!(format_lamports_to_sol(1_000_000_000), "1.0000");
/// assert_eq!(format_lamports_to_sol(500_000_000), "0.5000");
/// ```
pub fn format_lamports_to_sol(lamports: u64) -> String {
    format_number(lamports as f64 / LAMPORTS_PER_SOL as f64, 4)
}

/// Dollar amount with 2 decimals, e.g. `$142.37`.
pub fn format_usd(amount: f64) -> String {
    format!("${}", format_number(amount, 2))
}

/// Format a wallet address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is shorter than `prefix_len + suffix_len`, it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
/// assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
/// assert_eq!(format_address(addr, 6, 6), "8W6Qgi...KuJKAL");
/// assert_eq!(format_address("short", 4, 4), "short");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if address_len <= prefix_len + suffix_len || !address.is_ascii() {
        return address.to_string();
    }

    // base58 is ASCII, byte indexing is safe
    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format a wallet address with default 4-character prefix and suffix.
pub fn truncate_address(address: &str) -> String {
    format_address(address, 4, 4)
}

/// First `len` characters of a transaction signature followed by `...`.
///
/// ```rust
/// use shared::utils::truncate_hash;
///
/// assert_eq!(truncate_hash("5VERv8NMvzbJMEkV8xnrLkEaWRtSz9Co", 8), "5VERv8NM...");
/// ```
pub fn truncate_hash(hash: &str, len: usize) -> String {
    let prefix: String = hash.chars().take(len).collect();
    format!("{}...", prefix)
}

/// Unix seconds as `YYYY-MM-DD HH:MM:SS UTC`. `None` when out of range.
pub fn format_block_time(unix_seconds: i64) -> Option<String> {
    DateTime::from_timestamp(unix_seconds, 0)
        .map(|time| time.format("%Y-%m-%d %H:%M:%S UTC").to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(1234567.891, 2), "1,234,567.89");
        assert_eq!(format_number(999.0, 0), "999");
        assert_eq!(format_number(1000.0, 0), "1,000");
        assert_eq!(format_number(-1234.5, 1), "-1,234.5");
        assert_eq!(format_number(0.0, 4), "0.0000");
    }

    #[test]
    fn test_format_lamports_to_sol() {
        assert_eq!(format_lamports_to_sol(2_500_000_000), "2.5000");
        assert_eq!(format_lamports_to_sol(0), "0.0000");
        assert_eq!(format_lamports_to_sol(1), "0.0000");
        assert_eq!(format_lamports_to_sol(1_234 * LAMPORTS_PER_SOL), "1,234.0000");
    }

    #[test]
    fn test_format_usd() {
        assert_eq!(format_usd(142.37), "$142.37");
        assert_eq!(format_usd(0.5), "$0.50");
    }

    #[test]
    fn test_format_address() {
        let addr = "8W6QginkhTTxoP2deQjq7rZ9YMwN5FH9JYuLfSKuJKAL";
        assert_eq!(format_address(addr, 4, 4), "8W6Q...JKAL");
        assert_eq!(format_address(addr, 2, 2), "8W...AL");
        assert_eq!(truncate_address(addr), "8W6Q...JKAL");
    }

    #[test]
    fn test_format_address_short() {
        assert_eq!(format_address("short", 4, 4), "short");
        assert_eq!(format_address("abc", 4, 4), "abc");
    }

    #[test]
    fn test_truncate_hash() {
        assert_eq!(truncate_hash("abc", 8), "abc...");
        assert_eq!(truncate_hash("3nqy2sWrwFfN6hFe1cK6", 8), "3nqy2sWr...");
    }

    #[test]
    fn test_format_block_time() {
        assert_eq!(format_block_time(1_700_000_000).as_deref(), Some("2023-11-14 22:13:20 UTC"));
        assert_eq!(format_block_time(0).as_deref(), Some("1970-01-01 00:00:00 UTC"));
        assert_eq!(format_block_time(i64::MAX), None);
    }
}
