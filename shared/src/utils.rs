//! # Shared Utility Functions
//!
//! Display helpers used by the client and its command-line front end.
//!
//! ## Price Formatting
//!
//! - [`format_price`] - Dollar amount with thousands separators
//!
//! ```rust
//! use shared::utils::format_price;
//!
//! assert_eq!(format_price(1234.5), "$1,234.5");
//! ```

/// Format a price as dollars with thousands separators.
///
/// At most two decimals are kept and trailing zeros are dropped, so whole
/// amounts render without a fractional part.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_price;
///
/// assert_eq!(format_price(500.0), "$500");
/// assert_eq!(format_price(1_250_000.0), "$1,250,000");
/// assert_eq!(format_price(99.999), "$100");
/// assert_eq!(format_price(12.05), "$12.05");
/// ```
pub fn format_price(amount: f64) -> String {
    if !amount.is_finite() {
        return "$0".to_string();
    }

    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let fraction = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let sign = if amount < 0.0 && cents > 0 { "-" } else { "" };
    if fraction == 0 {
        format!("{sign}${grouped}")
    } else {
        let decimals = format!("{fraction:02}");
        format!("{sign}${grouped}.{}", decimals.trim_end_matches('0'))
    }
}
