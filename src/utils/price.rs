//! Price formatting utilities.
//!
//! Prices travel as strings holding a decimal amount. User input is accepted
//! with either a dot or a comma separator and normalized to two decimals.

use regex::Regex;
use std::sync::LazyLock;

static PRICE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(\d+)(?:[.,](\d{1,2}))?$").expect("Price regex pattern is valid")
});

/// Normalize a user-entered price into the `12.30` form.
///
/// # Returns
/// `None` if the input is not a non-negative decimal with at most two
/// fractional digits.
pub fn normalize_price(input: &str) -> Option<String> {
    let caps = PRICE_PATTERN.captures(input.trim())?;
    let whole = caps.get(1)?.as_str().trim_start_matches('0');
    let whole = if whole.is_empty() { "0" } else { whole };
    let fraction = caps.get(2).map(|m| m.as_str()).unwrap_or("");
    Some(format!("{}.{:0<2}", whole, fraction))
}
