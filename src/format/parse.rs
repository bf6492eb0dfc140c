//! Lenient decimal parsing for text-field input.
//!
//! Autosave text fields deliver raw strings; this module normalizes currency
//! symbols, thousands separators, and whitespace before parsing.

use rust_decimal::Decimal;
use thiserror::Error;

/// Error returned when a string cannot be parsed as a monetary amount.
#[derive(Debug, Error)]
#[error("invalid amount '{input}': {source}")]
pub struct ParseAmountError {
    input: String,
    #[source]
    source: rust_decimal::Error,
}

/// Strips whitespace, a leading `$`, and comma thousands separators.
fn normalize_amount_input(s: &str) -> String {
    s.trim().trim_start_matches('$').replace(',', "")
}

/// Parses a user-entered string into a [`Decimal`] amount.
///
/// Handles a leading currency symbol and comma thousands separators
/// (e.g. `"$1,234.56"`). Empty or whitespace-only input is treated as 0.
/// Invalid non-empty input is an error (and is logged).
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    normalized.parse().map_err(|e| {
        tracing::warn!(input = %s, "invalid amount: {}", e);
        ParseAmountError {
            input: s.to_string(),
            source: e,
        }
    })
}

/// Parses a user-entered string into an optional [`Decimal`] amount.
///
/// Returns `None` for empty or whitespace-only input, or when parsing fails.
pub fn parse_optional_amount(s: &str) -> Option<Decimal> {
    let normalized = normalize_amount_input(s);
    if normalized.is_empty() {
        None
    } else {
        normalized.parse().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_parse_amount_accepts_comma_thousands_separator() {
        assert_eq!(parse_amount("1,234.56").unwrap(), dec!(1234.56));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn test_parse_amount_strips_currency_symbol() {
        assert_eq!(parse_amount("$40,000.00").unwrap(), dec!(40000.00));
    }

    #[test]
    fn test_parse_amount_trims_whitespace() {
        assert_eq!(parse_amount("  123.45  ").unwrap(), dec!(123.45));
    }

    #[test]
    fn test_parse_amount_empty_treated_as_zero() {
        assert_eq!(parse_amount("").unwrap(), Decimal::ZERO);
        assert_eq!(parse_amount("   ").unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_parse_amount_invalid_returns_error() {
        assert!(parse_amount("abc").is_err());
    }

    #[test]
    fn test_parse_optional_amount_handles_empty_and_invalid() {
        assert_eq!(parse_optional_amount("1,234.56"), Some(dec!(1234.56)));
        assert_eq!(parse_optional_amount(""), None);
        assert_eq!(parse_optional_amount("abc"), None);
    }
}
