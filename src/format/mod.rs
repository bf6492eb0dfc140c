//! Formatting utilities for the salary wizard engine.
//!
//! Pure functions converting raw numeric values into currency, percentage,
//! and fraction display strings, plus lenient decimal parsing for text-field
//! input. All functions are deterministic functions of their inputs.

mod currency;
mod parse;
mod percent;

pub use currency::{Currency, Locale, format_currency, round_half_up};
pub use parse::{ParseAmountError, parse_amount, parse_optional_amount};
pub use percent::{format_fraction_as_percent, format_percent};
