//! Parsing and formatting helpers shared by the calendar, words and money
//! crates.

/// Number and date string formatting.
pub mod data_formatters;

/// Digit normalization and date string parsing.
pub mod data_parsers;

pub use data_formatters::{format_amount, format_hijri_date, format_iso_date};
pub use data_parsers::{normalize_digits, parse_hijri_date, parse_iso_date};
