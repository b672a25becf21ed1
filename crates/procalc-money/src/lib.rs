//! # procalc-money
//!
//! Currencies with Arabic unit names, amounts in words, and the VAT and
//! percentage calculators.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Currency and money types.
pub mod currency;

/// Pre-defined currencies.
pub mod currencies;

/// Percentage change and adjustment.
pub mod percentage;

/// VAT calculator.
pub mod vat;

pub use currency::{ArabicNoun, Currency, Money};
pub use percentage::{apply_percentage, percentage_change, PercentageAdjustment};
pub use vat::{VatBreakdown, VatCalculator};
