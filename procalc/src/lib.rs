//! # procalc
//!
//! Calculators for procurement paperwork: Arabic number spelling (tafqit),
//! Hijri and Gregorian date arithmetic, and VAT.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `procalc-*` crates.
//!
//! ## Quick start
//!
//! ```rust
//! use procalc::money::{currencies::SAR, Money, VatCalculator};
//! use procalc::time::{calculate_end_date, Date, Duration};
//!
//! let gross = VatCalculator::new(15.0).unwrap().add_to_net(100.0);
//! let words = Money::new(gross.total, &SAR).in_words().unwrap();
//! assert_eq!(words, "مائة وخمسة عشر ريالًا");
//!
//! let start: Date = "2024-01-31".parse().unwrap();
//! let end = calculate_end_date(start, &Duration::months(1)).unwrap();
//! assert_eq!(end.to_string(), "2024-02-29");
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, settings, and error definitions.
pub use procalc_core as core;

/// Gregorian and Hijri dates, conversion, and duration arithmetic.
pub use procalc_time as time;

/// Number-to-words conversion.
pub use procalc_words as words;

/// Currencies, amounts in words, VAT and percentages.
pub use procalc_money as money;

// ── Flat re-exports of the most used items ────────────────────────────────────

pub use procalc_core::{Error, Result, Settings};
pub use procalc_money::{Money, VatCalculator};
pub use procalc_time::{
    calculate_date_difference, calculate_end_date, current_hijri_date, gregorian_to_hijri,
    hijri_month_name, hijri_to_gregorian, is_valid_hijri_date, Date, Duration,
};
pub use procalc_words::{number_to_words, tafqit, to_arabic_words, Language, Numeral, TafqitOptions};
