//! # procalc-time
//!
//! Gregorian and Hijri dates, approximate calendar conversion, and
//! calendar-aware duration arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// End-date and date-difference calculations.
pub mod arithmetic;

/// Hijri ⇄ Gregorian converters.
pub mod converter;

/// Gregorian `Date` type.
pub mod date;

/// `Duration` — years, months, and days.
pub mod duration;

/// `HijriDate` type and the tabular calendar rules.
pub mod hijri;

/// `HijriMonth` — month of the Hijri year.
pub mod hijri_month;

/// `TimeUnit` — days, months, years.
pub mod time_unit;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use arithmetic::{
    calculate_date_difference, calculate_end_date, calculate_end_datetime, hijri_date_difference,
    hijri_end_date, verify_date_difference,
};
pub use converter::{
    current_hijri_date, detailed_hijri_date, format_gregorian_date, gregorian_to_hijri,
    hijri_to_gregorian, HijriConverter, MeanYearApproximation, TabularIslamic,
};
pub use date::Date;
pub use duration::Duration;
pub use hijri::{is_valid_hijri_date, HijriDate};
pub use hijri_month::{hijri_month_name, HijriMonth};
pub use time_unit::TimeUnit;
