//! # procalc-core
//!
//! Core types, error definitions, and settings for procalc.
//!
//! This crate provides the foundational building blocks shared across all
//! other crates in the workspace – type aliases, the error hierarchy, the
//! process-wide `Settings`, and the digit / date-string helpers used at the
//! library boundary.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (evaluation date, Hijri offset, VAT rate).
pub mod settings;

/// Parsing and formatting helpers.
pub mod utilities;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used for monetary amounts and percentages.
pub type Real = f64;

/// Integer type used for calendar component counts (years, months, days).
pub type Integer = i32;

/// A percentage expressed in percent units (e.g. 15.0 = 15 %).
pub type Percent = Real;

/// A monetary value.
pub type Amount = Real;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedEvaluationDate, Settings};
