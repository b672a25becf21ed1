//! Error types for procalc.
//!
//! Every failure in the workspace is a deterministic, per-call input error,
//! so a single `thiserror`-derived enum covers them all. The `ensure!` and
//! `fail!` convenience macros defined here keep precondition checks terse.

use thiserror::Error;

/// The top-level error type used throughout procalc.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Input to the words converter is not a non-negative integer that can
    /// be spelled out (non-numeric, signed, fractional, or too large).
    #[error("invalid numeral: {0}")]
    InvalidNumeral(String),

    /// Malformed date string, out-of-range date component, or date
    /// arithmetic leaving the supported range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout procalc.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use procalc_core::{ensure, errors::Error};
/// fn positive(x: f64) -> procalc_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use procalc_core::{fail, errors::Error};
/// fn always_err() -> procalc_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checked_rate(rate: f64) -> Result<f64> {
        ensure!(rate > -100.0, "rate {rate} must be greater than -100");
        Ok(rate)
    }

    #[test]
    fn ensure_maps_to_precondition() {
        assert_eq!(checked_rate(15.0), Ok(15.0));
        assert_eq!(
            checked_rate(-150.0),
            Err(Error::Precondition("rate -150 must be greater than -100".into()))
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Error::InvalidDate("1445/13/01".into()).to_string(),
            "invalid date: 1445/13/01"
        );
        assert_eq!(
            Error::InvalidNumeral("-5".into()).to_string(),
            "invalid numeral: -5"
        );
    }
}
