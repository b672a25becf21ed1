//! `Duration` — a signed calendar span of years, months, and days.
//!
//! Unlike an elapsed-time duration, the components are kept separate: one
//! month is not a fixed number of days, so `{months: 1}` and `{days: 30}`
//! are different spans. The same record is the input of end-date
//! calculation and the output of date-difference calculation.

use procalc_core::Integer;

/// A calendar span. Absent components default to zero.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Duration {
    /// Whole years.
    pub years: Integer,
    /// Whole months.
    pub months: Integer,
    /// Whole days.
    pub days: Integer,
}

impl Duration {
    /// The empty span.
    pub const ZERO: Duration = Duration {
        years: 0,
        months: 0,
        days: 0,
    };

    /// Create a new span.
    pub fn new(years: Integer, months: Integer, days: Integer) -> Self {
        Self {
            years,
            months,
            days,
        }
    }

    /// A span of `n` years.
    pub fn years(n: Integer) -> Self {
        Self::new(n, 0, 0)
    }

    /// A span of `n` months.
    pub fn months(n: Integer) -> Self {
        Self::new(0, n, 0)
    }

    /// A span of `n` days.
    pub fn days(n: Integer) -> Self {
        Self::new(0, 0, n)
    }

    /// Return `true` if every component is zero.
    pub fn is_zero(&self) -> bool {
        *self == Self::ZERO
    }

    /// Negate every component (reverse direction).
    pub fn negated(self) -> Self {
        Self::new(-self.years, -self.months, -self.days)
    }
}

impl std::ops::Neg for Duration {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

impl std::fmt::Display for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}Y{}M{}D", self.years, self.months, self.days)
    }
}

impl std::fmt::Debug for Duration {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Duration({self})")
    }
}
