//! Calendar units used by date arithmetic.

/// A calendar unit of time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeUnit {
    /// Calendar days.
    Days,
    /// Calendar months.
    Months,
    /// Calendar years (12 months).
    Years,
}
