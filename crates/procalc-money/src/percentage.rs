//! Percentage change and percentage adjustment of an amount.

use procalc_core::errors::Result;
use procalc_core::{ensure, fail, Amount, Percent, Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An amount before and after applying a percentage.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PercentageAdjustment {
    /// The amount the percentage was applied to.
    pub original: Amount,
    /// `original × percentage / 100`.
    pub adjustment: Amount,
    /// `original + adjustment`.
    pub final_amount: Amount,
}

/// Relative change from `base` to `new`, in percent.
///
/// # Errors
/// Returns a precondition error when `base` is zero, and a runtime error
/// when the result is not finite.
///
/// ```
/// use procalc_money::percentage_change;
///
/// assert_eq!(percentage_change(200.0, 250.0).unwrap(), 25.0);
/// ```
pub fn percentage_change(base: Amount, new: Amount) -> Result<Percent> {
    ensure!(base != 0.0, "percentage change from a zero base is undefined");
    let change: Real = (new - base) / base * 100.0;
    if !change.is_finite() {
        fail!("percentage change from {base} to {new} is not finite");
    }
    Ok(change)
}

/// Apply `percentage` (negative for a discount) to `amount`.
pub fn apply_percentage(amount: Amount, percentage: Percent) -> PercentageAdjustment {
    let adjustment = amount * percentage / 100.0;
    PercentageAdjustment {
        original: amount,
        adjustment,
        final_amount: amount + adjustment,
    }
}
