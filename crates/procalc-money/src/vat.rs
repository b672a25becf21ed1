//! Value-added tax calculations.
//!
//! Rates are in percent (15.0 = 15 %). A calculator built with
//! [`VatCalculator::from_settings`] uses the process-wide default rate.

use procalc_core::errors::Result;
use procalc_core::{ensure, Amount, Percent, Settings};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Net amount, tax, and gross total of one VAT calculation.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct VatBreakdown {
    /// Amount before tax.
    pub net: Amount,
    /// Tax amount.
    pub vat: Amount,
    /// Amount including tax.
    pub total: Amount,
}

/// Calculator for a fixed VAT rate.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VatCalculator {
    rate: Percent,
}

impl VatCalculator {
    /// Create a calculator for `rate` percent.
    ///
    /// # Errors
    /// Returns a precondition error unless the rate is finite and above
    /// −100 %.
    pub fn new(rate: Percent) -> Result<Self> {
        ensure!(rate.is_finite(), "VAT rate must be finite, got {rate}");
        ensure!(rate > -100.0, "VAT rate must exceed -100%, got {rate}");
        Ok(Self { rate })
    }

    /// Create a calculator for the default rate in [`Settings`].
    pub fn from_settings() -> Result<Self> {
        Self::new(Settings::instance().vat_rate())
    }

    /// The rate in percent.
    pub fn rate(&self) -> Percent {
        self.rate
    }

    /// Add tax to a net amount.
    pub fn add_to_net(&self, net: Amount) -> VatBreakdown {
        let vat = net * self.rate / 100.0;
        VatBreakdown {
            net,
            vat,
            total: net + vat,
        }
    }

    /// Split a tax-inclusive total into its net amount and tax.
    pub fn split_total(&self, total: Amount) -> VatBreakdown {
        let vat = total * self.rate / (100.0 + self.rate);
        debug!(total, vat, rate = self.rate, "split VAT-inclusive total");
        VatBreakdown {
            net: total - vat,
            vat,
            total,
        }
    }

    /// Recover the taxable net amount from a tax amount.
    ///
    /// # Errors
    /// Returns a precondition error when the rate is not positive.
    pub fn net_from_vat(&self, vat: Amount) -> Result<Amount> {
        ensure!(
            self.rate > 0.0,
            "cannot recover the taxable amount at a rate of {}%",
            self.rate
        );
        Ok(vat * 100.0 / self.rate)
    }
}
