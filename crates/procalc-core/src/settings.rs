//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date** (the date treated as "today"),
//! the **Hijri day offset** applied when reporting the current Hijri date, and
//! the **default VAT rate**. It is a process-wide singleton accessed via a
//! `std::sync::OnceLock`.
//!
//! Thread safety: every value is stored behind a `Mutex` so that it can be
//! changed from any thread. Tests that change the evaluation date should use
//! [`ScopedEvaluationDate`] so the previous value is restored.

use std::sync::{Mutex, OnceLock};

use crate::Percent;

/// Default VAT rate in Saudi Arabia, in percent.
pub const DEFAULT_VAT_RATE: Percent = 15.0;

/// Process-wide settings used by the procalc library.
pub struct Settings {
    /// The current evaluation date (Rata Die serial, 0001-01-01 = 1).
    evaluation_date: Mutex<Option<i32>>,
    /// Days added to "today" before converting it to Hijri.
    hijri_day_offset: Mutex<i32>,
    /// Default VAT rate in percent.
    vat_rate: Mutex<Percent>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
            hijri_day_offset: Mutex::new(0),
            vat_rate: Mutex::new(DEFAULT_VAT_RATE),
        })
    }

    /// Return the current evaluation date serial number.
    ///
    /// Returns `None` if no evaluation date has been set, in which case the
    /// local system date is used.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the evaluation date as a serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use today".
    pub fn reset_evaluation_date(&self) {
        *self
            .evaluation_date
            .lock()
            .expect("Settings mutex poisoned") = None;
    }

    /// Day offset applied to today before reporting the current Hijri date.
    ///
    /// Local moon sighting can put a country one day ahead of or behind the
    /// arithmetic calendar; `-1` shifts the reported date back one day.
    pub fn hijri_day_offset(&self) -> i32 {
        *self
            .hijri_day_offset
            .lock()
            .expect("Settings mutex poisoned")
    }

    /// Set the Hijri day offset.
    pub fn set_hijri_day_offset(&self, offset: i32) {
        *self
            .hijri_day_offset
            .lock()
            .expect("Settings mutex poisoned") = offset;
    }

    /// Default VAT rate, in percent.
    pub fn vat_rate(&self) -> Percent {
        *self.vat_rate.lock().expect("Settings mutex poisoned")
    }

    /// Set the default VAT rate, in percent.
    pub fn set_vat_rate(&self, rate: Percent) {
        *self.vat_rate.lock().expect("Settings mutex poisoned") = rate;
    }
}

/// Sets the evaluation date for the lifetime of the guard and restores the
/// previous value on drop.
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Set the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}
