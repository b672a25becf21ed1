//! Hijri ⇄ Gregorian conversion.
//!
//! Two arithmetic methods are provided behind the [`HijriConverter`] trait:
//!
//! * [`TabularIslamic`]: the civil (tabular) Islamic calendar: a 30-year
//!   cycle of 354- and 355-day years. Exact inverse in both directions.
//! * [`MeanYearApproximation`]: elapsed days are estimated with a mean year
//!   of 354.367068 days and 29.5-day months counted from 19 July 622.
//!
//! Neither follows moon sighting or the Umm al-Qura tables, so results may
//! drift from official calendars by one or more days (more for the mean-year
//! method over long spans). Callers should present converted dates as
//! approximate.
//!
//! The free functions keep the established behavior of the calculator:
//! [`gregorian_to_hijri`] uses the tabular calendar while
//! [`hijri_to_gregorian`] uses the mean-year estimate, so the two are **not**
//! exact inverses. Use a converter directly to get a consistent pair.

use procalc_core::errors::{Error, Result};
use procalc_core::Settings;
use tracing::debug;

use crate::date::Date;
use crate::hijri::HijriDate;

/// Mean length of a Hijri year, in days.
pub const MEAN_HIJRI_YEAR_DAYS: f64 = 354.367_068;

/// Mean length of a Hijri month used by the mean-year estimate, in days.
pub const MEAN_HIJRI_MONTH_DAYS: f64 = 29.5;

/// Serial of the mean-year anchor, 19 July 622 (proleptic Gregorian).
const MEAN_YEAR_EPOCH: i64 = 227_015;

/// Converts dates between the Gregorian and Hijri calendars.
pub trait HijriConverter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of the method.
    fn name(&self) -> &str;

    /// Convert a Gregorian date to Hijri.
    fn to_hijri(&self, date: Date) -> Result<HijriDate>;

    /// Convert a Hijri date to Gregorian.
    fn to_gregorian(&self, date: HijriDate) -> Result<Date>;
}

// ── Tabular ───────────────────────────────────────────────────────────────────

/// The civil (tabular) Islamic calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct TabularIslamic;

impl HijriConverter for TabularIslamic {
    fn name(&self) -> &str {
        "Tabular Islamic (civil)"
    }

    fn to_hijri(&self, date: Date) -> Result<HijriDate> {
        HijriDate::from_tabular_serial(date.serial() as i64).map_err(|_| {
            Error::InvalidDate(format!("{date} precedes the Hijri epoch"))
        })
    }

    fn to_gregorian(&self, date: HijriDate) -> Result<Date> {
        let serial = i32::try_from(date.tabular_serial())
            .map_err(|_| Error::InvalidDate(format!("{date} is out of range")))?;
        Date::from_serial(serial)
            .map_err(|_| Error::InvalidDate(format!("{date} falls after 9999-12-31")))
    }
}

// ── Mean year ─────────────────────────────────────────────────────────────────

/// Mean-year estimate: `floor((y − 1) × 354.367068 + (m − 1) × 29.5 + d)`
/// days after 19 July 622.
#[derive(Debug, Clone, Copy, Default)]
pub struct MeanYearApproximation;

impl MeanYearApproximation {
    /// Fractional day count at which month `month` of `year` begins, before
    /// adding the day of month.
    fn month_offset(year: u16, month: u8) -> f64 {
        (year as f64 - 1.0) * MEAN_HIJRI_YEAR_DAYS + (month as f64 - 1.0) * MEAN_HIJRI_MONTH_DAYS
    }

    /// Whole days between the epoch and `date`.
    pub fn elapsed_days(date: HijriDate) -> i64 {
        (Self::month_offset(date.year(), date.month()) + date.day() as f64).floor() as i64
    }
}

impl HijriConverter for MeanYearApproximation {
    fn name(&self) -> &str {
        "Mean-year approximation"
    }

    /// Inverse of the mean-year estimate: picks the latest year and month
    /// starting on or before `date`.
    fn to_hijri(&self, date: Date) -> Result<HijriDate> {
        let elapsed = date.serial() as i64 - MEAN_YEAR_EPOCH;
        if elapsed < 1 {
            return Err(Error::InvalidDate(format!(
                "{date} precedes the Hijri epoch"
            )));
        }
        let first_day = |y: u16, m: u8| Self::month_offset(y, m).floor() as i64 + 1;
        let mut year = ((elapsed - 1) as f64 / MEAN_HIJRI_YEAR_DAYS) as i64 + 1;
        while year > 1 && first_day(year as u16, 1) > elapsed {
            year -= 1;
        }
        while year < HijriDate::MAX_YEAR as i64 && first_day(year as u16 + 1, 1) <= elapsed {
            year += 1;
        }
        let year = year as u16;
        let month = (1..=12u8)
            .rev()
            .find(|&m| first_day(year, m) <= elapsed)
            .unwrap_or(1);
        let day = elapsed - Self::month_offset(year, month).floor() as i64;
        HijriDate::new(year, month, day as u8)
    }

    fn to_gregorian(&self, date: HijriDate) -> Result<Date> {
        let elapsed = Self::elapsed_days(date);
        let serial = MEAN_YEAR_EPOCH + elapsed;
        i32::try_from(serial)
            .map_err(|_| Error::InvalidDate(format!("{date} is out of range")))
            .and_then(Date::from_serial)
            .map_err(|_| Error::InvalidDate(format!("{date} falls after 9999-12-31")))
    }
}

// ── Calculator entry points ───────────────────────────────────────────────────

/// Convert a Gregorian date to a `YYYY/MM/DD` Hijri string (tabular
/// calendar; approximate).
pub fn gregorian_to_hijri(date: Date) -> Result<String> {
    let hijri = TabularIslamic.to_hijri(date)?;
    debug!(%date, %hijri, method = TabularIslamic.name(), "gregorian to hijri");
    Ok(hijri.to_string())
}

/// Convert a `YYYY/MM/DD` Hijri string to a Gregorian date (mean-year
/// estimate; approximate, may drift by several days).
pub fn hijri_to_gregorian(hijri: &str) -> Result<Date> {
    let parsed: HijriDate = hijri.parse()?;
    let date = MeanYearApproximation.to_gregorian(parsed)?;
    debug!(%parsed, %date, method = MeanYearApproximation.name(), "hijri to gregorian");
    Ok(date)
}

/// Today's Hijri date as `YYYY/MM/DD`.
///
/// "Today" is the [`Settings`] evaluation date (or the local date), shifted
/// by the Settings Hijri day offset.
pub fn current_hijri_date() -> Result<String> {
    let offset = Settings::instance().hijri_day_offset();
    let today = Date::today()?.add_days(offset)?;
    gregorian_to_hijri(today)
}

/// Long-form Hijri date with the Arabic month name, e.g.
/// `"19 جمادى الآخرة 1445 هـ"`.
pub fn detailed_hijri_date(date: Date) -> Result<String> {
    let hijri = TabularIslamic.to_hijri(date)?;
    Ok(format!(
        "{} {} {} هـ",
        hijri.day(),
        hijri.month_of_year().arabic_name(),
        hijri.year()
    ))
}

/// Format a Gregorian date for display (`YYYY-MM-DD`).
pub fn format_gregorian_date(date: Date) -> String {
    date.to_string()
}
