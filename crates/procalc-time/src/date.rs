//! Gregorian `Date` type.
//!
//! Dates are stored as a serial number of days in the proleptic Gregorian
//! calendar, counted the Rata Die way: serial 1 is January 1 of year 1.
//! Chrono's `num_days_from_ce` uses the same numbering, which keeps the
//! conversion to and from `chrono::NaiveDate` a plain copy.
//!
//! # Range
//! Years 1–9999 are supported. The lower end reaches back past the Hijri
//! epoch (622 CE); the upper end matches the four-digit ISO exchange format.

use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use procalc_core::errors::{Error, Result};
use procalc_core::utilities::{format_iso_date, parse_iso_date};
use procalc_core::Settings;

use crate::time_unit::TimeUnit;

/// A Gregorian calendar date represented as a serial number.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

// ── Constants ─────────────────────────────────────────────────────────────────

impl Date {
    /// Minimum valid date: January 1, 0001.
    pub const MIN: Date = Date(1);

    /// Maximum valid date: December 31, 9999.
    pub const MAX: Date = Date(3_652_059);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from a serial number.
    ///
    /// Returns an error if the serial lies outside [`Date::MIN`, `Date::MAX`].
    pub fn from_serial(serial: i32) -> Result<Self> {
        if !(Self::MIN.0..=Self::MAX.0).contains(&serial) {
            return Err(Error::InvalidDate(format!(
                "serial {serial} out of range [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(Date(serial))
    }

    /// Create a date from year (1–9999), month (1–12), and day-of-month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=9999).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "year {year} out of range [1, 9999]"
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year:04}-{month:02}"
            )));
        }
        Ok(Date(serial_from_ymd(year as i32, month, day)))
    }

    /// Today's date.
    ///
    /// Uses the [`Settings`] evaluation date when one is set, otherwise the
    /// local system date.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Date::from_serial(serial),
            None => Date::try_from(chrono::Local::now().date_naive()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Return the year (1–9999).
    pub fn year(&self) -> u16 {
        ymd_from_serial(self.0).0
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        ymd_from_serial(self.0).1
    }

    /// Return the day of the month (1–31).
    pub fn day_of_month(&self) -> u8 {
        ymd_from_serial(self.0).2
    }

    /// Return `(year, month, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        ymd_from_serial(self.0)
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Advance by `n` days.  Returns an error if the result is out of range.
    pub fn add_days(self, n: i32) -> Result<Self> {
        match self.0.checked_add(n) {
            Some(serial) => Date::from_serial(serial).map_err(|_| {
                Error::InvalidDate(format!("{self} + {n} days is out of range"))
            }),
            None => Err(Error::InvalidDate(format!(
                "{self} + {n} days overflows"
            ))),
        }
    }

    /// Advance by `n` units.
    ///
    /// Month and year steps keep the day of month, clamped to the length of
    /// the target month (Jan 31 + 1 month = Feb 28/29).
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => self.add_days(n),
            TimeUnit::Months => {
                let (y, m, d) = ymd_from_serial(self.0);
                let total_months = (y as i64) * 12 + (m as i64 - 1) + n as i64;
                let new_y = total_months.div_euclid(12);
                let new_m = (total_months.rem_euclid(12) + 1) as u8;
                if !(1..=9999).contains(&new_y) {
                    return Err(Error::InvalidDate(format!(
                        "{self} + {n} months: year {new_y} out of range"
                    )));
                }
                let new_y = new_y as u16;
                let new_d = d.min(days_in_month(new_y, new_m));
                Ok(Date(serial_from_ymd(new_y as i32, new_m, new_d)))
            }
            TimeUnit::Years => self.advance(checked_scale(n, 12)?, TimeUnit::Months),
        }
    }

    /// Convert to a `chrono::NaiveDate`.
    pub fn to_naive_date(self) -> NaiveDate {
        NaiveDate::from_num_days_from_ce_opt(self.0)
            .expect("every date in 1..=9999 is representable by chrono")
    }
}

fn checked_scale(n: i32, factor: i32) -> Result<i32> {
    n.checked_mul(factor)
        .ok_or_else(|| Error::InvalidDate(format!("{n} × {factor} overflows")))
}

// ── Conversions ───────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(value: NaiveDate) -> Result<Self> {
        Date::from_serial(value.num_days_from_ce())
    }
}

impl From<Date> for NaiveDate {
    fn from(value: Date) -> Self {
        value.to_naive_date()
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse an ISO `YYYY-MM-DD` string.
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_iso_date(s)
            .ok_or_else(|| Error::InvalidDate(format!("'{s}' is not a YYYY-MM-DD date")))?;
        Date::from_ymd(y, m, d)
    }
}

impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        f.write_str(&format_iso_date(y, m, d))
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (y, m, d) = ymd_from_serial(self.0);
        write!(f, "Date({y:04}-{m:02}-{d:02})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Date {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: u16) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

/// Number of days in a given month/year.
pub fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => unreachable!(),
    }
}

/// Convert (year, month, day) to a Rata Die serial number.
fn serial_from_ymd(year: i32, month: u8, day: u8) -> i32 {
    let prior = year - 1;
    let mut serial = prior * 365 + prior / 4 - prior / 100 + prior / 400;
    serial += MONTH_OFFSET[month as usize - 1] as i32;
    if month > 2 && is_leap_year(year as u16) {
        serial += 1;
    }
    serial + day as i32
}

/// Decompose a serial number into (year, month, day).
fn ymd_from_serial(serial: i32) -> (u16, u8, u8) {
    // 146 097 days per 400 Gregorian years; the estimate is off by at most one.
    let mut y = (serial as i64 * 400 / 146_097) as i32 + 1;
    loop {
        if serial < serial_from_ymd(y, 1, 1) {
            y -= 1;
        } else if serial >= serial_from_ymd(y + 1, 1, 1) {
            y += 1;
        } else {
            break;
        }
    }
    let year = y as u16;
    let mut remaining = serial - serial_from_ymd(y, 1, 1) + 1;
    let mut m = 1u8;
    loop {
        let days = days_in_month(year, m) as i32;
        if remaining <= days {
            break;
        }
        remaining -= days;
        m += 1;
    }
    (year, m, remaining as u8)
}

/// Cumulative day-of-year offset at the start of each month (non-leap).
const MONTH_OFFSET: [u16; 12] = [0, 31, 59, 90, 120, 151, 181, 212, 243, 273, 304, 334];

// ── Tests ─────────────────────────────────────────────────────────────────────
