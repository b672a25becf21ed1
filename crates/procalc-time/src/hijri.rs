//! `HijriDate` — a date in the (arithmetic) Hijri calendar.
//!
//! Component validation is loose and matches what callers can
//! check without a calendar: year 1–9999, month 1–12, day 1–30. Month lengths
//! only matter once a date is moved, and there the **tabular** (civil)
//! Islamic calendar is used: odd months have 30 days, even months 29, and
//! Dhu al-Hijjah has 30 days in the 11 leap years of each 30-year cycle.
//!
//! The tabular calendar is an arithmetic approximation; observed calendars
//! such as Umm al-Qura can differ from it by a day or two.

use std::str::FromStr;

use procalc_core::errors::{Error, Result};
use procalc_core::utilities::{format_hijri_date, parse_hijri_date};

use crate::hijri_month::HijriMonth;
use crate::time_unit::TimeUnit;

/// Rata Die serial of 1 Muharram 1 AH in the tabular calendar
/// (July 16, 622 Julian = July 19, 622 proleptic Gregorian).
pub(crate) const TABULAR_EPOCH: i64 = 227_015;

/// A Hijri calendar date.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year: u16,
    month: u8,
    day: u8,
}

impl HijriDate {
    /// Largest supported Hijri year.
    pub const MAX_YEAR: u16 = 9999;

    /// Create a Hijri date, checking year ∈ [1, 9999], month ∈ [1, 12] and
    /// day ∈ [1, 30].
    pub fn new(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(1..=Self::MAX_YEAR).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "Hijri year {year} out of range [1, {}]",
                Self::MAX_YEAR
            )));
        }
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "Hijri month {month} out of range [1, 12]"
            )));
        }
        if !(1..=30).contains(&day) {
            return Err(Error::InvalidDate(format!(
                "Hijri day {day} out of range [1, 30]"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// Return the year.
    pub fn year(&self) -> u16 {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the month as a [`HijriMonth`].
    pub fn month_of_year(&self) -> HijriMonth {
        HijriMonth::from_number(self.month).expect("month validated on construction")
    }

    /// Return the day of the month (1–30).
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Advance by `n` units in the tabular calendar.
    ///
    /// Month and year steps keep the day of month, clamped to the length of
    /// the target month.
    pub fn advance(self, n: i32, unit: TimeUnit) -> Result<Self> {
        match unit {
            TimeUnit::Days => {
                let serial = self.tabular_serial() + n as i64;
                Self::from_tabular_serial(serial)
            }
            TimeUnit::Months => {
                let total = self.year as i64 * 12 + (self.month as i64 - 1) + n as i64;
                let year = total.div_euclid(12);
                let month = (total.rem_euclid(12) + 1) as u8;
                if !(1..=Self::MAX_YEAR as i64).contains(&year) {
                    return Err(Error::InvalidDate(format!(
                        "{self} + {n} months: Hijri year {year} out of range"
                    )));
                }
                let year = year as u16;
                let day = self.day.min(days_in_hijri_month(year, month));
                Ok(Self { year, month, day })
            }
            TimeUnit::Years => self.advance(checked_scale(n, 12)?, TimeUnit::Months),
        }
    }

    /// Rata Die serial of this date in the tabular calendar.
    pub(crate) fn tabular_serial(&self) -> i64 {
        fixed_from_hijri(self.year as i64, self.month, self.day)
    }

    /// Tabular Hijri date for a Rata Die serial.
    pub(crate) fn from_tabular_serial(serial: i64) -> Result<Self> {
        let year = (30 * (serial - TABULAR_EPOCH) + 10_646).div_euclid(10_631);
        if !(1..=Self::MAX_YEAR as i64).contains(&year) {
            return Err(Error::InvalidDate(format!(
                "serial {serial} falls in Hijri year {year}, outside [1, {}]",
                Self::MAX_YEAR
            )));
        }
        let mut month = 1u8;
        while month < 12 && serial >= fixed_from_hijri(year, month + 1, 1) {
            month += 1;
        }
        let day = serial - fixed_from_hijri(year, month, 1) + 1;
        Ok(Self {
            year: year as u16,
            month,
            day: day as u8,
        })
    }
}

fn checked_scale(n: i32, factor: i32) -> Result<i32> {
    n.checked_mul(factor)
        .ok_or_else(|| Error::InvalidDate(format!("{n} × {factor} overflows")))
}

impl FromStr for HijriDate {
    type Err = Error;

    /// Parse a `YYYY/MM/DD` string (ASCII or Arabic-Indic digits).
    fn from_str(s: &str) -> Result<Self> {
        let (y, m, d) = parse_hijri_date(s)
            .ok_or_else(|| Error::InvalidDate(format!("'{s}' is not a YYYY/MM/DD Hijri date")))?;
        HijriDate::new(y, m, d)
    }
}

impl std::fmt::Display for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&format_hijri_date(self.year, self.month, self.day))
    }
}

impl std::fmt::Debug for HijriDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "HijriDate({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for HijriDate {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

/// Return `true` if `s` is a `YYYY/MM/DD` string with year ∈ [1, 9999],
/// month ∈ [1, 12] and day ∈ [1, 30].
///
/// Exactly three numeric fields are required; `"1445/07"` is rejected.
pub fn is_valid_hijri_date(s: &str) -> bool {
    s.parse::<HijriDate>().is_ok()
}

/// Whether `year` is a leap year of the tabular calendar.
pub fn is_hijri_leap_year(year: u16) -> bool {
    (14 + 11 * year as u32) % 30 < 11
}

/// Number of days in a tabular Hijri month.
pub fn days_in_hijri_month(year: u16, month: u8) -> u8 {
    debug_assert!((1..=12).contains(&month));
    if month % 2 == 1 || (month == 12 && is_hijri_leap_year(year)) {
        30
    } else {
        29
    }
}

/// Rata Die serial of a tabular Hijri date.
fn fixed_from_hijri(year: i64, month: u8, day: u8) -> i64 {
    let month_days = (59 * (month as i64 - 1) + 1) / 2; // ceil(29.5 × (month − 1))
    day as i64 + month_days + (year - 1) * 354 + (3 + 11 * year).div_euclid(30) + TABULAR_EPOCH
        - 1
}
