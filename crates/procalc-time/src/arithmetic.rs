//! Duration arithmetic on Gregorian and Hijri dates.
//!
//! End dates are computed by adding years, then months, then days. The order
//! matters because every month step clamps to the end of the target month:
//! Feb 29 + 1 year + 1 month is Mar 28, whereas Feb 29 + 13 months is Mar 29.
//!
//! Differences are calendar-aware rather than elapsed-day counts: whole
//! years are counted first, then whole months in the remainder, then days.
//! Each candidate is measured from the start date (with clamping), so
//! Jan 31 → Mar 1 is one month and one day in a common year.

use chrono::{DateTime, NaiveDateTime, TimeZone};
use procalc_core::errors::{Error, Result};

use crate::date::Date;
use crate::duration::Duration;
use crate::hijri::HijriDate;
use crate::time_unit::TimeUnit;

/// A date that supports month stepping and day counting, shared by the
/// Gregorian and Hijri difference calculations.
trait CalendarDay: Copy + Ord {
    /// `year × 12 + (month − 1)`.
    fn month_ordinal(&self) -> i64;
    fn plus_months(self, n: i32) -> Result<Self>;
    fn day_number(&self) -> i64;
}

impl CalendarDay for Date {
    fn month_ordinal(&self) -> i64 {
        self.year() as i64 * 12 + self.month() as i64 - 1
    }

    fn plus_months(self, n: i32) -> Result<Self> {
        self.advance(n, TimeUnit::Months)
    }

    fn day_number(&self) -> i64 {
        self.serial() as i64
    }
}

impl CalendarDay for HijriDate {
    fn month_ordinal(&self) -> i64 {
        self.year() as i64 * 12 + self.month() as i64 - 1
    }

    fn plus_months(self, n: i32) -> Result<Self> {
        self.advance(n, TimeUnit::Months)
    }

    fn day_number(&self) -> i64 {
        self.tabular_serial()
    }
}

fn anchored_difference<D: CalendarDay>(start: D, end: D) -> Result<Duration> {
    if end < start {
        return anchored_difference(end, start).map(Duration::negated);
    }
    let month_span = end.month_ordinal() - start.month_ordinal();

    let mut years = (month_span / 12) as i32;
    while years > 0 && start.plus_months(years * 12)? > end {
        years -= 1;
    }

    let mut months = (month_span - years as i64 * 12) as i32;
    while months > 0 && start.plus_months(years * 12 + months)? > end {
        months -= 1;
    }

    let anchor = start.plus_months(years * 12 + months)?;
    let days = (end.day_number() - anchor.day_number()) as i32;
    Ok(Duration::new(years, months, days))
}

// ── Gregorian ─────────────────────────────────────────────────────────────────

/// Add `duration` to `start`: years, then months, then days.
pub fn calculate_end_date(start: Date, duration: &Duration) -> Result<Date> {
    start
        .advance(duration.years, TimeUnit::Years)?
        .advance(duration.months, TimeUnit::Months)?
        .add_days(duration.days)
}

/// Add `duration` to a zoned date-time.
///
/// The calendar arithmetic is done on the local date and the local time of
/// day is carried over, so a start at local midnight ends at local midnight
/// even across a DST change. When the carried-over time does not exist on
/// the end date (a DST gap), the first instant after the gap is used.
pub fn calculate_end_datetime<Tz: TimeZone>(
    start: &DateTime<Tz>,
    duration: &Duration,
) -> Result<DateTime<Tz>> {
    let local = start.naive_local();
    let end_date = calculate_end_date(Date::try_from(local.date())?, duration)?;
    let naive_end = end_date.to_naive_date().and_time(local.time());
    resolve_local(&start.timezone(), naive_end)
}

fn resolve_local<Tz: TimeZone>(tz: &Tz, naive: NaiveDateTime) -> Result<DateTime<Tz>> {
    tz.from_local_datetime(&naive)
        .earliest()
        .or_else(|| {
            naive
                .checked_add_signed(chrono::Duration::hours(1))
                .and_then(|shifted| tz.from_local_datetime(&shifted).earliest())
        })
        .ok_or_else(|| Error::InvalidDate(format!("{naive} does not exist in the time zone")))
}

/// Calendar-aware difference `end − start` in whole years, months and days.
///
/// If `end` precedes `start` every component is negative.
pub fn calculate_date_difference(start: Date, end: Date) -> Result<Duration> {
    anchored_difference(start, end)
}

/// Return `true` if the difference between `start` and `end` is exactly
/// `expected`.
pub fn verify_date_difference(start: Date, end: Date, expected: &Duration) -> bool {
    calculate_date_difference(start, end).map_or(false, |d| d == *expected)
}

// ── Hijri ─────────────────────────────────────────────────────────────────────

/// Add `duration` to a `YYYY/MM/DD` Hijri date in the tabular calendar and
/// return the resulting `YYYY/MM/DD` string.
pub fn hijri_end_date(start: &str, duration: &Duration) -> Result<String> {
    let start: HijriDate = start.parse()?;
    let end = start
        .advance(duration.years, TimeUnit::Years)?
        .advance(duration.months, TimeUnit::Months)?
        .advance(duration.days, TimeUnit::Days)?;
    Ok(end.to_string())
}

/// Calendar-aware difference between two `YYYY/MM/DD` Hijri dates, counted
/// in Hijri years, months and days.
pub fn hijri_date_difference(start: &str, end: &str) -> Result<Duration> {
    let start: HijriDate = start.parse()?;
    let end: HijriDate = end.parse()?;
    anchored_difference(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{FixedOffset, LocalResult, NaiveTime, Timelike, Utc};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn end_date_adds_years_then_months_then_days() {
        let start = date(2024, 2, 29);
        let end = calculate_end_date(start, &Duration::new(1, 1, 0)).unwrap();
        assert_eq!(end, date(2025, 3, 28));
        let end = calculate_end_date(start, &Duration::months(13)).unwrap();
        assert_eq!(end, date(2025, 3, 29));
        let end = calculate_end_date(date(2023, 1, 31), &Duration::new(0, 1, 1)).unwrap();
        assert_eq!(end, date(2023, 3, 1));
    }

    #[test]
    fn end_date_with_negative_components() {
        let end = calculate_end_date(date(2024, 3, 31), &Duration::new(0, -1, -1)).unwrap();
        assert_eq!(end, date(2024, 2, 28));
        assert!(calculate_end_date(Date::MAX, &Duration::days(1)).is_err());
    }

    #[test]
    fn difference_is_anchored_on_start() {
        let diff = calculate_date_difference(date(2023, 1, 31), date(2023, 3, 1)).unwrap();
        assert_eq!(diff, Duration::new(0, 1, 1));
        let diff = calculate_date_difference(date(2020, 5, 15), date(2024, 5, 14)).unwrap();
        assert_eq!(diff, Duration::new(3, 11, 29));
        let diff = calculate_date_difference(date(2024, 2, 29), date(2025, 2, 28)).unwrap();
        assert_eq!(diff, Duration::new(1, 0, 0));
    }

    #[test]
    fn reversed_difference_is_negated() {
        let diff = calculate_date_difference(date(2024, 5, 14), date(2020, 5, 15)).unwrap();
        assert_eq!(diff, Duration::new(-3, -11, -29));
    }

    #[test]
    fn verify() {
        let start = date(2024, 1, 1);
        let end = date(2025, 2, 3);
        assert!(verify_date_difference(start, end, &Duration::new(1, 1, 2)));
        assert!(!verify_date_difference(start, end, &Duration::days(399)));
    }

    #[test]
    fn datetime_keeps_midnight() {
        let riyadh = FixedOffset::east_opt(3 * 3600).unwrap();
        let start = riyadh.with_ymd_and_hms(2024, 1, 31, 0, 0, 0).unwrap();
        let end = calculate_end_datetime(&start, &Duration::months(1)).unwrap();
        assert_eq!(end.naive_local().time(), NaiveTime::MIN);
        assert_eq!(end.date_naive(), chrono::NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    }

    #[test]
    fn datetime_keeps_time_of_day() {
        let start = Utc.with_ymd_and_hms(2024, 1, 1, 13, 45, 10).unwrap();
        let end = calculate_end_datetime(&start, &Duration::new(1, 0, 10)).unwrap();
        assert_eq!(end, Utc.with_ymd_and_hms(2025, 1, 11, 13, 45, 10).unwrap());
        assert_eq!(end.hour(), 13);
    }

    /// UTC+2 until 2024-03-31 00:00 UTC, then UTC+3. Local times from
    /// 02:00 to 03:00 on 2024-03-31 do not exist.
    #[derive(Debug, Clone, Copy)]
    struct SpringForward;

    impl SpringForward {
        fn before() -> FixedOffset {
            FixedOffset::east_opt(2 * 3600).unwrap()
        }

        fn after() -> FixedOffset {
            FixedOffset::east_opt(3 * 3600).unwrap()
        }

        fn switch_day() -> chrono::NaiveDate {
            chrono::NaiveDate::from_ymd_opt(2024, 3, 31).unwrap()
        }
    }

    impl TimeZone for SpringForward {
        type Offset = FixedOffset;

        fn from_offset(_: &FixedOffset) -> Self {
            SpringForward
        }

        fn offset_from_local_date(&self, local: &chrono::NaiveDate) -> LocalResult<FixedOffset> {
            LocalResult::Single(if *local <= Self::switch_day() {
                Self::before()
            } else {
                Self::after()
            })
        }

        fn offset_from_local_datetime(&self, local: &NaiveDateTime) -> LocalResult<FixedOffset> {
            let gap_start = Self::switch_day().and_hms_opt(2, 0, 0).unwrap();
            let gap_end = Self::switch_day().and_hms_opt(3, 0, 0).unwrap();
            if *local < gap_start {
                LocalResult::Single(Self::before())
            } else if *local < gap_end {
                LocalResult::None
            } else {
                LocalResult::Single(Self::after())
            }
        }

        fn offset_from_utc_date(&self, utc: &chrono::NaiveDate) -> FixedOffset {
            if *utc < Self::switch_day() {
                Self::before()
            } else {
                Self::after()
            }
        }

        fn offset_from_utc_datetime(&self, utc: &NaiveDateTime) -> FixedOffset {
            self.offset_from_utc_date(&utc.date())
        }
    }

    #[test]
    fn datetime_in_dst_gap_moves_past_the_gap() {
        let start = SpringForward.with_ymd_and_hms(2024, 3, 30, 2, 30, 0).unwrap();
        let end = calculate_end_datetime(&start, &Duration::days(1)).unwrap();
        let expected = SpringForward::switch_day().and_hms_opt(3, 30, 0).unwrap();
        assert_eq!(end.naive_local(), expected);
        assert_eq!(end.offset(), &SpringForward::after());

        let outside = calculate_end_datetime(&start, &Duration::days(2)).unwrap();
        assert_eq!(outside.naive_local().time(), NaiveTime::from_hms_opt(2, 30, 0).unwrap());
    }

    #[test]
    fn hijri_end_date_uses_hijri_months() {
        assert_eq!(hijri_end_date("1445/01/30", &Duration::months(1)).unwrap(), "1445/02/29");
        assert_eq!(hijri_end_date("1445/09/01", &Duration::days(30)).unwrap(), "1445/10/01");
        assert_eq!(hijri_end_date("1445/06/19", &Duration::years(1)).unwrap(), "1446/06/19");
        assert!(hijri_end_date("1445/13/01", &Duration::days(1)).is_err());
    }

    #[test]
    fn hijri_difference() {
        let diff = hijri_date_difference("1440/03/10", "1445/07/29").unwrap();
        assert_eq!(diff, Duration::new(5, 4, 19));
        let diff = hijri_date_difference("1445/07/29", "1440/03/10").unwrap();
        assert_eq!(diff, Duration::new(-5, -4, -19));
        assert!(hijri_date_difference("1445/07/31", "1445/08/01").is_err());
    }
}
