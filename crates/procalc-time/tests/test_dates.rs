//! Integration tests for the Gregorian `Date` type and duration arithmetic.

use proptest::prelude::*;

use procalc_time::date::{days_in_month, is_leap_year};
use procalc_time::{calculate_date_difference, calculate_end_date, Date, Duration};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Date consistency test ────────────────────────────────────────────────────

#[test]
fn test_consistency() {
    // Walk a wide serial range and check every day-to-day invariant.
    let first = date(1500, 1, 1).serial();
    let last = date(2500, 12, 31).serial();

    let (mut y_old, mut m_old, mut d_old) = Date::from_serial(first - 1).unwrap().ymd();
    for serial in first..=last {
        let t = Date::from_serial(serial).unwrap();
        let (y, m, d) = t.ymd();

        // Check if skipping any date
        let next_day = d == d_old + 1 && m == m_old && y == y_old;
        let next_month = d == 1 && m == m_old + 1 && y == y_old;
        let next_year = d == 1 && m == 1 && m_old == 12 && y == y_old + 1;
        assert!(
            next_day || next_month || next_year,
            "wrong day, month, year increment: {t:?} after {y_old}-{m_old}-{d_old}"
        );

        assert!(d >= 1 && d <= days_in_month(y, m), "invalid day in {t:?}");

        // Check ymd round trip
        assert_eq!(date(y, m, d).serial(), serial);

        y_old = y;
        m_old = m;
        d_old = d;
    }
}

#[test]
fn leap_years() {
    assert!(is_leap_year(2000));
    assert!(is_leap_year(2024));
    assert!(!is_leap_year(1900));
    assert!(!is_leap_year(2023));
}

// ─── Arithmetic properties ────────────────────────────────────────────────────

#[test]
fn plus_one_year_preserves_month_and_day() {
    for (y, m, d) in [(2023, 1, 31), (2023, 6, 15), (2023, 12, 31)] {
        let end = calculate_end_date(date(y, m, d), &Duration::years(1)).unwrap();
        assert_eq!(end.ymd(), (y + 1, m, d));
    }
    let end = calculate_end_date(date(2024, 2, 29), &Duration::years(1)).unwrap();
    assert_eq!(end.ymd(), (2025, 2, 28));
}

fn any_date() -> impl Strategy<Value = Date> {
    (1..=Date::MAX.serial()).prop_map(|s| Date::from_serial(s).unwrap())
}

proptest! {
    #[test]
    fn self_difference_is_zero(d in any_date()) {
        prop_assert_eq!(calculate_date_difference(d, d).unwrap(), Duration::ZERO);
    }

    #[test]
    fn difference_then_end_date_returns_to_end(
        start in 700_000..760_000i32,
        span in 0..4_000i32,
    ) {
        let start = Date::from_serial(start).unwrap();
        let end = start.add_days(span).unwrap();
        let diff = calculate_date_difference(start, end).unwrap();
        prop_assert!(diff.years >= 0 && diff.months >= 0 && diff.days >= 0);
        prop_assert!(diff.months < 12);
        // Years and months together, then days, land back on `end`.
        let anchor = start.advance(diff.years * 12 + diff.months, procalc_time::TimeUnit::Months).unwrap();
        prop_assert_eq!(anchor.add_days(diff.days).unwrap(), end);
    }

    #[test]
    fn year_step_keeps_month(d in any_date()) {
        prop_assume!(d.year() < 9999);
        let next = calculate_end_date(d, &Duration::years(1)).unwrap();
        prop_assert_eq!(next.year(), d.year() + 1);
        prop_assert_eq!(next.month(), d.month());
        prop_assert!(next.day_of_month() <= d.day_of_month());
    }
}
