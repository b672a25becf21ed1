//! Integration tests for Hijri validation, conversion, and Hijri arithmetic.

use procalc_time::{
    gregorian_to_hijri, hijri_date_difference, hijri_end_date, hijri_month_name,
    hijri_to_gregorian, is_valid_hijri_date, Date, Duration, HijriConverter, HijriDate,
    MeanYearApproximation, TabularIslamic,
};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

#[test]
fn validity_examples() {
    assert!(is_valid_hijri_date("1445/07/29"));
    assert!(!is_valid_hijri_date("1445/13/01"));
    assert!(!is_valid_hijri_date("1445/07/31"));
    assert!(is_valid_hijri_date("١٤٤٥/٠٧/٢٩"));
}

#[test]
fn new_year_2024_converts_to_a_valid_hijri_string() {
    let hijri = gregorian_to_hijri(date(2024, 1, 1)).unwrap();
    assert_eq!(hijri, "1445/06/19");
    assert!(is_valid_hijri_date(&hijri));
    let parsed: HijriDate = hijri.parse().unwrap();
    assert_eq!(hijri_month_name(parsed.month()), "جمادى الآخرة");
}

#[test]
fn known_new_years() {
    // 1 Muharram in the tabular calendar
    assert_eq!(gregorian_to_hijri(date(2023, 7, 19)).unwrap(), "1445/01/01");
    assert_eq!(gregorian_to_hijri(date(2024, 7, 8)).unwrap(), "1446/01/01");
}

#[test]
fn mean_year_drift_stays_small_in_modern_era() {
    // The two methods disagree by a few days at most around the present.
    let mut d = date(2000, 1, 1);
    while d <= date(2030, 1, 1) {
        let tabular = TabularIslamic.to_hijri(d).unwrap();
        let back = MeanYearApproximation.to_gregorian(tabular).unwrap();
        assert!((back - d).abs() <= 3, "{d} → {tabular} → {back}");
        d = d.add_days(7).unwrap();
    }
}

#[test]
fn hijri_to_gregorian_rejects_bad_input() {
    assert!(hijri_to_gregorian("1445-07-29").is_err());
    assert!(hijri_to_gregorian("1445/00/29").is_err());
    assert!(hijri_to_gregorian("").is_err());
}

#[test]
fn hijri_arithmetic_round_trip() {
    let start = "1444/09/01";
    let end = hijri_end_date(start, &Duration::new(1, 2, 3)).unwrap();
    assert_eq!(end, "1445/11/04");
    assert_eq!(hijri_date_difference(start, &end).unwrap(), Duration::new(1, 2, 3));
    assert_eq!(hijri_date_difference(start, start).unwrap(), Duration::ZERO);
}
