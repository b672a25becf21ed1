//! Data formatting helpers.

/// Format a Gregorian date as ISO 8601 (`YYYY-MM-DD`).
pub fn format_iso_date(year: u16, month: u8, day: u8) -> String {
    format!("{year:04}-{month:02}-{day:02}")
}

/// Format a Hijri date as `YYYY/MM/DD` (month and day zero-padded).
pub fn format_hijri_date(year: u16, month: u8, day: u8) -> String {
    format!("{year}/{month:02}/{day:02}")
}

/// Format an amount with the given number of decimal places.
pub fn format_amount(value: f64, decimals: usize) -> String {
    format!("{:.prec$}", value, prec = decimals)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_dates() {
        assert_eq!(format_iso_date(2024, 1, 1), "2024-01-01");
        assert_eq!(format_iso_date(622, 7, 19), "0622-07-19");
        assert_eq!(format_hijri_date(1445, 6, 19), "1445/06/19");
    }

    #[test]
    fn test_format_amount() {
        assert_eq!(format_amount(1150.0, 2), "1150.00");
        assert_eq!(format_amount(0.126, 2), "0.13");
    }
}
