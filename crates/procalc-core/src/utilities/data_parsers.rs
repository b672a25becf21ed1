//! Data parsing helpers.
//!
//! Date strings cross the library boundary in two shapes: Gregorian ISO
//! `YYYY-MM-DD` and Hijri `YYYY/MM/DD`. Both may arrive typed with
//! Arabic-Indic digits (`٠`–`٩`), which are folded to ASCII first.

/// Replace Arabic-Indic digits (`٠`–`٩`, U+0660–U+0669) with ASCII digits.
///
/// All other characters are left untouched.
pub fn normalize_digits(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '\u{0660}'..='\u{0669}' => char::from(b'0' + (c as u32 - 0x0660) as u8),
            _ => c,
        })
        .collect()
}

/// Parse a date string in ISO 8601 format (`YYYY-MM-DD`).
///
/// Returns `(year, month, day)` on success. Range checks are left to the
/// date type.
pub fn parse_iso_date(s: &str) -> Option<(u16, u8, u8)> {
    parse_three_fields(s, '-')
}

/// Parse a Hijri date string in `YYYY/MM/DD` format.
///
/// Returns `(year, month, day)` on success. Month and day need not be
/// zero-padded.
pub fn parse_hijri_date(s: &str) -> Option<(u16, u8, u8)> {
    parse_three_fields(s, '/')
}

fn parse_three_fields(s: &str, sep: char) -> Option<(u16, u8, u8)> {
    let s = normalize_digits(s.trim());
    let parts: Vec<&str> = s.split(sep).collect();
    if parts.len() != 3 {
        return None;
    }
    let year: u16 = parse_digits(parts[0])?;
    let month: u8 = parse_digits(parts[1])?;
    let day: u8 = parse_digits(parts[2])?;
    Some((year, month, day))
}

/// `str::parse` accepts a leading `+`; date fields must be bare digits.
fn parse_digits<T: std::str::FromStr>(field: &str) -> Option<T> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}
