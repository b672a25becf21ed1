//! English number spelling.
//!
//! Output follows the common cheque style: hyphenated tens (`thirty-four`),
//! a comma after each scale group, and no `and`.

const BELOW_TWENTY: [&str; 20] = [
    "zero", "one", "two", "three", "four", "five", "six", "seven", "eight", "nine", "ten",
    "eleven", "twelve", "thirteen", "fourteen", "fifteen", "sixteen", "seventeen", "eighteen",
    "nineteen",
];

const TENS: [&str; 10] = [
    "", "ten", "twenty", "thirty", "forty", "fifty", "sixty", "seventy", "eighty", "ninety",
];

const SCALES: [(u64, &str); 6] = [
    (1_000_000_000_000_000_000, "quintillion"),
    (1_000_000_000_000_000, "quadrillion"),
    (1_000_000_000_000, "trillion"),
    (1_000_000_000, "billion"),
    (1_000_000, "million"),
    (1_000, "thousand"),
];

/// Spell `value` out in English.
///
/// ```
/// use procalc_words::to_english_words;
///
/// assert_eq!(to_english_words(1001), "one thousand, one");
/// assert_eq!(to_english_words(42), "forty-two");
/// ```
pub fn to_english_words(value: u64) -> String {
    if value == 0 {
        return BELOW_TWENTY[0].to_owned();
    }
    let mut parts = Vec::new();
    push_words(value, &mut parts);
    let joined = parts.join(" ");
    joined.strip_suffix(',').map(str::to_owned).unwrap_or(joined)
}

fn push_words(value: u64, parts: &mut Vec<String>) {
    if value == 0 {
        return;
    }
    let (word, rest) = match value {
        0..=19 => (BELOW_TWENTY[value as usize].to_owned(), 0),
        20..=99 => {
            let unit = value % 10;
            let word = if unit == 0 {
                TENS[(value / 10) as usize].to_owned()
            } else {
                format!("{}-{}", TENS[(value / 10) as usize], BELOW_TWENTY[unit as usize])
            };
            (word, 0)
        }
        100..=999 => (
            format!("{} hundred", BELOW_TWENTY[(value / 100) as usize]),
            value % 100,
        ),
        _ => {
            let (size, name) = SCALES
                .iter()
                .copied()
                .find(|(size, _)| value >= *size)
                .unwrap_or(SCALES[SCALES.len() - 1]);
            (
                format!("{} {name},", to_english_words(value / size)),
                value % size,
            )
        }
    };
    parts.push(word);
    push_words(rest, parts);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_numbers() {
        assert_eq!(to_english_words(0), "zero");
        assert_eq!(to_english_words(7), "seven");
        assert_eq!(to_english_words(19), "nineteen");
        assert_eq!(to_english_words(20), "twenty");
        assert_eq!(to_english_words(99), "ninety-nine");
        assert_eq!(to_english_words(100), "one hundred");
        assert_eq!(to_english_words(115), "one hundred fifteen");
    }

    #[test]
    fn scale_groups_are_comma_separated() {
        assert_eq!(to_english_words(1000), "one thousand");
        assert_eq!(
            to_english_words(1_234_567),
            "one million, two hundred thirty-four thousand, five hundred sixty-seven"
        );
        assert_eq!(to_english_words(2_000_000_003), "two billion, three");
    }

    #[test]
    fn largest_value() {
        assert!(to_english_words(u64::MAX).starts_with("eighteen quintillion,"));
        assert!(to_english_words(u64::MAX).ends_with("six hundred fifteen"));
    }
}
