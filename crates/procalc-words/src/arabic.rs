//! Arabic number spelling (tafqit).
//!
//! The number is split into groups of three digits ("triplets"), each read
//! with its scale word (ألف, مليون, …) and joined with `و`. Arabic number
//! grammar drives most of the branching:
//!
//! * 1 and 2 with a scale collapse into the scale word itself (ألف, ألفان);
//! * 3–10 take the broken plural of the scale (آلاف, ملايين);
//! * 11–99 take the accusative singular, written with tanween (ألفًا);
//! * the units group may be feminine, in which case 3–10 lose the ة and the
//!   teens take عشرة.

use std::borrow::Cow;

use tracing::trace;

use crate::numeral::Numeral;
use crate::options::{CountedNoun, TafqitOptions};

/// Word for zero.
pub const ZERO_WORD: &str = "صفر";

const SCALES: [&str; 8] = [
    "", "ألف", "مليون", "مليار", "ترليون", "كوادرليون", "كوينتليون", "سكستليون",
];
const SCALES_PLURAL: [&str; 4] = ["", "آلاف", "ملايين", "مليارات"];

const MALE: [&str; 11] = [
    "", "واحد", "اثنان", "ثلاثة", "أربعة", "خمسة", "ستة", "سبعة", "ثمانية", "تسعة", "عشرة",
];
const FEMALE: [&str; 11] = [
    "", "واحدة", "اثنتان", "ثلاث", "أربع", "خمس", "ست", "سبع", "ثمان", "تسع", "عشر",
];

const AHAD: &str = "أحد";
const EHDA: &str = "إحدى";
const WA: &str = " و";
const ARABIC_COMMA: &str = "،";
/// Fathatan followed by alef.
const TANWEEN: &str = "\u{064B}\u{0627}";

// ── Case endings ──────────────────────────────────────────────────────────────

/// Suffixes and dual forms that change between the nominative and the
/// accusative/genitive case.
struct CaseForms {
    taa: &'static str,
    taan: &'static str,
    aa: &'static str,
    aan: &'static str,
    ethna: &'static str,
    ethnata: &'static str,
    ethnan: &'static str,
    ethnatan: &'static str,
    woon: &'static str,
}

const NOMINATIVE: CaseForms = CaseForms {
    taa: "تا",
    taan: "تان",
    aa: "ا",
    aan: "ان",
    ethna: "اثنا",
    ethnata: "اثنتا",
    ethnan: "اثنان",
    ethnatan: "اثنتان",
    woon: "ون",
};

const OBLIQUE: CaseForms = CaseForms {
    taa: "تي",
    taan: "تين",
    aa: "ي",
    aan: "ين",
    ethna: "اثني",
    ethnata: "اثنتي",
    ethnan: "اثنين",
    ethnatan: "اثنتين",
    woon: "ين",
};

// ── Grammar helpers ───────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Gender {
    Masculine,
    Feminine,
}

impl Gender {
    /// Units word for `n` in `0..=10`. `before_tens` selects إحدى for 1 in
    /// compounds such as إحدى وعشرون.
    fn unit(self, n: usize, case: &CaseForms, before_tens: bool) -> &'static str {
        match (self, n) {
            (Gender::Masculine, 2) => case.ethnan,
            (Gender::Feminine, 2) => case.ethnatan,
            (Gender::Feminine, 1) if before_tens => EHDA,
            (Gender::Masculine, _) => MALE[n],
            (Gender::Feminine, _) => FEMALE[n],
        }
    }

    /// Both words of the teen `10 + n`, `n` in `1..=9`.
    fn teen(self, n: usize, case: &CaseForms) -> (&'static str, &'static str) {
        match self {
            Gender::Masculine => {
                let first = match n {
                    1 => AHAD,
                    2 => case.ethna,
                    _ => MALE[n],
                };
                (first, FEMALE[10])
            }
            Gender::Feminine => {
                let first = match n {
                    1 => EHDA,
                    2 => case.ethnata,
                    _ => FEMALE[n],
                };
                (first, MALE[10])
            }
        }
    }
}

/// How a counted word agrees with the last two digits of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CountClass {
    Zero,
    One,
    Two,
    /// 3–10.
    Few,
    /// 11–99.
    Many,
}

impl CountClass {
    fn of(num_99: usize) -> Self {
        match num_99 {
            0 => CountClass::Zero,
            1 => CountClass::One,
            2 => CountClass::Two,
            3..=10 => CountClass::Few,
            _ => CountClass::Many,
        }
    }
}

struct Scale {
    singular: &'static str,
    plural: Cow<'static, str>,
}

// ── Speller ───────────────────────────────────────────────────────────────────

struct Speller<'a> {
    options: &'a TafqitOptions,
    case: &'static CaseForms,
    hundred: &'static str,
    followed: bool,
    gendered_units: Gender,
}

impl<'a> Speller<'a> {
    fn new(options: &'a TafqitOptions) -> Self {
        Self {
            options,
            case: if options.ag { &OBLIQUE } else { &NOMINATIVE },
            hundred: if options.miah { "مئة" } else { "مائة" },
            followed: options.followed_by_text(),
            gendered_units: if options.feminine {
                Gender::Feminine
            } else {
                Gender::Masculine
            },
        }
    }

    fn scale(&self, position: usize) -> Option<Scale> {
        if position == 0 {
            return None;
        }
        if self.options.billions && position == 3 {
            return Some(Scale {
                singular: "بليون",
                plural: Cow::Borrowed("بلايين"),
            });
        }
        let singular = SCALES[position];
        let plural = match SCALES_PLURAL.get(position) {
            Some(p) => Cow::Borrowed(*p),
            None => Cow::Owned(format!("{singular}ات")),
        };
        Some(Scale { singular, plural })
    }

    fn hundreds(&self, digit: usize, num_99: usize, has_scale: bool) -> String {
        match digit {
            0 => String::new(),
            1 => self.hundred.to_owned(),
            2 => {
                let stem = self.hundred.strip_suffix('ة').unwrap_or(self.hundred);
                let construct = (has_scale && num_99 == 0) || self.followed;
                let suffix = if construct { self.case.taa } else { self.case.taan };
                format!("{stem}{suffix}")
            }
            _ => {
                let sep = if self.options.split_hundred { " " } else { "" };
                format!("{}{sep}{}", FEMALE[digit], self.hundred)
            }
        }
    }

    fn below_hundred(&self, num_99: usize, gender: Gender) -> String {
        let (tens, unit) = (num_99 / 10, num_99 % 10);
        match num_99 {
            20.. => {
                let tens_stem = if tens == 2 { "عشر" } else { FEMALE[tens] };
                let wa = if unit > 0 { WA } else { "" };
                format!(
                    "{}{wa}{tens_stem}{}",
                    gender.unit(unit, self.case, true),
                    self.case.woon
                )
            }
            11..=19 => {
                let (first, second) = gender.teen(unit, self.case);
                format!("{first} {second}")
            }
            // One and two are spoken after a counted noun instead.
            1 | 2 if self.options.subject.is_some() => String::new(),
            _ => gender.unit(num_99, self.case, false).to_owned(),
        }
    }

    /// Words for one non-zero triplet.
    fn triplet(&self, value: usize, position: usize, is_last: bool) -> String {
        let num_99 = value % 100;
        let scale = self.scale(position);
        let gender = if scale.is_none() {
            self.gendered_units
        } else {
            Gender::Masculine
        };

        let hundreds = self.hundreds(value / 100, num_99, scale.is_some());
        let below = self.below_hundred(num_99, gender);
        let joiner = if !hundreds.is_empty() && num_99 > 0 { WA } else { "" };
        let mut words = format!("{hundreds}{joiner}{below}");

        let Some(scale) = scale else {
            return words;
        };
        let final_construct = is_last && self.followed;
        let with_hundreds = |tail: &str| {
            if hundreds.is_empty() {
                tail.to_owned()
            } else {
                let legal = if self.options.legal {
                    format!(" {}", scale.singular)
                } else {
                    String::new()
                };
                format!("{hundreds}{legal}{WA}{tail}")
            }
        };
        match CountClass::of(num_99) {
            CountClass::Zero => {
                words.push(' ');
                words.push_str(scale.singular);
            }
            CountClass::One => words = with_hundreds(scale.singular),
            CountClass::Two => {
                let dual = if final_construct { self.case.aa } else { self.case.aan };
                words = with_hundreds(&format!("{}{dual}", scale.singular));
            }
            CountClass::Few => {
                words.push(' ');
                words.push_str(&scale.plural);
            }
            CountClass::Many => {
                words.push(' ');
                words.push_str(scale.singular);
                if !final_construct {
                    words.push_str(TANWEEN);
                }
            }
        }
        words
    }

    fn counted_noun(&self, noun: &CountedNoun, last_triplet: usize) -> String {
        let num_99 = last_triplet % 100;
        match CountClass::of(num_99) {
            CountClass::Zero => format!(" {}", noun.singular),
            CountClass::One => format!(
                "{} {}",
                noun.singular,
                self.gendered_units.unit(1, self.case, false)
            ),
            CountClass::Two => format!(
                "{} {}",
                noun.dual,
                self.gendered_units.unit(2, self.case, false)
            ),
            CountClass::Few => format!(" {}", noun.plural),
            CountClass::Many => format!(" {}", noun.singular_accusative),
        }
    }
}

// ── Public API ────────────────────────────────────────────────────────────────

/// Spell `numeral` out in Arabic.
///
/// Zero is always `صفر`, whatever the options.
///
/// ```
/// use procalc_words::{tafqit, Numeral, TafqitOptions};
///
/// let n = Numeral::from(2024u64);
/// assert_eq!(tafqit(&n, &TafqitOptions::default()), "ألفان وأربعة وعشرون");
/// ```
pub fn tafqit(numeral: &Numeral, options: &TafqitOptions) -> String {
    if numeral.is_zero() {
        return ZERO_WORD.to_owned();
    }

    let digits = numeral.digits();
    let padded = format!("{}{digits}", "0".repeat((3 - digits.len() % 3) % 3));
    let triplets: Vec<usize> = padded
        .as_bytes()
        .chunks(3)
        .map(|c| c.iter().fold(0, |acc, b| acc * 10 + (b - b'0') as usize))
        .collect();
    let count = triplets.len();
    // Some: at least one triplet is non-zero.
    let last_effective = triplets.iter().rposition(|&t| t != 0).unwrap_or(count - 1);

    let speller = Speller::new(options);
    let mut words = String::new();
    for (i, &value) in triplets.iter().enumerate() {
        if value == 0 {
            continue;
        }
        let position = count - 1 - i;
        let is_last = i == last_effective;
        let piece = speller.triplet(value, position, is_last);
        trace!(triplet = value, position, piece = %piece, "tafqit triplet");
        words.push_str(&piece);
        if !is_last {
            if options.comma {
                words.push_str(ARABIC_COMMA);
            }
            words.push_str(WA);
        }
    }

    if let Some(noun) = &options.subject {
        words.push_str(&speller.counted_noun(noun, triplets[count - 1]));
    }
    words
}

/// Spell a machine integer out in Arabic.
pub fn to_arabic_words(value: u64, options: &TafqitOptions) -> String {
    tafqit(&Numeral::from(value), options)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(n: u64) -> String {
        to_arabic_words(n, &TafqitOptions::default())
    }

    #[test]
    fn units_and_teens() {
        assert_eq!(words(1), "واحد");
        assert_eq!(words(2), "اثنان");
        assert_eq!(words(10), "عشرة");
        assert_eq!(words(11), "أحد عشر");
        assert_eq!(words(12), "اثنا عشر");
        assert_eq!(words(15), "خمسة عشر");
    }

    #[test]
    fn tens() {
        assert_eq!(words(20), "عشرون");
        assert_eq!(words(21), "واحد وعشرون");
        assert_eq!(words(38), "ثمانية وثلاثون");
        assert_eq!(words(80), "ثمانون");
    }

    #[test]
    fn hundreds() {
        assert_eq!(words(100), "مائة");
        assert_eq!(words(200), "مائتان");
        assert_eq!(words(300), "ثلاثمائة");
        assert_eq!(words(105), "مائة وخمسة");
        assert_eq!(words(999), "تسعمائة وتسعة وتسعون");
    }

    #[test]
    fn scales() {
        assert_eq!(words(1000), "ألف");
        assert_eq!(words(2000), "ألفان");
        assert_eq!(words(3000), "ثلاثة آلاف");
        assert_eq!(words(11000), "أحد عشر ألفًا");
        assert_eq!(words(100_000), "مائة ألف");
        assert_eq!(words(101_000), "مائة وألف");
        assert_eq!(words(200_000), "مائتا ألف");
        assert_eq!(words(1_000_001), "مليون وواحد");
        assert_eq!(words(5_000_000_000), "خمسة مليارات");
        assert_eq!(words(7_000_000_000_000), "سبعة ترليونات");
    }

    #[test]
    fn tanween_is_fathatan_then_alef() {
        assert!(words(15_000).ends_with("ألف\u{064B}\u{0627}"));
    }

    #[test]
    fn feminine_applies_to_units_group_only() {
        let opts = TafqitOptions { feminine: true, ..Default::default() };
        assert_eq!(to_arabic_words(3, &opts), "ثلاث");
        assert_eq!(to_arabic_words(10, &opts), "عشر");
        assert_eq!(to_arabic_words(12, &opts), "اثنتا عشرة");
        assert_eq!(to_arabic_words(21, &opts), "إحدى وعشرون");
        assert_eq!(to_arabic_words(3003, &opts), "ثلاثة آلاف وثلاث");
    }

    #[test]
    fn case_endings() {
        let opts = TafqitOptions { ag: true, ..Default::default() };
        assert_eq!(to_arabic_words(2, &opts), "اثنين");
        assert_eq!(to_arabic_words(12, &opts), "اثني عشر");
        assert_eq!(to_arabic_words(30, &opts), "ثلاثين");
        assert_eq!(to_arabic_words(200, &opts), "مائتين");
        assert_eq!(to_arabic_words(2000, &opts), "ألفين");
    }

    #[test]
    fn zero_ignores_options() {
        let opts = TafqitOptions {
            feminine: true,
            comma: true,
            subject: Some(CountedNoun::new("ريال", "ريالان", "ريالات", "ريالًا")),
            ..Default::default()
        };
        assert_eq!(to_arabic_words(0, &opts), ZERO_WORD);
    }
}
