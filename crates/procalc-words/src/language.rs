//! Output language selection and the `number_to_words` dispatcher.

use std::fmt;
use std::str::FromStr;

use procalc_core::errors::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::arabic::tafqit;
use crate::english::to_english_words;
use crate::numeral::Numeral;
use crate::options::TafqitOptions;

/// Output language of [`number_to_words`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Language {
    /// Arabic (tafqit).
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "ar"))]
    Arabic,
    /// English.
    #[cfg_attr(feature = "serde", serde(rename = "en"))]
    English,
}

impl Language {
    /// ISO 639-1 code.
    pub fn code(self) -> &'static str {
        match self {
            Language::Arabic => "ar",
            Language::English => "en",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Language {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "ar" | "arabic" => Ok(Language::Arabic),
            "en" | "english" => Ok(Language::English),
            other => Err(Error::InvalidArgument(format!("unknown language '{other}'"))),
        }
    }
}

/// Spell `amount` out in `language`.
///
/// The options only affect Arabic output.
///
/// # Errors
/// [`Error::InvalidNumeral`] if English is requested for a value that does
/// not fit in a `u64`.
pub fn number_to_words(
    amount: &Numeral,
    language: Language,
    options: &TafqitOptions,
) -> Result<String> {
    match language {
        Language::Arabic => Ok(tafqit(amount, options)),
        Language::English => amount
            .to_u64()
            .map(to_english_words)
            .ok_or_else(|| {
                Error::InvalidNumeral(format!("{amount} is too large for English words"))
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dispatch() {
        let n = Numeral::from(21u64);
        let opts = TafqitOptions::default();
        assert_eq!(number_to_words(&n, Language::Arabic, &opts).unwrap(), "واحد وعشرون");
        assert_eq!(number_to_words(&n, Language::English, &opts).unwrap(), "twenty-one");
        assert_eq!(Language::default(), Language::Arabic);
    }

    #[test]
    fn english_limit() {
        let big = Numeral::parse(&"1".repeat(21)).unwrap();
        let opts = TafqitOptions::default();
        assert!(number_to_words(&big, Language::Arabic, &opts).is_ok());
        assert!(matches!(
            number_to_words(&big, Language::English, &opts),
            Err(Error::InvalidNumeral(_))
        ));
    }

    #[test]
    fn parse_language() {
        assert_eq!("EN".parse::<Language>().unwrap(), Language::English);
        assert_eq!("ar".parse::<Language>().unwrap(), Language::Arabic);
        assert!("fr".parse::<Language>().is_err());
        assert_eq!(Language::English.to_string(), "en");
    }
}
