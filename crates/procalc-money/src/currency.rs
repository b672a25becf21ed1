//! `Currency` and `Money`, with amounts spelled out in Arabic.

use num_traits::ToPrimitive;
use procalc_core::errors::{Error, Result};
use procalc_core::utilities::format_amount;
use procalc_core::Real;
use procalc_words::{tafqit, CountedNoun, Numeral, TafqitOptions, ZERO_WORD};
use tracing::debug;

/// Arabic forms of a currency unit name, as used after a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArabicNoun {
    /// Singular (ريال).
    pub singular: &'static str,
    /// Dual (ريالان).
    pub dual: &'static str,
    /// Plural used for 3–10 (ريالات).
    pub plural: &'static str,
    /// Accusative singular used for 11–99 (ريالًا).
    pub singular_accusative: &'static str,
    /// Grammatical gender; numbers counting a feminine noun are feminine.
    pub feminine: bool,
}

impl ArabicNoun {
    /// The noun as a [`CountedNoun`] for the words converter.
    pub fn counted(&self) -> CountedNoun {
        CountedNoun::new(
            self.singular,
            self.dual,
            self.plural,
            self.singular_accusative,
        )
    }
}

/// Data describing a single currency.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Currency {
    /// Full name (e.g. "Saudi Riyal").
    pub name: &'static str,
    /// ISO 4217 alphabetic code (e.g. "SAR").
    pub code: &'static str,
    /// ISO 4217 numeric code (e.g. 682).
    pub numeric_code: u16,
    /// Symbol used in financial notation.
    pub symbol: &'static str,
    /// Number of fractional units per whole unit (100 halalas per riyal).
    pub fractions_per_unit: u32,
    /// Rounding precision (decimal places).
    pub rounding: u8,
    /// Arabic name of the whole unit.
    pub unit: ArabicNoun,
    /// Arabic name of the fractional unit.
    pub sub_unit: ArabicNoun,
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code)
    }
}

/// A monetary amount with an associated currency.
#[derive(Debug, Clone, PartialEq)]
pub struct Money {
    /// Numeric value.
    pub value: Real,
    /// The currency.
    pub currency: &'static Currency,
}

impl Money {
    /// Create a new monetary amount.
    pub fn new(value: Real, currency: &'static Currency) -> Self {
        Self { value, currency }
    }

    /// Split the amount, rounded to the currency's precision, into whole
    /// units and fractional units.
    ///
    /// # Errors
    /// [`Error::InvalidNumeral`] for negative, non-finite, or overflowing
    /// amounts.
    pub fn split(&self) -> Result<(u64, u64)> {
        if !self.value.is_finite() || self.value < 0.0 {
            return Err(Error::InvalidNumeral(format!(
                "{} cannot be spelled out as an amount",
                self.value
            )));
        }
        let per_unit = u64::from(self.currency.fractions_per_unit.max(1));
        let minor = (self.value * per_unit as Real)
            .round()
            .to_u64()
            .ok_or_else(|| Error::InvalidNumeral(format!("{} is too large", self.value)))?;
        Ok((minor / per_unit, minor % per_unit))
    }

    /// The amount in Arabic words with default options, e.g.
    /// `ألف وخمسمائة ريال وخمس وسبعون هللة` for 1500.75 SAR.
    pub fn in_words(&self) -> Result<String> {
        self.in_words_with(&TafqitOptions::default())
    }

    /// The amount in Arabic words. The counted noun and gender of `options`
    /// are replaced by the currency's unit and sub-unit; the other switches
    /// (comma, miah, legal, …) are honoured.
    ///
    /// Zero whole units with a non-zero fraction render only the fraction.
    /// A zero amount renders as `صفر` followed by the unit name.
    pub fn in_words_with(&self, options: &TafqitOptions) -> Result<String> {
        let (units, fraction) = self.split()?;
        debug!(units, fraction, currency = self.currency.code, "amount in words");

        if units == 0 && fraction == 0 {
            return Ok(format!("{ZERO_WORD} {}", self.currency.unit.singular));
        }
        let spell = |value: u64, noun: &ArabicNoun| {
            let opts = TafqitOptions {
                feminine: noun.feminine,
                subject: Some(noun.counted()),
                ..options.clone()
            };
            tafqit(&Numeral::from(value), &opts)
        };
        let parts: Vec<String> = [
            (units, &self.currency.unit),
            (fraction, &self.currency.sub_unit),
        ]
        .into_iter()
        .filter(|(value, _)| *value > 0)
        .map(|(value, noun)| spell(value, noun))
        .collect();
        Ok(parts.join(" و"))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}",
            format_amount(self.value, self.currency.rounding as usize),
            self.currency.code
        )
    }
}
