//! Options controlling Arabic number spelling.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The four grammatical forms of a noun counted by a number, used to append
/// the counted thing (the "subject") after the spelled-out number.
///
/// | count (last two digits) | form used                 | example (riyal) |
/// |-------------------------|---------------------------|-----------------|
/// | 0, 1                    | `singular`                | ريال            |
/// | 2                       | `dual`                    | ريالان          |
/// | 3–10                    | `plural`                  | ريالات          |
/// | 11–99                   | `singular_accusative`     | ريالًا          |
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CountedNoun {
    /// Singular, e.g. `ريال`.
    pub singular: String,
    /// Dual, e.g. `ريالان`.
    pub dual: String,
    /// Plural, e.g. `ريالات`.
    pub plural: String,
    /// Accusative singular (tamyiz), e.g. `ريالًا`.
    pub singular_accusative: String,
}

impl CountedNoun {
    /// Build a counted noun from its four forms.
    pub fn new(
        singular: impl Into<String>,
        dual: impl Into<String>,
        plural: impl Into<String>,
        singular_accusative: impl Into<String>,
    ) -> Self {
        Self {
            singular: singular.into(),
            dual: dual.into(),
            plural: plural.into(),
            singular_accusative: singular_accusative.into(),
        }
    }
}

/// Switches for the Arabic speller. All default to off.
///
/// ```
/// use procalc_words::TafqitOptions;
///
/// let opts = TafqitOptions { comma: true, feminine: true, ..Default::default() };
/// assert!(opts.comma && !opts.legal);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(default))]
pub struct TafqitOptions {
    /// Use feminine number words for the units group (the group without a
    /// scale word).
    pub feminine: bool,
    /// Insert an Arabic comma `،` before each `و` joining scale groups.
    pub comma: bool,
    /// Write the hundreds digit apart from `مائة` (`ثلاث مائة`).
    pub split_hundred: bool,
    /// Spell hundred as `مئة` instead of `مائة`.
    pub miah: bool,
    /// Use `بليون`/`بلايين` for 10⁹ instead of `مليار`/`مليارات`.
    pub billions: bool,
    /// Legal style: keep the scale word after one or two hundred
    /// (`مائة ألف وألف` rather than `مائة وألف`).
    pub legal: bool,
    /// Accusative/genitive case endings (`اثنين`, `عشرين`) instead of the
    /// nominative (`اثنان`, `عشرون`).
    pub ag: bool,
    /// The number is followed by more text, which suppresses the tanween on
    /// a final scale word and uses the construct form of duals.
    pub text_to_follow: bool,
    /// Noun counted by the number, appended after it. Setting a subject
    /// implies [`text_to_follow`](Self::text_to_follow).
    pub subject: Option<CountedNoun>,
}

impl TafqitOptions {
    /// Default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the counted noun.
    pub fn with_subject(mut self, subject: CountedNoun) -> Self {
        self.subject = Some(subject);
        self
    }

    /// Whether the construct (followed-by-text) forms are in effect.
    pub(crate) fn followed_by_text(&self) -> bool {
        self.text_to_follow || self.subject.is_some()
    }
}
