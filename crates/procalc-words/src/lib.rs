//! # procalc-words
//!
//! Spell numbers out as words: Arabic tafqit with its grammatical options,
//! and plain English.
//!
//! ```
//! use procalc_words::{number_to_words, Language, Numeral, TafqitOptions};
//!
//! let n: Numeral = "١٢٣٤٥٦٧".parse().unwrap();
//! let opts = TafqitOptions { comma: true, ..Default::default() };
//! assert_eq!(
//!     number_to_words(&n, Language::Arabic, &opts).unwrap(),
//!     "مليون، ومائتان وأربعة وثلاثون ألفًا، وخمسمائة وسبعة وستون"
//! );
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Arabic spelling engine.
pub mod arabic;

/// English spelling.
pub mod english;

/// Output language selection.
pub mod language;

/// Validated input numbers.
pub mod numeral;

/// Arabic spelling options and counted nouns.
pub mod options;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use arabic::{tafqit, to_arabic_words, ZERO_WORD};
pub use english::to_english_words;
pub use language::{number_to_words, Language};
pub use numeral::{Numeral, MAX_DIGITS};
pub use options::{CountedNoun, TafqitOptions};
