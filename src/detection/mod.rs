//! Loanword detection strategies
//!
//! Three independent detectors, from strictest to most permissive:
//!
//! 1. [`DictionaryDisambiguator`]: exact lexicon membership, context window
//!    for words present in both lexicons
//! 2. [`AcronymDetector`]: closed set of informal abbreviations
//! 3. [`FuzzyMatcher`]: transliteration followed by approximate matching
//!
//! All three implement [`Detector`] so each can be run and tuned on its own.

pub mod acronym;
pub mod dictionary;
pub mod fuzzy;
pub mod patterns;

pub use acronym::{AcronymDetector, AcronymSet};
pub use dictionary::{DictionaryDisambiguator, Label};
pub use fuzzy::{FuzzyMatch, FuzzyMatcher};

use crate::core::token::{tokenize, Token};

/// A document-level loanword detection strategy
pub trait Detector: Send + Sync {
    /// Short identifier used in logs
    fn name(&self) -> &'static str;

    /// Flagged tokens of one tokenized text, in text order
    fn detect(&self, tokens: &[Token]) -> Vec<String>;

    /// Tokenize then [`Detector::detect`]
    fn detect_text(&self, text: &str) -> Vec<String> {
        self.detect(&tokenize(text))
    }

    /// Whether the detector flags anything in `text`
    fn has_match(&self, text: &str) -> bool {
        !self.detect_text(text).is_empty()
    }
}
