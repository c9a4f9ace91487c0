//! Dictionary-based classification with context-window disambiguation
//!
//! A token found in exactly one lexicon takes that lexicon's label. A token
//! found in both is decided by its unambiguous neighbours within `window`
//! positions; ties (including no evidence at all) resolve to native.

use std::sync::Arc;

use super::acronym::AcronymSet;
use super::Detector;
use crate::core::lexicon::Lexicon;
use crate::core::token::{tokenize, Token};

/// Result of a single dictionary decision
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Label {
    Foreign,
    Native,
    /// Matched neither lexicon (names, numbers, out-of-vocabulary words)
    Undetermined,
}

/// Lexicon membership of one cleaned form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Membership {
    ForeignOnly,
    NativeOnly,
    Both,
    Neither,
}

/// Dictionary detector
#[derive(Debug, Clone)]
pub struct DictionaryDisambiguator {
    native: Arc<Lexicon>,
    foreign: Arc<Lexicon>,
    acronyms: Arc<AcronymSet>,
    window: usize,
}

impl DictionaryDisambiguator {
    pub fn new(
        native: Arc<Lexicon>,
        foreign: Arc<Lexicon>,
        acronyms: Arc<AcronymSet>,
        window: usize,
    ) -> Self {
        Self {
            native,
            foreign,
            acronyms,
            window,
        }
    }

    pub fn window(&self) -> usize {
        self.window
    }

    fn membership(&self, cleaned: &str) -> Membership {
        match (self.foreign.contains(cleaned), self.native.contains(cleaned)) {
            (true, false) => Membership::ForeignOnly,
            (false, true) => Membership::NativeOnly,
            (true, true) => Membership::Both,
            (false, false) => Membership::Neither,
        }
    }

    /// Classify `tokens[index]` looking at up to `window` neighbours per side
    ///
    /// Out-of-range `index` yields [`Label::Undetermined`].
    pub fn classify(&self, tokens: &[Token], index: usize, window: usize) -> Label {
        let Some(token) = tokens.get(index) else {
            return Label::Undetermined;
        };

        match self.membership(&token.cleaned) {
            Membership::ForeignOnly => Label::Foreign,
            Membership::NativeOnly => Label::Native,
            Membership::Neither => Label::Undetermined,
            Membership::Both => {
                let start = index.saturating_sub(window);
                let end = index.saturating_add(window).saturating_add(1).min(tokens.len());

                let mut foreign_count = 0;
                let mut native_count = 0;
                for (i, neighbor) in tokens.iter().enumerate().take(end).skip(start) {
                    if i == index {
                        continue;
                    }
                    match self.membership(&neighbor.cleaned) {
                        Membership::ForeignOnly => foreign_count += 1,
                        Membership::NativeOnly => native_count += 1,
                        Membership::Both | Membership::Neither => {}
                    }
                }

                // ties go to native
                if foreign_count > native_count {
                    Label::Foreign
                } else {
                    Label::Native
                }
            }
        }
    }

    /// Cleaned tokens of `text` classified [`Label::Foreign`], in text order
    ///
    /// Acronyms are skipped, and only alphabetic tokens longer than one
    /// character are considered. Duplicates are kept.
    pub fn extract_foreign_tokens(&self, text: &str, window: usize) -> Vec<String> {
        self.extract_from_tokens(&tokenize(text), window)
    }

    /// Context is taken from the slice itself, so `tokens` may be any run of
    /// a tokenized text
    fn extract_from_tokens(&self, tokens: &[Token], window: usize) -> Vec<String> {
        tokens
            .iter()
            .enumerate()
            .filter(|(_, t)| !self.acronyms.contains_lowercase(&t.cleaned))
            .filter(|(_, t)| t.is_alphabetic() && t.len() > 1)
            .filter(|&(i, _)| self.classify(tokens, i, window) == Label::Foreign)
            .map(|(_, t)| t.cleaned.clone())
            .collect()
    }
}

impl Detector for DictionaryDisambiguator {
    fn name(&self) -> &'static str {
        "dictionary"
    }

    fn detect(&self, tokens: &[Token]) -> Vec<String> {
        self.extract_from_tokens(tokens, self.window)
    }
}
