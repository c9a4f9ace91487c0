//! Closed-set acronym detection
//!
//! Exact, case-insensitive membership against a fixed abbreviation set. No
//! disambiguation: the set is assumed not to overlap common native words.

use std::collections::HashSet;
use std::sync::Arc;

use super::patterns::DEFAULT_ACRONYMS;
use super::Detector;
use crate::core::token::{tokenize, Token};

/// Immutable set of lower-cased informal abbreviations
#[derive(Debug, Clone)]
pub struct AcronymSet {
    entries: HashSet<String>,
}

impl Default for AcronymSet {
    fn default() -> Self {
        Self::new(DEFAULT_ACRONYMS.iter().copied())
    }
}

impl AcronymSet {
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|s| s.as_ref().trim().to_lowercase())
                .filter(|s| !s.is_empty())
                .collect(),
        }
    }

    /// Case-insensitive membership
    pub fn contains(&self, word: &str) -> bool {
        if word.chars().any(char::is_uppercase) {
            self.entries.contains(&word.to_lowercase())
        } else {
            self.contains_lowercase(word)
        }
    }

    /// Membership for a word already lower-cased; no allocation
    pub fn contains_lowercase(&self, word: &str) -> bool {
        self.entries.contains(word)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Acronym detector over a shared [`AcronymSet`]
#[derive(Debug, Clone)]
pub struct AcronymDetector {
    set: Arc<AcronymSet>,
}

impl AcronymDetector {
    pub fn new(set: Arc<AcronymSet>) -> Self {
        Self { set }
    }

    pub fn set(&self) -> &AcronymSet {
        &self.set
    }

    /// Matched acronyms in text order, lower-cased, duplicates kept
    pub fn extract_acronyms(&self, text: &str) -> Vec<String> {
        self.detect(&tokenize(text))
    }

    /// Whether any token of `text` is an acronym
    pub fn contains_acronym(&self, text: &str) -> bool {
        tokenize(text)
            .iter()
            .any(|t| self.set.contains(&t.surface))
    }
}

impl Detector for AcronymDetector {
    fn name(&self) -> &'static str {
        "acronym"
    }

    fn detect(&self, tokens: &[Token]) -> Vec<String> {
        tokens
            .iter()
            .map(|t| t.surface.to_lowercase())
            .filter(|s| self.set.contains_lowercase(s))
            .collect()
    }
}
