//! Transliteration + approximate matching against the foreign lexicon
//!
//! Catches loanwords spelled phonetically in Serbian (`lajk`, `sori`) that
//! never appear verbatim in an English word list.

use std::sync::Arc;
use std::time::{Duration, Instant};

use super::patterns::has_vowel;
use super::Detector;
use crate::core::lexicon::Lexicon;
use crate::core::similarity::{ratio_chars, ratio_upper_bound};
use crate::core::token::{tokenize, Token};
use crate::core::transliteration::TransliterationTable;

/// Best foreign candidate for one word
#[derive(Debug, Clone, PartialEq)]
pub struct FuzzyMatch {
    pub word: String,
    /// Similarity in `0.0 ..= 100.0`
    pub score: f64,
}

/// Foreign lexicon pre-split into chars, in lexicon order
#[derive(Debug)]
struct Candidates {
    words: Vec<(String, Vec<char>)>,
}

impl Candidates {
    fn new(foreign: &Lexicon) -> Self {
        Self {
            words: foreign
                .iter()
                .map(|w| (w.to_string(), w.chars().collect()))
                .collect(),
        }
    }

    /// Exhaustive best match; first-encountered wins on equal scores
    ///
    /// Candidates whose length bound cannot beat the current best are skipped
    /// unscored. That never changes the winner since a skipped candidate
    /// could at most tie, and ties keep the earlier entry.
    fn best(&self, query: &[char]) -> Option<FuzzyMatch> {
        let mut best: Option<(usize, f64)> = None;

        for (i, (_, chars)) in self.words.iter().enumerate() {
            if let Some((_, best_score)) = best {
                if ratio_upper_bound(query.len(), chars.len()) <= best_score {
                    continue;
                }
            }

            let score = ratio_chars(query, chars);
            if best.map_or(true, |(_, s)| score > s) {
                best = Some((i, score));
                if score >= 100.0 {
                    break;
                }
            }
        }

        best.map(|(i, score)| FuzzyMatch {
            word: self.words[i].0.clone(),
            score,
        })
    }
}

/// Fuzzy loanword detector
#[derive(Debug, Clone)]
pub struct FuzzyMatcher {
    native: Arc<Lexicon>,
    candidates: Arc<Candidates>,
    table: Arc<TransliterationTable>,
    threshold: f64,
    min_len: usize,
    budget: Option<Duration>,
}

impl FuzzyMatcher {
    /// Default minimum token length for fuzzy matching
    pub const DEFAULT_MIN_LEN: usize = 3;

    pub fn new(
        native: Arc<Lexicon>,
        foreign: &Lexicon,
        table: Arc<TransliterationTable>,
        threshold: f64,
    ) -> Self {
        Self {
            native,
            candidates: Arc::new(Candidates::new(foreign)),
            table,
            threshold,
            min_len: Self::DEFAULT_MIN_LEN,
            budget: None,
        }
    }

    /// Same lexicons and table, different acceptance threshold
    pub fn with_threshold(&self, threshold: f64) -> Self {
        Self {
            threshold,
            ..self.clone()
        }
    }

    pub fn with_min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    /// Per-document time budget; remaining tokens are skipped once exceeded
    pub fn with_budget(mut self, budget: Option<Duration>) -> Self {
        self.budget = budget;
        self
    }

    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    /// Whether a token is considered at all
    ///
    /// Alphabetic, at least `min_len` characters, at least one vowel, and not
    /// an exact native word.
    pub fn is_eligible(&self, token: &Token) -> bool {
        token.is_alphabetic()
            && token.len() >= self.min_len
            && has_vowel(&token.cleaned)
            && !self.native.contains(&token.cleaned)
    }

    /// Best foreign candidate for an already-transliterated word
    ///
    /// `None` only when the foreign lexicon is empty.
    pub fn best_match(&self, word: &str) -> Option<FuzzyMatch> {
        let query: Vec<char> = word.to_lowercase().chars().collect();
        self.candidates.best(&query)
    }

    /// Transliterate then match one cleaned word; `Some` if accepted
    pub fn match_word(&self, cleaned: &str) -> Option<FuzzyMatch> {
        let transliterated = self.table.transliterate(cleaned);
        self.best_match(&transliterated)
            .filter(|m| m.score >= self.threshold)
    }

    /// Cleaned tokens of `text` accepted as loanwords, in text order
    ///
    /// Uses the matcher's own threshold; see [`Self::extract_fuzzy_at`].
    pub fn extract_fuzzy(&self, text: &str) -> Vec<String> {
        self.detect(&tokenize(text))
    }

    /// [`Self::extract_fuzzy`] with an explicit threshold for this call
    pub fn extract_fuzzy_at(&self, text: &str, threshold: f64) -> Vec<String> {
        self.with_threshold(threshold).extract_fuzzy(text)
    }
}

impl Detector for FuzzyMatcher {
    fn name(&self) -> &'static str {
        "fuzzy"
    }

    fn detect(&self, tokens: &[Token]) -> Vec<String> {
        let started = Instant::now();
        let mut identified = Vec::new();

        for token in tokens.iter().filter(|t| self.is_eligible(t)) {
            if let Some(budget) = self.budget {
                if started.elapsed() >= budget {
                    log::warn!(
                        "fuzzy budget {:?} exhausted at token {} of {}",
                        budget,
                        token.index,
                        tokens.len()
                    );
                    break;
                }
            }

            if let Some(m) = self.match_word(&token.cleaned) {
                log::trace!("fuzzy: {} ~ {} ({:.1})", token.cleaned, m.word, m.score);
                identified.push(token.cleaned.clone());
            }
        }

        identified
    }
}
