//! Word list loading
//!
//! A lexicon is an immutable set of lower-cased word forms. Insertion order
//! is kept alongside the set so exhaustive scans (fuzzy best match) visit
//! entries in a stable order.

use std::collections::HashSet;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AnglicismError, Result};

/// Immutable set of known word forms for one language
#[derive(Debug, Clone, Default)]
pub struct Lexicon {
    words: HashSet<String>,
    /// First-occurrence order of `words`
    order: Vec<String>,
}

impl Lexicon {
    /// Load a word list, one word per line
    ///
    /// Lines are trimmed and lower-cased; empty lines are skipped.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let io_err = |source: std::io::Error| AnglicismError::LexiconIo {
            path: path.to_path_buf(),
            source,
        };

        let file = File::open(path).map_err(io_err)?;
        let reader = BufReader::new(file);

        let mut lexicon = Self::default();
        for line in reader.lines() {
            let line = line.map_err(io_err)?;
            lexicon.insert(&line);
        }

        log::info!("lexicon loaded: {} ({} words)", path.display(), lexicon.len());
        Ok(lexicon)
    }

    /// Build from in-memory words, normalised the same way as [`Lexicon::load`]
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lexicon = Self::default();
        for w in words {
            lexicon.insert(w.as_ref());
        }
        lexicon
    }

    fn insert(&mut self, raw: &str) {
        let word = raw.trim().to_lowercase();
        if word.is_empty() {
            return;
        }
        if self.words.insert(word.clone()) {
            self.order.push(word);
        }
    }

    /// Exact membership of an already-cleaned form
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Entries in first-occurrence order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_load_normalises_lines() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "  House ").unwrap();
        writeln!(file).unwrap();
        writeln!(file, "car").unwrap();
        writeln!(file, "HOUSE").unwrap();
        writeln!(file, "   ").unwrap();

        let lexicon = Lexicon::load(file.path()).unwrap();
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("house"));
        assert!(lexicon.contains("car"));
        assert!(!lexicon.contains("House"));
        assert_eq!(lexicon.iter().collect::<Vec<_>>(), vec!["house", "car"]);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = Lexicon::load(dir.path().join("missing.txt"));
        assert!(matches!(result, Err(AnglicismError::LexiconIo { .. })));
    }

    #[test]
    fn test_from_words() {
        let lexicon = Lexicon::from_words(["Kuća", "auto", "", "auto"]);
        assert_eq!(lexicon.len(), 2);
        assert!(lexicon.contains("kuća"));
        assert!(!lexicon.is_empty());
        assert!(Lexicon::default().is_empty());
    }
}
