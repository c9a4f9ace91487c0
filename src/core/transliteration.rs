//! Serbian Latin -> English phonetic transliteration
//!
//! Approximates how a Serbian spelling would be written by an English speaker,
//! so `lajk` can be compared against `like`.

/// Ordered substitution table: Serbian grapheme -> English phonetic spelling
///
/// Entries are applied one after another over the whole word, so later
/// entries also see the output of earlier ones (`č -> ch` then `c -> ts`).
pub const SERBIAN_TO_ENGLISH: [(&str, &str); 7] = [
    ("č", "ch"),
    ("ć", "ch"),
    ("c", "ts"),
    ("đ", "dj"),
    ("j", "y"),
    ("š", "sh"),
    ("ž", "zh"),
];

/// Deterministic substring substitution with a fixed entry order
#[derive(Debug, Clone)]
pub struct TransliterationTable {
    entries: Vec<(String, String)>,
}

impl Default for TransliterationTable {
    fn default() -> Self {
        Self::serbian()
    }
}

impl TransliterationTable {
    /// Built-in Serbian table
    pub fn serbian() -> Self {
        Self::new(SERBIAN_TO_ENGLISH)
    }

    /// Custom table; entries are applied in iteration order
    pub fn new<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            entries: entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }

    /// Apply every entry in order, lowercase form first, then uppercase form
    ///
    /// Case is preserved: `Č` becomes `CH`, `č` becomes `ch`.
    pub fn transliterate(&self, word: &str) -> String {
        let mut out = word.to_string();
        for (from, to) in &self.entries {
            out = out.replace(from.as_str(), to);
            let upper_from = from.to_uppercase();
            if upper_from != *from {
                out = out.replace(&upper_from, &to.to_uppercase());
            }
        }
        out
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Transliterate with the built-in Serbian table
pub fn transliterate(word: &str) -> String {
    TransliterationTable::serbian().transliterate(word)
}
