//! Per-text classification record

use serde::Serialize;

/// Output bucket, in priority order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Bucket {
    /// At least one dictionary-confirmed English token
    Dictionary,
    /// Acronym, and nothing from the dictionary detector
    Acronym,
    /// Fuzzy match only
    Fuzzy,
    /// No detector fired
    Unflagged,
}

impl Bucket {
    /// All buckets in priority order
    pub const ALL: [Bucket; 4] = [
        Bucket::Dictionary,
        Bucket::Acronym,
        Bucket::Fuzzy,
        Bucket::Unflagged,
    ];

    /// First matching bucket for the three detector flags
    pub fn from_flags(has_english: bool, has_acronym: bool, has_fuzzy: bool) -> Self {
        if has_english {
            Bucket::Dictionary
        } else if has_acronym {
            Bucket::Acronym
        } else if has_fuzzy {
            Bucket::Fuzzy
        } else {
            Bucket::Unflagged
        }
    }

    /// Report sheet name
    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Dictionary => "English Tweets",
            Bucket::Acronym => "Acronyms",
            Bucket::Fuzzy => "Fuzzy English",
            Bucket::Unflagged => "Remaining Tweets",
        }
    }
}

/// One classified text
///
/// Built once by the classifier; read-only afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Document {
    pub text: String,
    pub identified_english: Vec<String>,
    pub has_english: bool,
    pub identified_acronym: Vec<String>,
    pub has_acronym: bool,
    pub identified_fuzzy: Vec<String>,
    pub has_fuzzy: bool,
}

impl Document {
    pub fn bucket(&self) -> Bucket {
        Bucket::from_flags(self.has_english, self.has_acronym, self.has_fuzzy)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert_eq!(Bucket::from_flags(true, true, true), Bucket::Dictionary);
        assert_eq!(Bucket::from_flags(true, false, false), Bucket::Dictionary);
        assert_eq!(Bucket::from_flags(false, true, true), Bucket::Acronym);
        assert_eq!(Bucket::from_flags(false, false, true), Bucket::Fuzzy);
        assert_eq!(Bucket::from_flags(false, false, false), Bucket::Unflagged);
    }

    #[test]
    fn test_labels() {
        let labels: Vec<_> = Bucket::ALL.iter().map(Bucket::label).collect();
        assert_eq!(
            labels,
            vec!["English Tweets", "Acronyms", "Fuzzy English", "Remaining Tweets"]
        );
    }
}
