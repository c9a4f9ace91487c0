//! Corpus classification
//!
//! Each text runs through all three detectors; the resulting flags place it
//! in exactly one bucket, first match wins:
//!
//! 1. **Dictionary**: `has_english`
//! 2. **Acronym**: `has_acronym` and not the above
//! 3. **Fuzzy**: `has_fuzzy` and none of the above
//! 4. **Unflagged**: everything else
//!
//! # Example
//!
//! ```
//! use anglicism::classify::{Bucket, Classifier};
//! use anglicism::config::ClassifierConfig;
//! use anglicism::core::lexicon::Lexicon;
//!
//! let native = Lexicon::from_words(["kuca", "auto"]);
//! let foreign = Lexicon::from_words(["house", "car"]);
//! let classifier = Classifier::new(native, foreign, &ClassifierConfig::default()).unwrap();
//!
//! let doc = classifier.classify("auto lol house");
//! assert_eq!(doc.identified_english, vec!["house"]);
//! assert_eq!(doc.bucket(), Bucket::Dictionary);
//! ```

mod classifier;
mod document;
mod partition;

pub use classifier::Classifier;
pub use document::{Bucket, Document};
pub use partition::Partition;
