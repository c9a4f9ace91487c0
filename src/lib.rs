pub mod classify;
pub mod config;
pub mod core;
pub mod corpus;
pub mod detection;
pub mod error;
pub mod report;

pub use classify::{Bucket, Classifier, Document, Partition};
pub use config::ClassifierConfig;
pub use self::core::lexicon::Lexicon;
pub use self::core::token::{tokenize, Token};
pub use self::core::transliteration::transliterate;
pub use detection::{Detector, Label};
pub use error::{AnglicismError, Result};
