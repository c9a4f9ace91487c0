//! Crate error type

use std::path::PathBuf;

/// Result alias using [`AnglicismError`] by default.
pub type Result<T, E = AnglicismError> = std::result::Result<T, E>;

/// Errors raised while loading lexicons, corpora and configuration.
///
/// Classification itself never fails; "no match" is a normal negative result.
#[derive(Debug, thiserror::Error)]
pub enum AnglicismError {
    /// Word list could not be read
    #[error("failed to read lexicon {path}: {source}")]
    LexiconIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Corpus file could not be read
    #[error("failed to read corpus {path}: {source}")]
    CorpusIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration value
    #[error("invalid configuration: {0}")]
    Config(String),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
