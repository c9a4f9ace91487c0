//! Classifier settings (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{AnglicismError, Result};

/// Classifier settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ClassifierConfig {
    /// Context window (tokens per side) for ambiguous dictionary words
    #[serde(default = "default_window")]
    pub window: usize,
    /// Fuzzy threshold (0 ~ 100) deciding whether a text is fuzzy-flagged
    #[serde(default = "default_threshold")]
    pub flag_threshold: f64,
    /// Fuzzy threshold (0 ~ 100) for the reported `identified_fuzzy` tokens
    #[serde(default = "default_threshold")]
    pub report_threshold: f64,
    /// Minimum token length for fuzzy matching
    #[serde(default = "default_min_fuzzy_len")]
    pub min_fuzzy_len: usize,
    /// Acronym set override; `None` uses the built-in set
    #[serde(default)]
    pub acronyms: Option<Vec<String>>,
    /// Per-document fuzzy time budget (ms); `None` is unbounded
    #[serde(default)]
    pub fuzzy_budget_ms: Option<u64>,
    /// Classify documents on a rayon pool
    #[serde(default)]
    pub parallel: bool,
}

fn default_window() -> usize {
    1
}

fn default_threshold() -> f64 {
    90.0
}

fn default_min_fuzzy_len() -> usize {
    3
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self {
            window: default_window(),
            flag_threshold: default_threshold(),
            report_threshold: default_threshold(),
            min_fuzzy_len: default_min_fuzzy_len(),
            acronyms: None,
            fuzzy_budget_ms: None,
            parallel: false,
        }
    }
}

impl ClassifierConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_window(mut self, window: usize) -> Self {
        self.window = window;
        self
    }

    pub fn with_flag_threshold(mut self, threshold: f64) -> Self {
        self.flag_threshold = threshold;
        self
    }

    pub fn with_report_threshold(mut self, threshold: f64) -> Self {
        self.report_threshold = threshold;
        self
    }

    pub fn with_acronyms<I, S>(mut self, acronyms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.acronyms = Some(acronyms.into_iter().map(Into::into).collect());
        self
    }

    pub fn with_fuzzy_budget_ms(mut self, ms: Option<u64>) -> Self {
        self.fuzzy_budget_ms = ms;
        self
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn fuzzy_budget(&self) -> Option<Duration> {
        self.fuzzy_budget_ms.map(Duration::from_millis)
    }

    /// Reject thresholds outside `0 ~ 100`
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("flag_threshold", self.flag_threshold),
            ("report_threshold", self.report_threshold),
        ] {
            if !(0.0..=100.0).contains(&value) {
                return Err(AnglicismError::Config(format!(
                    "{} must be within 0..=100, got {}",
                    name, value
                )));
            }
        }
        Ok(())
    }
}

/// Load settings from a JSON file; missing fields take their defaults
pub fn load_config(path: impl AsRef<Path>) -> Result<ClassifierConfig> {
    let content = fs::read_to_string(path.as_ref())?;
    let config: ClassifierConfig = serde_json::from_str(&content)?;
    config.validate()?;
    Ok(config)
}

/// Save settings as pretty JSON, creating parent directories
pub fn save_config(path: impl AsRef<Path>, config: &ClassifierConfig) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(config)?;
    fs::write(path, json)?;
    Ok(())
}
