//! Corpus input
//!
//! Plain text files hold one text per line. CoNLL-U files keep each sentence
//! text in a `# text = ...` comment; only those lines are taken.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use crate::error::{AnglicismError, Result};

const CONLLU_TEXT_PREFIX: &str = "# text =";

/// Non-empty lines, trimmed
pub fn read_lines<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut texts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        let trimmed = line.trim();
        if !trimmed.is_empty() {
            texts.push(trimmed.to_string());
        }
    }
    Ok(texts)
}

/// Values of every `# text = ...` comment line
pub fn extract_conllu_texts<R: BufRead>(reader: R) -> std::io::Result<Vec<String>> {
    let mut texts = Vec::new();
    for line in reader.lines() {
        let line = line?;
        if !line.starts_with(CONLLU_TEXT_PREFIX) {
            continue;
        }
        if let Some((_, text)) = line.split_once("= ") {
            texts.push(text.trim().to_string());
        }
    }
    Ok(texts)
}

fn is_conllu(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("conllu") || e.eq_ignore_ascii_case("conllup"))
}

/// Load a corpus file, choosing the format by extension
pub fn load(path: impl AsRef<Path>) -> Result<Vec<String>> {
    let path = path.as_ref();
    let io_err = |source: std::io::Error| AnglicismError::CorpusIo {
        path: path.to_path_buf(),
        source,
    };

    let reader = BufReader::new(File::open(path).map_err(io_err)?);
    let texts = if is_conllu(path) {
        extract_conllu_texts(reader)
    } else {
        read_lines(reader)
    }
    .map_err(io_err)?;

    log::info!("corpus loaded: {} ({} texts)", path.display(), texts.len());
    Ok(texts)
}
