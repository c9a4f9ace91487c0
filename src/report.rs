//! Tabular report of a partitioned corpus
//!
//! One sheet per bucket, written as JSON. Token lists are joined with `", "`.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use serde::Serialize;

use crate::classify::{Bucket, Document, Partition};
use crate::error::Result;

/// One report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Row {
    pub text: String,
    pub identified_english: String,
    pub has_english: bool,
    pub identified_acronym: String,
    pub has_acronym: bool,
    pub identified_fuzzy: String,
    pub has_fuzzy: bool,
}

impl Row {
    /// Row for `doc` as shown in `bucket`'s sheet
    ///
    /// The fuzzy sheet shows fuzzy tokens in the `identified_english` column
    /// so it lines up with the dictionary sheet.
    pub fn new(doc: &Document, bucket: Bucket) -> Self {
        let identified_fuzzy = doc.identified_fuzzy.join(", ");
        let identified_english = match bucket {
            Bucket::Fuzzy => identified_fuzzy.clone(),
            _ => doc.identified_english.join(", "),
        };
        Self {
            text: doc.text.clone(),
            identified_english,
            has_english: doc.has_english,
            identified_acronym: doc.identified_acronym.join(", "),
            has_acronym: doc.has_acronym,
            identified_fuzzy,
            has_fuzzy: doc.has_fuzzy,
        }
    }
}

/// One sheet
#[derive(Debug, Clone, Serialize)]
pub struct Sheet {
    pub name: &'static str,
    pub bucket: Bucket,
    pub rows: Vec<Row>,
}

/// Whole report, sheets in priority order
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub total: usize,
    pub sheets: Vec<Sheet>,
}

impl Report {
    pub fn new(partition: &Partition) -> Self {
        let sheets = partition
            .iter()
            .map(|(bucket, docs)| Sheet {
                name: bucket.label(),
                bucket,
                rows: docs.iter().map(|d| Row::new(d, bucket)).collect(),
            })
            .collect();
        Self {
            total: partition.len(),
            sheets,
        }
    }

    /// Bucket size lines, e.g. `English Tweets: 12 tweets`
    pub fn summary(&self) -> Vec<String> {
        self.sheets
            .iter()
            .map(|s| format!("{}: {} tweets", s.name, s.rows.len()))
            .collect()
    }

    pub fn write_json<W: Write>(&self, writer: W) -> Result<()> {
        serde_json::to_writer_pretty(writer, self)?;
        Ok(())
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let mut writer = BufWriter::new(File::create(path.as_ref())?);
        self.write_json(&mut writer)?;
        writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(text: &str, english: &[&str], acronym: &[&str], fuzzy: &[&str]) -> Document {
        let v = |xs: &[&str]| xs.iter().map(|s| s.to_string()).collect::<Vec<_>>();
        Document {
            text: text.to_string(),
            identified_english: v(english),
            has_english: !english.is_empty(),
            identified_acronym: v(acronym),
            has_acronym: !acronym.is_empty(),
            identified_fuzzy: v(fuzzy),
            has_fuzzy: !fuzzy.is_empty(),
        }
    }

    #[test]
    fn test_rows_join_tokens() {
        let d = doc("house car lol", &["house", "car"], &["lol"], &[]);
        let row = Row::new(&d, d.bucket());
        assert_eq!(row.identified_english, "house, car");
        assert_eq!(row.identified_acronym, "lol");
        assert_eq!(row.identified_fuzzy, "");
    }

    #[test]
    fn test_fuzzy_sheet_copies_tokens() {
        let d = doc("lajk sori", &[], &[], &["lajk", "sori"]);
        let row = Row::new(&d, Bucket::Fuzzy);
        assert_eq!(row.identified_english, "lajk, sori");
        assert!(!row.has_english);
    }

    #[test]
    fn test_summary_and_json() {
        let partition = Partition::new(vec![
            doc("house", &["house"], &[], &[]),
            doc("lol", &[], &["lol"], &[]),
            doc("nista", &[], &[], &[]),
        ]);
        let report = Report::new(&partition);
        assert_eq!(report.total, 3);
        assert_eq!(
            report.summary(),
            vec![
                "English Tweets: 1 tweets",
                "Acronyms: 1 tweets",
                "Fuzzy English: 0 tweets",
                "Remaining Tweets: 1 tweets",
            ]
        );

        let mut buf = Vec::new();
        report.write_json(&mut buf).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["sheets"][0]["name"], "English Tweets");
        assert_eq!(value["sheets"][1]["rows"][0]["identified_acronym"], "lol");
        assert_eq!(value["sheets"][3]["bucket"], "Unflagged");
    }
}
