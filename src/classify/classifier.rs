//! Runs all three detectors per text and partitions the corpus

use std::sync::Arc;

use rayon::prelude::*;

use super::document::Document;
use super::partition::Partition;
use crate::config::ClassifierConfig;
use crate::core::lexicon::Lexicon;
use crate::core::token::tokenize;
use crate::core::transliteration::TransliterationTable;
use crate::detection::{AcronymDetector, AcronymSet, Detector, DictionaryDisambiguator, FuzzyMatcher};
use crate::error::Result;

/// Document classifier
///
/// Holds immutable detector state only; safe to share across threads.
#[derive(Debug, Clone)]
pub struct Classifier {
    dictionary: DictionaryDisambiguator,
    acronyms: AcronymDetector,
    /// Decides `has_fuzzy`
    fuzzy_flag: FuzzyMatcher,
    /// Produces `identified_fuzzy`; `None` when both thresholds are equal
    fuzzy_report: Option<FuzzyMatcher>,
    parallel: bool,
}

impl Classifier {
    pub fn new(native: Lexicon, foreign: Lexicon, config: &ClassifierConfig) -> Result<Self> {
        config.validate()?;

        let acronyms = Arc::new(match &config.acronyms {
            Some(list) => AcronymSet::new(list),
            None => AcronymSet::default(),
        });
        let native = Arc::new(native);
        let foreign = Arc::new(foreign);

        let dictionary = DictionaryDisambiguator::new(
            Arc::clone(&native),
            Arc::clone(&foreign),
            Arc::clone(&acronyms),
            config.window,
        );
        let fuzzy_flag = FuzzyMatcher::new(
            Arc::clone(&native),
            &foreign,
            Arc::new(TransliterationTable::serbian()),
            config.flag_threshold,
        )
        .with_min_len(config.min_fuzzy_len)
        .with_budget(config.fuzzy_budget());
        let fuzzy_report = (config.report_threshold != config.flag_threshold)
            .then(|| fuzzy_flag.with_threshold(config.report_threshold));

        log::info!(
            "classifier ready: native={} foreign={} acronyms={} window={} thresholds={}/{}",
            native.len(),
            foreign.len(),
            acronyms.len(),
            config.window,
            config.flag_threshold,
            config.report_threshold
        );

        Ok(Self {
            dictionary,
            acronyms: AcronymDetector::new(acronyms),
            fuzzy_flag,
            fuzzy_report,
            parallel: config.parallel,
        })
    }

    pub fn dictionary(&self) -> &DictionaryDisambiguator {
        &self.dictionary
    }

    pub fn acronyms(&self) -> &AcronymDetector {
        &self.acronyms
    }

    pub fn fuzzy(&self) -> &FuzzyMatcher {
        &self.fuzzy_flag
    }

    /// The three detectors in priority order
    pub fn detectors(&self) -> [&dyn Detector; 3] {
        [&self.dictionary, &self.acronyms, &self.fuzzy_flag]
    }

    /// Classify one text
    pub fn classify(&self, text: &str) -> Document {
        let tokens = tokenize(text);

        let identified_english = self.dictionary.detect(&tokens);
        let identified_acronym = self.acronyms.detect(&tokens);
        let flagged_fuzzy = self.fuzzy_flag.detect(&tokens);
        let has_fuzzy = !flagged_fuzzy.is_empty();
        let identified_fuzzy = match &self.fuzzy_report {
            Some(report) => report.detect(&tokens),
            None => flagged_fuzzy,
        };

        let doc = Document {
            text: text.to_string(),
            has_english: !identified_english.is_empty(),
            identified_english,
            has_acronym: !identified_acronym.is_empty(),
            identified_acronym,
            has_fuzzy,
            identified_fuzzy,
        };
        log::debug!("{:?} <- {:?}", doc.bucket(), doc.text);
        doc
    }

    /// Classify every text, preserving input order
    pub fn classify_all<S>(&self, texts: &[S]) -> Vec<Document>
    where
        S: AsRef<str> + Sync,
    {
        if self.parallel {
            texts.par_iter().map(|t| self.classify(t.as_ref())).collect()
        } else {
            texts.iter().map(|t| self.classify(t.as_ref())).collect()
        }
    }

    /// Classify and split into the four priority buckets
    pub fn partition<S>(&self, texts: &[S]) -> Partition
    where
        S: AsRef<str> + Sync,
    {
        let partition = Partition::new(self.classify_all(texts));
        let [d, a, f, u] = partition.sizes();
        log::info!(
            "partitioned {} texts: dictionary={} acronym={} fuzzy={} unflagged={}",
            texts.len(),
            d,
            a,
            f,
            u
        );
        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classify::Bucket;

    fn classifier(native: &[&str], foreign: &[&str], config: ClassifierConfig) -> Classifier {
        Classifier::new(
            Lexicon::from_words(native),
            Lexicon::from_words(foreign),
            &config,
        )
        .unwrap()
    }

    #[test]
    fn test_dictionary_scenario() {
        let c = classifier(&["kuca", "auto"], &["house", "car"], ClassifierConfig::default());
        let doc = c.classify("auto lol house");
        assert!(doc.has_english);
        assert_eq!(doc.identified_english, vec!["house"]);
        assert!(doc.has_acronym);
        assert_eq!(doc.identified_acronym, vec!["lol"]);
        assert_eq!(doc.bucket(), Bucket::Dictionary);
    }

    #[test]
    fn test_acronym_scenario() {
        let c = classifier(&[], &[], ClassifierConfig::default());
        let doc = c.classify("lol");
        assert!(doc.has_acronym);
        assert!(!doc.has_english);
        assert!(!doc.has_fuzzy);
        assert_eq!(doc.bucket(), Bucket::Acronym);
    }

    #[test]
    fn test_fuzzy_scenario() {
        let config = ClassifierConfig::new()
            .with_flag_threshold(50.0)
            .with_report_threshold(50.0);
        let c = classifier(&["brate"], &["like"], config);
        let doc = c.classify("lajk brate");
        assert!(!doc.has_english);
        assert!(!doc.has_acronym);
        assert!(doc.has_fuzzy);
        assert_eq!(doc.identified_fuzzy, vec!["lajk"]);
        assert_eq!(doc.bucket(), Bucket::Fuzzy);
    }

    #[test]
    fn test_unflagged_scenario() {
        let c = classifier(&["kuca"], &["house"], ClassifierConfig::default());
        for text in ["123 !!! 4.5 ???", "", "   "] {
            let doc = c.classify(text);
            assert!(!doc.has_english && !doc.has_acronym && !doc.has_fuzzy);
            assert_eq!(doc.bucket(), Bucket::Unflagged);
        }
    }

    #[test]
    fn test_comma_without_space() {
        let c = classifier(&["kuca", "auto"], &["house", "car"], ClassifierConfig::default());

        let doc = c.classify("kuca,house");
        assert_eq!(doc.identified_english, vec!["house"]);
        assert_eq!(doc.bucket(), Bucket::Dictionary);

        let doc = c.classify("auto,lol");
        assert_eq!(doc.identified_acronym, vec!["lol"]);
        assert_eq!(doc.bucket(), Bucket::Acronym);
    }

    #[test]
    fn test_separate_report_threshold() {
        // ratio("layk", "like") = 50
        let config = ClassifierConfig::new()
            .with_flag_threshold(40.0)
            .with_report_threshold(95.0);
        let c = classifier(&[], &["like"], config);
        let doc = c.classify("lajk");
        assert!(doc.has_fuzzy);
        assert!(doc.identified_fuzzy.is_empty());
        assert_eq!(doc.bucket(), Bucket::Fuzzy);
    }

    #[test]
    fn test_custom_acronyms() {
        let config = ClassifierConfig::new().with_acronyms(["xd"]);
        let c = classifier(&[], &[], config);
        assert_eq!(c.classify("XD").bucket(), Bucket::Acronym);
        assert_eq!(c.classify("lol").bucket(), Bucket::Unflagged);
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let texts = vec![
            "auto lol house",
            "lol",
            "lajk brate",
            "123",
            "kuca car",
            "",
        ];
        let native = ["kuca", "auto", "brate"];
        let foreign = ["house", "car", "like"];
        let seq = classifier(&native, &foreign, ClassifierConfig::new().with_flag_threshold(50.0));
        let par = classifier(
            &native,
            &foreign,
            ClassifierConfig::new().with_flag_threshold(50.0).with_parallel(true),
        );
        assert_eq!(seq.classify_all(&texts[..]), par.classify_all(&texts[..]));
    }

    #[test]
    fn test_partition_covers_corpus() {
        let c = classifier(&["kuca"], &["house", "like"], ClassifierConfig::new().with_flag_threshold(50.0));
        let texts = ["house", "lol", "lajk", "kuca", "house lol"];
        let p = c.partition(&texts[..]);
        assert_eq!(p.sizes(), [2, 1, 1, 1]);
        assert_eq!(p.len(), texts.len());
    }

    #[test]
    fn test_invalid_config_rejected() {
        let result = Classifier::new(
            Lexicon::default(),
            Lexicon::default(),
            &ClassifierConfig::new().with_flag_threshold(-1.0),
        );
        assert!(result.is_err());
    }

    #[test]
    fn test_detector_names() {
        let c = classifier(&[], &[], ClassifierConfig::default());
        let names: Vec<_> = c.detectors().iter().map(|d| d.name()).collect();
        assert_eq!(names, vec!["dictionary", "acronym", "fuzzy"]);
    }
}
