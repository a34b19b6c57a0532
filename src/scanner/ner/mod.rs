// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Named-entity recognition scanner

use tracing::{debug, trace};

use super::config::NerConfig;
use super::error::Result;
use super::piitypes::PiiType;
use super::{ScanResult, Scanner};

pub mod model;

pub use model::LexiconModel;

/// A labelled span of the scanned text (byte offsets)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    pub label: String,
    pub start: usize,
    pub end: usize,
}

/// An NER pipeline: labels spans of text with entity types such as
/// `PERSON`, `GPE` or `DATE`
pub trait EntityRecognizer: Send + Sync {
    fn recognize(&self, text: &str) -> Vec<Entity>;
}

/// Map an entity label into the PII vocabulary
///
/// Every `DATE` is reported as [`PiiType::BirthDate`], not only birth dates.
/// Callers relying on this scanner should expect false positives there.
pub fn label_to_pii_type(label: &str) -> Option<PiiType> {
    match label {
        "PERSON" => Some(PiiType::Person),
        "GPE" => Some(PiiType::Location),
        "DATE" => Some(PiiType::BirthDate),
        _ => None,
    }
}

/// Scans free text with an entity recognizer loaded once at construction
pub struct NerScanner {
    recognizer: Box<dyn EntityRecognizer>,
}

impl NerScanner {
    /// Load the configured entity model, or the bundled English model
    ///
    /// A model that cannot be loaded is an error here, never at scan time.
    pub fn new(config: &NerConfig) -> Result<Self> {
        let model = match &config.model_path {
            Some(path) => LexiconModel::from_file(path)?,
            None => LexiconModel::builtin()?,
        };
        Ok(Self::with_recognizer(model))
    }

    /// Use any recognizer as the pipeline
    pub fn with_recognizer(recognizer: impl EntityRecognizer + 'static) -> Self {
        Self {
            recognizer: Box::new(recognizer),
        }
    }
}

impl std::fmt::Debug for NerScanner {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NerScanner").finish_non_exhaustive()
    }
}

impl Scanner for NerScanner {
    fn scan(&self, text: &str) -> ScanResult {
        trace!(scanner = self.name(), text, "processing");

        let mut types = ScanResult::new();
        for entity in self.recognizer.recognize(text) {
            trace!(label = %entity.label, "found entity");
            if let Some(pii_type) = label_to_pii_type(&entity.label) {
                types.insert(pii_type);
            }
        }

        debug!(scanner = self.name(), types = ?types, "scan complete");
        types
    }

    fn name(&self) -> &'static str {
        "ner"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Recognizer returning a fixed set of labels regardless of input
    struct FixedLabels(Vec<&'static str>);

    impl EntityRecognizer for FixedLabels {
        fn recognize(&self, _text: &str) -> Vec<Entity> {
            self.0
                .iter()
                .enumerate()
                .map(|(i, label)| Entity {
                    label: label.to_string(),
                    start: i,
                    end: i + 1,
                })
                .collect()
        }
    }

    #[test]
    fn test_label_mapping() {
        assert_eq!(label_to_pii_type("PERSON"), Some(PiiType::Person));
        assert_eq!(label_to_pii_type("GPE"), Some(PiiType::Location));
        assert_eq!(label_to_pii_type("DATE"), Some(PiiType::BirthDate));
        assert_eq!(label_to_pii_type("ORG"), None);
        assert_eq!(label_to_pii_type("person"), None);
    }

    #[test]
    fn test_labels_collapse() {
        let scanner =
            NerScanner::with_recognizer(FixedLabels(vec!["PERSON", "PERSON", "DATE", "DATE"]));
        let types: Vec<_> = scanner.scan("anything").into_iter().collect();

        assert_eq!(types, vec![PiiType::Person, PiiType::BirthDate]);
    }

    #[test]
    fn test_other_labels_ignored() {
        let scanner = NerScanner::with_recognizer(FixedLabels(vec!["ORG", "MONEY", "NORP"]));
        assert!(scanner.scan("anything").is_empty());
    }

    #[test]
    fn test_builtin_model_person_and_date() {
        let scanner = NerScanner::new(&NerConfig::default()).unwrap();
        let types: Vec<_> = scanner
            .scan("John Smith was born on March 3, 1990")
            .into_iter()
            .collect();

        assert_eq!(types, vec![PiiType::Person, PiiType::BirthDate]);
    }

    #[test]
    fn test_builtin_model_name_not_in_gazetteer() {
        let scanner = NerScanner::new(&NerConfig::default()).unwrap();
        let types: Vec<_> = scanner
            .scan("Alice Walker was born in 1990")
            .into_iter()
            .collect();

        assert_eq!(types, vec![PiiType::Person, PiiType::BirthDate]);
    }

    #[test]
    fn test_builtin_model_no_entities() {
        let scanner = NerScanner::new(&NerConfig::default()).unwrap();
        assert!(scanner
            .scan("the quick brown fox jumps over the lazy dog")
            .is_empty());
        assert!(scanner.scan("").is_empty());
    }

    #[test]
    fn test_missing_model_fails_at_construction() {
        let config = NerConfig {
            model_path: Some("/nonexistent/en_model.json".into()),
        };
        assert!(NerScanner::new(&config).is_err());
    }
}
