// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PII Scanners - Rust Implementation
//
// Three interchangeable strategies behind one contract:
// - Pattern scanner: common PII regexes over cell values (RegexSet, one pass)
// - NER scanner: named-entity labels mapped into the PII vocabulary
// - Column-name scanner: per-category rules over identifiers, with exclusion

use std::collections::BTreeSet;

pub mod column;
pub mod config;
pub mod error;
pub mod ner;
pub mod patterns;
pub mod piitypes;
pub mod regex_scanner;

#[cfg(feature = "python")]
pub mod bindings;

pub use column::ColumnNameScanner;
pub use config::{ColumnNameConfig, ColumnRuleDef, NerConfig, ScannerConfig};
pub use error::{Result, ScannerError};
pub use ner::{Entity, EntityRecognizer, LexiconModel, NerScanner};
pub use piitypes::PiiType;
pub use regex_scanner::RegexScanner;

/// Categories found by a scan. Duplicates collapse; iteration follows code order.
pub type ScanResult = BTreeSet<PiiType>;

/// Common contract of every detection strategy
///
/// `scan` is total: any string, including an empty one, yields a (possibly
/// empty) set. An empty set means nothing was found.
pub trait Scanner: Send + Sync {
    /// Scan the text and return the PII categories found
    fn scan(&self, text: &str) -> ScanResult;

    /// Short identifier used in log records
    fn name(&self) -> &'static str;
}

impl<S: Scanner + ?Sized> Scanner for Box<S> {
    fn scan(&self, text: &str) -> ScanResult {
        (**self).scan(text)
    }

    fn name(&self) -> &'static str {
        (**self).name()
    }
}

/// Render a result as canonical names, in code order
pub fn type_names(result: &ScanResult) -> Vec<String> {
    result.iter().map(|t| t.as_str().to_string()).collect()
}
