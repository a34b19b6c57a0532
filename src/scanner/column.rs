// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Column/field-name heuristic scanner

use regex::Regex;
use tracing::debug;

use super::config::ColumnNameConfig;
use super::error::{Result, ScannerError};
use super::patterns::{compile_anchored, compile_column_rules, CompiledPatterns};
use super::{ScanResult, Scanner};

/// Flags identifiers such as `user_email` or `dob` by name alone
///
/// Every rule must match the whole identifier, ignoring case. When an
/// exclusion pattern is configured and matches the whole identifier, nothing
/// is reported for it.
#[derive(Debug, Clone)]
pub struct ColumnNameScanner {
    rules: CompiledPatterns,
    exclude: Option<Regex>,
}

impl ColumnNameScanner {
    /// Build the rule table and compile the optional exclusion pattern
    pub fn new(config: &ColumnNameConfig) -> Result<Self> {
        let rules = compile_column_rules(&config.extra_rules)?;

        let exclude = config
            .exclude_regex
            .as_deref()
            .map(|pattern| {
                compile_anchored(pattern).map_err(|source| ScannerError::InvalidExclusion {
                    pattern: pattern.to_string(),
                    source,
                })
            })
            .transpose()?;

        Ok(Self { rules, exclude })
    }

    /// Scanner with the built-in rules and no exclusion
    pub fn without_exclusion() -> Result<Self> {
        Self::new(&ColumnNameConfig::default())
    }

    fn is_excluded(&self, name: &str) -> bool {
        self.exclude
            .as_ref()
            .is_some_and(|exclude| exclude.is_match(name))
    }
}

impl Scanner for ColumnNameScanner {
    fn scan(&self, text: &str) -> ScanResult {
        if self.is_excluded(text) {
            debug!(scanner = self.name(), text, "excluded");
            return ScanResult::new();
        }

        let types: ScanResult = self.rules.matching_types(text).collect();

        debug!(scanner = self.name(), text, types = ?types, "scan complete");
        types
    }

    fn name(&self) -> &'static str {
        "column_name"
    }
}
