// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Pattern-based content scanner

use tracing::{debug, trace};

use super::error::Result;
use super::patterns::{compile_common_patterns, CompiledPatterns};
use super::{ScanResult, Scanner};

/// Scans cell values for phone numbers, email addresses, credit-card numbers
/// and street addresses
///
/// One match of a category anywhere in the text is enough to report it.
/// Categories outside that bundle are never reported.
#[derive(Debug, Clone)]
pub struct RegexScanner {
    patterns: CompiledPatterns,
}

impl RegexScanner {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: compile_common_patterns()?,
        })
    }
}

impl Scanner for RegexScanner {
    fn scan(&self, text: &str) -> ScanResult {
        trace!(scanner = self.name(), text, "scanning");

        let types: ScanResult = self.patterns.matching_types(text).collect();

        debug!(scanner = self.name(), types = ?types, "scan complete");
        types
    }

    fn name(&self) -> &'static str {
        "regex"
    }
}
