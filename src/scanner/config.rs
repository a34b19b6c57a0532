// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Configuration types for the scanners

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use super::error::{Result, ScannerError};
use super::piitypes::PiiType;

/// Additional column-name rule supplied by the caller
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnRuleDef {
    pub pii_type: PiiType,
    pub pattern: String,
    #[serde(default = "default_enabled")]
    pub enabled: bool,
}

fn default_enabled() -> bool {
    true
}

/// Configuration for the column-name scanner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ColumnNameConfig {
    /// Names matching this pattern (whole name, case-insensitive) are never flagged
    pub exclude_regex: Option<String>,

    /// Rules appended to the built-in table
    pub extra_rules: Vec<ColumnRuleDef>,
}

impl ColumnNameConfig {
    pub fn with_exclude(pattern: impl Into<String>) -> Self {
        Self {
            exclude_regex: Some(pattern.into()),
            ..Default::default()
        }
    }
}

/// Configuration for the named-entity scanner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NerConfig {
    /// JSON entity model to load; the bundled English model when unset
    pub model_path: Option<PathBuf>,
}

/// Top-level configuration covering every configurable scanner
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScannerConfig {
    pub column: ColumnNameConfig,
    pub ner: NerConfig,
}

impl ScannerConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(ScannerError::ConfigParse)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScannerError::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&content)
    }
}

#[cfg(feature = "python")]
mod py {
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;
    use pyo3::types::PyDict;
    use std::path::PathBuf;

    use super::{ColumnRuleDef, ScannerConfig};
    use crate::scanner::piitypes::PiiType;

    impl ScannerConfig {
        /// Extract configuration from a Python dict
        ///
        /// Keys: `exclude_regex` (str | None), `extra_rules` (list of
        /// `{"pii_type", "pattern", "enabled"}` dicts), `model_path` (str | None).
        pub fn from_py_dict(dict: &Bound<'_, PyDict>) -> PyResult<Self> {
            let mut config = Self::default();

            if let Some(value) = dict.get_item("exclude_regex")? {
                config.column.exclude_regex = value.extract()?;
            }

            if let Some(value) = dict.get_item("model_path")? {
                config.ner.model_path = value.extract::<Option<PathBuf>>()?;
            }

            if let Some(value) = dict.get_item("extra_rules")? {
                let items: Vec<Bound<'_, PyAny>> = value.extract()?;
                for item in items {
                    let pii_type: String = item.get_item("pii_type")?.extract()?;
                    let pii_type = pii_type
                        .parse::<PiiType>()
                        .map_err(|e| PyValueError::new_err(e.to_string()))?;
                    let pattern: String = item.get_item("pattern")?.extract()?;
                    let enabled: bool = if item.contains("enabled")? {
                        item.get_item("enabled")?.extract()?
                    } else {
                        true
                    };

                    config.column.extra_rules.push(ColumnRuleDef {
                        pii_type,
                        pattern,
                        enabled,
                    });
                }
            }

            Ok(config)
        }
    }
}
