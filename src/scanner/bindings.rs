// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PyO3 bindings for the scanners

use pyo3::prelude::*;
use pyo3::types::PyDict;
use std::path::PathBuf;

use super::config::{ColumnNameConfig, NerConfig, ScannerConfig};
use super::{type_names, ColumnNameScanner, NerScanner, RegexScanner, Scanner};

/// Pattern scanner exposed to Python
///
/// # Example (Python)
/// ```python
/// from pii_scanners import RegexScanner
///
/// scanner = RegexScanner()
/// scanner.scan("mail me at jane@example.com")  # ["EMAIL"]
/// ```
#[pyclass(name = "RegexScanner", frozen)]
pub struct PyRegexScanner {
    inner: RegexScanner,
}

#[pymethods]
impl PyRegexScanner {
    #[new]
    fn new() -> PyResult<Self> {
        Ok(Self {
            inner: RegexScanner::new()?,
        })
    }

    /// Scan the text and return the names of the PII types found
    fn scan(&self, text: &str) -> Vec<String> {
        type_names(&self.inner.scan(text))
    }
}

/// Named-entity scanner exposed to Python
///
/// The entity model is loaded once here; reuse the instance across calls.
///
/// # Example (Python)
/// ```python
/// from pii_scanners import NERScanner
///
/// scanner = NERScanner()
/// scanner.scan("John Smith was born on March 3, 1990")  # ["PERSON", "BIRTH_DATE"]
/// ```
#[pyclass(name = "NERScanner", frozen)]
pub struct PyNerScanner {
    inner: NerScanner,
}

#[pymethods]
impl PyNerScanner {
    /// # Arguments
    /// * `model_path` - JSON entity model; the bundled English model when omitted
    #[new]
    #[pyo3(signature = (model_path=None))]
    fn new(model_path: Option<PathBuf>) -> PyResult<Self> {
        let inner = NerScanner::new(&NerConfig { model_path })?;
        Ok(Self { inner })
    }

    /// Build from a config dict (`model_path` key)
    #[staticmethod]
    fn from_config(config_dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let config = ScannerConfig::from_py_dict(config_dict)?;
        let inner = NerScanner::new(&config.ner)?;
        Ok(Self { inner })
    }

    fn scan(&self, py: Python<'_>, text: &str) -> Vec<String> {
        let types = py.detach(|| self.inner.scan(text));
        type_names(&types)
    }
}

/// Column-name scanner exposed to Python
///
/// # Example (Python)
/// ```python
/// from pii_scanners import ColumnNameScanner
///
/// ColumnNameScanner().scan("user_email")                  # ["EMAIL", "USER_NAME"]
/// ColumnNameScanner("^user_.*$").scan("user_email")      # []
/// ```
#[pyclass(name = "ColumnNameScanner", frozen)]
pub struct PyColumnNameScanner {
    inner: ColumnNameScanner,
}

#[pymethods]
impl PyColumnNameScanner {
    /// # Arguments
    /// * `exclude_regex` - names matching this pattern in full are never flagged
    #[new]
    #[pyo3(signature = (exclude_regex=None))]
    fn new(exclude_regex: Option<String>) -> PyResult<Self> {
        let config = ColumnNameConfig {
            exclude_regex,
            ..Default::default()
        };
        Ok(Self {
            inner: ColumnNameScanner::new(&config)?,
        })
    }

    /// Build from a config dict (`exclude_regex` and `extra_rules` keys)
    #[staticmethod]
    fn from_config(config_dict: &Bound<'_, PyDict>) -> PyResult<Self> {
        let config = ScannerConfig::from_py_dict(config_dict)?;
        Ok(Self {
            inner: ColumnNameScanner::new(&config.column)?,
        })
    }

    fn scan(&self, text: &str) -> Vec<String> {
        type_names(&self.inner.scan(text))
    }
}
