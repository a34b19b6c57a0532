// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// PII scanners for data-catalog tooling
// Python bindings are built with PyO3 behind the `python` feature

pub mod scanner;

pub use scanner::{
    ColumnNameScanner, NerScanner, PiiType, RegexScanner, ScanResult, Scanner, ScannerError,
};

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module: pii_scanners
///
/// Classifies cell values and column names into PII categories.
///
/// # Examples
///
/// ```python
/// from pii_scanners import ColumnNameScanner, NERScanner, RegexScanner
///
/// RegexScanner().scan("call (555) 123-4567")              # ["PHONE"]
/// NERScanner().scan("Mary flew to Paris")                 # ["PERSON", "LOCATION"]
/// ColumnNameScanner(exclude_regex="^tmp_.*$").scan("dob")  # ["BIRTH_DATE"]
/// ```
#[cfg(feature = "python")]
#[pymodule]
pub fn pii_scanners(m: &Bound<'_, pyo3::types::PyModule>) -> PyResult<()> {
    m.add_class::<scanner::bindings::PyRegexScanner>()?;
    m.add_class::<scanner::bindings::PyNerScanner>()?;
    m.add_class::<scanner::bindings::PyColumnNameScanner>()?;

    m.add(
        "PII_TYPES",
        PiiType::ALL.iter().map(PiiType::as_str).collect::<Vec<_>>(),
    )?;

    // Module metadata
    m.add("__version__", env!("CARGO_PKG_VERSION"))?;
    m.add(
        "__doc__",
        "Pattern, named-entity and column-name scanners for classifying PII",
    )?;

    Ok(())
}
