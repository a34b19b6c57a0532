// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Construction-time errors. Scanning itself never fails.

use std::path::PathBuf;
use thiserror::Error;

use super::piitypes::PiiType;

#[derive(Debug, Error)]
pub enum ScannerError {
    #[error("invalid exclusion pattern '{pattern}': {source}")]
    InvalidExclusion {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid {pii_type} rule '{pattern}': {source}")]
    InvalidRule {
        pii_type: PiiType,
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("failed to compile pattern set: {0}")]
    PatternSet(#[source] regex::Error),

    #[error("failed to read entity model {}: {source}", .path.display())]
    ModelIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse entity model: {0}")]
    ModelParse(#[source] serde_json::Error),

    #[error("invalid pattern for label {label} in entity model: {source}")]
    ModelPattern {
        label: String,
        #[source]
        source: regex::Error,
    },

    #[error("entity model '{0}' defines no entity rules")]
    EmptyModel(String),

    #[error("entity rule {label} in model '{model}' has neither terms nor patterns")]
    EmptyRule { model: String, label: String },

    #[error("failed to read config {}: {source}", .path.display())]
    ConfigIo {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    ConfigParse(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ScannerError>;

#[cfg(feature = "python")]
impl From<ScannerError> for pyo3::PyErr {
    fn from(err: ScannerError) -> Self {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            ScannerError::ModelIo { .. }
            | ScannerError::ModelParse(_)
            | ScannerError::ModelPattern { .. }
            | ScannerError::EmptyModel(_)
            | ScannerError::EmptyRule { .. } => PyRuntimeError::new_err(err.to_string()),
            _ => PyValueError::new_err(err.to_string()),
        }
    }
}
