// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Tests for the PyO3 surface, driven from Rust through an embedded interpreter
// Run with `cargo test --features python`

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use pii_scanners::scanner::config::ScannerConfig;
use pii_scanners::{PiiType, ScannerError};

/// Register the module in `sys.modules` and import it the way Python code would
fn import_scanners(py: Python<'_>) -> PyResult<Bound<'_, PyModule>> {
    let modules = py.import("sys")?.getattr("modules")?;
    if !modules.contains("pii_scanners")? {
        let module = pyo3::wrap_pymodule!(pii_scanners::pii_scanners)(py);
        modules.set_item("pii_scanners", module)?;
    }
    py.import("pii_scanners")
}

fn rule<'py>(py: Python<'py>, pii_type: &str, pattern: &str) -> PyResult<Bound<'py, PyDict>> {
    let rule = PyDict::new(py);
    rule.set_item("pii_type", pii_type)?;
    rule.set_item("pattern", pattern)?;
    Ok(rule)
}

fn with_python<F>(test: F)
where
    F: for<'py> FnOnce(Python<'py>) -> PyResult<()>,
{
    Python::initialize();
    Python::attach(|py| {
        if let Err(err) = test(py) {
            err.print(py);
            panic!("python error: {err}");
        }
    });
}

#[test]
fn test_from_py_dict_reads_every_key() {
    with_python(|py| {
        let dict = PyDict::new(py);
        dict.set_item("exclude_regex", "^tmp_.*$")?;
        dict.set_item("model_path", "/models/en.json")?;
        dict.set_item("extra_rules", vec![rule(py, "ip_address", "^.*_ip$")?])?;

        let config = ScannerConfig::from_py_dict(&dict)?;
        assert_eq!(config.column.exclude_regex.as_deref(), Some("^tmp_.*$"));
        assert_eq!(
            config.ner.model_path.as_deref(),
            Some(std::path::Path::new("/models/en.json"))
        );

        let extra = &config.column.extra_rules;
        assert_eq!(extra.len(), 1);
        assert_eq!(extra[0].pii_type, PiiType::IpAddress);
        assert_eq!(extra[0].pattern, "^.*_ip$");
        assert!(extra[0].enabled, "rules without 'enabled' are on");
        Ok(())
    });
}

#[test]
fn test_from_py_dict_disabled_rule_and_none_values() {
    with_python(|py| {
        let disabled = rule(py, "SSN", "^.*tax_id.*$")?;
        disabled.set_item("enabled", false)?;

        let dict = PyDict::new(py);
        dict.set_item("exclude_regex", py.None())?;
        dict.set_item("model_path", py.None())?;
        dict.set_item("extra_rules", vec![disabled])?;

        let config = ScannerConfig::from_py_dict(&dict)?;
        assert!(config.column.exclude_regex.is_none());
        assert!(config.ner.model_path.is_none());
        assert!(!config.column.extra_rules[0].enabled);

        let empty = ScannerConfig::from_py_dict(&PyDict::new(py))?;
        assert!(empty.column.extra_rules.is_empty());
        Ok(())
    });
}

#[test]
fn test_from_py_dict_unknown_pii_type_is_value_error() {
    with_python(|py| {
        let dict = PyDict::new(py);
        dict.set_item("extra_rules", vec![rule(py, "SHOE_SIZE", "^.*shoe.*$")?])?;

        let err = ScannerConfig::from_py_dict(&dict).unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
        assert!(err.to_string().contains("SHOE_SIZE"));
        Ok(())
    });
}

#[test]
fn test_error_mapping() {
    with_python(|py| {
        let model_errors = [
            ScannerError::EmptyModel("m".to_string()),
            ScannerError::EmptyRule {
                model: "m".to_string(),
                label: "PERSON".to_string(),
            },
            ScannerError::ModelParse(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];
        for err in model_errors {
            let err = PyErr::from(err);
            assert!(err.is_instance_of::<PyRuntimeError>(py), "{err}");
        }

        let config_errors = [
            ScannerError::InvalidExclusion {
                pattern: "(".to_string(),
                source: regex::Regex::new("(").unwrap_err(),
            },
            ScannerError::ConfigParse(serde_json::from_str::<serde_json::Value>("{").unwrap_err()),
        ];
        for err in config_errors {
            let err = PyErr::from(err);
            assert!(err.is_instance_of::<PyValueError>(py), "{err}");
        }
        Ok(())
    });
}

#[test]
fn test_module_attributes() {
    with_python(|py| {
        let module = import_scanners(py)?;

        let names: Vec<String> = module.getattr("PII_TYPES")?.extract()?;
        let expected: Vec<String> = PiiType::ALL.iter().map(|t| t.to_string()).collect();
        assert_eq!(names, expected);
        assert_eq!(names.first().map(String::as_str), Some("PHONE"));

        let version: String = module.getattr("__version__")?.extract()?;
        assert_eq!(version, env!("CARGO_PKG_VERSION"));
        Ok(())
    });
}

#[test]
fn test_python_classes_scan() {
    with_python(|py| {
        let module = import_scanners(py)?;

        let regex = module.getattr("RegexScanner")?.call0()?;
        let found: Vec<String> = regex
            .call_method1("scan", ("mail me at jane@example.com",))?
            .extract()?;
        assert_eq!(found, vec!["EMAIL"]);

        let column = module.getattr("ColumnNameScanner")?.call0()?;
        let found: Vec<String> = column.call_method1("scan", ("user_email",))?.extract()?;
        assert_eq!(found, vec!["EMAIL", "USER_NAME"]);

        let excluding = module.getattr("ColumnNameScanner")?.call1(("^user_.*$",))?;
        let found: Vec<String> = excluding.call_method1("scan", ("user_email",))?.extract()?;
        assert!(found.is_empty());

        let ner = module.getattr("NERScanner")?.call0()?;
        let found: Vec<String> = ner
            .call_method1("scan", ("Alice Walker was born in 1990",))?
            .extract()?;
        assert_eq!(found, vec!["PERSON", "BIRTH_DATE"]);
        Ok(())
    });
}

#[test]
fn test_python_from_config() {
    with_python(|py| {
        let module = import_scanners(py)?;

        let dict = PyDict::new(py);
        dict.set_item("extra_rules", vec![rule(py, "IP_ADDRESS", "^.*_ip$")?])?;
        let column = module
            .getattr("ColumnNameScanner")?
            .call_method1("from_config", (&dict,))?;
        let found: Vec<String> = column.call_method1("scan", ("client_ip",))?.extract()?;
        assert_eq!(found, vec!["IP_ADDRESS"]);
        Ok(())
    });
}

#[test]
fn test_python_constructor_errors() {
    with_python(|py| {
        let module = import_scanners(py)?;

        let err = module
            .getattr("ColumnNameScanner")?
            .call1(("(unclosed",))
            .unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));

        let err = module
            .getattr("NERScanner")?
            .call1(("/nonexistent/en_model.json",))
            .unwrap_err();
        assert!(err.is_instance_of::<PyRuntimeError>(py));

        let dict = PyDict::new(py);
        dict.set_item("extra_rules", vec![rule(py, "PHONE", "(unclosed")?])?;
        let err = module
            .getattr("ColumnNameScanner")?
            .call_method1("from_config", (&dict,))
            .unwrap_err();
        assert!(err.is_instance_of::<PyValueError>(py));
        Ok(())
    });
}
