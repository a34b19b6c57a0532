// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Regex pattern compilation for the pattern and column-name scanners
// Uses RegexSet so every category is tested in a single pass

use once_cell::sync::Lazy;
use regex::{RegexBuilder, RegexSet, RegexSetBuilder};

use super::config::ColumnRuleDef;
use super::error::{Result, ScannerError};
use super::piitypes::PiiType;

/// Patterns compiled into one set, with the category behind each set index
#[derive(Debug, Clone)]
pub struct CompiledPatterns {
    pub regex_set: RegexSet,
    pub pii_types: Vec<PiiType>,
}

impl CompiledPatterns {
    /// Categories whose pattern matches somewhere in `text`
    pub fn matching_types(&self, text: &str) -> impl Iterator<Item = PiiType> + '_ {
        self.regex_set
            .matches(text)
            .into_iter()
            .map(move |idx| self.pii_types[idx])
    }
}

/// Pattern definitions (category, pattern, description)
type PatternDef = (PiiType, &'static str, &'static str);

// Common content patterns: phone, email, credit card, street address
static COMMON_PATTERNS: Lazy<Vec<PatternDef>> = Lazy::new(|| {
    vec![
        (
            PiiType::Phone,
            r"(?:\+?\b1[-.\s]?)?(?:\(\d{3}\)|\b\d{3})[-.\s]?\d{3}[-.\s]?\d{4}\b",
            "US phone number",
        ),
        (
            PiiType::Phone,
            r"\+[1-9]\d{9,14}\b|\+\d{1,3}[-.\s]\d{2,4}(?:[-.\s]\d{2,4}){1,3}\b",
            "International phone number",
        ),
        (
            PiiType::Email,
            r"[a-z0-9._%+-]+@(?:[a-z0-9](?:[a-z0-9-]*[a-z0-9])?\.)+[a-z]{2,}\b",
            "Email address",
        ),
        (
            PiiType::CreditCard,
            r"\b(?:\d{4}[-\s]?){3}\d{4}\b|\b\d{4}[-\s]\d{6}[-\s]\d{5}\b|\b\d{15}\b",
            "Credit card number",
        ),
        (
            PiiType::Address,
            r"\b\d{1,5}\s+(?:[a-z0-9.'-]+\s+){1,4}(?:street|st|avenue|ave|road|rd|highway|hwy|square|sq|trail|trl|drive|dr|court|ct|parkway|pkwy|park|circle|cir|boulevard|blvd|lane|ln|way|place|pl|terrace)\b",
            "Street address",
        ),
    ]
});

// Column-name rules: the whole identifier must match
static COLUMN_PATTERNS: Lazy<Vec<(PiiType, &'static str)>> = Lazy::new(|| {
    vec![
        (
            PiiType::Person,
            "^.*(firstname|fname|lastname|lname|fullname|maidenname|_name|nickname|name_suffix|name).*$",
        ),
        (PiiType::Email, "^.*(email|e-mail|mail).*$"),
        (
            PiiType::BirthDate,
            "^.*(date_of_birth|dateofbirth|dob|birthday|date_of_death|dateofdeath).*$",
        ),
        (PiiType::Gender, "^.*(gender).*$"),
        (PiiType::Nationality, "^.*(nationality).*$"),
        (
            PiiType::Address,
            "^.*(addr|state|county|country|zipcode|postal|zone|borough|line1|line_|line2|pincode|landmark|contact).*$",
        ),
        (PiiType::UserName, "^.*user(id|name)?.*$"),
        (PiiType::Password, "^.*(pass|access_token).*$"),
        (
            PiiType::Ssn,
            "^.*(ssn|social|aadhar|adhaar|aadhaar|pan).*$",
        ),
        (PiiType::Phone, "^.*(phone|mobile|mob_).*$"),
        (PiiType::Location, "^.*(location|lat|lon).*$"),
    ]
});

/// Wrap a pattern so it only matches the entire input
pub fn anchored(pattern: &str) -> String {
    format!("^(?:{})$", pattern)
}

/// Compile a single case-insensitive pattern that must span the whole input
pub fn compile_anchored(pattern: &str) -> std::result::Result<regex::Regex, regex::Error> {
    RegexBuilder::new(&anchored(pattern))
        .case_insensitive(true)
        .build()
}

fn compile_set(rules: Vec<(PiiType, String)>) -> Result<CompiledPatterns> {
    // Compile each rule alone first so a bad pattern is reported against its category
    for (pii_type, pattern) in &rules {
        RegexBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .map_err(|source| ScannerError::InvalidRule {
                pii_type: *pii_type,
                pattern: pattern.clone(),
                source,
            })?;
    }

    let regex_set = if rules.is_empty() {
        RegexSet::empty()
    } else {
        RegexSetBuilder::new(rules.iter().map(|(_, pattern)| pattern))
            .case_insensitive(true)
            .build()
            .map_err(ScannerError::PatternSet)?
    };

    Ok(CompiledPatterns {
        regex_set,
        pii_types: rules.into_iter().map(|(pii_type, _)| pii_type).collect(),
    })
}

/// Compile the common content patterns
pub fn compile_common_patterns() -> Result<CompiledPatterns> {
    let rules = COMMON_PATTERNS
        .iter()
        .map(|(pii_type, pattern, _)| (*pii_type, pattern.to_string()))
        .collect();
    compile_set(rules)
}

/// Compile the column-name rule table plus any enabled extra rules
pub fn compile_column_rules(extra_rules: &[ColumnRuleDef]) -> Result<CompiledPatterns> {
    let builtin = COLUMN_PATTERNS
        .iter()
        .map(|(pii_type, pattern)| (*pii_type, anchored(pattern)));
    let extra = extra_rules
        .iter()
        .filter(|rule| rule.enabled)
        .map(|rule| (rule.pii_type, anchored(&rule.pattern)));

    compile_set(builtin.chain(extra).collect())
}
