// Copyright 2025
// SPDX-License-Identifier: Apache-2.0
//
// Gazetteer and pattern based entity model

use regex::{Regex, RegexBuilder};
use serde::Deserialize;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::Path;
use tracing::info;

use super::{Entity, EntityRecognizer};
use crate::scanner::error::{Result, ScannerError};

const BUILTIN_MODEL: &str = include_str!("../../../models/en_lexicon_sm.json");

/// On-disk model format
#[derive(Debug, Deserialize)]
struct ModelSpec {
    name: String,
    #[serde(default)]
    version: String,
    entities: Vec<EntityRuleSpec>,
    #[serde(default)]
    proper_names: Option<ProperNameSpec>,
}

#[derive(Debug, Deserialize)]
struct EntityRuleSpec {
    label: String,
    /// Exact phrases, matched as whole words
    #[serde(default)]
    terms: Vec<String>,
    #[serde(default)]
    patterns: Vec<String>,
    #[serde(default)]
    case_insensitive: bool,
}

/// Runs of capitalized words reported under one label, after every
/// term and pattern rule has claimed its spans
#[derive(Debug, Deserialize)]
struct ProperNameSpec {
    label: String,
    #[serde(default = "default_min_tokens")]
    min_tokens: usize,
    /// Capitalized words that never open or close a name
    #[serde(default)]
    stopwords: Vec<String>,
}

fn default_min_tokens() -> usize {
    2
}

#[derive(Debug, Clone)]
struct LabelRule {
    label: String,
    regex: Regex,
}

#[derive(Debug, Clone)]
struct ProperNameRule {
    label: String,
    min_tokens: usize,
    stopwords: HashSet<String>,
    run: Regex,
    token: Regex,
}

impl ProperNameRule {
    fn compile(spec: ProperNameSpec) -> Result<Self> {
        let build = |pattern: &str| {
            Regex::new(pattern).map_err(|source| ScannerError::ModelPattern {
                label: spec.label.clone(),
                source,
            })
        };
        let run = build(r"\b\p{Lu}\p{Ll}+(?:[ \t]+\p{Lu}\p{Ll}+)*\b")?;
        let token = build(r"\p{Lu}\p{Ll}+")?;

        Ok(Self {
            min_tokens: spec.min_tokens.max(1),
            stopwords: spec.stopwords.into_iter().collect(),
            label: spec.label,
            run,
            token,
        })
    }

    /// Name spans in `text`, with stopwords trimmed from both ends of each run
    fn spans(&self, text: &str) -> Vec<(usize, usize)> {
        let mut spans = Vec::new();
        for run in self.run.find_iter(text) {
            let tokens: Vec<(usize, usize)> = self
                .token
                .find_iter(run.as_str())
                .map(|t| (run.start() + t.start(), run.start() + t.end()))
                .collect();
            let is_name =
                |&(start, end): &(usize, usize)| !self.stopwords.contains(&text[start..end]);

            let first = tokens.iter().position(is_name);
            let last = tokens.iter().rposition(is_name);
            if let (Some(first), Some(last)) = (first, last) {
                if last + 1 - first >= self.min_tokens {
                    spans.push((tokens[first].0, tokens[last].1));
                }
            }
        }
        spans
    }
}

/// Entity recognizer driven by per-label term lists and regexes
///
/// Rules are compiled once when the model is loaded. Overlapping candidates
/// are resolved so each returned span is disjoint: the earliest start wins,
/// then the longest span, then the rule listed first in the model. Proper-name
/// runs only fill gaps the rules left.
#[derive(Debug, Clone)]
pub struct LexiconModel {
    name: String,
    version: String,
    rules: Vec<LabelRule>,
    proper_names: Option<ProperNameRule>,
}

impl LexiconModel {
    /// The English model shipped with the crate
    pub fn builtin() -> Result<Self> {
        Self::from_json(BUILTIN_MODEL)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ScannerError::ModelIo {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let spec: ModelSpec = serde_json::from_str(json).map_err(ScannerError::ModelParse)?;
        Self::compile(spec)
    }

    fn compile(spec: ModelSpec) -> Result<Self> {
        if spec.entities.is_empty() {
            return Err(ScannerError::EmptyModel(spec.name));
        }

        let mut rules = Vec::new();
        for entity in &spec.entities {
            if entity.terms.is_empty() && entity.patterns.is_empty() {
                return Err(ScannerError::EmptyRule {
                    model: spec.name.clone(),
                    label: entity.label.clone(),
                });
            }

            let mut sources = Vec::with_capacity(entity.patterns.len() + 1);
            if !entity.terms.is_empty() {
                sources.push(terms_pattern(&entity.terms));
            }
            sources.extend(entity.patterns.iter().cloned());

            for source in sources {
                let regex = RegexBuilder::new(&source)
                    .case_insensitive(entity.case_insensitive)
                    .build()
                    .map_err(|e| ScannerError::ModelPattern {
                        label: entity.label.clone(),
                        source: e,
                    })?;
                rules.push(LabelRule {
                    label: entity.label.clone(),
                    regex,
                });
            }
        }

        let proper_names = spec.proper_names.map(ProperNameRule::compile).transpose()?;

        info!(
            model = %spec.name,
            version = %spec.version,
            rules = rules.len(),
            proper_names = proper_names.is_some(),
            "loaded entity model"
        );

        Ok(Self {
            name: spec.name,
            version: spec.version,
            rules,
            proper_names,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn version(&self) -> &str {
        &self.version
    }

    /// Distinct labels this model can produce, in rule order
    pub fn labels(&self) -> Vec<&str> {
        let mut labels: Vec<&str> = Vec::new();
        let names = self.proper_names.iter().map(|rule| &rule.label);
        for label in self.rules.iter().map(|rule| &rule.label).chain(names) {
            if !labels.contains(&label.as_str()) {
                labels.push(label);
            }
        }
        labels
    }
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Whole-word alternation over the terms, longest first so that
/// "New York City" is preferred over "New York"
///
/// A word boundary is only required at an end of the term that is a word
/// character, so "U.S." still matches before a space or at end of text.
fn terms_pattern(terms: &[String]) -> String {
    let mut sorted: Vec<&String> = terms.iter().collect();
    sorted.sort_by_key(|term| Reverse(term.len()));

    let alternation = sorted
        .iter()
        .map(|term| {
            let lead = if term.starts_with(is_word_char) { r"\b" } else { "" };
            let trail = if term.ends_with(is_word_char) { r"\b" } else { "" };
            format!("{}{}{}", lead, regex::escape(term), trail)
        })
        .collect::<Vec<_>>()
        .join("|");
    format!("(?:{})", alternation)
}

impl EntityRecognizer for LexiconModel {
    fn recognize(&self, text: &str) -> Vec<Entity> {
        // (start, end, rule index)
        let mut candidates: Vec<(usize, usize, usize)> = Vec::new();
        for (idx, rule) in self.rules.iter().enumerate() {
            for mat in rule.regex.find_iter(text) {
                if !mat.is_empty() {
                    candidates.push((mat.start(), mat.end(), idx));
                }
            }
        }

        candidates.sort_by_key(|&(start, end, idx)| (start, Reverse(end - start), idx));

        let mut entities = Vec::new();
        let mut last_end = 0;
        for (start, end, idx) in candidates {
            if start < last_end {
                continue;
            }
            entities.push(Entity {
                label: self.rules[idx].label.clone(),
                start,
                end,
            });
            last_end = end;
        }

        if let Some(names) = &self.proper_names {
            for (start, end) in names.spans(text) {
                if entities.iter().all(|e| end <= e.start || start >= e.end) {
                    entities.push(Entity {
                        label: names.label.clone(),
                        start,
                        end,
                    });
                }
            }
            entities.sort_by_key(|e| e.start);
        }

        entities
    }
}
