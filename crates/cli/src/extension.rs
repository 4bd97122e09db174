// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Extension rules declared in rule files.
//!
//! A rule file (TOML or YAML) describes one pattern rule:
//!
//! ```toml
//! name = "NoSleep"
//! scope = "keyword"
//! severity = "warning"
//! pattern = "(?i)^sleep$"
//! target = "step"
//! message = "Avoid '{match}' in keywords"
//! ```
//!
//! `target` picks what the pattern is matched against: the test case or
//! keyword `name`, each `step` keyword call, or each raw source `line`.

use std::path::{Path, PathBuf};

use regex::Regex;
use serde::Deserialize;

use crate::document::{Body, Document, Statement};
use crate::rule::{Finding, Node, Rule, RuleError, Scope};
use crate::severity::Severity;

/// File extensions recognized as rule files.
pub const RULE_FILE_EXTENSIONS: &[&str] = &["toml", "yaml", "yml"];

/// Failure to load an extension rule.
#[derive(Debug, thiserror::Error)]
pub enum ExtensionError {
    #[error("cannot read rule source: {0}")]
    Io(#[from] std::io::Error),

    #[error("not a rule file (expected .toml, .yaml or .yml)")]
    UnsupportedFile,

    #[error("invalid rule file: {0}")]
    Syntax(String),

    #[error("invalid rule name `{0}`: expected an identifier")]
    InvalidName(String),

    #[error("invalid scope: {0}")]
    InvalidScope(String),

    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    #[error("target `{target}` does not apply to {scope} rules")]
    InvalidTarget { target: &'static str, scope: Scope },
}

/// What a pattern rule matches against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Target {
    Name,
    Step,
    Line,
}

impl Target {
    fn as_str(self) -> &'static str {
        match self {
            Target::Name => "name",
            Target::Step => "step",
            Target::Line => "line",
        }
    }
}

/// On-disk shape of a rule file.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RuleFile {
    name: String,
    scope: String,
    #[serde(default)]
    severity: Option<Severity>,
    pattern: String,
    #[serde(default)]
    target: Option<Target>,
    message: String,
    #[serde(default)]
    description: Option<String>,
}

/// A rule that reports every match of a regular expression.
#[derive(Debug)]
pub struct PatternRule {
    name: String,
    scope: Scope,
    severity: Severity,
    pattern: Regex,
    target: Target,
    message: String,
    description: String,
}

impl PatternRule {
    pub fn target(&self) -> Target {
        self.target
    }

    fn report(&self, linenumber: usize, char: usize, matched: &str) -> Finding {
        Finding::new(linenumber, char, self.message.replace("{match}", matched))
    }

    fn match_name(&self, name: &str, linenumber: usize) -> Option<Finding> {
        self.pattern
            .find(name)
            .map(|m| self.report(linenumber, name[..m.start()].chars().count(), m.as_str()))
    }

    fn match_steps<'a>(&self, steps: impl Iterator<Item = &'a Statement>) -> Vec<Finding> {
        steps
            .filter_map(|step| {
                let head = step.head();
                self.pattern
                    .find(head)
                    .map(|m| self.report(step.linenumber, step.column, m.as_str()))
            })
            .collect()
    }

    fn match_lines(&self, doc: &Document) -> Vec<Finding> {
        doc.lines
            .iter()
            .enumerate()
            .filter_map(|(idx, line)| {
                self.pattern.find(line).map(|m| {
                    self.report(idx + 1, line[..m.start()].chars().count(), m.as_str())
                })
            })
            .collect()
    }

    fn match_document(&self, doc: &Document) -> Vec<Finding> {
        match self.target {
            Target::Line => self.match_lines(doc),
            Target::Name => self
                .match_name(&doc.suite_name(), 0)
                .into_iter()
                .collect(),
            Target::Step => {
                let mut findings = Vec::new();
                for tc in &doc.testcases {
                    findings.extend(self.match_steps(tc.steps()));
                    for kw in &tc.keywords {
                        findings.extend(self.match_steps(kw.steps()));
                    }
                }
                for kw in &doc.keywords {
                    findings.extend(self.match_steps(kw.steps()));
                }
                findings
            }
        }
    }
}

impl Rule for PatternRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        Ok(match node {
            Node::Document(doc) => self.match_document(doc),
            Node::TestCase(tc) => match self.target {
                Target::Name => self.match_name(&tc.name, tc.linenumber).into_iter().collect(),
                Target::Step => self.match_steps(tc.steps()),
                Target::Line => {
                    return Err(RuleError::Internal(format!(
                        "{}: line patterns need the document",
                        self.name
                    )));
                }
            },
            Node::Keyword(kw) => match self.target {
                Target::Name => self.match_name(&kw.name, kw.linenumber).into_iter().collect(),
                Target::Step => self.match_steps(kw.steps()),
                Target::Line => {
                    return Err(RuleError::Internal(format!(
                        "{}: line patterns need the document",
                        self.name
                    )));
                }
            },
        })
    }
}

/// Rule files under `path`: the file itself, or the rule files of a
/// directory (non-recursive) sorted by name.
pub fn rule_files(path: &Path) -> Result<Vec<PathBuf>, ExtensionError> {
    if !path.is_dir() {
        if !path.exists() {
            return Err(ExtensionError::Io(std::io::Error::new(
                std::io::ErrorKind::NotFound,
                "no such file or directory",
            )));
        }
        return Ok(vec![path.to_path_buf()]);
    }

    let mut files = Vec::new();
    for entry in std::fs::read_dir(path)? {
        let file = entry?.path();
        if file.is_file() && is_rule_file(&file) {
            files.push(file);
        } else {
            tracing::debug!("ignoring {} in rule directory", file.display());
        }
    }
    files.sort();
    Ok(files)
}

fn is_rule_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| RULE_FILE_EXTENSIONS.contains(&e.to_ascii_lowercase().as_str()))
}

/// Load a single rule file.
pub fn load_file(path: &Path) -> Result<PatternRule, ExtensionError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);
    let content = std::fs::read_to_string(path)?;
    match extension.as_deref() {
        Some("toml") => parse_toml(&content),
        Some("yaml") | Some("yml") => parse_yaml(&content),
        _ => Err(ExtensionError::UnsupportedFile),
    }
}

/// Parse rule file content in TOML form.
pub fn parse_toml(content: &str) -> Result<PatternRule, ExtensionError> {
    let file: RuleFile = toml::from_str(content).map_err(|e| ExtensionError::Syntax(e.to_string()))?;
    build(file)
}

/// Parse rule file content in YAML form.
pub fn parse_yaml(content: &str) -> Result<PatternRule, ExtensionError> {
    let file: RuleFile =
        serde_yaml::from_str(content).map_err(|e| ExtensionError::Syntax(e.to_string()))?;
    build(file)
}

fn build(file: RuleFile) -> Result<PatternRule, ExtensionError> {
    if !is_identifier(&file.name) {
        return Err(ExtensionError::InvalidName(file.name));
    }
    let scope: Scope = file.scope.parse().map_err(ExtensionError::InvalidScope)?;
    let target = file.target.unwrap_or(match scope {
        Scope::TestCase | Scope::Keyword => Target::Name,
        Scope::Document | Scope::General => Target::Line,
    });
    if target == Target::Line && matches!(scope, Scope::TestCase | Scope::Keyword) {
        return Err(ExtensionError::InvalidTarget {
            target: target.as_str(),
            scope,
        });
    }

    Ok(PatternRule {
        pattern: Regex::new(&file.pattern)?,
        name: file.name,
        scope,
        severity: file.severity.unwrap_or(Severity::Warning),
        target,
        message: file.message,
        description: file.description.unwrap_or_default(),
    })
}

fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

#[cfg(test)]
#[path = "extension_tests.rs"]
mod tests;
