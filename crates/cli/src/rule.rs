// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! The rule contract and the records rules produce.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::document::{Document, Keyword, TestCase};
use crate::severity::Severity;

/// Document level a rule examines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Scope {
    /// The whole document, once.
    Document,
    /// Each test case, once.
    TestCase,
    /// Each keyword, standalone or nested in a test case.
    Keyword,
    /// Not tied to the tree walk; applied explicitly by callers.
    General,
}

impl Scope {
    /// All scopes in dispatch order.
    pub const ALL: [Scope; 4] = [Scope::Document, Scope::TestCase, Scope::Keyword, Scope::General];
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Scope::Document => "document",
            Scope::TestCase => "testcase",
            Scope::Keyword => "keyword",
            Scope::General => "general",
        };
        f.write_str(name)
    }
}

impl FromStr for Scope {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace(['-', '_', ' '], "").as_str() {
            "document" | "suite" => Ok(Scope::Document),
            "testcase" | "test" => Ok(Scope::TestCase),
            "keyword" => Ok(Scope::Keyword),
            "general" => Ok(Scope::General),
            _ => Err(format!("unknown scope: {s}")),
        }
    }
}

/// A node of the parsed tree handed to [`Rule::apply`].
#[derive(Debug, Clone, Copy)]
pub enum Node<'a> {
    Document(&'a Document),
    TestCase(&'a TestCase),
    Keyword(&'a Keyword),
}

impl<'a> Node<'a> {
    /// Line the node starts on (1 for the document root).
    pub fn linenumber(&self) -> usize {
        match self {
            Node::Document(_) => 1,
            Node::TestCase(tc) => tc.linenumber,
            Node::Keyword(kw) => kw.linenumber,
        }
    }

    /// Short human description, e.g. "test case `Login`".
    pub fn describe(&self) -> String {
        match self {
            Node::Document(doc) => format!("document `{}`", doc.path.display()),
            Node::TestCase(tc) => format!("test case `{}`", tc.name),
            Node::Keyword(kw) => format!("keyword `{}`", kw.name),
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            Node::Document(_) => "document",
            Node::TestCase(_) => "test case",
            Node::Keyword(_) => "keyword",
        }
    }

    /// The document, or a [`RuleError::WrongNode`] naming `rule`.
    pub fn document(self, rule: &str) -> Result<&'a Document, RuleError> {
        match self {
            Node::Document(doc) => Ok(doc),
            other => Err(RuleError::wrong_node(rule, "document", other)),
        }
    }

    /// The test case, or a [`RuleError::WrongNode`] naming `rule`.
    pub fn testcase(self, rule: &str) -> Result<&'a TestCase, RuleError> {
        match self {
            Node::TestCase(tc) => Ok(tc),
            other => Err(RuleError::wrong_node(rule, "test case", other)),
        }
    }

    /// The keyword, or a [`RuleError::WrongNode`] naming `rule`.
    pub fn keyword(self, rule: &str) -> Result<&'a Keyword, RuleError> {
        match self {
            Node::Keyword(kw) => Ok(kw),
            other => Err(RuleError::wrong_node(rule, "keyword", other)),
        }
    }
}

/// What a rule reports. The dispatcher adds the rule name, severity and file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub linenumber: usize,
    pub char: usize,
    pub message: String,
}

impl Finding {
    pub fn new(linenumber: usize, char: usize, message: impl Into<String>) -> Self {
        Self {
            linenumber,
            char,
            message: message.into(),
        }
    }
}

/// A finding stamped with the rule that produced it and its effective severity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Diagnostic {
    pub file: PathBuf,
    pub rulename: String,
    pub severity: Severity,
    pub linenumber: usize,
    pub char: usize,
    pub message: String,
}

impl Diagnostic {
    pub fn new(
        file: impl Into<PathBuf>,
        rulename: impl Into<String>,
        severity: Severity,
        finding: Finding,
    ) -> Self {
        Self {
            file: file.into(),
            rulename: rulename.into(),
            severity,
            linenumber: finding.linenumber,
            char: finding.char,
            message: finding.message,
        }
    }
}

/// Internal failure of a rule. Never fatal to a run.
#[derive(Debug, thiserror::Error)]
pub enum RuleError {
    #[error("{rule} expects a {expected} node, got a {actual}")]
    WrongNode {
        rule: String,
        expected: &'static str,
        actual: &'static str,
    },

    #[error("{0}")]
    Internal(String),
}

impl RuleError {
    fn wrong_node(rule: &str, expected: &'static str, actual: Node<'_>) -> Self {
        RuleError::WrongNode {
            rule: rule.to_string(),
            expected,
            actual: actual.kind(),
        }
    }
}

/// A single style check.
///
/// Object-safe so the registry can hold `Arc<dyn Rule>`. Implementations
/// must not keep per-node state: one instance is shared across every node
/// and every document of a run.
pub trait Rule: Send + Sync {
    /// Identifier, matched case-insensitively against directives.
    fn name(&self) -> &str;

    /// Document level this rule examines.
    fn scope(&self) -> Scope;

    /// Severity used when no directive overrides it.
    fn default_severity(&self) -> Severity;

    /// One-line description for `--list` style output.
    fn description(&self) -> &str {
        ""
    }

    /// Inspect `node` and report findings.
    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError>;
}

/// Case-folded rule identity.
pub fn fold_name(name: &str) -> String {
    name.to_lowercase()
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
