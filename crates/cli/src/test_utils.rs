// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared unit test utilities.
//!
//! Provides stub rules, registries and documents for unit tests in the
//! cli crate.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::fs;
use std::path::Path;
use std::sync::{Arc, Mutex};

use crate::document::{Document, Keyword, Statement, TestCase};
use crate::registry::{Origin, Registry};
use crate::rule::{Finding, Node, Rule, RuleError, Scope};
use crate::severity::Severity;

/// Shared log of `rule:node` entries, in call order.
pub type CallLog = Arc<Mutex<Vec<String>>>;

pub fn call_log() -> CallLog {
    Arc::new(Mutex::new(Vec::new()))
}

pub fn calls(log: &CallLog) -> Vec<String> {
    log.lock().unwrap().clone()
}

/// Rule that records every node it sees and reports one finding per node.
pub struct RecordingRule {
    name: String,
    scope: Scope,
    severity: Severity,
    log: CallLog,
}

impl RecordingRule {
    pub fn new(name: &str, scope: Scope, log: &CallLog) -> Self {
        Self {
            name: name.to_string(),
            scope,
            severity: Severity::Warning,
            log: Arc::clone(log),
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }
}

impl Rule for RecordingRule {
    fn name(&self) -> &str {
        &self.name
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn default_severity(&self) -> Severity {
        self.severity
    }

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let label = match node {
            Node::Document(_) => "document".to_string(),
            Node::TestCase(tc) => tc.name.clone(),
            Node::Keyword(kw) => kw.name.clone(),
        };
        self.log
            .lock()
            .unwrap()
            .push(format!("{}:{}", self.name, label));
        Ok(vec![Finding::new(
            node.linenumber(),
            0,
            format!("{} saw {}", self.name, label),
        )])
    }
}

/// Rule that always returns an error.
pub struct FailingRule {
    pub name: &'static str,
    pub scope: Scope,
}

impl Rule for FailingRule {
    fn name(&self) -> &str {
        self.name
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn apply(&self, _node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        Err(RuleError::Internal("boom".to_string()))
    }
}

/// Rule that panics.
pub struct PanickingRule {
    pub name: &'static str,
    pub scope: Scope,
}

impl Rule for PanickingRule {
    fn name(&self) -> &str {
        self.name
    }

    fn scope(&self) -> Scope {
        self.scope
    }

    fn default_severity(&self) -> Severity {
        Severity::Error
    }

    fn apply(&self, _node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        panic!("rule exploded");
    }
}

/// Registry holding `rules` in the given order.
pub fn registry_of(rules: Vec<Arc<dyn Rule>>) -> Registry {
    let mut registry = Registry::new();
    for rule in rules {
        assert!(registry.register(Origin::Builtin, rule));
    }
    registry
}

/// Step statement with the given cells.
pub fn step(linenumber: usize, cells: &[&str]) -> Statement {
    Statement::new(linenumber, 5, cells.iter().map(|c| c.to_string()).collect())
}

/// Test case `name` with `steps` step statements and no settings.
pub fn testcase(name: &str, linenumber: usize, steps: usize) -> TestCase {
    let mut tc = TestCase::new(name, linenumber);
    for i in 0..steps {
        tc.statements.push(step(linenumber + 1 + i, &["Log", "step"]));
    }
    tc
}

/// Keyword `name` with `steps` step statements and no settings.
pub fn keyword(name: &str, linenumber: usize, steps: usize) -> Keyword {
    let mut kw = Keyword::new(name, linenumber);
    for i in 0..steps {
        kw.statements.push(step(linenumber + 1 + i, &["Log", "step"]));
    }
    kw
}

/// Creates a directory tree from a list of (path, content) pairs.
///
/// Parent directories are created automatically.
pub fn create_tree(root: &Path, files: &[(&str, &str)]) {
    for (path, content) in files {
        let full_path = root.join(path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(full_path, content).unwrap();
    }
}

/// An empty document with the given path.
pub fn empty_document(path: &str) -> Document {
    Document::new(path)
}
