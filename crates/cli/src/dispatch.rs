// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Single-pass dispatch of active rules over a parsed document.
//!
//! Order of application:
//! 1. document rules on the root
//! 2. per test case: test case rules, then keyword rules on its nested keywords
//! 3. keyword rules on each standalone keyword
//!
//! General rules only run through [`Dispatcher::apply_general`]. A rule
//! that errors or panics is recorded as a [`RuleFailure`] and the walk
//! continues.

use std::cell::Cell;
use std::fmt;
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::path::PathBuf;
use std::sync::Once;

use serde::Serialize;

use crate::document::Document;
use crate::rule::{Diagnostic, Node};
use crate::selection::{ActiveRuleSet, ActiveRules};

thread_local! {
    static APPLYING_RULE: Cell<bool> = const { Cell::new(false) };
}

/// Silence the panic hook for panics raised inside a rule.
///
/// Those panics are caught and reported as a [`RuleFailure`]; every other
/// panic still goes to the previous hook. Safe to call more than once.
pub fn install_panic_hook() {
    static INSTALL: Once = Once::new();
    INSTALL.call_once(|| {
        let previous = std::panic::take_hook();
        std::panic::set_hook(Box::new(move |info| {
            if !applying_rule() {
                previous(info);
            }
        }));
    });
}

/// Whether the current thread is inside a rule's `apply`.
pub fn applying_rule() -> bool {
    APPLYING_RULE.with(Cell::get)
}

/// A rule that failed internally on one node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleFailure {
    pub file: PathBuf,
    pub rulename: String,
    /// Description of the node the rule was applied to.
    pub node: String,
    pub linenumber: usize,
    pub error: String,
}

impl fmt::Display for RuleFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}:{}: rule {} failed on {}: {}",
            self.file.display(),
            self.linenumber,
            self.rulename,
            self.node,
            self.error
        )
    }
}

/// Everything produced for one document, in firing order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Report {
    pub diagnostics: Vec<Diagnostic>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failures: Vec<RuleFailure>,
}

impl Report {
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty() && self.failures.is_empty()
    }
}

/// Applies an [`ActiveRules`] snapshot to documents.
pub struct Dispatcher<'r> {
    rules: &'r ActiveRules,
}

impl<'r> Dispatcher<'r> {
    pub fn new(rules: &'r ActiveRules) -> Self {
        Self { rules }
    }

    /// Walk `doc` once and collect diagnostics from document, test case
    /// and keyword rules.
    pub fn dispatch(&self, doc: &Document) -> Report {
        let mut report = Report::default();

        self.apply_set(&self.rules.document, Node::Document(doc), doc, &mut report);

        for tc in &doc.testcases {
            self.apply_set(&self.rules.testcase, Node::TestCase(tc), doc, &mut report);
            for kw in &tc.keywords {
                self.apply_set(&self.rules.keyword, Node::Keyword(kw), doc, &mut report);
            }
        }

        for kw in &doc.keywords {
            self.apply_set(&self.rules.keyword, Node::Keyword(kw), doc, &mut report);
        }

        report
    }

    /// Apply the general rules to `doc`, appending to `report`.
    pub fn apply_general(&self, doc: &Document, report: &mut Report) {
        self.apply_set(&self.rules.general, Node::Document(doc), doc, report);
    }

    fn apply_set(&self, set: &ActiveRuleSet, node: Node<'_>, doc: &Document, report: &mut Report) {
        for active in set {
            APPLYING_RULE.with(|flag| flag.set(true));
            let outcome = catch_unwind(AssertUnwindSafe(|| active.rule.apply(node)));
            APPLYING_RULE.with(|flag| flag.set(false));
            let error = match outcome {
                Ok(Ok(findings)) => {
                    report.diagnostics.extend(findings.into_iter().map(|finding| {
                        Diagnostic::new(doc.path(), active.name(), active.severity, finding)
                    }));
                    continue;
                }
                Ok(Err(err)) => err.to_string(),
                Err(payload) => panic_message(payload.as_ref()),
            };

            let failure = RuleFailure {
                file: doc.path().to_path_buf(),
                rulename: active.name().to_string(),
                node: node.describe(),
                linenumber: node.linenumber(),
                error,
            };
            tracing::warn!("{}", failure);
            report.failures.push(failure);
        }
    }
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        format!("panicked: {s}")
    } else if let Some(s) = payload.downcast_ref::<String>() {
        format!("panicked: {s}")
    } else {
        "panicked".to_string()
    }
}

#[cfg(test)]
#[path = "dispatch_tests.rs"]
mod tests;
