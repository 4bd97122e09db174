// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules that see the whole document once.

use std::collections::HashMap;
use std::sync::Arc;

use super::{RuleSettings, normalize_name};
use crate::document::TableKind;
use crate::registry::{Origin, Registry};
use crate::rule::{Finding, Node, Rule, RuleError};

pub(super) fn register(registry: &mut Registry, settings: &RuleSettings) {
    registry.register(Origin::Builtin, Arc::new(DuplicateTestNames));
    registry.register(Origin::Builtin, Arc::new(DuplicateKeywordNames));
    registry.register(Origin::Builtin, Arc::new(InvalidTable));
    registry.register(Origin::Builtin, Arc::new(PeriodInSuiteName));
    registry.register(
        Origin::Builtin,
        Arc::new(FileTooLong {
            max_lines: settings.file_too_long,
        }),
    );
    registry.register(
        Origin::Builtin,
        Arc::new(TooManyTestCases {
            max_testcases: settings.too_many_test_cases,
        }),
    );
    registry.register(Origin::Builtin, Arc::new(RequireSuiteDocumentation));
}

/// Report every name after the first that normalizes to an earlier one.
fn duplicates<'a>(
    items: impl Iterator<Item = (&'a str, usize)>,
    kind: &str,
) -> Vec<Finding> {
    let mut seen: HashMap<String, usize> = HashMap::new();
    let mut findings = Vec::new();
    for (name, linenumber) in items {
        match seen.get(&normalize_name(name)) {
            Some(first) => findings.push(Finding::new(
                linenumber,
                0,
                format!("Duplicate {kind} name '{name}' (first defined on line {first})"),
            )),
            None => {
                seen.insert(normalize_name(name), linenumber);
            }
        }
    }
    findings
}

pub struct DuplicateTestNames;

impl Rule for DuplicateTestNames {
    rule_identity!(
        DuplicateTestNames,
        Document,
        Error,
        "Test case names must be unique within a suite"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        Ok(duplicates(
            doc.testcases
                .iter()
                .map(|tc| (tc.name.as_str(), tc.linenumber)),
            "test case",
        ))
    }
}

pub struct DuplicateKeywordNames;

impl Rule for DuplicateKeywordNames {
    rule_identity!(
        DuplicateKeywordNames,
        Document,
        Error,
        "Keyword names must be unique within a file"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        Ok(duplicates(
            doc.keywords
                .iter()
                .map(|kw| (kw.name.as_str(), kw.linenumber)),
            "keyword",
        ))
    }
}

pub struct InvalidTable;

impl Rule for InvalidTable {
    rule_identity!(
        InvalidTable,
        Document,
        Error,
        "Table headers must name a known table"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        Ok(doc
            .tables
            .iter()
            .filter(|t| t.kind == TableKind::Unknown)
            .map(|t| Finding::new(t.linenumber, 0, format!("Unknown table name '{}'", t.name)))
            .collect())
    }
}

pub struct PeriodInSuiteName;

impl Rule for PeriodInSuiteName {
    rule_identity!(
        PeriodInSuiteName,
        Document,
        Warning,
        "Suite names should not contain '.'"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        let name = doc.suite_name();
        if name.contains('.') {
            Ok(vec![Finding::new(
                0,
                0,
                format!("'.' in suite name '{name}'"),
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

pub struct FileTooLong {
    pub max_lines: usize,
}

impl Rule for FileTooLong {
    rule_identity!(FileTooLong, Document, Warning, "Files should stay short");

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        let count = doc.lines.len();
        if count > self.max_lines {
            Ok(vec![Finding::new(
                0,
                0,
                format!(
                    "File has too many lines ({count}, max {})",
                    self.max_lines
                ),
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

pub struct TooManyTestCases {
    pub max_testcases: usize,
}

impl Rule for TooManyTestCases {
    rule_identity!(
        TooManyTestCases,
        Document,
        Warning,
        "Suites should hold a limited number of test cases"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        match doc.testcases.get(self.max_testcases) {
            Some(first_extra) => Ok(vec![Finding::new(
                first_extra.linenumber,
                0,
                format!(
                    "Too many test cases ({} > {}) in suite",
                    doc.testcases.len(),
                    self.max_testcases
                ),
            )]),
            None => Ok(Vec::new()),
        }
    }
}

pub struct RequireSuiteDocumentation;

impl Rule for RequireSuiteDocumentation {
    rule_identity!(
        RequireSuiteDocumentation,
        Document,
        Error,
        "Suites must have a Documentation setting"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        let documented = doc
            .setting("Documentation")
            .is_some_and(|s| !s.args().is_empty());
        if documented {
            Ok(Vec::new())
        } else {
            Ok(vec![Finding::new(0, 0, "No suite documentation")])
        }
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
