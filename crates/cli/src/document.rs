// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parsed document tree.
//!
//! A document is a root (path, raw lines, tables, suite settings and
//! variables) plus ordered test cases and ordered keywords. Test cases may
//! carry nested keywords. Everything is in source order.

use std::path::{Path, PathBuf};

/// Table kind, derived from a `*** Name ***` header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TableKind {
    Settings,
    Variables,
    TestCases,
    Keywords,
    Comments,
    Unknown,
}

impl TableKind {
    /// Classify a header name (already stripped of asterisks).
    pub fn from_header(name: &str) -> Self {
        let normalized = name.trim().to_ascii_lowercase();
        match normalized.as_str() {
            "setting" | "settings" | "metadata" => TableKind::Settings,
            "variable" | "variables" => TableKind::Variables,
            "test case" | "test cases" | "task" | "tasks" => TableKind::TestCases,
            "keyword" | "keywords" | "user keyword" | "user keywords" => TableKind::Keywords,
            "comment" | "comments" => TableKind::Comments,
            _ => TableKind::Unknown,
        }
    }
}

/// A table header occurrence.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Table {
    pub name: String,
    pub kind: TableKind,
    pub linenumber: usize,
}

/// One logical row of data: a step, a setting, or a variable definition.
///
/// Continuation rows (`...`) are folded into the statement they continue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Statement {
    /// Line of the first physical row.
    pub linenumber: usize,
    /// Char offset of the first data cell on that row.
    pub column: usize,
    pub cells: Vec<String>,
}

impl Statement {
    pub fn new(linenumber: usize, column: usize, cells: Vec<String>) -> Self {
        Self {
            linenumber,
            column,
            cells,
        }
    }

    /// First cell, or the empty string for an empty statement.
    pub fn head(&self) -> &str {
        self.cells.first().map(String::as_str).unwrap_or("")
    }

    /// Cells after the first one.
    pub fn args(&self) -> &[String] {
        self.cells.get(1..).unwrap_or(&[])
    }

    /// Setting name for `[Name]` rows inside test cases and keywords.
    pub fn setting_name(&self) -> Option<&str> {
        let head = self.head();
        head.strip_prefix('[')?.strip_suffix(']')
    }

    pub fn is_setting(&self) -> bool {
        self.setting_name().is_some()
    }
}

/// A user keyword definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keyword {
    pub name: String,
    pub linenumber: usize,
    pub statements: Vec<Statement>,
}

/// A test case (or task) definition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TestCase {
    pub name: String,
    pub linenumber: usize,
    pub statements: Vec<Statement>,
    /// Keywords defined inside this test case, in source order.
    pub keywords: Vec<Keyword>,
}

/// Shared accessors for items that hold statements.
pub trait Body {
    fn statements(&self) -> &[Statement];

    /// `[Setting]` rows.
    fn settings(&self) -> impl Iterator<Item = &Statement> {
        self.statements().iter().filter(|s| s.is_setting())
    }

    /// Executable rows.
    fn steps(&self) -> impl Iterator<Item = &Statement> {
        self.statements().iter().filter(|s| !s.is_setting())
    }

    /// Look up a setting by name, case-insensitively.
    fn setting(&self, name: &str) -> Option<&Statement> {
        self.settings().find(|s| {
            s.setting_name()
                .is_some_and(|n| n.eq_ignore_ascii_case(name))
        })
    }
}

impl Body for Keyword {
    fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl Body for TestCase {
    fn statements(&self) -> &[Statement] {
        &self.statements
    }
}

impl Keyword {
    pub fn new(name: impl Into<String>, linenumber: usize) -> Self {
        Self {
            name: name.into(),
            linenumber,
            statements: Vec::new(),
        }
    }
}

impl TestCase {
    pub fn new(name: impl Into<String>, linenumber: usize) -> Self {
        Self {
            name: name.into(),
            linenumber,
            statements: Vec::new(),
            keywords: Vec::new(),
        }
    }
}

/// A parsed test-definition file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub path: PathBuf,
    /// Raw source lines without terminators.
    pub lines: Vec<String>,
    pub tables: Vec<Table>,
    /// Rows of the settings table.
    pub settings: Vec<Statement>,
    /// Rows of the variables table.
    pub variables: Vec<Statement>,
    pub testcases: Vec<TestCase>,
    /// Standalone keywords from the keywords table.
    pub keywords: Vec<Keyword>,
}

impl Document {
    /// An empty document for `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lines: Vec::new(),
            tables: Vec::new(),
            settings: Vec::new(),
            variables: Vec::new(),
            testcases: Vec::new(),
            keywords: Vec::new(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Suite name as Robot Framework derives it from the file name:
    /// the stem, minus an `NN__` ordering prefix, underscores as spaces.
    pub fn suite_name(&self) -> String {
        let stem = self
            .path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();
        let stem = match stem.split_once("__") {
            Some((prefix, rest)) if prefix.chars().all(|c| c.is_ascii_digit()) => rest.to_string(),
            _ => stem,
        };
        stem.replace('_', " ")
    }

    /// Look up a suite-level setting by name, case-insensitively.
    pub fn setting(&self, name: &str) -> Option<&Statement> {
        self.settings
            .iter()
            .find(|s| s.head().eq_ignore_ascii_case(name))
    }
}

#[cfg(test)]
#[path = "document_tests.rs"]
mod tests;
