// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Parallel lint runner.
//!
//! Parses and dispatches each input file independently using rayon.
//! Results come back in input order; a file that fails to parse is
//! reported and does not stop the others.

use std::path::{Path, PathBuf};

use rayon::prelude::*;

use crate::dispatch::{Dispatcher, Report};
use crate::parser::{self, ParseError};
use crate::severity::Severity;
use crate::selection::ActiveRules;

/// Outcome of linting one file.
#[derive(Debug)]
pub struct FileResult {
    pub path: PathBuf,
    pub report: Report,
    /// Set when the file could not be parsed; `report` is then empty.
    pub error: Option<ParseError>,
}

impl FileResult {
    pub fn has_errors(&self) -> bool {
        self.error.is_some()
            || self
                .report
                .diagnostics
                .iter()
                .any(|d| d.severity == Severity::Error)
    }
}

/// Runs an active rule set over files.
pub struct Linter<'r> {
    rules: &'r ActiveRules,
}

impl<'r> Linter<'r> {
    pub fn new(rules: &'r ActiveRules) -> Self {
        Self { rules }
    }

    /// Lint one file: parse, walk the tree, then apply general rules.
    pub fn lint_file(&self, path: &Path) -> FileResult {
        let document = match parser::parse_file(path) {
            Ok(document) => document,
            Err(error) => {
                tracing::debug!("{}", error);
                return FileResult {
                    path: path.to_path_buf(),
                    report: Report::default(),
                    error: Some(error),
                };
            }
        };

        let dispatcher = Dispatcher::new(self.rules);
        let mut report = dispatcher.dispatch(&document);
        dispatcher.apply_general(&document, &mut report);
        tracing::debug!(
            "{}: {} diagnostics, {} rule failures",
            path.display(),
            report.diagnostics.len(),
            report.failures.len()
        );

        FileResult {
            path: path.to_path_buf(),
            report,
            error: None,
        }
    }

    /// Lint all files in parallel. Results are in input order.
    pub fn run(&self, files: &[PathBuf]) -> Vec<FileResult> {
        files.par_iter().map(|path| self.lint_file(path)).collect()
    }
}

#[cfg(test)]
#[path = "runner_tests.rs"]
mod tests;
