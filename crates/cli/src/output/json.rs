// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! JSON output formatter.
//!
//! One array element per input file, in input order:
//! `{"file": ..., "diagnostics": [...], "failures": [...], "error": ...}`.
//! JSON is buffered and written at the end (not streamed).

use std::io::Write;
use std::path::Path;

use serde::Serialize;

use crate::dispatch::RuleFailure;
use crate::rule::Diagnostic;
use crate::runner::FileResult;

/// JSON view of one file's result.
#[derive(Debug, Serialize)]
pub struct FileOutput<'a> {
    pub file: &'a Path,
    pub diagnostics: &'a [Diagnostic],
    #[serde(skip_serializing_if = "<[_]>::is_empty")]
    pub failures: &'a [RuleFailure],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl<'a> From<&'a FileResult> for FileOutput<'a> {
    fn from(result: &'a FileResult) -> Self {
        Self {
            file: &result.path,
            diagnostics: &result.report.diagnostics,
            failures: &result.report.failures,
            error: result.error.as_ref().map(ToString::to_string),
        }
    }
}

/// JSON output formatter.
pub struct JsonFormatter<W: Write> {
    writer: W,
}

impl<W: Write> JsonFormatter<W> {
    /// Create a new JSON formatter.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// Write the complete JSON output.
    pub fn write(&mut self, results: &[FileResult]) -> std::io::Result<()> {
        let files: Vec<FileOutput<'_>> = results.iter().map(FileOutput::from).collect();
        let json = serde_json::to_string_pretty(&files).map_err(std::io::Error::other)?;
        writeln!(self.writer, "{}", json)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
