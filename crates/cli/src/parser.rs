// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Robot Framework plain-text parser.
//!
//! Handles both space-separated (two or more spaces, or a tab) and
//! pipe-separated rows. Only the structure the rules need is kept: table
//! headers, suite settings and variables, test cases, keywords, and their
//! statements with `...` continuations folded in.

use std::path::{Path, PathBuf};

use crate::document::{Document, Keyword, Statement, Table, TableKind, TestCase};

/// Failure to turn a file into a [`Document`].
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("{}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{}: invalid UTF-8 on line {line}", .path.display())]
    Encoding { path: PathBuf, line: usize },
}

/// Read and parse a file.
pub fn parse_file(path: &Path) -> Result<Document, ParseError> {
    let bytes = std::fs::read(path).map_err(|source| ParseError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let content = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        ParseError::Encoding {
            path: path.to_path_buf(),
            line: valid.iter().filter(|&&b| b == b'\n').count() + 1,
        }
    })?;

    Ok(parse_str(path, &content))
}

/// Parse already-decoded content.
pub fn parse_str(path: impl Into<PathBuf>, content: &str) -> Document {
    let mut doc = Document::new(path);
    let content = content.strip_prefix('\u{feff}').unwrap_or(content);
    doc.lines = content.lines().map(String::from).collect();

    let mut builder = Builder::default();
    for (idx, line) in content.lines().enumerate() {
        builder.line(&mut doc, idx + 1, line);
    }
    builder.flush(&mut doc);

    tracing::debug!(
        "parsed {}: {} tables, {} test cases, {} keywords",
        doc.path.display(),
        doc.tables.len(),
        doc.testcases.len(),
        doc.keywords.len()
    );
    doc
}

/// Item currently being collected in a test case or keyword table.
enum Item {
    TestCase(TestCase),
    Keyword(Keyword),
}

impl Item {
    fn statements_mut(&mut self) -> &mut Vec<Statement> {
        match self {
            Item::TestCase(tc) => &mut tc.statements,
            Item::Keyword(kw) => &mut kw.statements,
        }
    }
}

#[derive(Default)]
struct Builder {
    section: Option<TableKind>,
    current: Option<Item>,
}

impl Builder {
    fn line(&mut self, doc: &mut Document, linenumber: usize, line: &str) {
        let row = split_row(line);
        if row.cells.is_empty() {
            return;
        }

        if let Some(name) = row.header_name() {
            self.flush(doc);
            let kind = TableKind::from_header(&name);
            doc.tables.push(Table {
                name,
                kind,
                linenumber,
            });
            self.section = Some(kind);
            return;
        }

        match self.section {
            Some(TableKind::Settings) => push_cells(&mut doc.settings, linenumber, row.cells),
            Some(TableKind::Variables) => push_cells(&mut doc.variables, linenumber, row.cells),
            Some(TableKind::TestCases) | Some(TableKind::Keywords) => {
                self.item_row(doc, linenumber, row)
            }
            _ => {}
        }
    }

    fn item_row(&mut self, doc: &mut Document, linenumber: usize, row: Row) {
        let mut cells = row.cells;

        if row.indented {
            match self.current.as_mut() {
                Some(item) => push_cells(item.statements_mut(), linenumber, cells),
                None => tracing::debug!(
                    "line {}: step outside of any test case or keyword",
                    linenumber
                ),
            }
            return;
        }

        self.flush(doc);
        let name = cells.remove(0).value;
        let mut item = match self.section {
            Some(TableKind::Keywords) => Item::Keyword(Keyword::new(name, linenumber)),
            _ => Item::TestCase(TestCase::new(name, linenumber)),
        };
        // Data after the name on the same row is the first statement.
        if !cells.is_empty() {
            push_cells(item.statements_mut(), linenumber, cells);
        }
        self.current = Some(item);
    }

    fn flush(&mut self, doc: &mut Document) {
        match self.current.take() {
            Some(Item::TestCase(tc)) => doc.testcases.push(tc),
            Some(Item::Keyword(kw)) => doc.keywords.push(kw),
            None => {}
        }
    }
}

/// Append a row, folding `...` continuations into the previous statement.
fn push_cells(statements: &mut Vec<Statement>, linenumber: usize, mut cells: Vec<Cell>) {
    if cells.first().is_some_and(|c| c.value == "...") {
        let marker = cells.remove(0);
        if let Some(last) = statements.last_mut() {
            last.cells.extend(cells.into_iter().map(|c| c.value));
            return;
        }
        cells.insert(0, marker);
    }
    let column = cells.first().map_or(0, |c| c.column);
    statements.push(Statement::new(
        linenumber,
        column,
        cells.into_iter().map(|c| c.value).collect(),
    ));
}

/// A data cell and the char offset it starts at.
#[derive(Debug, PartialEq, Eq)]
struct Cell {
    column: usize,
    value: String,
}

/// A physical row split into data cells.
#[derive(Debug)]
struct Row {
    /// Row started with whitespace (or an empty first pipe cell).
    indented: bool,
    /// Data cells, without the indentation cell and any trailing comment.
    cells: Vec<Cell>,
}

impl Row {
    /// Name of a table header row (`*** Test Cases ***`), if this is one.
    fn header_name(&self) -> Option<String> {
        if self.indented {
            return None;
        }
        let first = self.cells.first()?;
        if !first.value.starts_with('*') {
            return None;
        }
        Some(
            first
                .value
                .trim_matches(|c: char| c == '*' || c.is_whitespace())
                .to_string(),
        )
    }
}

fn split_row(line: &str) -> Row {
    let mut cells = if line.starts_with('|') {
        split_pipes(line)
    } else {
        split_spaces(line)
    };

    if let Some(pos) = cells.iter().position(|c| c.value.starts_with('#')) {
        cells.truncate(pos);
    }
    while cells.last().is_some_and(|c| c.value.is_empty()) {
        cells.pop();
    }

    let indented = cells.first().is_some_and(|c| c.value.is_empty());
    if indented {
        cells.remove(0);
    }
    Row { indented, cells }
}

/// Split on tabs or runs of two or more spaces.
///
/// Leading whitespace yields an empty first cell.
fn split_spaces(line: &str) -> Vec<Cell> {
    let chars: Vec<char> = line.trim_end().chars().collect();
    let mut cells = Vec::new();
    let mut current = String::new();
    let mut start = 0;
    let mut i = 0;

    let is_ws = |c: char| c == ' ' || c == '\t';

    if chars.first().is_some_and(|&c| is_ws(c)) {
        cells.push(Cell {
            column: 0,
            value: String::new(),
        });
        while i < chars.len() && is_ws(chars[i]) {
            i += 1;
        }
        start = i;
    }

    while i < chars.len() {
        let c = chars[i];
        if c == '\t' || (c == ' ' && chars.get(i + 1) == Some(&' ')) {
            cells.push(Cell {
                column: start,
                value: std::mem::take(&mut current),
            });
            while i < chars.len() && is_ws(chars[i]) {
                i += 1;
            }
            start = i;
            continue;
        }
        current.push(c);
        i += 1;
    }

    if !current.is_empty() {
        cells.push(Cell {
            column: start,
            value: current,
        });
    }
    cells
}

/// Split a pipe-separated row (`| cell | cell |`).
fn split_pipes(line: &str) -> Vec<Cell> {
    let body = line.trim_end();
    let body = body.strip_prefix('|').unwrap_or(body);
    let body = if body.ends_with(" |") || body.is_empty() {
        body.strip_suffix('|').unwrap_or(body)
    } else {
        body
    };

    let mut cells = Vec::new();
    let mut column = 1;
    for part in body.split(" | ") {
        let lead = part.len() - part.trim_start().len();
        cells.push(Cell {
            column: column + part[..lead].chars().count(),
            value: part.trim().to_string(),
        });
        column += part.chars().count() + 3;
    }
    cells
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
