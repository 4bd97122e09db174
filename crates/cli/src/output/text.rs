// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text output formatter.
//!
//! ```text
//! + <file>
//! <template line per diagnostic>
//! ```
//!
//! Diagnostic lines are colored by severity when color is enabled.

use std::io::Write;

use termcolor::{ColorChoice, StandardStream, WriteColor};

use super::FormatOptions;
use crate::color::scheme;
use crate::rule::Diagnostic;
use crate::runner::FileResult;

/// Text output formatter with color support.
pub struct TextFormatter<W: WriteColor> {
    out: W,
    options: FormatOptions,
    diagnostics_shown: usize,
}

impl TextFormatter<StandardStream> {
    /// Formatter writing to stdout.
    pub fn stdout(color_choice: ColorChoice, options: FormatOptions) -> Self {
        Self::new(StandardStream::stdout(color_choice), options)
    }
}

impl<W: WriteColor> TextFormatter<W> {
    pub fn new(out: W, options: FormatOptions) -> Self {
        Self {
            out,
            options,
            diagnostics_shown: 0,
        }
    }

    /// Write one file's banner and diagnostics (streaming).
    ///
    /// Files that failed to parse still get their banner; the parse error
    /// itself is reported on stderr by the caller.
    pub fn write_file(&mut self, result: &FileResult) -> std::io::Result<()> {
        if self.options.show_filenames {
            self.out.set_color(&scheme::banner())?;
            write!(self.out, "+ {}", result.path.display())?;
            self.out.reset()?;
            writeln!(self.out)?;
        }

        for diagnostic in &result.report.diagnostics {
            self.write_diagnostic(diagnostic)?;
        }
        Ok(())
    }

    fn write_diagnostic(&mut self, d: &Diagnostic) -> std::io::Result<()> {
        self.out.set_color(&scheme::severity(d.severity))?;
        write!(self.out, "{}", self.options.template.render(d))?;
        self.out.reset()?;
        writeln!(self.out)?;
        self.diagnostics_shown += 1;
        Ok(())
    }

    /// Number of diagnostic lines written so far.
    pub fn diagnostics_shown(&self) -> usize {
        self.diagnostics_shown
    }

    pub fn flush(&mut self) -> std::io::Result<()> {
        self.out.flush()
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
