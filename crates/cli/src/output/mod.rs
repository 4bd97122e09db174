// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Output formatting for lint results.

pub mod json;
pub mod text;

use crate::format::Template;

/// Output formatting options.
#[derive(Debug, Clone)]
pub struct FormatOptions {
    /// Template for each diagnostic line.
    pub template: Template,
    /// Print a `+ <file>` banner before each file's diagnostics.
    pub show_filenames: bool,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            template: Template::default(),
            show_filenames: true,
        }
    }
}

impl FormatOptions {
    /// Options without the per-file banner.
    pub fn no_filenames() -> Self {
        Self {
            show_filenames: false,
            ..Self::default()
        }
    }

    pub fn with_template(mut self, template: Template) -> Self {
        self.template = template;
        self
    }
}
