// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic severity levels.
//!
//! `Warning < Error`. A rule that was ignored for a run has no severity at
//! all, which is spelled `Option<Severity>` wherever it can occur.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

/// Indicator used for rules that were excluded from a run.
pub const IGNORED_INDICATOR: char = 'I';

impl Severity {
    /// Single-letter indicator rendered by the `{severity}` placeholder.
    pub fn indicator(self) -> char {
        match self {
            Severity::Warning => 'W',
            Severity::Error => 'E',
        }
    }
}

/// Indicator for a possibly-ignored rule.
pub fn indicator(level: Option<Severity>) -> char {
    level.map_or(IGNORED_INDICATOR, Severity::indicator)
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.indicator())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "w" | "warn" | "warning" => Ok(Severity::Warning),
            "e" | "err" | "error" => Ok(Severity::Error),
            _ => Err(format!("unknown severity: {s}")),
        }
    }
}

#[cfg(test)]
#[path = "severity_tests.rs"]
mod tests;
