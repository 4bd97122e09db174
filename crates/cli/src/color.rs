// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Color detection and terminal styling.
//!
//! Detection logic:
//! 1. `--no-color` / `--color` flags
//! 2. NO_COLOR env var → no color
//! 3. COLOR env var → use color
//! 4. default: color only when stdout is a TTY and CI is unset

use std::io::IsTerminal;

use termcolor::ColorChoice;

use crate::env::names;

/// Resolve color choice from flags, then environment variables.
///
/// Per [no-color.org](https://no-color.org/), `NO_COLOR` when set to any value
/// (including empty string) disables color.
pub fn resolve_color(force: bool, disable: bool) -> ColorChoice {
    if disable {
        return ColorChoice::Never;
    }
    if force {
        return ColorChoice::Always;
    }
    if std::env::var_os(names::NO_COLOR).is_some() {
        return ColorChoice::Never;
    }
    if std::env::var_os(names::COLOR).is_some() {
        return ColorChoice::Always;
    }
    if !std::io::stdout().is_terminal() || std::env::var_os(names::CI).is_some() {
        return ColorChoice::Never;
    }
    ColorChoice::Auto
}

/// Color scheme for lint output.
pub mod scheme {
    use termcolor::{Color, ColorSpec};

    use crate::severity::Severity;

    /// Bold `+ <file>` banner.
    pub fn banner() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_bold(true);
        spec
    }

    /// Red error lines.
    pub fn error() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Red)).set_bold(true);
        spec
    }

    /// Yellow warning lines.
    pub fn warning() -> ColorSpec {
        let mut spec = ColorSpec::new();
        spec.set_fg(Some(Color::Yellow));
        spec
    }

    /// Spec for a diagnostic of the given severity.
    pub fn severity(severity: Severity) -> ColorSpec {
        match severity {
            Severity::Warning => warning(),
            Severity::Error => error(),
        }
    }
}

#[cfg(test)]
#[path = "color_tests.rs"]
mod tests;
