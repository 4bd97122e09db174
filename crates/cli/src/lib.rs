// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Style checker for Robot Framework plain text files.
//!
//! A document is parsed into a tree ([`document`]), rules are discovered
//! into a [`registry::Registry`], user directives select the active set
//! ([`selection`]), and the [`dispatch::Dispatcher`] applies it to produce
//! diagnostics that [`format::Template`] renders.

pub mod cli;
pub mod color;
pub mod config;
pub mod discovery;
pub mod dispatch;
pub mod document;
pub mod env;
pub mod error;
pub mod extension;
pub mod format;
pub mod output;
pub mod parser;
pub mod registry;
pub mod rule;
pub mod rules;
pub mod runner;
pub mod selection;
pub mod severity;

pub use cli::{Cli, OutputFormat};
pub use dispatch::{Dispatcher, Report, RuleFailure};
pub use document::Document;
pub use error::{Error, ExitCode, Result};
pub use registry::Registry;
pub use rule::{Diagnostic, Finding, Node, Rule, RuleError, Scope};
pub use selection::{ActiveRules, Directives};
pub use severity::Severity;

#[cfg(test)]
pub mod test_utils;
