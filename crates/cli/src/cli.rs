// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! CLI argument parsing with clap derive.

use std::path::PathBuf;

use clap::Parser;

use crate::env::names;
use crate::selection::Directives;

const AFTER_HELP: &str = "\
You can use 'all' in place of RuleName to refer to all rules. For example:
'--ignore all --warn DuplicateTestNames' will ignore all rules except
DuplicateTestNames.";

/// A style checker for Robot Framework plain text files
#[derive(Parser, Debug)]
#[command(name = "rflint")]
#[command(version, about, long_about = None, after_help = AFTER_HELP)]
pub struct Cli {
    /// Treat the named rule as an error (repeatable)
    #[arg(short = 'e', long = "error", value_name = "RuleName")]
    pub error: Vec<String>,

    /// Do not run the named rule, or `all` (repeatable)
    #[arg(short = 'i', long = "ignore", value_name = "RuleName")]
    pub ignore: Vec<String>,

    /// Treat the named rule as a warning (repeatable)
    #[arg(short = 'w', long = "warn", value_name = "RuleName")]
    pub warn: Vec<String>,

    /// List all rules with their effective severity and exit
    #[arg(short = 'l', long)]
    pub list: bool,

    /// Do not print the `+ <file>` banner before each file
    #[arg(long)]
    pub no_filenames: bool,

    /// Diagnostic line template
    #[arg(short = 'f', long, value_name = "TEMPLATE")]
    pub format: Option<String>,

    /// Load extension rules from a rule file or directory (repeatable)
    #[arg(short = 'R', long = "rulefile", value_name = "PATH")]
    pub rulefiles: Vec<PathBuf>,

    /// Use specific config file
    #[arg(short = 'C', long = "config", env = names::RFLINT_CONFIG)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    pub output: OutputFormat,

    /// Force color output
    #[arg(long, conflicts_with = "no_color")]
    pub color: bool,

    /// Disable color output
    #[arg(long)]
    pub no_color: bool,

    /// Files to check
    #[arg(value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Cli {
    /// Directives given on the command line.
    pub fn directives(&self) -> Directives {
        Directives::new(&self.ignore, &self.warn, &self.error)
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod tests;
