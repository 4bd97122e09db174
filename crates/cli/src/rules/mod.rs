// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Built-in rules.
//!
//! Each scope module registers its rules explicitly through `register`:
//! - document: duplicate names, unknown tables, suite-level limits
//! - testcase: naming, tags, documentation, step counts
//! - keyword: documentation, step counts
//! - general: raw-line checks (length, trailing whitespace, blank lines)

use serde::Deserialize;

use crate::registry::Registry;

/// Implements the identity half of [`crate::rule::Rule`] for a built-in rule.
///
/// The rule name is the type name.
macro_rules! rule_identity {
    ($ty:ident, $scope:ident, $severity:ident, $description:literal) => {
        fn name(&self) -> &str {
            stringify!($ty)
        }

        fn scope(&self) -> $crate::rule::Scope {
            $crate::rule::Scope::$scope
        }

        fn default_severity(&self) -> $crate::severity::Severity {
            $crate::severity::Severity::$severity
        }

        fn description(&self) -> &str {
            $description
        }
    };
}

pub mod document;
pub mod general;
pub mod keyword;
pub mod testcase;

/// Thresholds for the built-in rules (`[rules.settings]`).
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct RuleSettings {
    /// Maximum characters per line.
    pub line_too_long: usize,
    /// Maximum lines per file.
    pub file_too_long: usize,
    /// Maximum test cases per file.
    pub too_many_test_cases: usize,
    /// Maximum steps per test case or keyword.
    pub too_many_steps: usize,
    /// Minimum steps per test case or keyword.
    pub too_few_steps: usize,
}

impl Default for RuleSettings {
    fn default() -> Self {
        Self {
            line_too_long: 100,
            file_too_long: 300,
            too_many_test_cases: 10,
            too_many_steps: 10,
            too_few_steps: 2,
        }
    }
}

impl RuleSettings {
    /// Known keys, for unknown-key warnings.
    pub const KEYS: &'static [&'static str] = &[
        "line_too_long",
        "file_too_long",
        "too_many_test_cases",
        "too_many_steps",
        "too_few_steps",
    ];
}

/// Register every built-in rule, scope by scope.
pub fn register_builtins(registry: &mut Registry, settings: &RuleSettings) {
    document::register(registry, settings);
    testcase::register(registry, settings);
    keyword::register(registry, settings);
    general::register(registry, settings);
}

/// Robot Framework name normalization: case, spaces and underscores ignored.
pub fn normalize_name(name: &str) -> String {
    name.chars()
        .filter(|c| *c != ' ' && *c != '_')
        .flat_map(char::to_lowercase)
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
