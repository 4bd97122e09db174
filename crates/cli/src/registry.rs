// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rule registry and discovery.
//!
//! Rules arrive from two places, both through [`Registry::register`]:
//! - built-ins, registered by `rules::register_builtins`
//! - extension rule files, loaded from user-supplied paths
//!
//! The registry never filters; selection happens in [`crate::selection`].
//! Loading is idempotent per source, and a name collision keeps the first
//! registration and records a [`DiscoveryIssue`].

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::extension;
use crate::rule::{Rule, Scope, fold_name};
use crate::rules::{self, RuleSettings};

/// Where a rule came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    Builtin,
    Extension(PathBuf),
}

impl fmt::Display for Origin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Origin::Builtin => f.write_str("builtin"),
            Origin::Extension(path) => write!(f, "{}", path.display()),
        }
    }
}

/// A discovered rule.
#[derive(Clone)]
pub struct RegisteredRule {
    pub rule: Arc<dyn Rule>,
    pub origin: Origin,
    /// Registration order, used as the final tie-break.
    pub order: usize,
}

impl RegisteredRule {
    pub fn name(&self) -> &str {
        self.rule.name()
    }

    pub fn scope(&self) -> Scope {
        self.rule.scope()
    }
}

impl fmt::Debug for RegisteredRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RegisteredRule")
            .field("name", &self.rule.name())
            .field("scope", &self.rule.scope())
            .field("origin", &self.origin)
            .field("order", &self.order)
            .finish()
    }
}

/// A rule source or rule that was rejected during discovery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiscoveryIssue {
    pub source: String,
    pub message: String,
}

impl fmt::Display for DiscoveryIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.source, self.message)
    }
}

/// Source key for the built-in rule set.
const BUILTIN_SOURCE: &str = "<builtin>";

/// All discovered rules, in registration order.
#[derive(Debug, Default)]
pub struct Registry {
    rules: Vec<RegisteredRule>,
    names: HashMap<String, usize>,
    sources: HashSet<String>,
    issues: Vec<DiscoveryIssue>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// A registry holding the built-in rules.
    pub fn with_builtins(settings: &RuleSettings) -> Self {
        let mut registry = Self::new();
        registry.load_builtins(settings);
        registry
    }

    /// Register the built-in rules, once.
    pub fn load_builtins(&mut self, settings: &RuleSettings) {
        if !self.sources.insert(BUILTIN_SOURCE.to_string()) {
            return;
        }
        rules::register_builtins(self, settings);
        tracing::debug!("registered {} built-in rules", self.rules.len());
    }

    /// Register one rule.
    ///
    /// Returns false, and records an issue, if a rule with the same
    /// case-folded name is already registered.
    pub fn register(&mut self, origin: Origin, rule: Arc<dyn Rule>) -> bool {
        let key = fold_name(rule.name());
        if let Some(&existing) = self.names.get(&key) {
            let message = format!(
                "rule `{}` conflicts with `{}` from {}",
                rule.name(),
                self.rules[existing].name(),
                self.rules[existing].origin
            );
            tracing::warn!("{}", message);
            self.issues.push(DiscoveryIssue {
                source: origin.to_string(),
                message,
            });
            return false;
        }

        let order = self.rules.len();
        tracing::trace!("registered {} ({}) from {}", rule.name(), rule.scope(), origin);
        self.names.insert(key, order);
        self.rules.push(RegisteredRule {
            rule,
            origin,
            order,
        });
        true
    }

    /// Load extension rules from a rule file or a directory of rule files.
    ///
    /// Files are loaded in name order. Sources already loaded are skipped.
    /// Files that fail to load are recorded as issues and skipped.
    pub fn load_extensions(&mut self, path: &Path) {
        let files = match extension::rule_files(path) {
            Ok(files) => files,
            Err(err) => {
                self.reject(path, err.to_string());
                return;
            }
        };

        for file in files {
            let key = std::fs::canonicalize(&file)
                .unwrap_or_else(|_| file.clone())
                .display()
                .to_string();
            if !self.sources.insert(key) {
                tracing::debug!("{} already loaded", file.display());
                continue;
            }

            match extension::load_file(&file) {
                Ok(rule) => {
                    self.register(Origin::Extension(file), Arc::new(rule));
                }
                Err(err) => self.reject(&file, err.to_string()),
            }
        }
    }

    fn reject(&mut self, path: &Path, message: String) {
        tracing::warn!("skipping {}: {}", path.display(), message);
        self.issues.push(DiscoveryIssue {
            source: path.display().to_string(),
            message,
        });
    }

    /// Every discovered rule, in registration order.
    pub fn rules(&self) -> &[RegisteredRule] {
        &self.rules
    }

    /// Rules of one scope, in registration order.
    pub fn by_scope(&self, scope: Scope) -> impl Iterator<Item = &RegisteredRule> {
        self.rules.iter().filter(move |r| r.scope() == scope)
    }

    /// Look up a rule by case-insensitive name.
    pub fn get(&self, name: &str) -> Option<&RegisteredRule> {
        self.names.get(&fold_name(name)).map(|&i| &self.rules[i])
    }

    /// Problems found during discovery.
    pub fn issues(&self) -> &[DiscoveryIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
#[path = "registry_tests.rs"]
mod tests;
