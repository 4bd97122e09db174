// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Resolve user directives into the active rule set.
//!
//! Precedence, per rule:
//! 1. `--ignore all` excludes every rule not named by `--warn` or `--error`
//! 2. `--ignore NAME` excludes NAME
//! 3. otherwise the rule runs: `--warn` wins over `--error`, which wins
//!    over the rule's default severity
//!
//! Names that match no rule are inert.

use std::sync::Arc;

use crate::registry::{RegisteredRule, Registry};
use crate::rule::{Rule, Scope, fold_name};
use crate::severity::{self, Severity};

/// Directive token meaning "every rule".
pub const ALL: &str = "all";

/// Case-folded ignore / warn / error name lists.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Directives {
    ignore: Vec<String>,
    warn: Vec<String>,
    error: Vec<String>,
}

impl Directives {
    pub fn new<I, W, E, S>(ignore: I, warn: W, error: E) -> Self
    where
        I: IntoIterator<Item = S>,
        W: IntoIterator<Item = S>,
        E: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            ignore: fold_all(ignore),
            warn: fold_all(warn),
            error: fold_all(error),
        }
    }

    /// Append `other`'s names after this one's (config first, then CLI).
    pub fn merge(mut self, other: Directives) -> Self {
        self.ignore.extend(other.ignore);
        self.warn.extend(other.warn);
        self.error.extend(other.error);
        self
    }

    /// Whether `all` is in the ignore list.
    pub fn ignores_all(&self) -> bool {
        self.ignore.iter().any(|n| n == ALL)
    }

    fn ignores(&self, key: &str) -> bool {
        self.ignore.iter().any(|n| n == key)
    }

    fn warns(&self, key: &str) -> bool {
        self.warn.iter().any(|n| n == key)
    }

    fn errors(&self, key: &str) -> bool {
        self.error.iter().any(|n| n == key)
    }

    /// Effective severity of a rule, or `None` if it is excluded.
    pub fn resolve(&self, name: &str, default: Severity) -> Option<Severity> {
        let key = fold_name(name);
        let warn = self.warns(&key);
        let error = self.errors(&key);

        if self.ignores_all() && !warn && !error {
            return None;
        }
        if self.ignores(&key) {
            return None;
        }
        Some(if warn {
            Severity::Warning
        } else if error {
            Severity::Error
        } else {
            default
        })
    }

    /// Names given to `--warn` or `--error`, in order, without repeats.
    pub fn overrides(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for name in self.warn.iter().chain(&self.error) {
            if !names.contains(&name.as_str()) {
                names.push(name);
            }
        }
        names
    }

    /// Override names that match no rule in `registry`.
    pub fn unmatched_overrides(&self, registry: &Registry) -> Vec<String> {
        self.overrides()
            .into_iter()
            .filter(|n| *n != ALL && registry.get(n).is_none())
            .map(String::from)
            .collect()
    }

    /// Names in both `--warn` and `--error`; they resolve to warning.
    pub fn ambiguous(&self) -> Vec<&str> {
        self.warn
            .iter()
            .filter(|n| self.errors(n))
            .map(String::as_str)
            .collect()
    }
}

fn fold_all<S: AsRef<str>>(names: impl IntoIterator<Item = S>) -> Vec<String> {
    names
        .into_iter()
        .map(|n| fold_name(n.as_ref().trim()))
        .collect()
}

/// A rule selected for this run, with its effective severity.
#[derive(Clone)]
pub struct ActiveRule {
    pub rule: Arc<dyn Rule>,
    pub severity: Severity,
}

impl ActiveRule {
    pub fn name(&self) -> &str {
        self.rule.name()
    }
}

impl std::fmt::Debug for ActiveRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActiveRule")
            .field("name", &self.rule.name())
            .field("severity", &self.severity)
            .finish()
    }
}

/// Active rules of one scope, in registration order.
#[derive(Debug, Clone)]
pub struct ActiveRuleSet {
    scope: Scope,
    rules: Vec<ActiveRule>,
}

impl ActiveRuleSet {
    /// Select from `rules` those of `scope` that `directives` keep.
    pub fn resolve<'a>(
        scope: Scope,
        rules: impl IntoIterator<Item = &'a RegisteredRule>,
        directives: &Directives,
    ) -> Self {
        let rules = rules
            .into_iter()
            .filter(|r| r.scope() == scope)
            .filter_map(|r| {
                let severity = directives.resolve(r.name(), r.rule.default_severity());
                if severity.is_none() {
                    tracing::debug!("{} ignored", r.name());
                }
                severity.map(|severity| ActiveRule {
                    rule: Arc::clone(&r.rule),
                    severity,
                })
            })
            .collect();
        Self { scope, rules }
    }

    pub fn scope(&self) -> Scope {
        self.scope
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ActiveRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Effective severity of an active rule, by case-insensitive name.
    pub fn severity_of(&self, name: &str) -> Option<Severity> {
        let key = fold_name(name);
        self.rules
            .iter()
            .find(|r| fold_name(r.name()) == key)
            .map(|r| r.severity)
    }
}

impl<'a> IntoIterator for &'a ActiveRuleSet {
    type Item = &'a ActiveRule;
    type IntoIter = std::slice::Iter<'a, ActiveRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.rules.iter()
    }
}

/// The four per-scope active sets for a run. Built once, never mutated.
#[derive(Debug, Clone)]
pub struct ActiveRules {
    pub document: ActiveRuleSet,
    pub testcase: ActiveRuleSet,
    pub keyword: ActiveRuleSet,
    pub general: ActiveRuleSet,
}

impl ActiveRules {
    pub fn resolve(registry: &Registry, directives: &Directives) -> Self {
        let set = |scope| ActiveRuleSet::resolve(scope, registry.by_scope(scope), directives);
        let active = Self {
            document: set(Scope::Document),
            testcase: set(Scope::TestCase),
            keyword: set(Scope::Keyword),
            general: set(Scope::General),
        };
        tracing::debug!(
            "active rules: {} document, {} testcase, {} keyword, {} general",
            active.document.len(),
            active.testcase.len(),
            active.keyword.len(),
            active.general.len()
        );
        active
    }

    pub fn scope(&self, scope: Scope) -> &ActiveRuleSet {
        match scope {
            Scope::Document => &self.document,
            Scope::TestCase => &self.testcase,
            Scope::Keyword => &self.keyword,
            Scope::General => &self.general,
        }
    }

    /// Effective severity of a rule across all scopes.
    pub fn severity_of(&self, name: &str) -> Option<Severity> {
        Scope::ALL
            .iter()
            .find_map(|&scope| self.scope(scope).severity_of(name))
    }

    pub fn len(&self) -> usize {
        Scope::ALL.iter().map(|&s| self.scope(s).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// `--list` lines: every discovered rule as `<indicator>: <name>`.
///
/// The indicator is the effective severity (`I` when ignored). Lines sort by
/// case-folded name, then name, then registration order.
pub fn list_rules(registry: &Registry, directives: &Directives) -> Vec<String> {
    let mut rules: Vec<&RegisteredRule> = registry.rules().iter().collect();
    rules.sort_by(|a, b| {
        fold_name(a.name())
            .cmp(&fold_name(b.name()))
            .then_with(|| a.name().cmp(b.name()))
            .then_with(|| a.order.cmp(&b.order))
    });
    rules
        .into_iter()
        .map(|r| {
            let level = directives.resolve(r.name(), r.rule.default_severity());
            format!("{}: {}", severity::indicator(level), r.name())
        })
        .collect()
}

#[cfg(test)]
#[path = "selection_tests.rs"]
mod tests;
