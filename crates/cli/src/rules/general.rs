// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules over raw source lines.
//!
//! These are General-scoped: the dispatcher never runs them during the tree
//! walk, callers apply them to the document root explicitly.

use std::sync::Arc;

use super::RuleSettings;
use crate::registry::{Origin, Registry};
use crate::rule::{Finding, Node, Rule, RuleError};

pub(super) fn register(registry: &mut Registry, settings: &RuleSettings) {
    registry.register(
        Origin::Builtin,
        Arc::new(LineTooLong {
            max_chars: settings.line_too_long,
        }),
    );
    registry.register(Origin::Builtin, Arc::new(TrailingWhitespace));
    registry.register(Origin::Builtin, Arc::new(TrailingBlankLines));
}

pub struct LineTooLong {
    pub max_chars: usize,
}

impl Rule for LineTooLong {
    rule_identity!(LineTooLong, General, Warning, "Lines should not be too long");

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        Ok(doc
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.chars().count() > self.max_chars)
            .map(|(idx, _)| {
                Finding::new(
                    idx + 1,
                    self.max_chars,
                    format!("Line is too long (exceeds {} characters)", self.max_chars),
                )
            })
            .collect())
    }
}

pub struct TrailingWhitespace;

impl Rule for TrailingWhitespace {
    rule_identity!(
        TrailingWhitespace,
        General,
        Warning,
        "Lines should not end with whitespace"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        Ok(doc
            .lines
            .iter()
            .enumerate()
            .filter(|(_, line)| line.ends_with([' ', '\t']))
            .map(|(idx, line)| {
                Finding::new(
                    idx + 1,
                    line.trim_end().chars().count(),
                    "Line has trailing whitespace",
                )
            })
            .collect())
    }
}

pub struct TrailingBlankLines;

impl Rule for TrailingBlankLines {
    rule_identity!(
        TrailingBlankLines,
        General,
        Warning,
        "Files should not end with blank lines"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let doc = node.document(self.name())?;
        let blank = doc
            .lines
            .iter()
            .rev()
            .take_while(|line| line.trim().is_empty())
            .count();
        if blank == 0 || blank == doc.lines.len() {
            return Ok(Vec::new());
        }
        Ok(vec![Finding::new(
            doc.lines.len() - blank + 1,
            0,
            format!("Too many trailing blank lines ({blank})"),
        )])
    }
}

#[cfg(test)]
#[path = "general_tests.rs"]
mod tests;
