// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules that see each keyword once, standalone or nested in a test case.

use std::sync::Arc;

use super::RuleSettings;
use crate::document::Body;
use crate::registry::{Origin, Registry};
use crate::rule::{Finding, Node, Rule, RuleError};

pub(super) fn register(registry: &mut Registry, settings: &RuleSettings) {
    registry.register(Origin::Builtin, Arc::new(RequireKeywordDocumentation));
    registry.register(
        Origin::Builtin,
        Arc::new(TooFewKeywordSteps {
            min_steps: settings.too_few_steps,
        }),
    );
    registry.register(
        Origin::Builtin,
        Arc::new(TooManyKeywordSteps {
            max_steps: settings.too_many_steps,
        }),
    );
}

pub struct RequireKeywordDocumentation;

impl Rule for RequireKeywordDocumentation {
    rule_identity!(
        RequireKeywordDocumentation,
        Keyword,
        Error,
        "Keywords must have a [Documentation] setting"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let kw = node.keyword(self.name())?;
        let documented = kw
            .setting("Documentation")
            .is_some_and(|s| !s.args().is_empty());
        if documented {
            Ok(Vec::new())
        } else {
            Ok(vec![Finding::new(kw.linenumber, 0, "No keyword documentation")])
        }
    }
}

pub struct TooFewKeywordSteps {
    pub min_steps: usize,
}

impl Rule for TooFewKeywordSteps {
    rule_identity!(
        TooFewKeywordSteps,
        Keyword,
        Error,
        "Keywords should have more than one step"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let kw = node.keyword(self.name())?;
        let count = kw.steps().count();
        if count < self.min_steps {
            Ok(vec![Finding::new(
                kw.linenumber,
                0,
                format!("Too few steps ({count}) in keyword"),
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

pub struct TooManyKeywordSteps {
    pub max_steps: usize,
}

impl Rule for TooManyKeywordSteps {
    rule_identity!(TooManyKeywordSteps, Keyword, Error, "Keywords should stay short");

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let kw = node.keyword(self.name())?;
        let count = kw.steps().count();
        if count > self.max_steps {
            Ok(vec![Finding::new(
                kw.linenumber,
                0,
                format!("Too many steps ({count}) in keyword"),
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
#[path = "keyword_tests.rs"]
mod tests;
