// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Rules that see each test case once.

use std::sync::Arc;

use super::RuleSettings;
use crate::document::Body;
use crate::registry::{Origin, Registry};
use crate::rule::{Finding, Node, Rule, RuleError};

pub(super) fn register(registry: &mut Registry, settings: &RuleSettings) {
    registry.register(Origin::Builtin, Arc::new(PeriodInTestName));
    registry.register(Origin::Builtin, Arc::new(TagWithSpaces));
    registry.register(Origin::Builtin, Arc::new(RequireTestDocumentation));
    registry.register(
        Origin::Builtin,
        Arc::new(TooFewTestSteps {
            min_steps: settings.too_few_steps,
        }),
    );
    registry.register(
        Origin::Builtin,
        Arc::new(TooManyTestSteps {
            max_steps: settings.too_many_steps,
        }),
    );
}

pub struct PeriodInTestName;

impl Rule for PeriodInTestName {
    rule_identity!(
        PeriodInTestName,
        TestCase,
        Warning,
        "Test case names should not contain '.'"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let tc = node.testcase(self.name())?;
        Ok(match tc.name.find('.') {
            Some(pos) => vec![Finding::new(
                tc.linenumber,
                tc.name[..pos].chars().count(),
                format!("'.' in test case name '{}'", tc.name),
            )],
            None => Vec::new(),
        })
    }
}

pub struct TagWithSpaces;

impl Rule for TagWithSpaces {
    rule_identity!(TagWithSpaces, TestCase, Error, "Tags must not contain spaces");

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let tc = node.testcase(self.name())?;
        let Some(tags) = tc.setting("Tags") else {
            return Ok(Vec::new());
        };
        Ok(tags
            .args()
            .iter()
            .filter(|tag| tag.contains(' '))
            .map(|tag| {
                Finding::new(
                    tags.linenumber,
                    tags.column,
                    format!("space not allowed in tag name: '{tag}'"),
                )
            })
            .collect())
    }
}

pub struct RequireTestDocumentation;

impl Rule for RequireTestDocumentation {
    rule_identity!(
        RequireTestDocumentation,
        TestCase,
        Error,
        "Test cases must have a [Documentation] setting"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let tc = node.testcase(self.name())?;
        let documented = tc
            .setting("Documentation")
            .is_some_and(|s| !s.args().is_empty());
        if documented {
            Ok(Vec::new())
        } else {
            Ok(vec![Finding::new(tc.linenumber, 0, "No testcase documentation")])
        }
    }
}

pub struct TooFewTestSteps {
    pub min_steps: usize,
}

impl Rule for TooFewTestSteps {
    rule_identity!(
        TooFewTestSteps,
        TestCase,
        Error,
        "Test cases should have more than one step"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let tc = node.testcase(self.name())?;
        let count = tc.steps().count();
        if count < self.min_steps {
            Ok(vec![Finding::new(
                tc.linenumber,
                0,
                format!("Too few steps ({count}) in test case"),
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

pub struct TooManyTestSteps {
    pub max_steps: usize,
}

impl Rule for TooManyTestSteps {
    rule_identity!(
        TooManyTestSteps,
        TestCase,
        Error,
        "Test cases should stay short"
    );

    fn apply(&self, node: Node<'_>) -> Result<Vec<Finding>, RuleError> {
        let tc = node.testcase(self.name())?;
        let count = tc.steps().count();
        if count > self.max_steps {
            Ok(vec![Finding::new(
                tc.linenumber,
                0,
                format!("Too many steps ({count}) in test case"),
            )])
        } else {
            Ok(Vec::new())
        }
    }
}

#[cfg(test)]
#[path = "testcase_tests.rs"]
mod tests;
