// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Diagnostic line templates.
//!
//! Placeholders: `{severity}`, `{linenumber}`, `{char}`, `{message}`,
//! `{rulename}`, `{filename}`. `{{` and `}}` are literal braces. Anything
//! else in braces is copied through unchanged.

use std::collections::BTreeMap;
use std::fmt::Write as _;

use regex::Regex;

use crate::rule::Diagnostic;

/// Template used when none is configured.
pub const DEFAULT_TEMPLATE: &str = "{severity}: {linenumber}, {char}: {message} ({rulename})";

/// A template placeholder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Field {
    Severity,
    LineNumber,
    Char,
    Message,
    RuleName,
    FileName,
}

impl Field {
    fn from_name(name: &str) -> Option<Self> {
        match name {
            "severity" => Some(Field::Severity),
            "linenumber" => Some(Field::LineNumber),
            "char" => Some(Field::Char),
            "message" => Some(Field::Message),
            "rulename" => Some(Field::RuleName),
            "filename" => Some(Field::FileName),
            _ => None,
        }
    }

    fn value(self, d: &Diagnostic) -> String {
        match self {
            Field::Severity => d.severity.to_string(),
            Field::LineNumber => d.linenumber.to_string(),
            Field::Char => d.char.to_string(),
            Field::Message => d.message.clone(),
            Field::RuleName => d.rulename.clone(),
            Field::FileName => d.file.display().to_string(),
        }
    }

    /// Capture group matching the rendered value.
    fn pattern(self) -> &'static str {
        match self {
            Field::Severity => "([WE])",
            Field::LineNumber | Field::Char => r"(\d+)",
            Field::RuleName => "([A-Za-z_][A-Za-z0-9_]*)",
            Field::Message => "(.*)",
            Field::FileName => "(.*?)",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Field(Field),
}

/// Failure to read a rendered line back through a template.
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template cannot be matched: {0}")]
    Pattern(#[from] regex::Error),

    #[error("line does not match template: {0}")]
    NoMatch(String),
}

/// A parsed diagnostic template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    source: String,
    segments: Vec<Segment>,
}

impl Default for Template {
    fn default() -> Self {
        Self::parse(DEFAULT_TEMPLATE)
    }
}

impl Template {
    /// Parse a template. Never fails: unknown placeholders stay literal.
    pub fn parse(source: &str) -> Self {
        let mut segments = Vec::new();
        let mut literal = String::new();
        let mut rest = source;

        while let Some(pos) = rest.find(['{', '}']) {
            literal.push_str(&rest[..pos]);
            let tail = &rest[pos..];

            if tail.starts_with("{{") || tail.starts_with("}}") {
                literal.push_str(&tail[..1]);
                rest = &tail[2..];
                continue;
            }

            if tail.starts_with('{')
                && let Some(end) = tail.find('}')
                && let Some(field) = Field::from_name(&tail[1..end])
            {
                if !literal.is_empty() {
                    segments.push(Segment::Literal(std::mem::take(&mut literal)));
                }
                segments.push(Segment::Field(field));
                rest = &tail[end + 1..];
                continue;
            }

            literal.push_str(&tail[..1]);
            rest = &tail[1..];
        }
        literal.push_str(rest);
        if !literal.is_empty() {
            segments.push(Segment::Literal(literal));
        }

        Self {
            source: source.to_string(),
            segments,
        }
    }

    /// Template text as given.
    pub fn source(&self) -> &str {
        &self.source
    }

    /// Render one diagnostic.
    pub fn render(&self, d: &Diagnostic) -> String {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => out.push_str(text),
                Segment::Field(field) => {
                    let _ = write!(out, "{}", field.value(d));
                }
            }
        }
        out
    }

    /// Read the field values back out of a rendered line.
    ///
    /// Each field matches only what it can render as; the message takes
    /// the longest run the rest of the line allows. A field that appears
    /// twice reports its first occurrence.
    pub fn extract(&self, line: &str) -> Result<BTreeMap<Field, String>, TemplateError> {
        let mut pattern = String::from("(?s)^");
        let mut fields = Vec::new();
        for segment in &self.segments {
            match segment {
                Segment::Literal(text) => pattern.push_str(&regex::escape(text)),
                Segment::Field(field) => {
                    pattern.push_str(field.pattern());
                    fields.push(*field);
                }
            }
        }
        pattern.push('$');

        let re = Regex::new(&pattern)?;
        let caps = re
            .captures(line)
            .ok_or_else(|| TemplateError::NoMatch(line.to_string()))?;

        let mut values = BTreeMap::new();
        for (i, field) in fields.into_iter().enumerate() {
            let value = caps.get(i + 1).map_or("", |m| m.as_str());
            values.entry(field).or_insert_with(|| value.to_string());
        }
        Ok(values)
    }
}

#[cfg(test)]
#[path = "format_tests.rs"]
mod tests;
