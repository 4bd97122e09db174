//! Behavioral specs for --ignore / --warn / --error.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;
use yare::parameterized;

/// `--ignore all --warn X` runs exactly X, as a warning
#[test]
fn ignore_all_except_one() {
    lint()
        .on("violations")
        .args(&["--ignore", "all", "--warn", "TagWithSpaces", "bad_suite.robot"])
        .passes()
        .stdout_eq(
            "+ bad_suite.robot\nW: 6, 4: space not allowed in tag name: 'needs review' (TagWithSpaces)\n",
        );
}

/// Directive names are case-insensitive
#[parameterized(
    lower = { "tagwithspaces" },
    upper = { "TAGWITHSPACES" },
    mixed = { "TagWithSpaces" },
)]
fn directive_names_fold_case(name: &str) {
    lint()
        .on("violations")
        .args(&["-i", "ALL", "-e", name, "bad_suite.robot"])
        .fails()
        .stdout_has("E: 6, 4: space not allowed in tag name: 'needs review' (TagWithSpaces)");
}

/// Ignoring a rule also ignores it when it is warned
#[test]
fn ignore_beats_warn() {
    lint()
        .on("violations")
        .args(&["-i", "all", "-w", "TagWithSpaces", "-i", "TagWithSpaces", "bad_suite.robot"])
        .passes()
        .stdout_eq("+ bad_suite.robot\n");
}

/// A name given to both --warn and --error resolves to warning
#[test]
fn warn_beats_error() {
    lint()
        .on("violations")
        .args(&["-i", "all", "-e", "TagWithSpaces", "-w", "TagWithSpaces", "bad_suite.robot"])
        .passes()
        .stdout_has("W: 6, 4:");
}

/// `all` is only a wildcard for --ignore
#[test]
fn warn_all_is_not_a_wildcard() {
    lint()
        .on("violations")
        .args(&["--warn", "all", "bad_suite.robot"])
        .fails()
        .stdout_has("E: 0, 0: No suite documentation")
        .stderr_lacks("warning");
}

/// Unknown names are inert; when no override matches anything a warning is shown
#[test]
fn unknown_override_warns() {
    lint()
        .on("clean")
        .args(&["-w", "NoSuchRule", "login.robot"])
        .passes()
        .stdout_eq("+ login.robot\n")
        .stderr_has("rflint: warning: no rule matches nosuchrule");
}

/// No warning when at least one override matches
#[test]
fn partially_matched_overrides_do_not_warn() {
    lint()
        .on("clean")
        .args(&["-w", "NoSuchRule", "-e", "LineTooLong", "login.robot"])
        .passes()
        .stderr_lacks("warning");
}

/// Unknown ignore names are silently inert
#[test]
fn unknown_ignore_is_silent() {
    lint()
        .on("clean")
        .args(&["-i", "NoSuchRule", "login.robot"])
        .passes()
        .stderr_eq("");
}
