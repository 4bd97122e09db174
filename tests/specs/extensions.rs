//! Behavioral specs for extension rule files.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// `-R DIR` loads every rule file in the directory
#[test]
fn rulefile_directory() {
    lint()
        .on("extensions")
        .args(&["-R", "rules", "sleepy.robot"])
        .passes()
        .stdout_eq(
            "+ sleepy.robot\nW: 7, 4: Avoid 'Sleep', wait for a condition instead (NoSleep)\n",
        );
}

/// Extension rules are listed and obey directives like built-ins
#[test]
fn extension_rules_are_listed() {
    lint()
        .on("extensions")
        .args(&["-R", "rules", "--list", "-i", "NoTodoTests"])
        .passes()
        .stdout_has("W: NoSleep\n")
        .stdout_has("I: NoTodoTests\n");
}

/// `--error` promotes an extension rule
#[test]
fn extension_severity_override() {
    lint()
        .on("extensions")
        .args(&["-R", "rules/no_sleep.toml", "-e", "nosleep", "sleepy.robot"])
        .fails()
        .stdout_has("E: 7, 4: Avoid 'Sleep'");
}

/// Loading the same source twice registers its rules once
#[test]
fn duplicate_sources_load_once() {
    lint()
        .on("extensions")
        .args(&["-R", "rules", "-R", "rules/no_sleep.toml", "sleepy.robot"])
        .passes()
        .stderr_eq("");
}

/// Config `[rules] extensions` are relative to the config file
#[test]
fn config_extensions() {
    let temp = Project::empty();
    temp.config("[rules]\nextensions = [\"lint/rules\"]\n");
    temp.file(
        "lint/rules/no_log.toml",
        "name = \"NoLog\"\nscope = \"keyword\"\nseverity = \"error\"\npattern = \"^Log$\"\ntarget = \"step\"\nmessage = \"no logging in keywords\"\n",
    );
    temp.file(
        "tests/suite.robot",
        "*** Settings ***\nDocumentation    x\n*** Keywords ***\nHelper\n    [Documentation]    y\n    Log    a\n    No Operation\n",
    );

    lint()
        .pwd(temp.path().join("tests"))
        .args(&["suite.robot"])
        .fails()
        .stdout_eq("+ suite.robot\nE: 6, 4: no logging in keywords (NoLog)\n");
}

/// A broken rule file is reported and skipped
#[test]
fn invalid_rule_file_is_skipped() {
    let temp = Project::empty();
    temp.file("rules/broken.toml", "name = \"Broken\"\nscope = \"keyword\"\npattern = \"(\"\nmessage = \"m\"\n");
    temp.file("suite.robot", CLEAN_SUITE);

    lint()
        .pwd(temp.path())
        .args(&["-R", "rules", "suite.robot"])
        .passes()
        .stdout_eq("+ suite.robot\n")
        .stderr_has("rflint: warning: ")
        .stderr_has("broken.toml: invalid pattern");
}

/// An extension rule cannot replace a built-in
#[test]
fn name_collision_is_reported() {
    let temp = Project::empty();
    temp.file(
        "rules/shadow.toml",
        "name = \"LineTooLong\"\nscope = \"general\"\npattern = \".\"\nmessage = \"m\"\n",
    );
    temp.file("suite.robot", CLEAN_SUITE);

    lint()
        .pwd(temp.path())
        .args(&["-R", "rules", "suite.robot"])
        .passes()
        .stdout_eq("+ suite.robot\n")
        .stderr_has("conflicts with `LineTooLong` from builtin");
}
