//! Behavioral specs for linting files with the built-in rules.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// A suite that satisfies every rule prints only its banner
#[test]
fn clean_suite_passes() {
    lint()
        .on("clean")
        .args(&["login.robot"])
        .passes()
        .stdout_eq("+ login.robot\n")
        .stderr_eq("");
}

/// Diagnostics come out in dispatch order: document rules, then each test
/// case, then keywords
#[test]
fn violations_in_dispatch_order() {
    lint().on("violations").args(&["bad_suite.robot"]).fails().stdout_eq(
        "+ bad_suite.robot
E: 8, 0: Duplicate test case name 'Login Test' (first defined on line 5) (DuplicateTestNames)
E: 0, 0: No suite documentation (RequireSuiteDocumentation)
E: 6, 4: space not allowed in tag name: 'needs review' (TagWithSpaces)
E: 5, 0: No testcase documentation (RequireTestDocumentation)
E: 5, 0: Too few steps (1) in test case (TooFewTestSteps)
E: 14, 0: No keyword documentation (RequireKeywordDocumentation)
E: 14, 0: Too few steps (1) in keyword (TooFewKeywordSteps)
",
    );
}

/// Pipe-separated files are parsed like space-separated ones
#[test]
fn pipe_separated_suite() {
    lint()
        .on("pipes")
        .args(&["pipes.robot"])
        .fails()
        .stdout_eq(
            "+ pipes.robot\nE: 7, 4: space not allowed in tag name: 'pipe style' (TagWithSpaces)\n",
        );
}

/// Files are reported in the order given, each with its own banner
#[test]
fn multiple_files_in_input_order() {
    let temp = Project::empty();
    temp.file("b.robot", CLEAN_SUITE);
    temp.file("a.robot", CLEAN_SUITE);
    temp.file("c.robot", CLEAN_SUITE);

    lint()
        .pwd(temp.path())
        .args(&["b.robot", "a.robot", "c.robot"])
        .passes()
        .stdout_eq("+ b.robot\n+ a.robot\n+ c.robot\n");
}

/// General rules run once per file after the tree walk
#[test]
fn general_rules_apply_to_raw_lines() {
    let temp = Project::empty();
    temp.file(
        "suite.robot",
        &format!("{CLEAN_SUITE}    Log    {}  \n\n", "x".repeat(100)),
    );

    lint()
        .pwd(temp.path())
        .args(&["suite.robot"])
        .passes()
        .stdout_eq(
            "+ suite.robot
W: 9, 100: Line is too long (exceeds 100 characters) (LineTooLong)
W: 9, 111: Line has trailing whitespace (TrailingWhitespace)
W: 10, 0: Too many trailing blank lines (1) (TrailingBlankLines)
",
        );
}

/// Warnings alone do not fail the run
#[test]
fn warnings_exit_zero() {
    let temp = Project::empty();
    temp.file("suite.v2.robot", CLEAN_SUITE);

    lint()
        .pwd(temp.path())
        .args(&["suite.v2.robot"])
        .passes()
        .stdout_has("W: 0, 0: '.' in suite name 'suite.v2' (PeriodInSuiteName)");
}

/// A file that cannot be read is reported and the others still run
#[test]
fn unreadable_file_is_reported_and_skipped() {
    let temp = Project::empty();
    temp.file("good.robot", CLEAN_SUITE);

    lint()
        .pwd(temp.path())
        .args(&["missing.robot", "good.robot"])
        .fails()
        .stdout_eq("+ missing.robot\n+ good.robot\n")
        .stderr_has("rflint: missing.robot:");
}

/// Invalid UTF-8 is a parse error with a line number
#[test]
fn invalid_utf8_is_a_parse_error() {
    let temp = Project::empty();
    std::fs::write(temp.path().join("latin1.robot"), b"*** Test Cases ***\nCaf\xe9\n").unwrap();

    lint()
        .pwd(temp.path())
        .args(&["latin1.robot"])
        .fails()
        .stderr_has("rflint: latin1.robot: invalid UTF-8 on line 2");
}

/// Thresholds come from `[rules.settings]`
#[test]
fn settings_change_thresholds() {
    let temp = Project::empty();
    temp.config("[rules.settings]\ntoo_few_steps = 3\n");
    temp.file("suite.robot", CLEAN_SUITE);

    lint()
        .pwd(temp.path())
        .args(&["suite.robot"])
        .fails()
        .stdout_has("E: 5, 0: Too few steps (2) in test case (TooFewTestSteps)");
}
