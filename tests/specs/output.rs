//! Behavioral specs for output formatting.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// `--no-filenames` drops the banner
#[test]
fn no_filenames() {
    lint()
        .on("pipes")
        .args(&["--no-filenames", "pipes.robot"])
        .fails()
        .stdout_eq("E: 7, 4: space not allowed in tag name: 'pipe style' (TagWithSpaces)\n");
}

/// `--format` replaces the diagnostic template
#[test]
fn custom_format() {
    lint()
        .on("pipes")
        .args(&["-f", "{filename}:{linenumber}:{char}: [{severity}] {rulename}", "pipes.robot"])
        .fails()
        .stdout_eq("+ pipes.robot\npipes.robot:7:4: [E] TagWithSpaces\n");
}

/// Literal braces and unknown placeholders pass through
#[test]
fn format_escapes() {
    lint()
        .on("pipes")
        .args(&["--no-filenames", "-f", "{{{rulename}}} {column}", "pipes.robot"])
        .fails()
        .stdout_eq("{TagWithSpaces} {column}\n");
}

/// JSON output has one entry per file with its diagnostics
#[test]
fn json_output() {
    let json = lint()
        .on("violations")
        .args(&["bad_suite.robot"])
        .json()
        .fails();

    assert_eq!(json.files().len(), 1);
    assert_eq!(json.files()[0]["file"], "bad_suite.robot");
    assert_eq!(
        json.rulenames(0),
        vec![
            "DuplicateTestNames",
            "RequireSuiteDocumentation",
            "TagWithSpaces",
            "RequireTestDocumentation",
            "TooFewTestSteps",
            "RequireKeywordDocumentation",
            "TooFewKeywordSteps",
        ]
    );
    let first = &json.files()[0]["diagnostics"][0];
    assert_eq!(first["severity"], "error");
    assert_eq!(first["linenumber"], 8);
    assert_eq!(first["char"], 0);
}

/// JSON reports parse errors inline
#[test]
fn json_reports_parse_errors() {
    let temp = Project::empty();
    temp.file("good.robot", CLEAN_SUITE);

    let json = lint()
        .pwd(temp.path())
        .args(&["missing.robot", "good.robot"])
        .json()
        .fails();

    assert!(json.files()[0]["error"].as_str().unwrap().starts_with("missing.robot: "));
    assert!(json.files()[1].get("error").is_none());
}

/// Piped output has no color by default
#[test]
fn no_color_when_piped() {
    lint()
        .on("pipes")
        .args(&["pipes.robot"])
        .fails()
        .stdout_lacks("\x1b[");
}

/// `--color` forces escape codes
#[test]
fn color_flag_forces_color() {
    lint()
        .on("pipes")
        .args(&["--color", "pipes.robot"])
        .fails()
        .stdout_has("\x1b[");
}

/// NO_COLOR beats COLOR
#[test]
fn no_color_env_wins() {
    lint()
        .on("pipes")
        .args(&["pipes.robot"])
        .env("COLOR", "1")
        .env("NO_COLOR", "1")
        .fails()
        .stdout_lacks("\x1b[");
}

/// RFLINT_LOG enables tracing on stderr
#[test]
fn log_env_enables_tracing() {
    lint()
        .on("clean")
        .args(&["login.robot"])
        .env("RFLINT_LOG", "debug")
        .passes()
        .stdout_eq("+ login.robot\n")
        .stderr_has("registered 18 built-in rules");
}
