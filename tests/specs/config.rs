//! Behavioral specs for rflint.toml.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

const UNDOCUMENTED: &str = "\
*** Test Cases ***
First Test
    Log    one
    Log    two
";

/// Config directives apply without command line flags
#[test]
fn config_directives() {
    let temp = Project::empty();
    temp.config("[rules]\nignore = [\"all\"]\nwarn = [\"RequireTestDocumentation\"]\n");
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .args(&["suite.robot"])
        .passes()
        .stdout_eq("+ suite.robot\nW: 2, 0: No testcase documentation (RequireTestDocumentation)\n");
}

/// Command line directives come after config ones
#[test]
fn cli_directives_extend_config() {
    let temp = Project::empty();
    temp.config("[rules]\nignore = [\"all\"]\n");
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .args(&["-e", "RequireSuiteDocumentation", "suite.robot"])
        .fails()
        .stdout_eq("+ suite.robot\nE: 0, 0: No suite documentation (RequireSuiteDocumentation)\n");
}

/// Config is found in a parent directory
#[test]
fn config_discovered_upward() {
    let temp = Project::empty();
    temp.config("[rules]\nignore = [\"all\"]\n");
    temp.file("suites/login/suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path().join("suites/login"))
        .args(&["suite.robot"])
        .passes()
        .stdout_eq("+ suite.robot\n");
}

/// `[output]` sets the template and banner
#[test]
fn output_section() {
    let temp = Project::empty();
    temp.config("[output]\nformat = \"{rulename}@{linenumber}\"\nno_filenames = true\n[rules]\nignore = [\"all\"]\nerror = [\"TooFewTestSteps\"]\n");
    temp.file("suite.robot", "*** Test Cases ***\nShort\n    Log    one\n");

    lint()
        .pwd(temp.path())
        .args(&["suite.robot"])
        .fails()
        .stdout_eq("TooFewTestSteps@2\n");
}

/// Command line format overrides config format
#[test]
fn cli_format_overrides_config() {
    let temp = Project::empty();
    temp.config("[output]\nformat = \"{rulename}\"\n[rules]\nignore = [\"all\"]\nerror = [\"TooFewTestSteps\"]\n");
    temp.file("suite.robot", "*** Test Cases ***\nShort\n    Log    one\n");

    lint()
        .pwd(temp.path())
        .args(&["--no-filenames", "-f", "{linenumber}", "suite.robot"])
        .fails()
        .stdout_eq("2\n");
}

/// `-C` selects a config file explicitly
#[test]
fn explicit_config_path() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[rules]\nignore = [\"all\"]\n");
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .args(&["-C", "custom.toml", "suite.robot"])
        .passes()
        .stdout_eq("+ suite.robot\n");
}

/// RFLINT_CONFIG works like -C
#[test]
fn config_from_env() {
    let temp = Project::empty();
    temp.file("custom.toml", "version = 1\n[rules]\nignore = [\"all\"]\n");
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .env("RFLINT_CONFIG", "custom.toml")
        .args(&["suite.robot"])
        .passes()
        .stdout_eq("+ suite.robot\n");
}

/// A missing explicit config is a configuration error
#[test]
fn missing_explicit_config() {
    let temp = Project::empty();
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .args(&["-C", "nope.toml", "suite.robot"])
        .exits(2)
        .stderr_has("config file not found: nope.toml");
}

/// Unsupported versions are rejected
#[test]
fn unsupported_version() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .args(&["suite.robot"])
        .exits(2)
        .stderr_has("unsupported config version 2");
}

/// Unknown keys warn but do not fail
#[test]
fn unknown_keys_warn() {
    let temp = Project::empty();
    temp.config("[rules]\nignore = [\"all\"]\nsevere = true\n[rules.settings]\nmax_width = 80\n");
    temp.file("suite.robot", UNDOCUMENTED);

    lint()
        .pwd(temp.path())
        .args(&["suite.robot"])
        .passes()
        .stderr_has("unrecognized field `rules.severe`")
        .stderr_has("unrecognized field `rules.settings.max_width`");
}
