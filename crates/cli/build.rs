// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Build script that generates env var name constants for `env.rs`.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic)]

use std::env;
use std::fmt::Write as _;
use std::fs;
use std::path::Path;

/// (name, doc) for every environment variable rflint reads.
const VARS: &[(&str, &str)] = &[
    ("NO_COLOR", "disables color output (any value)"),
    ("COLOR", "forces color output (any value)"),
    ("CI", "indicates a CI environment; disables automatic color"),
    ("RFLINT_LOG", "tracing filter for diagnostics on stderr (default `off`)"),
    ("RFLINT_CONFIG", "explicit rflint.toml path, same as `-C`"),
];

fn main() {
    let out_dir = env::var("OUT_DIR").expect("OUT_DIR not set");
    let dest = Path::new(&out_dir).join("env_names.rs");

    let mut contents = String::new();
    for (name, doc) in VARS {
        writeln!(contents, "/// Environment variable: {doc}.").unwrap();
        writeln!(contents, "pub const {name}: &str = \"{name}\";").unwrap();
    }

    fs::write(dest, contents).expect("failed to write env_names.rs");
    println!("cargo:rerun-if-changed=build.rs");
}
