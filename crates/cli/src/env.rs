// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Environment variable names read by rflint.

/// Generated by build.rs.
pub mod names {
    include!(concat!(env!("OUT_DIR"), "/env_names.rs"));
}

#[cfg(test)]
#[path = "env_tests.rs"]
mod tests;
