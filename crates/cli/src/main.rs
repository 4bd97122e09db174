// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! rflint CLI entry point.

use clap::{CommandFactory, Parser};
use tracing_subscriber::{EnvFilter, fmt};

use rflint::cli::Cli;
use rflint::env::names;
use rflint::error::ExitCode;

mod cmd_lint;

fn init_logging() {
    let filter =
        EnvFilter::try_from_env(names::RFLINT_LOG).unwrap_or_else(|_| EnvFilter::new("off"));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    init_logging();
    rflint::dispatch::install_panic_hook();

    let exit_code = match run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("rflint: {}", e);
            match e.downcast_ref::<rflint::Error>() {
                Some(err) => ExitCode::from(err),
                None => ExitCode::InternalError,
            }
        }
    };

    std::process::exit(exit_code as i32);
}

fn run() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    if cli.files.is_empty() && !cli.list {
        // Show help for bare invocation
        Cli::command().print_help()?;
        println!();
        return Ok(ExitCode::Success);
    }

    cmd_lint::run(&cli)
}
