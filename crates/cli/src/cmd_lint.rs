// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lint command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use rflint::cli::{Cli, OutputFormat};
use rflint::color::resolve_color;
use rflint::config::Config;
use rflint::discovery::ConfigLocation;
use rflint::error::ExitCode;
use rflint::format::Template;
use rflint::output::FormatOptions;
use rflint::output::json::JsonFormatter;
use rflint::output::text::TextFormatter;
use rflint::registry::Registry;
use rflint::runner::{FileResult, Linter};
use rflint::selection::{self, ALL, ActiveRules, Directives};

/// Run rflint with parsed arguments.
pub fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let cwd = std::env::current_dir()?;

    let location = ConfigLocation::locate(cli.config.as_deref(), &cwd)?;
    let config = location.load()?;

    // Config directives first, so command line names come after them.
    let directives = config.directives().merge(cli.directives());

    let registry = discover_rules(cli, &config, &location.base);
    warn_unmatched_overrides(&directives, &registry);
    for name in directives.ambiguous() {
        tracing::debug!("{} given to both --warn and --error, using warning", name);
    }

    if cli.list {
        let mut stdout = std::io::stdout().lock();
        for line in selection::list_rules(&registry, &directives) {
            writeln!(stdout, "{}", line)?;
        }
        return Ok(ExitCode::Success);
    }

    let active = ActiveRules::resolve(&registry, &directives);
    let results = Linter::new(&active).run(&cli.files);

    let template = match cli.format.as_deref().or(config.output.format.as_deref()) {
        Some(source) => Template::parse(source),
        None => Template::default(),
    };
    let options = FormatOptions {
        template,
        show_filenames: !(cli.no_filenames || config.output.no_filenames),
    };

    match cli.output {
        OutputFormat::Text => {
            let mut formatter =
                TextFormatter::stdout(resolve_color(cli.color, cli.no_color), options);
            for result in &results {
                formatter.write_file(result)?;
            }
            formatter.flush()?;
        }
        OutputFormat::Json => {
            JsonFormatter::new(std::io::stdout().lock()).write(&results)?;
        }
    }

    report_problems(&results);

    if results.iter().any(FileResult::has_errors) {
        Ok(ExitCode::LintFailed)
    } else {
        Ok(ExitCode::Success)
    }
}

/// Built-in rules, then config extensions, then `--rulefile` paths.
fn discover_rules(cli: &Cli, config: &Config, config_dir: &Path) -> Registry {
    let mut registry = Registry::with_builtins(&config.rules.settings);

    let paths: Vec<PathBuf> = config
        .extension_paths(config_dir)
        .into_iter()
        .chain(cli.rulefiles.iter().cloned())
        .collect();
    for path in &paths {
        tracing::debug!("loading extension rules from {}", path.display());
        registry.load_extensions(path);
    }

    for issue in registry.issues() {
        eprintln!("rflint: warning: {}", issue);
    }
    registry
}

fn warn_unmatched_overrides(directives: &Directives, registry: &Registry) {
    let named: Vec<&str> = directives
        .overrides()
        .into_iter()
        .filter(|n| *n != ALL)
        .collect();
    let unmatched = directives.unmatched_overrides(registry);
    if !named.is_empty() && unmatched.len() == named.len() {
        eprintln!(
            "rflint: warning: no rule matches {} given to --warn/--error",
            unmatched.join(", ")
        );
    }
}

/// Parse errors and rule failures go to stderr.
fn report_problems(results: &[FileResult]) {
    for result in results {
        if let Some(error) = &result.error {
            eprintln!("rflint: {}", error);
        }
        for failure in &result.report.failures {
            eprintln!("rflint: {}", failure);
        }
    }
}
