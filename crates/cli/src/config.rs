// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Configuration parsing and validation.
//!
//! Handles rflint.toml parsing with version validation and unknown key warnings.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::rules::RuleSettings;
use crate::selection::Directives;

/// Config file name searched for by discovery.
pub const CONFIG_FILE_NAME: &str = "rflint.toml";

/// Minimum config structure for version checking.
#[derive(Deserialize)]
struct VersionOnly {
    version: Option<i64>,
}

/// Full configuration.
#[derive(Debug, Default, Deserialize)]
pub struct Config {
    /// Config file version (must be 1).
    pub version: i64,

    /// Rule selection and thresholds.
    #[serde(default)]
    pub rules: RulesConfig,

    /// Output options.
    #[serde(default)]
    pub output: OutputConfig,
}

/// `[rules]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Rules to ignore; may contain "all".
    pub ignore: Vec<String>,
    /// Rules forced to warning.
    pub warn: Vec<String>,
    /// Rules forced to error.
    pub error: Vec<String>,
    /// Extension rule files or directories, relative to the config file.
    pub extensions: Vec<PathBuf>,
    /// Built-in rule thresholds.
    pub settings: RuleSettings,
}

/// `[output]` section.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Diagnostic template.
    pub format: Option<String>,
    /// Suppress the `+ <file>` banner.
    pub no_filenames: bool,
}

impl Config {
    /// Directives from the `[rules]` section.
    pub fn directives(&self) -> Directives {
        Directives::new(&self.rules.ignore, &self.rules.warn, &self.rules.error)
    }

    /// Extension paths resolved against `base` (the config file's directory).
    pub fn extension_paths(&self, base: &Path) -> Vec<PathBuf> {
        self.rules
            .extensions
            .iter()
            .map(|p| if p.is_absolute() { p.clone() } else { base.join(p) })
            .collect()
    }
}

/// Currently supported config version.
pub const SUPPORTED_VERSION: i64 = 1;

/// Known top-level keys in the config.
const KNOWN_KEYS: &[&str] = &["version", "rules", "output"];

/// Known `[rules]` keys.
const KNOWN_RULES_KEYS: &[&str] = &["ignore", "warn", "error", "extensions", "settings"];

/// Known `[output]` keys.
const KNOWN_OUTPUT_KEYS: &[&str] = &["format", "no_filenames"];

/// Load config from a file, warning on unknown keys.
pub fn load(path: &Path) -> Result<Config> {
    let content = std::fs::read_to_string(path).map_err(|e| Error::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    parse_with_warnings(&content, path)
}

/// Parse config from string content (strict mode).
pub fn parse(content: &str, path: &Path) -> Result<Config> {
    // First check version
    let version_check: VersionOnly = toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })?;

    let version = version_check.version.ok_or_else(|| Error::Config {
        message: "missing required field: version".to_string(),
        path: Some(path.to_path_buf()),
    })?;

    if version != SUPPORTED_VERSION {
        return Err(Error::Config {
            message: format!(
                "unsupported config version {} (supported: {})\n  Upgrade rflint to use this config.",
                version, SUPPORTED_VERSION
            ),
            path: Some(path.to_path_buf()),
        });
    }

    toml::from_str(content).map_err(|e| Error::Config {
        message: e.to_string(),
        path: Some(path.to_path_buf()),
    })
}

/// Parse config, warning on unknown keys.
pub fn parse_with_warnings(content: &str, path: &Path) -> Result<Config> {
    let config = parse(content, path)?;
    for key in unknown_keys(content) {
        warn_unknown_key(path, &key);
    }
    Ok(config)
}

/// Dotted paths of keys this version does not recognize.
pub fn unknown_keys(content: &str) -> Vec<String> {
    let Ok(toml::Value::Table(root)) = content.parse::<toml::Value>() else {
        return Vec::new();
    };

    let mut unknown = Vec::new();
    for (key, value) in &root {
        match (key.as_str(), value) {
            ("rules", toml::Value::Table(rules)) => {
                for (key, value) in rules {
                    if !KNOWN_RULES_KEYS.contains(&key.as_str()) {
                        unknown.push(format!("rules.{key}"));
                    } else if let ("settings", toml::Value::Table(settings)) = (key.as_str(), value)
                    {
                        unknown.extend(
                            settings
                                .keys()
                                .filter(|k| !RuleSettings::KEYS.contains(&k.as_str()))
                                .map(|k| format!("rules.settings.{k}")),
                        );
                    }
                }
            }
            ("output", toml::Value::Table(output)) => {
                unknown.extend(
                    output
                        .keys()
                        .filter(|k| !KNOWN_OUTPUT_KEYS.contains(&k.as_str()))
                        .map(|k| format!("output.{k}")),
                );
            }
            (key, _) if !KNOWN_KEYS.contains(&key) => unknown.push(key.to_string()),
            _ => {}
        }
    }
    unknown
}

fn warn_unknown_key(path: &Path, key: &str) {
    eprintln!(
        "rflint: warning: {}: unrecognized field `{}` (ignored)",
        path.display(),
        key
    );
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
