// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Config file location.
//!
//! An explicit `-C` path wins. Otherwise rflint.toml is searched for from
//! the working directory upward, and the search ends at the git root.

use std::path::{Path, PathBuf};

use crate::config::{self, CONFIG_FILE_NAME, Config};
use crate::error::{Error, Result};

/// Where a run's configuration comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    /// Config file, or `None` when running on defaults.
    pub file: Option<PathBuf>,
    /// Directory that relative paths in the config resolve against.
    pub base: PathBuf,
}

impl ConfigLocation {
    /// Locate the config for a run started in `cwd`.
    pub fn locate(explicit: Option<&Path>, cwd: &Path) -> Result<Self> {
        let file = match explicit {
            Some(given) => {
                let path = cwd.join(given);
                if !path.is_file() {
                    return Err(Error::Config {
                        message: format!("config file not found: {}", given.display()),
                        path: Some(path),
                    });
                }
                Some(path)
            }
            None => find_config(cwd),
        };

        let base = file
            .as_deref()
            .and_then(Path::parent)
            .map_or_else(|| cwd.to_path_buf(), Path::to_path_buf);
        Ok(Self { file, base })
    }

    /// Load the located file, or defaults when there is none.
    pub fn load(&self) -> Result<Config> {
        match &self.file {
            Some(path) => {
                tracing::debug!("loading config from {}", path.display());
                config::load(path)
            }
            None => {
                tracing::debug!("no config found, using defaults");
                Ok(Config::default())
            }
        }
    }
}

/// Nearest rflint.toml at or above `start`, not crossing a git root.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    for dir in start.ancestors() {
        let candidate = dir.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if dir.join(".git").exists() {
            break;
        }
    }
    None
}

#[cfg(test)]
#[path = "discovery_tests.rs"]
mod tests;
