// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Project configuration management.
//!
//! Configuration is stored in `zyro.toml` and includes:
//! - `data`: Default sprint record file, relative to the config file
//! - `output`: Default output format (`text` or `json`)
//! - `project`: Default project filter for `list` and `board`
//!
//! The file is found by walking up from the current directory, falling back
//! to `zyro/config.toml` in the user config directory.

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::OutputFormat;
use crate::env;
use crate::error::{Error, Result};

pub const CONFIG_FILE_NAME: &str = "zyro.toml";
const USER_CONFIG_DIR: &str = "zyro";
const USER_CONFIG_FILE: &str = "config.toml";

/// Settings read from `zyro.toml`.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Default sprint record file.
    pub data: Option<PathBuf>,
    /// Default output format.
    pub output: Option<OutputFormat>,
    /// Default project filter.
    pub project: Option<i64>,
}

impl Config {
    /// Loads configuration from the given file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| Error::Config(format!("failed to read {}: {}", path.display(), e)))?;
        toml::from_str(&content)
            .map_err(|e| Error::Config(format!("failed to parse {}: {}", path.display(), e)))
    }
}

/// A config together with the directory relative paths resolve against.
#[derive(Debug, Clone, Default)]
pub struct Settings {
    pub config: Config,
    /// Directory of the config file; `None` when no file was loaded.
    pub base_dir: Option<PathBuf>,
}

impl Settings {
    /// Loads settings from `explicit` if given, else from the nearest
    /// `zyro.toml` or the user config file. No file at all yields defaults.
    pub fn discover(explicit: Option<&Path>) -> Result<Self> {
        let path = match explicit {
            Some(path) => Some(path.to_path_buf()),
            None => find_config(&std::env::current_dir()?).or_else(user_config_path),
        };

        match path {
            Some(path) => {
                let config = Config::load(&path)?;
                tracing::debug!(path = %path.display(), "loaded config");
                Ok(Settings {
                    config,
                    base_dir: path.parent().map(Path::to_path_buf),
                })
            }
            None => Ok(Settings::default()),
        }
    }

    /// Resolves the sprint record file: flag, then `ZYRO_DATA`, then config.
    pub fn data_path(&self, flag: Option<PathBuf>) -> Result<PathBuf> {
        self.resolve_data(flag.or_else(env::data_path))
    }

    fn resolve_data(&self, override_path: Option<PathBuf>) -> Result<PathBuf> {
        if let Some(path) = override_path {
            return Ok(path);
        }

        let configured = self.config.data.as_ref().ok_or(Error::NoDataFile)?;
        Ok(match &self.base_dir {
            Some(base) if configured.is_relative() => base.join(configured),
            _ => configured.clone(),
        })
    }

    /// Output format from the flag, else config, else text.
    pub fn output(&self, flag: Option<OutputFormat>) -> OutputFormat {
        flag.or(self.config.output).unwrap_or_default()
    }

    /// Project filter from the flag, else config.
    pub fn project(&self, flag: Option<i64>) -> Option<i64> {
        flag.or(self.config.project)
    }
}

/// Find `zyro.toml` by walking up from `start`.
pub fn find_config(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        let candidate = current.join(CONFIG_FILE_NAME);
        if candidate.is_file() {
            return Some(candidate);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// `zyro/config.toml` under the user config directory, if it exists.
fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join(USER_CONFIG_DIR).join(USER_CONFIG_FILE))
        .filter(|path| path.is_file())
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
