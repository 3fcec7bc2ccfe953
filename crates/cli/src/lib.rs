// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! zyro_cli - command-line front end for Zyro sprint analytics.
//!
//! Loads exported sprint records and renders analytics, sprint lists and the
//! status board as text or JSON.
//!
//! # Main Components
//!
//! - [`Cli`] - clap argument definitions
//! - [`Settings`] - `zyro.toml` configuration with flag and environment overrides
//! - [`Error`] - Error types for all operations
//!
//! ```rust,ignore
//! use clap::Parser;
//! use zyro_cli::Cli;
//!
//! let cli = Cli::parse_from(["zyro", "analytics", "12", "--data", "sprints.json"]);
//! zyro_cli::run(cli)?;
//! ```

mod cli;
pub mod colors;
mod commands;
mod display;
mod env;
pub mod logging;

pub mod config;
pub mod error;

pub use cli::{Cli, Command, DataArgs, NowArgs, OutputFormat};
pub use config::{Config, Settings};
pub use error::{Error, Result};

/// Execute a parsed command line. This is the main entry point for library
/// users and provides a testable way to run commands without process execution.
pub fn run(cli: Cli) -> Result<()> {
    let settings = Settings::discover(cli.config.as_deref())?;

    match cli.command {
        Command::Analytics {
            sprint_id,
            data,
            now,
            output,
        } => commands::analytics::run(&settings, sprint_id, data, now, output),
        Command::List {
            query,
            project,
            status,
            sort,
            desc,
            data,
            now,
            output,
        } => commands::list::run(
            &settings, query, project, status, sort, desc, data, now, output,
        ),
        Command::Board {
            project,
            data,
            output,
        } => commands::board::run(&settings, project, data, output),
    }
}

#[cfg(test)]
#[path = "lib_tests.rs"]
mod tests;
