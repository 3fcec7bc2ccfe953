// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod args;

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};
use serde::Deserialize;

pub use args::{DataArgs, NowArgs};

/// Output format for commands supporting structured output.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Parser)]
#[command(name = "zyro")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Sprint analytics for the Zyro issue tracker")]
#[command(
    long_about = "Sprint analytics for the Zyro issue tracker.\n\n\
    Reads exported sprint records (JSON, API envelope or JSON Lines) and reports \
    progress, burndown, velocity and sprint health."
)]
pub struct Cli {
    /// Use this config file instead of searching for zyro.toml
    #[arg(long, global = true, value_name = "path")]
    pub config: Option<PathBuf>,

    /// Enable debug logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Show analytics for one sprint
    #[command(after_help = "\
Examples:
  zyro analytics 12                       Analytics for sprint 12 as of now
  zyro analytics 12 --now 2026-03-10      Analytics as of a fixed date
  zyro analytics 12 -o json               Output in JSON format
  zyro analytics 12 -d export.jsonl       Read sprints from a JSONL export")]
    Analytics {
        /// Numeric sprint id
        sprint_id: i64,

        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        now: NowArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// List sprints with progress
    #[command(after_help = "\
Examples:
  zyro list                               List all sprints in file order
  zyro list -q alpha                      Sprints whose name or key contains 'alpha'
  zyro list -p 3                          Sprints of project 3
  zyro list -s in_progress                Sprints with status in_progress
  zyro list --sort end_date --desc        Latest end date first
  zyro list -o json                       Output in JSON format")]
    List {
        /// Search sprint name or key (case-insensitive)
        #[arg(long, short)]
        query: Option<String>,

        /// Filter by project id
        #[arg(long, short)]
        project: Option<i64>,

        /// Filter by sprint status
        #[arg(long, short)]
        status: Option<String>,

        /// Sort by field (name, status, start_date, end_date, progress)
        #[arg(long)]
        sort: Option<String>,

        /// Sort in descending order
        #[arg(long, requires = "sort")]
        desc: bool,

        #[command(flatten)]
        data: DataArgs,

        #[command(flatten)]
        now: NowArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },

    /// Show sprints grouped by status
    #[command(after_help = "\
Examples:
  zyro board                              Board of all sprints
  zyro board -p 3                         Board for project 3
  zyro board -o json                      Output in JSON format")]
    Board {
        /// Filter by project id
        #[arg(long, short)]
        project: Option<i64>,

        #[command(flatten)]
        data: DataArgs,

        /// Output format (text, json)
        #[arg(long = "output", short = 'o', value_enum)]
        output: Option<OutputFormat>,
    },
}

#[cfg(test)]
#[path = "../cli_tests/mod.rs"]
mod tests;
