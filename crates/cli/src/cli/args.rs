// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Shared argument structs for CLI commands.
//!
//! These structs are used with `#[command(flatten)]` to reduce duplication
//! across commands that read sprint records.

use std::path::PathBuf;

use clap::Args;

/// Location of the sprint record file.
#[derive(Args, Clone, Debug, Default)]
pub struct DataArgs {
    /// Sprint record file (JSON array, API envelope or JSON Lines)
    #[arg(long, short, value_name = "path")]
    pub data: Option<PathBuf>,
}

/// Reference instant for time-dependent values.
#[derive(Args, Clone, Debug, Default)]
pub struct NowArgs {
    /// Evaluate as of this date or RFC 3339 timestamp instead of the current time
    #[arg(long, value_name = "when")]
    pub now: Option<String>,
}
