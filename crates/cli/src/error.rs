// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use thiserror::Error;

/// All possible errors that can occur in the zyro CLI.
///
/// Errors provide user-friendly messages with hints for common issues.
#[derive(Debug, Error)]
pub enum Error {
    #[error("sprint not found: {0}\n  hint: run 'zyro list' to see available sprint ids")]
    SprintNotFound(i64),

    #[error("invalid sort field: '{0}'\n  hint: valid fields are: name, status, start_date, end_date, progress")]
    InvalidSortField(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("invalid sprint record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("no sprint data file\n  hint: pass --data <path>, set ZYRO_DATA, or add `data = \"...\"` to zyro.toml")]
    NoDataFile,

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("config error: {0}")]
    Config(String),
}

/// A specialized Result type for zyro CLI operations.
pub type Result<T> = std::result::Result<T, Error>;

impl From<zyro_core::Error> for Error {
    fn from(e: zyro_core::Error) -> Self {
        match e {
            zyro_core::Error::SprintNotFound(id) => Error::SprintNotFound(id),
            zyro_core::Error::InvalidSortField(s) => Error::InvalidSortField(s),
            zyro_core::Error::InvalidDate(s) => Error::InvalidDate(s),
            zyro_core::Error::InvalidRecord { line, reason } => {
                Error::InvalidRecord { line, reason }
            }
            zyro_core::Error::Io(e) => Error::Io(e),
            zyro_core::Error::Json(e) => Error::Json(e),
        }
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
