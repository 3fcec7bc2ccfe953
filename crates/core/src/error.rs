// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Error types for zyro-core operations.
//!
//! The analytics engine itself never fails; these errors come from loading
//! sprint records and from parsing user-supplied options.

use thiserror::Error;

/// All possible errors that can occur in zyro-core operations.
#[derive(Debug, Error)]
pub enum Error {
    #[error("sprint not found: {0}")]
    SprintNotFound(i64),

    #[error("invalid sort field: '{0}'\n  hint: valid fields are: name, status, start_date, end_date, progress")]
    InvalidSortField(String),

    #[error("invalid date: '{0}'\n  hint: use YYYY-MM-DD or an RFC 3339 timestamp")]
    InvalidDate(String),

    #[error("line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A specialized Result type for zyro-core operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
