// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint records as supplied by the sprint source.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::dates;
use crate::issue::{null_as_default, Issue, IssueStatus};

/// Lifecycle state of a sprint.
///
/// Like [`IssueStatus`], unknown values are kept in [`SprintStatus::Other`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum SprintStatus {
    /// Planned, not started.
    #[default]
    Todo,
    /// Running.
    InProgress,
    /// Finished. Only completed sprints feed velocity trends.
    Completed,
    /// Abandoned.
    Cancelled,
    /// Remaining work moved to another sprint.
    Transferred,
    /// Any status string not listed above, kept exactly as received.
    Other(String),
}

impl SprintStatus {
    /// The five board columns, in display order.
    pub const BOARD_ORDER: [SprintStatus; 5] = [
        SprintStatus::Todo,
        SprintStatus::InProgress,
        SprintStatus::Completed,
        SprintStatus::Cancelled,
        SprintStatus::Transferred,
    ];

    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            SprintStatus::Todo => "todo",
            SprintStatus::InProgress => "in_progress",
            SprintStatus::Completed => "completed",
            SprintStatus::Cancelled => "cancelled",
            SprintStatus::Transferred => "transferred",
            SprintStatus::Other(raw) => raw,
        }
    }

    /// Human-readable column label. Unknown statuses fall back to the `todo` label.
    pub fn label(&self) -> &'static str {
        match self {
            SprintStatus::InProgress => "In Progress",
            SprintStatus::Completed => "Completed",
            SprintStatus::Cancelled => "Cancelled",
            SprintStatus::Transferred => "Transferred",
            SprintStatus::Todo | SprintStatus::Other(_) => "To Do",
        }
    }
}

impl fmt::Display for SprintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for SprintStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "todo" => SprintStatus::Todo,
            "in_progress" => SprintStatus::InProgress,
            "completed" => SprintStatus::Completed,
            "cancelled" => SprintStatus::Cancelled,
            "transferred" => SprintStatus::Transferred,
            _ => SprintStatus::Other(raw),
        }
    }
}

impl From<&str> for SprintStatus {
    fn from(raw: &str) -> Self {
        SprintStatus::from(raw.to_string())
    }
}

impl From<SprintStatus> for String {
    fn from(status: SprintStatus) -> Self {
        match status {
            SprintStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for SprintStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(SprintStatus::from(s))
    }
}

/// A fixed-duration unit of planned work.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sprint {
    /// Unique numeric identifier.
    pub id: i64,
    /// Human-readable key such as `SPR-001`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    /// Display name.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Owning project.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    /// First day of the sprint.
    #[serde(default)]
    pub start_date: Option<String>,
    /// Last day of the sprint.
    #[serde(default)]
    pub end_date: Option<String>,
    /// Current lifecycle state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: SprintStatus,
    /// Issues planned into this sprint. Absent and `null` both mean empty.
    #[serde(default, deserialize_with = "null_as_default")]
    pub issues: Vec<Issue>,
}

impl Sprint {
    /// Creates a sprint with no dates and no issues.
    pub fn new(id: i64, name: impl Into<String>, status: SprintStatus) -> Self {
        Sprint {
            id,
            sprint_id: None,
            name: name.into(),
            project_id: None,
            start_date: None,
            end_date: None,
            status,
            issues: Vec::new(),
        }
    }

    /// Sets the start and end dates (builder pattern).
    pub fn with_dates(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start_date = start.map(str::to_string);
        self.end_date = end.map(str::to_string);
        self
    }

    /// Sets the issue list (builder pattern).
    pub fn with_issues(mut self, issues: Vec<Issue>) -> Self {
        self.issues = issues;
        self
    }

    /// Sets the owning project (builder pattern).
    pub fn with_project(mut self, project_id: i64) -> Self {
        self.project_id = Some(project_id);
        self
    }

    /// Parsed start date, if set and well-formed.
    pub fn start(&self) -> Option<DateTime<Utc>> {
        dates::parse_optional(self.start_date.as_deref())
    }

    /// Parsed end date, if set and well-formed.
    pub fn end(&self) -> Option<DateTime<Utc>> {
        dates::parse_optional(self.end_date.as_deref())
    }

    /// Number of issues with exactly the given status.
    pub fn count_with_status(&self, status: &IssueStatus) -> usize {
        self.issues.iter().filter(|i| &i.status == status).count()
    }

    /// Number of issues in the `completed` state.
    pub fn completed_count(&self) -> usize {
        self.count_with_status(&IssueStatus::Completed)
    }

    /// Share of completed issues as a rounded percentage, 0 for an empty sprint.
    pub fn completion_rate(&self) -> u32 {
        completion_rate(self.completed_count(), self.issues.len())
    }

    /// Whole days until the end date relative to `now`. Negative when overdue.
    pub fn days_remaining(&self, now: DateTime<Utc>) -> Option<i64> {
        self.end().map(|end| dates::ceil_days(end - now))
    }
}

/// Rounded percentage of `completed` out of `total`, 0 when `total` is 0.
pub fn completion_rate(completed: usize, total: usize) -> u32 {
    if total == 0 {
        return 0;
    }
    (completed as f64 / total as f64 * 100.0).round() as u32
}

#[cfg(test)]
#[path = "sprint_tests.rs"]
mod tests;
