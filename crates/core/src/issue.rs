// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Issue records as supplied by the issue source.
//!
//! Statuses are an open set: the well-known lifecycle states have their own
//! variants, and anything else is preserved verbatim in
//! [`IssueStatus::Other`] so that unfamiliar values never fail decoding.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

use crate::dates;

/// Lifecycle state of an issue.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum IssueStatus {
    /// Not yet started. Assumed when a record omits its status.
    #[default]
    Todo,
    /// Currently being worked on.
    InProgress,
    /// Waiting on quality assurance.
    Qa,
    /// Finished. The only status that counts towards completion.
    Completed,
    /// Dropped without completion.
    Cancelled,
    /// Parked on purpose.
    Hold,
    /// Cannot proceed until something else is resolved.
    Blocked,
    /// Any status string not listed above, kept exactly as received.
    Other(String),
}

impl IssueStatus {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &str {
        match self {
            IssueStatus::Todo => "todo",
            IssueStatus::InProgress => "in_progress",
            IssueStatus::Qa => "qa",
            IssueStatus::Completed => "completed",
            IssueStatus::Cancelled => "cancelled",
            IssueStatus::Hold => "hold",
            IssueStatus::Blocked => "blocked",
            IssueStatus::Other(raw) => raw,
        }
    }

    /// Returns true for statuses outside the known lifecycle.
    pub fn is_unrecognized(&self) -> bool {
        matches!(self, IssueStatus::Other(_))
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl From<String> for IssueStatus {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "todo" => IssueStatus::Todo,
            "in_progress" => IssueStatus::InProgress,
            "qa" => IssueStatus::Qa,
            "completed" => IssueStatus::Completed,
            "cancelled" => IssueStatus::Cancelled,
            "hold" => IssueStatus::Hold,
            "blocked" => IssueStatus::Blocked,
            _ => IssueStatus::Other(raw),
        }
    }
}

impl From<&str> for IssueStatus {
    fn from(raw: &str) -> Self {
        IssueStatus::from(raw.to_string())
    }
}

impl From<IssueStatus> for String {
    fn from(status: IssueStatus) -> Self {
        match status {
            IssueStatus::Other(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for IssueStatus {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(IssueStatus::from(s))
    }
}

/// A unit of trackable work inside a sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Issue {
    /// Unique identifier.
    pub id: i64,
    /// Short description of the work.
    #[serde(default, deserialize_with = "null_as_default")]
    pub name: String,
    /// Current lifecycle state.
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: IssueStatus,
    /// Free-form priority label (e.g. `high`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<String>,
    /// Free-form issue kind (e.g. `bug`, `feature`).
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub issue_type: Option<String>,
    /// Estimated effort.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub story_point: Option<i64>,
    /// Sprint this issue belongs to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<i64>,
    /// User the issue is assigned to.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assigned_to: Option<i64>,
    /// When the issue was created.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    /// When the status last changed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Decodes an explicit `null` the same as an absent field.
pub(crate) fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Issue {
    /// Creates an issue with the given status and no optional fields.
    pub fn new(id: i64, name: impl Into<String>, status: IssueStatus) -> Self {
        Issue {
            id,
            name: name.into(),
            status,
            priority: None,
            issue_type: None,
            story_point: None,
            sprint_id: None,
            assigned_to: None,
            created_at: None,
            updated_at: None,
        }
    }

    /// Sets the last-updated timestamp (builder pattern).
    pub fn with_updated_at(mut self, updated_at: impl Into<String>) -> Self {
        self.updated_at = Some(updated_at.into());
        self
    }

    /// Returns true if the issue is in the `completed` state.
    pub fn is_completed(&self) -> bool {
        self.status == IssueStatus::Completed
    }

    /// Calendar day of the last status change, if the timestamp parses.
    pub fn updated_day(&self) -> Option<chrono::NaiveDate> {
        dates::parse_optional(self.updated_at.as_deref()).map(|dt| dt.date_naive())
    }
}

#[cfg(test)]
#[path = "issue_tests.rs"]
mod tests;
