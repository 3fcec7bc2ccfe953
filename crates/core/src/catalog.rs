// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint listing helpers: per-sprint summaries, filtering, sorting and the
//! status board.

use chrono::{DateTime, Utc};
use serde::Serialize;
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::dates;
use crate::error::{Error, Result};
use crate::sprint::{Sprint, SprintStatus};

const NOT_SET: &str = "Not set";

/// Card-sized overview of one sprint.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SprintSummary {
    pub id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sprint_id: Option<String>,
    pub name: String,
    pub status: SprintStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project_id: Option<i64>,
    pub total_issues: usize,
    pub completed_issues: usize,
    /// Rounded completion percentage.
    pub progress: u32,
    pub days_remaining: Option<i64>,
    /// Display range such as `Mar 1, 2026 - Mar 14, 2026`.
    pub date_range: String,
}

impl SprintSummary {
    /// Summarizes `sprint` as of `now`.
    pub fn from_sprint(sprint: &Sprint, now: DateTime<Utc>) -> Self {
        SprintSummary {
            id: sprint.id,
            sprint_id: sprint.sprint_id.clone(),
            name: sprint.name.clone(),
            status: sprint.status.clone(),
            project_id: sprint.project_id,
            total_issues: sprint.issues.len(),
            completed_issues: sprint.completed_count(),
            progress: sprint.completion_rate(),
            days_remaining: sprint.days_remaining(now),
            date_range: format_date_range(sprint.start_date.as_deref(), sprint.end_date.as_deref()),
        }
    }
}

/// Formats a date-like field for display, or `Not set`.
pub fn format_date(raw: Option<&str>) -> String {
    dates::parse_optional(raw)
        .map(|dt| dates::display_day(dt.date_naive()))
        .unwrap_or_else(|| NOT_SET.to_string())
}

/// Formats a start/end pair as `<start> - <end>`, or `Not set` if either is missing.
pub fn format_date_range(start: Option<&str>, end: Option<&str>) -> String {
    match (start, end) {
        (Some(start), Some(end)) => {
            format!("{} - {}", format_date(Some(start)), format_date(Some(end)))
        }
        _ => NOT_SET.to_string(),
    }
}

/// Criteria for narrowing a sprint list. Unset criteria match everything.
#[derive(Debug, Clone, Default)]
pub struct SprintFilter {
    /// Case-insensitive substring of the name or sprint key.
    pub query: Option<String>,
    pub project_id: Option<i64>,
    pub status: Option<SprintStatus>,
}

impl SprintFilter {
    /// Returns true if `sprint` satisfies every set criterion.
    pub fn matches(&self, sprint: &Sprint) -> bool {
        let matches_query = match self.query.as_deref().map(str::trim) {
            None | Some("") => true,
            Some(query) => {
                let needle = query.to_lowercase();
                sprint.name.to_lowercase().contains(&needle)
                    || sprint
                        .sprint_id
                        .as_deref()
                        .is_some_and(|key| key.to_lowercase().contains(&needle))
            }
        };

        let matches_project = self.project_id.map_or(true, |p| sprint.project_id == Some(p));
        let matches_status = self.status.as_ref().map_or(true, |s| &sprint.status == s);

        matches_query && matches_project && matches_status
    }

    /// Returns the sprints that match, preserving order.
    pub fn apply<'a>(&self, sprints: &'a [Sprint]) -> Vec<&'a Sprint> {
        sprints.iter().filter(|s| self.matches(s)).collect()
    }
}

/// Column a sprint list can be ordered by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortField {
    #[default]
    Name,
    Status,
    StartDate,
    EndDate,
    Progress,
}

impl SortField {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortField::Name => "name",
            SortField::Status => "status",
            SortField::StartDate => "start_date",
            SortField::EndDate => "end_date",
            SortField::Progress => "progress",
        }
    }
}

impl fmt::Display for SortField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for SortField {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "name" => Ok(SortField::Name),
            "status" => Ok(SortField::Status),
            "start_date" | "start-date" | "start" => Ok(SortField::StartDate),
            "end_date" | "end-date" | "end" => Ok(SortField::EndDate),
            "progress" => Ok(SortField::Progress),
            _ => Err(Error::InvalidSortField(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

/// Sorts sprints in place by `field`. Equal keys keep their relative order.
///
/// Missing dates sort as the epoch.
pub fn sort_sprints(sprints: &mut [&Sprint], field: SortField, direction: SortDirection) {
    sprints.sort_by(|a, b| {
        let ordering = compare_by(a, b, field);
        match direction {
            SortDirection::Asc => ordering,
            SortDirection::Desc => ordering.reverse(),
        }
    });
}

fn compare_by(a: &Sprint, b: &Sprint, field: SortField) -> Ordering {
    match field {
        SortField::Name => a.name.to_lowercase().cmp(&b.name.to_lowercase()),
        SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        SortField::StartDate => epoch_ms(a.start()).cmp(&epoch_ms(b.start())),
        SortField::EndDate => epoch_ms(a.end()).cmp(&epoch_ms(b.end())),
        SortField::Progress => a.completion_rate().cmp(&b.completion_rate()),
    }
}

fn epoch_ms(instant: Option<DateTime<Utc>>) -> i64 {
    instant.map(|dt| dt.timestamp_millis()).unwrap_or(0)
}

/// One status column of the board.
#[derive(Debug, Clone, Serialize)]
pub struct BoardColumn<'a> {
    pub status: SprintStatus,
    pub label: &'static str,
    pub sprints: Vec<&'a Sprint>,
}

/// Sprints grouped into the five lifecycle columns.
#[derive(Debug, Clone, Serialize)]
pub struct SprintBoard<'a> {
    pub columns: Vec<BoardColumn<'a>>,
}

impl SprintBoard<'_> {
    /// Number of sprints placed on the board.
    pub fn len(&self) -> usize {
        self.columns.iter().map(|c| c.sprints.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Groups sprints by status into the fixed board columns.
///
/// Sprints with a status outside the five board columns are left off.
pub fn group_by_status<'a, I>(sprints: I) -> SprintBoard<'a>
where
    I: IntoIterator<Item = &'a Sprint>,
{
    let mut columns: Vec<BoardColumn<'a>> = SprintStatus::BOARD_ORDER
        .iter()
        .map(|status| BoardColumn {
            status: status.clone(),
            label: status.label(),
            sprints: Vec::new(),
        })
        .collect();

    for sprint in sprints {
        match columns.iter_mut().find(|c| c.status == sprint.status) {
            Some(column) => column.sprints.push(sprint),
            None => tracing::debug!(sprint = sprint.id, status = %sprint.status, "not on board"),
        }
    }

    SprintBoard { columns }
}

#[cfg(test)]
#[path = "catalog_tests.rs"]
mod tests;
