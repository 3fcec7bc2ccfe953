// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Day-by-day remaining work against a straight-line ideal.

use chrono::{DateTime, Days, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::dates;
use crate::sprint::Sprint;

/// One day of a burndown chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BurndownPoint {
    /// Calendar day, `YYYY-MM-DD`.
    pub date: String,
    /// Remaining issues on the ideal linear decay.
    pub ideal: f64,
    /// Issues not yet completed by the end of this day.
    pub actual: usize,
}

/// Builds the burndown series for `sprint` as of `now`.
///
/// Returns an empty series unless both dates parse, the sprint spans at
/// least one day, and it has issues. Otherwise yields one point per day from
/// the start date through `start + total_days` inclusive. Days after today
/// report the full issue count as actual. Completed issues without a usable
/// `updated_at` never count as burned down.
pub fn generate_burndown(sprint: &Sprint, now: DateTime<Utc>) -> Vec<BurndownPoint> {
    let (Some(start), Some(end)) = (sprint.start(), sprint.end()) else {
        tracing::debug!(sprint = sprint.id, "burndown skipped: missing dates");
        return Vec::new();
    };

    let total_days = dates::ceil_days(end - start);
    let total_issues = sprint.issues.len();
    if total_days <= 0 || total_issues == 0 {
        tracing::debug!(
            sprint = sprint.id,
            total_days,
            total_issues,
            "burndown skipped: empty span or no issues"
        );
        return Vec::new();
    }

    let completion_days: Vec<NaiveDate> = sprint
        .issues
        .iter()
        .filter(|issue| issue.is_completed())
        .filter_map(|issue| issue.updated_day())
        .collect();

    let today = now.date_naive();
    let start_day = start.date_naive();
    let total = total_issues as f64;
    let step = total / total_days as f64;

    let mut points = Vec::new();
    for offset in 0..=total_days {
        let Some(day) = start_day.checked_add_days(Days::new(offset as u64)) else {
            break;
        };

        let ideal = (total - step * offset as f64).max(0.0);
        let actual = if day <= today {
            let burned = completion_days.iter().filter(|done| **done <= day).count();
            total_issues.saturating_sub(burned)
        } else {
            total_issues
        };

        points.push(BurndownPoint {
            date: dates::iso_day(day),
            ideal,
            actual,
        });
    }

    points
}

#[cfg(test)]
#[path = "burndown_tests.rs"]
mod tests;
