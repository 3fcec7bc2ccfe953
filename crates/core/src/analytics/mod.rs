// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Sprint analytics derivation.
//!
//! Turns a sprint, its issues and its sibling sprints into a
//! [`SprintAnalytics`] snapshot: issue counts, completion rate, days
//! remaining, a burndown series, a velocity comparison, a status histogram
//! and a health verdict.
//!
//! Everything here is a pure function of its inputs plus the instant passed
//! in as "now". Inputs are only borrowed, and every call builds a fresh
//! snapshot, so computing twice with the same inputs and the same instant
//! yields identical output.

mod burndown;
mod health;
mod velocity;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::clock::{ClockSource, SystemClock};
use crate::issue::{Issue, IssueStatus};
use crate::sprint::Sprint;

pub use burndown::{generate_burndown, BurndownPoint};
pub use health::{assess_health, HealthAssessment, SprintHealth, HEALTH_CADENCE_DAYS};
pub use velocity::{generate_velocity, VelocityPoint, MAX_VELOCITY_SIBLINGS};

/// Derived analytics for one sprint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SprintAnalytics {
    pub total_issues: usize,
    pub completed_issues: usize,
    pub in_progress_issues: usize,
    pub todo_issues: usize,
    /// Rounded percentage of completed issues.
    pub completion_rate: u32,
    /// Whole days until the end date; `None` when the sprint has no end date.
    pub days_remaining: Option<i64>,
    pub burndown_data: Vec<BurndownPoint>,
    /// Current sprint first, then up to four completed siblings oldest to newest.
    pub velocity_data: Vec<VelocityPoint>,
    pub issue_status_distribution: BTreeMap<String, usize>,
    pub sprint_health: SprintHealth,
}

impl SprintAnalytics {
    /// The snapshot reported when there is no sprint to analyze.
    pub fn empty() -> Self {
        SprintAnalytics {
            total_issues: 0,
            completed_issues: 0,
            in_progress_issues: 0,
            todo_issues: 0,
            completion_rate: 0,
            days_remaining: None,
            burndown_data: Vec::new(),
            velocity_data: Vec::new(),
            issue_status_distribution: BTreeMap::new(),
            sprint_health: SprintHealth::OnTrack,
        }
    }
}

impl Default for SprintAnalytics {
    fn default() -> Self {
        SprintAnalytics::empty()
    }
}

/// Computes the analytics snapshot for `sprint` as of `now`.
///
/// `all_sprints` supplies velocity siblings; it may contain `sprint` itself,
/// duplicates, or nothing at all. A missing sprint yields
/// [`SprintAnalytics::empty`]. This function never fails.
pub fn compute_analytics(
    sprint: Option<&Sprint>,
    all_sprints: &[Sprint],
    now: DateTime<Utc>,
) -> SprintAnalytics {
    let Some(sprint) = sprint else {
        return SprintAnalytics::empty();
    };

    let issues = &sprint.issues;
    let total_issues = issues.len();
    let completed_issues = sprint.completed_count();
    let completion_rate = sprint.completion_rate();
    let days_remaining = sprint.days_remaining(now);

    let analytics = SprintAnalytics {
        total_issues,
        completed_issues,
        in_progress_issues: sprint.count_with_status(&IssueStatus::InProgress),
        todo_issues: sprint.count_with_status(&IssueStatus::Todo),
        completion_rate,
        days_remaining,
        burndown_data: generate_burndown(sprint, now),
        velocity_data: generate_velocity(sprint, all_sprints),
        issue_status_distribution: status_distribution(issues),
        sprint_health: assess_health(completion_rate, days_remaining).health,
    };

    tracing::debug!(
        sprint = sprint.id,
        total = analytics.total_issues,
        rate = analytics.completion_rate,
        health = %analytics.sprint_health,
        "computed sprint analytics"
    );

    analytics
}

/// Counts issues per distinct status string. Statuses with no issues are absent.
pub fn status_distribution(issues: &[Issue]) -> BTreeMap<String, usize> {
    let mut distribution = BTreeMap::new();
    for issue in issues {
        *distribution
            .entry(issue.status.as_str().to_string())
            .or_insert(0) += 1;
    }
    distribution
}

/// Analytics engine bound to a clock source.
///
/// Reads the clock once per computation so that every derived value in a
/// snapshot agrees on what "now" is.
#[derive(Debug, Default, Clone)]
pub struct SprintAnalyticsEngine<C: ClockSource = SystemClock> {
    clock: C,
}

impl SprintAnalyticsEngine<SystemClock> {
    /// Creates an engine reading the system clock.
    pub fn new() -> Self {
        Self::with_clock(SystemClock)
    }
}

impl<C: ClockSource> SprintAnalyticsEngine<C> {
    /// Creates an engine with a custom clock source.
    pub fn with_clock(clock: C) -> Self {
        SprintAnalyticsEngine { clock }
    }

    /// Computes the analytics snapshot for `sprint` against `all_sprints`.
    pub fn compute(&self, sprint: Option<&Sprint>, all_sprints: &[Sprint]) -> SprintAnalytics {
        compute_analytics(sprint, all_sprints, self.clock.now())
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
