// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Completed-versus-total throughput across recent sprints.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use crate::sprint::{Sprint, SprintStatus};

/// How many completed sibling sprints the trend shows alongside the current one.
pub const MAX_VELOCITY_SIBLINGS: usize = 4;

/// Throughput of one sprint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VelocityPoint {
    pub sprint_id: i64,
    pub sprint_name: String,
    pub completed_issues: usize,
    pub total_issues: usize,
    pub completion_rate: u32,
}

impl VelocityPoint {
    /// Summarizes a sprint's throughput.
    pub fn from_sprint(sprint: &Sprint) -> Self {
        VelocityPoint {
            sprint_id: sprint.id,
            sprint_name: sprint.name.clone(),
            completed_issues: sprint.completed_count(),
            total_issues: sprint.issues.len(),
            completion_rate: sprint.completion_rate(),
        }
    }
}

/// Builds the velocity comparison for `current` against `all_sprints`.
///
/// The current sprint is always first. It is followed by the most recent
/// completed siblings that have issues (at most [`MAX_VELOCITY_SIBLINGS`]),
/// ordered oldest to newest. Recency is the end date, else the start date,
/// else the epoch; ties go to the higher id. Sprints repeated in
/// `all_sprints` are represented by their last occurrence.
pub fn generate_velocity(current: &Sprint, all_sprints: &[Sprint]) -> Vec<VelocityPoint> {
    let mut unique: HashMap<i64, &Sprint> = HashMap::with_capacity(all_sprints.len());
    for sprint in all_sprints {
        unique.insert(sprint.id, sprint);
    }

    let mut siblings: Vec<(i64, &Sprint)> = unique
        .into_values()
        .filter(|s| s.id != current.id)
        .filter(|s| s.status == SprintStatus::Completed && !s.issues.is_empty())
        .map(|s| (recency_key(s), s))
        .collect();

    tracing::debug!(
        sprint = current.id,
        candidates = siblings.len(),
        "velocity siblings"
    );

    siblings.sort_by(|(key_a, a), (key_b, b)| key_b.cmp(key_a).then_with(|| b.id.cmp(&a.id)));
    siblings.truncate(MAX_VELOCITY_SIBLINGS);
    siblings.reverse();

    std::iter::once(VelocityPoint::from_sprint(current))
        .chain(siblings.into_iter().map(|(_, s)| VelocityPoint::from_sprint(s)))
        .collect()
}

/// Milliseconds since the epoch used to rank sprints by recency.
fn recency_key(sprint: &Sprint) -> i64 {
    sprint
        .end()
        .or_else(|| sprint.start())
        .map(|dt| dt.timestamp_millis())
        .unwrap_or(0)
}

#[cfg(test)]
#[path = "velocity_tests.rs"]
mod tests;
