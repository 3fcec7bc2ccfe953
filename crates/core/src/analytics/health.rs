// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Qualitative sprint health.
//!
//! Expected progress follows a fixed fourteen-day cadence: 0% fourteen or
//! more days out, rising linearly to 100% on the due date. Actual progress
//! is the completion rate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Sprint length assumed by the expected-progress curve, regardless of the
/// sprint's real duration.
pub const HEALTH_CADENCE_DAYS: f64 = 14.0;

/// Slack below expected progress that still counts as on track.
const ON_TRACK_MARGIN: f64 = 10.0;

/// Slack below expected progress that counts as at risk rather than behind.
const AT_RISK_MARGIN: f64 = 25.0;

/// Qualitative verdict on a sprint's progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SprintHealth {
    OnTrack,
    AtRisk,
    Behind,
}

impl SprintHealth {
    /// Returns the string representation used on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            SprintHealth::OnTrack => "on-track",
            SprintHealth::AtRisk => "at-risk",
            SprintHealth::Behind => "behind",
        }
    }
}

impl fmt::Display for SprintHealth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A health verdict together with the expectation it was measured against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HealthAssessment {
    pub health: SprintHealth,
    /// Expected completion percentage; `None` when there is no deadline.
    pub expected_progress: Option<f64>,
    pub actual_progress: u32,
}

/// Classifies sprint health from the completion rate and days remaining.
///
/// With no deadline there is nothing to be behind on, so the verdict is
/// on track.
pub fn assess_health(completion_rate: u32, days_remaining: Option<i64>) -> HealthAssessment {
    let Some(days) = days_remaining else {
        return HealthAssessment {
            health: SprintHealth::OnTrack,
            expected_progress: None,
            actual_progress: completion_rate,
        };
    };

    let expected = expected_progress(days);
    let actual = f64::from(completion_rate);

    let health = if actual >= expected - ON_TRACK_MARGIN {
        SprintHealth::OnTrack
    } else if actual >= expected - AT_RISK_MARGIN {
        SprintHealth::AtRisk
    } else {
        SprintHealth::Behind
    };

    HealthAssessment {
        health,
        expected_progress: Some(expected),
        actual_progress: completion_rate,
    }
}

fn expected_progress(days_remaining: i64) -> f64 {
    if days_remaining <= 0 {
        return 100.0;
    }
    (100.0 - (days_remaining as f64 / HEALTH_CADENCE_DAYS) * 100.0).max(0.0)
}

#[cfg(test)]
#[path = "health_tests.rs"]
mod tests;
