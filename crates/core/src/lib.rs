// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! zyro-core: Sprint analytics for the Zyro issue tracker
//!
//! This crate provides the sprint and issue records, lenient date handling,
//! the analytics engine (counts, burndown, velocity, status distribution,
//! sprint health) and the catalog helpers used by the `zyro` CLI.

pub mod analytics;
pub mod catalog;
pub mod clock;
pub mod dates;
pub mod error;
pub mod issue;
pub mod records;
pub mod sprint;

pub use analytics::{
    compute_analytics, BurndownPoint, HealthAssessment, SprintAnalytics, SprintAnalyticsEngine,
    SprintHealth, VelocityPoint,
};
pub use catalog::{
    group_by_status, sort_sprints, BoardColumn, SortDirection, SortField, SprintBoard,
    SprintFilter, SprintSummary,
};
pub use clock::{ClockSource, FixedClock, SystemClock};
pub use error::{Error, Result};
pub use issue::{Issue, IssueStatus};
pub use sprint::{Sprint, SprintStatus};
