// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use crate::issue::{Issue, IssueStatus};
use crate::sprint::SprintStatus;
use chrono::TimeZone;
use yare::parameterized;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 10, 12, 0, 0).unwrap()
}

fn sprint(start: Option<&str>, end: Option<&str>, issues: Vec<Issue>) -> Sprint {
    Sprint::new(1, "Sprint 1", SprintStatus::InProgress)
        .with_dates(start, end)
        .with_issues(issues)
}

fn todo(id: i64) -> Issue {
    Issue::new(id, "open", IssueStatus::Todo)
}

fn done_on(id: i64, updated_at: &str) -> Issue {
    Issue::new(id, "done", IssueStatus::Completed).with_updated_at(updated_at)
}

#[parameterized(
    no_dates = { None, None },
    start_only = { Some("2026-03-01"), None },
    end_only = { None, Some("2026-03-11") },
    garbage_start = { Some("someday"), Some("2026-03-11") },
    same_day = { Some("2026-03-01"), Some("2026-03-01") },
    reversed = { Some("2026-03-11"), Some("2026-03-01") },
    extended_years = { Some("-262000-01-01"), Some("+262000-01-01") },
)]
fn burndown_empty_without_positive_span(start: Option<&str>, end: Option<&str>) {
    let s = sprint(start, end, vec![todo(1)]);
    assert!(generate_burndown(&s, now()).is_empty());
}

#[test]
fn burndown_empty_without_issues() {
    let s = sprint(Some("2026-03-01"), Some("2026-03-11"), vec![]);
    assert!(generate_burndown(&s, now()).is_empty());
}

#[test]
fn burndown_has_one_point_per_day_inclusive() {
    let s = sprint(Some("2026-03-01"), Some("2026-03-11"), vec![todo(1), todo(2)]);
    let points = generate_burndown(&s, now());

    assert_eq!(points.len(), 11);
    assert_eq!(points[0].date, "2026-03-01");
    assert_eq!(points[10].date, "2026-03-11");
}

#[test]
fn burndown_partial_days_round_up() {
    let s = sprint(
        Some("2026-03-01T12:00:00Z"),
        Some("2026-03-04T00:00:00Z"),
        vec![todo(1)],
    );
    let dates: Vec<String> = generate_burndown(&s, now()).into_iter().map(|p| p.date).collect();
    assert_eq!(dates, vec!["2026-03-01", "2026-03-02", "2026-03-03", "2026-03-04"]);
}

#[test]
fn burndown_ideal_decays_linearly_to_zero() {
    let issues = (1..=4).map(todo).collect();
    let s = sprint(Some("2026-03-01"), Some("2026-03-11"), issues);
    let points = generate_burndown(&s, now());

    assert_eq!(points[0].ideal, 4.0);
    assert!(points.last().unwrap().ideal.abs() < 1e-9);
    for pair in points.windows(2) {
        let drop = pair[0].ideal - pair[1].ideal;
        assert!(drop >= 0.0);
        assert!((drop - 0.4).abs() < 1e-9, "uneven step {drop}");
    }
}

#[test]
fn burndown_actual_counts_completions_by_day() {
    let s = sprint(
        Some("2026-03-01"),
        Some("2026-03-11"),
        vec![
            done_on(1, "2026-03-03T09:00:00Z"),
            done_on(2, "2026-03-05T18:00:00Z"),
            Issue::new(3, "done, no timestamp", IssueStatus::Completed),
            Issue::new(4, "started", IssueStatus::InProgress).with_updated_at("2026-03-02"),
        ],
    );
    let actual: Vec<usize> = generate_burndown(&s, now()).iter().map(|p| p.actual).collect();

    // 03-01 .. 03-10 are today or past, 03-11 is in the future.
    assert_eq!(actual, vec![4, 4, 3, 3, 2, 2, 2, 2, 2, 2, 4]);
}

#[test]
fn burndown_future_days_report_full_count() {
    let s = sprint(
        Some("2026-04-01"),
        Some("2026-04-05"),
        vec![done_on(1, "2026-03-01"), todo(2)],
    );
    let points = generate_burndown(&s, now());

    assert_eq!(points.len(), 5);
    assert!(points.iter().all(|p| p.actual == 2));
}

#[test]
fn burndown_actual_stays_within_bounds() {
    let issues = vec![
        done_on(1, "2026-02-01"),
        done_on(2, "2026-02-01"),
        done_on(3, "2026-03-02"),
    ];
    let s = sprint(Some("2026-03-01"), Some("2026-03-15"), issues);

    for point in generate_burndown(&s, now()) {
        assert!(point.actual <= 3);
    }
}

#[test]
fn burndown_completed_before_start_burns_from_day_zero() {
    let s = sprint(
        Some("2026-03-01"),
        Some("2026-03-03"),
        vec![done_on(1, "2026-02-20"), todo(2)],
    );
    let points = generate_burndown(&s, now());
    assert_eq!(points[0].actual, 1);
}
