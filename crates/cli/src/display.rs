// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Text rendering for analytics, sprint lists and the status board.

use zyro_core::catalog::format_date_range;
use zyro_core::{Sprint, SprintAnalytics, SprintBoard, SprintSummary};

use crate::colors;

const NOT_SET: &str = "Not set";

/// Describe days remaining in words.
pub fn days_remaining_label(days: Option<i64>) -> String {
    match days {
        None => NOT_SET.to_string(),
        Some(0) => "ends today".to_string(),
        Some(1) => "1 day left".to_string(),
        Some(-1) => "ended 1 day ago".to_string(),
        Some(d) if d > 0 => format!("{} days left", d),
        Some(d) => format!("ended {} days ago", -d),
    }
}

/// Format the analytics report for one sprint.
pub fn format_analytics(sprint: &Sprint, analytics: &SprintAnalytics, color: bool) -> String {
    let mut lines = Vec::new();

    lines.push(format!(
        "Sprint {}: {} [{}]",
        sprint.id, sprint.name, sprint.status
    ));
    lines.push(format!(
        "  Dates: {}",
        colors::context(
            &format_date_range(sprint.start_date.as_deref(), sprint.end_date.as_deref()),
            color
        )
    ));
    lines.push(format!(
        "  Issues: {} total, {} completed, {} in progress, {} todo",
        analytics.total_issues,
        analytics.completed_issues,
        analytics.in_progress_issues,
        analytics.todo_issues
    ));
    lines.push(format!("  Completion: {}%", analytics.completion_rate));
    lines.push(format!(
        "  Days remaining: {}",
        days_remaining_label(analytics.days_remaining)
    ));
    lines.push(format!(
        "  Health: {}",
        colors::health(analytics.sprint_health, color)
    ));

    if !analytics.burndown_data.is_empty() {
        lines.push(String::new());
        lines.push(colors::header("Burndown:", color));
        for point in &analytics.burndown_data {
            lines.push(format!(
                "  {}  ideal {:>6.1}  actual {:>3}",
                point.date, point.ideal, point.actual
            ));
        }
    }

    if !analytics.velocity_data.is_empty() {
        lines.push(String::new());
        lines.push(colors::header("Velocity:", color));
        let width = analytics
            .velocity_data
            .iter()
            .map(|v| v.sprint_name.chars().count())
            .max()
            .unwrap_or(0);
        for point in &analytics.velocity_data {
            lines.push(format!(
                "  {:<width$}  {}/{} ({}%)",
                point.sprint_name,
                point.completed_issues,
                point.total_issues,
                point.completion_rate,
                width = width
            ));
        }
    }

    if !analytics.issue_status_distribution.is_empty() {
        lines.push(String::new());
        lines.push(colors::header("Status distribution:", color));
        for (status, count) in &analytics.issue_status_distribution {
            lines.push(format!("  {}: {}", status, count));
        }
    }

    lines.join("\n")
}

/// Format one sprint summary as a single list line.
pub fn format_summary_line(summary: &SprintSummary, color: bool) -> String {
    let key = summary
        .sprint_id
        .as_deref()
        .map(|k| format!(" ({})", k))
        .unwrap_or_default();
    format!(
        "{}{}: {} [{}]  {}/{} ({}%)  {}  {}",
        summary.id,
        key,
        summary.name,
        summary.status,
        summary.completed_issues,
        summary.total_issues,
        summary.progress,
        colors::context(&summary.date_range, color),
        days_remaining_label(summary.days_remaining)
    )
}

/// Format the board as labelled columns.
pub fn format_board(board: &SprintBoard<'_>, color: bool) -> String {
    let mut lines = Vec::new();

    for column in &board.columns {
        lines.push(colors::header(
            &format!("{} ({})", column.label, column.sprints.len()),
            color,
        ));
        for sprint in &column.sprints {
            lines.push(format!("  {}: {}", sprint.id, sprint.name));
        }
    }

    lines.join("\n")
}

#[cfg(test)]
#[path = "display_tests.rs"]
mod tests;
