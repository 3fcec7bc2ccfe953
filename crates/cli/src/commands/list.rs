// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use chrono::{DateTime, Utc};
use zyro_core::clock::ClockSource;
use zyro_core::{sort_sprints, SortDirection, SortField, Sprint, SprintFilter, SprintSummary};

use crate::cli::{DataArgs, NowArgs, OutputFormat};
use crate::colors;
use crate::config::Settings;
use crate::display::format_summary_line;
use crate::error::Result;

use super::{load_sprints, resolve_clock, to_json};

/// How the list is narrowed and ordered.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    pub filter: SprintFilter,
    pub sort: Option<SortField>,
    pub direction: SortDirection,
}

impl ListOptions {
    /// Build options from raw flag values. The sort field is validated here.
    pub fn from_args(
        query: Option<String>,
        project: Option<i64>,
        status: Option<String>,
        sort: Option<String>,
        desc: bool,
    ) -> Result<Self> {
        let sort = sort.map(|s| s.parse::<SortField>()).transpose()?;
        Ok(ListOptions {
            filter: SprintFilter {
                query,
                project_id: project,
                status: status.map(Into::into),
            },
            sort,
            direction: if desc {
                SortDirection::Desc
            } else {
                SortDirection::Asc
            },
        })
    }
}

#[allow(clippy::too_many_arguments)]
pub fn run(
    settings: &Settings,
    query: Option<String>,
    project: Option<i64>,
    status: Option<String>,
    sort: Option<String>,
    desc: bool,
    data: DataArgs,
    now: NowArgs,
    output: Option<OutputFormat>,
) -> Result<()> {
    let options = ListOptions::from_args(query, settings.project(project), status, sort, desc)?;
    let sprints = load_sprints(settings, data)?;
    let now = resolve_clock(&now)?.now();

    let report = run_impl(
        &sprints,
        &options,
        now,
        settings.output(output),
        colors::should_colorize(),
    )?;
    if !report.is_empty() {
        println!("{}", report);
    }
    Ok(())
}

/// Filter, sort and summarize the sprints.
pub(crate) fn summaries(
    sprints: &[Sprint],
    options: &ListOptions,
    now: DateTime<Utc>,
) -> Vec<SprintSummary> {
    let mut selected = options.filter.apply(sprints);
    if let Some(field) = options.sort {
        sort_sprints(&mut selected, field, options.direction);
    }
    tracing::debug!(total = sprints.len(), shown = selected.len(), "listing sprints");

    selected
        .into_iter()
        .map(|s| SprintSummary::from_sprint(s, now))
        .collect()
}

pub(crate) fn run_impl(
    sprints: &[Sprint],
    options: &ListOptions,
    now: DateTime<Utc>,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let summaries = summaries(sprints, options, now);

    match format {
        OutputFormat::Json => to_json(&summaries),
        OutputFormat::Text => Ok(summaries
            .iter()
            .map(|s| format_summary_line(s, color))
            .collect::<Vec<_>>()
            .join("\n")),
    }
}

#[cfg(test)]
#[path = "list_tests.rs"]
mod tests;
