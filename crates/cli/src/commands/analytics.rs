// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use zyro_core::clock::ClockSource;
use zyro_core::records::find_sprint;
use zyro_core::{Sprint, SprintAnalyticsEngine};

use crate::cli::{DataArgs, NowArgs, OutputFormat};
use crate::colors;
use crate::config::Settings;
use crate::display::format_analytics;
use crate::error::Result;

use super::{load_sprints, resolve_clock, to_json};

pub fn run(
    settings: &Settings,
    sprint_id: i64,
    data: DataArgs,
    now: NowArgs,
    output: Option<OutputFormat>,
) -> Result<()> {
    let sprints = load_sprints(settings, data)?;
    let clock = resolve_clock(&now)?;
    let report = run_impl(
        &sprints,
        sprint_id,
        clock,
        settings.output(output),
        colors::should_colorize(),
    )?;
    println!("{}", report);
    Ok(())
}

pub(crate) fn run_impl<C: ClockSource>(
    sprints: &[Sprint],
    sprint_id: i64,
    clock: C,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let sprint = find_sprint(sprints, sprint_id)?;
    let analytics = SprintAnalyticsEngine::with_clock(clock).compute(Some(sprint), sprints);

    match format {
        OutputFormat::Json => to_json(&analytics),
        OutputFormat::Text => Ok(format_analytics(sprint, &analytics, color)),
    }
}

#[cfg(test)]
#[path = "analytics_tests.rs"]
mod tests;
