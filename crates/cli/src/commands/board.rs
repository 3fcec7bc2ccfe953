// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

use zyro_core::{group_by_status, Sprint, SprintFilter};

use crate::cli::{DataArgs, OutputFormat};
use crate::colors;
use crate::config::Settings;
use crate::display::format_board;
use crate::error::Result;

use super::{load_sprints, to_json};

pub fn run(
    settings: &Settings,
    project: Option<i64>,
    data: DataArgs,
    output: Option<OutputFormat>,
) -> Result<()> {
    let sprints = load_sprints(settings, data)?;
    let report = run_impl(
        &sprints,
        settings.project(project),
        settings.output(output),
        colors::should_colorize(),
    )?;
    println!("{}", report);
    Ok(())
}

pub(crate) fn run_impl(
    sprints: &[Sprint],
    project: Option<i64>,
    format: OutputFormat,
    color: bool,
) -> Result<String> {
    let filter = SprintFilter {
        project_id: project,
        ..SprintFilter::default()
    };
    let board = group_by_status(filter.apply(sprints));

    match format {
        OutputFormat::Json => to_json(&board),
        OutputFormat::Text => Ok(format_board(&board, color)),
    }
}

#[cfg(test)]
#[path = "board_tests.rs"]
mod tests;
