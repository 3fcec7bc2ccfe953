// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

pub mod analytics;
pub mod board;
pub mod list;
#[cfg(test)]
#[path = "mod_tests.rs"]
pub mod testing;

use serde::Serialize;
use zyro_core::clock::{ClockSource, FixedClock, SystemClock};
use zyro_core::dates;
use zyro_core::records;
use zyro_core::Sprint;

use crate::cli::{DataArgs, NowArgs};
use crate::config::Settings;
use crate::error::Result;

/// Load sprint records from the resolved data file.
pub fn load_sprints(settings: &Settings, data: DataArgs) -> Result<Vec<Sprint>> {
    let path = settings.data_path(data.data)?;
    tracing::debug!(path = %path.display(), "reading sprint records");
    Ok(records::read_sprints(&path)?)
}

/// Pin the reference instant for one command: `--now` if given, else the
/// system time read once.
pub fn resolve_clock(now: &NowArgs) -> Result<FixedClock> {
    match now.now.as_deref() {
        Some(raw) => Ok(FixedClock::new(dates::parse_required(raw)?)),
        None => Ok(FixedClock::new(SystemClock.now())),
    }
}

/// Serialize a value as pretty JSON.
pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
