// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Loading sprint records exported from the sprint source.
//!
//! Accepted shapes:
//! - a JSON array of sprints
//! - an API envelope `{"data": [...]}` (a `null` payload means no sprints)
//! - a single sprint object
//! - JSON Lines, one sprint per line, blank lines skipped

use std::fs;
use std::path::Path;

use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{Error, Result};
use crate::sprint::Sprint;

/// Reads all sprint records from `path`.
pub fn read_sprints(path: &Path) -> Result<Vec<Sprint>> {
    let text = fs::read_to_string(path)?;
    let sprints = parse_sprints(&text)?;
    tracing::debug!(path = %path.display(), count = sprints.len(), "loaded sprint records");
    Ok(sprints)
}

/// Parses sprint records from any of the accepted shapes.
///
/// Decoding errors keep the line and column of the offending record.
pub fn parse_sprints(text: &str) -> Result<Vec<Sprint>> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(Vec::new());
    }

    if trimmed.starts_with('[') {
        return Ok(serde_json::from_str(trimmed)?);
    }

    match serde_json::from_str::<Value>(trimmed) {
        Ok(Value::Object(map)) if is_envelope(&map) => {
            let envelope: Envelope = serde_json::from_str(trimmed)?;
            Ok(envelope.data.unwrap_or_default())
        }
        Ok(_) => Ok(vec![serde_json::from_str(trimmed)?]),
        Err(_) => parse_lines(trimmed),
    }
}

/// API response wrapper around a sprint list.
#[derive(Deserialize)]
struct Envelope {
    #[serde(default)]
    data: Option<Vec<Sprint>>,
}

// Sprints carry their own `data` column, so an envelope is an object with
// `data` but no `id`.
fn is_envelope(map: &Map<String, Value>) -> bool {
    map.contains_key("data") && !map.contains_key("id")
}

fn parse_lines(text: &str) -> Result<Vec<Sprint>> {
    let mut sprints = Vec::new();

    for (index, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let sprint = serde_json::from_str(line).map_err(|e| Error::InvalidRecord {
            line: index + 1,
            reason: e.to_string(),
        })?;
        sprints.push(sprint);
    }

    Ok(sprints)
}

/// Finds the sprint with the given id. When ids repeat, the last record wins.
pub fn find_sprint(sprints: &[Sprint], id: i64) -> Result<&Sprint> {
    sprints
        .iter()
        .rev()
        .find(|s| s.id == id)
        .ok_or(Error::SprintNotFound(id))
}

#[cfg(test)]
#[path = "records_tests.rs"]
mod tests;
