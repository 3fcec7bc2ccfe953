// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Lenient parsing of the date-like strings carried by sprint and issue records.
//!
//! Records arrive with dates in several shapes (`2026-03-05`,
//! `2026-03-05T10:30:00Z`, `2026-03-05 10:30:00`). Everything is interpreted
//! in UTC. A string that matches none of the accepted shapes is treated as
//! if the field were unset.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeDelta, Utc};

use crate::error::{Error, Result};

/// Milliseconds in one calendar day.
pub const DAY_MS: i64 = 24 * 60 * 60 * 1000;

const NAIVE_DATETIME_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Years representable with four digits, as in RFC 3339.
const MIN_YEAR: i32 = 0;
const MAX_YEAR: i32 = 9999;

/// Parses a date-like string into a UTC instant.
///
/// Bare dates resolve to midnight UTC. Returns `None` for empty or
/// unrecognized input, and for signed or extended years outside 0000-9999.
pub fn parse_instant(raw: &str) -> Option<DateTime<Utc>> {
    parse_any(raw.trim()).filter(|dt| (MIN_YEAR..=MAX_YEAR).contains(&dt.year()))
}

fn parse_any(raw: &str) -> Option<DateTime<Utc>> {
    if raw.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for format in NAIVE_DATETIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(naive.and_utc());
        }
    }

    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Parses an optional date-like field, treating unparseable values as unset.
pub fn parse_optional(raw: Option<&str>) -> Option<DateTime<Utc>> {
    raw.and_then(parse_instant)
}

/// Parses a user-supplied instant, reporting unrecognized input as an error.
pub fn parse_required(raw: &str) -> Result<DateTime<Utc>> {
    parse_instant(raw).ok_or_else(|| Error::InvalidDate(raw.to_string()))
}

/// Whole days covered by `delta`, rounded towards positive infinity.
///
/// Negative spans round towards zero, so half a day overdue is `0` and a
/// day and a half overdue is `-1`.
pub fn ceil_days(delta: TimeDelta) -> i64 {
    let ms = delta.num_milliseconds();
    let whole = ms / DAY_MS;
    if ms % DAY_MS > 0 {
        whole + 1
    } else {
        whole
    }
}

/// Formats a calendar day as `YYYY-MM-DD`.
pub fn iso_day(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Formats a calendar day for display, e.g. `Mar 5, 2026`.
pub fn display_day(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

#[cfg(test)]
#[path = "dates_tests.rs"]
mod tests;
