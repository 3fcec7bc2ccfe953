// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]

use super::*;
use yare::parameterized;

#[parameterized(
    sprint_not_found = { Error::SprintNotFound(42), "42" },
    invalid_sort_field = { Error::InvalidSortField("velocity".into()), "velocity" },
    invalid_date = { Error::InvalidDate("yesterday".into()), "yesterday" },
)]
fn error_display_contains(err: Error, expected: &str) {
    assert!(err.to_string().contains(expected));
}

#[test]
fn error_invalid_record_display() {
    let err = Error::InvalidRecord {
        line: 3,
        reason: "missing field `id`".into(),
    };
    let msg = err.to_string();
    assert!(msg.starts_with("line 3:"));
    assert!(msg.contains("missing field"));
}

#[test]
fn error_invalid_sort_field_lists_fields() {
    let msg = Error::InvalidSortField("x".into()).to_string();
    assert!(msg.contains("progress"));
}

#[test]
fn error_from_io() {
    let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "file not found");
    let err: Error = io_err.into();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn error_from_json() {
    let json_err = serde_json::from_str::<()>("invalid").unwrap_err();
    let err: Error = json_err.into();
    assert!(matches!(err, Error::Json(_)));
}
