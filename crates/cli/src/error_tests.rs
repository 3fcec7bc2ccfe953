// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;

#[test]
fn test_error_sprint_not_found_display() {
    let msg = Error::SprintNotFound(42).to_string();
    assert!(msg.contains("sprint not found: 42"));
    assert!(msg.contains("zyro list"));
}

#[test]
fn test_error_no_data_file_display() {
    let msg = Error::NoDataFile.to_string();
    assert!(msg.contains("no sprint data file"));
    assert!(msg.contains("ZYRO_DATA"));
}

#[test]
fn test_error_config_display() {
    let err = Error::Config("failed to parse config: bad key".to_string());
    assert_eq!(err.to_string(), "config error: failed to parse config: bad key");
}

#[test]
fn test_from_core_sprint_not_found() {
    let err: Error = zyro_core::Error::SprintNotFound(7).into();
    assert!(matches!(err, Error::SprintNotFound(7)));
}

#[test]
fn test_from_core_invalid_record_keeps_line() {
    let err: Error = zyro_core::Error::InvalidRecord {
        line: 3,
        reason: "expected value".to_string(),
    }
    .into();
    assert_eq!(
        err.to_string(),
        "invalid sprint record at line 3: expected value"
    );
}

#[test]
fn test_from_core_invalid_sort_field_has_hint() {
    let err: Error = zyro_core::Error::InvalidSortField("size".to_string()).into();
    let msg = err.to_string();
    assert!(msg.contains("'size'"));
    assert!(msg.contains("hint: valid fields"));
}

#[test]
fn test_from_core_io() {
    let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
    let err: Error = zyro_core::Error::Io(io).into();
    assert!(matches!(err, Error::Io(_)));
}
