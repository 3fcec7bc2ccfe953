// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

// Allow unused items: test helpers are shared across multiple test binaries,
// and not every test file uses every helper.
#![allow(dead_code)]
#![allow(unused_imports)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use std::path::{Path, PathBuf};

pub use predicates::prelude::*;
pub use tempfile::TempDir;

/// Reference instant used by every time-dependent test.
pub const NOW: &str = "2026-03-10T12:00:00Z";

/// The `zyro` binary with an isolated environment.
pub fn zyro() -> Command {
    let mut cmd = cargo_bin_cmd!("zyro");
    cmd.env_remove("ZYRO_DATA")
        .env_remove("ZYRO_LOG")
        .env_remove("RUST_LOG")
        .env_remove("COLOR")
        .env("NO_COLOR", "1");
    cmd
}

/// `zyro` run inside `temp`, with the user config directory pointed into it.
pub fn zyro_in(temp: &TempDir) -> Command {
    let mut cmd = zyro();
    cmd.current_dir(temp.path())
        .env("HOME", temp.path())
        .env("XDG_CONFIG_HOME", temp.path().join(".config"));
    cmd
}

pub const SPRINTS_JSON: &str = r#"[
  {"id": 1, "sprint_id": "SPR-001", "name": "Sprint One", "status": "completed", "project_id": 1,
   "start_date": "2026-01-05", "end_date": "2026-01-18",
   "issues": [{"id": 1, "status": "completed"}, {"id": 2, "status": "completed"}]},
  {"id": 2, "sprint_id": "SPR-002", "name": "Sprint Two", "status": "completed", "project_id": 1,
   "start_date": "2026-01-19", "end_date": "2026-02-01",
   "issues": [{"id": 3, "status": "completed"}, {"id": 4, "status": "cancelled"}]},
  {"id": 3, "sprint_id": "SPR-003", "name": "Sprint Three", "status": "completed", "project_id": 2,
   "start_date": "2026-02-02", "end_date": "2026-02-15",
   "issues": [{"id": 5, "status": "completed"}]},
  {"id": 4, "sprint_id": "SPR-004", "name": "Sprint Four", "status": "in_progress", "project_id": 1,
   "start_date": "2026-02-28", "end_date": "2026-03-14",
   "issues": [
     {"id": 6, "status": "completed", "updated_at": "2026-03-02T10:00:00Z"},
     {"id": 7, "status": "in_progress"},
     {"id": 8, "status": "todo"},
     {"id": 9, "status": "todo"}
   ]},
  {"id": 5, "sprint_id": "SPR-005", "name": "Backlog Grooming", "status": "todo", "project_id": 2,
   "start_date": null, "end_date": null, "issues": null}
]"#;

/// Write a file into `temp` and return its path.
pub fn write_file(temp: &TempDir, name: &str, content: &str) -> PathBuf {
    let path = temp.path().join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(&path, content).unwrap();
    path
}

/// A temp directory holding `sprints.json` with the standard fixture.
pub fn fixture() -> (TempDir, PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = write_file(&temp, "sprints.json", SPRINTS_JSON);
    (temp, path)
}

/// Run a command expected to succeed and parse its stdout as JSON.
pub fn json_output(cmd: &mut Command) -> serde_json::Value {
    let output = cmd.output().unwrap();
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).unwrap()
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
