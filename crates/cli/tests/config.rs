// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

mod common;
use common::*;

#[test]
fn config_in_parent_directory_supplies_defaults() {
    let (temp, _) = fixture();
    write_file(
        &temp,
        "zyro.toml",
        "data = \"sprints.json\"\noutput = \"json\"\nproject = 2\n",
    );
    let nested = temp.path().join("docs").join("notes");
    std::fs::create_dir_all(&nested).unwrap();

    let output = zyro_in(&temp).current_dir(&nested).arg("list").output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let ids: Vec<i64> = value
        .as_array()
        .unwrap()
        .iter()
        .map(|s| s["id"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 5]);
}

#[test]
fn flags_override_config() {
    let (temp, _) = fixture();
    write_file(&temp, "zyro.toml", "data = \"sprints.json\"\noutput = \"json\"\nproject = 2\n");

    zyro_in(&temp)
        .args(["list", "-p", "1", "-o", "text"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("1 (SPR-001): Sprint One"));
}

#[test]
fn explicit_config_path() {
    let (temp, _) = fixture();
    let config = write_file(&temp, "team/zyro.toml", "data = \"../sprints.json\"\n");

    zyro_in(&temp)
        .args(["board", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("In Progress (1)"));
}

#[test]
fn user_config_is_used_as_fallback() {
    let (temp, data) = fixture();
    write_file(
        &temp,
        ".config/zyro/config.toml",
        &format!("data = {:?}\n", path_arg(&data)),
    );
    let elsewhere = TempDir::new().unwrap();

    zyro_in(&temp)
        .current_dir(elsewhere.path())
        .arg("board")
        .assert()
        .success()
        .stdout(predicate::str::contains("Completed (3)"));
}

#[test]
fn malformed_config_fails() {
    let temp = TempDir::new().unwrap();
    write_file(&temp, "zyro.toml", "output = [\n");

    zyro_in(&temp)
        .arg("board")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error: config error: failed to parse"));
}
