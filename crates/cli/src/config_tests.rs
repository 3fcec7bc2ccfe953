// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

use super::*;
use tempfile::TempDir;

fn write_config(dir: &Path, content: &str) -> PathBuf {
    let path = dir.join(CONFIG_FILE_NAME);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_full_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(
        temp.path(),
        "data = \"sprints.json\"\noutput = \"json\"\nproject = 3\n",
    );

    let config = Config::load(&path).unwrap();
    assert_eq!(config.data, Some(PathBuf::from("sprints.json")));
    assert_eq!(config.output, Some(OutputFormat::Json));
    assert_eq!(config.project, Some(3));
}

#[test]
fn test_load_empty_config() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "");
    assert_eq!(Config::load(&path).unwrap(), Config::default());
}

#[test]
fn test_load_rejects_unknown_key() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "prefix = \"wk\"\n");
    let err = Config::load(&path).unwrap_err();
    assert!(err.to_string().contains("failed to parse"));
}

#[test]
fn test_load_missing_file() {
    let temp = TempDir::new().unwrap();
    let err = Config::load(&temp.path().join(CONFIG_FILE_NAME)).unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[test]
fn test_find_config_walks_up() {
    let temp = TempDir::new().unwrap();
    let expected = write_config(temp.path(), "");
    let nested = temp.path().join("a").join("b");
    fs::create_dir_all(&nested).unwrap();

    assert_eq!(find_config(&nested), Some(expected));
}

#[test]
fn test_discover_explicit_path() {
    let temp = TempDir::new().unwrap();
    let path = write_config(temp.path(), "project = 9\n");

    let settings = Settings::discover(Some(&path)).unwrap();
    assert_eq!(settings.config.project, Some(9));
    assert_eq!(settings.base_dir.as_deref(), Some(temp.path()));
}

#[test]
fn test_discover_explicit_missing_path_fails() {
    let temp = TempDir::new().unwrap();
    assert!(Settings::discover(Some(&temp.path().join("nope.toml"))).is_err());
}

#[test]
fn test_data_path_flag_wins() {
    let settings = Settings {
        config: Config {
            data: Some(PathBuf::from("configured.json")),
            ..Config::default()
        },
        base_dir: Some(PathBuf::from("/project")),
    };
    let path = settings
        .resolve_data(Some(PathBuf::from("flag.json")))
        .unwrap();
    assert_eq!(path, PathBuf::from("flag.json"));
}

#[test]
fn test_data_path_relative_to_config_dir() {
    let settings = Settings {
        config: Config {
            data: Some(PathBuf::from("exports/sprints.json")),
            ..Config::default()
        },
        base_dir: Some(PathBuf::from("/project")),
    };
    assert_eq!(
        settings.resolve_data(None).unwrap(),
        PathBuf::from("/project/exports/sprints.json")
    );
}

#[test]
fn test_data_path_absolute_config_value() {
    let settings = Settings {
        config: Config {
            data: Some(PathBuf::from("/shared/sprints.json")),
            ..Config::default()
        },
        base_dir: Some(PathBuf::from("/project")),
    };
    assert_eq!(
        settings.resolve_data(None).unwrap(),
        PathBuf::from("/shared/sprints.json")
    );
}

#[test]
fn test_data_path_missing() {
    let err = Settings::default().resolve_data(None).unwrap_err();
    assert!(matches!(err, Error::NoDataFile));
}

#[test]
fn test_output_and_project_precedence() {
    let settings = Settings {
        config: Config {
            output: Some(OutputFormat::Json),
            project: Some(4),
            ..Config::default()
        },
        base_dir: None,
    };
    assert_eq!(settings.output(None), OutputFormat::Json);
    assert_eq!(settings.output(Some(OutputFormat::Text)), OutputFormat::Text);
    assert_eq!(Settings::default().output(None), OutputFormat::Text);
    assert_eq!(settings.project(None), Some(4));
    assert_eq!(settings.project(Some(1)), Some(1));
}
