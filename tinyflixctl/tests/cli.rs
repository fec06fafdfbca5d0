use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

const CATALOG: &str = r#"[
  {
    "id": "0190a6f2-0000-7000-8000-000000000001",
    "title": "Big Buck Bunny",
    "description": "A giant rabbit takes revenge",
    "tags": ["animation", "comedy"],
    "duration_seconds": 596.0,
    "view_count": 1000000000,
    "rating": 4.5,
    "published_at": "2024-01-10T00:00:00Z"
  },
  {
    "id": "0190a6f2-0000-7000-8000-000000000002",
    "title": "Sintel",
    "description": "A girl searches for her dragon",
    "tags": ["animation", "fantasy"],
    "duration_seconds": 888.0,
    "view_count": 250000,
    "rating": 4.8,
    "published_at": "2024-03-01T00:00:00Z"
  },
  {
    "id": "0190a6f2-0000-7000-8000-000000000003",
    "title": "Lecture Recording",
    "tags": ["education"],
    "duration_seconds": 3725.0,
    "view_count": 1200,
    "rating": 3.0,
    "published_at": "2023-11-20T00:00:00Z"
  }
]"#;

fn workspace() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(dir.path().join("catalog.json"), CATALOG).unwrap();
    dir
}

fn stdout_lines(output: &[u8]) -> Vec<String> {
    String::from_utf8_lossy(output)
        .lines()
        .map(str::to_string)
        .collect()
}

#[test]
fn help_lists_subcommands() {
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("catalog"))
        .stdout(predicate::str::contains("format-time"))
        .stdout(predicate::str::contains("check-config"));
}

#[test]
fn format_time_switches_layout_at_an_hour() {
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.args(["format-time", "3725"])
        .assert()
        .success()
        .stdout("1:02:05\n");

    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.args(["format-time", "0"]).assert().success().stdout("0:00\n");
}

#[test]
fn format_time_rejects_negative_input() {
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.args(["format-time", "-5"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("non-negative"));
}

#[test]
fn catalog_sorted_by_rating() {
    let dir = workspace();
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    let output = cmd
        .current_dir(dir.path())
        .env_remove("TINYFLIX_CONFIG_PATH")
        .env_remove("TINYFLIX_CONFIG_JSON")
        .args(["catalog", "--file", "catalog.json", "--sort", "rating"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 3);
    assert!(lines[0].starts_with("Sintel\t14:48"), "{lines:?}");
    assert!(
        lines[1].starts_with("Big Buck Bunny\t9:56\t1B views"),
        "{lines:?}"
    );
    assert!(lines[2].starts_with("Lecture Recording\t1:02:05"), "{lines:?}");
}

#[test]
fn catalog_search_and_popular_filter() {
    let dir = workspace();
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    let output = cmd
        .current_dir(dir.path())
        .env_remove("TINYFLIX_CONFIG_PATH")
        .env_remove("TINYFLIX_CONFIG_JSON")
        .args([
            "catalog",
            "--file",
            "catalog.json",
            "--query",
            "ANIMATION",
            "--filter",
            "popular",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    // Catalog median is 250K views; only the animation title above it remains
    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1, "{lines:?}");
    assert!(lines[0].starts_with("Big Buck Bunny"));
}

#[test]
fn catalog_json_output() {
    let dir = workspace();
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    let output = cmd
        .current_dir(dir.path())
        .env_remove("TINYFLIX_CONFIG_PATH")
        .env_remove("TINYFLIX_CONFIG_JSON")
        .args([
            "catalog",
            "--file",
            "catalog.json",
            "--query",
            "lecture",
            "--json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let rows: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let rows = rows.as_array().unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["duration"], "1:02:05");
    assert_eq!(rows[0]["views"], "1.2K");
}

#[test]
fn catalog_respects_config_cap() {
    let dir = workspace();
    let config = "[catalog]\nrecent_limit = 1\n";
    fs::write(dir.path().join("tinyflix.toml"), config).unwrap();
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    let output = cmd
        .current_dir(dir.path())
        .env_remove("TINYFLIX_CONFIG_PATH")
        .env_remove("TINYFLIX_CONFIG_JSON")
        .args(["catalog", "--file", "catalog.json", "--filter", "recent"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let lines = stdout_lines(&output);
    assert_eq!(lines.len(), 1);
    assert!(lines[0].starts_with("Sintel"));
}

#[test]
fn missing_catalog_fails() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.current_dir(dir.path())
        .env_remove("TINYFLIX_CONFIG_PATH")
        .env_remove("TINYFLIX_CONFIG_JSON")
        .args(["catalog", "--file", "absent.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read catalog"));
}

#[test]
fn check_config_reports_source_and_warnings() {
    let dir = TempDir::new().unwrap();
    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.env_remove("TINYFLIX_CONFIG_PATH")
        .env("TINYFLIX_CONFIG_JSON", r#"{"catalog":{"popular_limit":0}}"#)
        .args(["check-config", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("source: $TINYFLIX_CONFIG_JSON"))
        .stdout(predicate::str::contains(
            "warning: catalog.popular_limit is 0",
        ));

    let mut cmd = cargo_bin_cmd!("tinyflixctl");
    cmd.env_remove("TINYFLIX_CONFIG_PATH")
        .env_remove("TINYFLIX_CONFIG_JSON")
        .args(["check-config", "--root"])
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("source: built-in defaults"))
        .stdout(predicate::str::contains("no warnings"));
}
