//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs against a
//! payload fixture on disk, so no network or configuration is needed.

use std::io::Write;
use std::process::Command;

const FIXTURE: &str = r#"{
    "items": [
        {"type": "event", "id": "e1", "title": "Standup",
         "start": "2024-03-04T09:00:00Z", "end": "2024-03-04T10:00:00Z"},
        {"type": "event", "id": "e2", "title": "Planning",
         "start": "2024-03-04T09:30:00Z", "end": "2024-03-04T10:30:00Z"},
        {"type": "time_entry", "id": "w1", "description": "Deep work",
         "start": "2024-03-04T11:00:00Z", "stop": "2024-03-04T12:00:00Z"}
    ]
}"#;

/// Run a CLI command and return output.
fn run_cli(args: &[&str]) -> (i32, String, String) {
    let output = Command::new("cargo")
        .args(["run", "-p", "timetracker-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (code, stdout, stderr)
}

fn fixture_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(FIXTURE.as_bytes()).expect("write fixture");
    file
}

#[test]
fn test_day_json_output() {
    let fixture = fixture_file();
    let (code, stdout, _) = run_cli(&[
        "day",
        "--date",
        "2024-03-04",
        "--input",
        fixture.path().to_str().unwrap(),
        "--json",
    ]);

    assert_eq!(code, 0, "day command failed");
    let view: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    assert_eq!(view["total_columns"], 2);
    assert_eq!(view["blocks"].as_array().unwrap().len(), 3);
}

#[test]
fn test_day_table_output() {
    let fixture = fixture_file();
    let (code, stdout, _) = run_cli(&[
        "day",
        "--date",
        "2024-03-04",
        "--input",
        fixture.path().to_str().unwrap(),
    ]);

    assert_eq!(code, 0, "day command failed");
    assert!(stdout.contains("Standup"));
    assert!(stdout.contains("2 columns"));
}

#[test]
fn test_week_json_output() {
    let fixture = fixture_file();
    let (code, stdout, _) = run_cli(&[
        "week",
        "--date",
        "2024-03-06",
        "--input",
        fixture.path().to_str().unwrap(),
        "--json",
    ]);

    assert_eq!(code, 0, "week command failed");
    let view: serde_json::Value = serde_json::from_str(&stdout).expect("JSON output");
    // 2024-03-06 is a Wednesday; the week starts on Monday the 4th.
    assert_eq!(view["week_start"], "2024-03-04");
    assert_eq!(view["days"].as_array().unwrap().len(), 7);
    assert_eq!(view["days"][0]["blocks"].as_array().unwrap().len(), 3);
}

#[test]
fn test_missing_input_file_fails() {
    let (code, _, stderr) = run_cli(&[
        "day",
        "--date",
        "2024-03-04",
        "--input",
        "/nonexistent/payload.json",
    ]);

    assert_ne!(code, 0);
    assert!(stderr.contains("error:"));
}
