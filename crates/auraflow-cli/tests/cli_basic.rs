//! Basic CLI E2E tests.
//!
//! Tests invoke the built binary with `AURAFLOW_HOME` pointed at a fresh
//! temporary directory so no real configuration is touched.

use std::path::Path;
use std::process::Command;

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(home: &Path, args: &[&str]) -> (String, String, i32) {
    let output = Command::new(env!("CARGO_BIN_EXE_auraflow"))
        .args(args)
        .env("AURAFLOW_HOME", home)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

fn run_cli_success(home: &Path, args: &[&str]) -> String {
    let (stdout, stderr, code) = run_cli(home, args);
    assert_eq!(code, 0, "CLI command failed: {args:?}\n{stderr}");
    stdout
}

fn parse_json(json: &str) -> serde_json::Value {
    serde_json::from_str(json).expect("Failed to parse JSON output")
}

#[test]
fn test_curve_json_has_24_points() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["curve", "--readiness", "85", "--json"]);
    let points = parse_json(&out);
    let points = points.as_array().unwrap();
    assert_eq!(points.len(), 24);
    assert_eq!(points[0]["hour"], 0);
    assert_eq!(points[0]["source"], "prediction");
    assert!(points.iter().all(|p| {
        let level = p["energyLevel"].as_u64().unwrap();
        (10..=100).contains(&level)
    }));
}

#[test]
fn test_curve_rejects_out_of_range_readiness() {
    let home = tempfile::tempdir().unwrap();
    let (_, _, code) = run_cli(home.path(), &["curve", "--readiness", "101"]);
    assert_ne!(code, 0);
}

#[test]
fn test_curve_text_chart() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["curve", "--readiness", "40"]);
    assert!(out.contains("Readiness: 40 (low)"));
    assert!(out.contains("Energy Curve:"));
    assert!(out.contains("Peak:"));
}

#[test]
fn test_color_endpoints() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["color", "0"]);
    assert!(out.contains("rgb(239, 68, 68)"));
    assert!(out.contains("#EF4444"));

    let out = run_cli_success(home.path(), &["color", "150", "--json"]);
    let json = parse_json(&out);
    assert_eq!(json["hex"], "#6366F1");
    assert_eq!(json["tier"], "flow");

    // negative values clamp to the first stop
    let out = run_cli_success(home.path(), &["color", "-5"]);
    assert!(out.contains("#EF4444"));
}

#[test]
fn test_delta() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["delta", "2", "5"]);
    assert_eq!(out.lines().next(), Some("-50"));

    let out = run_cli_success(home.path(), &["delta", "0.5", "3"]);
    assert_eq!(out.lines().next(), Some("-7"));

    let out = run_cli_success(home.path(), &["delta", "1", "1"]);
    assert_eq!(out.lines().next(), Some("+15"));
}

#[test]
fn test_delta_rejects_invalid_intensity() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["delta", "1", "6"]);
    assert_eq!(code, 1);
    assert!(stderr.starts_with("error:"));

    let (_, _, code) = run_cli(home.path(), &["delta", "0", "3"]);
    assert_eq!(code, 1);
}

#[test]
fn test_timeline_json_for_sample_day() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["timeline", "--json"]);
    let snapshot = parse_json(&out);
    assert_eq!(snapshot["readiness"], 85);
    assert_eq!(snapshot["events"].as_array().unwrap().len(), 3);
    assert_eq!(snapshot["layouts"]["1"]["columns"], 1);
    assert_eq!(snapshot["layouts"]["1"]["widthPercent"], 100.0);
    assert!(snapshot["insight"].is_null());
}

#[test]
fn test_timeline_with_events_file() {
    let home = tempfile::tempdir().unwrap();
    let events = home.path().join("events.json");
    std::fs::write(
        &events,
        r#"[
            {"id": "a", "title": "Write", "startTime": 10, "duration": 2, "intensity": 4},
            {"id": "b", "title": "Call", "startTime": 11, "duration": 1, "intensity": 2}
        ]"#,
    )
    .unwrap();

    let out = run_cli_success(
        home.path(),
        &["timeline", "--events", events.to_str().unwrap(), "--json"],
    );
    let snapshot = parse_json(&out);
    assert_eq!(snapshot["layouts"]["a"]["columns"], 2);
    assert_eq!(snapshot["layouts"]["a"]["column"], 0);
    assert_eq!(snapshot["layouts"]["b"]["column"], 1);
    assert_eq!(snapshot["layouts"]["b"]["offsetPercent"], 50.0);
}

#[test]
fn test_timeline_rejects_off_grid_and_duplicate_events() {
    let home = tempfile::tempdir().unwrap();
    let events = home.path().join("events.json");
    let bad_files = [
        r#"[{"id": "a", "title": "x", "startTime": 30.25, "duration": -2, "intensity": 3}]"#,
        r#"[
            {"id": "x", "title": "A", "startTime": 9, "duration": 1, "intensity": 3},
            {"id": "x", "title": "B", "startTime": 9, "duration": 1, "intensity": 3}
        ]"#,
    ];
    for content in bad_files {
        std::fs::write(&events, content).unwrap();
        let (stdout, stderr, code) =
            run_cli(home.path(), &["timeline", "--events", events.to_str().unwrap(), "--json"]);
        assert_eq!(code, 1, "accepted {content}");
        assert!(stdout.is_empty());
        assert!(stderr.starts_with("error:"));
    }
}

#[test]
fn test_read_only_commands_leave_no_config_behind() {
    let root = tempfile::tempdir().unwrap();
    let home = root.path().join("home");
    run_cli_success(&home, &["color", "50"]);
    run_cli_success(&home, &["delta", "1", "3"]);
    run_cli_success(&home, &["completions", "zsh"]);
    run_cli_success(&home, &["timeline"]);
    run_cli_success(&home, &["curve"]);
    assert!(!home.exists());

    run_cli_success(&home, &["config", "list"]);
    assert!(home.join("config.toml").exists());
}

#[test]
fn test_timeline_rejects_invalid_events_file() {
    let home = tempfile::tempdir().unwrap();
    let events = home.path().join("events.json");
    std::fs::write(
        &events,
        r#"[{"id": "a", "title": "x", "startTime": 9, "duration": 1, "intensity": 9}]"#,
    )
    .unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["timeline", "--events", events.to_str().unwrap()]);
    assert_eq!(code, 1);
    assert!(stderr.contains("error:"));
}

#[test]
fn test_coach_reflow_and_apply() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["coach", "--readiness", "45", "--json"]);
    let insight = parse_json(&out);
    assert_eq!(insight["type"], "reflow");
    assert_eq!(insight["affectedEventIds"], serde_json::json!(["1", "3"]));

    let out = run_cli_success(
        home.path(),
        &["coach", "--readiness", "45", "--apply", "--json"],
    );
    let applied = parse_json(&out);
    assert_eq!(applied["outcome"]["kind"], "deferred");
    let events = applied["events"].as_array().unwrap();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0]["id"], "2");
}

#[test]
fn test_coach_nothing_at_good_readiness() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["coach", "--json"]);
    assert_eq!(out.trim(), "null");

    let out = run_cli_success(home.path(), &["coach", "--apply"]);
    assert!(out.contains("Nothing to apply."));
}

#[test]
fn test_wrapup_json() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["wrapup", "--json"]);
    let summary = parse_json(&out);
    assert_eq!(summary["totalCount"], 3);
    assert_eq!(summary["completedCount"], 0);
    assert_eq!(summary["dayType"], "rest_and_recovery");
}

#[test]
fn test_log_classifies_level() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["log", "95", "--json"]);
    let entry = parse_json(&out);
    assert_eq!(entry["level"], 95);
    assert_eq!(entry["tier"], "flow");
    assert!(entry["timestamp"].as_i64().unwrap() > 0);
}

#[test]
fn test_config_set_get_reset() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["config", "get", "planner.default_readiness"]);
    assert_eq!(out.trim(), "85");

    run_cli_success(home.path(), &["config", "set", "planner.default_readiness", "50"]);
    let out = run_cli_success(home.path(), &["config", "get", "planner.default_readiness"]);
    assert_eq!(out.trim(), "50");

    // the stored readiness now drives the default curve
    let out = run_cli_success(home.path(), &["curve"]);
    assert!(out.contains("Readiness: 50 (low)"));

    run_cli_success(home.path(), &["config", "reset"]);
    let out = run_cli_success(home.path(), &["config", "list"]);
    let config = parse_json(&out);
    assert_eq!(config["planner"]["default_readiness"], 85);
}

#[test]
fn test_config_unknown_key_fails() {
    let home = tempfile::tempdir().unwrap();
    let (_, stderr, code) = run_cli(home.path(), &["config", "get", "nope"]);
    assert_eq!(code, 1);
    assert!(stderr.contains("unknown key"));

    let (_, _, code) = run_cli(home.path(), &["config", "set", "logging.json", "maybe"]);
    assert_eq!(code, 1);
}

#[test]
fn test_completions() {
    let home = tempfile::tempdir().unwrap();
    let out = run_cli_success(home.path(), &["completions", "bash"]);
    assert!(out.contains("auraflow"));
}
