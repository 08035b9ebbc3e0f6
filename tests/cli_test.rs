use std::path::PathBuf;

use assert_cmd::Command;
use predicates::prelude::*;

fn temp_prefs(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("fareweight-cli-{}-{}.json", name, std::process::id()))
}

fn cmd(prefs_name: &str) -> Command {
    let mut c = Command::new(assert_cmd::cargo_bin!("fareweight"));
    c.env("FAREWEIGHT_PREFS", temp_prefs(prefs_name));
    c
}

#[test]
fn top_level_help() {
    cmd("help")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Rank flights by effective cost against your travel preferences",
        ))
        .stdout(predicate::str::contains("search"))
        .stdout(predicate::str::contains("prefs"))
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("fareweight search -f EWR -t SFO"));
}

#[test]
fn top_level_version() {
    cmd("version")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("fareweight 0.2.0"));
}

#[test]
fn search_requires_a_route_without_input() {
    cmd("noroute")
        .args(["search", "-t", "SFO", "-d", "2026-03-15"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("--from is required"));
}

#[test]
fn search_rejects_bad_airport_code() {
    cmd("badairport")
        .args(["search", "-f", "EW", "-t", "SFO", "-d", "2026-03-15"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid airport code"));
}

#[test]
fn search_rejects_bad_date() {
    cmd("baddate")
        .args(["search", "-f", "EWR", "-t", "SFO", "-d", "03-15-2026"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid date"));
}

#[test]
fn search_renders_a_table() {
    cmd("table")
        .args(["search", "-f", "EWR", "-t", "SFO", "-d", "2026-03-15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Effective"))
        .stdout(predicate::str::contains("Jet Lag"));
}

#[test]
fn search_json_exposes_the_scored_fields() {
    cmd("json")
        .args(["search", "-f", "EWR", "-t", "SFO", "-d", "2026-03-15", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"effective_cost\""))
        .stdout(predicate::str::contains("\"total_penalty\""))
        .stdout(predicate::str::contains("\"travel_time\""));
}

#[test]
fn compact_top_one_prints_a_single_line() {
    cmd("compact")
        .args([
            "search", "-f", "EWR", "-t", "SFO", "-d", "2026-03-15", "--compact", "--top", "1",
        ])
        .assert()
        .success()
        .stdout(predicate::function(|out: &str| out.lines().count() == 1))
        .stdout(predicate::str::contains("eff $"));
}

#[test]
fn nonstop_only_hides_connections() {
    cmd("nonstop")
        .args([
            "search", "-f", "EWR", "-t", "SFO", "-d", "2026-03-15", "--compact", "--nonstop-only",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains(" stop ").not());
}

#[test]
fn prefs_reset_then_show() {
    let prefs_file = temp_prefs("reset-show");
    let _ = std::fs::remove_file(&prefs_file);

    cmd("reset-show")
        .args(["prefs", "reset"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Preferences reset to defaults"));
    assert!(prefs_file.exists());

    cmd("reset-show")
        .args(["prefs", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"home_airport\": \"EWR\""));

    let _ = std::fs::remove_file(&prefs_file);
}

#[test]
fn prefs_path_honors_the_env_override() {
    let prefs_file = temp_prefs("path");
    cmd("path")
        .args(["prefs", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(prefs_file.display().to_string()));
}

#[test]
fn corrupt_prefs_file_fails_with_parse_error() {
    let prefs_file = temp_prefs("corrupt");
    std::fs::write(&prefs_file, "{not json").expect("write succeeds");

    cmd("corrupt")
        .args(["search", "-f", "EWR", "-t", "SFO", "-d", "2026-03-15"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("not valid JSON"));

    let _ = std::fs::remove_file(&prefs_file);
}
