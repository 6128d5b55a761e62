//! Configuration integration tests.
//!
//! These tests verify config discovery, format parsing, and precedence
//! from an end-to-end perspective using the compiled binary. Tests use
//! `info --json` and generated pages to assert actual config values, not
//! just process success.

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// Run `info --json` from a directory and parse the JSON output.
fn info_json(dir: &std::path::Path) -> Value {
    let output = cmd()
        .args(["-C", dir.to_str().unwrap(), "info", "--json"])
        .output()
        .expect("failed to run command");
    assert!(
        output.status.success(),
        "command failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    serde_json::from_slice(&output.stdout).expect("invalid JSON output")
}

/// Run `generate` from `dir` on `input.txt` and return the written page.
fn generate_in(dir: &std::path::Path, extra: &[&str]) -> String {
    cmd()
        .args(["-C", dir.to_str().unwrap(), "generate", "input.txt", "cloud.html"])
        .args(extra)
        .assert()
        .success();
    fs::read_to_string(dir.join("cloud.html")).unwrap()
}

// =============================================================================
// Config File Discovery
// =============================================================================

#[test]
fn runs_without_config_file() {
    let tmp = TempDir::new().unwrap();
    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "info");
    assert_eq!(json["config"]["default_count"], 10);
    assert_eq!(json["config"]["font_min"], 11);
    assert_eq!(json["config"]["font_max"], 48);
    assert!(
        json["config"]["config_file"].is_null(),
        "no config file should be reported"
    );
}

#[test]
fn discovers_dotfile_config_in_current_dir() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".tagcloud.toml"), "default_count = 4\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["default_count"], 4);
    let reported = json["config"]["config_file"].as_str().unwrap();
    assert!(
        reported.ends_with(".tagcloud.toml"),
        "should report dotfile: {reported}"
    );
}

#[test]
fn discovers_config_in_parent_directory() {
    let tmp = TempDir::new().unwrap();
    let sub_dir = tmp.path().join("nested").join("deep");
    fs::create_dir_all(&sub_dir).unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "font_max = 36\n").unwrap();

    let json = info_json(&sub_dir);

    assert_eq!(json["config"]["font_max"], 36);
}

#[test]
fn regular_name_overrides_dotfile() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".tagcloud.toml"), "font_max = 30\n").unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "font_max = 40\n").unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["font_max"], 40);
}

// =============================================================================
// Config Format Parsing
// =============================================================================

#[test]
fn yaml_config_is_parsed() {
    let tmp = TempDir::new().unwrap();
    fs::write(
        tmp.path().join("tagcloud.yaml"),
        "log_level: warn\nstylesheets:\n  - site.css\n",
    )
    .unwrap();

    let json = info_json(tmp.path());

    assert_eq!(json["config"]["log_level"], "warn");
    assert_eq!(json["config"]["stylesheets"][0], "site.css");
}

#[test]
fn explicit_config_flag_wins() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".tagcloud.toml"), "default_count = 4\n").unwrap();
    let explicit = tmp.path().join("custom.json");
    fs::write(&explicit, r#"{"default_count": 7}"#).unwrap();

    let output = cmd()
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "--config",
            explicit.to_str().unwrap(),
            "info",
            "--json",
        ])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["default_count"], 7);
}

#[test]
fn malformed_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "font_min = \"big\"\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load configuration"));
}

// =============================================================================
// Config Applied to Generation
// =============================================================================

#[test]
fn config_sets_default_count_and_fonts() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "a a a b b c\n").unwrap();
    fs::write(
        tmp.path().join("tagcloud.toml"),
        "default_count = 2\nfont_min = 20\nfont_max = 30\n",
    )
    .unwrap();

    let html = generate_in(tmp.path(), &[]);

    assert!(html.contains("Top 2 words in input.txt"));
    assert!(html.contains("class=\"f30\" title=\"count: 3\">a<"));
    assert!(html.contains("class=\"f20\" title=\"count: 2\">b<"));
    assert!(!html.contains(">c<"));
}

#[test]
fn cli_flags_override_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "a a b\n").unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "font_max = 30\n").unwrap();

    let html = generate_in(tmp.path(), &["--font-max", "60"]);

    assert!(html.contains("class=\"f60\" title=\"count: 2\">a<"));
}

#[test]
fn config_stylesheets_replace_defaults() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "hello world\n").unwrap();
    fs::write(
        tmp.path().join("tagcloud.toml"),
        "stylesheets = [\"print.css\"]\n",
    )
    .unwrap();

    let html = generate_in(tmp.path(), &[]);

    assert!(html.contains("<link href=\"print.css\""));
    assert!(!html.contains("tagcloud.css"));
}

#[test]
fn config_separators_change_tokenizing() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "new-york new-york boston\n").unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "separators = \" \"\n").unwrap();

    let html = generate_in(tmp.path(), &[]);

    assert!(html.contains("title=\"count: 2\">new-york<"));
}

#[test]
fn inverted_font_range_in_config_fails() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "a b\n").unwrap();
    fs::write(
        tmp.path().join("tagcloud.toml"),
        "font_min = 40\nfont_max = 12\n",
    )
    .unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "generate", "input.txt", "cloud.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("must not exceed"));

    assert!(!tmp.path().join("cloud.html").exists());
}

#[test]
fn input_limit_from_config() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "far too many bytes here\n").unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "max_input_bytes = 8\n").unwrap();

    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "generate", "input.txt", "cloud.html"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Environment Variables
// =============================================================================

#[test]
fn env_var_overrides_config_file() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("tagcloud.toml"), "default_count = 4\n").unwrap();

    let output = cmd()
        .env("TAGCLOUD_DEFAULT_COUNT", "9")
        .args(["-C", tmp.path().to_str().unwrap(), "info", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();

    assert_eq!(json["config"]["default_count"], 9);
}

#[test]
fn log_path_env_writes_jsonl() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join("input.txt"), "a b\n").unwrap();
    let log_path = tmp.path().join("logs").join("run.jsonl");

    cmd()
        .env("TAGCLOUD_LOG_PATH", &log_path)
        .env_remove("RUST_LOG")
        .args([
            "-C",
            tmp.path().to_str().unwrap(),
            "generate",
            "input.txt",
            "cloud.html",
        ])
        .assert()
        .success();

    let log = fs::read_to_string(&log_path).unwrap();
    assert!(log.contains("tag cloud written"));
}
