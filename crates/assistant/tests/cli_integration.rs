//! CLI integration tests for the assistant command-line interface.
//!
//! These tests verify:
//! - Help text is displayed correctly
//! - Argument parsing works as expected
//! - Profile management round-trips through the profiles file
//! - Invalid inputs are rejected before any request is sent
//!
//! Note: These tests do not require a running service.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Get a command for the assistant binary, isolated in its own config dir.
fn assistant(config_dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("assistant").unwrap();
    cmd.env("ASSISTANT_CONFIG_DIR", config_dir.path())
        .env_remove("ASSISTANT_PROFILE")
        .env_remove("ASSISTANT_SERVICE_URL")
        .env_remove("ASSISTANT_API_VERSION")
        .env_remove("ASSISTANT_API_KEY")
        .env_remove("ASSISTANT_WORKSPACE");
    cmd
}

fn config_dir() -> TempDir {
    tempfile::tempdir().unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// Help and Version Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_help_displays() {
    let dir = config_dir();
    assistant(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Assistant"))
        .stdout(predicate::str::contains("conversation workspaces"));
}

#[test]
fn test_version_displays() {
    let dir = config_dir();
    assistant(&dir)
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("assistant"));
}

#[test]
fn test_help_lists_subcommands() {
    let dir = config_dir();
    assistant(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("message"))
        .stdout(predicate::str::contains("chat"))
        .stdout(predicate::str::contains("workspaces"))
        .stdout(predicate::str::contains("intents"))
        .stdout(predicate::str::contains("entities"))
        .stdout(predicate::str::contains("dialog-nodes"))
        .stdout(predicate::str::contains("logs"))
        .stdout(predicate::str::contains("config"));
}

#[test]
fn test_help_lists_global_flags() {
    let dir = config_dir();
    assistant(&dir)
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--profile"))
        .stdout(predicate::str::contains("--service-url"))
        .stdout(predicate::str::contains("--api-version"))
        .stdout(predicate::str::contains("--workspace"))
        .stdout(predicate::str::contains("--json"));
}

#[test]
fn test_subcommand_help() {
    let dir = config_dir();
    assistant(&dir)
        .args(["intents", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("add-example"))
        .stdout(predicate::str::contains("counterexamples"));

    assistant(&dir)
        .args(["chat", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--resume"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Argument Parsing Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_unknown_subcommand_fails() {
    let dir = config_dir();
    assistant(&dir)
        .arg("frobnicate")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unrecognized subcommand"));
}

#[test]
fn test_missing_subcommand_fails() {
    let dir = config_dir();
    assistant(&dir).assert().failure();
}

#[test]
fn test_logs_all_parses_filter() {
    let dir = config_dir();
    assistant(&dir)
        .args(["logs", "all", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("--filter"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Profile Management Tests
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_get_profiles_empty() {
    let dir = config_dir();
    assistant(&dir)
        .args(["config", "get-profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles configured"));
}

#[test]
fn test_config_path_uses_config_dir() {
    let dir = config_dir();
    assistant(&dir)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("profiles.yaml"));
}

#[test]
fn test_set_profile_then_list() {
    let dir = config_dir();
    assistant(&dir)
        .args([
            "config",
            "set-profile",
            "dev",
            "--service-url",
            "http://localhost:9000/assistant",
            "-w",
            "ws-123",
            "--api-key-env",
            "DEV_KEY",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile \"dev\" created."))
        .stdout(predicate::str::contains("set as current profile"));

    assert!(dir.path().join("profiles.yaml").exists());

    assistant(&dir)
        .args(["config", "get-profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"))
        .stdout(predicate::str::contains("ws-123"))
        .stdout(predicate::str::contains("http://localhost:9000/assistant"));

    assistant(&dir)
        .args(["config", "current-profile"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dev"));

    assistant(&dir)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("api key from $DEV_KEY"));
}

#[test]
fn test_set_profile_ignores_environment_overrides() {
    let dir = config_dir();
    assistant(&dir)
        .env("ASSISTANT_WORKSPACE", "ws-from-env")
        .args([
            "config",
            "set-profile",
            "dev",
            "--service-url",
            "http://localhost:9000",
        ])
        .assert()
        .success();

    assistant(&dir)
        .env("ASSISTANT_SERVICE_URL", "http://env.example:1")
        .args(["config", "set-profile", "dev", "--timeout", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile \"dev\" modified."));

    assistant(&dir)
        .args(["config", "get-profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("http://localhost:9000"))
        .stdout(predicate::str::contains("env.example").not())
        .stdout(predicate::str::contains("ws-from-env").not());
}

#[test]
fn test_set_profile_requires_typed_service_url() {
    let dir = config_dir();
    assistant(&dir)
        .env("ASSISTANT_SERVICE_URL", "http://env.example:1")
        .args(["config", "set-profile", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--service-url is required"));
}

#[test]
fn test_set_profile_requires_service_url() {
    let dir = config_dir();
    assistant(&dir)
        .args(["config", "set-profile", "dev"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--service-url is required"));
}

#[test]
fn test_set_profile_rejects_two_auth_sources() {
    let dir = config_dir();
    assistant(&dir)
        .args([
            "config",
            "set-profile",
            "dev",
            "--service-url",
            "http://localhost:9000",
            "--api-key-env",
            "KEY",
            "--bearer-env",
            "TOKEN",
        ])
        .assert()
        .failure();
}

#[test]
fn test_use_unknown_profile_fails() {
    let dir = config_dir();
    assistant(&dir)
        .args(["config", "use-profile", "missing"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing"));
}

#[test]
fn test_delete_profile() {
    let dir = config_dir();
    assistant(&dir)
        .args([
            "config",
            "set-profile",
            "dev",
            "--service-url",
            "http://localhost:9000",
        ])
        .assert()
        .success();

    assistant(&dir)
        .args(["config", "delete-profile", "dev"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Profile \"dev\" deleted."));

    assistant(&dir)
        .args(["config", "get-profiles"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No profiles configured"));
}

// ─────────────────────────────────────────────────────────────────────────────
// Failures Before Any Request
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn test_message_without_workspace_fails() {
    let dir = config_dir();
    assistant(&dir)
        .args(["--service-url", "http://127.0.0.1:9", "message", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("no workspace selected"));
}

#[test]
fn test_message_with_bad_service_url_fails() {
    let dir = config_dir();
    assistant(&dir)
        .args(["--service-url", "not a url", "-w", "ws-1", "message", "hello"])
        .assert()
        .failure();
}

#[test]
fn test_unknown_profile_flag_fails() {
    let dir = config_dir();
    assistant(&dir)
        .args(["-p", "nope", "-w", "ws-1", "message", "hello"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope"));
}
