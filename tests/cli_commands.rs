//! Tests that drive the `leavedesk` binary against a throwaway data dir.

use std::path::Path;
use std::process::{Command, Output};

use tempfile::TempDir;

fn leavedesk(dir: &Path, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_leavedesk"))
        .arg("--config")
        .arg(dir.join("none.toml"))
        .arg("--data-dir")
        .arg(dir)
        .args(args)
        .env("RUST_LOG", "off")
        .output()
        .expect("Failed to execute command")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_help_lists_commands() {
    let output = Command::new(env!("CARGO_BIN_EXE_leavedesk"))
        .arg("--help")
        .output()
        .expect("Failed to execute command");
    let text = stdout(&output);
    assert!(text.contains("signup"));
    assert!(text.contains("requests"));
    assert!(text.contains("--data-dir"));
}

#[test]
fn test_signup_persists_across_runs() {
    let dir = TempDir::new().unwrap();

    let output = leavedesk(dir.path(), &["signup", "--name", "Ann", "--email", "a@x.com", "--password", "pw"]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("Signed up as Ann <a@x.com>"));
    assert!(dir.path().join("root.json").exists());

    let output = leavedesk(dir.path(), &["whoami"]);
    assert!(output.status.success());
    assert_eq!(stdout(&output).trim(), "Ann <a@x.com>");

    let output = leavedesk(dir.path(), &["logout"]);
    assert_eq!(stdout(&output).trim(), "Signed out");

    let output = leavedesk(dir.path(), &["whoami"]);
    assert_eq!(stdout(&output).trim(), "Not signed in");
}

#[test]
fn test_duplicate_signup_exits_with_error() {
    let dir = TempDir::new().unwrap();
    let args = ["signup", "--name", "Ann", "--email", "a@x.com", "--password", "pw"];
    assert!(leavedesk(dir.path(), &args).status.success());

    let output = leavedesk(dir.path(), &args);
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Email already exists"), "stderr: {stderr}");

    let output = leavedesk(dir.path(), &["users"]);
    assert_eq!(stdout(&output).lines().count(), 1);
}

#[test]
fn test_request_add_then_list() {
    let dir = TempDir::new().unwrap();

    let output = leavedesk(dir.path(), &["request", "add", "--date", "2025-06-02", "--type", "Sick"]);
    assert!(output.status.success());
    let added = stdout(&output);
    assert!(added.contains("2025-06-02\tSick\tPending"), "stdout: {added}");

    let output = leavedesk(dir.path(), &["requests"]);
    assert_eq!(stdout(&output), added);

    let output = leavedesk(dir.path(), &["summary"]);
    let text = stdout(&output);
    assert!(text.contains("Total: 30  Taken: 12  Remaining: 18"));
    assert!(text.contains("Requests: 1  Pending: 1"));
}

#[test]
fn test_purge_removes_files() {
    let dir = TempDir::new().unwrap();
    leavedesk(dir.path(), &["signup", "--name", "Ann", "--email", "a@x.com", "--password", "pw"]);
    assert!(dir.path().join("root.json").exists());

    let output = leavedesk(dir.path(), &["purge"]);
    assert!(output.status.success());
    assert!(!dir.path().join("root.json").exists());
}
