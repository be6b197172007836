//! Binary-level checks that never reach the terminal UI.

use std::process::Command;
use tempfile::TempDir;

fn layerview_cmd() -> Command {
    Command::new(env!("CARGO_BIN_EXE_layerview"))
}

#[test]
fn help_lists_options() {
    let output = layerview_cmd()
        .arg("--help")
        .output()
        .expect("Failed to execute command");

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("--url"));
    assert!(stdout.contains("--config"));
}

#[test]
fn version_matches_the_package() {
    let output = layerview_cmd()
        .arg("--version")
        .output()
        .expect("Failed to execute command");

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn invalid_url_exits_with_error() {
    let output = layerview_cmd()
        .arg("--url")
        .arg("ftp://example.com")
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Error: Config validation failed"));
}

#[test]
fn unreadable_config_exits_with_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.toml");
    std::fs::write(&path, "[api\n").unwrap();

    let output = layerview_cmd()
        .arg("--config")
        .arg(&path)
        .output()
        .expect("Failed to execute command");

    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to parse config file"));
}
