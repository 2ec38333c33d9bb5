//! Smoke tests for the `backoffice` binary

use assert_cmd::Command;
use tempfile::TempDir;

fn backoffice(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("backoffice").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("RUST_LOG")
        .env("BACKOFFICE_DATABASE_URL", "sqlite::memory:")
        .env("BACKOFFICE_LOG_FORMAT", "pretty");
    cmd
}

#[test]
fn help_lists_subcommands() {
    let dir = TempDir::new().unwrap();
    let output = backoffice(&dir).arg("--help").output().unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    for command in ["serve", "migrate", "seed", "dashboard"] {
        assert!(stdout.contains(command), "missing {command}");
    }
}

#[test]
fn migrate_and_seed_run_against_sqlite() {
    let dir = TempDir::new().unwrap();

    backoffice(&dir).arg("migrate").assert().success();
    backoffice(&dir).arg("seed").assert().success();
}

#[test]
fn invalid_configuration_fails() {
    let dir = TempDir::new().unwrap();

    backoffice(&dir)
        .env("BACKOFFICE_API_BIND_ADDR", "not-an-addr")
        .arg("migrate")
        .assert()
        .failure();
}
