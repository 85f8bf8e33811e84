use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn pomo(home: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("pomo").unwrap();
    cmd.env("HOME", home.path())
        .env("NO_COLOR", "1")
        .env_remove("POMO_LOG");
    cmd
}

#[test]
fn config_path_is_under_home() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains(".pomo").and(predicate::str::contains("config.yaml")));
}

#[test]
fn config_show_json_reports_defaults() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["config", "show", "-o", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"work_minutes\": 25"))
        .stdout(predicate::str::contains("\"exists\": false"));
}

#[test]
fn config_show_sanitizes_zero_minutes() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".pomo");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.yaml"),
        "timer:\n  work_minutes: 0\n  short_break_minutes: 8\n",
    )
    .unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 min"))
        .stdout(predicate::str::contains("8 min"));
}

#[test]
fn config_init_refuses_overwrite_without_force() {
    let home = TempDir::new().unwrap();
    pomo(&home).args(["config", "init"]).assert().success();
    assert!(home.path().join(".pomo").join("config.yaml").exists());

    pomo(&home)
        .args(["config", "init"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));

    pomo(&home).args(["config", "init", "--force"]).assert().success();
}

#[test]
fn config_show_falls_back_on_bad_minutes() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".pomo");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(
        root.join("config.yaml"),
        "timer:\n  work_minutes: lots\n  long_break_minutes: -5\n",
    )
    .unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("25 min"))
        .stdout(predicate::str::contains("15 min"));
}

#[test]
fn malformed_config_is_an_error() {
    let home = TempDir::new().unwrap();
    let root = home.path().join(".pomo");
    std::fs::create_dir_all(&root).unwrap();
    std::fs::write(root.join("config.yaml"), "timer: [not, a, map]\n").unwrap();

    pomo(&home)
        .args(["config", "show"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error"));
}

#[test]
fn completions_for_known_shell() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pomo"));
}

#[test]
fn completions_for_unknown_shell_fails() {
    let home = TempDir::new().unwrap();
    pomo(&home)
        .args(["completions", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown shell"));
}

#[test]
fn run_rejects_zero_sessions() {
    let home = TempDir::new().unwrap();
    pomo(&home).args(["run", "-n", "0"]).assert().failure();
}
