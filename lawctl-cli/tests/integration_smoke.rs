//! Smoke tests to verify command wiring and the database-free commands

use assert_cmd::Command;
use predicates::prelude::*;

// === Help Wiring ===

#[test]
fn test_top_level_help() {
    let mut cmd = Command::cargo_bin("lawctl").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("connect-db"))
        .stdout(predicate::str::contains("reset-db"))
        .stdout(predicate::str::contains("show-sql"));
}

#[test]
fn test_reset_db_help() {
    let mut cmd = Command::cargo_bin("lawctl").unwrap();
    cmd.arg("reset-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Skip the interactive confirmation"));
}

#[test]
fn test_init_db_help() {
    let mut cmd = Command::cargo_bin("lawctl").unwrap();
    cmd.arg("init-db").arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("existing tables are kept"));
}

// === Database-free Commands ===

#[test]
fn test_list_models_shows_all_tables_and_types() {
    let mut cmd = Command::cargo_bin("lawctl").unwrap();
    cmd.arg("list-models");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("📖 T_LAW"))
        .stdout(predicate::str::contains("📖 M_CATEGORY"))
        .stdout(predicate::str::contains("📖 M_PARTY"))
        .stdout(predicate::str::contains("📖 T_LAW_CATEGORY_MAP"))
        .stdout(predicate::str::contains("📖 T_PARTY_LAW_ROLE"))
        .stdout(predicate::str::contains("- title (VARCHAR(200))"))
        .stdout(predicate::str::contains("- id (CHAR(18))"));
}

#[test]
fn test_show_sql_previews_every_table() {
    let output = Command::cargo_bin("lawctl")
        .unwrap()
        .arg("show-sql")
        .output()
        .unwrap();
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();

    for name in [
        "M_CATEGORY",
        "M_PARTY",
        "T_LAW",
        "T_LAW_CATEGORY_MAP",
        "T_PARTY_LAW_ROLE",
    ] {
        assert!(stdout.contains(&format!("--- {name} ---")));
        assert!(stdout.contains(&format!("CREATE TABLE IF NOT EXISTS {name}")));
    }

    // Parents must be printed (and therefore created) before their
    // association tables.
    let pos = |needle: &str| stdout.find(needle).unwrap();
    assert!(pos("--- T_LAW ---") < pos("--- T_LAW_CATEGORY_MAP ---"));
    assert!(pos("--- M_PARTY ---") < pos("--- T_PARTY_LAW_ROLE ---"));
}

// === Failure Paths ===

#[test]
fn test_reset_db_refuses_without_yes_when_not_interactive() {
    // assert_cmd pipes stdio, so the command sees a non-interactive session
    // and must abort before opening any connection.
    let mut cmd = Command::cargo_bin("lawctl").unwrap();
    cmd.arg("reset-db");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("--yes"));
}

#[test]
fn test_connect_db_fails_loudly_when_unreachable() {
    let mut cmd = Command::cargo_bin("lawctl").unwrap();
    cmd.arg("connect-db")
        .env("DB_USER", "nobody")
        .env("DB_PASSWORD", "")
        .env("DB_HOST", "nonexistent.invalid")
        .env("DB_PORT", "3306")
        .env("DB_NAME", "lawctl_test");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("failed to connect"));
}
