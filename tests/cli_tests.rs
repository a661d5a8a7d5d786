//! End-to-end tests for the rowdb binary
//!
//! These tests pipe scripts into the compiled shell and check its stdout,
//! covering the acceptance scenarios of the line protocol.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use rowdb::storage::{EMAIL_SIZE, USERNAME_SIZE};
use tempfile::TempDir;

// =============================================================================
// Helper Functions
// =============================================================================

fn run_script<T: AsRef<str>>(data_dir: &Path, name: &str, commands: &[T]) -> Command {
    let mut cmd = Command::cargo_bin("rowdb").expect("Failed to find binary");
    cmd.arg(name).arg("--data-dir").arg(data_dir);

    let input = commands
        .iter()
        .map(|c| format!("{}\n", c.as_ref()))
        .collect::<String>();
    cmd.write_stdin(input);
    cmd
}

fn stdout_lines(cmd: &mut Command) -> Vec<String> {
    let output = cmd.output().expect("Failed to run binary");
    assert!(output.status.success());
    String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(str::to_string)
        .collect()
}

// =============================================================================
// Protocol Tests
// =============================================================================

#[test]
fn test_exit() {
    let temp = TempDir::new().unwrap();

    run_script(temp.path(), "test_exit", &[".exit"])
        .assert()
        .success()
        .stdout("db > Bye.\n");
}

#[test]
fn test_select_from_empty_table() {
    let temp = TempDir::new().unwrap();

    run_script(temp.path(), "test_empty_table", &["select", ".exit"])
        .assert()
        .success()
        .stdout("db > Empty table.\nExecuted.\ndb > Bye.\n");
}

#[test]
fn test_insert_and_retrieve_row() {
    let temp = TempDir::new().unwrap();

    run_script(
        temp.path(),
        "test_insert_select",
        &["insert 1 user_1 user_1@gmail.com", "select", ".exit"],
    )
    .assert()
    .success()
    .stdout(
        [
            "db > Executed.",
            "db > (1, user_1, user_1@gmail.com)",
            "1 rows printed.",
            "Executed.",
            "db > Bye.",
            "",
        ]
        .join("\n"),
    );
}

#[test]
fn test_table_full() {
    let temp = TempDir::new().unwrap();
    let mut commands: Vec<String> = (1..=1549)
        .map(|i| format!("insert {} user{} user{}@example.com", i, i, i))
        .collect();
    commands.push(".exit".to_string());

    let lines = stdout_lines(&mut run_script(temp.path(), "test_table_full", &commands));

    assert_eq!(lines[lines.len() - 2], "db > Error: Table full.");
    assert_eq!(lines[lines.len() - 1], "db > Bye.");
    assert_eq!(lines[1400], "db > Executed.");
}

#[test]
fn test_max_length_strings() {
    let temp = TempDir::new().unwrap();
    let username = "a".repeat(USERNAME_SIZE);
    let email = "a".repeat(EMAIL_SIZE);

    run_script(
        temp.path(),
        "test_max_length",
        &[
            format!("insert 1 {} {}", username, email),
            "select".to_string(),
            ".exit".to_string(),
        ],
    )
    .assert()
    .success()
    .stdout(format!(
        "db > Executed.\ndb > (1, {}, {})\n1 rows printed.\nExecuted.\ndb > Bye.\n",
        username, email
    ));
}

#[test]
fn test_strings_too_long() {
    let temp = TempDir::new().unwrap();
    let username = "a".repeat(USERNAME_SIZE + 1);
    let email = "a".repeat(EMAIL_SIZE + 1);

    run_script(
        temp.path(),
        "test_string_too_long",
        &[
            format!("insert 1 {} {}", username, email),
            "select".to_string(),
            ".exit".to_string(),
        ],
    )
    .assert()
    .success()
    .stdout("db > String to long.\ndb > Empty table.\nExecuted.\ndb > Bye.\n");
}

#[test]
fn test_negative_id() {
    let temp = TempDir::new().unwrap();

    run_script(
        temp.path(),
        "test_negative_id",
        &["insert -1 user user@gmail.com", "select", ".exit"],
    )
    .assert()
    .success()
    .stdout("db > ID must be positive.\ndb > Empty table.\nExecuted.\ndb > Bye.\n");
}

// =============================================================================
// Startup Tests
// =============================================================================

#[test]
fn test_invalid_database_names() {
    let temp = TempDir::new().unwrap();
    let data_dir = temp.path().join("db");

    for name in ["../test_invalid_db_name", "/", "#", "=", "db.exe"] {
        let empty: [&str; 0] = [];
        run_script(&data_dir, name, &empty)
            .assert()
            .failure()
            .stdout("Invalid database name.\n");
    }

    assert!(!data_dir.exists());
    assert!(!temp.path().join("test_invalid_db_name.db").exists());
}

#[test]
fn test_missing_database_name() {
    Command::cargo_bin("rowdb")
        .expect("Failed to find binary")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

// =============================================================================
// Persistence Tests
// =============================================================================

#[test]
fn test_data_saved_after_closing() {
    let temp = TempDir::new().unwrap();

    run_script(
        temp.path(),
        "test_saved_data",
        &["insert 1 user user@gmail.com", ".exit"],
    )
    .assert()
    .success()
    .stdout("db > Executed.\ndb > Bye.\n");

    run_script(temp.path(), "test_saved_data", &["select", ".exit"])
        .assert()
        .success()
        .stdout("db > (1, user, user@gmail.com)\n1 rows printed.\nExecuted.\ndb > Bye.\n");

    assert!(temp.path().join("test_saved_data.db").exists());
}

#[test]
fn test_full_table_survives_restart() {
    let temp = TempDir::new().unwrap();
    let mut commands: Vec<String> = (1..=1401)
        .map(|i| format!("insert {} user{} person{}@example.com", i, i, i))
        .collect();
    commands.push(".exit".to_string());

    run_script(temp.path(), "test_restart", &commands)
        .assert()
        .success()
        .stdout(predicate::str::contains("Error").not());

    run_script(temp.path(), "test_restart", &["select", ".exit"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "(1401, user1401, person1401@example.com)\n1401 rows printed.",
        ));
}
