//! Tests for the statement parser
//!
//! These tests verify:
//! - Recognized commands (insert, select, .exit)
//! - Unrecognized statements and meta-commands
//! - Insert validation order and field width boundaries
//! - Rendered error lines

use rowdb::statement::{parse, Command};
use rowdb::storage::{EMAIL_SIZE, USERNAME_SIZE};
use rowdb::{DbError, Row};

// =============================================================================
// Recognized Commands
// =============================================================================

#[test]
fn test_parse_insert() {
    let command = parse("insert 1 user_1 user_1@gmail.com").unwrap();

    assert_eq!(
        command,
        Command::Insert(Row::new(1, "user_1", "user_1@gmail.com"))
    );
}

#[test]
fn test_parse_insert_extra_whitespace() {
    let command = parse("  insert   7\tbob   bob@example.com  ").unwrap();

    assert_eq!(command, Command::Insert(Row::new(7, "bob", "bob@example.com")));
}

#[test]
fn test_parse_select() {
    assert_eq!(parse("select").unwrap(), Command::Select);
    assert_eq!(parse("select\n").unwrap(), Command::Select);
}

#[test]
fn test_parse_exit() {
    assert_eq!(parse(".exit").unwrap(), Command::Exit);
}

// =============================================================================
// Unrecognized Input
// =============================================================================

#[test]
fn test_parse_unrecognized_statement() {
    let result = parse("update 1 a b");

    match result {
        Err(DbError::UnrecognizedStatement(line)) => assert_eq!(line, "update 1 a b"),
        other => panic!("unexpected result: {:?}", other),
    }
}

#[test]
fn test_parse_select_with_arguments_is_unrecognized() {
    assert!(matches!(
        parse("select *"),
        Err(DbError::UnrecognizedStatement(_))
    ));
}

#[test]
fn test_parse_unrecognized_meta_command() {
    assert!(matches!(
        parse(".tables"),
        Err(DbError::UnrecognizedMetaCommand(_))
    ));
}

#[test]
fn test_parse_empty_line() {
    assert!(matches!(parse(""), Err(DbError::UnrecognizedStatement(_))));
}

// =============================================================================
// Insert Validation
// =============================================================================

#[test]
fn test_insert_missing_fields_is_syntax_error() {
    assert!(matches!(parse("insert"), Err(DbError::SyntaxError)));
    assert!(matches!(parse("insert 1"), Err(DbError::SyntaxError)));
    assert!(matches!(parse("insert 1 user"), Err(DbError::SyntaxError)));
}

#[test]
fn test_insert_non_numeric_id_must_be_positive() {
    assert!(matches!(
        parse("insert abc u e"),
        Err(DbError::IdMustBePositive)
    ));
    assert!(matches!(
        parse("insert 99999999999 u e"),
        Err(DbError::IdMustBePositive)
    ));
    assert!(matches!(
        parse("insert 1.5 u e"),
        Err(DbError::IdMustBePositive)
    ));
}

#[test]
fn test_insert_ignores_tokens_after_email() {
    let command = parse("insert 1 user user@x extra tokens").unwrap();

    assert_eq!(command, Command::Insert(Row::new(1, "user", "user@x")));
}

#[test]
fn test_insert_non_positive_id() {
    assert!(matches!(
        parse("insert -1 user user@gmail.com"),
        Err(DbError::IdMustBePositive)
    ));
    assert!(matches!(
        parse("insert 0 user user@gmail.com"),
        Err(DbError::IdMustBePositive)
    ));
}

#[test]
fn test_insert_max_id() {
    let command = parse(&format!("insert {} u e", i32::MAX)).unwrap();

    assert_eq!(command, Command::Insert(Row::new(i32::MAX, "u", "e")));
}

#[test]
fn test_username_boundary() {
    let ok = format!("insert 1 {} e", "a".repeat(USERNAME_SIZE));
    let too_long = format!("insert 1 {} e", "a".repeat(USERNAME_SIZE + 1));

    assert!(parse(&ok).is_ok());
    assert!(matches!(parse(&too_long), Err(DbError::StringTooLong)));
}

#[test]
fn test_email_boundary() {
    let ok = format!("insert 1 u {}", "a".repeat(EMAIL_SIZE));
    let too_long = format!("insert 1 u {}", "a".repeat(EMAIL_SIZE + 1));

    assert!(parse(&ok).is_ok());
    assert!(matches!(parse(&too_long), Err(DbError::StringTooLong)));
}

#[test]
fn test_length_is_measured_in_bytes() {
    // 17 two-byte characters: 17 chars but 34 bytes
    let username = "é".repeat(17);
    let line = format!("insert 1 {} e", username);

    assert!(matches!(parse(&line), Err(DbError::StringTooLong)));
}

#[test]
fn test_id_checked_before_string_lengths() {
    let line = format!(
        "insert -5 {} {}",
        "a".repeat(USERNAME_SIZE + 1),
        "b".repeat(EMAIL_SIZE + 1)
    );

    assert!(matches!(parse(&line), Err(DbError::IdMustBePositive)));
}

// =============================================================================
// Rendered Error Lines
// =============================================================================

#[test]
fn test_error_display_lines() {
    assert_eq!(DbError::IdMustBePositive.to_string(), "ID must be positive.");
    assert_eq!(DbError::StringTooLong.to_string(), "String to long.");
    assert_eq!(DbError::TableFull.to_string(), "Error: Table full.");
    assert_eq!(
        DbError::SyntaxError.to_string(),
        "Syntax error. Could not parse statement."
    );
    assert_eq!(
        DbError::InvalidDatabaseName("../x".to_string()).to_string(),
        "Invalid database name."
    );
    assert_eq!(
        DbError::UnrecognizedStatement("foo".to_string()).to_string(),
        "foo: unrecognized keyword"
    );
    assert_eq!(
        DbError::UnrecognizedMetaCommand(".foo".to_string()).to_string(),
        ".foo: command not found"
    );
}
