//! Statement parser
//!
//! Parses and validates shell lines into commands. Lines are raw bytes:
//! tokens are split on ASCII whitespace and field values are kept as given.

use bytes::Bytes;

use crate::error::{DbError, Result};
use crate::storage::{Row, EMAIL_SIZE, USERNAME_SIZE};

use super::Command;

/// Prefix marking a meta-command
const META_PREFIX: u8 = b'.';

// =============================================================================
// Line Parsing
// =============================================================================

/// Parse one input line into a command
///
/// Surrounding whitespace is ignored. Lines starting with `.` are
/// meta-commands; everything else is a statement.
pub fn parse(line: impl AsRef<[u8]>) -> Result<Command> {
    let line = trim(line.as_ref());

    if line.first() == Some(&META_PREFIX) {
        return parse_meta_command(line);
    }

    let mut tokens = line
        .split(u8::is_ascii_whitespace)
        .filter(|token| !token.is_empty());

    match tokens.next() {
        Some(b"insert") => parse_insert(tokens),
        Some(b"select") if line == b"select" => Ok(Command::Select),
        _ => Err(DbError::UnrecognizedStatement(lossy(line))),
    }
}

fn parse_meta_command(line: &[u8]) -> Result<Command> {
    match line {
        b".exit" => Ok(Command::Exit),
        _ => Err(DbError::UnrecognizedMetaCommand(lossy(line))),
    }
}

// =============================================================================
// Insert Validation
// =============================================================================

/// Validate the tokens after `insert`
///
/// Checks run in order and the first failure is returned. Tokens after
/// the email are ignored.
fn parse_insert<'a>(mut tokens: impl Iterator<Item = &'a [u8]>) -> Result<Command> {
    let (id, username, email) = match (tokens.next(), tokens.next(), tokens.next()) {
        (Some(id), Some(username), Some(email)) => (id, username, email),
        _ => return Err(DbError::SyntaxError),
    };

    // Anything that is not a positive i32 reads as a non-positive id
    let id = parse_id(id).ok_or(DbError::IdMustBePositive)?;

    if username.len() > USERNAME_SIZE {
        return Err(DbError::StringTooLong);
    }

    if email.len() > EMAIL_SIZE {
        return Err(DbError::StringTooLong);
    }

    Ok(Command::Insert(Row::new(
        id,
        Bytes::copy_from_slice(username),
        Bytes::copy_from_slice(email),
    )))
}

// =============================================================================
// Private Helpers
// =============================================================================

fn parse_id(token: &[u8]) -> Option<i32> {
    std::str::from_utf8(token)
        .ok()?
        .parse::<i32>()
        .ok()
        .filter(|&id| id > 0)
}

fn trim(line: &[u8]) -> &[u8] {
    let start = line
        .iter()
        .position(|b| !b.is_ascii_whitespace())
        .unwrap_or(line.len());
    let end = line
        .iter()
        .rposition(|b| !b.is_ascii_whitespace())
        .map_or(start, |last| last + 1);
    &line[start..end]
}

fn lossy(line: &[u8]) -> String {
    String::from_utf8_lossy(line).into_owned()
}
