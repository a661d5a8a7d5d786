//! Error types for rowdb
//!
//! Provides a unified error type for all operations. The `Display` of each
//! variant is the exact line the shell prints for it.

use thiserror::Error;

/// Result type alias using DbError
pub type Result<T> = std::result::Result<T, DbError>;

/// Unified error type for rowdb operations
#[derive(Debug, Error)]
pub enum DbError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("Error: {0}")]
    IoFailure(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Statement Errors
    // -------------------------------------------------------------------------
    #[error("{0}: unrecognized keyword")]
    UnrecognizedStatement(String),

    #[error("{0}: command not found")]
    UnrecognizedMetaCommand(String),

    #[error("Syntax error. Could not parse statement.")]
    SyntaxError,

    #[error("ID must be positive.")]
    IdMustBePositive,

    // The wording is part of the shell's output contract.
    #[error("String to long.")]
    StringTooLong,

    // -------------------------------------------------------------------------
    // Capacity Errors
    // -------------------------------------------------------------------------
    #[error("Error: Table full.")]
    TableFull,

    #[error("Error: page {page_num} out of bounds (max {max_pages}).")]
    PageOutOfBounds { page_num: usize, max_pages: usize },

    // -------------------------------------------------------------------------
    // Storage Errors
    // -------------------------------------------------------------------------
    #[error("Error: {0}")]
    Storage(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Invalid database name.")]
    InvalidDatabaseName(String),

    #[error("Error: invalid configuration: {0}")]
    Config(String),
}

impl DbError {
    /// Whether the error prevents a session from being created or continued.
    ///
    /// Statement and capacity errors are reported and the shell keeps going.
    pub fn is_fatal(&self) -> bool {
        matches!(self, DbError::InvalidDatabaseName(_) | DbError::Config(_))
    }
}
