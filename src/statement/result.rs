//! Execution results
//!
//! Successful outcomes of running a command.

use crate::storage::Row;

/// Outcome of a successfully executed command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExecutionResult {
    /// The row was appended
    Inserted,

    /// Select found no rows at all
    EmptyTable,

    /// Select produced these rows, in insertion order
    Rows(Vec<Row>),

    /// The session should flush and terminate
    Exit,
}

impl ExecutionResult {
    /// Number of rows carried by a select result
    pub fn row_count(&self) -> usize {
        match self {
            ExecutionResult::Rows(rows) => rows.len(),
            _ => 0,
        }
    }
}
