//! Command definitions
//!
//! Represents validated shell commands.

use crate::storage::Row;

/// A parsed and validated command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Append a row
    Insert(Row),

    /// Read every row
    Select,

    /// Flush and end the session (`.exit`)
    Exit,
}

impl Command {
    /// Short name for logging
    pub fn name(&self) -> &'static str {
        match self {
            Command::Insert(_) => "insert",
            Command::Select => "select",
            Command::Exit => ".exit",
        }
    }
}
