//! Session Module
//!
//! Binds one validated database name to its pager and table.
//!
//! ## Responsibilities
//! - Reject unsafe database names before touching the filesystem
//! - Open or create the backing file and recover the row count
//! - Route shell lines through the parser to the table
//! - Flush occupied pages and close the file on exit

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::{DbError, Result};
use crate::statement::{self, Command, ExecutionResult};
use crate::storage::{Pager, Table};

/// Validate a database name
///
/// Only ASCII letters and `_` are allowed, which rules out separators,
/// traversal, extensions and shell metacharacters.
pub fn validate_database_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphabetic() || c == '_');

    if valid {
        Ok(())
    } else {
        Err(DbError::InvalidDatabaseName(name.to_string()))
    }
}

/// An open database
///
/// ## Ownership
/// - The session exclusively owns the table, which owns the pager
/// - One session per file; concurrent access from another process is
///   not detected
pub struct Session {
    /// Session configuration
    config: Config,

    /// Validated database name
    name: String,

    /// Path of the backing file
    path: PathBuf,

    /// Table over the paged file
    table: Table,
}

impl Session {
    /// Open or create the database `name`
    ///
    /// On startup:
    /// 1. Validate the name (nothing is created for an invalid one)
    /// 2. Create the data directory if needed
    /// 3. Open the pager on `{data_dir}/{name}.db`
    /// 4. Recover the row count from the file length
    pub fn open(name: &str, config: Config) -> Result<Self> {
        validate_database_name(name)?;

        if config.max_pages == 0 {
            return Err(DbError::Config("max_pages must be at least 1".to_string()));
        }

        fs::create_dir_all(&config.data_dir)?;
        let path = config.database_path(name);

        let pager = Pager::open(&path, config.max_pages)?;
        let table = Table::open(pager, config.max_pages)?;

        tracing::info!(
            "Opened database {} at {} ({} rows, capacity {})",
            name,
            path.display(),
            table.row_count(),
            table.max_rows()
        );

        Ok(Self {
            config,
            name: name.to_string(),
            path,
            table,
        })
    }

    /// Parse and execute one shell line
    ///
    /// The line may hold any bytes; text fields are stored as given.
    pub fn execute(&mut self, line: impl AsRef<[u8]>) -> Result<ExecutionResult> {
        let command = statement::parse(line)?;
        self.execute_command(command)
    }

    /// Execute an already validated command
    pub fn execute_command(&mut self, command: Command) -> Result<ExecutionResult> {
        tracing::trace!("Executing {}", command.name());

        match command {
            Command::Insert(row) => {
                self.table.insert(&row)?;
                Ok(ExecutionResult::Inserted)
            }
            Command::Select => {
                if self.table.is_empty() {
                    return Ok(ExecutionResult::EmptyTable);
                }
                let rows = self.table.scan().collect::<Result<Vec<_>>>()?;
                Ok(ExecutionResult::Rows(rows))
            }
            Command::Exit => Ok(ExecutionResult::Exit),
        }
    }

    /// Flush occupied pages and close the file
    pub fn close(self) -> Result<()> {
        let row_count = self.table.row_count();
        self.table.close(self.config.sync_on_close)?;

        tracing::info!("Closed database {} ({} rows)", self.name, row_count);
        Ok(())
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn row_count(&self) -> usize {
        self.table.row_count()
    }

    pub fn max_rows(&self) -> usize {
        self.table.max_rows()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
