//! Configuration for rowdb
//!
//! Centralized configuration with sensible defaults.

use std::path::PathBuf;

use crate::storage::TABLE_MAX_PAGES;

/// Main configuration for a rowdb session
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Directory holding database files
    /// Internal structure:
    ///   {data_dir}/
    ///     └── {name}.db      (flat row file, one per database name)
    pub data_dir: PathBuf,

    /// Page ceiling of the table; capacity is `ROWS_PER_PAGE * max_pages`
    pub max_pages: usize,

    /// fsync the database file after the final flush on close
    pub sync_on_close: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("db"),
            max_pages: TABLE_MAX_PAGES,
            sync_on_close: true,
        }
    }
}

impl Config {
    /// File extension appended to every database name
    pub const FILE_EXTENSION: &'static str = "db";

    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Path of the file backing database `name`
    pub fn database_path(&self, name: &str) -> PathBuf {
        self.data_dir
            .join(name)
            .with_extension(Self::FILE_EXTENSION)
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the data directory
    pub fn data_dir(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.data_dir = path.into();
        self
    }

    /// Set the maximum number of pages the table may use
    pub fn max_pages(mut self, pages: usize) -> Self {
        self.config.max_pages = pages;
        self
    }

    /// Enable or disable fsync on close
    pub fn sync_on_close(mut self, sync: bool) -> Self {
        self.config.sync_on_close = sync;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
