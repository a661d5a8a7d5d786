//! # rowdb
//!
//! A single-file row store driven by a line-oriented shell:
//! - Fixed-schema rows (id, username, email) in fixed-width records
//! - Page cache over a flat file, flushed on clean shutdown
//! - Append-only inserts and full-table scans
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                        Shell (Repl)                         │
//! │                   one command per line                      │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//! ┌─────────────────────▼───────────────────────────────────────┐
//! │                        Session                              │
//! │          name validation / parse / execute / close          │
//! └─────────────────────┬───────────────────────────────────────┘
//!                       │
//!                       ▼
//!               ┌───────────────┐
//!               │     Table     │  row number → (page, offset)
//!               └───────┬───────┘
//!                       │
//!          ┌────────────┴────────────┐
//!          ▼                         ▼
//!   ┌─────────────┐          ┌─────────────┐
//!   │    Pager    │          │  Row codec  │
//!   │ (page cache)│          │ (291 bytes) │
//!   └──────┬──────┘          └─────────────┘
//!          ▼
//!    {data_dir}/{name}.db
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod storage;
pub mod statement;
pub mod session;
pub mod repl;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{DbError, Result};
pub use config::Config;
pub use session::Session;
pub use statement::{Command, ExecutionResult};
pub use storage::Row;

// =============================================================================
// Version Info
// =============================================================================

/// Current version of rowdb
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
