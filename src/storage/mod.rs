//! Storage Module
//!
//! Fixed-schema row storage over a single flat file.
//!
//! ## Responsibilities
//! - Encode rows into fixed-width byte records
//! - Cache file-backed pages in memory and flush them on close
//! - Map logical row numbers onto (page, offset) slots
//! - Enforce the table's row capacity
//!
//! ## Row Format (291 bytes)
//! ```text
//! ┌──────────┬──────────────────────┬──────────────────────┐
//! │ Id (4)   │ Username (32)        │ Email (255)          │
//! │ i32 LE   │ NUL padded           │ NUL padded           │
//! └──────────┴──────────────────────┴──────────────────────┘
//! ```
//!
//! ## File Format
//! ```text
//! ┌────────────────────────────────────────┐
//! │ Row 0   (offset 0)                     │
//! │ Row 1   (offset ROW_SIZE)              │
//! │ ...                                    │
//! │ Row n   (offset n * ROW_SIZE)          │
//! └────────────────────────────────────────┘
//! ```
//! No header and no page boundaries: a page is only the unit of loading
//! and flushing. In memory a page is `PAGE_SIZE` bytes, of which the first
//! `PAGE_ROWS_BYTES` hold rows; the tail is padding that never reaches disk.

mod pager;
mod row;
mod table;

pub use pager::{Page, Pager};
pub use row::Row;
pub use table::{Scan, Slot, Table};

// =============================================================================
// Row Layout
// =============================================================================

/// Maximum username length in bytes
pub const USERNAME_SIZE: usize = 32;

/// Maximum email length in bytes
pub const EMAIL_SIZE: usize = 255;

/// Width of the encoded id
pub const ID_SIZE: usize = std::mem::size_of::<i32>();

pub const ID_OFFSET: usize = 0;
pub const USERNAME_OFFSET: usize = ID_OFFSET + ID_SIZE;
pub const EMAIL_OFFSET: usize = USERNAME_OFFSET + USERNAME_SIZE;

/// Encoded row width: the plain sum of the field widths
pub const ROW_SIZE: usize = ID_SIZE + USERNAME_SIZE + EMAIL_SIZE;

// =============================================================================
// Page Layout
// =============================================================================

/// Size of an in-memory page
pub const PAGE_SIZE: usize = 4096;

/// Whole rows that fit in one page
pub const ROWS_PER_PAGE: usize = PAGE_SIZE / ROW_SIZE;

/// Bytes of a page occupied by rows; also the on-disk stride between pages
pub const PAGE_ROWS_BYTES: usize = ROWS_PER_PAGE * ROW_SIZE;

/// Default page ceiling of a table
pub const TABLE_MAX_PAGES: usize = 101;

/// Default row capacity of a table
pub const TABLE_MAX_ROWS: usize = ROWS_PER_PAGE * TABLE_MAX_PAGES;
