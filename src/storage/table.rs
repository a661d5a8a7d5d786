//! Table
//!
//! Append-only row sequence addressed through the pager.

use crate::error::{DbError, Result};

use super::{Pager, Row, PAGE_ROWS_BYTES, ROWS_PER_PAGE, ROW_SIZE};

/// Location of a row: page number and byte offset within that page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Slot {
    pub page_num: usize,
    pub offset: usize,
}

/// Fixed-capacity table of rows
///
/// The table owns no row bytes itself; it computes slots and reads or
/// writes through the pager's cached pages.
pub struct Table {
    pager: Pager,
    row_count: usize,
    max_rows: usize,
}

impl Table {
    /// Build a table over `pager`, recovering the row count from file length
    ///
    /// A trailing partial row is ignored.
    pub fn open(pager: Pager, max_pages: usize) -> Result<Self> {
        if max_pages == 0 {
            return Err(DbError::Config("max_pages must be at least 1".to_string()));
        }
        if pager.max_pages() < max_pages {
            return Err(DbError::Config(format!(
                "pager holds {} pages but table needs {}",
                pager.max_pages(),
                max_pages
            )));
        }

        let max_rows = ROWS_PER_PAGE * max_pages;
        let row_count = pager.total_rows_on_disk();

        if row_count > max_rows {
            return Err(DbError::Storage(format!(
                "database holds {} rows but capacity is {}",
                row_count, max_rows
            )));
        }

        Ok(Self {
            pager,
            row_count,
            max_rows,
        })
    }

    /// Compute the slot of `row_num`
    pub fn row_slot(row_num: usize) -> Slot {
        Slot {
            page_num: row_num / ROWS_PER_PAGE,
            offset: (row_num % ROWS_PER_PAGE) * ROW_SIZE,
        }
    }

    /// Append a row
    ///
    /// Field widths are expected to be validated already.
    pub fn insert(&mut self, row: &Row) -> Result<()> {
        if self.row_count >= self.max_rows {
            return Err(DbError::TableFull);
        }

        let slot = Self::row_slot(self.row_count);
        let page = self.pager.get_page(slot.page_num)?;
        row.encode_into(&mut page.as_bytes_mut()[slot.offset..slot.offset + ROW_SIZE]);

        self.row_count += 1;
        Ok(())
    }

    /// Decode row `row_num`
    pub fn read_row(&mut self, row_num: usize) -> Result<Row> {
        if row_num >= self.row_count {
            return Err(DbError::Storage(format!(
                "row {} out of range ({} rows)",
                row_num, self.row_count
            )));
        }

        let slot = Self::row_slot(row_num);
        let page = self.pager.get_page(slot.page_num)?;
        Ok(Row::decode(&page.as_bytes()[slot.offset..slot.offset + ROW_SIZE]))
    }

    /// Iterate over all rows in insertion order, starting from row 0
    pub fn scan(&mut self) -> Scan<'_> {
        Scan {
            table: self,
            next_row: 0,
        }
    }

    /// Flush every occupied page and close the pager
    ///
    /// Full pages are written whole; the final page only up to its last row.
    /// Pages never loaded this session are already on disk and are skipped.
    pub fn close(mut self, sync: bool) -> Result<()> {
        let full_pages = self.row_count / ROWS_PER_PAGE;
        let trailing_rows = self.row_count % ROWS_PER_PAGE;

        for page_num in 0..full_pages {
            if self.pager.is_cached(page_num) {
                self.pager.flush(page_num, PAGE_ROWS_BYTES)?;
            }
        }

        if trailing_rows > 0 && self.pager.is_cached(full_pages) {
            self.pager.flush(full_pages, trailing_rows * ROW_SIZE)?;
        }

        self.pager.close(sync)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    pub fn is_empty(&self) -> bool {
        self.row_count == 0
    }

    pub fn is_full(&self) -> bool {
        self.row_count >= self.max_rows
    }

    pub fn pager(&self) -> &Pager {
        &self.pager
    }
}

/// Lazy, in-order iterator over a table's rows
pub struct Scan<'a> {
    table: &'a mut Table,
    next_row: usize,
}

impl Iterator for Scan<'_> {
    type Item = Result<Row>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.next_row >= self.table.row_count {
            return None;
        }

        let row = self.table.read_row(self.next_row);
        self.next_row += 1;
        Some(row)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.table.row_count - self.next_row;
        (remaining, Some(remaining))
    }
}
