//! Pager
//!
//! Owns the database file and a cache of its pages.
//!
//! ## Responsibilities
//! - Load pages from the file on first access (zero-filled past EOF)
//! - Hand out the cached page as the single mutation point for row bytes
//! - Write occupied page prefixes back on flush; never writes eagerly

use std::fs::{File, OpenOptions};
use std::io::{Read, Seek, SeekFrom, Write};
use std::path::Path;

use crate::error::{DbError, Result};

use super::{PAGE_ROWS_BYTES, PAGE_SIZE, ROW_SIZE};

/// A fixed-size in-memory page
pub struct Page {
    data: Box<[u8; PAGE_SIZE]>,
}

impl Page {
    /// Create a zero-filled page
    pub fn new() -> Self {
        Self {
            data: Box::new([0; PAGE_SIZE]),
        }
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data[..]
    }

    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.data[..]
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new()
    }
}

/// Page cache over a single database file
///
/// Page `n` lives at file offset `n * PAGE_ROWS_BYTES`, so the file is a
/// flat sequence of rows with no gaps between pages.
pub struct Pager {
    /// Open database file
    file: File,

    /// File length observed at open
    file_length: u64,

    /// Cached pages, indexed by page number
    pages: Vec<Option<Page>>,
}

impl Pager {
    /// Open or create the file at `path` with room for `max_pages` pages
    pub fn open(path: &Path, max_pages: usize) -> Result<Self> {
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .create(true)
            .truncate(false)
            .open(path)?;

        let file_length = file.metadata()?.len();

        let mut pages = Vec::with_capacity(max_pages);
        pages.resize_with(max_pages, || None);

        tracing::debug!(
            "Opened pager on {} ({} bytes, {} max pages)",
            path.display(),
            file_length,
            max_pages
        );

        Ok(Self {
            file,
            file_length,
            pages,
        })
    }

    /// Get page `page_num`, loading it on a cache miss
    ///
    /// Bytes present in the file are read into the page; anything past the
    /// end of the file stays zero.
    pub fn get_page(&mut self, page_num: usize) -> Result<&mut Page> {
        let max_pages = self.pages.len();
        if page_num >= max_pages {
            return Err(DbError::PageOutOfBounds {
                page_num,
                max_pages,
            });
        }

        if self.pages[page_num].is_none() {
            let page = self.load_page(page_num)?;
            self.pages[page_num] = Some(page);
        }

        match self.pages[page_num].as_mut() {
            Some(page) => Ok(page),
            None => Err(DbError::Storage(format!("page {} failed to load", page_num))),
        }
    }

    /// Write the first `bytes_used` bytes of cached page `page_num` to the file
    pub fn flush(&mut self, page_num: usize, bytes_used: usize) -> Result<()> {
        if bytes_used > PAGE_ROWS_BYTES {
            return Err(DbError::Storage(format!(
                "flush of {} bytes exceeds page capacity of {}",
                bytes_used, PAGE_ROWS_BYTES
            )));
        }

        let page = match self.pages.get(page_num).and_then(Option::as_ref) {
            Some(page) => page,
            None => {
                return Err(DbError::Storage(format!(
                    "tried to flush uncached page {}",
                    page_num
                )))
            }
        };

        self.file.seek(SeekFrom::Start(Self::page_offset(page_num)))?;
        self.file.write_all(&page.as_bytes()[..bytes_used])?;

        let end = Self::page_offset(page_num) + bytes_used as u64;
        self.file_length = self.file_length.max(end);

        tracing::debug!("Flushed page {} ({} bytes)", page_num, bytes_used);
        Ok(())
    }

    /// Drop the page cache and close the file, optionally syncing it first
    pub fn close(mut self, sync: bool) -> Result<()> {
        self.pages.clear();
        if sync {
            self.file.sync_all()?;
        }
        Ok(())
    }

    /// Whether page `page_num` is currently cached
    pub fn is_cached(&self, page_num: usize) -> bool {
        matches!(self.pages.get(page_num), Some(Some(_)))
    }

    /// Number of pages currently cached
    pub fn cached_pages(&self) -> usize {
        self.pages.iter().filter(|p| p.is_some()).count()
    }

    /// Whole rows held by the file; a trailing partial row is not counted
    pub fn total_rows_on_disk(&self) -> usize {
        (self.file_length / ROW_SIZE as u64) as usize
    }

    /// Current length of the file in bytes
    pub fn file_length(&self) -> u64 {
        self.file_length
    }

    /// Page ceiling of this pager
    pub fn max_pages(&self) -> usize {
        self.pages.len()
    }

    // =========================================================================
    // Private Helpers
    // =========================================================================

    fn page_offset(page_num: usize) -> u64 {
        page_num as u64 * PAGE_ROWS_BYTES as u64
    }

    fn load_page(&mut self, page_num: usize) -> Result<Page> {
        let mut page = Page::new();
        let offset = Self::page_offset(page_num);

        if offset < self.file_length {
            let available = (self.file_length - offset).min(PAGE_ROWS_BYTES as u64) as usize;
            self.file.seek(SeekFrom::Start(offset))?;
            self.file.read_exact(&mut page.as_bytes_mut()[..available])?;
            tracing::debug!("Loaded page {} ({} bytes from file)", page_num, available);
        } else {
            tracing::debug!("Created page {} past end of file", page_num);
        }

        Ok(page)
    }
}
