//! Row codec
//!
//! Converts a row to and from its fixed-width record. Text fields are raw
//! bytes; no encoding is assumed or checked.

use std::fmt;
use std::io::{self, Write};

use bytes::{Buf, BufMut, Bytes, BytesMut};

use super::{EMAIL_SIZE, ROW_SIZE, USERNAME_SIZE};

/// One record of the table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Row {
    pub id: i32,
    pub username: Bytes,
    pub email: Bytes,
}

impl Row {
    pub fn new(id: i32, username: impl Into<Bytes>, email: impl Into<Bytes>) -> Self {
        Self {
            id,
            username: username.into(),
            email: email.into(),
        }
    }

    /// Encode into a freshly allocated `ROW_SIZE` buffer
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(ROW_SIZE);
        self.write_fields(&mut buf);
        buf.freeze()
    }

    /// Encode in place into `dst`, which must be exactly `ROW_SIZE` bytes
    pub fn encode_into(&self, mut dst: &mut [u8]) {
        debug_assert_eq!(dst.len(), ROW_SIZE);
        self.write_fields(&mut dst);
    }

    /// Decode a row from the first `ROW_SIZE` bytes of `src`
    ///
    /// # Panics
    /// If `src` is shorter than `ROW_SIZE`. Callers slice records out of
    /// pages, which always hold whole rows.
    pub fn decode(src: &[u8]) -> Self {
        debug_assert!(src.len() >= ROW_SIZE, "short row buffer: {}", src.len());

        let mut src = &src[..ROW_SIZE];
        let id = src.get_i32_le();
        let username = read_padded(&mut src, USERNAME_SIZE);
        let email = read_padded(&mut src, EMAIL_SIZE);
        Self {
            id,
            username,
            email,
        }
    }

    /// Write `(id, username, email)` with the text fields' bytes as stored
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "({}, ", self.id)?;
        out.write_all(&self.username)?;
        out.write_all(b", ")?;
        out.write_all(&self.email)?;
        out.write_all(b")")
    }

    fn write_fields<B: BufMut>(&self, buf: &mut B) {
        buf.put_i32_le(self.id);
        write_padded(buf, &self.username, USERNAME_SIZE);
        write_padded(buf, &self.email, EMAIL_SIZE);
    }
}

/// Lossy rendering for logs; the shell writes rows with `write_to`
impl fmt::Display for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "({}, {}, {})",
            self.id,
            String::from_utf8_lossy(&self.username),
            String::from_utf8_lossy(&self.email)
        )
    }
}

/// Left-justify `value` in a `width`-byte field, NUL padded.
/// Longer input is cut at `width`; the parser rejects it before it gets here.
fn write_padded<B: BufMut>(buf: &mut B, value: &[u8], width: usize) {
    let len = value.len().min(width);
    buf.put_slice(&value[..len]);
    buf.put_bytes(0, width - len);
}

fn read_padded(src: &mut &[u8], width: usize) -> Bytes {
    let field = &src[..width];
    let len = field.iter().position(|&b| b == 0).unwrap_or(width);
    let value = Bytes::copy_from_slice(&field[..len]);
    src.advance(width);
    value
}
