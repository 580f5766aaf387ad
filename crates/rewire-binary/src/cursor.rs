// crates/rewire-binary/src/cursor.rs

//! Bounds-checked little-endian reader over an in-memory buffer.
//!
//! Decoders never index the buffer directly; every read goes through the
//! cursor so truncation surfaces as [`Error::Truncated`] with exact counts
//! instead of a panic.

use crate::error::{Error, Result};

/// A read position over a borrowed byte slice.
#[derive(Debug)]
pub struct ByteCursor<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> ByteCursor<'a> {
    /// Wrap a buffer, starting at offset 0.
    #[inline]
    #[must_use]
    pub const fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    /// Bytes consumed so far.
    #[inline]
    #[must_use]
    pub const fn position(&self) -> usize {
        self.pos
    }

    /// Bytes not yet consumed.
    #[inline]
    #[must_use]
    pub const fn remaining(&self) -> usize {
        self.buf.len() - self.pos
    }

    /// Whether the buffer is fully consumed.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.remaining() == 0
    }

    /// Take exactly `n` bytes, or fail with `Truncated`.
    pub fn take(&mut self, n: usize) -> Result<&'a [u8]> {
        if self.remaining() < n {
            return Err(Error::Truncated {
                needed: n,
                available: self.remaining(),
            });
        }
        let out = &self.buf[self.pos..self.pos + n];
        self.pos += n;
        Ok(out)
    }

    /// Next byte without consuming it.
    pub fn peek_u8(&self) -> Result<u8> {
        self.buf.get(self.pos).copied().ok_or(Error::Truncated {
            needed: 1,
            available: 0,
        })
    }

    /// Read one byte.
    pub fn u8(&mut self) -> Result<u8> {
        Ok(self.take(1)?[0])
    }

    /// Read a `u16` (little-endian).
    pub fn u16_le(&mut self) -> Result<u16> {
        let b = self.take(2)?;
        Ok(u16::from_le_bytes([b[0], b[1]]))
    }

    /// Read a `u32` (little-endian).
    pub fn u32_le(&mut self) -> Result<u32> {
        let b = self.take(4)?;
        Ok(u32::from_le_bytes([b[0], b[1], b[2], b[3]]))
    }

    /// Read a `u64` (little-endian).
    pub fn u64_le(&mut self) -> Result<u64> {
        let b = self.take(8)?;
        Ok(u64::from_le_bytes([
            b[0], b[1], b[2], b[3], b[4], b[5], b[6], b[7],
        ]))
    }

    /// Read a `u32`-length-prefixed UTF-8 string.
    pub fn string(&mut self) -> Result<String> {
        let len = self.u32_le()? as usize;
        let bytes = self.take(len)?;
        Ok(String::from_utf8(bytes.to_vec())?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_advance_and_bound_check() {
        let buf = [1u8, 0, 2, 0, 0, 0];
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(cur.u16_le().unwrap(), 1);
        assert_eq!(cur.u32_le().unwrap(), 2);
        assert!(cur.is_empty());

        let err = cur.u8().unwrap_err();
        assert!(matches!(
            err,
            Error::Truncated {
                needed: 1,
                available: 0
            }
        ));
    }

    #[test]
    fn string_roundtrip() {
        let mut buf = 5u32.to_le_bytes().to_vec();
        buf.extend_from_slice(b"hello");
        let mut cur = ByteCursor::new(&buf);
        assert_eq!(cur.string().unwrap(), "hello");
    }

    #[test]
    fn string_rejects_bad_utf8() {
        let mut buf = 2u32.to_le_bytes().to_vec();
        buf.extend_from_slice(&[0xff, 0xfe]);
        let mut cur = ByteCursor::new(&buf);
        assert!(matches!(cur.string().unwrap_err(), Error::Utf8(_)));
    }
}
