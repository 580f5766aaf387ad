// crates/rewire-binary/src/stream.rs

//! Streaming reader over an abstract sequential byte source.
//!
//! The source exposes one capability: "read exactly N bytes or fail". The
//! reader never requests more bytes than it currently needs, so decode
//! works without buffering a whole file: magic, version, size, then exactly
//! `size` payload bytes. The source's cursor is left exactly past the
//! consumed pattern, so callers can pipeline several patterns from one
//! continuous source.
//!
//! Only version ≥ 1.2.0 buffers are accepted here — older formats cannot
//! be safely length-delimited, and a zero size field means the writer never
//! emitted one.

use crate::cursor::ByteCursor;
use crate::decode::decode_payload;
use crate::error::{Error, Result};
use crate::header::{self, MAGIC, SIZE_LEN, VERSION_LEN};
use crate::version::Version;
use rewire_ast::Pattern;
use std::io::Read;
use std::sync::Arc;

/// A sequential byte source: read exactly `n` bytes or fail.
///
/// The codec does not own the source and only ever advances it; a single
/// source must not be driven by more than one concurrent decode.
pub trait ByteSource {
    /// Return exactly `n` bytes, advancing the read cursor past them.
    fn read_exact_bytes(&mut self, n: usize) -> Result<Vec<u8>>;
}

/// Any `std::io::Read` is a valid source; short reads surface as
/// [`Error::Source`].
impl<R: Read> ByteSource for R {
    fn read_exact_bytes(&mut self, n: usize) -> Result<Vec<u8>> {
        let mut buf = vec![0u8; n];
        self.read_exact(&mut buf)?;
        Ok(buf)
    }
}

/// Read one size-delimited pattern from `source`.
///
/// Sequence: validate magic, require version ≥ 1.2.0
/// ([`Error::UnsupportedVersion`]), require a nonzero size
/// ([`Error::MissingSize`]), then read and decode exactly `size` bytes
/// ([`Error::SizeMismatch`] if the payload disagrees).
pub fn read_pattern<S: ByteSource + ?Sized>(
    source: &mut S,
    strip_raw_term: bool,
) -> Result<Arc<Pattern>> {
    let magic = source.read_exact_bytes(MAGIC.len())?;
    if magic != MAGIC {
        return Err(Error::BadMagic);
    }

    let version_bytes = source.read_exact_bytes(VERSION_LEN)?;
    let version = header::decode_version(&mut ByteCursor::new(&version_bytes))?;
    if version < Version::SIZED {
        return Err(Error::UnsupportedVersion {
            found: version,
            min: Version::SIZED,
        });
    }

    let size_bytes = source.read_exact_bytes(SIZE_LEN)?;
    let size = ByteCursor::new(&size_bytes).u64_le()?;
    if size == 0 {
        return Err(Error::MissingSize);
    }

    let payload = source.read_exact_bytes(size as usize)?;
    let mut cur = ByteCursor::new(&payload);
    let pattern = decode_payload(&mut cur, version, strip_raw_term)?;
    if cur.position() as u64 != size {
        return Err(Error::SizeMismatch {
            declared: size,
            actual: cur.position() as u64,
        });
    }
    Ok(pattern)
}
