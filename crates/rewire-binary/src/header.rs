// crates/rewire-binary/src/header.rs

//! Magic marker and version header codec.
//!
//! The header is `MAGIC` (5 bytes) followed by three `u16` little-endian
//! version components; buffers at version ≥ 1.2.0 additionally carry a
//! `u64` little-endian size field immediately after.

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::version::Version;

/// Fixed 5-byte marker every encoded buffer begins with.
pub const MAGIC: [u8; 5] = *b"\x7fTERM";

/// Byte width of the encoded version triple.
pub const VERSION_LEN: usize = 6;

/// Byte width of the optional size field.
pub const SIZE_LEN: usize = 8;

/// Byte width of magic + version (the size field is not part of this).
pub const HEADER_LEN: usize = MAGIC.len() + VERSION_LEN;

/// Decode the fixed-width header, returning the version and bytes consumed.
///
/// Fails with [`Error::BadMagic`] on a marker mismatch and
/// [`Error::Truncated`] if fewer than [`HEADER_LEN`] bytes are available.
/// Pure: reports consumption, never touches anything past the header.
pub fn decode_header(bytes: &[u8]) -> Result<(Version, usize)> {
    let mut cur = ByteCursor::new(bytes);
    let magic = cur.take(MAGIC.len())?;
    if magic != MAGIC {
        return Err(Error::BadMagic);
    }
    let version = decode_version(&mut cur)?;
    Ok((version, cur.position()))
}

/// Decode the three-component version triple at the cursor.
pub fn decode_version(cur: &mut ByteCursor<'_>) -> Result<Version> {
    let major = cur.u16_le()?;
    let minor = cur.u16_le()?;
    let patch = cur.u16_le()?;
    Ok(Version::new(major, minor, patch))
}

/// Append magic + version.
///
/// The size slot is a pattern-format concern; the pattern encoder reserves
/// it separately (trace headers carry none).
pub fn encode_header(out: &mut Vec<u8>, version: Version) {
    out.extend_from_slice(&MAGIC);
    out.extend_from_slice(&version.major.to_le_bytes());
    out.extend_from_slice(&version.minor.to_le_bytes());
    out.extend_from_slice(&version.patch.to_le_bytes());
}
