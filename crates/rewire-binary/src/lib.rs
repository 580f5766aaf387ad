//! Versioned binary codec and streaming reader for rewrite-calculus patterns.
//!
//! The wire layout implemented here is authoritative:
//!
//! - magic marker: `0x7f 'T' 'E' 'R' 'M'` (5 bytes);
//! - version: three `u16` little-endian integers (major, minor, patch);
//! - size field: one `u64` little-endian, present iff version ≥ 1.2.0.
//!   Zero means "not emitted"; nonzero is the exact byte length of the
//!   pattern payload that follows;
//! - payload: tagged pre-order encoding of the pattern tree (discriminant +
//!   node fields + recursively encoded children).
//!
//! Version history:
//! - **1.0.0** — composite and variable patterns only, no size field.
//! - **1.1.0** — adds string literals and the raw-term wrapper convention.
//! - **1.2.0** (current) — adds the header size field, enabling streaming
//!   consumption via [`stream::read_pattern`].
//!
//! Malformed input fails closed: every error is terminal for the call and
//! no partial tree escapes.

#![forbid(unsafe_code)]
#![deny(rust_2018_idioms)]
#![warn(
    missing_docs,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    clippy::unwrap_used,
    clippy::expect_used
)]

/// Bounds-checked little-endian reader over an in-memory buffer.
pub mod cursor;
/// Version-aware pattern decoder.
pub mod decode;
/// Pattern encoder with optional self-describing size field.
pub mod encode;
/// Closed error taxonomy shared by the codecs.
pub mod error;
/// File-level read/write helpers.
pub mod files;
/// Magic marker and version header codec.
pub mod header;
/// Streaming reader over an abstract sequential byte source.
pub mod stream;
mod tags;
/// Three-part format version.
pub mod version;

pub use cursor::ByteCursor;
pub use decode::{decode_pattern, decode_payload};
pub use encode::{encode_pattern, encode_payload};
pub use error::{Error, Result};
pub use header::{decode_header, MAGIC};
pub use stream::{read_pattern, ByteSource};
pub use version::Version;
