// crates/rewire-binary/src/error.rs

//! Closed error taxonomy for the binary codecs.
//!
//! Every variant is terminal for the current call: corrupt or truncated
//! input is propagated immediately, never retried, and never yields a
//! partial tree or trace. `Source` is the interface-error class — the
//! supplied byte source failed to deliver the requested bytes.

use crate::version::Version;
use thiserror::Error;

/// Convenience alias used across the codec crates.
pub type Result<T> = std::result::Result<T, Error>;

/// Everything that can go wrong while encoding or decoding.
#[derive(Debug, Error)]
pub enum Error {
    /// The buffer does not begin with the fixed magic marker.
    #[error("data does not begin with the binary term header bytes")]
    BadMagic,

    /// A node or event discriminant outside the version's tag table.
    #[error("unknown tag byte 0x{tag:02x} at format version {version}")]
    UnknownTag {
        /// The offending discriminant.
        tag: u8,
        /// The version whose table was consulted.
        version: Version,
    },

    /// The buffer's version predates the capability the caller requires.
    #[error("format version {found} is not supported here (need {min} or newer)")]
    UnsupportedVersion {
        /// Version read from the header.
        found: Version,
        /// Minimum version the operation requires.
        min: Version,
    },

    /// Buffer exhausted before an expected field.
    #[error("buffer exhausted: needed {needed} more bytes, {available} available")]
    Truncated {
        /// Bytes the decoder still needed.
        needed: usize,
        /// Bytes that were left.
        available: usize,
    },

    /// Trace buffer exhausted in the middle of an event.
    #[error("trace buffer exhausted mid-event")]
    TruncatedTrace,

    /// Streaming decode requires an explicitly emitted (nonzero) size field.
    #[error("pattern size must be set explicitly when reading from a streaming source")]
    MissingSize,

    /// The declared size does not match the encoded payload.
    #[error("declared pattern size {declared} does not match the {actual} bytes consumed")]
    SizeMismatch {
        /// Size read from the header.
        declared: u64,
        /// Bytes the payload decode actually consumed.
        actual: u64,
    },

    /// A composite's argument count disagrees with its symbol's arity.
    #[error("symbol '{symbol}' declares arity {declared} but {actual} arguments were encoded")]
    Arity {
        /// Constructor name.
        symbol: String,
        /// Arity declared by the symbol's sort arguments.
        declared: usize,
        /// Argument count found in the buffer.
        actual: usize,
    },

    /// A name or literal field held malformed UTF-8.
    #[error("string field is not valid UTF-8")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The underlying byte source failed to deliver the requested bytes.
    #[error("byte source read failed")]
    Source(#[from] std::io::Error),
}
