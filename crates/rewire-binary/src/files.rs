// crates/rewire-binary/src/files.rs

//! File-level helpers for encoded patterns.
//!
//! Thin `anyhow`-flavored wrappers so tools do not reimplement open/read
//! plumbing. `read_pattern_file` buffers the whole file and uses the plain
//! decoder (any supported version); `stream_pattern_file` drives the
//! streaming reader and therefore requires size-emitting (≥ 1.2.0) files.

use crate::decode::decode_pattern;
use crate::encode::encode_pattern;
use crate::stream::read_pattern;
use anyhow::{Context, Result};
use rewire_ast::Pattern;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;
use std::sync::Arc;

/// Read and decode one pattern from a fully buffered file.
pub fn read_pattern_file<P: AsRef<Path>>(path: P, strip_raw_term: bool) -> Result<Arc<Pattern>> {
    let path_ref = path.as_ref();
    let bytes =
        std::fs::read(path_ref).with_context(|| format!("read {}", path_ref.display()))?;
    decode_pattern(&bytes, strip_raw_term)
        .with_context(|| format!("decode pattern from {}", path_ref.display()))
}

/// Decode one pattern from a file through the streaming reader.
///
/// Only pulls the bytes the pattern needs; fails on pre-1.2.0 files or
/// files written without the size field.
pub fn stream_pattern_file<P: AsRef<Path>>(
    path: P,
    strip_raw_term: bool,
) -> Result<Arc<Pattern>> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", path_ref.display()))?;
    let mut rdr = BufReader::new(f);
    read_pattern(&mut rdr, strip_raw_term)
        .with_context(|| format!("stream pattern from {}", path_ref.display()))
}

/// Encode a pattern (size field emitted) and write it to `path`.
pub fn write_pattern_file<P: AsRef<Path>>(path: P, pattern: &Pattern) -> Result<()> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", path_ref.display()))?;
    let mut w = BufWriter::new(f);
    w.write_all(&encode_pattern(pattern, true))
        .with_context(|| format!("write {}", path_ref.display()))?;
    w.flush().with_context(|| "flush pattern writer")?;
    Ok(())
}
