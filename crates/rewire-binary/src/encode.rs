// crates/rewire-binary/src/encode.rs

//! Pattern encoder: header + tagged pre-order payload.
//!
//! Each node is written as its discriminant byte, the node-specific fields
//! (symbol name and sort info for composites, name for variables, contents
//! for string literals), then the recursively encoded children. With
//! `emit_size` the header's size slot is back-patched once the payload
//! length is known, enabling later streaming consumption.

use crate::header::{self, HEADER_LEN, SIZE_LEN};
use crate::tags;
use crate::version::Version;
use rewire_ast::{Pattern, Sort, Symbol};
use std::sync::Arc;

/// Encode a pattern at the current format version.
///
/// With `emit_size = false` the size slot stays zero ("not emitted"), which
/// plain decoding ignores but streaming decode rejects.
#[must_use]
pub fn encode_pattern(pattern: &Pattern, emit_size: bool) -> Vec<u8> {
    encode_pattern_at(pattern, Version::CURRENT, emit_size)
}

/// Encode a pattern at an explicit version.
///
/// The caller is responsible for not feeding nodes the target version
/// cannot express (a 1.0.0 buffer holding a string literal will simply be
/// rejected by the decoder's version table).
#[must_use]
pub fn encode_pattern_at(pattern: &Pattern, version: Version, emit_size: bool) -> Vec<u8> {
    let mut out = Vec::with_capacity(64);
    header::encode_header(&mut out, version);
    if version.has_size_field() {
        out.extend_from_slice(&0u64.to_le_bytes());
    }
    let payload_start = out.len();
    encode_payload(pattern, &mut out);

    if emit_size && version.has_size_field() {
        let size = (out.len() - payload_start) as u64;
        out[HEADER_LEN..HEADER_LEN + SIZE_LEN].copy_from_slice(&size.to_le_bytes());
    }
    out
}

/// Append one pattern's bare payload (no header) to `out`.
///
/// This is the building block the trace writer reuses for embedded terms.
pub fn encode_payload(pattern: &Pattern, out: &mut Vec<u8>) {
    match pattern {
        Pattern::Composite { constructor, args } => {
            out.push(tags::COMPOSITE);
            encode_symbol(constructor, out);
            encode_count(args.len(), out);
            for arg in args {
                encode_payload(arg, out);
            }
        }
        Pattern::Variable { name } => {
            out.push(tags::VARIABLE);
            encode_string(name, out);
        }
        Pattern::String { contents } => {
            out.push(tags::STRING);
            encode_string(contents, out);
        }
    }
}

fn encode_symbol(symbol: &Symbol, out: &mut Vec<u8>) {
    encode_string(&symbol.name, out);
    encode_sorts(&symbol.formal_parameters, out);
    encode_sorts(&symbol.sort_arguments, out);
}

fn encode_sorts(sorts: &[Arc<Sort>], out: &mut Vec<u8>) {
    encode_count(sorts.len(), out);
    for sort in sorts {
        encode_sort(sort, out);
    }
}

fn encode_sort(sort: &Sort, out: &mut Vec<u8>) {
    match sort {
        Sort::Variable { name } => {
            out.push(tags::SORT_VARIABLE);
            encode_string(name, out);
        }
        Sort::Composite { name, args } => {
            out.push(tags::SORT_COMPOSITE);
            encode_string(name, out);
            encode_sorts(args, out);
        }
    }
}

pub(crate) fn encode_string(s: &str, out: &mut Vec<u8>) {
    encode_count(s.len(), out);
    out.extend_from_slice(s.as_bytes());
}

pub(crate) fn encode_count(n: usize, out: &mut Vec<u8>) {
    out.extend_from_slice(&(n as u32).to_le_bytes());
}
