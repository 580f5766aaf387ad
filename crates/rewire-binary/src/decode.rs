// crates/rewire-binary/src/decode.rs

//! Version-aware pattern decoder.
//!
//! Decode dispatches on the header version through a per-version tag table:
//! earlier versions lack the size field and some node kinds, so a tag that
//! is only valid in a newer format fails with `UnknownTag` rather than
//! being decoded with the newest layout.

use crate::cursor::ByteCursor;
use crate::error::{Error, Result};
use crate::header::{self, SIZE_LEN};
use crate::tags;
use crate::version::Version;
use rewire_ast::{Pattern, Sort, Symbol};
use std::sync::Arc;

/// Decode one pattern from a fully buffered encoding (header + payload).
///
/// The size field, if present, is skipped without being consulted; trailing
/// bytes after the first pattern are ignored. `strip_raw_term` drops the
/// engine's embedded raw literal payloads, keeping the structural skeleton
/// only — a space/fidelity trade-off the caller opts into explicitly.
pub fn decode_pattern(bytes: &[u8], strip_raw_term: bool) -> Result<Arc<Pattern>> {
    let (version, consumed) = header::decode_header(bytes)?;
    let mut cur = ByteCursor::new(&bytes[consumed..]);
    if version.has_size_field() {
        cur.take(SIZE_LEN)?;
    }
    decode_payload(&mut cur, version, strip_raw_term)
}

/// Decode one pattern payload (no header) at the cursor.
pub fn decode_payload(
    cur: &mut ByteCursor<'_>,
    version: Version,
    strip_raw_term: bool,
) -> Result<Arc<Pattern>> {
    let tag = cur.u8()?;
    match tag {
        tags::COMPOSITE => decode_composite(cur, version, strip_raw_term),
        tags::VARIABLE => Ok(Pattern::variable(cur.string()?)),
        tags::STRING if version.has_string_literals() => Ok(Pattern::string(cur.string()?)),
        _ => Err(Error::UnknownTag { tag, version }),
    }
}

fn decode_composite(
    cur: &mut ByteCursor<'_>,
    version: Version,
    strip_raw_term: bool,
) -> Result<Arc<Pattern>> {
    let constructor = decode_symbol(cur, version)?;
    let count = cur.u32_le()? as usize;
    let declared = constructor.arity();
    if count != declared {
        return Err(Error::Arity {
            symbol: constructor.name,
            declared,
            actual: count,
        });
    }

    let mut args = Vec::with_capacity(count);
    for _ in 0..count {
        args.push(decode_payload(cur, version, strip_raw_term)?);
    }

    let node = Pattern::composite(constructor, args);
    if strip_raw_term && version.has_string_literals() {
        if let Some(structural) = node.raw_term_child() {
            return Ok(Arc::clone(structural));
        }
    }
    Ok(node)
}

fn decode_symbol(cur: &mut ByteCursor<'_>, version: Version) -> Result<Symbol> {
    let name = cur.string()?;
    let formal_parameters = decode_sorts(cur, version)?;
    let sort_arguments = decode_sorts(cur, version)?;
    Ok(Symbol::with_sorts(name, formal_parameters, sort_arguments))
}

fn decode_sorts(cur: &mut ByteCursor<'_>, version: Version) -> Result<Vec<Arc<Sort>>> {
    let count = cur.u32_le()? as usize;
    let mut out = Vec::with_capacity(count);
    for _ in 0..count {
        out.push(decode_sort(cur, version)?);
    }
    Ok(out)
}

fn decode_sort(cur: &mut ByteCursor<'_>, version: Version) -> Result<Arc<Sort>> {
    let tag = cur.u8()?;
    match tag {
        tags::SORT_VARIABLE => Ok(Sort::variable(cur.string()?)),
        tags::SORT_COMPOSITE => {
            let name = cur.string()?;
            let args = decode_sorts(cur, version)?;
            Ok(Sort::composite(name, args))
        }
        _ => Err(Error::UnknownTag { tag, version }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode::{encode_pattern, encode_pattern_at};
    use crate::header::HEADER_LEN;

    fn sample() -> Arc<Pattern> {
        let s = Sort::composite("S", vec![]);
        let f = Symbol::with_sorts("f", vec![], vec![Arc::clone(&s), s]);
        Pattern::composite(f, vec![Pattern::variable("x"), Pattern::string("s")])
    }

    #[test]
    fn roundtrip_reconstructs_structure() {
        let p = sample();
        let got = decode_pattern(&encode_pattern(&p, true), false).unwrap();
        assert_eq!(got, p);

        let Pattern::Composite { constructor, args } = got.as_ref() else {
            panic!("expected composite");
        };
        assert_eq!(constructor.name, "f");
        assert_eq!(args.len(), 2);
        assert!(matches!(args[0].as_ref(), Pattern::Variable { name } if name == "x"));
        assert!(matches!(args[1].as_ref(), Pattern::String { contents } if contents == "s"));
    }

    #[test]
    fn string_tag_unknown_at_1_0_0() {
        let buf = encode_pattern_at(&Pattern::string("s"), Version::new(1, 0, 0), false);
        let err = decode_pattern(&buf, false).unwrap_err();
        assert!(matches!(err, Error::UnknownTag { tag: 0x03, .. }));
    }

    #[test]
    fn arity_mismatch_rejected() {
        // Hand-built composite: symbol `g` declares arity 1 (one sort
        // argument) but the wire carries zero pattern arguments.
        let mut payload = vec![0x01];
        payload.extend_from_slice(&1u32.to_le_bytes());
        payload.push(b'g');
        payload.extend_from_slice(&0u32.to_le_bytes()); // no formal parameters
        payload.extend_from_slice(&1u32.to_le_bytes()); // one sort argument
        payload.push(0x11); // composite sort "S" with no arguments
        payload.extend_from_slice(&1u32.to_le_bytes());
        payload.push(b'S');
        payload.extend_from_slice(&0u32.to_le_bytes());
        payload.extend_from_slice(&0u32.to_le_bytes()); // pattern argument count: 0

        let mut cur = ByteCursor::new(&payload);
        let err = decode_payload(&mut cur, Version::CURRENT, false).unwrap_err();
        assert!(matches!(
            err,
            Error::Arity {
                declared: 1,
                actual: 0,
                ..
            }
        ));
    }

    #[test]
    fn truncated_mid_node() {
        let buf = encode_pattern(&sample(), true);
        let err = decode_pattern(&buf[..buf.len() - 3], false).unwrap_err();
        assert!(matches!(err, Error::Truncated { .. }));
    }

    #[test]
    fn strip_raw_term_drops_wrapper() {
        let structural = sample();
        let wrapped = Pattern::wrap_raw_term(Arc::clone(&structural), "engine-bytes");
        let buf = encode_pattern(&wrapped, true);

        let stripped = decode_pattern(&buf, true).unwrap();
        assert_eq!(stripped, structural);

        let kept = decode_pattern(&buf, false).unwrap();
        assert_eq!(kept, wrapped);
    }

    #[test]
    fn trailing_bytes_ignored_by_plain_decode() {
        let mut buf = encode_pattern(&sample(), true);
        buf.extend_from_slice(&[0xaa; 7]);
        assert_eq!(decode_pattern(&buf, false).unwrap(), sample());
    }

    #[test]
    fn plain_decode_ignores_size_field() {
        // Version 1.1.0 has no size slot at all; decode must not look for one.
        let buf = encode_pattern_at(&sample(), Version::new(1, 1, 0), false);
        assert_eq!(buf[HEADER_LEN], 0x01); // payload starts right after the version
        assert_eq!(decode_pattern(&buf, false).unwrap(), sample());
    }
}
