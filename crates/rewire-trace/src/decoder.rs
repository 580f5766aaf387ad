// crates/rewire-trace/src/decoder.rs

//! Sequential trace decoder.
//!
//! A straight-line state machine over the buffer, no backward seeking:
//! header → optional pre-trace → initial configuration → events until the
//! end marker or clean exhaustion. Pre-trace presence is an explicit flag
//! byte in the format, never inferred from content.
//!
//! Buffer exhaustion in the middle of an event is reported as
//! [`Error::TruncatedTrace`]; exhaustion exactly between events ends the
//! trace cleanly.

use crate::event::{Argument, ProofTrace, RelativePosition, TraceEvent};
use rewire_ast::Substitution;
use rewire_binary::{decode_header, decode_payload, ByteCursor, Error, Result, Version};

/// Event discriminants and structural markers of the trace format.
pub(crate) mod marker {
    pub(crate) const RULE: u8 = 0x20;
    pub(crate) const SIDE_CONDITION: u8 = 0x21;
    pub(crate) const FUNCTION: u8 = 0x22;
    pub(crate) const HOOK: u8 = 0x23;
    pub(crate) const END: u8 = 0xff;

    pub(crate) const ARG_TERM: u8 = 0x00;
    pub(crate) const ARG_EVENT: u8 = 0x01;

    pub(crate) const NO_PRE_TRACE: u8 = 0x00;
    pub(crate) const HAS_PRE_TRACE: u8 = 0x01;
}

/// Decode a complete proof trace from a byte buffer.
pub fn decode_proof_trace(bytes: &[u8]) -> Result<ProofTrace> {
    let (version, consumed) = decode_header(bytes)?;
    let mut cur = ByteCursor::new(&bytes[consumed..]);

    let pre_trace = match cur.u8()? {
        marker::NO_PRE_TRACE => None,
        marker::HAS_PRE_TRACE => {
            let count = cur.u32_le()? as usize;
            let mut events = Vec::with_capacity(count);
            for _ in 0..count {
                events.push(decode_event(&mut cur, version).map_err(into_trace_truncation)?);
            }
            Some(events)
        }
        tag => return Err(Error::UnknownTag { tag, version }),
    };

    let initial_config = decode_payload(&mut cur, version, false)?;

    let mut events = Vec::new();
    loop {
        if cur.is_empty() {
            break; // exact exhaustion between events ends the trace cleanly
        }
        if cur.peek_u8()? == marker::END {
            let _ = cur.u8()?;
            break;
        }
        events.push(decode_event(&mut cur, version).map_err(into_trace_truncation)?);
    }

    Ok(ProofTrace {
        version,
        pre_trace,
        initial_config,
        events,
    })
}

/// Running out of buffer inside an event is a distinct failure from plain
/// field truncation: the trace claimed more than it delivered.
fn into_trace_truncation(err: Error) -> Error {
    match err {
        Error::Truncated { .. } => Error::TruncatedTrace,
        other => other,
    }
}

fn decode_event(cur: &mut ByteCursor<'_>, version: Version) -> Result<TraceEvent> {
    let tag = cur.u8()?;
    match tag {
        marker::RULE => {
            let ordinal = cur.u64_le()?;
            let substitution = decode_substitution(cur, version)?;
            Ok(TraceEvent::Rule {
                ordinal,
                substitution,
            })
        }
        marker::SIDE_CONDITION => {
            let ordinal = cur.u64_le()?;
            let substitution = decode_substitution(cur, version)?;
            Ok(TraceEvent::SideCondition {
                ordinal,
                substitution,
            })
        }
        marker::FUNCTION => {
            let name = cur.string()?;
            let position = decode_position(cur)?;
            let args = decode_arguments(cur, version)?;
            Ok(TraceEvent::Function {
                name,
                position,
                args,
            })
        }
        marker::HOOK => {
            let name = cur.string()?;
            let position = decode_position(cur)?;
            let args = decode_arguments(cur, version)?;
            let result = decode_payload(cur, version, false)?;
            Ok(TraceEvent::Hook {
                name,
                position,
                args,
                result,
            })
        }
        _ => Err(Error::UnknownTag { tag, version }),
    }
}

fn decode_substitution(cur: &mut ByteCursor<'_>, version: Version) -> Result<Substitution> {
    let count = cur.u32_le()? as usize;
    let mut subst = Substitution::new();
    for _ in 0..count {
        let name = cur.string()?;
        let pattern = decode_payload(cur, version, false)?;
        subst.insert(name, pattern);
    }
    Ok(subst)
}

fn decode_position(cur: &mut ByteCursor<'_>) -> Result<RelativePosition> {
    let count = cur.u32_le()? as usize;
    let mut steps = Vec::with_capacity(count);
    for _ in 0..count {
        steps.push(cur.u32_le()?);
    }
    Ok(RelativePosition(steps))
}

fn decode_arguments(cur: &mut ByteCursor<'_>, version: Version) -> Result<Vec<Argument>> {
    let count = cur.u32_le()? as usize;
    let mut args = Vec::with_capacity(count);
    for _ in 0..count {
        args.push(decode_argument(cur, version)?);
    }
    Ok(args)
}

fn decode_argument(cur: &mut ByteCursor<'_>, version: Version) -> Result<Argument> {
    let flag = cur.u8()?;
    match flag {
        marker::ARG_TERM => Ok(Argument::Term(decode_payload(cur, version, false)?)),
        marker::ARG_EVENT => Ok(Argument::Event(Box::new(decode_event(cur, version)?))),
        tag => Err(Error::UnknownTag { tag, version }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::writer::encode_proof_trace;
    use rewire_ast::Pattern;

    #[test]
    fn minimal_trace_decodes() {
        // Empty pre-trace, a single-variable configuration, no events.
        let trace = ProofTrace {
            version: Version::CURRENT,
            pre_trace: Some(Vec::new()),
            initial_config: Pattern::variable("Init"),
            events: Vec::new(),
        };
        let got = decode_proof_trace(&encode_proof_trace(&trace)).unwrap();
        assert_eq!(got.pre_trace.as_deref(), Some(&[][..]));
        assert_eq!(got.initial_config, Pattern::variable("Init"));
        assert!(got.events.is_empty());
    }

    #[test]
    fn absent_pre_trace_is_none() {
        let trace = ProofTrace {
            version: Version::CURRENT,
            pre_trace: None,
            initial_config: Pattern::variable("Init"),
            events: Vec::new(),
        };
        let got = decode_proof_trace(&encode_proof_trace(&trace)).unwrap();
        assert_eq!(got.pre_trace, None);
    }

    #[test]
    fn truncation_mid_event_is_trace_truncation() {
        let trace = ProofTrace {
            version: Version::CURRENT,
            pre_trace: None,
            initial_config: Pattern::variable("Init"),
            events: vec![TraceEvent::Function {
                name: "f".to_owned(),
                position: RelativePosition(vec![0]),
                args: vec![Argument::Term(Pattern::string("arg"))],
            }],
        };
        let bytes = encode_proof_trace(&trace);
        let err = decode_proof_trace(&bytes[..bytes.len() - 2]).unwrap_err();
        assert!(matches!(err, Error::TruncatedTrace));
    }

    #[test]
    fn unknown_event_tag_rejected() {
        let trace = ProofTrace {
            version: Version::CURRENT,
            pre_trace: None,
            initial_config: Pattern::variable("Init"),
            events: Vec::new(),
        };
        let mut bytes = encode_proof_trace(&trace);
        // Overwrite the end marker with a byte that is neither an event tag
        // nor the end marker.
        let last = bytes.len() - 1;
        bytes[last] = 0x7e;
        let err = decode_proof_trace(&bytes).unwrap_err();
        assert!(matches!(err, Error::UnknownTag { tag: 0x7e, .. }));
    }
}
