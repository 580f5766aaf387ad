// crates/rewire-trace/src/writer.rs

//! Binary trace writer: the engine-side inverse of the decoder.
//!
//! Emits the header, the explicit pre-trace flag (and count, if present),
//! the initial configuration, the events in order, and the end marker.
//! Embedded patterns are written as bare payloads; the trace header's
//! version governs them all.

use crate::decoder::marker;
use crate::event::{Argument, ProofTrace, RelativePosition, TraceEvent};
use rewire_ast::Substitution;
use rewire_binary::header::encode_header;
use rewire_binary::encode_payload;

/// Serialize a trace to the binary layout the decoder consumes.
#[must_use]
pub fn encode_proof_trace(trace: &ProofTrace) -> Vec<u8> {
    let mut out = Vec::with_capacity(256);
    encode_header(&mut out, trace.version);

    match &trace.pre_trace {
        None => out.push(marker::NO_PRE_TRACE),
        Some(events) => {
            out.push(marker::HAS_PRE_TRACE);
            encode_count(events.len(), &mut out);
            for event in events {
                encode_event(event, &mut out);
            }
        }
    }

    encode_payload(&trace.initial_config, &mut out);

    for event in &trace.events {
        encode_event(event, &mut out);
    }
    out.push(marker::END);
    out
}

fn encode_event(event: &TraceEvent, out: &mut Vec<u8>) {
    match event {
        TraceEvent::Rule {
            ordinal,
            substitution,
        } => {
            out.push(marker::RULE);
            out.extend_from_slice(&ordinal.to_le_bytes());
            encode_substitution(substitution, out);
        }
        TraceEvent::SideCondition {
            ordinal,
            substitution,
        } => {
            out.push(marker::SIDE_CONDITION);
            out.extend_from_slice(&ordinal.to_le_bytes());
            encode_substitution(substitution, out);
        }
        TraceEvent::Function {
            name,
            position,
            args,
        } => {
            out.push(marker::FUNCTION);
            encode_string(name, out);
            encode_position(position, out);
            encode_arguments(args, out);
        }
        TraceEvent::Hook {
            name,
            position,
            args,
            result,
        } => {
            out.push(marker::HOOK);
            encode_string(name, out);
            encode_position(position, out);
            encode_arguments(args, out);
            encode_payload(result, out);
        }
    }
}

fn encode_substitution(subst: &Substitution, out: &mut Vec<u8>) {
    encode_count(subst.len(), out);
    // BTreeMap iteration gives a deterministic (name-ordered) wire form.
    for (name, pattern) in subst {
        encode_string(name, out);
        encode_payload(pattern, out);
    }
}

fn encode_position(position: &RelativePosition, out: &mut Vec<u8>) {
    encode_count(position.0.len(), out);
    for step in &position.0 {
        out.extend_from_slice(&step.to_le_bytes());
    }
}

fn encode_arguments(args: &[Argument], out: &mut Vec<u8>) {
    encode_count(args.len(), out);
    for arg in args {
        match arg {
            Argument::Term(t) => {
                out.push(marker::ARG_TERM);
                encode_payload(t, out);
            }
            Argument::Event(e) => {
                out.push(marker::ARG_EVENT);
                encode_event(e, out);
            }
        }
    }
}

fn encode_string(s: &str, out: &mut Vec<u8>) {
    encode_count(s.len(), out);
    out.extend_from_slice(s.as_bytes());
}

fn encode_count(n: usize, out: &mut Vec<u8>) {
    out.extend_from_slice(&(n as u32).to_le_bytes());
}
