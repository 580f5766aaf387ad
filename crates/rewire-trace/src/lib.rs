//! Proof-trace interchange: a typed view of a rewriting engine's execution.
//!
//! A trace is a version header, an optional pre-trace event sequence
//! (setup activity such as hook calls preceding the first configuration),
//! one initial-configuration pattern, and the chronological sequence of
//! execution events. This crate provides:
//!
//! - `event`: the closed event model (`TraceEvent`, `Argument`,
//!   `ProofTrace`).
//! - `decoder`: the sequential state-machine decoder over a byte buffer.
//! - `writer`: the inverse, serializing a trace back to bytes (the engine
//!   side of the interchange, also used to build test fixtures).
//! - `io`: file helpers plus JSON/CBOR export of decoded traces.
//!
//! Decoded traces are immutable; consumers read them, never mutate them.

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

/// Sequential trace decoder.
pub mod decoder;
/// Closed event model.
pub mod event;
/// File helpers and JSON/CBOR export.
pub mod io;
/// Binary trace writer.
pub mod writer;

pub use decoder::decode_proof_trace;
pub use event::{Argument, ProofTrace, RelativePosition, TraceEvent};
pub use writer::encode_proof_trace;
