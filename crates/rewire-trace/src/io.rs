// crates/rewire-trace/src/io.rs

//! I/O helpers for traces.
//!
//! The binary layout is what engines emit; JSON/CBOR are export formats for
//! downstream tooling that wants the decoded, typed view. Export routines
//! auto-detect by extension (`.json` / `.cbor`, case-insensitive).

use crate::decoder::decode_proof_trace;
use crate::event::ProofTrace;
use crate::writer::encode_proof_trace;
use anyhow::{anyhow, Context, Result};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/* ---------------- Binary ---------------- */

/// Read and decode a binary trace file.
pub fn read_trace_binary<P: AsRef<Path>>(path: P) -> Result<ProofTrace> {
    let path_ref = path.as_ref();
    let bytes =
        std::fs::read(path_ref).with_context(|| format!("read {}", path_ref.display()))?;
    decode_proof_trace(&bytes)
        .with_context(|| format!("decode trace from {}", path_ref.display()))
}

/// Serialize a trace to the binary layout and write it to `path`.
pub fn write_trace_binary<P: AsRef<Path>>(path: P, trace: &ProofTrace) -> Result<()> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", path_ref.display()))?;
    let mut w = BufWriter::new(f);
    w.write_all(&encode_proof_trace(trace))
        .with_context(|| format!("write {}", path_ref.display()))?;
    w.flush().with_context(|| "flush trace writer")?;
    Ok(())
}

/* ---------------- JSON ---------------- */

/// Read a decoded trace from **JSON**.
pub fn read_trace_json<P: AsRef<Path>>(path: P) -> Result<ProofTrace> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", path_ref.display()))?;
    let rdr = BufReader::new(f);
    let v: ProofTrace = serde_json::from_reader(rdr).with_context(|| "deserialize JSON trace")?;
    Ok(v)
}

/// Write a decoded trace to **JSON** (pretty).
pub fn write_trace_json<P: AsRef<Path>>(path: P, trace: &ProofTrace) -> Result<()> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", path_ref.display()))?;
    let mut w = BufWriter::new(f);
    serde_json::to_writer_pretty(&mut w, trace).with_context(|| "serialize JSON trace")?;
    w.flush().with_context(|| "flush JSON writer")?;
    Ok(())
}

/* ---------------- CBOR ---------------- */

/// Read a decoded trace from **CBOR**.
pub fn read_trace_cbor<P: AsRef<Path>>(path: P) -> Result<ProofTrace> {
    let path_ref = path.as_ref();
    let f = File::open(path_ref).with_context(|| format!("open {}", path_ref.display()))?;
    let mut rdr = BufReader::new(f);
    let v: ProofTrace =
        ciborium::de::from_reader(&mut rdr).with_context(|| "deserialize CBOR trace")?;
    Ok(v)
}

/// Write a decoded trace to **CBOR**.
pub fn write_trace_cbor<P: AsRef<Path>>(path: P, trace: &ProofTrace) -> Result<()> {
    let path_ref = path.as_ref();
    let f = File::create(path_ref).with_context(|| format!("create {}", path_ref.display()))?;
    let mut w = BufWriter::new(f);
    ciborium::ser::into_writer(trace, &mut w).with_context(|| "serialize CBOR trace")?;
    w.flush().with_context(|| "flush CBOR writer")?;
    Ok(())
}

/* --------------- Auto-detect by extension --------------- */

/// Auto-detect **export** by extension (`.json` / `.cbor`, case-insensitive).
pub fn export_trace_auto<P: AsRef<Path>>(path: P, trace: &ProofTrace) -> Result<()> {
    match ext_lower(path.as_ref()).as_deref() {
        Some("json") => write_trace_json(path, trace),
        Some("cbor") => write_trace_cbor(path, trace),
        Some(other) => Err(anyhow!(
            "unsupported export extension: {} (supported: .json, .cbor)",
            other
        )),
        None => Err(anyhow!("path has no extension (expected .json or .cbor)")),
    }
}

#[inline]
fn ext_lower(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|s| s.to_ascii_lowercase())
}
