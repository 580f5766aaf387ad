// crates/rewire-cli/src/main.rs

#![forbid(unsafe_code)]
#![deny(
    rust_2018_idioms,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    clippy::todo
)]

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rewire_ast::Pattern;
use rewire_binary::{decode_header, files};
use rewire_trace::io as trace_io;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(
    name = "rewire",
    about = "Inspect and convert binary pattern/trace files",
    long_about = "Inspect and convert binary pattern/trace files.\n\nUse this tool to decode pattern files to their textual form, encode patterns from their JSON form, and decode or export proof traces.",
    version = env!("CARGO_PKG_VERSION"),
    disable_help_subcommand = true
)]
struct Cli {
    #[command(subcommand)]
    cmd: Cmd,
}

#[derive(Subcommand, Debug)]
enum Cmd {
    /// Decode a binary pattern file and print its textual form.
    Inspect {
        /// Input pattern file.
        #[arg(long)]
        pattern: PathBuf,

        /// Keep the engine's embedded raw-term payloads instead of
        /// stripping them to the structural skeleton.
        #[arg(long, default_value_t = false)]
        keep_raw_terms: bool,

        /// Use the streaming reader (requires a size-emitting ≥ 1.2.0 file).
        #[arg(long, default_value_t = false)]
        stream: bool,
    },

    /// Encode a pattern from its JSON form into the binary layout.
    Encode {
        /// Input JSON file holding the serde form of a pattern.
        #[arg(long)]
        input: PathBuf,

        /// Output path for the encoded pattern (size field emitted).
        #[arg(long, default_value = "pattern.rwt")]
        out: PathBuf,
    },

    /// Decode a binary proof trace; print a summary or export it.
    Trace {
        /// Input binary trace file.
        #[arg(long)]
        input: PathBuf,

        /// Optional export path (.json / .cbor); prints a summary if absent.
        #[arg(long)]
        out: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    init_tracing();

    let cli = Cli::parse();
    match cli.cmd {
        Cmd::Inspect {
            pattern,
            keep_raw_terms,
            stream,
        } => inspect(&pattern, keep_raw_terms, stream),
        Cmd::Encode { input, out } => encode(&input, &out),
        Cmd::Trace { input, out } => trace(&input, out.as_deref()),
    }
}

/// Initialize tracing with an env-driven filter (default INFO).
fn init_tracing() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let fmt_layer = fmt::layer().with_target(false).with_level(true).compact();

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

/// Ensure the parent directory for a file exists.
fn ensure_parent_dir(path: &Path) -> Result<()> {
    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("creating parent directory {}", dir.display()))?;
        }
    }
    Ok(())
}

fn inspect(pattern: &Path, keep_raw_terms: bool, stream: bool) -> Result<()> {
    info!(pattern=%pattern.display(), keep_raw_terms, stream, "inspecting pattern");

    let strip = !keep_raw_terms;
    let decoded = if stream {
        files::stream_pattern_file(pattern, strip)?
    } else {
        files::read_pattern_file(pattern, strip)?
    };

    // Report the file's own version, not the crate's current one.
    let bytes = std::fs::read(pattern).with_context(|| format!("read {}", pattern.display()))?;
    let (version, _) = decode_header(&bytes).context("decode header")?;

    println!("format version: {version}");
    println!("{decoded}");
    Ok(())
}

fn encode(input: &Path, out: &Path) -> Result<()> {
    info!(input=%input.display(), out=%out.display(), "encoding pattern");

    let f = std::fs::File::open(input).with_context(|| format!("open {}", input.display()))?;
    let pattern: Pattern = serde_json::from_reader(std::io::BufReader::new(f))
        .with_context(|| "deserialize JSON pattern")?;

    ensure_parent_dir(out)?;
    files::write_pattern_file(out, &pattern)
        .with_context(|| format!("writing pattern to {}", out.display()))?;

    println!("Encoded {} → {}", input.display(), out.display());
    Ok(())
}

fn trace(input: &Path, out: Option<&Path>) -> Result<()> {
    info!(input=%input.display(), "decoding trace");

    let decoded = trace_io::read_trace_binary(input)?;

    if let Some(out) = out {
        ensure_parent_dir(out)?;
        trace_io::export_trace_auto(out, &decoded)
            .with_context(|| format!("exporting trace to {}", out.display()))?;
        println!("Exported {} → {}", input.display(), out.display());
        return Ok(());
    }

    println!("format version: {}", decoded.version);
    match &decoded.pre_trace {
        Some(events) => println!("pre-trace: {} events", events.len()),
        None => println!("pre-trace: absent"),
    }
    println!("initial configuration: {}", decoded.initial_config);
    println!("events: {}", decoded.events.len());
    for (i, event) in decoded.events.iter().enumerate() {
        println!("  {i:4}: {event}");
    }
    Ok(())
}
