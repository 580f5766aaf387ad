//! In-memory object model for rewrite-calculus terms.
//!
//! This crate is the stable boundary the codecs operate on:
//!
//! - `sort`: type annotations (`Sort`), a variable or a name parameterized
//!   by other sorts.
//! - `symbol`: constructor identities (`Symbol`) with ordered sort
//!   arguments and formal sort parameters.
//! - `pattern`: the term language itself (`Pattern`), built from symbols,
//!   variables, and string literals.
//!
//! Subterms reused across trees (substitution results, alias expansion) are
//! shared through `Arc` rather than deep-copied; once built, values are
//! treated as immutable and substitution produces a new tree.

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

/// The term language: composite applications, variables, string literals.
pub mod pattern;
/// Constructor identities with their sort signatures.
pub mod symbol;
/// Sort (type annotation) trees.
pub mod sort;

pub use pattern::{Pattern, Substitution, RAW_TERM_SYMBOL};
pub use sort::{Sort, SortSubstitution};
pub use symbol::Symbol;
