#![deny(
    clippy::all,
    clippy::nursery,
    clippy::pedantic,
    clippy::style,
    clippy::complexity,
    clippy::perf,
    clippy::correctness,
    clippy::suspicious,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(
    clippy::similar_names,
    clippy::missing_safety_doc,
    clippy::missing_panics_doc,
    clippy::missing_errors_doc
)]

//! Text extraction for "Nome / CPF / Data de Nascimento" blocks.
//!
//! - `extract`: strict, line-anchored parsing of one block into a record
//! - `ingest`: split pasted text into blocks and store the valid ones
//! - `quick_extract`: loose name/CPF pickup for immediate copy

mod blocks;
mod extractor;
pub mod ingest;
mod name;
mod patterns;
mod quick;

pub use blocks::split_blocks;
pub use extractor::extract;
pub use ingest::{IngestIssue, IngestSummary, ingest};
pub use name::format_name;
pub use quick::quick_extract;
