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

//! Durable storage for the bank store: the JSON file gateway and backups.

pub mod backup;
mod file;

pub use backup::{
    BACKUP_PREFIX, backup_file_name, export_json, import_json, read_backup, write_backup,
};
pub use file::JsonFileGateway;
