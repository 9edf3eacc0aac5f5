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

//! Bank bookkeeping for extracted personal records.
//!
//! Holds the record/bank model, the bank store with its renumbering rules,
//! the draw engine and the persistence seam. Text parsing lives in
//! `gerador_extract`; durable storage in `gerador_storage`.

pub mod document;
pub mod draw;
pub mod error;
pub mod gateway;
pub mod model;
pub mod service;
pub mod store;

pub use document::StoreDocument;
pub use draw::Draw;
pub use error::{BankError, Result};
pub use gateway::{MemoryGateway, STORAGE_KEY, StoreGateway};
pub use model::{Bank, BankKey, BirthYearWindow, NATIONAL_ID_LEN, ParseBankKeyError, Record};
pub use service::{BankService, ServiceSettings};
pub use store::{DEFAULT_INITIAL_BANKS, Store};
