//! Bank and record domain model.
//!
//! # Invariants
//! - `Record::national_id` holds exactly 11 ASCII digits once stored.
//! - Every index in `Bank::consumed` is a valid offset into `Bank::records`.
//! - National ids are unique within one bank.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;
use std::str::FromStr;

/// Number of digits in a CPF.
pub const NATIONAL_ID_LEN: usize = 11;

/// One person extracted from free text.
///
/// Serialized with the field names used by the storage layout
/// (`cpf`, `yearOfBirth`), so older backups decode unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub name: String,
    #[serde(rename = "cpf")]
    pub national_id: String,
    #[serde(rename = "yearOfBirth")]
    pub birth_year: i32,
}

impl Record {
    pub fn new(name: impl Into<String>, national_id: impl Into<String>, birth_year: i32) -> Self {
        Self {
            name: name.into(),
            national_id: national_id.into(),
            birth_year,
        }
    }

    /// Returns whether `national_id` is exactly 11 ASCII digits.
    #[must_use]
    pub fn has_valid_national_id(&self) -> bool {
        self.national_id.len() == NATIONAL_ID_LEN
            && self.national_id.bytes().all(|b| b.is_ascii_digit())
    }

    /// Text shown to the user after a draw.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        format!("Nome: {}\nCPF: {}", self.name, self.national_id)
    }
}

/// Inclusive window of accepted birth years.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BirthYearWindow {
    pub min: i32,
    pub max: i32,
}

impl BirthYearWindow {
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    #[must_use]
    pub const fn contains(&self, year: i32) -> bool {
        year >= self.min && year <= self.max
    }
}

impl Default for BirthYearWindow {
    fn default() -> Self {
        Self::new(1974, 2004)
    }
}

/// Positional bank identifier, rendered as `B-n` (profile key `P-n`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BankKey(u32);

impl BankKey {
    /// Creates a key for bank number `number`.
    ///
    /// Returns `None` for zero; bank numbers start at 1.
    #[must_use]
    pub const fn new(number: u32) -> Option<Self> {
        if number == 0 { None } else { Some(Self(number)) }
    }

    #[must_use]
    pub const fn number(self) -> u32 {
        self.0
    }

    /// Zero-based position of this bank in the store.
    #[must_use]
    pub const fn index(self) -> usize {
        (self.0 - 1) as usize
    }

    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn from_index(index: usize) -> Self {
        Self(index as u32 + 1)
    }

    /// Profile key paired with this bank.
    #[must_use]
    pub fn profile_key(self) -> String {
        format!("P-{}", self.0)
    }

    /// Display name used when the profile has no custom name.
    #[must_use]
    pub fn default_display_name(self) -> String {
        format!("Perfil {}", self.0)
    }

    /// Key of the bank immediately before this one, if any.
    #[must_use]
    pub const fn previous(self) -> Option<Self> {
        Self::new(self.0 - 1)
    }
}

impl fmt::Display for BankKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "B-{}", self.0)
    }
}

/// Error returned when a bank key cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("chave de banco inválida: {0}")]
pub struct ParseBankKeyError(String);

impl FromStr for BankKey {
    type Err = ParseBankKeyError;

    /// Accepts `B-n`, `P-n` (any case) or a bare `n`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let digits = match trimmed.split_once('-') {
            Some((prefix, rest)) if prefix.eq_ignore_ascii_case("b") || prefix.eq_ignore_ascii_case("p") => {
                rest
            }
            Some(_) => return Err(ParseBankKeyError(s.to_string())),
            None => trimmed,
        };

        digits
            .parse::<u32>()
            .ok()
            .and_then(Self::new)
            .ok_or_else(|| ParseBankKeyError(s.to_string()))
    }
}

/// A named partition of records with its own draw bookkeeping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bank {
    pub(crate) key: BankKey,
    pub(crate) records: Vec<Record>,
    pub(crate) consumed: BTreeSet<usize>,
    pub(crate) display_name: String,
}

impl Bank {
    /// Creates an empty bank with the default display name.
    #[must_use]
    pub fn empty(key: BankKey) -> Self {
        Self {
            key,
            records: Vec::new(),
            consumed: BTreeSet::new(),
            display_name: key.default_display_name(),
        }
    }

    #[must_use]
    pub const fn key(&self) -> BankKey {
        self.key
    }

    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Indices drawn since the last reshuffle.
    #[must_use]
    pub const fn consumed(&self) -> &BTreeSet<usize> {
        &self.consumed
    }

    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Number of records not yet drawn in the current cycle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.records.len() - self.consumed.len()
    }

    #[must_use]
    pub fn contains_national_id(&self, national_id: &str) -> bool {
        self.records.iter().any(|r| r.national_id == national_id)
    }

    pub(crate) fn clear(&mut self) {
        self.records.clear();
        self.consumed.clear();
    }
}
