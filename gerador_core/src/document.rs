//! Persisted layout of a store.
//!
//! Storage and backup files share the legacy browser-storage layout:
//! parallel maps keyed by `B-n` / `P-n` plus the last active bank key.
//! Decoding is best-effort for missing fields and strict for anything that
//! would break a store invariant.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet, HashSet};
use tracing::warn;

use crate::error::{BankError, Result};
use crate::model::{Bank, BankKey, Record};
use crate::store::Store;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreDocument {
    #[serde(default)]
    pub databases: BTreeMap<String, Vec<Record>>,
    #[serde(default)]
    pub generated_indices: BTreeMap<String, Vec<usize>>,
    #[serde(default)]
    pub profile_names: BTreeMap<String, String>,
    #[serde(default)]
    pub last_active_bank_key: Option<String>,
}

/// Parses a storage key such as `B-3` with the given prefix.
fn parse_storage_key(raw: &str, prefix: &str) -> Option<u32> {
    raw.strip_prefix(prefix)?
        .strip_prefix('-')?
        .parse::<u32>()
        .ok()
        .filter(|n| *n > 0)
}

impl Store {
    /// Encodes the store into its persisted layout.
    #[must_use]
    pub fn to_document(&self) -> StoreDocument {
        let mut document = StoreDocument {
            last_active_bank_key: self.active_bank_key().map(|k| k.to_string()),
            ..StoreDocument::default()
        };

        for bank in self.banks() {
            let key = bank.key().to_string();
            document
                .databases
                .insert(key.clone(), bank.records().to_vec());
            document
                .generated_indices
                .insert(key, bank.consumed().iter().copied().collect());
            document
                .profile_names
                .insert(bank.key().profile_key(), bank.display_name().to_string());
        }

        document
    }

    /// Decodes a persisted document.
    ///
    /// Banks are renumbered to `B-1..B-n` in numeric order. Missing consumed
    /// sets and profile names are defaulted; out-of-range consumed indices
    /// are dropped. Fails with `InvalidFile` on malformed national ids,
    /// duplicate national ids within a bank, keys naming the same bank
    /// (`B-1` and `B-01`) or a document with no banks.
    pub fn from_document(document: StoreDocument) -> Result<Self> {
        let StoreDocument {
            databases,
            generated_indices,
            profile_names,
            last_active_bank_key,
        } = document;

        let mut numbered: Vec<(u32, String, Vec<Record>)> = Vec::with_capacity(databases.len());
        for (raw_key, records) in databases {
            match parse_storage_key(&raw_key, "B") {
                Some(number) => numbered.push((number, raw_key, records)),
                None => warn!("Ignoring bank with unrecognized key {raw_key:?}"),
            }
        }
        if numbered.is_empty() {
            return Err(BankError::InvalidFile("nenhum banco de dados encontrado".into()));
        }
        numbered.sort_by_key(|(number, _, _)| *number);
        if let Some(pair) = numbered.windows(2).find(|pair| pair[0].0 == pair[1].0) {
            return Err(BankError::InvalidFile(format!(
                "chaves {} e {} indicam o mesmo banco",
                pair[0].1, pair[1].1
            )));
        }

        let active_number = last_active_bank_key
            .as_deref()
            .and_then(|raw| parse_storage_key(raw, "B"));
        let mut active = None;

        let mut banks = Vec::with_capacity(numbered.len());
        for (index, (old_number, raw_key, records)) in numbered.into_iter().enumerate() {
            let key = BankKey::from_index(index);
            validate_records(&raw_key, &records)?;

            let consumed: BTreeSet<usize> = generated_indices
                .get(&raw_key)
                .map(|indices| {
                    indices
                        .iter()
                        .copied()
                        .filter(|i| *i < records.len())
                        .collect()
                })
                .unwrap_or_default();

            let display_name = profile_names
                .get(&format!("P-{old_number}"))
                .map(|name| name.trim())
                .filter(|name| !name.is_empty())
                .map_or_else(|| key.default_display_name(), str::to_string);

            if active_number == Some(old_number) {
                active = Some(key);
            }

            banks.push(Bank {
                key,
                records,
                consumed,
                display_name,
            });
        }

        Ok(Self::from_parts(banks, active))
    }
}

fn validate_records(bank: &str, records: &[Record]) -> Result<()> {
    let mut seen = HashSet::with_capacity(records.len());
    for record in records {
        if !record.has_valid_national_id() {
            return Err(BankError::InvalidFile(format!(
                "CPF inválido {:?} no {bank}",
                record.national_id
            )));
        }
        if !seen.insert(record.national_id.as_str()) {
            return Err(BankError::InvalidFile(format!(
                "CPF {} duplicado no {bank}",
                record.national_id
            )));
        }
    }
    Ok(())
}
