//! Backup export and restore.
//!
//! A backup is the persisted store layout pretty-printed with two-space
//! indentation. Restoring validates the top-level shape and decodes the
//! whole file before anything is replaced.

use anyhow::Context;
use chrono::{DateTime, Utc};
use gerador_core::{BankError, Store, StoreDocument};
use serde_json::Value;
use std::path::{Path, PathBuf};
use tracing::info;

pub const BACKUP_PREFIX: &str = "backup-gerador-dados-";

/// `backup-gerador-dados-YYYY-MM-DD-HH-MM-SS.json` for a UTC instant.
#[must_use]
pub fn backup_file_name(now: DateTime<Utc>) -> String {
    format!("{BACKUP_PREFIX}{}.json", now.format("%Y-%m-%d-%H-%M-%S"))
}

pub fn export_json(store: &Store) -> anyhow::Result<String> {
    serde_json::to_string_pretty(&store.to_document()).context("cannot serialize store")
}

/// Writes a backup into `dir` and returns its path.
pub fn write_backup(store: &Store, dir: &Path, now: DateTime<Utc>) -> anyhow::Result<PathBuf> {
    std::fs::create_dir_all(dir).with_context(|| format!("cannot create {}", dir.display()))?;
    let path = dir.join(backup_file_name(now));
    std::fs::write(&path, export_json(store)?)
        .with_context(|| format!("cannot write {}", path.display()))?;
    info!("Backup written to {}", path.display());
    Ok(path)
}

fn has_object_field(object: &serde_json::Map<String, Value>, field: &str) -> bool {
    object.get(field).is_some_and(Value::is_object)
}

/// Parses and validates backup contents into a store.
///
/// The top-level value must be an object with `databases` and
/// `profileNames` objects; the rest follows the store decoding rules.
pub fn import_json(raw: &str) -> gerador_core::Result<Store> {
    let value: Value =
        serde_json::from_str(raw).map_err(|e| BankError::InvalidFile(e.to_string()))?;

    let shape_ok = value
        .as_object()
        .is_some_and(|obj| has_object_field(obj, "databases") && has_object_field(obj, "profileNames"));
    if !shape_ok {
        return Err(BankError::InvalidFile(
            "esperado objeto com \"databases\" e \"profileNames\"".into(),
        ));
    }

    let document: StoreDocument =
        serde_json::from_value(value).map_err(|e| BankError::InvalidFile(e.to_string()))?;
    Store::from_document(document)
}

/// Reads and validates a backup file.
pub fn read_backup(path: &Path) -> gerador_core::Result<Store> {
    let raw = std::fs::read_to_string(path).map_err(|e| {
        BankError::InvalidFile(format!("erro ao ler {}: {e}", path.display()))
    })?;
    import_json(&raw)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn file_name_replaces_colons_and_t() {
        let now = Utc.with_ymd_and_hms(2026, 10, 19, 7, 5, 3).single().unwrap();
        assert_eq!(
            backup_file_name(now),
            "backup-gerador-dados-2026-10-19-07-05-03.json"
        );
    }

    #[test]
    fn export_uses_two_space_indentation() {
        let json = export_json(&Store::new(1)).unwrap();
        assert!(json.contains("\n  \"databases\": {\n    \"B-1\": []"));
    }

    #[test]
    fn shape_check_rejects_wrong_top_level() {
        for raw in [
            "[]",
            "null",
            r#"{"databases": []}"#,
            r#"{"databases": {"B-1": []}}"#,
            r#"{"databases": {"B-1": []}, "profileNames": "P-1"}"#,
        ] {
            assert!(
                matches!(import_json(raw), Err(BankError::InvalidFile(_))),
                "accepted {raw}"
            );
        }
    }

    #[test]
    fn record_without_cpf_is_rejected() {
        let raw = r#"{"databases": {"B-1": [{"name": "Ana", "yearOfBirth": 1990}]}, "profileNames": {}}"#;
        assert!(matches!(import_json(raw), Err(BankError::InvalidFile(_))));
    }
}
