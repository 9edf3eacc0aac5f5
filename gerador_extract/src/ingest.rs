//! Bulk ingestion of pasted text into one bank.
//!
//! Per-block problems never abort the batch; they are collected into an
//! [`IngestSummary`] reported once at the end.

use gerador_core::{BankError, BankKey, BirthYearWindow, Record, Result, Store};
use std::fmt;
use tracing::{debug, info};

use crate::blocks::split_blocks;
use crate::extractor::extract;
use crate::name::format_name;

/// Characters of a failing block echoed back to the user.
const SNIPPET_CHARS: usize = 60;

/// One block that was not stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestIssue {
    pub error: BankError,
    /// Name as it appeared for out-of-range records, formatted for
    /// duplicates, absent for extraction failures.
    pub name: Option<String>,
}

impl fmt::Display for IngestIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self.name.as_deref().unwrap_or_default();
        match &self.error {
            BankError::OutOfRange { year, min, max } => write!(
                f,
                "Registro para \"{name}\" (ano {year}) ignorado, fora do intervalo {min}-{max}."
            ),
            BankError::Duplicate { national_id, bank } => {
                write!(f, "CPF {national_id} ({name}) já existe no {bank}.")
            }
            other => write!(f, "{other}"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IngestSummary {
    pub bank: BankKey,
    pub saved: usize,
    /// Records outside the birth-year window.
    pub skipped: usize,
    pub duplicates: usize,
    pub issues: Vec<IngestIssue>,
}

impl IngestSummary {
    const fn new(bank: BankKey) -> Self {
        Self {
            bank,
            saved: 0,
            skipped: 0,
            duplicates: 0,
            issues: Vec::new(),
        }
    }

    /// At least one record saved and nothing to report.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.saved > 0 && self.issues.is_empty()
    }
}

impl fmt::Display for IngestSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} registro(s) salvo(s) em {}.", self.saved, self.bank)?;
        if self.skipped > 0 {
            write!(f, " {} ignorado(s).", self.skipped)?;
        }
        if self.duplicates > 0 {
            write!(f, " {} duplicado(s).", self.duplicates)?;
        }
        if !self.issues.is_empty() {
            write!(f, "\nDetalhes:")?;
            for issue in &self.issues {
                write!(f, "\n{issue}")?;
            }
        }
        Ok(())
    }
}

/// First 60 characters of a block, with `...` when cut.
fn snippet(block: &str) -> String {
    if block.chars().count() > SNIPPET_CHARS {
        let head: String = block.chars().take(SNIPPET_CHARS).collect();
        format!("{head}...")
    } else {
        block.to_string()
    }
}

/// Extracts every block of `text` and adds the valid records to `bank`.
///
/// Names are title-cased before storing. Fails only when `bank` does not
/// exist.
pub fn ingest(
    store: &mut Store,
    bank: BankKey,
    text: &str,
    window: BirthYearWindow,
) -> Result<IngestSummary> {
    if store.bank(bank).is_none() {
        return Err(BankError::BankNotFound(bank));
    }

    let mut summary = IngestSummary::new(bank);
    for block in split_blocks(text) {
        let Some(candidate) = extract(block) else {
            debug!("No record in block starting {:?}", snippet(block));
            summary.issues.push(IngestIssue {
                error: BankError::ExtractionFailed {
                    snippet: snippet(block),
                },
                name: None,
            });
            continue;
        };

        let formatted = format_name(&candidate.name);
        let record = Record::new(formatted.clone(), candidate.national_id, candidate.birth_year);
        match store.add_record_within(bank, record, window) {
            Ok(()) => summary.saved += 1,
            Err(error @ BankError::OutOfRange { .. }) => {
                summary.skipped += 1;
                summary.issues.push(IngestIssue {
                    error,
                    name: Some(candidate.name),
                });
            }
            Err(error @ BankError::Duplicate { .. }) => {
                summary.duplicates += 1;
                summary.issues.push(IngestIssue {
                    error,
                    name: Some(formatted),
                });
            }
            Err(other) => return Err(other),
        }
    }

    info!(
        "Ingested into {bank}: saved={}, skipped={}, duplicates={}, issues={}",
        summary.saved,
        summary.skipped,
        summary.duplicates,
        summary.issues.len()
    );
    Ok(summary)
}
