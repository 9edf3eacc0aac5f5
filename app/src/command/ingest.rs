use super::{open_service, read_text};
use gerador_config::Config;
use gerador_core::{BankError, BankKey};
use gerador_extract::ingest;
use std::path::PathBuf;
use tracing::info;

pub struct IngestInput {
    /// Target bank; the active bank when `None`.
    pub bank: Option<BankKey>,
    /// Source file; stdin when `None`.
    pub file: Option<PathBuf>,
}

/// Strategy for bulk-loading pasted text into a bank.
#[derive(Debug, Clone, Copy)]
pub struct IngestStrategy;

impl super::CommandStrategy for IngestStrategy {
    type Input = IngestInput;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut service = open_service(&config)?;

        let bank = match input.bank {
            Some(key) => key,
            None => service
                .store()
                .active_bank_key()
                .ok_or(BankError::NoActiveBank)?,
        };

        let text = read_text(input.file.as_deref())?;
        if text.trim().is_empty() {
            anyhow::bail!("Cole os dados no campo de texto antes de salvar.");
        }

        let window = service.settings().birth_years;
        let summary = service.transact(|store| ingest(store, bank, &text, window))??;
        info!(
            "Ingested into {bank}: {} saved, {} skipped, {} duplicate(s)",
            summary.saved, summary.skipped, summary.duplicates
        );

        println!("{summary}");
        Ok(())
    }
}
