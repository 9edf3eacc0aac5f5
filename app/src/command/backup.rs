use super::open_service;
use chrono::Utc;
use gerador_config::Config;
use gerador_storage::{read_backup, write_backup};
use std::path::PathBuf;

/// Strategy for writing a timestamped backup of every bank.
#[derive(Debug, Clone, Copy)]
pub struct ExportStrategy;

impl super::CommandStrategy for ExportStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let service = open_service(&config)?;
        let dir = input.unwrap_or_else(|| config.backup_dir());

        let path = write_backup(service.store(), &dir, Utc::now())
            .map_err(|e| anyhow::anyhow!("Ocorreu um erro ao tentar criar o backup: {e:#}"))?;
        println!("Backup criado em {}", path.display());
        Ok(())
    }
}

/// Strategy for restoring a backup. An invalid file leaves the store as is.
#[derive(Debug, Clone, Copy)]
pub struct ImportStrategy;

impl super::CommandStrategy for ImportStrategy {
    type Input = PathBuf;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut service = open_service(&config)?;

        let store = read_backup(&input).map_err(|e| {
            anyhow::anyhow!(
                "Falha ao restaurar o backup. O arquivo pode estar corrompido ou em um formato incorreto.\n\nDetalhes: {e}"
            )
        })?;
        service.replace_store(store)?;
        println!("Backup restaurado com sucesso!");
        Ok(())
    }
}
