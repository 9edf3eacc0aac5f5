//! Static strategy pattern for CLI commands.
//!
//! Each command is a separate strategy type with its own input, dispatched
//! statically from `main`.

use gerador_config::Config;
use gerador_core::BankService;
use gerador_storage::JsonFileGateway;
use std::io::Read;
use std::path::Path;
use tracing::info;

mod backup;
mod banks;
mod draw;
mod info;
mod ingest;
mod init;
mod quick;
mod version;

pub use backup::{ExportStrategy, ImportStrategy};
pub use banks::{BankAction, BanksStrategy};
pub use draw::DrawStrategy;
pub use info::InfoStrategy;
pub use ingest::{IngestInput, IngestStrategy};
pub use init::InitStrategy;
pub use quick::QuickStrategy;
pub use version::VersionStrategy;

/// Contract for all command strategies.
///
/// Each strategy defines its own input type, so arguments are passed without
/// runtime casting or boxing.
pub trait CommandStrategy {
    type Input;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()>;
}

/// Opens the bank service over the configured store file.
fn open_service(config: &Config) -> anyhow::Result<BankService<JsonFileGateway>> {
    let gateway = JsonFileGateway::new(config.data_dir()?, &config.storage.key);
    info!("Store file: {}", gateway.path().display());
    Ok(BankService::open(gateway, config.service_settings()))
}

/// Gate for destructive commands.
fn confirm(config: &Config, senha: &str) -> anyhow::Result<()> {
    if !config.passphrase_matches(senha) {
        anyhow::bail!("Senha incorreta.");
    }
    Ok(())
}

/// Reads the whole input text from `file`, or stdin when absent.
fn read_text(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) => std::fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Erro ao ler {}: {e}", path.display())),
        None => {
            let mut text = String::new();
            std::io::stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}
