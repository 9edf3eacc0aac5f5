use super::open_service;
use gerador_config::Config;

/// Strategy for displaying configuration and a summary of the store.
///
/// The passphrase is masked.
#[derive(Debug, Clone, Copy)]
pub struct InfoStrategy;

impl super::CommandStrategy for InfoStrategy {
    type Input = ();

    fn execute(&self, _input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;

        println!("=== gerador Configuration ===\n");

        println!("Config file: {}", Config::config_path()?.display());
        println!();

        println!("Storage:");
        println!("  Data dir: {}", config.data_dir()?.display());
        println!("  Key: {}", config.storage.key);
        println!();

        println!("Banks:");
        println!("  Initial count: {}", config.banks.initial_count);
        println!(
            "  Birth years: {}-{}",
            config.banks.min_birth_year, config.banks.max_birth_year
        );
        println!(
            "  Passphrase: {}",
            mask(&config.security.confirmation_passphrase)
        );
        println!("  Backup dir: {}", config.backup_dir().display());
        println!();

        let service = open_service(&config)?;
        let store = service.store();
        println!("Store:");
        println!("  Banks: {}", store.bank_count());
        println!("  Records: {}", store.total_records());
        match store.active_bank() {
            Some(bank) => println!(
                "  Active: {} ({}, {} registro(s))",
                bank.key(),
                bank.display_name(),
                bank.len()
            ),
            None => println!("  Active: (none)"),
        }

        Ok(())
    }
}

fn mask(secret: &str) -> String {
    if secret.is_empty() {
        "(not set)".to_string()
    } else {
        "*".repeat(secret.chars().count())
    }
}
