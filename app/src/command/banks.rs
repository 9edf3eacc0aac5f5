use super::{confirm, open_service};
use gerador_config::Config;
use gerador_core::{BankKey, Store};

/// Bank management action selected on the command line.
#[derive(Debug, Clone)]
pub enum BankAction {
    List,
    Add,
    Use(BankKey),
    Rename { key: BankKey, name: Option<String> },
    Reset { key: BankKey, senha: String },
    Delete { key: BankKey, senha: String },
    ResetAll { senha: String },
}

/// Strategy for listing and restructuring banks.
///
/// Reset and delete actions require the confirmation passphrase.
#[derive(Debug, Clone, Copy)]
pub struct BanksStrategy;

impl super::CommandStrategy for BanksStrategy {
    type Input = BankAction;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut service = open_service(&config)?;

        match input {
            BankAction::List => print!("{}", render_banks(service.store())),
            BankAction::Add => {
                let key = service.create_bank()?;
                println!("Banco {key} e Perfil {} criados.", key.number());
            }
            BankAction::Use(key) => match service.set_active_bank(Some(key))? {
                Some(active) => println!("Banco ativo: {active}"),
                None => println!("Nenhum banco de dados disponível ou selecionado."),
            },
            BankAction::Rename { key, name } => {
                let name = service.rename_profile(key, name.as_deref().unwrap_or_default())?;
                println!("{} agora se chama \"{name}\".", key.profile_key());
            }
            BankAction::Reset { key, senha } => {
                confirm(&config, &senha)?;
                service.reset_bank(key)?;
                println!("Banco {key} foi resetado.");
            }
            BankAction::Delete { key, senha } => {
                confirm(&config, &senha)?;
                service.delete_bank(key)?;
                println!("Banco {key} foi excluído.");
            }
            BankAction::ResetAll { senha } => {
                confirm(&config, &senha)?;
                service.reset_all()?;
                println!("Todos os bancos de dados e perfis foram resetados.");
            }
        }

        Ok(())
    }
}

/// One line per bank: marker, key, profile name, record and remaining counts.
fn render_banks(store: &Store) -> String {
    let active = store.active_bank_key();
    let mut lines: Vec<String> = store
        .banks()
        .iter()
        .map(|bank| {
            let marker = if Some(bank.key()) == active { '*' } else { ' ' };
            format!(
                "{marker} {:<5} {:<20} {} registro(s), {} disponível(is)",
                bank.key().to_string(),
                bank.display_name(),
                bank.len(),
                bank.remaining()
            )
        })
        .collect();
    if active.is_none() {
        lines.push("Nenhum banco de dados disponível ou selecionado.".to_string());
    }
    lines.join("\n") + "\n"
}
