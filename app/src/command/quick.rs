use super::read_text;
use gerador_extract::quick_extract;
use std::path::PathBuf;

/// Strategy for the quick name/CPF pickup. Touches no bank.
#[derive(Debug, Clone, Copy)]
pub struct QuickStrategy;

impl super::CommandStrategy for QuickStrategy {
    type Input = Option<PathBuf>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let text = read_text(input.as_deref())?;
        match quick_extract(&text) {
            Some(found) => {
                println!("{found}");
                Ok(())
            }
            None => anyhow::bail!(
                "Nenhuma informação de Nome ou CPF encontrada para extração rápida.\n\
                 Certifique-se que o texto contém linhas como 'Nome: SEU NOME' e 'CPF: SEU CPF'."
            ),
        }
    }
}
