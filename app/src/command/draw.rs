use super::open_service;
use gerador_config::Config;
use gerador_core::{BankError, BankKey, Draw};

/// Strategy for drawing a record from the given or active bank.
///
/// The record goes to stdout; notices go to stderr so the output can be
/// piped straight into a clipboard tool.
#[derive(Debug, Clone, Copy)]
pub struct DrawStrategy;

impl super::CommandStrategy for DrawStrategy {
    type Input = Option<BankKey>;

    fn execute(&self, input: Self::Input) -> anyhow::Result<()> {
        let config = Config::load()?;
        let mut service = open_service(&config)?;

        let outcome = match input {
            Some(key) => service.draw(key),
            None => service.draw_active(),
        };

        match outcome {
            Ok(draw) => {
                if let Some(notice) = reshuffle_notice(&draw) {
                    eprintln!("{notice}");
                }
                println!("{}", draw.record.clipboard_text());
                Ok(())
            }
            Err(BankError::EmptyBank(key)) => {
                anyhow::bail!("Banco {key} está vazio. Adicione dados primeiro.")
            }
            Err(BankError::NoActiveBank) => {
                anyhow::bail!("Nenhum banco selecionado. Use 'gerador use <banco>'.")
            }
            Err(e) => Err(e.into()),
        }
    }
}

fn reshuffle_notice(draw: &Draw) -> Option<String> {
    draw.reshuffled.then(|| {
        format!(
            "Todos os nomes do banco {} foram gerados. Lista reiniciada.",
            draw.bank
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use gerador_core::Record;

    #[test]
    fn notice_only_after_reshuffle() {
        let mut draw = Draw {
            bank: BankKey::new(3).unwrap(),
            index: 0,
            record: Record::new("Ana", "12345678901", 1990),
            reshuffled: false,
        };
        assert!(reshuffle_notice(&draw).is_none());

        draw.reshuffled = true;
        assert_eq!(
            reshuffle_notice(&draw).unwrap(),
            "Todos os nomes do banco B-3 foram gerados. Lista reiniciada."
        );
    }
}
