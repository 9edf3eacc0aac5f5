use thiserror::Error;

use crate::model::BankKey;

pub type Result<T> = std::result::Result<T, BankError>;

/// Every failure the bank core can report. None of them is fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BankError {
    #[error("Não foi possível extrair dados válidos do trecho: \"{snippet}\". Verifique o formato.")]
    ExtractionFailed { snippet: String },

    #[error("CPF inválido \"{0}\": são necessários 11 dígitos.")]
    InvalidNationalId(String),

    #[error("ano {year} fora do intervalo {min}-{max}")]
    OutOfRange { year: i32, min: i32, max: i32 },

    #[error("CPF {national_id} já existe no {bank}.")]
    Duplicate { national_id: String, bank: BankKey },

    #[error("Banco {0} está vazio. Adicione dados primeiro.")]
    EmptyBank(BankKey),

    #[error("Banco {0} não encontrado.")]
    BankNotFound(BankKey),

    #[error("Não é possível excluir o último banco de dados.")]
    LastBank,

    #[error("Nenhum banco selecionado.")]
    NoActiveBank,

    #[error("Formato de arquivo inválido: {0}")]
    InvalidFile(String),

    #[error("Armazenamento indisponível: {0}")]
    StorageUnavailable(String),
}
