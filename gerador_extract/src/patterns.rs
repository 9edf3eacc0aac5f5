//! Line anchors for the labelled fields of a personal-data block.
//!
//! Each pattern matches a keyword at the start of a trimmed line, optionally
//! preceded by bullet characters (`•`, `*`, `-`, ...) and whitespace, and
//! followed by a colon. Everything after the colon is the field value.

use once_cell::sync::Lazy;
use regex::Regex;

static NAME: Lazy<Regex> = Lazy::new(|| compile(r"nome"));
static NATIONAL_ID: Lazy<Regex> = Lazy::new(|| compile(r"cpf"));
static BIRTH_DATE: Lazy<Regex> = Lazy::new(|| compile(r"data\s*(?:de\s*)?nascimento"));

/// `D/M/YYYY` or `DD/MM/YYYY` at the start of a value; only the year is kept.
static DATE_PREFIX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([0-9]{1,2})/([0-9]{1,2})/([0-9]{4})").unwrap_or_else(|e| unreachable!("{e}"))
});

fn compile(keyword: &str) -> Regex {
    let pattern = format!(r"(?i)^(?:[^a-z0-9\s]*\s*)?{keyword}\s*:");
    Regex::new(&pattern).unwrap_or_else(|e| unreachable!("invalid built-in pattern {pattern}: {e}"))
}

/// A labelled field recognised in free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// `Nome:`
    Name,
    /// `CPF:`
    NationalId,
    /// `Data de Nascimento:` / `Data Nascimento:`
    BirthDate,
}

impl Field {
    fn pattern(self) -> &'static Regex {
        match self {
            Self::Name => &NAME,
            Self::NationalId => &NATIONAL_ID,
            Self::BirthDate => &BIRTH_DATE,
        }
    }

    /// Returns the trimmed text after the label when `line` starts with it.
    #[must_use]
    pub fn value_after(self, line: &str) -> Option<&str> {
        self.pattern().find(line).map(|m| line[m.end()..].trim())
    }
}

/// Keeps the ASCII digits of `value`; `None` unless at least 11 remain.
/// The result is truncated to the first 11 digits.
#[must_use]
pub fn national_id_digits(value: &str) -> Option<String> {
    let digits: String = value.chars().filter(char::is_ascii_digit).collect();
    (digits.len() >= gerador_core::NATIONAL_ID_LEN)
        .then(|| digits[..gerador_core::NATIONAL_ID_LEN].to_string())
}

/// Year of a value starting with `D{1,2}/M{1,2}/YYYY`.
#[must_use]
pub fn birth_year(value: &str) -> Option<i32> {
    DATE_PREFIX
        .captures(value)
        .and_then(|caps| caps.get(3))
        .and_then(|year| year.as_str().parse().ok())
}
