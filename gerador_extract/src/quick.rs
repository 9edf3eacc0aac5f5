//! Loose "extract and copy" of a single name/CPF pair.
//!
//! Looser than [`crate::extract`]: the keyword may sit anywhere within the
//! first ten characters of a line, the CPF may have any number of digits,
//! and no birth date is needed.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::name::format_name;

static NAME_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)nome").unwrap_or_else(|e| unreachable!("{e}")));
static CPF_KEYWORD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)cpf").unwrap_or_else(|e| unreachable!("{e}")));

/// Max character offset at which a keyword is still accepted.
const KEYWORD_WINDOW: usize = 10;

/// Value after the first colon following `keyword`, when the keyword's
/// first occurrence starts within [`KEYWORD_WINDOW`] characters.
fn keyword_value<'a>(keyword: &Regex, line: &'a str) -> Option<&'a str> {
    let found = keyword.find(line)?;
    if line[..found.start()].chars().count() >= KEYWORD_WINDOW {
        return None;
    }
    let after_keyword = &line[found.start()..];
    let colon = after_keyword.find(':')?;
    Some(after_keyword[colon + 1..].trim())
}

/// Returns `Nome: ...` and/or `CPF: ...` lines, or `None` when neither is
/// found.
#[must_use]
pub fn quick_extract(text: &str) -> Option<String> {
    let mut name_line: Option<String> = None;
    let mut cpf_line: Option<String> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if name_line.is_none() {
            name_line = keyword_value(&NAME_KEYWORD, line)
                .filter(|v| !v.is_empty())
                .map(|v| format!("Nome: {}", format_name(v)));
        }
        if cpf_line.is_none() {
            cpf_line = keyword_value(&CPF_KEYWORD, line)
                .map(|v| v.chars().filter(char::is_ascii_digit).collect::<String>())
                .filter(|digits| !digits.is_empty())
                .map(|digits| format!("CPF: {digits}"));
        }
        if name_line.is_some() && cpf_line.is_some() {
            break;
        }
    }

    let lines: Vec<String> = name_line.into_iter().chain(cpf_line).collect();
    (!lines.is_empty()).then(|| lines.join("\n"))
}
