//! Splitting pasted text into per-person blocks.

use once_cell::sync::Lazy;
use regex::Regex;

static BLOCK_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)nome:").unwrap_or_else(|e| unreachable!("{e}")));

/// Splits `text` right before every `nome:` (any case) and returns the
/// trimmed pieces in order.
///
/// Text before the first label forms its own block. Pieces without any
/// alphanumeric character (a bullet left over from `• Nome:`) are dropped.
#[must_use]
pub fn split_blocks(text: &str) -> Vec<&str> {
    let mut starts: Vec<usize> = BLOCK_START.find_iter(text).map(|m| m.start()).collect();
    if starts.first() != Some(&0) {
        starts.insert(0, 0);
    }
    starts.push(text.len());

    starts
        .windows(2)
        .map(|w| text[w[0]..w[1]].trim())
        .filter(|block| block.chars().any(char::is_alphanumeric))
        .collect()
}
