//! Portuguese title-casing for person names.

/// Connectives kept lowercase unless they open the name.
const LOWERCASE_CONNECTIVES: [&str; 6] = ["de", "da", "do", "dos", "das", "e"];

/// Title-cases a raw name.
///
/// The whole name is lowercased and split on single spaces; each word gets
/// an uppercase first letter except connectives after the first word.
/// Empty tokens are dropped, so repeated spaces collapse.
#[must_use]
pub fn format_name(raw: &str) -> String {
    raw.to_lowercase()
        .split(' ')
        .enumerate()
        .filter(|(_, word)| !word.is_empty())
        .map(|(index, word)| {
            if index > 0 && LOWERCASE_CONNECTIVES.contains(&word) {
                word.to_string()
            } else {
                capitalize(word)
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}
