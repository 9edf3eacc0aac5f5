//! Record extraction from one free-text block.

use gerador_core::Record;

use crate::patterns::{Field, birth_year, national_id_digits};

/// Extracts a record from `text`, or `None` unless name, CPF and birth date
/// are all present.
///
/// Lines are trimmed and scanned in order; for each field the first line
/// whose label matches and whose value is acceptable wins. The name is
/// returned as written; callers format it.
#[must_use]
pub fn extract(text: &str) -> Option<Record> {
    let mut name: Option<&str> = None;
    let mut national_id: Option<String> = None;
    let mut year: Option<i32> = None;

    for line in text.lines().map(str::trim).filter(|l| !l.is_empty()) {
        if name.is_none() {
            name = Field::Name.value_after(line).filter(|v| !v.is_empty());
        }
        if national_id.is_none() {
            national_id = Field::NationalId
                .value_after(line)
                .and_then(national_id_digits);
        }
        if year.is_none() {
            year = Field::BirthDate.value_after(line).and_then(birth_year);
        }
    }

    Some(Record::new(name?, national_id?, year?))
}
