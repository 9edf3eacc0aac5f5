//! Integration tests for bank bookkeeping.
//!
//! These tests verify that:
//! - Dedup is per bank
//! - The birth-year window is enforced on insert
//! - Deleting a bank renumbers the banks above it and moves the active key

use gerador_core::{BankError, BankKey, BirthYearWindow, Record, Store};

fn key(n: u32) -> BankKey {
    BankKey::new(n).unwrap()
}

fn person(name: &str, cpf: &str) -> Record {
    Record::new(name, cpf, 1988)
}

/// Four banks, each holding one record tagged with its bank number.
fn four_tagged_banks() -> Store {
    let mut store = Store::new(4);
    for n in 1..=4 {
        store
            .add_record(key(n), person(&format!("Banco {n}"), &format!("{n:011}")))
            .unwrap();
        store.rename_profile(key(n), &format!("Perfil do banco {n}")).unwrap();
    }
    store
}

#[test]
fn test_duplicate_rejected_in_same_bank_only() {
    let mut store = Store::new(2);
    store.add_record(key(1), person("Ana", "12345678901")).unwrap();

    let again = store.add_record(key(1), person("Ana Maria", "12345678901"));
    assert_eq!(
        again,
        Err(BankError::Duplicate {
            national_id: "12345678901".to_string(),
            bank: key(1),
        })
    );
    assert_eq!(store.bank(key(1)).unwrap().len(), 1);

    store.add_record(key(2), person("Ana", "12345678901")).unwrap();
    assert_eq!(store.bank(key(2)).unwrap().len(), 1);
}

#[test]
fn test_birth_year_window_boundaries() {
    let mut store = Store::new(1);
    let window = BirthYearWindow::default();

    for (cpf, year, accepted) in [
        ("00000000001", 1973, false),
        ("00000000002", 1974, true),
        ("00000000003", 2004, true),
        ("00000000004", 2005, false),
    ] {
        let result = store.add_record_within(key(1), Record::new("X", cpf, year), window);
        assert_eq!(result.is_ok(), accepted, "year {year}");
        if !accepted {
            assert_eq!(
                result,
                Err(BankError::OutOfRange {
                    year,
                    min: 1974,
                    max: 2004
                })
            );
        }
    }
    assert_eq!(store.bank(key(1)).unwrap().len(), 2);
}

#[test]
fn test_malformed_national_id_rejected() {
    let mut store = Store::new(1);
    for cpf in ["123", "1234567890", "123456789012", "123.456.789", "1234567890a"] {
        assert_eq!(
            store.add_record(key(1), person("Bia", cpf)),
            Err(BankError::InvalidNationalId(cpf.to_string())),
            "cpf {cpf}"
        );
    }
    assert!(store.bank(key(1)).unwrap().is_empty());
}

#[test]
fn test_add_record_to_missing_bank() {
    let mut store = Store::new(2);
    assert_eq!(
        store.add_record(key(3), person("Ana", "12345678901")),
        Err(BankError::BankNotFound(key(3)))
    );
}

#[test]
fn test_delete_middle_bank_renumbers_higher_banks() {
    let mut store = four_tagged_banks();
    store.delete_bank(key(2)).unwrap();

    assert_eq!(store.bank_count(), 3);
    let keys: Vec<String> = store.banks().iter().map(|b| b.key().to_string()).collect();
    assert_eq!(keys, ["B-1", "B-2", "B-3"]);

    let former_third = store.bank(key(2)).unwrap();
    assert_eq!(former_third.records()[0].name, "Banco 3");
    assert_eq!(former_third.display_name(), "Perfil do banco 3");
    assert_eq!(store.bank(key(3)).unwrap().records()[0].name, "Banco 4");
    assert_eq!(store.bank(key(1)).unwrap().records()[0].name, "Banco 1");
}

#[test]
fn test_delete_shifts_active_key_above_deleted() {
    for (active_before, active_after) in [(3, 2), (4, 3)] {
        let mut store = four_tagged_banks();
        store.set_active_bank(Some(key(active_before)));
        store.delete_bank(key(2)).unwrap();

        assert_eq!(store.active_bank_key(), Some(key(active_after)));
        let active = store.active_bank().unwrap();
        assert_eq!(active.records()[0].name, format!("Banco {active_before}"));
    }
}

#[test]
fn test_delete_keeps_active_key_below_deleted() {
    let mut store = four_tagged_banks();
    store.set_active_bank(Some(key(1)));
    store.delete_bank(key(2)).unwrap();
    assert_eq!(store.active_bank_key(), Some(key(1)));
}

#[test]
fn test_delete_active_bank_selects_previous_bank() {
    let mut store = four_tagged_banks();
    store.set_active_bank(Some(key(3)));
    store.delete_bank(key(3)).unwrap();

    assert_eq!(store.active_bank_key(), Some(key(2)));
    assert_eq!(store.active_bank().unwrap().records()[0].name, "Banco 2");
}

#[test]
fn test_delete_without_active_bank_stays_inactive() {
    let mut store = four_tagged_banks();
    store.set_active_bank(None);
    store.delete_bank(key(4)).unwrap();
    assert_eq!(store.active_bank_key(), None);
}

#[test]
fn test_delete_unknown_bank() {
    let mut store = Store::new(2);
    assert_eq!(store.delete_bank(key(7)), Err(BankError::BankNotFound(key(7))));
    assert_eq!(store.bank_count(), 2);
}

#[test]
fn test_create_after_delete_continues_numbering() {
    let mut store = four_tagged_banks();
    store.delete_bank(key(1)).unwrap();
    assert_eq!(store.create_bank(), key(4));
    assert_eq!(store.bank(key(4)).unwrap().display_name(), "Perfil 4");
}

#[test]
fn test_reset_bank_clears_records_and_history() {
    let mut store = four_tagged_banks();
    let mut rng = rand::rng();
    store.draw(key(2), &mut rng).unwrap();

    store.reset_bank(key(2)).unwrap();
    let bank = store.bank(key(2)).unwrap();
    assert!(bank.is_empty());
    assert!(bank.consumed().is_empty());
    assert_eq!(bank.display_name(), "Perfil do banco 2");
    assert_eq!(store.bank_count(), 4);
}
