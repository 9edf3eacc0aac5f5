//! Integration tests for the command API and its persistence contract.

use gerador_core::{
    BankError, BankKey, BankService, BirthYearWindow, MemoryGateway, Record, ServiceSettings,
    StoreGateway,
};

fn key(n: u32) -> BankKey {
    BankKey::new(n).unwrap()
}

#[test]
fn test_fresh_gateway_yields_default_store() {
    let service = BankService::open(MemoryGateway::new(), ServiceSettings::default());
    assert_eq!(service.store().bank_count(), 5);
    assert_eq!(service.store().active_bank_key(), Some(key(1)));
}

#[test]
fn test_initial_bank_count_is_configurable() {
    let settings = ServiceSettings {
        initial_banks: 2,
        ..ServiceSettings::default()
    };
    let service = BankService::open(MemoryGateway::new(), settings);
    assert_eq!(service.store().bank_count(), 2);
}

#[test]
fn test_malformed_storage_falls_back_to_default() {
    for raw in ["{ not json", r#"{"databases": {}}"#, r#"[1, 2, 3]"#] {
        let service = BankService::open(MemoryGateway::with_contents(raw), ServiceSettings::default());
        assert_eq!(service.store().bank_count(), 5, "input {raw}");
    }
}

#[test]
fn test_every_mutation_is_saved() {
    let gateway = MemoryGateway::new();
    let mut service = BankService::open(&gateway, ServiceSettings::default());
    assert!(gateway.contents().is_none());

    service
        .add_record(key(2), Record::new("Ana", "12345678901", 1990))
        .unwrap();
    service.rename_profile(key(2), "Clientes").unwrap();
    service.set_active_bank(Some(key(2))).unwrap();

    let reopened = BankService::open(&gateway, ServiceSettings::default());
    assert_eq!(reopened.store(), service.store());
    assert_eq!(reopened.store().active_bank_key(), Some(key(2)));
}

#[test]
fn test_stored_store_without_active_bank_activates_first() {
    let gateway = MemoryGateway::new();
    let mut service = BankService::open(&gateway, ServiceSettings::default());
    service.set_active_bank(None).unwrap();
    assert!(gateway.load().unwrap().unwrap().last_active_bank_key.is_none());

    let reopened = BankService::open(&gateway, ServiceSettings::default());
    assert_eq!(reopened.store().active_bank_key(), Some(key(1)));
}

#[test]
fn test_failed_save_keeps_in_memory_change() {
    let gateway = MemoryGateway::new();
    let mut service = BankService::open(&gateway, ServiceSettings::default());
    gateway.set_failing(true);

    let result = service.create_bank();
    assert!(matches!(result, Err(BankError::StorageUnavailable(_))));
    assert_eq!(service.store().bank_count(), 6);
    assert!(gateway.contents().is_none());

    gateway.set_failing(false);
    service.persist().unwrap();
    assert!(gateway.contents().is_some());
}

#[test]
fn test_configured_window_applies_to_add_record() {
    let settings = ServiceSettings {
        birth_years: BirthYearWindow::new(1990, 1995),
        ..ServiceSettings::default()
    };
    let mut service = BankService::open(MemoryGateway::new(), settings);
    let result = service.add_record(key(1), Record::new("Ana", "12345678901", 1989));
    assert_eq!(
        result,
        Err(BankError::OutOfRange {
            year: 1989,
            min: 1990,
            max: 1995
        })
    );
}

#[test]
fn test_draw_active_requires_active_bank() {
    let mut service = BankService::open(MemoryGateway::new(), ServiceSettings::default());
    assert_eq!(service.draw_active(), Err(BankError::EmptyBank(key(1))));

    service.set_active_bank(None).unwrap();
    assert_eq!(service.draw_active(), Err(BankError::NoActiveBank));
}

#[test]
fn test_draw_is_persisted() {
    let gateway = MemoryGateway::new();
    let mut service = BankService::open(&gateway, ServiceSettings::default());
    service
        .add_record(key(1), Record::new("Ana", "12345678901", 1990))
        .unwrap();
    service
        .add_record(key(1), Record::new("Bia", "10987654321", 1991))
        .unwrap();

    let first = service.draw(key(1)).unwrap();
    let mut reopened = BankService::open(&gateway, ServiceSettings::default());
    let second = reopened.draw(key(1)).unwrap();
    assert_ne!(first.index, second.index);
}

#[test]
fn test_reset_all_restores_defaults() {
    let mut service = BankService::open(MemoryGateway::new(), ServiceSettings::default());
    service.create_bank().unwrap();
    service.rename_profile(key(1), "Casa").unwrap();
    service
        .add_record(key(1), Record::new("Ana", "12345678901", 1990))
        .unwrap();

    service.reset_all().unwrap();
    assert_eq!(service.store().bank_count(), 5);
    assert_eq!(service.store().total_records(), 0);
    assert_eq!(service.store().banks()[0].display_name(), "Perfil 1");
    assert_eq!(service.store().active_bank_key(), Some(key(1)));
}

#[test]
fn test_delete_last_bank_is_refused() {
    let settings = ServiceSettings {
        initial_banks: 1,
        ..ServiceSettings::default()
    };
    let mut service = BankService::open(MemoryGateway::new(), settings);
    assert_eq!(service.delete_bank(key(1)), Err(BankError::LastBank));
}

#[test]
fn test_malformed_national_id_never_reaches_storage() {
    let gateway = MemoryGateway::new();
    let mut service = BankService::open(&gateway, ServiceSettings::default());
    service
        .add_record(key(1), Record::new("Ana", "12345678901", 1990))
        .unwrap();

    let result = service.add_record(key(1), Record::new("Bia", "123", 1990));
    assert_eq!(result, Err(BankError::InvalidNationalId("123".to_string())));
    assert_eq!(service.store().total_records(), 1);

    let reopened = BankService::open(&gateway, ServiceSettings::default());
    assert_eq!(reopened.store().total_records(), 1);
    assert_eq!(reopened.store(), service.store());
}
