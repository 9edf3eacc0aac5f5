//! Integration tests for single-block extraction.
//!
//! These tests verify that:
//! - Field order and bullet/whitespace prefixes do not matter
//! - Any missing field yields no record
//! - CPF punctuation is stripped and long digit runs are truncated

use gerador_extract::{extract, format_name};

const DATE_LINE: &str = "Data de Nascimento: 14/07/1985";

#[test]
fn test_any_field_order_extracts_same_record() {
    let lines = ["Nome: Carlos Eduardo", "CPF: 529.982.247-25", DATE_LINE];
    let orders = [[0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0]];

    for order in orders {
        let text = order.map(|i| lines[i]).join("\n");
        let record = extract(&text).unwrap();
        assert_eq!(record.name, "Carlos Eduardo", "order {order:?}");
        assert_eq!(record.national_id, "52998224725");
        assert_eq!(record.birth_year, 1985);
    }
}

#[test]
fn test_bullets_and_indentation_are_tolerated() {
    let text = "
        • Nome:   Fernanda Lima
        ** cpf : 111.444.777-35
        -   DATA DE NASCIMENTO : 3/9/1999 (25 anos)
    ";
    let record = extract(text).unwrap();
    assert_eq!(record.name, "Fernanda Lima");
    assert_eq!(record.national_id, "11144477735");
    assert_eq!(record.birth_year, 1999);
}

#[test]
fn test_data_nascimento_without_de() {
    let text = "Nome: Ana\nCPF: 12345678901\nData Nascimento: 01/01/1990";
    assert_eq!(extract(text).unwrap().birth_year, 1990);
}

#[test]
fn test_windows_line_endings() {
    let text = "Nome: Ana\r\nCPF: 12345678901\r\nData de Nascimento: 01/01/1990\r\n";
    let record = extract(text).unwrap();
    assert_eq!(record.name, "Ana");
    assert_eq!(record.birth_year, 1990);
}

#[test]
fn test_surrounding_noise_is_ignored() {
    let text = "Consulta realizada\nNome: Ana\nMãe: Maria\nCPF: 12345678901\nSexo: F\nData de Nascimento: 01/01/1990\nFim";
    let record = extract(text).unwrap();
    assert_eq!(record.name, "Ana");
}

#[test]
fn test_absent_fields() {
    assert!(extract("Nome: Ana\nCPF: 12345678901").is_none());
    assert!(extract("Nome: Ana\nData de Nascimento: 01/01/1990").is_none());
    assert!(extract("CPF: 12345678901\nData de Nascimento: 01/01/1990").is_none());
}

#[test]
fn test_fewer_than_eleven_digits() {
    let text = "Nome: Ana\nCPF: 1234567890\nData de Nascimento: 01/01/1990";
    assert!(extract(text).is_none());
}

#[test]
fn test_date_without_slashes_is_rejected() {
    let text = "Nome: Ana\nCPF: 12345678901\nData de Nascimento: 1990-01-01";
    assert!(extract(text).is_none());
}

#[test]
fn test_extracted_name_is_not_formatted() {
    let text = "Nome: JOÃO DA SILVA DE SOUZA\nCPF: 12345678901\nData de Nascimento: 01/01/1990";
    let record = extract(text).unwrap();
    assert_eq!(record.name, "JOÃO DA SILVA DE SOUZA");
    assert_eq!(format_name(&record.name), "João da Silva de Souza");
}
