use crate::domain::encounter_code::decode;
use crate::errors::domain::{DomainError, ValidationKind};

fn assert_invalid(code: &str) {
    match decode(code) {
        Err(DomainError::Validation(ValidationKind::InvalidEncounterCode, _)) => {}
        other => panic!("expected invalid code for {code:?}, got {other:?}"),
    }
}

#[test]
fn decodes_simple_code() {
    let setup = decode("003459").unwrap();
    assert_eq!(setup.deployment_id, 0);
    assert_eq!(setup.strategy_id, 0);
    assert_eq!(setup.scheme_pool, [0, 3, 4, 5, 9]);
}

#[test]
fn splits_first_digit_into_deployment_and_strategy() {
    // 0xB = 11 -> deployment 2, strategy 3
    let setup = decode("B00000").unwrap();
    assert_eq!(setup.deployment_id, 2);
    assert_eq!(setup.strategy_id, 3);

    // 0xF = 15 -> deployment 3, strategy 3
    let setup = decode("F00000").unwrap();
    assert_eq!(setup.deployment_id, 3);
    assert_eq!(setup.strategy_id, 3);
}

#[test]
fn sorts_scheme_pool_and_keeps_duplicates() {
    let setup = decode("00B4C0").unwrap();
    assert_eq!(setup.scheme_pool, [0, 0, 4, 11, 12]);

    let setup = decode("011111").unwrap();
    assert_eq!(setup.scheme_pool, [1, 1, 1, 1, 1]);
}

#[test]
fn accepts_lowercase_hex() {
    let setup = decode("00b4c0").unwrap();
    assert_eq!(setup.scheme_pool, [0, 0, 4, 11, 12]);
}

#[test]
fn rejects_wrong_length() {
    assert_invalid("");
    assert_invalid("00345");
    assert_invalid("0034599");
}

#[test]
fn rejects_non_hex_characters() {
    assert_invalid("00000g");
    assert_invalid("0000-1");
    assert_invalid("      ");
}

#[test]
fn rejects_scheme_digit_above_twelve() {
    // 0xD = 13 and 0xE = 14 are not scheme ids
    assert_invalid("00000D");
    assert_invalid("0E0000");
}

#[test]
fn boundary_scheme_digit_twelve_is_valid() {
    let setup = decode("0CCCCC").unwrap();
    assert_eq!(setup.scheme_pool, [12, 12, 12, 12, 12]);
}

#[test]
fn decode_is_deterministic() {
    assert_eq!(decode("7A04C2").unwrap(), decode("7A04C2").unwrap());
}
