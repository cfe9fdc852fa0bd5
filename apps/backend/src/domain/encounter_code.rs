//! Encounter code codec.
//!
//! An encounter code is a 6-character base-16 string. The first digit
//! packs the deployment (high two bits) and strategy (low two bits); the
//! remaining five digits are the scheme pool. Decoding is pure and total:
//! any input that is not exactly six hex digits with every scheme digit
//! in range yields an invalid-code rejection, never a partial result.

use crate::domain::state::ScenarioSetup;
use crate::errors::domain::{DomainError, ValidationKind};

pub const ENCOUNTER_CODE_LEN: usize = 6;
pub const MAX_DEPLOYMENT_ID: u8 = 3;
pub const MAX_STRATEGY_ID: u8 = 3;
pub const MAX_SCHEME_ID: u8 = 12;

fn invalid(detail: impl Into<String>) -> DomainError {
    DomainError::validation(ValidationKind::InvalidEncounterCode, detail)
}

/// Decode an encounter code into scenario parameters.
pub fn decode(code: &str) -> Result<ScenarioSetup, DomainError> {
    if code.len() != ENCOUNTER_CODE_LEN {
        return Err(invalid(format!(
            "encounter code must be {ENCOUNTER_CODE_LEN} hex characters, got {}",
            code.len()
        )));
    }

    let mut digits = [0u8; ENCOUNTER_CODE_LEN];
    for (i, ch) in code.chars().enumerate() {
        match ch.to_digit(16) {
            // `len == 6` plus one digit per char guarantees ASCII input here
            Some(value) => digits[i] = value as u8,
            None => {
                return Err(invalid(format!("'{ch}' is not a hex digit")));
            }
        }
    }

    let deployment_id = digits[0] / 4;
    let strategy_id = digits[0] % 4;
    if deployment_id > MAX_DEPLOYMENT_ID || strategy_id > MAX_STRATEGY_ID {
        return Err(invalid(format!(
            "deployment {deployment_id} / strategy {strategy_id} out of range"
        )));
    }

    let mut scheme_pool = [0u8; 5];
    scheme_pool.copy_from_slice(&digits[1..]);
    if let Some(bad) = scheme_pool.iter().find(|&&d| d > MAX_SCHEME_ID) {
        return Err(invalid(format!("scheme id {bad} out of range")));
    }
    scheme_pool.sort_unstable();

    Ok(ScenarioSetup {
        deployment_id,
        strategy_id,
        scheme_pool,
    })
}
