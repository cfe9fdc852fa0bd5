use proptest::prelude::*;

use crate::domain::encounter_code::{decode, MAX_SCHEME_ID};

proptest! {
    /// Decoding never panics and every accepted code yields in-range,
    /// sorted output.
    #[test]
    fn decode_total_over_hex_strings(code in "[0-9a-fA-F]{6}") {
        if let Ok(setup) = decode(&code) {
            prop_assert!(setup.deployment_id <= 3);
            prop_assert!(setup.strategy_id <= 3);
            prop_assert!(setup.scheme_pool.iter().all(|&d| d <= MAX_SCHEME_ID));
            prop_assert!(setup.scheme_pool.windows(2).all(|w| w[0] <= w[1]));
        }
    }

    #[test]
    fn decode_is_a_pure_function(code in "[0-9a-fA-F]{6}") {
        prop_assert_eq!(decode(&code), decode(&code));
    }

    /// A code is accepted iff every scheme digit is <= 12, so acceptance
    /// is decidable from the raw digits alone.
    #[test]
    fn acceptance_matches_digit_ranges(code in "[0-9a-fA-F]{6}") {
        let digits: Vec<u32> = code.chars().filter_map(|c| c.to_digit(16)).collect();
        let all_schemes_in_range = digits[1..].iter().all(|&d| d <= MAX_SCHEME_ID as u32);
        prop_assert_eq!(decode(&code).is_ok(), all_schemes_in_range);
    }

    #[test]
    fn anything_but_six_hex_chars_is_rejected(code in "[0-9a-zA-Z_]{0,8}") {
        let six_hex = code.len() == 6 && code.chars().all(|c| c.is_ascii_hexdigit());
        if !six_hex {
            prop_assert!(decode(&code).is_err());
        }
    }
}
