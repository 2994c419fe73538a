/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Property-based tests for classification, normalization and shelf keys.

use callnum_core::{is_valid_lc, lc_shelf_key, normalize_float, reverse_shelf_key};
use proptest::prelude::*;

proptest! {
    /// Property: an accepted LC call number never starts with I, O, W, X or Y
    #[test]
    fn valid_lc_never_starts_with_excluded_letter(
        input in "[A-Za-z]{1,3} ?[0-9]{1,4}(\\.[0-9]{1,3})?( [A-Z0-9.]{0,8})?"
    ) {
        if is_valid_lc(&input) {
            let first = input.chars().next().map(|c| c.to_ascii_uppercase());
            prop_assert!(!matches!(first, Some('I' | 'O' | 'W' | 'X' | 'Y')));
        }
    }

    /// Property: normalizing an already normalized number changes nothing
    #[test]
    fn normalize_float_is_idempotent(
        value in -1.0e6f64..1.0e6,
        before in -1i32..=6,
        after in 0i32..=6,
    ) {
        let once = normalize_float(&value.to_string(), before, after).unwrap();
        let twice = normalize_float(&once, before, after).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Property: class numbers shelve in numeric order
    #[test]
    fn lc_class_numbers_sort_numerically(
        letters in "[A-HJ-NP-VZ][A-Z]{0,2}",
        a in 0u32..10000,
        b in 0u32..10000,
    ) {
        prop_assume!(a < b);
        let lower = lc_shelf_key(&format!("{letters}{a}"));
        let higher = lc_shelf_key(&format!("{letters}{b}"));
        prop_assert!(lower < higher, "{} !< {}", lower, higher);
    }

    /// Property: reverse keys invert the order of alphanumeric keys
    #[test]
    fn reverse_keys_invert_order(a in "[0-9A-Z]{0,75}", b in "[0-9A-Z]{0,75}") {
        prop_assume!(a != b);
        let (low, high) = if a < b { (a, b) } else { (b, a) };
        prop_assert!(reverse_shelf_key(&low) > reverse_shelf_key(&high));
    }
}
