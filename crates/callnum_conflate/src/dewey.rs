/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Dewey field values for faceting, searching and sorting.

use indexmap::IndexSet;

use callnum_core::{
    dewey_before_cutter, dewey_shelf_key, is_valid_dewey, normalize_float, CallNumberError,
};

use crate::error::{ConflateError, Result};
use crate::record::RecordFields;

/// Absorbs binary representation error before flooring, so `0.3 / 0.1` is 3.
const FLOOR_EPSILON: f64 = 1e-9;

/// Dewey class numbers rounded down to a multiple of `precision`.
///
/// A precision of 100 gives hundreds (`813.54` → `800`), 10 gives tens, 0.1
/// gives tenths (`813.5`). Results are rendered with three integer digits and
/// no trailing zeros, in record order without duplicates.
///
/// # Errors
///
/// Fails when `precision` is not a positive finite number.
pub fn dewey_numbers<R>(record: &R, spec: &str, precision: f64) -> Result<Option<Vec<String>>>
where
    R: RecordFields + ?Sized,
{
    if !precision.is_finite() || precision <= 0.0 {
        return Err(ConflateError::InvalidPrecision(precision));
    }

    let mut numbers = IndexSet::new();
    for value in record.list_field_values(spec) {
        if !is_valid_dewey(&value) {
            continue;
        }
        let Some(class) = dewey_before_cutter(&value) else {
            continue;
        };
        let number: f64 = class
            .parse()
            .map_err(|source| CallNumberError::InvalidNumber {
                value: class.clone(),
                source,
            })?;
        let rounded = (number / precision + FLOOR_EPSILON).floor() * precision;
        numbers.insert(normalize_float(&rounded.to_string(), 3, -1)?);
    }
    Ok((!numbers.is_empty()).then(|| numbers.into_iter().collect()))
}

/// Valid Dewey values, uppercased with spaces removed.
pub fn dewey_searchable<R>(record: &R, spec: &str) -> Option<Vec<String>>
where
    R: RecordFields + ?Sized,
{
    let values: IndexSet<String> = record
        .list_field_values(spec)
        .iter()
        .filter(|value| is_valid_dewey(value))
        .map(|value| value.to_uppercase().replace(' ', ""))
        .collect();
    (!values.is_empty()).then(|| values.into_iter().collect())
}

/// Shelf key of the first valid Dewey value.
pub fn dewey_sortable<R>(record: &R, spec: &str) -> Option<String>
where
    R: RecordFields + ?Sized,
{
    record
        .list_field_values(spec)
        .iter()
        .find(|value| is_valid_dewey(value))
        .map(|value| dewey_shelf_key(value))
}
