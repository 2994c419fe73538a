/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Display forms of a record's first catalog call number.

use callnum_core::lc::leading_letters;

use crate::record::RecordFields;

/// The whole call number, uppercased with spaces removed: `QA76.73.J38`.
pub fn full_call_number<R>(record: &R, spec: &str) -> Option<String>
where
    R: RecordFields + ?Sized,
{
    record
        .first_field_value(spec)
        .map(|value| value.to_uppercase().replace(' ', ""))
}

/// Everything before the first period, uppercased: `QA76`.
pub fn call_number_label<R>(record: &R, spec: &str) -> Option<String>
where
    R: RecordFields + ?Sized,
{
    record.first_field_value(spec).map(|value| {
        let label = match value.find('.') {
            Some(dot) if dot > 0 => &value[..dot],
            _ => value.as_str(),
        };
        label.to_uppercase()
    })
}

/// The class letters, uppercased: `QA`.
pub fn call_number_subject<R>(record: &R, spec: &str) -> Option<String>
where
    R: RecordFields + ?Sized,
{
    let value = record.first_field_value(spec)?.to_uppercase();
    let letters = leading_letters(&value);
    (!letters.is_empty()).then(|| letters.to_string())
}
