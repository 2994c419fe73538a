/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Forward shelf keys.
//!
//! A shelf key is a string whose plain byte order is the shelving order of
//! the call numbers it was built from, as long as both come from the same
//! scheme.

use log::warn;

use crate::dewey::DeweyCallNumber;
use crate::error::{CallNumberError, Result};
use crate::lc::LcCallNumber;
use crate::normalize::{normalize_cutter, normalize_float, normalize_suffix};
use crate::scheme::Scheme;

const CUTTER_DIGITS: i32 = 6;

/// Build the LC shelf key, failing when a numeric component does not parse.
///
/// The key is the class letters padded to four columns, the class number
/// padded to `0000.000000`, then each present component (class suffix, first
/// cutter, its suffix, second cutter, its suffix), space separated.
pub fn try_lc_shelf_key(raw: &str) -> Result<String> {
    let parsed = LcCallNumber::parse(raw);

    let mut key = format!("{:<4}", parsed.letters);
    key.push_str(&normalize_float(
        parsed.class_digits.as_deref().unwrap_or("0"),
        4,
        6,
    )?);

    if let Some(suffix) = &parsed.class_suffix {
        key.push(' ');
        key.push_str(&normalize_suffix(suffix)?);
    }

    if let Some(cutter) = &parsed.first_cutter {
        key.push(' ');
        key.push_str(&normalize_cutter(cutter, CUTTER_DIGITS)?);
        if let Some(suffix) = &parsed.first_cutter_suffix {
            key.push(' ');
            key.push_str(&normalize_suffix(suffix)?);
        }
        if let Some(cutter) = &parsed.second_cutter {
            key.push(' ');
            key.push_str(&normalize_cutter(cutter, CUTTER_DIGITS)?);
            if let Some(suffix) = &parsed.second_cutter_suffix {
                key.push(' ');
                key.push_str(&normalize_suffix(suffix)?);
            }
        }
    }

    Ok(key.trim().to_string())
}

/// LC shelf key; falls back to the uppercased call number when a component
/// cannot be normalized.
pub fn lc_shelf_key(raw: &str) -> String {
    try_lc_shelf_key(raw).unwrap_or_else(|err| {
        warn!("cannot build shelf key for {raw:?}: {err}");
        raw.trim().to_uppercase()
    })
}

/// Build the Dewey shelf key: class number padded to `000.00000000`, then the
/// cutter and its suffix exactly as written.
pub fn try_dewey_shelf_key(raw: &str) -> Result<String> {
    let parsed =
        DeweyCallNumber::parse(raw).ok_or_else(|| CallNumberError::NotDewey(raw.to_string()))?;

    let mut key = normalize_float(&parsed.class_digits, 3, 8)?;
    // TODO: normalize the cutter as a fraction, as the LC key does.
    for part in [&parsed.cutter, &parsed.cutter_suffix].into_iter().flatten() {
        key.push(' ');
        key.push_str(part);
    }
    Ok(key)
}

/// Dewey shelf key; falls back to the trimmed call number.
pub fn dewey_shelf_key(raw: &str) -> String {
    try_dewey_shelf_key(raw).unwrap_or_else(|err| {
        warn!("cannot build shelf key for {raw:?}: {err}");
        raw.trim().to_string()
    })
}

/// The shelf key for whichever scheme `raw` is shaped like.
pub fn shelf_key(raw: &str) -> Option<String> {
    match Scheme::detect(raw) {
        Scheme::Lc => Some(lc_shelf_key(raw)),
        Scheme::Dewey => Some(dewey_shelf_key(raw)),
        Scheme::Unknown => None,
    }
}
