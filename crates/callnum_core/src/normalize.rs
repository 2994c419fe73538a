/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Fixed-width numeric rendering for shelf keys.
//!
//! Lexicographic order only agrees with numeric order when numbers share a
//! width, so every numeric component of a key goes through
//! [`normalize_float`] first.

use crate::error::{CallNumberError, Result};
use crate::lc::leading_letters;

/// Fraction digits kept when the caller asks for "as many as needed".
const MAX_FRACTION_DIGITS: usize = 12;

/// Width of every digit run inside a suffix.
const SUFFIX_DIGITS: i32 = 6;

/// Render `value` with `digits_before` integer digits and `digits_after`
/// fraction digits.
///
/// * A negative `digits_before` means no left padding; a zero integer part is
///   then dropped (`0.5` → `.5`) unless nothing else would be printed.
/// * A negative `digits_after` keeps up to twelve fraction digits and strips
///   trailing zeros.
///
/// Rounding is half-to-even. There is never a trailing bare `.`.
///
/// # Errors
///
/// Fails when `value` does not parse as a finite number.
///
/// ```
/// use callnum_core::normalize::normalize_float;
/// assert_eq!(normalize_float("12.5", 4, 6).unwrap(), "0012.500000");
/// assert_eq!(normalize_float("2", 6, 0).unwrap(), "000002");
/// assert_eq!(normalize_float("810.0", 3, -1).unwrap(), "810");
/// ```
pub fn normalize_float(value: &str, digits_before: i32, digits_after: i32) -> Result<String> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|source| CallNumberError::InvalidNumber {
            value: value.to_string(),
            source,
        })?;
    if !parsed.is_finite() {
        return Err(CallNumberError::NonFinite(value.to_string()));
    }

    let precision = usize::try_from(digits_after).unwrap_or(MAX_FRACTION_DIGITS);
    let formatted = format!("{:.*}", precision, parsed.abs());
    let (int_part, frac_part) = formatted
        .split_once('.')
        .unwrap_or((formatted.as_str(), ""));
    let frac_part = if digits_after < 0 {
        frac_part.trim_end_matches('0')
    } else {
        frac_part
    };

    let int_part = match usize::try_from(digits_before) {
        Ok(width) if width > 0 => format!("{int_part:0>width$}"),
        _ if int_part == "0" => String::new(),
        _ => int_part.to_string(),
    };

    let mut out = String::with_capacity(int_part.len() + frac_part.len() + 2);
    let is_zero = !int_part
        .chars()
        .chain(frac_part.chars())
        .any(|c| c != '0');
    if parsed < 0.0 && !is_zero {
        out.push('-');
    }
    out.push_str(&int_part);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    if int_part.is_empty() && frac_part.is_empty() {
        out.push('0');
    }
    Ok(out)
}

/// Normalize a cutter (`A34`) by reading its digits as the fraction `.34`.
///
/// The letters are kept as-is and followed by the fraction rendered with one
/// integer digit and `digits` fraction digits, so `A34` becomes `A0.340000`.
/// A single-letter cutter without digits sorts first (`A0.000000`). Digit
/// parts that are not plain integers are passed through untouched.
pub fn normalize_cutter(cutter: &str, digits: i32) -> Result<String> {
    let letters = leading_letters(cutter);
    let rest = &cutter[letters.len()..];

    let normalized = if !rest.is_empty() {
        let plain_integer =
            rest.bytes().all(|b| b.is_ascii_digit()) && rest.parse::<i32>().is_ok();
        if plain_integer {
            normalize_float(&format!(".{rest}"), 1, digits)?
        } else {
            rest.to_string()
        }
    } else if letters.chars().count() == 1 {
        normalize_float("0", 1, digits)?
    } else {
        String::new()
    };

    Ok(format!("{letters}{normalized}"))
}

/// Pad every run of digits in `suffix` to six digits so that `v.2` sorts
/// before `v.10`. Everything else is kept in place.
pub fn normalize_suffix(suffix: &str) -> Result<String> {
    let mut out = String::with_capacity(suffix.len() + 8);
    let mut rest = suffix;
    while let Some(start) = rest.find(|c: char| c.is_ascii_digit()) {
        out.push_str(&rest[..start]);
        let run = &rest[start..];
        let end = run
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(run.len());
        out.push_str(&normalize_float(&run[..end], SUFFIX_DIGITS, 0)?);
        rest = &run[end..];
    }
    out.push_str(rest);
    Ok(out)
}
