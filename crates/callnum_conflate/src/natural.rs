/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Natural ordering: `v.2` before `v.10`, case ignored.

use std::cmp::Ordering;

/// Compare two strings with runs of digits compared by value.
///
/// Other characters compare by their lowercase form. Equal numbers written
/// with different zero padding order the shorter spelling first.
pub fn natural_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    natural_cmp_chars(&a, &b)
}

/// [`natural_cmp`] with periods and spaces ignored, so `QA76.73 .J38` and
/// `QA76.73.J38` are the same call number.
pub fn normed_cmp(a: &str, b: &str) -> Ordering {
    let a: Vec<char> = a.chars().filter(|c| !is_ignorable(*c)).collect();
    let b: Vec<char> = b.chars().filter(|c| !is_ignorable(*c)).collect();
    natural_cmp_chars(&a, &b)
}

/// Character equality used when growing a common prefix: case is ignored
/// and a period matches a space.
pub fn loosely_equal(a: char, b: char) -> bool {
    (is_ignorable(a) && is_ignorable(b)) || fold(a) == fold(b)
}

fn is_ignorable(c: char) -> bool {
    matches!(c, '.' | ' ')
}

fn fold(c: char) -> char {
    let mut lower = c.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => c,
    }
}

fn digit_run_end(chars: &[char], start: usize) -> usize {
    chars[start..]
        .iter()
        .position(|c| !c.is_ascii_digit())
        .map_or(chars.len(), |offset| start + offset)
}

fn natural_cmp_chars(a: &[char], b: &[char]) -> Ordering {
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        if a[i].is_ascii_digit() && b[j].is_ascii_digit() {
            let (end_a, end_b) = (digit_run_end(a, i), digit_run_end(b, j));
            let (run_a, run_b) = (&a[i..end_a], &b[j..end_b]);
            let ordering = compare_numbers(run_a, run_b);
            if ordering != Ordering::Equal {
                return ordering;
            }
            i = end_a;
            j = end_b;
        } else {
            let ordering = fold(a[i]).cmp(&fold(b[j]));
            if ordering != Ordering::Equal {
                return ordering;
            }
            i += 1;
            j += 1;
        }
    }
    (a.len() - i).cmp(&(b.len() - j))
}

fn compare_numbers(a: &[char], b: &[char]) -> Ordering {
    let significant = |run: &[char]| {
        let zeros = run.iter().take_while(|c| **c == '0').count();
        run.len() - zeros
    };
    let (digits_a, digits_b) = (significant(a), significant(b));
    digits_a
        .cmp(&digits_b)
        .then_with(|| a[a.len() - digits_a..].cmp(&b[b.len() - digits_b..]))
        .then_with(|| a.len().cmp(&b.len()))
}
