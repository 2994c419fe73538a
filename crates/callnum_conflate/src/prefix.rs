/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Subject labels for the class letters of an LC call number.
//!
//! Two kinds of label map are supported. A broad map holds one label per
//! class, with `|` between the levels of the hierarchy:
//!
//! ```text
//! Q  = Science
//! QA = Science|Mathematics
//! ```
//!
//! A detailed map holds either a plain label or a list of class number
//! ranges, each `{from-to=label}` with four digit bounds:
//!
//! ```text
//! QA = {0001-0043=General}{0075-0076=Computer science}
//! ```

use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;

use callnum_core::lc::leading_letters;
use callnum_core::try_lc_shelf_key;
use indexmap::IndexMap;

use crate::record::CallNumberRecord;

/// A lookup from class letters to a label.
pub trait LabelMap {
    fn label(&self, key: &str) -> Option<&str>;
}

impl<S: BuildHasher> LabelMap for HashMap<String, String, S> {
    fn label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl LabelMap for BTreeMap<String, String> {
    fn label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

impl<S: BuildHasher> LabelMap for IndexMap<String, String, S> {
    fn label(&self, key: &str) -> Option<&str> {
        self.get(key).map(String::as_str)
    }
}

/// Which kind of label map is in use, and what to take from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrefixLabel {
    /// Broad map. Part 0 is the whole hierarchy; part `n` is its `n`th level.
    Broad { part: usize },
    /// Detailed map, with class number ranges.
    Detailed,
}

/// The label for the record's best call number, when that is tagged LC.
///
/// The class letters are looked up as written and, for three letter
/// classes, again without the last letter.
pub fn prefix_label<M>(record: &CallNumberRecord, map: &M, style: PrefixLabel) -> Option<String>
where
    M: LabelMap + ?Sized,
{
    let best = record.best().filter(|entry| entry.is_lc_tagged())?;
    let value = best.value();
    let letters = leading_letters_any_case(value);
    if letters.is_empty() || letters.len() > 3 || letters != leading_letters(value) {
        return None;
    }

    let (prefix, label) = lookup(map, letters)?;
    match style {
        PrefixLabel::Broad { part: 0 } => Some(format!("{prefix} - {}", label.replace('|', " - "))),
        PrefixLabel::Broad { part } => {
            let level = label.split('|').nth(part - 1)?;
            Some(format!("{} - {level}", &prefix[..1]))
        }
        PrefixLabel::Detailed => detailed_label(prefix, label, value),
    }
}

fn leading_letters_any_case(value: &str) -> &str {
    let end = value
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(value.len());
    &value[..end]
}

fn lookup<'a, M>(map: &'a M, letters: &'a str) -> Option<(&'a str, &'a str)>
where
    M: LabelMap + ?Sized,
{
    let mut prefix = letters;
    loop {
        if let Some(label) = map.label(prefix) {
            return Some((prefix, label));
        }
        if prefix.len() != 3 {
            return None;
        }
        prefix = &prefix[..2];
    }
}

fn detailed_label(prefix: &str, label: &str, value: &str) -> Option<String> {
    if label.starts_with('{') {
        let key = try_lc_shelf_key(value).ok()?;
        let digits = key.get(4..8)?;
        return label
            .replace('{', "")
            .split('}')
            .filter_map(|range| {
                let mut parts = range.splitn(3, ['-', '=']);
                Some((parts.next()?, parts.next()?, parts.next()?))
            })
            .find(|(from, to, _)| *from <= digits && digits <= *to)
            .map(|(from, to, name)| {
                format!(
                    "{prefix}{}-{prefix}{} - {name}",
                    from.trim_start_matches('0'),
                    to.trim_start_matches('0')
                )
            });
    }

    let initial = &prefix[..1];
    if is_letter_range(label, initial) {
        Some(label.to_string())
    } else {
        Some(format!("{prefix} - {label}"))
    }
}

/// `QA-QZ - ...` style labels that already name their own range.
fn is_letter_range(label: &str, initial: &str) -> bool {
    let bytes = label.as_bytes();
    let initial = initial.as_bytes();
    bytes.len() >= 8
        && bytes[0] == initial[0]
        && bytes[1].is_ascii_uppercase()
        && bytes[2] == b'-'
        && bytes[3] == initial[0]
        && bytes[4].is_ascii_uppercase()
        && label[5..].starts_with(" - ")
}
