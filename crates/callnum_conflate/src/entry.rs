/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Call numbers as they come off a record, and their normalized form.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use callnum_core::{is_valid_lc, Scheme};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::natural::normed_cmp;

/// Tag carried by Library of Congress holdings.
pub const LC_TAG: &str = "LC";

static WHITESPACE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s\s+").expect("whitespace regex must compile"));

static PERIOD_SPACING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s?\.\s?").expect("period regex must compile"));

static CLASS_GAP: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^(?P<letters>[A-Z][A-Z]?[A-Z]?) (?P<digit>[0-9])")
        .expect("class gap regex must compile")
});

static NON_CALL_NUMBER_CHARS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^A-Za-z0-9.]").expect("punctuation regex must compile"));

/// One call number read from a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawCallNumber {
    pub text: String,
    /// Scheme label from the holdings (`LC`), if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tag: Option<String>,
    /// Position within the record.
    #[serde(default)]
    pub ordinal: usize,
}

impl RawCallNumber {
    pub fn new(text: impl Into<String>, tag: Option<&str>, ordinal: usize) -> Self {
        Self {
            text: text.into(),
            tag: tag.map(str::to_string),
            ordinal,
        }
    }
}

/// A scheme tag and a call number with its spacing normalized.
///
/// Entries order naturally on `tag:value` with periods and spaces ignored,
/// and compare equal exactly when that ordering says so.
#[derive(Debug, Clone)]
pub struct CallNumberEntry {
    tag: Option<String>,
    value: String,
    sort_text: String,
}

impl CallNumberEntry {
    /// Uppercase, trim, collapse runs of whitespace, close up spacing around
    /// periods, and drop the space in `PS 3511`.
    pub fn new(tag: Option<&str>, raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        let value = WHITESPACE_RUN.replace_all(&upper, " ");
        let value = PERIOD_SPACING.replace_all(&value, ".");
        let value = CLASS_GAP.replace(&value, "${letters}${digit}");
        Self::with_value(tag, value.into_owned())
    }

    pub fn from_raw(raw: &RawCallNumber) -> Self {
        Self::new(raw.tag.as_deref(), &raw.text)
    }

    fn with_value(tag: Option<&str>, value: String) -> Self {
        let tag = tag.filter(|t| !t.is_empty()).map(str::to_string);
        let sort_text = match &tag {
            Some(tag) => format!("{tag}:{value}"),
            None => value.clone(),
        };
        Self {
            tag,
            value,
            sort_text,
        }
    }

    /// The same entry with everything but letters, digits and periods turned
    /// into single spaces.
    pub fn cleaned(&self) -> Self {
        let value = NON_CALL_NUMBER_CHARS.replace_all(self.value.trim(), " ");
        let value = WHITESPACE_RUN.replace_all(&value, " ");
        let value = PERIOD_SPACING.replace_all(&value, ".");
        Self::with_value(self.tag.as_deref(), value.trim().to_string())
    }

    pub fn tag(&self) -> Option<&str> {
        self.tag.as_deref()
    }

    /// The normalized call number, without its tag.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// The first `length` characters, uppercased. Tags are not part of it.
    pub fn cluster_key(&self, length: usize) -> String {
        self.value
            .chars()
            .take(length)
            .collect::<String>()
            .to_uppercase()
    }

    /// The scheme the value is shaped like.
    pub fn scheme(&self) -> Scheme {
        Scheme::detect(&self.value)
    }

    /// Tagged `LC`, or untagged and shaped like an LC call number.
    pub fn is_lc(&self) -> bool {
        match self.tag.as_deref() {
            Some(tag) => tag == LC_TAG,
            None => is_valid_lc(&self.value),
        }
    }

    pub fn is_lc_tagged(&self) -> bool {
        self.tag.as_deref() == Some(LC_TAG)
    }
}

impl fmt::Display for CallNumberEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.sort_text)
    }
}

impl Ord for CallNumberEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        normed_cmp(&self.sort_text, &other.sort_text)
    }
}

impl PartialOrd for CallNumberEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for CallNumberEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for CallNumberEntry {}
