/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Library of Congress call number components.
//!
//! An LC call number reads as class letters, class number, an optional
//! class suffix, then up to two cutters, each with optional trailing text:
//!
//! ```text
//! M211 .M93 K.240 1988
//! ^ ^^  ^^^ ^^^^^^^^^^
//! | |   |   first cutter suffix
//! | |   first cutter
//! | class digits
//! class letters
//! ```
//!
//! Extraction is pattern based with a fallback for malformed cutters. No part
//! of the parse can fail; components that cannot be found are `None`.

use std::sync::LazyLock;

use regex::Regex;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Class letters and number, with an optional number-or-word class suffix.
const LC_CLASS: &str = r"[A-Z]{1,3}[0-9]+(?:\.[0-9]+)?(?: +(?:[0-9a-z][A-Za-z0-9_]*|[A-Z][^0-9]+[A-Za-z0-9_]*))?";

/// Text that may sit between cutters without being one.
const NOT_CUTTER: &str = r"[0-9a-z][A-Za-z0-9_]*|[A-Z][^0-9]+[A-Za-z0-9_]*";

static FIRST_CUTTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"{LC_CLASS} *\.?(?P<cutter>[A-Z][0-9]+)"))
        .expect("first cutter regex must compile")
});

static SECOND_CUTTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{LC_CLASS} *\.?[A-Z][0-9]+ *\.?(?P<cutter>[A-Z][0-9]+)"
    ))
    .expect("second cutter regex must compile")
});

static CUTTER_SUFFIX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{LC_CLASS} *\.?[A-Z][0-9]+ *(?P<suffix>{NOT_CUTTER})*"
    ))
    .expect("cutter suffix regex must compile")
});

static SUFFIX_BEFORE_PERIOD_CUTTER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"{LC_CLASS} *\.?[A-Z][0-9]+ *(?P<suffix>(?:{NOT_CUTTER})*.*)\.[A-Z][0-9]+"
    ))
    .expect("suffix before cutter regex must compile")
});

static PERIOD_CUTTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r" *\.[A-Z][0-9]+").expect("period cutter regex must compile"));

static CUTTER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z][0-9]+").expect("cutter regex must compile"));

static CLASS_SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Z ]+").expect("class separator regex must compile"));

/// The components of an LC call number, all uppercased.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct LcCallNumber {
    /// Leading class letters (`QA`). Empty when the input starts otherwise.
    pub letters: String,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub class_digits: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub class_suffix: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub first_cutter: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub first_cutter_suffix: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub second_cutter: Option<String>,
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub second_cutter_suffix: Option<String>,
}

/// A cutter and where it starts in the parsed string.
struct Span<'s> {
    text: &'s str,
    start: usize,
}

impl LcCallNumber {
    /// Split `raw` into its components. The input is trimmed and uppercased
    /// first.
    pub fn parse(raw: &str) -> Self {
        let upper = raw.trim().to_uppercase();
        let s = upper.as_str();

        let first_cutter = find_first_cutter(s);
        let class_region = match &first_cutter {
            Some(cutter) if cutter.start > 0 => {
                let before = s[..cutter.start].trim();
                before.strip_suffix('.').unwrap_or(before).trim()
            }
            _ => s,
        };

        let class_digits = CLASS_SEPARATOR
            .split(class_region)
            .nth(1)
            .map(str::trim)
            .filter(|digits| !digits.is_empty());
        let class_suffix = class_digits.and_then(|digits| {
            let end = class_region.find(digits)? + digits.len();
            non_empty(&class_region[end..])
        });

        let mut parsed = LcCallNumber {
            letters: leading_letters(s).to_string(),
            class_digits: class_digits.map(str::to_string),
            class_suffix,
            ..Default::default()
        };

        let Some(first) = first_cutter else {
            return parsed;
        };
        parsed.first_cutter = Some(first.text.to_string());

        let suffix = first_cutter_suffix(s);
        let second = match &suffix {
            Some((_, span_end)) => CUTTER.find_at(s, *span_end),
            None => SECOND_CUTTER
                .captures(s)
                .and_then(|caps| caps.name("cutter")),
        };
        parsed.first_cutter_suffix = suffix.map(|(text, _)| text);

        if let Some(second) = second {
            parsed.second_cutter = Some(second.as_str().to_string());
            parsed.second_cutter_suffix = non_empty(&s[second.end()..]);
        }
        parsed
    }

    /// The class letters and digits, e.g. `QA76.73`.
    pub fn class(&self) -> Option<String> {
        self.class_digits
            .as_ref()
            .map(|digits| format!("{}{digits}", self.letters))
    }
}

/// The leading run of uppercase ASCII letters.
pub fn leading_letters(s: &str) -> &str {
    let end = s
        .find(|c: char| !c.is_ascii_uppercase())
        .unwrap_or(s.len());
    &s[..end]
}

fn non_empty(s: &str) -> Option<String> {
    let trimmed = s.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Well-formed cutters come from the class-then-cutter pattern. Failing that,
/// the text after the last period (or last space) counts when it starts with
/// a letter.
fn find_first_cutter(s: &str) -> Option<Span<'_>> {
    if let Some(m) = FIRST_CUTTER
        .captures(s)
        .and_then(|caps| caps.name("cutter"))
    {
        return Some(Span {
            text: m.as_str(),
            start: m.start(),
        });
    }

    let separator = s.rfind('.').or_else(|| s.rfind(' '))?;
    let after = &s[separator + 1..];
    let text = after.trim();
    let start = separator + 1 + (after.len() - after.trim_start().len());
    text.chars()
        .next()
        .filter(|c| c.is_alphabetic())
        .map(|_| Span { text, start })
}

/// Returns the suffix text and the end of the span it was taken from.
fn first_cutter_suffix(s: &str) -> Option<(String, usize)> {
    let direct = CUTTER_SUFFIX
        .captures(s)
        .and_then(|caps| caps.name("suffix"))
        .filter(|m| !m.as_str().is_empty());

    if let Some(group) = direct {
        let mut suffix = group.as_str().trim().to_string();
        let mut span_end = group.end();
        if span_end < s.len() {
            // filler runs on until a period-prefixed cutter or the end
            let stop = PERIOD_CUTTER
                .find_at(s, span_end)
                .map_or(s.len(), |m| m.start());
            let filler = s[span_end..stop].trim();
            if !filler.is_empty() {
                suffix.push(' ');
                suffix.push_str(filler);
            }
            span_end = stop;
        }
        return Some((suffix, span_end));
    }

    let group = SUFFIX_BEFORE_PERIOD_CUTTER
        .captures(s)
        .and_then(|caps| caps.name("suffix"))?;
    let text = group.as_str().trim();
    (!text.is_empty()).then(|| (text.to_string(), group.end()))
}
