/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Dewey Decimal call number components.

use winnow::ascii::digit1;
use winnow::combinator::{opt, preceded};
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::scheme::dewey_class;

/// A Dewey call number such as `813.54 .S64 1999`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub struct DeweyCallNumber {
    /// `813.54`
    pub class_digits: String,
    /// `S64`; the letter and digits may be followed by more letters (`S64 A`).
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cutter: Option<String>,
    /// Whatever follows the cutter: year, volume, copy.
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub cutter_suffix: Option<String>,
}

/// Letter, digits, then optional trailing letters, after an optional period.
fn cutter<'s>(input: &mut &'s str) -> Result<&'s str, ErrMode<ContextError>> {
    preceded(
        (take_while(0.., ' '), opt('.')),
        (
            one_of(|c: char| c.is_ascii_uppercase()),
            digit1,
            take_while(0.., ' '),
            take_while(0.., |c: char| c.is_ascii_uppercase()),
        )
            .take(),
    )
    .parse_next(input)
}

impl DeweyCallNumber {
    /// Parse the trimmed value, or `None` when it does not start with a
    /// Dewey class number.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut input = raw.trim();
        let class_digits = dewey_class(&mut input).ok()?.to_string();

        let cutter = opt(cutter)
            .parse_next(&mut input)
            .ok()
            .flatten()
            .map(|c| c.trim_end().to_string());
        // a suffix only counts once a cutter has been seen
        let cutter_suffix = cutter
            .as_ref()
            .map(|_| input.trim())
            .filter(|rest| !rest.is_empty())
            .map(str::to_string);

        Some(DeweyCallNumber {
            class_digits,
            cutter,
            cutter_suffix,
        })
    }
}

/// The class number in front of the cutter, e.g. `813.54` for
/// `813.54 .S64 1999`.
pub fn dewey_before_cutter(raw: &str) -> Option<String> {
    DeweyCallNumber::parse(raw).map(|parsed| parsed.class_digits)
}
