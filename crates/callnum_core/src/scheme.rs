/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Call number scheme detection.
//!
//! Both checks are shape tests only. A string that fails both is
//! [`Scheme::Unknown`] and is left out of shelf key and cluster processing.

use std::fmt;

use winnow::ascii::digit1;
use winnow::combinator::opt;
use winnow::error::{ContextError, ErrMode};
use winnow::prelude::*;
use winnow::token::{one_of, take_while};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The classification scheme a call number is shaped like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Scheme {
    Lc,
    Dewey,
    Unknown,
}

impl Scheme {
    /// Classify a raw call number. LC wins when both shapes match.
    pub fn detect(raw: &str) -> Self {
        if is_valid_lc(raw) {
            Scheme::Lc
        } else if is_valid_dewey(raw) {
            Scheme::Dewey
        } else {
            Scheme::Unknown
        }
    }
}

impl fmt::Display for Scheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scheme::Lc => write!(f, "LC"),
            Scheme::Dewey => write!(f, "DEWEY"),
            Scheme::Unknown => write!(f, "UNKNOWN"),
        }
    }
}

/// LC classes never begin with I, O, W, X or Y.
fn is_lc_initial(c: char) -> bool {
    c.is_ascii_alphabetic() && !matches!(c.to_ascii_uppercase(), 'I' | 'O' | 'W' | 'X' | 'Y')
}

fn lc_class_shape<'s>(input: &mut &'s str) -> Result<&'s str, ErrMode<ContextError>> {
    (
        one_of(is_lc_initial),
        take_while(0..=2, |c: char| c.is_ascii_alphabetic()),
        take_while(0.., ' '),
        digit1,
        opt(('.', digit1)),
    )
        .take()
        .parse_next(input)
}

/// Parses the Dewey class number (`\d{1,3}(\.\d+)?`) and returns its text.
pub(crate) fn dewey_class<'s>(input: &mut &'s str) -> Result<&'s str, ErrMode<ContextError>> {
    (
        take_while(1..=3, |c: char| c.is_ascii_digit()),
        opt(('.', digit1)),
    )
        .take()
        .parse_next(input)
}

/// True when the trimmed value looks like a Library of Congress call number:
/// one to three letters (the first not I/O/W/X/Y), optional spaces, then a
/// class number. Anything may follow.
pub fn is_valid_lc(raw: &str) -> bool {
    let mut input = raw.trim();
    lc_class_shape(&mut input).is_ok()
}

/// True when the trimmed value starts with a one to three digit Dewey class,
/// optionally with a decimal fraction. Anything may follow.
pub fn is_valid_dewey(raw: &str) -> bool {
    let mut input = raw.trim();
    dewey_class(&mut input).is_ok()
}
