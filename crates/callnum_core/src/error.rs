/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use thiserror::Error;

/// Failures while turning a call number into a shelf key.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum CallNumberError {
    #[error("not a number: {value:?}")]
    InvalidNumber {
        value: String,
        #[source]
        source: std::num::ParseFloatError,
    },

    #[error("number is not finite: {0:?}")]
    NonFinite(String),

    #[error("not a Dewey call number: {0:?}")]
    NotDewey(String),
}

pub type Result<T> = std::result::Result<T, CallNumberError>;
