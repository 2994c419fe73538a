/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

use callnum_core::CallNumberError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConflateError {
    #[error(transparent)]
    CallNumber(#[from] CallNumberError),

    #[error("rounding precision must be a positive number, got {0}")]
    InvalidPrecision(f64),

    #[error("invalid YAML: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConflateError>;
