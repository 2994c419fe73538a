/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Conflation settings.
//!
//! Every field has a default, so an empty document is a valid configuration:
//!
//! ```yaml
//! key-length: 5
//! max-listed-volumes: 10
//! scheme-aliases:
//!   MONO-SER: LC
//!   LCPER: LC
//! fields:
//!   holdings: "999wa':'"
//!   lc-fallback: "050ab"
//! ```

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// How call numbers are grouped and summarized for one record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct ConflateOptions {
    /// Number of leading characters that form a cluster key.
    pub key_length: usize,
    /// Longest summary, in characters, before it collapses to a volume count.
    pub max_summary_length: usize,
    /// Largest cluster whose members are still listed individually.
    pub max_listed_volumes: usize,
    /// Leave out values that are neither LC nor Dewey shaped.
    pub drop_unknown_schemes: bool,
    /// Holdings scheme names that stand for another scheme.
    pub scheme_aliases: IndexMap<String, String>,
    pub fields: FieldSpecs,
}

impl Default for ConflateOptions {
    fn default() -> Self {
        Self {
            key_length: 5,
            max_summary_length: 100,
            max_listed_volumes: 10,
            drop_unknown_schemes: true,
            scheme_aliases: IndexMap::from([
                ("MONO-SER".to_string(), "LC".to_string()),
                ("LCPER".to_string(), "LC".to_string()),
            ]),
            fields: FieldSpecs::default(),
        }
    }
}

impl ConflateOptions {
    /// Read options from YAML; missing keys keep their defaults.
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// The scheme a holdings scheme name stands for.
    pub fn resolve_scheme<'a>(&'a self, scheme: &'a str) -> &'a str {
        self.scheme_aliases
            .get(scheme)
            .map(String::as_str)
            .unwrap_or(scheme)
    }
}

/// Field specifications handed to the record accessor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case", default)]
pub struct FieldSpecs {
    /// Holdings values as `SCHEME:call number`.
    pub holdings: String,
    /// Catalog LC call numbers, used when holdings carry none.
    pub lc_fallback: String,
    pub full_call_number: String,
    pub call_number_label: String,
    pub call_number_subject: String,
    pub dewey: String,
    /// Geographic headings.
    pub region_places: String,
    /// Geographic subdivision chains, joined with `#`.
    pub region_subdivisions: String,
}

impl Default for FieldSpecs {
    fn default() -> Self {
        Self {
            holdings: "999wa':'".to_string(),
            lc_fallback: "050ab".to_string(),
            full_call_number: "099ab:090ab:050ab".to_string(),
            call_number_label: "090a:050a".to_string(),
            call_number_subject: "090a:050a".to_string(),
            dewey: "082a".to_string(),
            region_places: "651a".to_string(),
            region_subdivisions: "650z'#'".to_string(),
        }
    }
}
