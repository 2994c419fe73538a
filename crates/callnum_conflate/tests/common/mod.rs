/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

use callnum_conflate::{CallNumberEntry, MemoryRecord};

/// Holdings field spec used by the default options.
pub const HOLDINGS: &str = "999wa':'";

/// Build untagged entries.
pub fn untagged(values: &[&str]) -> Vec<CallNumberEntry> {
    values.iter().map(|v| CallNumberEntry::new(None, v)).collect()
}

/// Build entries tagged `LC`.
pub fn lc(values: &[&str]) -> Vec<CallNumberEntry> {
    values.iter().map(|v| CallNumberEntry::new(Some("LC"), v)).collect()
}

/// A serial with a run of numbered volumes on the shelf.
pub fn volumes(prefix: &str, count: usize) -> Vec<String> {
    (1..=count).map(|v| format!("{prefix} v.{v}")).collect()
}

/// A record whose holdings are the given `SCHEME:call number` values.
pub fn holdings_record(id: &str, holdings: &[&str]) -> MemoryRecord {
    MemoryRecord::new(id).with_field(HOLDINGS, holdings.iter().copied())
}

/// A small catalog in the YAML layout the CLI reads.
pub const CATALOG_YAML: &str = r#"
- id: gatsby
  fields:
    "999wa':'":
      - "LC:PS3511 .A3 E4 1925"
      - "LC:PS3511 .A3 E4 1925 copy 2"
      - "MONO-SER:PS3511 .A3 E4 1925 copy 3"
    050ab: ["PS3511.A3 G7"]
    082a: ["813.52"]
    651a: ["Long Island (N.Y.)."]
    "650z'#'": ["New York#Long Island"]
- id: journal
  fields:
    "999wa':'":
      - "DEWEY:505 N285 v.1"
      - "DEWEY:505 N285 v.2"
      - "SUDOC:Y 4.G 74/7"
    050ab: ["Q1 .N2"]
- id: empty
"#;
