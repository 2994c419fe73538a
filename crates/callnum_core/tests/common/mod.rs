/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

#![allow(dead_code)]

/// LC call numbers in shelf order.
pub const LC_SHELF: &[&str] = &[
    "A1 .B2",
    "A123",
    "A123.5",
    "B2 .C3",
    "M211 .M93 K.240 1988",
    "M211 .M93 K.1000 1988",
    "PS3511.A3 E4 1925",
    "PS3511.A3 E4 1930",
    "PS3511.A34",
    "QA9 .B3",
    "QA76 .J38",
    "QA76.73 .J38",
    "QA76.73 .J38 2005 v.2",
    "QA76.73 .J38 2005 v.10",
];

/// Dewey call numbers in shelf order.
pub const DEWEY_SHELF: &[&str] = &[
    "5",
    "99.5",
    "100",
    "813.54",
    "813.54 .S64 1999",
    "813.6 A1",
];

/// Things that are neither LC nor Dewey.
pub const UNKNOWN: &[&str] = &["Y 4.G 74/7", "Microfilm 1234", "ocm12345", ""];

/// Reverse the given slice into an owned vector.
pub fn reversed(items: &[&str]) -> Vec<String> {
    items.iter().rev().map(|s| s.to_string()).collect()
}
