/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Call number parsing and shelf keys
//!
//! This crate recognizes Library of Congress and Dewey Decimal call numbers,
//! splits them into their components, and builds shelf keys: strings whose
//! ordinary byte order is the order the items stand on the shelf. Reverse
//! shelf keys sort the other way, for browsing backwards.
//!
//! Everything here is a pure function of its input. The only shared state is
//! a handful of lookup tables built once on first use.
//!
//! # Example
//!
//! ```rust
//! use callnum_core::{lc_shelf_key, reverse_shelf_key, Scheme};
//!
//! assert_eq!(Scheme::detect("PS3511.A3 E4 1925"), Scheme::Lc);
//!
//! let earlier = lc_shelf_key("PS3511.A3 E4 1925");
//! let later = lc_shelf_key("PS3511.A3 E4 1930");
//! assert!(earlier < later);
//! assert!(reverse_shelf_key(&earlier) > reverse_shelf_key(&later));
//! ```

pub mod dewey;
pub mod error;
pub mod lc;
pub mod normalize;
pub mod reverse;
pub mod scheme;
pub mod shelfkey;

pub use dewey::{dewey_before_cutter, DeweyCallNumber};
pub use error::{CallNumberError, Result};
pub use lc::LcCallNumber;
pub use normalize::{normalize_cutter, normalize_float, normalize_suffix};
pub use reverse::reverse_shelf_key;
pub use scheme::{is_valid_dewey, is_valid_lc, Scheme};
pub use shelfkey::{
    dewey_shelf_key, lc_shelf_key, shelf_key, try_dewey_shelf_key, try_lc_shelf_key,
};
