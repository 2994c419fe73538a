/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Per-record call number handling for catalog indexing.
//!
//! A record usually carries several call numbers: one per copy or volume in
//! its holdings, plus whatever the catalog record itself suggests. This crate
//! gathers them into a [`CallNumberRecord`], groups near-identical ones into
//! clusters, picks a single best call number, and produces the display,
//! sort and facet values an index needs.
//!
//! ```rust
//! use callnum_conflate::{CallNumberRecord, ConflateOptions, MemoryRecord};
//!
//! let record = MemoryRecord::new("u1").with_field(
//!     "999wa':'",
//!     ["LC:PS3511.A3 E4 1925", "LC:PS3511.A3 E4 1925 copy 2"],
//! );
//! let set = CallNumberRecord::from_record(&record, &ConflateOptions::default());
//!
//! assert_eq!(set.call_number(false).as_deref(), Some("PS3511.A3 E4 1925"));
//! assert_eq!(
//!     set.cleaned_call_numbers(true).unwrap(),
//!     ["PS3511.A3 E4 1925,1925 COPY 2"]
//! );
//! ```

pub mod cluster;
pub mod dewey;
pub mod entry;
pub mod error;
pub mod labels;
pub mod natural;
pub mod options;
pub mod prefix;
pub mod record;
pub mod region;

pub use cluster::{build_clusters, select_best_cluster, summarize, Cluster, Clusters};
pub use dewey::{dewey_numbers, dewey_searchable, dewey_sortable};
pub use entry::{CallNumberEntry, RawCallNumber, LC_TAG};
pub use error::{ConflateError, Result};
pub use labels::{call_number_label, call_number_subject, full_call_number};
pub use natural::{natural_cmp, normed_cmp};
pub use options::{ConflateOptions, FieldSpecs};
pub use prefix::{prefix_label, LabelMap, PrefixLabel};
pub use record::{CallNumberRecord, MemoryRecord, RecordFields};
pub use region::region_facet;
