/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Record access and the per-record call number set.

use indexmap::{IndexMap, IndexSet};
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use callnum_core::{
    dewey_shelf_key, is_valid_lc, reverse_shelf_key, try_lc_shelf_key, Scheme,
};

use crate::cluster::{build_clusters, Clusters};
use crate::entry::{CallNumberEntry, RawCallNumber, LC_TAG};
use crate::error::Result;
use crate::natural::natural_cmp;
use crate::options::ConflateOptions;
use crate::prefix::{prefix_label, LabelMap, PrefixLabel};

/// Read access to the fields of a bibliographic record.
///
/// A field spec names one or more fields separated by `:`, e.g.
/// `099ab:090ab:050ab`. How the subfields of a spec are joined (the `':'` in
/// `999wa':'`) is up to the implementation.
pub trait RecordFields {
    fn control_number(&self) -> Option<&str>;

    /// All values for `spec`, in record order, without duplicates.
    fn list_field_values(&self, spec: &str) -> Vec<String>;

    fn first_field_value(&self, spec: &str) -> Option<String> {
        self.list_field_values(spec).into_iter().next()
    }
}

/// A record held in memory, with values stored under each single field spec.
///
/// ```yaml
/// id: u123
/// fields:
///   "999wa':'": ["LC:PS3511 .A3 E4 1925"]
///   050ab: ["PS3511.A3 E4"]
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MemoryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub fields: IndexMap<String, Vec<String>>,
}

impl MemoryRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: Some(id.into()),
            fields: IndexMap::new(),
        }
    }

    /// Append values to a field.
    pub fn with_field<I, S>(mut self, spec: &str, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields
            .entry(spec.to_string())
            .or_default()
            .extend(values.into_iter().map(Into::into));
        self
    }

    /// A YAML list of records.
    pub fn list_from_yaml(yaml: &str) -> Result<Vec<Self>> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// A JSON array of records.
    pub fn list_from_json(json: &str) -> Result<Vec<Self>> {
        Ok(serde_json::from_str(json)?)
    }
}

impl RecordFields for MemoryRecord {
    fn control_number(&self) -> Option<&str> {
        self.id.as_deref()
    }

    fn list_field_values(&self, spec: &str) -> Vec<String> {
        let values: IndexSet<&str> = split_field_spec(spec)
            .into_iter()
            .filter_map(|field| self.fields.get(field))
            .flatten()
            .map(|value| value.trim())
            .filter(|value| !value.is_empty())
            .collect();
        values.into_iter().map(str::to_string).collect()
    }
}

/// Split a spec on `:`, leaving quoted separators such as `':'` intact.
pub fn split_field_spec(spec: &str) -> Vec<&str> {
    let mut fields = Vec::new();
    let mut quoted = false;
    let mut start = 0;
    for (i, c) in spec.char_indices() {
        match c {
            '\'' => quoted = !quoted,
            ':' if !quoted => {
                fields.push(&spec[start..i]);
                start = i + 1;
            }
            _ => {}
        }
    }
    fields.push(&spec[start..]);
    fields.retain(|field| !field.is_empty());
    fields
}

/// The call numbers of one record: holdings, catalog fallback, their
/// clusters, and the single best call number.
#[derive(Debug, Clone)]
pub struct CallNumberRecord {
    control_number: Option<String>,
    raw: Vec<RawCallNumber>,
    holdings: Vec<CallNumberEntry>,
    entries: Vec<CallNumberEntry>,
    holdings_clusters: Clusters,
    clusters: Clusters,
    best: Option<CallNumberEntry>,
    options: ConflateOptions,
}

impl CallNumberRecord {
    pub fn from_record<R: RecordFields + ?Sized>(record: &R, options: &ConflateOptions) -> Self {
        let mut raw = read_holdings(record, options);
        let holdings: Vec<CallNumberEntry> = raw.iter().map(CallNumberEntry::from_raw).collect();

        if !holdings.iter().any(CallNumberEntry::is_lc_tagged) {
            for value in record.list_field_values(&options.fields.lc_fallback) {
                if is_valid_lc(&value) {
                    let ordinal = raw.len();
                    raw.push(RawCallNumber::new(value, Some(LC_TAG), ordinal));
                }
            }
        }
        let entries: Vec<CallNumberEntry> = raw.iter().map(CallNumberEntry::from_raw).collect();

        let holdings_clusters = build_clusters(holdings.iter().cloned(), options);
        let clusters = build_clusters(entries.iter().cloned(), options);
        let best = clusters
            .best()
            .and_then(|cluster| cluster.first())
            .map(|entry| {
                if entry.is_lc_tagged() {
                    entry.cleaned()
                } else {
                    entry.clone()
                }
            });

        let control_number = record.control_number().map(str::to_string);
        debug!(
            "record {}: {} holdings, {} call numbers, best {:?}",
            control_number.as_deref().unwrap_or("?"),
            holdings.len(),
            entries.len(),
            best.as_ref().map(CallNumberEntry::value)
        );

        Self {
            control_number,
            raw,
            holdings,
            entries,
            holdings_clusters,
            clusters,
            best,
            options: options.clone(),
        }
    }

    pub fn control_number(&self) -> Option<&str> {
        self.control_number.as_deref()
    }

    /// Call numbers as read, holdings first, numbered in that order.
    pub fn raw_call_numbers(&self) -> &[RawCallNumber] {
        &self.raw
    }

    /// Holdings call numbers, deduplicated, in record order.
    pub fn holdings(&self) -> &[CallNumberEntry] {
        &self.holdings
    }

    /// Holdings plus any catalog fallback call numbers.
    pub fn entries(&self) -> &[CallNumberEntry] {
        &self.entries
    }

    pub fn clusters(&self) -> &Clusters {
        &self.clusters
    }

    pub fn holdings_clusters(&self) -> &Clusters {
        &self.holdings_clusters
    }

    pub fn best(&self) -> Option<&CallNumberEntry> {
        self.best.as_ref()
    }

    /// The best call number for display, or its shelf key when `sortable`.
    pub fn call_number(&self, sortable: bool) -> Option<String> {
        let best = self.best.as_ref()?;
        if !sortable {
            return Some(best.value().to_string());
        }
        if best.is_lc() {
            return Some(self.lc_key(best.value()));
        }
        Some(match best.scheme() {
            Scheme::Dewey => dewey_shelf_key(best.value()),
            _ => best.value().to_string(),
        })
    }

    /// Reverse key of the sortable best call number.
    pub fn reverse_shelf_key(&self) -> Option<String> {
        self.call_number(true).map(|key| reverse_shelf_key(&key))
    }

    /// Every call number, summarized per cluster when `conflate` is set.
    pub fn cleaned_call_numbers(&self, conflate: bool) -> Option<Vec<String>> {
        self.listing(&self.entries, &self.clusters, conflate)
    }

    /// As [`cleaned_call_numbers`](Self::cleaned_call_numbers), holdings only.
    pub fn cleaned_holdings_call_numbers(&self, conflate: bool) -> Option<Vec<String>> {
        self.listing(&self.holdings, &self.holdings_clusters, conflate)
    }

    /// Subject label for the best call number; see [`prefix_label`].
    pub fn prefix_label<M>(&self, map: &M, style: PrefixLabel) -> Option<String>
    where
        M: LabelMap + ?Sized,
    {
        prefix_label(self, map, style)
    }

    fn listing(
        &self,
        entries: &[CallNumberEntry],
        clusters: &Clusters,
        conflate: bool,
    ) -> Option<Vec<String>> {
        let values = if conflate {
            clusters.summaries(&self.options)
        } else {
            let mut values: Vec<String> = entries
                .iter()
                .map(|entry| entry.value().to_string())
                .collect();
            values.sort_by(|a, b| natural_cmp(a, b));
            values.dedup_by(|a, b| natural_cmp(a, b).is_eq());
            values
        };
        (!values.is_empty()).then_some(values)
    }

    fn lc_key(&self, value: &str) -> String {
        try_lc_shelf_key(value).unwrap_or_else(|err| {
            warn!(
                "record {}: cannot build shelf key for {value:?}: {err}",
                self.control_number().unwrap_or("?")
            );
            value.trim().to_uppercase()
        })
    }
}

/// Parse `SCHEME:call number` holdings values, skipping those missing either
/// half.
fn read_holdings<R: RecordFields + ?Sized>(
    record: &R,
    options: &ConflateOptions,
) -> Vec<RawCallNumber> {
    let pairs: IndexSet<(String, String)> = record
        .list_field_values(&options.fields.holdings)
        .iter()
        .filter_map(|value| value.split_once(':'))
        .map(|(scheme, call_number)| (scheme.trim(), call_number.trim()))
        .filter(|(scheme, call_number)| !scheme.is_empty() && !call_number.is_empty())
        .map(|(scheme, call_number)| {
            (
                options.resolve_scheme(scheme).to_string(),
                call_number.to_string(),
            )
        })
        .collect();
    pairs
        .into_iter()
        .enumerate()
        .map(|(ordinal, (scheme, call_number))| {
            RawCallNumber::new(call_number, Some(&scheme), ordinal)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const HOLDINGS: &str = "999wa':'";

    #[test]
    fn test_split_field_spec() {
        assert_eq!(split_field_spec("099ab:090ab:050ab"), ["099ab", "090ab", "050ab"]);
        assert_eq!(split_field_spec("999wa':'"), ["999wa':'"]);
        assert_eq!(split_field_spec("650z'#':651a"), ["650z'#'", "651a"]);
        assert!(split_field_spec("").is_empty());
    }

    #[test]
    fn test_memory_record_values() {
        let record = MemoryRecord::new("u1")
            .with_field("090a", ["QA76 .J38", " "])
            .with_field("050a", ["QA76 .J38", "QA76.9"]);
        assert_eq!(record.list_field_values("090a:050a"), ["QA76 .J38", "QA76.9"]);
        assert_eq!(record.first_field_value("050a").as_deref(), Some("QA76 .J38"));
        assert_eq!(record.first_field_value("082a"), None);
        assert_eq!(record.control_number(), Some("u1"));
    }

    #[test]
    fn test_holdings_parsing() {
        let record = MemoryRecord::new("u2").with_field(
            HOLDINGS,
            [
                "MONO-SER:PS3511 .A3",
                "LC:",
                ":QA76",
                "no scheme",
                "DEWEY:813.54 S64",
                "LCPER:PS3511 .A3",
            ],
        );
        let set = CallNumberRecord::from_record(&record, &ConflateOptions::default());
        let holdings: Vec<String> = set.holdings().iter().map(ToString::to_string).collect();
        assert_eq!(holdings, ["LC:PS3511.A3", "DEWEY:813.54 S64"]);
    }

    #[test]
    fn test_lc_fallback_only_without_lc_holdings() {
        let options = ConflateOptions::default();
        let record = MemoryRecord::new("u3")
            .with_field(HOLDINGS, ["DEWEY:813.54 S64"])
            .with_field("050ab", ["PS3511.A3 E4", "813.54"]);
        let set = CallNumberRecord::from_record(&record, &options);
        assert_eq!(set.entries().len(), 2);
        assert_eq!(set.call_number(false).as_deref(), Some("PS3511.A3 E4"));
        let fallback = &set.raw_call_numbers()[1];
        assert_eq!(fallback.tag.as_deref(), Some("LC"));
        assert_eq!(fallback.ordinal, 1);

        let record = record.with_field(HOLDINGS, ["LC:QA76.73 .J38"]);
        let set = CallNumberRecord::from_record(&record, &options);
        assert_eq!(set.entries().len(), 2);
        assert_eq!(set.call_number(false).as_deref(), Some("QA76.73.J38"));
    }

    #[test]
    fn test_best_is_cleaned() {
        let record = MemoryRecord::new("u4")
            .with_field(HOLDINGS, ["LC:PS3511.A3 E4 1925 (copy 2)", "LC:PS3511.A3 E4 1925"]);
        let set = CallNumberRecord::from_record(&record, &ConflateOptions::default());
        assert_eq!(set.call_number(false).as_deref(), Some("PS3511.A3 E4 1925"));
        assert_eq!(
            set.call_number(true).as_deref(),
            Some("PS  3511.000000 A0.300000 E0.400000 001925")
        );
        let reverse = set.reverse_shelf_key().unwrap();
        assert!(reverse.starts_with("A7"));
    }

    #[test]
    fn test_sortable_dewey() {
        let record = MemoryRecord::new("u5").with_field(HOLDINGS, ["DEWEY:813.54 .S64 1999"]);
        let set = CallNumberRecord::from_record(&record, &ConflateOptions::default());
        assert_eq!(set.call_number(true).as_deref(), Some("813.54000000 S64 1999"));
    }

    #[test]
    fn test_listing() {
        let record = MemoryRecord::new("u6").with_field(
            HOLDINGS,
            ["LC:PS3511.A3 E4 1925 copy 2", "LC:PS3511 .A3 E4 1925", "LC:QA76.73 .J38"],
        );
        let set = CallNumberRecord::from_record(&record, &ConflateOptions::default());
        assert_eq!(
            set.cleaned_call_numbers(true).unwrap(),
            ["PS3511.A3 E4 1925,1925 COPY 2", "QA76.73.J38"]
        );
        assert_eq!(
            set.cleaned_holdings_call_numbers(false).unwrap(),
            ["PS3511.A3 E4 1925", "PS3511.A3 E4 1925 COPY 2", "QA76.73.J38"]
        );
    }

    #[test]
    fn test_empty_record() {
        let set = CallNumberRecord::from_record(&MemoryRecord::default(), &ConflateOptions::default());
        assert!(set.best().is_none());
        assert_eq!(set.call_number(true), None);
        assert_eq!(set.reverse_shelf_key(), None);
        assert_eq!(set.cleaned_call_numbers(true), None);
        assert_eq!(set.cleaned_holdings_call_numbers(false), None);
    }

    #[test]
    fn test_yaml_records() {
        let yaml = r#"
- id: u7
  fields:
    "999wa':'": ["LC:QA76.73 .J38"]
- fields:
    050ab: ["PS3511.A3"]
"#;
        let records = MemoryRecord::list_from_yaml(yaml).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].control_number(), Some("u7"));
        assert_eq!(records[1].list_field_values("050ab"), ["PS3511.A3"]);
    }
}
