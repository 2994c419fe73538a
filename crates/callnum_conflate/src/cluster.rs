/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

//! Grouping the call numbers of one record and summarizing each group.
//!
//! Call numbers that share their first few characters usually describe the
//! volumes or copies of one work. Each group is shown as its common prefix
//! followed by what distinguishes the members:
//!
//! ```text
//! PS3511.A3 E4 1925 V.1, PS3511.A3 E4 1925 V.2  ->  PS3511.A3 E4 1925 V.1,V.2
//! ```

use std::collections::{BTreeMap, BTreeSet};

use callnum_core::Scheme;
use log::debug;

use crate::entry::CallNumberEntry;
use crate::natural::{loosely_equal, natural_cmp, normed_cmp};
use crate::options::ConflateOptions;

/// Call numbers sharing a key, ordered naturally with no duplicates.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cluster {
    key: String,
    members: BTreeSet<CallNumberEntry>,
}

impl Cluster {
    fn new(key: String) -> Self {
        Self {
            key,
            members: BTreeSet::new(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Members in natural order.
    pub fn members(&self) -> impl Iterator<Item = &CallNumberEntry> {
        self.members.iter()
    }

    pub fn first(&self) -> Option<&CallNumberEntry> {
        self.members.first()
    }

    /// A cluster counts as LC when its first member does.
    pub fn is_lc(&self) -> bool {
        self.first().is_some_and(CallNumberEntry::is_lc)
    }

    /// Display summary; see [`summarize`].
    pub fn summary(&self, options: &ConflateOptions) -> Option<String> {
        summarize(self, options)
    }
}

/// The clusters of one record, by key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Clusters {
    clusters: BTreeMap<String, Cluster>,
}

impl Clusters {
    pub fn len(&self) -> usize {
        self.clusters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.clusters.is_empty()
    }

    pub fn get(&self, key: &str) -> Option<&Cluster> {
        self.clusters.get(key)
    }

    /// Clusters in key order.
    pub fn iter(&self) -> impl Iterator<Item = &Cluster> {
        self.clusters.values()
    }

    /// All members of all clusters.
    pub fn entries(&self) -> impl Iterator<Item = &CallNumberEntry> {
        self.iter().flat_map(Cluster::members)
    }

    /// The cluster best representing the record; see [`select_best_cluster`].
    pub fn best(&self) -> Option<&Cluster> {
        select_best_cluster(self)
    }

    /// One summary per cluster, deduplicated and in natural order.
    pub fn summaries(&self, options: &ConflateOptions) -> Vec<String> {
        let mut summaries: Vec<String> = self
            .iter()
            .filter_map(|cluster| summarize(cluster, options))
            .collect();
        summaries.sort_by(|a, b| normed_cmp(a, b));
        summaries.dedup_by(|a, b| normed_cmp(a, b).is_eq());
        summaries
    }
}

impl<'a> IntoIterator for &'a Clusters {
    type Item = &'a Cluster;
    type IntoIter = std::collections::btree_map::Values<'a, String, Cluster>;

    fn into_iter(self) -> Self::IntoIter {
        self.clusters.values()
    }
}

/// Group entries by the first `options.key_length` characters of their value.
///
/// Entries equal under the natural ordering collapse into one member. With
/// `options.drop_unknown_schemes`, values that are neither LC nor Dewey shaped
/// are left out.
pub fn build_clusters<I>(entries: I, options: &ConflateOptions) -> Clusters
where
    I: IntoIterator<Item = CallNumberEntry>,
{
    let mut clusters: BTreeMap<String, Cluster> = BTreeMap::new();
    for entry in entries {
        if options.drop_unknown_schemes && entry.scheme() == Scheme::Unknown {
            debug!("dropping call number of unknown scheme: {entry}");
            continue;
        }
        let key = entry.cluster_key(options.key_length);
        clusters
            .entry(key.clone())
            .or_insert_with(|| Cluster::new(key))
            .members
            .insert(entry);
    }
    debug!(
        "built {} clusters from {} call numbers",
        clusters.len(),
        clusters.values().map(Cluster::len).sum::<usize>()
    );
    Clusters { clusters }
}

/// The largest LC cluster, or the largest cluster of all when none is LC.
///
/// A one-member LC cluster is still preferred over a larger cluster of
/// another scheme. Equal sizes go to the cluster whose members sort first.
pub fn select_best_cluster(clusters: &Clusters) -> Option<&Cluster> {
    largest(clusters.iter().filter(|cluster| cluster.is_lc())).or_else(|| largest(clusters.iter()))
}

fn largest<'a>(candidates: impl Iterator<Item = &'a Cluster>) -> Option<&'a Cluster> {
    candidates.fold(None, |best, cluster| match best {
        Some(best) if !is_better(cluster, best) => Some(best),
        _ => Some(cluster),
    })
}

fn is_better(candidate: &Cluster, current: &Cluster) -> bool {
    candidate
        .len()
        .cmp(&current.len())
        .then_with(|| current.members.iter().cmp(candidate.members.iter()))
        .is_gt()
}

/// Summarize a cluster for display. Tags are not shown.
///
/// A single member is shown as-is. Otherwise the members' common prefix,
/// cut back to its last space, is followed by the remaining text of each
/// member: `PS3511.A3 E4 1925,1925 COPY 2`. Summaries longer than
/// `options.max_summary_length` characters, or of more than
/// `options.max_listed_volumes` members, become `PS3511.A3 E4 (12 volumes)`.
pub fn summarize(cluster: &Cluster, options: &ConflateOptions) -> Option<String> {
    let values: Vec<&str> = cluster.members().map(CallNumberEntry::value).collect();
    let (first, rest) = values.split_first()?;
    if rest.is_empty() {
        return Some(first.to_string());
    }

    let prefix_len = rest.iter().fold(first.chars().count(), |len, value| {
        first
            .chars()
            .zip(value.chars())
            .take(len)
            .take_while(|(a, b)| loosely_equal(*a, *b))
            .count()
    });
    let mut prefix: String = first.chars().take(prefix_len).collect();
    if let Some(space) = prefix.rfind(' ') {
        prefix.truncate(space);
    }
    let prefix_chars = prefix.chars().count();

    let mut suffixes: Vec<String> = values
        .iter()
        .map(|value| value.chars().skip(prefix_chars).collect::<String>())
        .map(|suffix| suffix.trim().to_string())
        .filter(|suffix| !suffix.is_empty())
        .collect();
    suffixes.sort_by(|a, b| natural_cmp(a, b));

    let mut summary = prefix.clone();
    for (i, suffix) in suffixes.iter().enumerate() {
        summary.push(if i == 0 { ' ' } else { ',' });
        summary.push_str(suffix);
    }

    if summary.chars().count() > options.max_summary_length
        || values.len() > options.max_listed_volumes
    {
        return Some(format!("{prefix} ({} volumes)", values.len()));
    }
    Some(summary)
}
