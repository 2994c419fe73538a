/*
SPDX-License-Identifier: MPL-2.0
SPDX-FileCopyrightText: © 2023-2026 Bruce D'Arcus
*/

mod common;
use common::*;

use std::collections::BTreeSet;

use callnum_conflate::{
    build_clusters, normed_cmp, select_best_cluster, summarize, CallNumberEntry, Cluster,
    ConflateOptions,
};
use proptest::prelude::*;

#[test]
fn test_shared_prefix_summary() {
    let options = ConflateOptions::default();
    let clusters = build_clusters(lc(&["PS3511.A3 E4 1925", "PS3511.A3 E4 1925 copy 2"]), &options);

    assert_eq!(clusters.len(), 1);
    let cluster = clusters.get("PS351").expect("cluster keyed PS351");
    assert_eq!(cluster.len(), 2);
    let summary = summarize(cluster, &options).unwrap();
    assert!(summary.starts_with("PS3511.A3 E4"));
    assert!(!summary.contains(", "));
}

#[test]
fn test_eleven_volumes_collapse() {
    let options = ConflateOptions::default();
    let values = volumes("QA76.73 .J38", 11);
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let clusters = build_clusters(lc(&values), &options);

    let cluster = clusters.best().unwrap();
    assert_eq!(cluster.len(), 11);
    assert_eq!(
        summarize(cluster, &options).as_deref(),
        Some("QA76.73.J38 (11 volumes)")
    );
}

#[test]
fn test_ten_volumes_are_listed() {
    let options = ConflateOptions::default();
    let values = volumes("QA76.73 .J38", 10);
    let values: Vec<&str> = values.iter().map(String::as_str).collect();
    let clusters = build_clusters(lc(&values), &options);

    assert_eq!(
        clusters.best().and_then(|c| c.summary(&options)).as_deref(),
        Some("QA76.73.J38 V.1,V.2,V.3,V.4,V.5,V.6,V.7,V.8,V.9,V.10")
    );
}

#[test]
fn test_members_in_natural_order() {
    let options = ConflateOptions::default();
    let clusters = build_clusters(
        untagged(&["QA76.73 .J38 v.10", "QA76.73 .J38 v.9", "qa76.73 .j38 V.2"]),
        &options,
    );
    let members: Vec<&str> = clusters
        .entries()
        .map(CallNumberEntry::value)
        .collect();
    assert_eq!(members, ["QA76.73.J38 V.2", "QA76.73.J38 V.9", "QA76.73.J38 V.10"]);
}

#[test]
fn test_key_length_option() {
    let options = ConflateOptions {
        key_length: 2,
        ..Default::default()
    };
    let clusters = build_clusters(untagged(&["QA76.73", "QA9", "QB500"]), &options);
    let keys: Vec<&str> = clusters.iter().map(Cluster::key).collect();
    assert_eq!(keys, ["QA", "QB"]);
}

#[test]
fn test_best_cluster_selection() {
    let options = ConflateOptions::default();

    let mut entries = untagged(&["813.54 S64 v.1", "813.54 S64 v.2", "813.54 S64 v.3"]);
    entries.extend(untagged(&["PS3511.A3 E4"]));
    let clusters = build_clusters(entries, &options);
    assert_eq!(select_best_cluster(&clusters).map(Cluster::key), Some("PS351"));

    let clusters = build_clusters(untagged(&["813.54 S64", "920 B45", "920 B45 v.2"]), &options);
    assert_eq!(select_best_cluster(&clusters).map(Cluster::key), Some("920 B"));
}

#[test]
fn test_summaries_sorted_and_distinct() {
    let options = ConflateOptions::default();
    let clusters = build_clusters(
        lc(&["QA76.73 .J38", "M211 .M93", "PS3511.A3 E4 1925", "PS3511.A3 E4 1925 copy 2"]),
        &options,
    );
    assert_eq!(
        clusters.summaries(&options),
        ["M211.M93", "PS3511.A3 E4 1925,1925 COPY 2", "QA76.73.J38"]
    );
}

proptest! {
    /// Property: clusters partition their input; their union is the input
    /// with duplicates removed
    #[test]
    fn clusters_partition_input(
        values in proptest::collection::vec("[A-HJ-NP-VZ]{1,2}[0-9]{1,3}( ?\\.[A-U][0-9]{1,2})?( v\\.[0-9]{1,2})?", 0..30)
    ) {
        let options = ConflateOptions::default();
        let entries: Vec<CallNumberEntry> =
            values.iter().map(|v| CallNumberEntry::new(None, v)).collect();
        let distinct: BTreeSet<CallNumberEntry> = entries.iter().cloned().collect();

        let clusters = build_clusters(entries, &options);
        let total: usize = clusters.iter().map(Cluster::len).sum();
        prop_assert_eq!(total, distinct.len());

        for cluster in &clusters {
            prop_assert!(!cluster.is_empty());
            for member in cluster.members() {
                prop_assert_eq!(member.cluster_key(options.key_length), cluster.key());
            }
        }

        let mut seen: Vec<&CallNumberEntry> = clusters.entries().collect();
        seen.sort();
        let before = seen.len();
        seen.dedup_by(|a, b| normed_cmp(&a.to_string(), &b.to_string()).is_eq());
        prop_assert_eq!(seen.len(), before);
    }
}
