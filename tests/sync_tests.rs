#![allow(clippy::unwrap_used, clippy::panic, clippy::expect_used)]

/// Bridge interaction: reading initial state from a live URI, auto-sync
/// write-back, and canonical URI computation.
use qsync::{MemoryBridge, QueryStringStore, StoreOptions};

#[test]
fn snapshot_roundtrip_reproduces_uri_exactly() {
    for uri in [
        "https://shop.test/a/b?x=1&y=2#top",
        "https://shop.test/?a=1",
        "https://shop.test?a=1",
        "https://shop.test:8080/catalog/shoes/?page=3",
    ] {
        let bridge = MemoryBridge::new(uri);
        let mut store = QueryStringStore::with_bridge(bridge, StoreOptions::default());
        assert_eq!(store.sync_to_bridge(), uri);
    }
}

#[test]
fn construction_reads_all_components_from_bridge() {
    let bridge = MemoryBridge::new("https://shop.test/a/b?x=1#frag");
    let store = QueryStringStore::with_bridge(bridge, StoreOptions::default());
    assert_eq!(store.origin(), "https://shop.test");
    assert_eq!(store.query_string(), "x=1");
    assert_eq!(store.route_segments(), ["a", "b"]);
    assert_eq!(store.route(), "a/b");
}

#[test]
fn query_string_override_syncs_immediately() {
    let bridge = MemoryBridge::new("https://shop.test/a?old=1");
    let store = QueryStringStore::with_bridge(
        bridge,
        StoreOptions {
            query_string: Some("fresh=1"),
            ..StoreOptions::default()
        },
    );
    assert_eq!(store.bridge().uri(), "https://shop.test/a?fresh=1");
    assert!(!store.bridge().replaced().is_empty());
}

#[test]
fn hash_override_is_normalized_and_synced() {
    let bridge = MemoryBridge::new("https://shop.test/a?x=1");
    let mut store = QueryStringStore::with_bridge(
        bridge,
        StoreOptions {
            hash: Some("#details"),
            ..StoreOptions::default()
        },
    );
    assert_eq!(store.hash(), "details");
    assert_eq!(store.bridge().uri(), "https://shop.test/a?x=1#details");
}

#[test]
fn each_mutation_syncs_exactly_once() {
    let bridge = MemoryBridge::new("https://shop.test/a?x=1");
    let mut store = QueryStringStore::with_bridge(bridge, StoreOptions::default());

    store.update_param("x", "2");
    assert_eq!(store.bridge().replaced().len(), 1);
    assert_eq!(store.bridge().uri(), "https://shop.test/a?x=2");

    store.append_param("y", "3");
    assert_eq!(store.bridge().replaced().len(), 2);

    store.remove_key("x", false);
    assert_eq!(store.bridge().replaced().len(), 3);
    assert_eq!(store.bridge().uri(), "https://shop.test/a?y=3");
}

#[test]
fn auto_sync_off_leaves_bridge_untouched() {
    let bridge = MemoryBridge::new("https://shop.test/a?x=1");
    let mut store = QueryStringStore::with_bridge(
        bridge,
        StoreOptions {
            auto_sync: false,
            ..StoreOptions::default()
        },
    );
    store.update_param("x", "2");
    store.set_hash("h");
    assert!(store.bridge().replaced().is_empty());
    assert_eq!(store.bridge().uri(), "https://shop.test/a?x=1");

    // One explicit sync pushes the accumulated state
    assert_eq!(store.sync_to_bridge(), "https://shop.test/a?x=2#h");
    assert_eq!(store.bridge().replaced().len(), 1);
}

#[test]
fn sync_is_idempotent_for_unchanged_state() {
    let bridge = MemoryBridge::new("https://shop.test/a/b?x=1");
    let mut store = QueryStringStore::with_bridge(bridge, StoreOptions::default());
    let first = store.sync_to_bridge();
    let second = store.sync_to_bridge();
    assert_eq!(first, second);
}

#[test]
fn empty_route_omits_path_component() {
    let bridge = MemoryBridge::new("https://shop.test?x=1");
    let mut store = QueryStringStore::with_bridge(bridge, StoreOptions::default());
    assert!(store.route_segments().is_empty());
    assert_eq!(store.sync_to_bridge(), "https://shop.test?x=1");
}

#[test]
fn read_from_bridge_refreshes_without_writing() {
    let bridge = MemoryBridge::new("https://shop.test/a?x=1#h");
    let mut store = QueryStringStore::with_bridge(
        bridge,
        StoreOptions {
            auto_sync: false,
            ..StoreOptions::default()
        },
    );
    store.update_param("x", "override");
    assert_eq!(store.read_from_bridge(), "x=1");
    assert_eq!(store.query_string(), "x=1");
    assert!(store.bridge().replaced().is_empty());
}

#[test]
fn segment_mutations_rewrite_the_path() {
    let bridge = MemoryBridge::new("https://shop.test/catalog/shoes?page=1");
    let mut store = QueryStringStore::with_bridge(bridge, StoreOptions::default());

    store.set_segment(-1, "boots");
    assert_eq!(store.bridge().uri(), "https://shop.test/catalog/boots?page=1");

    store.remove_segment(0);
    assert_eq!(store.bridge().uri(), "https://shop.test/boots?page=1");
}

#[test]
fn headless_store_reads_empty_bridge_state() {
    let mut store = QueryStringStore::headless(StoreOptions::default());
    assert_eq!(store.read_from_bridge(), "");
    assert_eq!(store.query_string(), "");
    assert_eq!(store.sync_to_bridge(), "?");
}
