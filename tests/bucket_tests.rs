//! Tests for the Bucket Index
//!
//! These tests verify:
//! - Membership listing in insertion order
//! - Idempotent add (no duplicate membership entries)
//! - Removal, including deletion of the tag entry when the bucket empties
//! - Independence of buckets sharing one store

use vaultkv::bucket::BucketIndex;
use vaultkv::store::{FlatStore, MemoryStore};

const TAG: &str = "testBucket";

// =============================================================================
// Listing Tests
// =============================================================================

#[test]
fn test_list_members_absent_bucket_is_empty() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    assert!(index.list_members(TAG).unwrap().is_empty());
}

#[test]
fn test_list_members_preserves_insertion_order() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "cccc").unwrap();
    index.add_member(TAG, "aaaa").unwrap();
    index.add_member(TAG, "bbbb").unwrap();

    assert_eq!(
        index.list_members(TAG).unwrap(),
        vec!["cccc", "aaaa", "bbbb"]
    );
}

#[test]
fn test_distinct_keys_each_listed_exactly_once() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "k1").unwrap();
    index.add_member(TAG, "k2").unwrap();

    let members = index.list_members(TAG).unwrap();
    assert_eq!(members.iter().filter(|m| *m == "k1").count(), 1);
    assert_eq!(members.iter().filter(|m| *m == "k2").count(), 1);
    assert_eq!(members.len(), 2);
}

// =============================================================================
// Add Tests
// =============================================================================

#[test]
fn test_add_member_is_idempotent() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "k1").unwrap();
    index.add_member(TAG, "k1").unwrap();
    index.add_member(TAG, "k1").unwrap();

    assert_eq!(index.list_members(TAG).unwrap(), vec!["k1"]);
}

#[test]
fn test_add_writes_delimited_tag_entry() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "k1").unwrap();
    index.add_member(TAG, "k2").unwrap();

    assert_eq!(store.get(TAG).unwrap().unwrap(), "k1,k2");
}

// =============================================================================
// Remove Tests
// =============================================================================

#[test]
fn test_remove_member() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "k1").unwrap();
    index.add_member(TAG, "k2").unwrap();
    index.add_member(TAG, "k3").unwrap();

    index.remove_member(TAG, "k2").unwrap();

    assert_eq!(index.list_members(TAG).unwrap(), vec!["k1", "k3"]);
}

#[test]
fn test_remove_absent_member_is_noop() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "k1").unwrap();
    index.remove_member(TAG, "unknown").unwrap();

    assert_eq!(index.list_members(TAG).unwrap(), vec!["k1"]);
}

#[test]
fn test_remove_last_member_deletes_tag_entry() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member(TAG, "k1").unwrap();
    index.remove_member(TAG, "k1").unwrap();

    // The tag entry is gone, not stored as an empty string
    assert!(store.get(TAG).unwrap().is_none());
    assert!(index.list_members(TAG).unwrap().is_empty());
}

#[test]
fn test_remove_from_absent_bucket_is_noop() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.remove_member(TAG, "k1").unwrap();

    assert!(store.get(TAG).unwrap().is_none());
}

// =============================================================================
// Isolation Tests
// =============================================================================

#[test]
fn test_buckets_are_independent() {
    let store = MemoryStore::new();
    let index = BucketIndex::new(&store);

    index.add_member("bucketA", "k1").unwrap();
    index.add_member("bucketB", "k2").unwrap();

    index.remove_member("bucketA", "k1").unwrap();

    assert!(index.list_members("bucketA").unwrap().is_empty());
    assert_eq!(index.list_members("bucketB").unwrap(), vec!["k2"]);
}
