//! Tests for the flat store backends
//!
//! These tests verify:
//! - Point get/set/remove semantics on both backends
//! - FileStore snapshot persistence across close/reopen
//! - Flush strategies (every write vs. every N writes)

use std::path::PathBuf;

use tempfile::TempDir;
use vaultkv::store::{FileStore, FlatStore, MemoryStore};
use vaultkv::{Config, FlushStrategy};

// =============================================================================
// Helper Functions
// =============================================================================

fn snapshot_path() -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("store.snapshot");
    (temp_dir, path)
}

// =============================================================================
// MemoryStore Tests
// =============================================================================

#[test]
fn test_memory_get_absent_key() {
    let store = MemoryStore::new();
    assert!(store.get("missing").unwrap().is_none());
}

#[test]
fn test_memory_set_then_get() {
    let store = MemoryStore::new();

    store.set("k1", "v1").unwrap();

    assert_eq!(store.get("k1").unwrap().unwrap(), "v1");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_memory_set_overwrites() {
    let store = MemoryStore::new();

    store.set("k1", "v1").unwrap();
    store.set("k1", "v2").unwrap();

    assert_eq!(store.get("k1").unwrap().unwrap(), "v2");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_memory_remove() {
    let store = MemoryStore::new();

    store.set("k1", "v1").unwrap();
    store.remove("k1").unwrap();

    assert!(store.get("k1").unwrap().is_none());
    assert!(store.is_empty());
}

#[test]
fn test_memory_remove_absent_key_is_noop() {
    let store = MemoryStore::new();
    store.remove("missing").unwrap();
    assert!(store.is_empty());
}

// =============================================================================
// FileStore Tests
// =============================================================================

#[test]
fn test_file_store_starts_empty_without_snapshot() {
    let (_temp, path) = snapshot_path();

    let store = FileStore::open_path(&path).unwrap();

    assert!(store.is_empty());
    assert!(store.get("anything").unwrap().is_none());
}

#[test]
fn test_file_store_basic_operations() {
    let (_temp, path) = snapshot_path();
    let store = FileStore::open_path(&path).unwrap();

    store.set("k1", "v1").unwrap();
    store.set("k2", "v2").unwrap();
    store.remove("k1").unwrap();

    assert!(store.get("k1").unwrap().is_none());
    assert_eq!(store.get("k2").unwrap().unwrap(), "v2");
    assert_eq!(store.len(), 1);
}

#[test]
fn test_file_store_persists_across_reopen() {
    let (_temp, path) = snapshot_path();

    {
        let store = FileStore::open_path(&path).unwrap();
        store.set("k1", "v1").unwrap();
        store.set("k2", "v2").unwrap();
    }

    let reopened = FileStore::open_path(&path).unwrap();

    assert_eq!(reopened.len(), 2);
    assert_eq!(reopened.get("k1").unwrap().unwrap(), "v1");
    assert_eq!(reopened.get("k2").unwrap().unwrap(), "v2");
}

#[test]
fn test_file_store_every_write_flushes_immediately() {
    let (_temp, path) = snapshot_path();
    let config = Config::builder()
        .snapshot_path(&path)
        .flush_strategy(FlushStrategy::EveryWrite)
        .build();

    let store = FileStore::open(config).unwrap();
    store.set("k1", "v1").unwrap();

    assert!(path.exists());
}

#[test]
fn test_file_store_every_n_writes_defers_flush() {
    let (_temp, path) = snapshot_path();
    let config = Config::builder()
        .snapshot_path(&path)
        .flush_strategy(FlushStrategy::EveryNWrites { count: 3 })
        .build();

    let store = FileStore::open(config).unwrap();

    store.set("k1", "v1").unwrap();
    store.set("k2", "v2").unwrap();
    assert!(!path.exists());

    // Third mutation crosses the threshold
    store.set("k3", "v3").unwrap();
    assert!(path.exists());
}

#[test]
fn test_file_store_explicit_flush() {
    let (_temp, path) = snapshot_path();
    let config = Config::builder()
        .snapshot_path(&path)
        .flush_strategy(FlushStrategy::EveryNWrites { count: 100 })
        .build();

    let store = FileStore::open(config).unwrap();
    store.set("k1", "v1").unwrap();
    assert!(!path.exists());

    store.flush().unwrap();
    assert!(path.exists());

    let reopened = FileStore::open_path(&path).unwrap();
    assert_eq!(reopened.get("k1").unwrap().unwrap(), "v1");
}
