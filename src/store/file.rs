//! File-backed flat store
//!
//! Keeps the full key-value map in memory and persists it as a single
//! bincode snapshot file, rewritten according to the configured flush
//! strategy.
//!
//! ## Responsibilities
//! - Reload the snapshot on open
//! - Rewrite the snapshot per [`FlushStrategy`]
//! - Replace the snapshot via a sibling temp file + rename
//!
//! Collections here are wallet-scale, not database-scale, so rewriting the
//! whole map on flush is acceptable.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::config::{Config, FlushStrategy};
use crate::error::{Result, VaultError};

use super::FlatStore;

/// Mutable state guarded by one lock: the map and its unflushed-write count
struct FileStoreInner {
    entries: HashMap<String, String>,
    unflushed: usize,
}

/// File-backed flat store
///
/// ## Concurrency:
/// - `inner`: Protected by Mutex (map and flush counter mutate together)
/// - All methods use `&self` (no exclusive access needed)
pub struct FileStore {
    config: Config,
    inner: Mutex<FileStoreInner>,
}

impl FileStore {
    /// Extension of the temp file written before renaming over the snapshot
    const TMP_EXTENSION: &'static str = "tmp";

    /// Open or create a store with the given config
    ///
    /// On startup:
    /// 1. Read the snapshot file if it exists
    /// 2. Decode it into the in-memory map
    /// 3. Ready to serve requests
    pub fn open(config: Config) -> Result<Self> {
        let entries = if config.snapshot_path.exists() {
            let bytes = fs::read(&config.snapshot_path)?;
            let entries: HashMap<String, String> = bincode::deserialize(&bytes)
                .map_err(|e| VaultError::Snapshot(format!("Snapshot decode failed: {}", e)))?;

            debug!(
                path = %config.snapshot_path.display(),
                entries = entries.len(),
                "loaded snapshot"
            );
            entries
        } else {
            warn!(
                path = %config.snapshot_path.display(),
                "no snapshot file, starting empty"
            );
            HashMap::new()
        };

        Ok(Self {
            config,
            inner: Mutex::new(FileStoreInner {
                entries,
                unflushed: 0,
            }),
        })
    }

    /// Open with a path (convenience method)
    ///
    /// Uses default config with the specified snapshot path
    pub fn open_path(path: &Path) -> Result<Self> {
        let config = Config::builder().snapshot_path(path).build();
        Self::open(config)
    }

    /// Force a snapshot rewrite regardless of the flush strategy
    pub fn flush(&self) -> Result<()> {
        let mut inner = self.inner.lock();
        self.write_snapshot(&inner.entries)?;
        inner.unflushed = 0;
        Ok(())
    }

    /// Number of entries currently stored (for testing and debugging)
    pub fn len(&self) -> usize {
        self.inner.lock().entries.len()
    }

    /// Whether the store holds no entries
    pub fn is_empty(&self) -> bool {
        self.inner.lock().entries.is_empty()
    }

    /// Record one mutation and flush if the strategy says so
    ///
    /// Called with the lock held.
    fn after_mutation(&self, inner: &mut FileStoreInner) -> Result<()> {
        inner.unflushed += 1;

        let should_flush = match self.config.flush_strategy {
            FlushStrategy::EveryWrite => true,
            FlushStrategy::EveryNWrites { count } => inner.unflushed >= count,
        };

        if should_flush {
            self.write_snapshot(&inner.entries)?;
            inner.unflushed = 0;
        }

        Ok(())
    }

    /// Serialize the map and replace the snapshot file
    ///
    /// Writes to a sibling temp file first, then renames over the snapshot.
    fn write_snapshot(&self, entries: &HashMap<String, String>) -> Result<()> {
        let bytes = bincode::serialize(entries)
            .map_err(|e| VaultError::Snapshot(format!("Snapshot encode failed: {}", e)))?;

        let tmp_path = self.config.snapshot_path.with_extension(Self::TMP_EXTENSION);
        fs::write(&tmp_path, &bytes)?;
        fs::rename(&tmp_path, &self.config.snapshot_path)?;

        debug!(
            path = %self.config.snapshot_path.display(),
            bytes = bytes.len(),
            "snapshot written"
        );
        Ok(())
    }
}

impl FlatStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.inner.lock().entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.entries.insert(key.to_string(), value.to_string());
        self.after_mutation(&mut inner)
    }

    fn remove(&self, key: &str) -> Result<()> {
        let mut inner = self.inner.lock();
        inner.entries.remove(key);
        self.after_mutation(&mut inner)
    }
}
