//! Configuration for VaultKV
//!
//! Centralized configuration with sensible defaults. Only the file-backed
//! store reads it; the in-memory store needs no configuration.

use std::path::PathBuf;

/// Main configuration for a file-backed VaultKV store
#[derive(Debug, Clone)]
pub struct Config {
    // -------------------------------------------------------------------------
    // Storage Configuration
    // -------------------------------------------------------------------------
    /// Path of the snapshot file holding the full key-value map
    pub snapshot_path: PathBuf,

    // -------------------------------------------------------------------------
    // Durability Configuration
    // -------------------------------------------------------------------------
    /// How often to rewrite the snapshot file
    pub flush_strategy: FlushStrategy,
}

/// Snapshot flush strategy
#[derive(Debug, Clone, Copy)]
pub enum FlushStrategy {
    /// Rewrite the snapshot after every mutation (safest, slowest)
    EveryWrite,

    /// Rewrite after N unflushed mutations (balanced durability/performance)
    EveryNWrites { count: usize },
}

impl Default for Config {
    fn default() -> Self {
        Self {
            snapshot_path: PathBuf::from("./vaultkv.snapshot"),
            flush_strategy: FlushStrategy::EveryWrite,
        }
    }
}

impl Config {
    /// Create a new config builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }
}

/// Builder for Config
#[derive(Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the snapshot file path
    pub fn snapshot_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.config.snapshot_path = path.into();
        self
    }

    /// Set the snapshot flush strategy
    pub fn flush_strategy(mut self, strategy: FlushStrategy) -> Self {
        self.config.flush_strategy = strategy;
        self
    }

    pub fn build(self) -> Config {
        self.config
    }
}
