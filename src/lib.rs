//! # VaultKV
//!
//! A wallet persistence layer that emulates multiple independent logical
//! collections ("buckets") on top of a single flat string-keyed key-value
//! store offering only point `get`/`set`/`remove`:
//! - Explicit membership index per bucket (no native enumeration below)
//! - JSON codec for structured records, raw strings for scalars
//! - Contract-lifecycle-aware re-keying on acceptance
//! - Pluggable store backends (in-memory, file-backed snapshot)
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │                  Repository Façade                           │
//! │   (addresses / key pairs / UTXOs / contracts / location)     │
//! └─────────┬──────────────────────┬────────────────────────────┘
//!           │                      │
//!           ▼                      ▼
//!   ┌─────────────┐        ┌─────────────┐
//!   │ Bucket Index│        │ Value Codec │
//!   │ (membership)│        │   (JSON)    │
//!   └──────┬──────┘        └─────────────┘
//!          │
//!          ▼
//!   ┌─────────────┐
//!   │  Flat Store │
//!   │ (get/set/rm)│
//!   └─────────────┘
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod config;

pub mod store;
pub mod bucket;
pub mod codec;
pub mod records;
pub mod repository;

// =============================================================================
// Public API Re-exports
// =============================================================================

pub use error::{Result, VaultError};
pub use config::{Config, FlushStrategy};
pub use records::{Contract, ContractQuery, ContractState, Utxo};
pub use repository::WalletRepository;
pub use store::{FileStore, FlatStore, MemoryStore};

// =============================================================================
// Version Info
// =============================================================================

/// Current version of VaultKV
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
