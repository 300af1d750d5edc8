//! Flat Store Module
//!
//! The underlying key-value substrate: opaque string keys mapped to opaque
//! string values, offering only point `get`/`set`/`remove`. There is no
//! enumeration primitive — callers that need to enumerate a collection must
//! maintain their own index (see [`crate::bucket`]).
//!
//! ## Responsibilities
//! - Define the [`FlatStore`] seam so the repository can be constructed over
//!   any conforming backend (in-memory map, file, remote service)
//! - Provide the two shipped backends: [`MemoryStore`] and [`FileStore`]
//!
//! All methods take `&self`; backends use interior mutability so a repository
//! can be shared behind a plain reference.

mod memory;
mod file;

pub use memory::MemoryStore;
pub use file::FileStore;

use crate::error::Result;

/// The flat key→string store the repository is built over
///
/// No retries, no partial failure: a host-level store either succeeds or is
/// fatally broken. Backends with real I/O surface that through `Result`.
pub trait FlatStore {
    /// Read the value under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write `value` under `key`, overwriting any previous value
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove the entry under `key`; absent keys are a no-op
    fn remove(&self, key: &str) -> Result<()>;
}
