//! Bucket Index Module
//!
//! The flat store has no enumeration primitive, so bucket membership is
//! tracked explicitly: each bucket stores an ordered list of its member keys
//! as a single delimiter-joined string under a reserved bucket-tag key.
//!
//! ## Responsibilities
//! - List the members of a bucket in insertion order
//! - Append a member (idempotent)
//! - Remove a member, deleting the tag entry when the bucket empties
//!
//! ## Storage Layout
//! ```text
//! ┌──────────────────┬─────────────────────────────────┐
//! │ Key              │ Value                           │
//! ├──────────────────┼─────────────────────────────────┤
//! │ "addressBucket"  │ "addr1,addr2,addr3"             │
//! │ "addr1"          │ <privkey for addr1>             │
//! │ "addr2"          │ <privkey for addr2>             │
//! │ "addr3"          │ <privkey for addr3>             │
//! └──────────────────┴─────────────────────────────────┘
//! ```
//!
//! The list is rewritten wholesale on every mutation — O(n) per mutation,
//! acceptable at wallet scale. Member keys must never contain the delimiter;
//! keys here are hex/identifier strings, so this precondition is documented
//! rather than validated.

use crate::error::Result;
use crate::store::FlatStore;

/// Separator between member keys in a bucket-tag entry
pub const DELIMITER: &str = ",";

/// Membership index over a borrowed flat store
///
/// A thin, per-call view: construct it over the store, perform one or more
/// membership operations, drop it. Holds no state of its own.
pub struct BucketIndex<'a, S: FlatStore> {
    store: &'a S,
}

impl<'a, S: FlatStore> BucketIndex<'a, S> {
    /// Create an index view over the given store
    pub fn new(store: &'a S) -> Self {
        Self { store }
    }

    /// List the member keys of a bucket in insertion order
    ///
    /// Returns an empty vec if the bucket-tag entry is absent.
    pub fn list_members(&self, bucket_tag: &str) -> Result<Vec<String>> {
        match self.store.get(bucket_tag)? {
            Some(joined) => Ok(joined.split(DELIMITER).map(str::to_string).collect()),
            None => Ok(Vec::new()),
        }
    }

    /// Add a member key to a bucket
    ///
    /// No-op if the key is already present (membership stays duplicate-free);
    /// otherwise appends to the end and rewrites the tag entry.
    pub fn add_member(&self, bucket_tag: &str, key: &str) -> Result<()> {
        let mut members = self.list_members(bucket_tag)?;
        if members.iter().any(|m| m == key) {
            return Ok(());
        }

        members.push(key.to_string());
        self.write_members(bucket_tag, &members)
    }

    /// Remove a member key from a bucket
    ///
    /// No-op if the key is absent. If the resulting list is empty, the tag
    /// entry itself is deleted — an empty bucket is never represented by an
    /// empty string.
    pub fn remove_member(&self, bucket_tag: &str, key: &str) -> Result<()> {
        let mut members = self.list_members(bucket_tag)?;
        let before = members.len();
        members.retain(|m| m != key);

        if members.len() == before {
            return Ok(());
        }

        if members.is_empty() {
            self.store.remove(bucket_tag)
        } else {
            self.write_members(bucket_tag, &members)
        }
    }

    /// Rewrite the tag entry from a non-empty member list
    fn write_members(&self, bucket_tag: &str, members: &[String]) -> Result<()> {
        let joined = members.join(DELIMITER);
        self.store.set(bucket_tag, &joined)
    }
}
