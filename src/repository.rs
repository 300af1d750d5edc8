//! Repository Façade
//!
//! The typed operation surface over the flat store. Each logical collection
//! (addresses, key pairs, UTXOs, contracts) is one bucket; the singleton
//! location value lives under a fixed reserved key outside any bucket.
//!
//! ## Responsibilities
//! - Pair every membership mutation with the matching value write/remove
//!   (no orphaned entries in either direction)
//! - Encode/decode structured records through [`crate::codec`]
//! - Re-key a contract from its temporary to its final identifier when it
//!   reaches the Accepted state
//!
//! ## Ownership
//! The flat store is exclusively owned by the repository; no other component
//! touches it.

use tracing::debug;

use crate::bucket::BucketIndex;
use crate::codec;
use crate::error::{Result, VaultError};
use crate::records::{utxo_key, Contract, ContractQuery, ContractState, Utxo};
use crate::store::FlatStore;

/// The wallet persistence façade
///
/// ## Concurrency Model: Single-Writer
///
/// The store is process-local and accessed synchronously; backends guard
/// their own state internally, so all operations take `&self`. There is no
/// isolation between a read-modify-write's steps — the single-writer
/// assumption holds.
pub struct WalletRepository<S: FlatStore> {
    /// The underlying flat store (exclusive access)
    store: S,
}

impl<S: FlatStore> WalletRepository<S> {
    // =========================================================================
    // Reserved Keys
    // =========================================================================
    const ADDRESS_BUCKET: &'static str = "addressBucket";
    const KEY_PAIR_BUCKET: &'static str = "keyPairBucket";
    const UTXO_BUCKET: &'static str = "utxoBucket";
    const CONTRACT_BUCKET: &'static str = "contractBucket";
    const LOCATION_KEY: &'static str = "locationValue";

    /// Create a repository over the given store
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// Consume the repository and return the underlying store
    pub fn into_store(self) -> S {
        self.store
    }

    fn index(&self) -> BucketIndex<'_, S> {
        BucketIndex::new(&self.store)
    }

    // =========================================================================
    // Addresses
    // =========================================================================

    /// Store or overwrite the private key for an address
    pub fn upsert_address(&self, address: &str, priv_key: &str) -> Result<()> {
        debug!(address, "upsert address");

        // Step 1: Write the value entry
        self.store.set(address, priv_key)?;

        // Step 2: Track membership (idempotent on re-upsert)
        self.index().add_member(Self::ADDRESS_BUCKET, address)
    }

    /// Delete an address and its private key
    pub fn delete_address(&self, address: &str) -> Result<()> {
        debug!(address, "delete address");

        self.index().remove_member(Self::ADDRESS_BUCKET, address)?;
        self.store.remove(address)
    }

    /// List all stored addresses in insertion order
    pub fn get_addresses(&self) -> Result<Vec<String>> {
        self.index().list_members(Self::ADDRESS_BUCKET)
    }

    /// Look up the private key for an address
    ///
    /// Fails with [`VaultError::NotFound`] if the address is unknown.
    pub fn get_priv_key_for_address(&self, address: &str) -> Result<String> {
        self.store.get(address)?.ok_or(VaultError::NotFound)
    }

    // =========================================================================
    // Key Pairs
    // =========================================================================

    /// Store or overwrite the private key for a public key
    pub fn upsert_key_pair(&self, pub_key: &str, priv_key: &str) -> Result<()> {
        debug!(pub_key, "upsert key pair");

        self.store.set(pub_key, priv_key)?;
        self.index().add_member(Self::KEY_PAIR_BUCKET, pub_key)
    }

    /// Look up the private key for a public key
    ///
    /// Fails with [`VaultError::NotFound`] if the public key is unknown.
    pub fn get_priv_key_for_pubkey(&self, pub_key: &str) -> Result<String> {
        self.store.get(pub_key)?.ok_or(VaultError::NotFound)
    }

    // =========================================================================
    // UTXOs
    // =========================================================================

    /// Store or overwrite an unspent output record
    pub fn upsert_utxo(&self, utxo: &Utxo) -> Result<()> {
        let key = utxo.storage_key();
        debug!(%key, "upsert utxo");

        let value = codec::encode_utxo(utxo)?;
        self.store.set(&key, &value)?;
        self.index().add_member(Self::UTXO_BUCKET, &key)
    }

    /// Delete an unspent output record
    pub fn delete_utxo(&self, utxo: &Utxo) -> Result<()> {
        let key = utxo.storage_key();
        debug!(%key, "delete utxo");

        self.index().remove_member(Self::UTXO_BUCKET, &key)?;
        self.store.remove(&key)
    }

    /// Load all unspent output records
    pub fn get_utxos(&self) -> Result<Vec<Utxo>> {
        let members = self.index().list_members(Self::UTXO_BUCKET)?;

        let mut utxos = Vec::with_capacity(members.len());
        for key in &members {
            let value = self.store.get(key)?.ok_or(VaultError::NotFound)?;
            utxos.push(codec::decode_utxo(&value)?);
        }
        Ok(utxos)
    }

    /// Clear the reserved flag on a stored output
    ///
    /// Read-modify-write under the same key: loads the record (fails with
    /// [`VaultError::NotFound`] if absent), clears `reserved`, re-upserts.
    /// No isolation against concurrent writers — single-writer assumption.
    pub fn unreserve_utxo(&self, txid: &str, vout: u32) -> Result<()> {
        let key = utxo_key(txid, vout);
        debug!(%key, "unreserve utxo");

        let value = self.store.get(&key)?.ok_or(VaultError::NotFound)?;
        let mut utxo = codec::decode_utxo(&value)?;
        utxo.reserved = false;

        let value = codec::encode_utxo(&utxo)?;
        self.store.set(&key, &value)
    }

    // =========================================================================
    // Contracts
    // =========================================================================

    /// Store a contract under its current identifier
    pub fn create_contract(&self, contract: &Contract) -> Result<()> {
        debug!(id = contract.storage_key(), "create contract");
        self.put_contract(contract)
    }

    /// Update a stored contract, migrating its identifier on acceptance
    ///
    /// When the contract's state is Accepted, any record stored under its
    /// `temporary_contract_id` is first deleted (best-effort, no error if
    /// absent), then the record is upserted under its current final
    /// identifier. The delete-then-write pair is not crash-atomic; a crash
    /// between the steps can leave neither or both copies in the store.
    pub fn update_contract(&self, contract: &Contract) -> Result<()> {
        debug!(id = contract.storage_key(), state = ?contract.state, "update contract");

        if contract.state == ContractState::Accepted {
            if let Some(temp_id) = &contract.temporary_contract_id {
                // Step 1: Drop the pre-acceptance record, if any
                self.index().remove_member(Self::CONTRACT_BUCKET, temp_id)?;
                self.store.remove(temp_id)?;
            }
        }

        // Step 2: Upsert under the current identifier
        self.put_contract(contract)
    }

    /// Load a contract by identifier
    ///
    /// Fails with [`VaultError::NotFound`] if absent.
    pub fn get_contract(&self, id: &str) -> Result<Contract> {
        let value = self.store.get(id)?.ok_or(VaultError::NotFound)?;
        codec::decode_contract(&value)
    }

    /// Delete a contract by identifier
    pub fn delete_contract(&self, id: &str) -> Result<()> {
        debug!(id, "delete contract");

        self.index().remove_member(Self::CONTRACT_BUCKET, id)?;
        self.store.remove(id)
    }

    /// Existence probe for a contract identifier
    ///
    /// Returns `false` for an unknown id; never fails on absence.
    pub fn has_contract(&self, id: &str) -> Result<bool> {
        Ok(self.store.get(id)?.is_some())
    }

    /// Load contracts, optionally filtered by state
    ///
    /// With a query, keeps records whose state matches ANY requested state.
    /// Without one, returns all stored contracts. Never fails on emptiness.
    pub fn get_contracts(&self, query: Option<&ContractQuery>) -> Result<Vec<Contract>> {
        let members = self.index().list_members(Self::CONTRACT_BUCKET)?;

        let mut contracts = Vec::with_capacity(members.len());
        for key in &members {
            let value = self.store.get(key)?.ok_or(VaultError::NotFound)?;
            let contract = codec::decode_contract(&value)?;

            if query.map_or(true, |q| q.matches(&contract)) {
                contracts.push(contract);
            }
        }
        Ok(contracts)
    }

    /// Write the value entry and track membership for a contract
    fn put_contract(&self, contract: &Contract) -> Result<()> {
        let key = contract.storage_key();
        let value = codec::encode_contract(contract)?;

        self.store.set(key, &value)?;
        self.index().add_member(Self::CONTRACT_BUCKET, key)
    }

    // =========================================================================
    // Location Singleton
    // =========================================================================

    /// Store the singleton location value
    ///
    /// One reserved key, no membership tracking.
    pub fn save_location(&self, value: &str) -> Result<()> {
        debug!("save location");
        self.store.set(Self::LOCATION_KEY, value)
    }

    /// Read the singleton location value, if set
    pub fn get_location(&self) -> Result<Option<String>> {
        self.store.get(Self::LOCATION_KEY)
    }
}
