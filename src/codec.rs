//! Value codec
//!
//! Encoding and decoding of structured records to and from the strings the
//! flat store holds. Structured records (UTXO, contract) use JSON — a
//! reversible text serialization whose round trip reproduces an equal
//! record. Scalar records are stored raw and never pass through here.
//!
//! Decoding an absent key is not handled here; the repository treats
//! absence as [`VaultError::NotFound`] before decoding. Decoding a present
//! but malformed value fails with [`VaultError::Codec`].

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{Result, VaultError};
use crate::records::{Contract, Utxo};

/// Encode a UTXO record for storage
pub fn encode_utxo(utxo: &Utxo) -> Result<String> {
    encode(utxo)
}

/// Decode a stored UTXO record
pub fn decode_utxo(value: &str) -> Result<Utxo> {
    decode(value)
}

/// Encode a contract record for storage
pub fn encode_contract(contract: &Contract) -> Result<String> {
    encode(contract)
}

/// Decode a stored contract record
pub fn decode_contract(value: &str) -> Result<Contract> {
    decode(value)
}

fn encode<T: Serialize>(record: &T) -> Result<String> {
    serde_json::to_string(record)
        .map_err(|e| VaultError::Codec(format!("Encode failed: {}", e)))
}

fn decode<T: DeserializeOwned>(value: &str) -> Result<T> {
    serde_json::from_str(value)
        .map_err(|e| VaultError::Codec(format!("Decode failed: {}", e)))
}
