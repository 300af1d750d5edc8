//! Record definitions
//!
//! The structured records the repository persists: unspent outputs and
//! contracts, plus the query type for filtered contract enumeration.
//! Scalar records (address→privkey, pubkey→privkey, the location singleton)
//! are plain strings and need no types here.

use serde::{Deserialize, Serialize};

// =============================================================================
// UTXO Records
// =============================================================================

/// An unspent transaction output
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Utxo {
    /// Transaction id (hex string)
    pub txid: String,

    /// Output index within the transaction
    pub vout: u32,

    /// Amount in satoshis
    pub amount: u64,

    /// Locking script (hex string)
    pub script_pub_key: String,

    /// Whether the output is reserved for a pending spend
    pub reserved: bool,
}

impl Utxo {
    /// Storage key for this output: txid + vout as 2-char-padded lowercase hex
    pub fn storage_key(&self) -> String {
        utxo_key(&self.txid, self.vout)
    }
}

/// Storage key for the output (`txid`, `vout`)
pub fn utxo_key(txid: &str, vout: u32) -> String {
    format!("{}{:02x}", txid, vout)
}

// =============================================================================
// Contract Records
// =============================================================================

/// Lifecycle states of a contract
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ContractState {
    Offered,
    Accepted,
    Signed,
    Broadcast,
    Confirmed,
    Closed,
    Failed,
}

/// A financial contract record
///
/// `id` is the contract's current canonical identifier: derived from the
/// temporary identifier until the contract reaches [`ContractState::Accepted`],
/// final afterwards. While temporary, `temporary_contract_id` carries the
/// pre-acceptance identifier so the repository can re-key the record on
/// acceptance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contract {
    /// Current canonical identifier (also the storage key)
    pub id: String,

    /// Pre-acceptance identifier, present until the record is re-keyed
    pub temporary_contract_id: Option<String>,

    /// Lifecycle state
    pub state: ContractState,

    /// Counterparty identifier (public key or address)
    pub counter_party: String,

    /// Collateral amount in satoshis
    pub collateral: u64,
}

impl Contract {
    /// Storage key for this contract: its current canonical identifier
    pub fn storage_key(&self) -> &str {
        &self.id
    }
}

// =============================================================================
// Contract Queries
// =============================================================================

/// Filter for contract enumeration
///
/// A record is kept if its state matches ANY of the requested states
/// (inclusive-or). An empty state list keeps nothing.
#[derive(Debug, Clone, Default)]
pub struct ContractQuery {
    /// Acceptable states
    pub states: Vec<ContractState>,
}

impl ContractQuery {
    /// Query for a single state
    pub fn with_state(state: ContractState) -> Self {
        Self {
            states: vec![state],
        }
    }

    /// Whether the given contract passes the filter
    pub fn matches(&self, contract: &Contract) -> bool {
        self.states.contains(&contract.state)
    }
}
