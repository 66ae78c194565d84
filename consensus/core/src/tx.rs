use crate::hashing;
use crate::script::Script;
use crate::Hash;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Reference to an output of a previous transaction
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct OutPoint {
    pub hash: Hash,
    pub index: u32,
}

impl OutPoint {
    /// The null reference a coinbase input carries
    pub fn null() -> Self {
        Self { hash: Hash::zeroed(), index: u32::MAX }
    }

    pub fn is_null(&self) -> bool {
        self.hash.is_zero() && self.index == u32::MAX
    }
}

/// Transaction input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TxInput {
    pub previous_output: OutPoint,
    pub script_sig: Script,
    pub sequence: u32,
}

/// Transaction output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct TxOutput {
    pub value: u64,
    pub script_pubkey: Script,
}

/// A bitcf transaction.
///
/// Carries its own timestamp (`time`), serialized directly after the
/// version; the field is part of the txid preimage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub version: i32,
    pub time: u32,
    pub inputs: Vec<TxInput>,
    pub outputs: Vec<TxOutput>,
    pub lock_time: u32,
}

impl Transaction {
    /// Transaction identity: double SHA-256 over the wire serialization
    pub fn id(&self) -> Hash {
        hashing::tx::id(self)
    }

    /// Whether this is the block's generation transaction
    pub fn is_coinbase(&self) -> bool {
        self.inputs.len() == 1 && self.inputs[0].previous_output.is_null()
    }
}
