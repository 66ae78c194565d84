use crate::hashing;
use crate::merkle::MerkleTree;
use crate::tx::Transaction;
use crate::Hash;
use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// Block header.
///
/// Identity is the double SHA-256 of the 80-byte serialization; changing any
/// field yields a logically different block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct Header {
    pub version: i32,
    /// All-zero for a genesis header
    pub prev_block: Hash,
    /// Derived from the transaction list, never set independently
    pub merkle_root: Hash,
    /// Seconds since the epoch
    pub time: u32,
    /// Compact difficulty encoding
    pub bits: u32,
    pub nonce: u32,
}

impl Header {
    /// Computes the header hash
    pub fn hash(&self) -> Hash {
        hashing::header::hash(self)
    }
}

/// Complete block: header plus transactions
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
#[serde(rename_all = "camelCase")]
pub struct Block {
    pub header: Header,
    pub transactions: Vec<Transaction>,
}

impl Block {
    /// Creates a new block with the given header and transactions
    pub fn new(header: Header, transactions: Vec<Transaction>) -> Self {
        Self { header, transactions }
    }

    /// The block's identity, the hash of its header
    pub fn hash(&self) -> Hash {
        self.header.hash()
    }

    /// Recomputes the Merkle root over the transaction list
    pub fn compute_merkle_root(&self) -> Hash {
        let tx_hashes: Vec<_> = self.transactions.iter().map(|tx| tx.id()).collect();
        MerkleTree::from_hashes(tx_hashes).root()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZERO_HASH;

    fn test_header() -> Header {
        Header {
            version: 1,
            prev_block: ZERO_HASH,
            merkle_root: Hash::from_bytes([7u8; 32]),
            time: 1_459_780_102,
            bits: 0x1d00ffff,
            nonce: 0,
        }
    }

    #[test]
    fn any_field_change_changes_the_hash() {
        let base = test_header();
        let mut nonce_bumped = base;
        nonce_bumped.nonce += 1;
        let mut time_bumped = base;
        time_bumped.time += 1;

        assert_ne!(base.hash(), nonce_bumped.hash());
        assert_ne!(base.hash(), time_bumped.hash());
        assert_eq!(base.hash(), test_header().hash());
    }
}
