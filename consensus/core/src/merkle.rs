use crate::hashing::double_sha256;
use crate::Hash;

/// Merkle tree over transaction hashes.
///
/// Pairs are combined with double SHA-256; an odd node at any level is
/// paired with itself. For a single-transaction block the root is that
/// transaction's hash.
#[derive(Clone, Debug)]
pub struct MerkleTree {
    /// Nodes at each level of the tree (leaves at level 0)
    levels: Vec<Vec<Hash>>,
}

impl MerkleTree {
    /// Creates a new Merkle tree from a list of transaction hashes
    pub fn from_hashes(hashes: Vec<Hash>) -> Self {
        if hashes.is_empty() {
            return Self { levels: vec![] };
        }

        let mut levels = vec![hashes];

        while levels.last().unwrap().len() > 1 {
            let current_level = levels.last().unwrap();
            let mut next_level = Vec::new();

            for chunk in current_level.chunks(2) {
                let left = chunk[0];
                let right = if chunk.len() == 2 { chunk[1] } else { left };
                next_level.push(Self::hash_pair(&left, &right));
            }

            levels.push(next_level);
        }

        Self { levels }
    }

    /// Returns the Merkle root hash
    pub fn root(&self) -> Hash {
        if self.levels.is_empty() {
            Hash::zeroed()
        } else {
            self.levels.last().unwrap()[0]
        }
    }

    /// Hashes two nodes together to create their parent
    fn hash_pair(left: &Hash, right: &Hash) -> Hash {
        let mut combined = Vec::with_capacity(64);
        combined.extend_from_slice(left.as_bytes());
        combined.extend_from_slice(right.as_bytes());

        double_sha256(&combined)
    }
}
