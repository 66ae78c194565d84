use crate::Hash;
use sha2::{Digest, Sha256};

/// Single SHA-256 over a byte slice
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(data);
    hasher.finalize().into()
}

/// SHA-256 applied twice, the digest every chain identity here is built on
pub fn double_sha256(data: &[u8]) -> Hash {
    Hash::from_bytes(sha256(&sha256(data)))
}
