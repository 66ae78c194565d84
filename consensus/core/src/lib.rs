pub mod block;
pub mod config;
pub mod constants;
pub mod errors;
pub mod hashing;
pub mod merkle;
pub mod network;
pub mod script;
pub mod tx;

// Re-export the hash type; everything in this crate speaks it.
pub use bitcf_hashes::Hash;

/// The all-zero hash, the previous-block reference of a genesis header
pub const ZERO_HASH: Hash = Hash::zeroed();
