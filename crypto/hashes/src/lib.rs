pub mod hasher;

// Re-export commonly used functions
pub use hasher::{double_sha256, sha256};

use std::fmt;
use std::hash::Hash as StdHash;
use std::str::FromStr;

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const HASH_SIZE: usize = 32;

/// A 32-byte hash wrapper used across the project.
///
/// Bytes are kept in the order the digest function emits them (the
/// little-endian numeric layout); `Display` and `from_str` use the reversed
/// hex form block hashes are conventionally shown in.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, BorshSerialize, BorshDeserialize)]
pub struct Hash([u8; 32]);

/// Error parsing a hash from its hex form
#[derive(Error, Debug, Clone, PartialEq)]
pub enum HashParseError {
    #[error("hash hex must be 64 characters, got {0}")]
    InvalidLength(usize),

    #[error("invalid hex: {0}")]
    InvalidHex(#[from] hex::FromHexError),
}

impl Hash {
    /// Creates a hash from a 32-byte array (digest byte order)
    pub const fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    /// Returns raw bytes
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Creates a zeroed hash
    pub const fn zeroed() -> Self {
        Self([0u8; 32])
    }

    /// Whether every byte is zero
    pub fn is_zero(&self) -> bool {
        self.0 == [0u8; 32]
    }

    /// Parses the conventional display form: big-endian hex, reversed into
    /// the internal byte order. A leading `0x` is accepted.
    pub fn from_display_hex(s: &str) -> Result<Self, HashParseError> {
        let s = s.strip_prefix("0x").unwrap_or(s);
        if s.len() != 64 {
            return Err(HashParseError::InvalidLength(s.len()));
        }
        let mut bytes = [0u8; 32];
        hex::decode_to_slice(s, &mut bytes)?;
        bytes.reverse();
        Ok(Self(bytes))
    }

    /// Tries to create a Hash from a slice of bytes (digest byte order)
    pub fn try_from_slice(slice: &[u8]) -> Result<Self, std::array::TryFromSliceError> {
        let array: [u8; 32] = slice.try_into()?;
        Ok(Self(array))
    }
}

impl From<[u8; 32]> for Hash {
    fn from(bytes: [u8; 32]) -> Self {
        Hash::from_bytes(bytes)
    }
}

impl From<Hash> for [u8; 32] {
    fn from(h: Hash) -> Self {
        h.0
    }
}

impl TryFrom<&[u8]> for Hash {
    type Error = std::array::TryFromSliceError;

    fn try_from(slice: &[u8]) -> Result<Self, Self::Error> {
        let array: [u8; 32] = slice.try_into()?;
        Ok(Self(array))
    }
}

impl AsRef<[u8]> for Hash {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl FromStr for Hash {
    type Err = HashParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_display_hex(s)
    }
}

impl fmt::Display for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in self.0.iter().rev() {
            write!(f, "{:02x}", byte)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Hash({})", self)
    }
}

impl StdHash for Hash {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        // the low bytes are the most entropic part of a PoW hash
        let mut le = [0u8; 8];
        le.copy_from_slice(&self.0[0..8]);
        let v = u64::from_le_bytes(le);
        v.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::Hash;

    #[test]
    fn display_reverses_bytes() {
        let mut bytes = [0u8; 32];
        bytes[0] = 0xaa;
        bytes[31] = 0x01;
        let h = Hash::from_bytes(bytes);
        let s = h.to_string();
        assert!(s.starts_with("01"));
        assert!(s.ends_with("aa"));
    }

    #[test]
    fn display_hex_roundtrip() {
        let s = "00000000f27a49c4c32eb64188c24caa12650d53e2d2be6a84911a0744aae87a";
        let h = Hash::from_display_hex(s).unwrap();
        assert_eq!(h.to_string(), s);
        assert_eq!(h.as_bytes()[31], 0x00);
        assert_eq!(h.as_bytes()[0], 0x7a);
    }

    #[test]
    fn display_hex_accepts_0x_prefix() {
        let with = Hash::from_display_hex("0x00000000f27a49c4c32eb64188c24caa12650d53e2d2be6a84911a0744aae87a").unwrap();
        let without = Hash::from_display_hex("00000000f27a49c4c32eb64188c24caa12650d53e2d2be6a84911a0744aae87a").unwrap();
        assert_eq!(with, without);
    }

    #[test]
    fn display_hex_rejects_bad_length() {
        assert!(Hash::from_display_hex("00ff").is_err());
    }

    #[test]
    fn zeroed_is_zero() {
        assert!(Hash::zeroed().is_zero());
        assert!(!Hash::from_bytes([1u8; 32]).is_zero());
    }
}
