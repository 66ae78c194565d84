use crate::block::Header;
use crate::Hash;

/// Serialized header size
pub const HEADER_SIZE: usize = 80;

/// Serializes a header into its 80-byte wire form:
/// `version || prev_block || merkle_root || time || bits || nonce`, all
/// little-endian.
pub fn serialize(header: &Header) -> [u8; HEADER_SIZE] {
    let mut bytes = [0u8; HEADER_SIZE];
    bytes[0..4].copy_from_slice(&header.version.to_le_bytes());
    bytes[4..36].copy_from_slice(header.prev_block.as_bytes());
    bytes[36..68].copy_from_slice(header.merkle_root.as_bytes());
    bytes[68..72].copy_from_slice(&header.time.to_le_bytes());
    bytes[72..76].copy_from_slice(&header.bits.to_le_bytes());
    bytes[76..80].copy_from_slice(&header.nonce.to_le_bytes());
    bytes
}

/// Computes the hash of a block header
pub fn hash(header: &Header) -> Hash {
    super::double_sha256(&serialize(header))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ZERO_HASH;

    #[test]
    fn serialization_layout() {
        let header = Header {
            version: 1,
            prev_block: ZERO_HASH,
            merkle_root: Hash::from_bytes([0xabu8; 32]),
            time: 0x01020304,
            bits: 0x1d00ffff,
            nonce: 0xdeadbeef,
        };

        let bytes = serialize(&header);
        assert_eq!(&bytes[0..4], &[1, 0, 0, 0]);
        assert_eq!(&bytes[4..36], &[0u8; 32]);
        assert_eq!(&bytes[36..68], &[0xabu8; 32]);
        assert_eq!(&bytes[68..72], &[0x04, 0x03, 0x02, 0x01]);
        assert_eq!(&bytes[72..76], &[0xff, 0xff, 0x00, 0x1d]);
        assert_eq!(&bytes[76..80], &[0xef, 0xbe, 0xad, 0xde]);
    }
}
