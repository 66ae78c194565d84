//! Compact difficulty encoding and the proof-of-work check.
//!
//! The compact form packs a 256-bit target into 32 bits: one exponent byte,
//! a sign bit, and a 23-bit mantissa. Every block header carries its target
//! in this form; [`check_proof_of_work`] is the single source of truth for
//! whether a header hash satisfies it.

use bitcf_hashes::Hash;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Result of expanding a compact difficulty encoding.
///
/// `negative` and `overflow` are reported rather than clamped; both make the
/// encoding invalid for consensus purposes but are expected per-block
/// outcomes, not errors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompactDecoded {
    pub target: U256,
    pub negative: bool,
    pub overflow: bool,
}

/// Expands compact bits into a full 256-bit target.
///
/// The top byte is a base-256 exponent, the low 23 bits the mantissa and bit
/// 0x00800000 the sign. A zero mantissa is neither negative nor overflowed
/// regardless of the other bits.
pub fn decode_compact(bits: u32) -> CompactDecoded {
    let size = (bits >> 24) as usize;
    let word = bits & 0x007fffff;

    let negative = word != 0 && (bits & 0x0080_0000) != 0;
    let overflow =
        word != 0 && (size > 34 || (word > 0xff && size > 33) || (word > 0xffff && size > 32));

    let target = if overflow {
        U256::zero()
    } else if size <= 3 {
        U256::from(word >> (8 * (3 - size)))
    } else {
        U256::from(word) << (8 * (size - 3))
    };

    CompactDecoded { target, negative, overflow }
}

/// Packs a target back into compact form, the inverse of [`decode_compact`]
/// for canonical encodings. Retargeting code relies on the round trip.
pub fn compact_from_target(target: U256) -> u32 {
    let mut size = (target.bits() + 7) / 8;
    let mut compact = if size <= 3 {
        (target.low_u64() << (8 * (3 - size))) as u32
    } else {
        let shifted = target >> (8 * (size - 3));
        shifted.low_u64() as u32
    };

    // A set high bit would read as the sign; shift into a larger exponent.
    if compact & 0x0080_0000 != 0 {
        compact >>= 8;
        size += 1;
    }

    compact | ((size as u32) << 24)
}

/// Interprets a block hash as a 256-bit integer for target comparison
pub fn hash_to_u256(hash: &Hash) -> U256 {
    U256::from_little_endian(hash.as_bytes())
}

/// Whether `hash` satisfies the difficulty claimed by `bits` under the
/// network ceiling `limit`.
///
/// Fails on a negative or overflowed encoding, a zero target, a target above
/// `limit`, or a hash numerically above the target. Pure and total; malformed
/// encodings are an expected validation outcome, never a panic.
pub fn check_proof_of_work(hash: &Hash, bits: u32, limit: U256) -> bool {
    let decoded = decode_compact(bits);

    if decoded.negative || decoded.overflow || decoded.target.is_zero() || decoded.target > limit {
        return false;
    }

    hash_to_u256(hash) <= decoded.target
}
