/// Block version carried by every bitcf genesis header
pub const BLOCK_VERSION: i32 = 1;

/// Number of base units in one coin
pub const COIN: u64 = 1_000_000;

/// Upper sanity bound on any monetary value
pub const MAX_MONEY: u64 = 2_000_000_000 * COIN;

/// Input sequence value marking a final transaction input
pub const SEQUENCE_FINAL: u32 = 0xffff_ffff;

/// Highest nonce a header can carry before the search must move to a new
/// timestamp (the nonce space is scanned as a signed 31-bit range)
pub const MAX_HEADER_NONCE: u32 = 0x7fff_ffff;
