use crate::block::Block;
use crate::config::genesis;
use crate::errors::ParamsError;
use crate::network::ChainType;
use crate::Hash;
use once_cell::sync::{Lazy, OnceCell};
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// Chain-wide consensus constants.
///
/// Every value is fixed when the network table is built and never changes
/// for the life of the process.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConsensusParams {
    /// Height at which BIP34 (coinbase height commitment) activates
    pub bip34_height: u32,
    /// Height at which BIP65 (CHECKLOCKTIMEVERIFY) activates
    pub bip65_height: u32,
    /// Height at which BIP66 (strict DER signatures) activates
    pub bip66_height: u32,
    /// Height at which merged-mining rules activate
    pub mm_height: u32,
    /// Height at which the v7 block format activates
    pub v7_height: u32,

    /// Maximum allowed target; a block claiming an easier target is invalid
    pub pow_limit: U256,
    /// Target the first mined blocks start from
    pub initial_hash_target: U256,
    /// Seconds per difficulty retarget window
    pub target_timespan: u64,
    /// Expected seconds between blocks
    pub target_spacing: u64,

    /// Expected seconds between proof-of-stake blocks
    pub stake_target_spacing: u64,
    /// Ceiling on proof-of-work spacing when stake blocks run between
    pub target_spacing_max: u64,
    /// Minimum coin age before an output may stake
    pub stake_min_age: u64,
    /// Coin age at which stake weight stops growing
    pub stake_max_age: u64,
    /// Seconds between stake modifier recomputations
    pub stake_modifier_interval: u64,

    /// Blocks before a coinbase output is spendable
    pub coinbase_maturity: u32,
    /// Maturity used by the early chain
    pub coinbase_maturity_old: u32,

    /// Whether blocks may fall back to the minimum difficulty
    pub pow_allow_min_difficulty_blocks: bool,

    /// Accumulated trust the best chain must exceed
    pub minimum_chain_trust: U256,
    /// Ancestors of this block are assumed to carry valid signatures
    pub default_assume_valid: Hash,

    /// Blocks out of the last `to_check` that make an outdated majority
    pub reject_block_outdated_majority: u32,
    /// Window size for the upgrade majority check
    pub to_check_block_upgrade_majority: u32,

    /// Expected genesis hash; the built block must reproduce it
    pub genesis_hash: Hash,
    /// Expected genesis Merkle root
    pub genesis_merkle_root: Hash,
}

/// Transaction-count statistics as of a known chain state
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ChainTxData {
    /// UNIX timestamp of the last known transaction count
    pub timestamp: u64,
    /// Total transactions between genesis and that timestamp
    pub tx_count: u64,
    /// Estimated transactions per second after that timestamp
    pub tx_rate: f64,
}

/// A fully populated parameter set for one network.
///
/// Exactly three instances exist per process, one per [`ChainType`]; each is
/// built once behind a `Lazy` and never mutated. The static seed table rules
/// out deserializing one from outside.
#[derive(Debug, Clone, Serialize)]
pub struct NetworkParams {
    pub chain: ChainType,
    pub consensus: ConsensusParams,
    /// The genesis block, rebuilt from literals and checked at construction
    pub genesis: Block,

    /// Message-framing magic; rarely-used upper-ASCII bytes, invalid UTF-8
    pub message_start: [u8; 4],
    pub default_port: u16,
    pub prune_after_height: u32,

    pub pubkey_address_prefix: u8,
    pub script_address_prefix: u8,
    pub secret_key_prefix: u8,
    pub ext_public_key_prefix: [u8; 4],
    pub ext_secret_key_prefix: [u8; 4],

    pub dns_seeds: &'static [&'static str],
    /// Hard-coded (height, hash) pairs rejecting alternate histories
    pub checkpoints: Vec<(u32, Hash)>,
    pub chain_tx_data: ChainTxData,
}

const MAIN_GENESIS_HASH: &str = "00000000f27a49c4c32eb64188c24caa12650d53e2d2be6a84911a0744aae87a";
const TEST_GENESIS_HASH: &str = "00000002ac5bf25875b33da52f1615f3856c97ba8c02bc183ddc1da09a20be23";
const GENESIS_MERKLE_ROOT: &str = "c762ada066b6c9bef82c44f2ac2ace5eaacb60d5c4294f8ebee66ab3e8a4e33f";

fn hash_literal(s: &str) -> Hash {
    Hash::from_display_hex(s).expect("chain constant table is corrupt")
}

fn u256_literal(s: &str) -> U256 {
    let mut bytes = [0u8; 32];
    hex::decode_to_slice(s, &mut bytes).expect("chain constant table is corrupt");
    U256::from_big_endian(&bytes)
}

/// Rebuilds the genesis from its literal inputs and checks it against the
/// expected hash and Merkle root. A mismatch means the constant table is
/// corrupt; the process must not come up against it.
fn checked_genesis(
    chain: ChainType,
    consensus: &ConsensusParams,
    tx_time: u32,
    block_time: u32,
    nonce: u32,
    bits: u32,
) -> Block {
    let block = genesis::build_network_genesis(tx_time, block_time, nonce, bits, 1, 0);
    assert_eq!(
        block.hash(),
        consensus.genesis_hash,
        "{chain} genesis hash does not match its expected literal"
    );
    assert_eq!(
        block.header.merkle_root,
        consensus.genesis_merkle_root,
        "{chain} genesis Merkle root does not match its expected literal"
    );
    block
}

fn main_params() -> NetworkParams {
    let consensus = ConsensusParams {
        bip34_height: 120_000,
        bip65_height: 120_000,
        bip66_height: 120_000,
        mm_height: 120_000,
        v7_height: 120_000,
        pow_limit: U256::MAX >> 32,
        initial_hash_target: U256::MAX >> 32,
        target_timespan: 7 * 24 * 60 * 60, // one week
        target_spacing: 10 * 60,
        stake_target_spacing: 10 * 60,
        target_spacing_max: 12 * 10 * 60, // 2 hours
        stake_min_age: 60 * 60 * 24 * 30, // minimum age for coin age
        stake_max_age: 60 * 60 * 24 * 90, // stake age of full weight
        stake_modifier_interval: 6 * 60 * 60,
        coinbase_maturity: 32,
        coinbase_maturity_old: 20, // used until block 193912
        pow_allow_min_difficulty_blocks: false,
        minimum_chain_trust: u256_literal(
            "00000000000000000000000000000000000000000000000000305cd10c01cde9",
        ),
        // at block 94000
        default_assume_valid: hash_literal(
            "7c1b58a78178af1bef33453b7db1a3d830c477b48939f7a6142d508fb0055cb4",
        ),
        reject_block_outdated_majority: 850,
        to_check_block_upgrade_majority: 1000,
        genesis_hash: hash_literal(MAIN_GENESIS_HASH),
        genesis_merkle_root: hash_literal(GENESIS_MERKLE_ROOT),
    };

    let genesis = checked_genesis(
        ChainType::Main,
        &consensus,
        1_459_780_102,
        1_459_780_102,
        3_450_927_596,
        0x1d00ffff,
    );

    NetworkParams {
        chain: ChainType::Main,
        consensus,
        genesis,
        message_start: [0xe6, 0xe8, 0xe9, 0x02],
        default_port: 16661,
        prune_after_height: 100_000,
        pubkey_address_prefix: 25, // addresses begin with 'B'
        script_address_prefix: 85, // addresses begin with 'b'
        secret_key_prefix: 128,
        ext_public_key_prefix: [0x04, 0x88, 0xb2, 0x1e],
        ext_secret_key_prefix: [0x04, 0x88, 0xad, 0xe4],
        dns_seeds: &["seed.bitcf.net"],
        checkpoints: vec![
            (0, hash_literal(MAIN_GENESIS_HASH)),
            (
                94_000,
                hash_literal("7c1b58a78178af1bef33453b7db1a3d830c477b48939f7a6142d508fb0055cb4"),
            ),
        ],
        chain_tx_data: ChainTxData { timestamp: 1_554_322_000, tx_count: 152_641, tx_rate: 0.001 },
    }
}

fn test_params() -> NetworkParams {
    let consensus = ConsensusParams {
        bip34_height: 1000,
        bip65_height: 1000,
        bip66_height: 1000,
        mm_height: 1000,
        v7_height: 1000,
        pow_limit: U256::MAX >> 28,
        initial_hash_target: U256::MAX >> 29,
        target_timespan: 7 * 24 * 60 * 60,
        target_spacing: 10 * 60,
        stake_target_spacing: 10 * 60,
        target_spacing_max: 12 * 10 * 60,
        stake_min_age: 60 * 60 * 24,
        stake_max_age: 60 * 60 * 24 * 90,
        stake_modifier_interval: 60 * 20,
        coinbase_maturity: 1,
        coinbase_maturity_old: 1,
        pow_allow_min_difficulty_blocks: true,
        minimum_chain_trust: U256::zero(),
        default_assume_valid: Hash::zeroed(),
        reject_block_outdated_majority: 450,
        to_check_block_upgrade_majority: 500,
        genesis_hash: hash_literal(TEST_GENESIS_HASH),
        genesis_merkle_root: hash_literal(GENESIS_MERKLE_ROOT),
    };

    let genesis = checked_genesis(
        ChainType::Test,
        &consensus,
        1_459_780_102,
        1_459_780_108,
        33_810_254,
        0x1d0fffff,
    );

    NetworkParams {
        chain: ChainType::Test,
        consensus,
        genesis,
        message_start: [0xcb, 0xf2, 0xc0, 0xef],
        default_port: 16663,
        prune_after_height: 1000,
        pubkey_address_prefix: 111, // testnet pubkey hash: m or n
        script_address_prefix: 196, // testnet script hash: 2
        secret_key_prefix: 239,
        ext_public_key_prefix: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key_prefix: [0x04, 0x35, 0x83, 0x94],
        dns_seeds: &["tnseed.bitcf.net"],
        checkpoints: vec![(0, hash_literal(TEST_GENESIS_HASH))],
        chain_tx_data: ChainTxData { timestamp: 0, tx_count: 0, tx_rate: 0.0 },
    }
}

fn regtest_params() -> NetworkParams {
    let consensus = ConsensusParams {
        // far in the future so v1 blocks are not rejected in tests
        bip34_height: 100_000_000,
        bip65_height: 0,
        bip66_height: 0,
        mm_height: 0,
        v7_height: 457,
        pow_limit: U256::MAX >> 1,
        initial_hash_target: U256::MAX >> 29,
        target_timespan: 7 * 24 * 60 * 60,
        target_spacing: 10 * 60,
        stake_target_spacing: 10 * 60,
        target_spacing_max: 12 * 10 * 60,
        stake_min_age: 60 * 60 * 24,
        stake_max_age: 60 * 60 * 24 * 90,
        stake_modifier_interval: 6 * 20,
        coinbase_maturity: 32,
        coinbase_maturity_old: 32,
        pow_allow_min_difficulty_blocks: true,
        minimum_chain_trust: U256::zero(),
        default_assume_valid: Hash::zeroed(),
        reject_block_outdated_majority: 850,
        to_check_block_upgrade_majority: 1000,
        genesis_hash: hash_literal(TEST_GENESIS_HASH),
        genesis_merkle_root: hash_literal(GENESIS_MERKLE_ROOT),
    };

    let genesis = checked_genesis(
        ChainType::Regtest,
        &consensus,
        1_459_780_102,
        1_459_780_108,
        33_810_254,
        0x1d0fffff,
    );

    NetworkParams {
        chain: ChainType::Regtest,
        consensus,
        genesis,
        message_start: [0xcb, 0xf2, 0xc0, 0xef],
        default_port: 16664,
        prune_after_height: 1000,
        pubkey_address_prefix: 111,
        script_address_prefix: 196,
        secret_key_prefix: 239,
        ext_public_key_prefix: [0x04, 0x35, 0x87, 0xcf],
        ext_secret_key_prefix: [0x04, 0x35, 0x83, 0x94],
        // regtest has no seeds of any kind
        dns_seeds: &[],
        checkpoints: vec![(0, hash_literal(TEST_GENESIS_HASH))],
        chain_tx_data: ChainTxData { timestamp: 0, tx_count: 0, tx_rate: 0.0 },
    }
}

static MAIN: Lazy<NetworkParams> = Lazy::new(main_params);
static TEST: Lazy<NetworkParams> = Lazy::new(test_params);
static REGTEST: Lazy<NetworkParams> = Lazy::new(regtest_params);

/// Returns the static parameter set for a chain.
///
/// A pure mapping; callers that can carry the reference themselves should
/// prefer this over the process-wide selection below.
pub fn params(chain: ChainType) -> &'static NetworkParams {
    match chain {
        ChainType::Main => &MAIN,
        ChainType::Test => &TEST,
        ChainType::Regtest => &REGTEST,
    }
}

/// Resolves a parameter set by network name
pub fn lookup(name: &str) -> Result<&'static NetworkParams, ParamsError> {
    Ok(params(name.parse::<ChainType>()?))
}

static SELECTED: OnceCell<&'static NetworkParams> = OnceCell::new();

/// Stores the process-wide active parameter set.
///
/// Must be called exactly once, before any call to [`current_network`];
/// a second call is rejected so a node can never switch chains mid-flight.
pub fn select_network(chain: ChainType) -> Result<&'static NetworkParams, ParamsError> {
    let selected = params(chain);
    SELECTED.set(selected).map_err(|_| ParamsError::AlreadySelected)?;
    Ok(selected)
}

/// The active parameter set.
///
/// # Panics
///
/// If called before [`select_network`]. Running against an implicit default
/// network would be worse than not running at all.
pub fn current_network() -> &'static NetworkParams {
    SELECTED
        .get()
        .copied()
        .expect("network parameters read before select_network")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn main_genesis_matches_literals() {
        let main = params(ChainType::Main);
        assert_eq!(main.genesis.hash().to_string(), MAIN_GENESIS_HASH);
        assert_eq!(main.genesis.header.merkle_root.to_string(), GENESIS_MERKLE_ROOT);
        assert_eq!(main.genesis.header.nonce, 3_450_927_596);
        assert_eq!(main.genesis.header.bits, 0x1d00ffff);
    }

    #[test]
    fn test_and_regtest_share_a_genesis() {
        let test = params(ChainType::Test);
        let regtest = params(ChainType::Regtest);
        assert_eq!(test.genesis.hash().to_string(), TEST_GENESIS_HASH);
        assert_eq!(test.genesis.hash(), regtest.genesis.hash());
        assert_eq!(test.genesis.header.merkle_root.to_string(), GENESIS_MERKLE_ROOT);
    }

    #[test]
    fn networks_are_distinct_stable_instances() {
        for chain in ChainType::iter() {
            assert_eq!(params(chain).chain, chain);
            assert!(std::ptr::eq(params(chain), params(chain)));
        }
        assert!(!std::ptr::eq(params(ChainType::Main), params(ChainType::Test)));
        assert!(!std::ptr::eq(params(ChainType::Test), params(ChainType::Regtest)));
    }

    #[test]
    fn lookup_by_name() {
        assert_eq!(lookup("main").unwrap().default_port, 16661);
        assert_eq!(lookup("test").unwrap().default_port, 16663);
        assert_eq!(lookup("regtest").unwrap().default_port, 16664);
        assert_eq!(
            lookup("bogus").unwrap_err(),
            ParamsError::UnknownChain("bogus".to_string())
        );
    }

    #[test]
    fn pow_limits_are_ordered() {
        let main = params(ChainType::Main);
        let test = params(ChainType::Test);
        let regtest = params(ChainType::Regtest);
        // each successive network is easier to mine on
        assert!(main.consensus.pow_limit < test.consensus.pow_limit);
        assert!(test.consensus.pow_limit < regtest.consensus.pow_limit);
        assert!(main.consensus.initial_hash_target <= main.consensus.pow_limit);
        assert!(test.consensus.initial_hash_target <= test.consensus.pow_limit);
    }

    #[test]
    fn first_checkpoint_is_the_genesis() {
        for chain in ChainType::iter() {
            let network = params(chain);
            let (height, hash) = network.checkpoints[0];
            assert_eq!(height, 0);
            assert_eq!(hash, network.genesis.hash());
        }
    }

    #[test]
    fn assume_valid_is_checkpointed_on_main() {
        let main = params(ChainType::Main);
        let expected = main.consensus.default_assume_valid;
        assert!(main.checkpoints.iter().any(|(_, hash)| *hash == expected));
    }
}
