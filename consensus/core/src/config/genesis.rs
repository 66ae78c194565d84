use crate::block::{Block, Header};
use crate::constants::SEQUENCE_FINAL;
use crate::merkle::MerkleTree;
use crate::script::{Script, ScriptBuilder};
use crate::tx::{OutPoint, Transaction, TxInput, TxOutput};
use crate::ZERO_HASH;

/// The timestamp message embedded in every bitcf genesis coinbase
pub static GENESIS_TIMESTAMP_TEXT: &[u8] = b"FirstBitcoinCapitalCorp";

/// Builds the genesis block from literal inputs.
///
/// The single coinbase-style transaction embeds `timestamp_text` in its
/// scriptSig and pays `reward` to `output_script`. Its output did not exist
/// in any database at chain start and can never be spent.
///
/// Deterministic, and performs no validation; the parameter registry asserts
/// the result against its hard-coded literals.
pub fn build_genesis(
    timestamp_text: &[u8],
    output_script: Script,
    tx_time: u32,
    block_time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
) -> Block {
    // legacy difficulty tag and height marker carried since the first chains
    let script_sig = ScriptBuilder::new()
        .push_int(486_604_799)
        .push_int(9999)
        .push_slice(timestamp_text)
        .into_script();

    let tx = Transaction {
        version: 1,
        time: tx_time,
        inputs: vec![TxInput {
            previous_output: OutPoint::null(),
            script_sig,
            sequence: SEQUENCE_FINAL,
        }],
        outputs: vec![TxOutput { value: reward, script_pubkey: output_script }],
        lock_time: 0,
    };

    let merkle_root = MerkleTree::from_hashes(vec![tx.id()]).root();

    let header = Header {
        version,
        prev_block: ZERO_HASH,
        merkle_root,
        time: block_time,
        bits,
        nonce,
    };

    Block::new(header, vec![tx])
}

/// Convenience variant fixing the message and output script to the bitcf
/// literals; only the mined-for fields vary between networks.
pub fn build_network_genesis(
    tx_time: u32,
    block_time: u32,
    nonce: u32,
    bits: u32,
    version: i32,
    reward: u64,
) -> Block {
    build_genesis(
        GENESIS_TIMESTAMP_TEXT,
        Script::new(),
        tx_time,
        block_time,
        nonce,
        bits,
        version,
        reward,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_is_deterministic() {
        let a = build_network_genesis(1_459_780_102, 1_459_780_102, 3_450_927_596, 0x1d00ffff, 1, 0);
        let b = build_network_genesis(1_459_780_102, 1_459_780_102, 3_450_927_596, 0x1d00ffff, 1, 0);
        assert_eq!(a.hash(), b.hash());
        assert_eq!(a.header.merkle_root, b.header.merkle_root);
    }

    #[test]
    fn genesis_structure() {
        let genesis = build_network_genesis(1_459_780_102, 1_459_780_102, 3_450_927_596, 0x1d00ffff, 1, 0);
        assert_eq!(genesis.transactions.len(), 1);
        assert!(genesis.transactions[0].is_coinbase());
        assert!(genesis.header.prev_block.is_zero());
        assert_eq!(genesis.transactions[0].outputs[0].value, 0);
        assert!(genesis.transactions[0].outputs[0].script_pubkey.is_empty());
        // degenerate Merkle case: one transaction, root = txid
        assert_eq!(genesis.header.merkle_root, genesis.transactions[0].id());
        assert_eq!(genesis.compute_merkle_root(), genesis.header.merkle_root);
    }

    #[test]
    fn embedded_text_reaches_the_script() {
        let genesis = build_genesis(
            b"custom message",
            Script::new(),
            1_459_780_102,
            1_459_780_102,
            0,
            0x1d00ffff,
            1,
            0,
        );
        let script = &genesis.transactions[0].inputs[0].script_sig;
        let needle = b"custom message";
        assert!(script
            .as_bytes()
            .windows(needle.len())
            .any(|window| window == needle));
    }

    #[test]
    fn nonce_changes_hash_but_not_merkle_root() {
        let a = build_network_genesis(1_459_780_102, 1_459_780_102, 0, 0x1d00ffff, 1, 0);
        let b = build_network_genesis(1_459_780_102, 1_459_780_102, 1, 0x1d00ffff, 1, 0);
        assert_ne!(a.hash(), b.hash());
        assert_eq!(a.header.merkle_root, b.header.merkle_root);
    }
}
