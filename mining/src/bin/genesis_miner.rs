use clap::Parser;
use consensus_core::config::params;
use consensus_pow::{check_proof_of_work, decode_compact};
use mining::{GenesisMiner, SearchConfig};
use std::fs;
use std::process;

/// Searches for genesis `(time, nonce)` constants for a network definition.
///
/// This is the offline half of the parameter registry: run it when defining
/// a new network, then hard-code the reported values.
#[derive(Parser, Debug)]
#[command(name = "genesis_miner")]
struct Opts {
    /// Network whose genesis template and initial target to start from
    #[arg(long, default_value = "main")]
    network: String,

    /// Override bits (decimal or 0x-prefixed hex); the decoded value
    /// becomes the search target
    #[arg(long)]
    bits: Option<String>,

    /// Base block timestamp; workers scan consecutive offsets from here
    #[arg(long)]
    time: Option<u32>,

    /// Coinbase transaction timestamp (defaults to the base block time)
    #[arg(long)]
    tx_time: Option<u32>,

    /// Worker threads (default: one per CPU)
    #[arg(long)]
    threads: Option<usize>,

    /// Highest nonce each worker scans per timestamp
    #[arg(long)]
    max_nonce: Option<u32>,

    /// Rounds of fresh timestamp offsets before giving up
    #[arg(long, default_value_t = 1)]
    rounds: u32,

    /// Print the bincode-serialized solved block as hex
    #[arg(long)]
    hex: bool,

    /// Write the serialized solved block to this file
    #[arg(long)]
    out: Option<String>,
}

fn parse_bits(s: &str) -> Option<u32> {
    if let Some(hex_digits) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u32::from_str_radix(hex_digits, 16).ok()
    } else {
        s.parse::<u32>().ok()
    }
}

fn main() {
    env_logger::init();
    let opts = Opts::parse();

    let network = match params::lookup(&opts.network) {
        Ok(network) => network,
        Err(e) => {
            eprintln!("{e}");
            process::exit(2);
        }
    };

    let bits = match opts.bits.as_deref() {
        Some(s) => match parse_bits(s) {
            Some(b) => b,
            None => {
                eprintln!("failed to parse bits '{s}'");
                process::exit(2);
            }
        },
        None => network.genesis.header.bits,
    };

    let block_time = opts.time.unwrap_or(network.genesis.header.time);
    let tx_time = opts.tx_time.unwrap_or(block_time);

    // A bits override searches against its own decoded target; otherwise the
    // network's configured starting target applies.
    let target = if opts.bits.is_some() {
        let decoded = decode_compact(bits);
        if decoded.negative || decoded.overflow || decoded.target.is_zero() {
            eprintln!("bits 0x{bits:08x} decode to an unusable target");
            process::exit(2);
        }
        decoded.target
    } else {
        network.consensus.initial_hash_target
    };

    let template =
        consensus_core::config::genesis::build_genesis(
            consensus_core::config::genesis::GENESIS_TIMESTAMP_TEXT,
            consensus_core::script::Script::new(),
            tx_time,
            block_time,
            0,
            bits,
            1,
            0,
        );

    let mut config = SearchConfig { max_rounds: opts.rounds, ..Default::default() };
    if let Some(threads) = opts.threads {
        config.num_workers = threads;
    }
    if let Some(max_nonce) = opts.max_nonce {
        config.max_nonce = max_nonce;
    }

    println!(
        "Searching {} offsets x {} rounds from time {} at bits 0x{:08x}...",
        config.num_workers, config.max_rounds, block_time, bits
    );

    let miner = GenesisMiner::new(config);
    let solution = match miner.search(&template.header, target) {
        Ok(solution) => solution,
        Err(e) => {
            eprintln!("{e}");
            process::exit(1);
        }
    };

    let mut solved = template;
    solved.header.time = solution.time;
    solved.header.nonce = solution.nonce;

    let valid = check_proof_of_work(&solution.hash, bits, network.consensus.pow_limit);

    println!("Genesis hash: {}", solved.hash());
    println!("Merkle root: {}", solved.header.merkle_root);
    println!("Time: {}", solution.time);
    println!("Bits: 0x{:08x}", solved.header.bits);
    println!("Nonce: {}", solution.nonce);
    println!("PoW valid under {} limit: {}", network.chain, valid);
    println!("Hash rate: {:.2} kH/s (worker {})", solution.hash_rate() / 1000.0, solution.worker_id);

    if opts.hex || opts.out.is_some() {
        match bincode::serialize(&solved) {
            Ok(bytes) => {
                if opts.hex {
                    println!("Serialized genesis (hex): {}", hex::encode(&bytes));
                }
                if let Some(path) = opts.out.as_deref() {
                    if let Err(e) = fs::write(path, &bytes) {
                        eprintln!("Failed to write genesis to {path}: {e}");
                    } else {
                        println!("Wrote serialized genesis to {path}");
                    }
                }
            }
            Err(e) => eprintln!("Failed to serialize genesis block: {e}"),
        }
    }
}
