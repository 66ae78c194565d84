use crate::genesis::{GenesisMiner, MinerError, SearchConfig};
use consensus_pow::{check_proof_of_work, decode_compact};
use primitive_types::U256;

fn easy_template() -> consensus_core::block::Header {
    // regtest-grade difficulty so the search ends in a handful of hashes
    let block = consensus_core::config::genesis::build_network_genesis(
        1_459_780_102,
        1_459_780_102,
        0,
        0x207fffff,
        1,
        0,
    );
    block.header
}

#[test]
fn search_finds_a_verifying_solution() {
    let template = easy_template();
    let target = decode_compact(template.bits).target;

    let miner = GenesisMiner::new(SearchConfig { num_workers: 2, ..Default::default() });
    let solution = miner.search(&template, target).unwrap();

    // the winner satisfies the same check block validation runs
    assert!(check_proof_of_work(&solution.hash, template.bits, U256::MAX >> 1));

    // and reproduces its hash when plugged back into the template
    let mut solved = template;
    solved.time = solution.time;
    solved.nonce = solution.nonce;
    assert_eq!(solved.hash(), solution.hash);

    // the solved timestamp is one of the offsets this round handed out
    assert!(solution.time >= template.time && solution.time < template.time + 2);
}

#[test]
fn unreachable_target_reports_exhaustion() {
    let template = easy_template();

    let miner = GenesisMiner::new(SearchConfig { num_workers: 2, max_nonce: 99, max_rounds: 2 });
    let err = miner.search(&template, U256::one()).unwrap_err();

    assert_eq!(err, MinerError::Exhausted { rounds: 2, nonces_tried: 400 });
}

#[test]
fn later_rounds_advance_the_timestamp() {
    let template = easy_template();
    let target = decode_compact(template.bits).target;

    // one nonce per timestamp forces the search to walk the rounds; at one
    // bit of difficulty, 64 single-nonce probes miss with probability 2^-64
    let miner = GenesisMiner::new(SearchConfig { num_workers: 1, max_nonce: 0, max_rounds: 64 });
    let solution = miner.search(&template, target).unwrap();

    assert_eq!(solution.nonce, 0);
    assert!(solution.time >= template.time);
    assert!(solution.time < template.time + 64);
}
