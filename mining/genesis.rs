//! Coordinator for the genesis search.
//!
//! Spawns a fixed pool of [`SolveWorker`]s, one timestamp offset each, and
//! blocks until the first solution arrives or every worker exhausts its
//! nonce range. Additional rounds shift the offsets forward so an
//! unreachable target ends in a reported failure instead of a hang.

use crate::job::{SearchAssignment, Solution};
use crate::worker::SolveWorker;
use consensus_core::block::Header;
use consensus_core::constants::MAX_HEADER_NONCE;
use primitive_types::U256;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use thiserror::Error;

/// Bounds on the search space
#[derive(Clone, Debug)]
pub struct SearchConfig {
    /// Number of worker threads, one timestamp offset per worker per round
    pub num_workers: usize,
    /// Highest nonce each worker scans before giving up on its timestamp
    pub max_nonce: u32,
    /// Rounds of fresh timestamp offsets before reporting exhaustion
    pub max_rounds: u32,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { num_workers: num_cpus::get(), max_nonce: MAX_HEADER_NONCE, max_rounds: 1 }
    }
}

/// Failure outcomes of a bounded search
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinerError {
    #[error(
        "no solution in {nonces_tried} nonces across {rounds} round(s); widen the search space"
    )]
    Exhausted { rounds: u32, nonces_tried: u64 },
}

/// Multi-threaded search for a genesis `(time, nonce)`
pub struct GenesisMiner {
    config: SearchConfig,
}

impl GenesisMiner {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Searches for a `(time, nonce)` pair making `template`'s hash meet
    /// `target`.
    ///
    /// Worker `i` of round `r` scans the timestamp
    /// `template.time + r * num_workers + i`. The first reported solution
    /// wins; remaining workers are stopped cooperatively and joined before
    /// returning. Exhausting every round returns [`MinerError::Exhausted`],
    /// never hangs.
    pub fn search(&self, template: &Header, target: U256) -> Result<Solution, MinerError> {
        let base_time = template.time;

        for round in 0..self.config.max_rounds {
            let stop = Arc::new(AtomicBool::new(false));
            let (result_tx, result_rx) = mpsc::channel();
            let mut handles = Vec::new();

            for worker_id in 0..self.config.num_workers {
                let offset = round * self.config.num_workers as u32 + worker_id as u32;
                let assignment = SearchAssignment::new(
                    template,
                    base_time.wrapping_add(offset),
                    target,
                    self.config.max_nonce,
                );
                let worker =
                    SolveWorker::new(worker_id, assignment, result_tx.clone(), Arc::clone(&stop));
                handles.push(thread::spawn(move || worker.run()));
            }

            // With our sender dropped, recv unblocks either on the first
            // solution or when the last worker exits empty-handed.
            drop(result_tx);
            let won = result_rx.recv().ok();

            stop.store(true, Ordering::Relaxed);
            for handle in handles {
                if handle.join().is_err() {
                    log::error!("search worker panicked");
                }
            }

            if let Some(solution) = won {
                log::info!(
                    "genesis solved: time {} nonce {} hash {} ({:.2} kH/s on worker {})",
                    solution.time,
                    solution.nonce,
                    solution.hash,
                    solution.hash_rate() / 1000.0,
                    solution.worker_id
                );
                return Ok(solution);
            }

            log::info!(
                "round {} exhausted ({} workers x {} nonces)",
                round + 1,
                self.config.num_workers,
                self.config.max_nonce as u64 + 1
            );
        }

        Err(MinerError::Exhausted {
            rounds: self.config.max_rounds,
            nonces_tried: self.config.max_rounds as u64
                * self.config.num_workers as u64
                * (self.config.max_nonce as u64 + 1),
        })
    }
}
