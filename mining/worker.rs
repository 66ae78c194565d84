//! Worker thread scanning one timestamp's nonce space.
//!
//! Workers share nothing mutable: each owns its assignment outright and only
//! ever announces a finished solution over its channel. The stop flag is the
//! one signal flowing the other way.

use crate::job::{SearchAssignment, Solution};
use consensus_pow::hash_to_u256;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::Sender;
use std::sync::Arc;
use std::time::Instant;

/// How many hashes between checks of the stop flag
const STOP_CHECK_STRIDE: u64 = 4096;

/// A search worker bound to one assignment
#[derive(Debug)]
pub struct SolveWorker {
    /// Unique identifier for this worker
    pub id: usize,
    assignment: SearchAssignment,
    result_tx: Sender<Solution>,
    stop: Arc<AtomicBool>,
}

impl SolveWorker {
    pub fn new(
        id: usize,
        assignment: SearchAssignment,
        result_tx: Sender<Solution>,
        stop: Arc<AtomicBool>,
    ) -> Self {
        Self { id, assignment, result_tx, stop }
    }

    /// Runs the scan to completion (blocking, meant for its own thread).
    ///
    /// Ends on the first satisfying nonce, on nonce exhaustion, or when the
    /// stop flag is raised. Exhaustion ends the worker silently; the
    /// coordinator accounts for workers that never report.
    pub fn run(self) {
        let start = Instant::now();
        let mut header = self.assignment.header;
        let target = self.assignment.target;
        let mut iterations: u64 = 0;

        log::debug!("worker {} scanning time {}", self.id, header.time);

        loop {
            if iterations % STOP_CHECK_STRIDE == 0 && self.stop.load(Ordering::Relaxed) {
                log::debug!("worker {} stopped at nonce {}", self.id, header.nonce);
                return;
            }

            let hash = header.hash();
            iterations += 1;

            if hash_to_u256(&hash) <= target {
                let time_ms = start.elapsed().as_millis() as u64;
                log::info!(
                    "worker {} solved time {} nonce {} after {} hashes in {}ms",
                    self.id,
                    header.time,
                    header.nonce,
                    iterations,
                    time_ms
                );

                // A losing tie just leaves an extra message for the
                // coordinator to drop; a closed channel means the race is
                // already over.
                let _ = self.result_tx.send(Solution {
                    time: header.time,
                    nonce: header.nonce,
                    hash,
                    worker_id: self.id,
                    iterations,
                    time_ms,
                });
                return;
            }

            if header.nonce == self.assignment.max_nonce {
                log::debug!(
                    "worker {} exhausted nonces for time {} ({} hashes)",
                    self.id,
                    header.time,
                    iterations
                );
                return;
            }
            header.nonce += 1;
        }
    }
}
