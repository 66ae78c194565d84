//! Search assignments and results.
//!
//! Each worker owns a private header copy pinned to one timestamp; the only
//! thing that ever crosses a thread boundary is a finished [`Solution`].

use consensus_core::block::Header;
use consensus_core::Hash;
use primitive_types::U256;
use serde::{Deserialize, Serialize};

/// One worker's share of the search: a header fixed to an assigned
/// timestamp, scanned over `0..=max_nonce`.
#[derive(Clone, Debug)]
pub struct SearchAssignment {
    pub header: Header,
    /// Numeric target the header hash must not exceed
    pub target: U256,
    /// Highest nonce to try before giving up on this timestamp
    pub max_nonce: u32,
}

impl SearchAssignment {
    /// Pins a copy of `template` to `time`, starting from nonce 0
    pub fn new(template: &Header, time: u32, target: U256, max_nonce: u32) -> Self {
        let mut header = *template;
        header.time = time;
        header.nonce = 0;
        Self { header, target, max_nonce }
    }
}

/// A `(time, nonce)` pair whose header hash meets the target
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Solution {
    pub time: u32,
    pub nonce: u32,
    pub hash: Hash,
    /// Worker that found it (ties broken by first to report)
    pub worker_id: usize,
    /// Hashes computed by the winning worker
    pub iterations: u64,
    pub time_ms: u64,
}

impl Solution {
    /// The winning worker's hash rate in hashes per second
    pub fn hash_rate(&self) -> f64 {
        if self.time_ms == 0 {
            return 0.0;
        }
        (self.iterations as f64) / (self.time_ms as f64 / 1000.0)
    }
}
