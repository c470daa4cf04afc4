// ### `src/telemetry/counters.rs`

//! telemetry/counters.rs
//! Mutable counters used during one encode or decode run.
//!
//! Summary: `symbols` counts bytes pulled from the input side, `bits` counts bits pushed to
//! the output side. Converted into an immutable `TelemetrySnapshot` at the end of the run.
//!
//! The counters are owned by the caller and threaded through the run, so two runs in one
//! process never share them.
use std::ops::AddAssign;

use serde::{Deserialize, Serialize};

use crate::constants::BYTE;

/// Deterministic counters collected during stream processing
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryCounters {
    /// Bytes read from the input (raw symbols when encoding, container bytes when decoding).
    pub symbols: u64,
    /// Bits written to the output (container bits when encoding, raw bits when decoding).
    pub bits: u64,
}

impl TelemetryCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn symbols(&self) -> u64 {
        self.symbols
    }

    pub fn bits(&self) -> u64 {
        self.bits
    }

    /// Whole bytes written so far.
    pub fn bytes_written(&self) -> u64 {
        self.bits / BYTE as u64
    }

    /// Record a header written in front of the pair stream.
    pub fn add_header_written(&mut self, header_len: usize) {
        self.bits += (header_len as u64) * BYTE as u64;
    }

    /// Record a header consumed from the container.
    pub fn add_header_read(&mut self, header_len: usize) {
        self.symbols += header_len as u64;
    }

    pub fn add_symbols(&mut self, n: u64) {
        self.symbols += n;
    }

    pub fn add_bits(&mut self, n: u64) {
        self.bits += n;
    }

    // Runs are independent; merging lets a caller aggregate several of them.
    pub fn merge(&mut self, other: &TelemetryCounters) {
        self.symbols += other.symbols;
        self.bits += other.bits;
    }
}

impl AddAssign for TelemetryCounters {
    fn add_assign(&mut self, rhs: Self) {
        self.symbols += rhs.symbols;
        self.bits    += rhs.bits;
    }
}
