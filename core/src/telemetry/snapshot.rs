// ## src/telemetry/snapshot.rs

//! telemetry/snapshot.rs
//!
//! Immutable summary of one run, consumed by statistics reporting.
//!
//! Design notes:
//! - Counters are direction-agnostic (`symbols` in, `bits` out); the snapshot maps them onto
//!   compressed / uncompressed sizes according to the direction of the run.
//! - Serializable so a front end can emit it as JSON.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::telemetry::counters::TelemetryCounters;
use crate::telemetry::timers::{StageTimes, TelemetryTimer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Compress,
    Decompress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TelemetrySnapshot {
    pub direction: Direction,
    pub compressed_bytes: u64,
    pub uncompressed_bytes: u64,
    pub elapsed: Duration,
    pub stage_times: StageTimes,
}

impl TelemetrySnapshot {
    pub fn from(direction: Direction, counters: &TelemetryCounters, timer: &TelemetryTimer) -> Self {
        let (compressed_bytes, uncompressed_bytes) = match direction {
            Direction::Compress => (counters.bytes_written(), counters.symbols),
            Direction::Decompress => (counters.symbols, counters.bytes_written()),
        };

        Self {
            direction,
            compressed_bytes,
            uncompressed_bytes,
            elapsed: timer.elapsed(),
            stage_times: timer.stage_times.clone(),
        }
    }

    /// Space saved by compression, in percent: `100 * (1 - compressed / uncompressed)`.
    /// Negative when the container is larger than its content; zero for empty content.
    pub fn space_saving(&self) -> f64 {
        if self.uncompressed_bytes == 0 {
            return 0.0;
        }
        100.0 * (1.0 - self.compressed_bytes as f64 / self.uncompressed_bytes as f64)
    }
}
