//! telemetry/mod.rs
//! Run statistics: counters, timers, and immutable snapshots.
//!
//! Notes:
//! - Counters are instance-scoped and threaded through each run.
//! - Snapshots are what statistics printing consumes.

pub mod counters;
pub mod timers;
pub mod snapshot;

pub use counters::*;
pub use timers::*;
pub use snapshot::*;
