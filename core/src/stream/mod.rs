//! stream/mod.rs
//! I/O channels shared by both directions.
//!
//! - `bytes`: raw symbol input / word output with short-read and short-write loops.
//! - `bits`: width-checked bit packing of the pair stream.

pub mod bytes;
pub mod bits;

pub use bytes::*;
pub use bits::*;
