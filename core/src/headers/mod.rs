//! headers/mod.rs
//! Public module export for the container header.
//!
//! Notes:
//! - Fixed-size header (6 bytes) enables deterministic IO: the pair stream always starts
//!   at the same offset.
//! - Little-endian across all multi-byte integers, independent of the host.

pub mod types;
pub mod encode;
pub mod decode;

pub use types::*;
pub use encode::*;
pub use decode::*;
