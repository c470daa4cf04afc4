//! lz78-core
//!
//! LZ78 compression engine over a small binary container:
//! `[magic u32][protection u16][bit-packed (code, symbol) pairs ... (STOP_CODE, 0)]`.
//! No CLI, no file handling.

#![forbid(unsafe_code)]

// Shared and top level
pub mod constants;
pub mod types;

pub mod headers;
pub mod stream;
pub mod compression;
pub mod telemetry;

// Entry points
pub mod api;

// -----------------------------------------------------------------------------
// Prelude (Rust users)
// -----------------------------------------------------------------------------
pub mod prelude {
    pub use crate::api::{compress, compress_to_vec, decompress, decompress_to_vec, open_container};
    pub use crate::compression::Lz78Config;
    pub use crate::headers::FileHeader;
    pub use crate::telemetry::{TelemetryCounters, TelemetrySnapshot};
    pub use crate::types::{StreamError, StreamResult};
}
