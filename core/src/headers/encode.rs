// ## 📂 File: `src/headers/encode.rs`
//! src/headers/encode.rs
//!
//! Header encoding utilities.
//!
//! Design notes:
//! - Serializes `FileHeader` into a fixed 6-byte buffer.
//! - `encode_header_as` is generic over the byte order so the swap behaviour is testable on
//!   any host; `encode_header` always uses the on-disk order.

use std::io::Write;

use byteorder::ByteOrder;
use tracing::debug;

use crate::headers::types::{DiskOrder, FileHeader, HEADER_LEN};
use crate::telemetry::TelemetryCounters;
use crate::types::StreamError;

/// Serialize a `FileHeader` with an explicit byte order.
#[inline]
pub fn encode_header_as<B: ByteOrder>(h: &FileHeader) -> [u8; HEADER_LEN] {
    let mut out = [0u8; HEADER_LEN];
    B::write_u32(&mut out[0..4], h.magic);      // 0..4 magic number
    B::write_u16(&mut out[4..6], h.protection); // 4..6 protection bits
    out
}

/// Serialize a `FileHeader` in on-disk (little-endian) order.
#[inline]
pub fn encode_header(h: &FileHeader) -> [u8; HEADER_LEN] {
    encode_header_as::<DiskOrder>(h)
}

/// Write the header in front of the pair stream.
///
/// The header's bits are added to `counters` so the compressed size reported by
/// statistics includes it.
pub fn write_header<W: Write>(
    w: &mut W,
    h: &FileHeader,
    counters: &mut TelemetryCounters,
) -> Result<(), StreamError> {
    let buf = encode_header(h);
    w.write_all(&buf)?;
    counters.add_header_written(HEADER_LEN);
    debug!(magic = h.magic, protection = h.protection, "header written");
    Ok(())
}
