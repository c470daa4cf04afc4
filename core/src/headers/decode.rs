// ## 📂 File: `src/headers/decode.rs`
//! src/headers/decode.rs
//!
//! Header decoding utilities.
//!
//! Design notes:
//! - Deserializes a fixed 6-byte buffer into a `FileHeader`.
//! - Field order must match `encode.rs` exactly.
//! - Magic is validated before the header is returned; a caller never sees an
//!   unvalidated header.

use std::io::Read;

use byteorder::ByteOrder;
use tracing::{debug, warn};

use crate::headers::types::{DiskOrder, FileHeader, HeaderError, HEADER_LEN};
use crate::stream::read_bytes;
use crate::telemetry::TelemetryCounters;
use crate::types::StreamError;

/// Deserialize a header with an explicit byte order and validate its magic.
#[inline]
pub fn decode_header_as<B: ByteOrder>(buf: &[u8]) -> Result<FileHeader, HeaderError> {
    if buf.len() < HEADER_LEN {
        return Err(HeaderError::BufferTooShort { have: buf.len(), need: HEADER_LEN });
    }

    let h = FileHeader {
        magic: B::read_u32(&buf[0..4]),      // 0..4 magic number
        protection: B::read_u16(&buf[4..6]), // 4..6 protection bits
    };

    h.validate()?;
    Ok(h)
}

/// Deserialize an on-disk (little-endian) header and validate its magic.
#[inline]
pub fn decode_header(buf: &[u8]) -> Result<FileHeader, HeaderError> {
    decode_header_as::<DiskOrder>(buf)
}

/// Read and validate the container header.
///
/// Exactly `HEADER_LEN` bytes are consumed from `r`, so on a bad magic the body is
/// left untouched.
pub fn read_header<R: Read>(
    r: &mut R,
    counters: &mut TelemetryCounters,
) -> Result<FileHeader, StreamError> {
    let mut buf = [0u8; HEADER_LEN];
    let n = read_bytes(r, &mut buf)?;
    counters.add_header_read(n);

    let header = decode_header(&buf[..n]).map_err(|e| {
        warn!(error = %e, "rejecting container header");
        e
    })?;
    debug!(magic = header.magic, protection = header.protection, "header read");
    Ok(header)
}
