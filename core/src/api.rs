// ## `api.rs`: stable public API

//! Header + body orchestration for whole-stream compression and decompression.
//!
//! These are the entry points a front end calls. They own the per-run counters and timer
//! and return an immutable `TelemetrySnapshot` for statistics reporting.

use std::io::{Read, Write};

use tracing::debug;

use crate::compression::{decode, encode, Lz78Config};
use crate::headers::{read_header, write_header, FileHeader};
use crate::telemetry::{Direction, Stage, TelemetryCounters, TelemetrySnapshot, TelemetryTimer};
use crate::types::StreamResult;

/// 🔒 Compress `input` into a complete container on `output`.
///
/// `protection` is stored in the header verbatim (the caller copies it from the input's
/// mode bits).
pub fn compress<R: Read, W: Write>(
    mut input: R,
    mut output: W,
    protection: u16,
    config: &Lz78Config,
) -> StreamResult<TelemetrySnapshot> {
    config.validate()?;
    let mut counters = TelemetryCounters::new();
    let mut timer = TelemetryTimer::new();

    let header = FileHeader::new(protection);
    timer.time(Stage::Header, || write_header(&mut output, &header, &mut counters))?;
    timer.time(Stage::Encode, || encode(&mut input, &mut output, config, &mut counters))?;
    timer.finish();

    let snapshot = TelemetrySnapshot::from(Direction::Compress, &counters, &timer);
    debug!(
        compressed = snapshot.compressed_bytes,
        uncompressed = snapshot.uncompressed_bytes,
        "compress finished"
    );
    Ok(snapshot)
}

/// 🔓 Validate the header of `input` and decompress its body onto `output`.
///
/// On a bad magic nothing past the header is read and nothing is written.
pub fn decompress<R: Read, W: Write>(
    input: R,
    output: W,
    config: &Lz78Config,
) -> StreamResult<(FileHeader, TelemetrySnapshot)> {
    config.validate()?;
    open_container(input)?.decode_into(output, config)
}

/// Read and validate the container header, leaving `input` at the start of the body.
///
/// A front end can inspect the header and only then create its output.
pub fn open_container<R: Read>(mut input: R) -> StreamResult<Container<R>> {
    let mut counters = TelemetryCounters::new();
    let mut timer = TelemetryTimer::new();
    let header = timer.time(Stage::Header, || read_header(&mut input, &mut counters))?;
    Ok(Container { input, header, counters, timer })
}

/// A container whose header has been accepted and whose body is still unread.
#[derive(Debug)]
pub struct Container<R: Read> {
    input: R,
    header: FileHeader,
    counters: TelemetryCounters,
    timer: TelemetryTimer,
}

impl<R: Read> Container<R> {
    pub fn header(&self) -> &FileHeader {
        &self.header
    }

    /// Decode the body onto `output`.
    pub fn decode_into<W: Write>(
        self,
        mut output: W,
        config: &Lz78Config,
    ) -> StreamResult<(FileHeader, TelemetrySnapshot)> {
        let Container { mut input, header, mut counters, mut timer } = self;

        timer.time(Stage::Decode, || decode(&mut input, &mut output, config, &mut counters))?;
        timer.finish();

        let snapshot = TelemetrySnapshot::from(Direction::Decompress, &counters, &timer);
        debug!(
            compressed = snapshot.compressed_bytes,
            uncompressed = snapshot.uncompressed_bytes,
            "decompress finished"
        );
        Ok((header, snapshot))
    }
}

/// In-memory convenience over `compress`.
pub fn compress_to_vec(data: &[u8], protection: u16, config: &Lz78Config) -> StreamResult<Vec<u8>> {
    let mut out = Vec::new();
    compress(data, &mut out, protection, config)?;
    Ok(out)
}

/// In-memory convenience over `decompress`.
pub fn decompress_to_vec(data: &[u8], config: &Lz78Config) -> StreamResult<(FileHeader, Vec<u8>)> {
    let mut out = Vec::new();
    let (header, _) = decompress(data, &mut out, config)?;
    Ok((header, out))
}
