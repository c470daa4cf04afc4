use anyhow::Context;
use lz78_core::api::{compress, open_container};
use lz78_core::compression::Lz78Config;
use lz78_core::telemetry::TelemetrySnapshot;
use lz78_core::types::StreamError;
use tracing::info;

use crate::args::CodecArgs;
use crate::io::{open_input, open_output, InputSource, OutputSink};

/// Exit status for a rejected magic number.
pub const EXIT_BAD_MAGIC: u8 = 1;
/// Exit status for every other failure.
pub const EXIT_FAILURE: u8 = 2;

/// Compress `args.input` into `args.output`.
pub fn run_encode(args: &CodecArgs) -> anyhow::Result<TelemetrySnapshot> {
    let input = open_input(&InputSource::from_arg(args.input.as_deref()))?;
    let mut output = open_output(&OutputSink::from_arg(args.output.as_deref()))?;

    let snapshot = compress(input.reader, &mut output, input.protection, &Lz78Config::default())
        .context("compression failed")?;
    info!(
        compressed = snapshot.compressed_bytes,
        uncompressed = snapshot.uncompressed_bytes,
        "encoded"
    );
    Ok(snapshot)
}

/// Decompress `args.input` into `args.output` and apply the stored permission bits.
///
/// The output is created only after the header is accepted, so a bad magic leaves an
/// existing output file untouched.
pub fn run_decode(args: &CodecArgs) -> anyhow::Result<TelemetrySnapshot> {
    let input = open_input(&InputSource::from_arg(args.input.as_deref()))?;
    let container = open_container(input.reader).context("decompression failed")?;
    let mut output = open_output(&OutputSink::from_arg(args.output.as_deref()))?;

    let (header, snapshot) = container
        .decode_into(&mut output, &Lz78Config::default())
        .context("decompression failed")?;
    output.apply_permissions(header.permissions());
    info!(
        compressed = snapshot.compressed_bytes,
        uncompressed = snapshot.uncompressed_bytes,
        "decoded"
    );
    Ok(snapshot)
}

/// Map a failure to the process exit status.
pub fn exit_code(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<StreamError>() {
        Some(e) if e.is_invalid_magic() => EXIT_BAD_MAGIC,
        _ => EXIT_FAILURE,
    }
}
