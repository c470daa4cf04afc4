// compression/decode.rs
//! compression/decode.rs
//! LZ78 decoder: `(code, symbol)` pairs in, raw bytes out.
use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::compression::protocol::CodeCounter;
use crate::compression::types::Lz78Config;
use crate::compression::word::WordTable;
use crate::stream::{BitReader, PairSource, SymbolWriter};
use crate::telemetry::TelemetryCounters;
use crate::types::StreamResult;

/// Summary: Decompress a bit-packed pair stream from `input` into `output` until
/// `STOP_CODE` is read.
/// - `input` must be positioned just past the container header.
/// - Bytes read and bits written are added to `counters`.
pub fn decode<R: Read, W: Write>(
    input: R,
    output: W,
    config: &Lz78Config,
    counters: &mut TelemetryCounters,
) -> StreamResult<()> {
    config.validate()?;
    let mut reader = BitReader::with_block_size(input, config.block_size);

    let bits = decode_pairs(&mut reader, output, config)?;

    counters.add_symbols(reader.bytes_read());
    counters.add_bits(bits);
    debug!(bytes = reader.bytes_read(), bits, "decode finished");
    Ok(())
}

/// Rebuild the dictionary from `source` and write every decoded word to `output`.
///
/// Returns the number of bits written. `output` is flushed before returning.
pub fn decode_pairs<S: PairSource + ?Sized, W: Write>(
    source: &mut S,
    output: W,
    config: &Lz78Config,
) -> StreamResult<u64> {
    config.validate()?;
    let mut writer = SymbolWriter::with_block_size(output, config.block_size);
    let mut table = WordTable::new(config.max_code);
    let mut codes = CodeCounter::new(config.max_code);

    while let Some((code, sym)) = source.read_pair(codes.width())? {
        let word = table.extend(code, sym);
        writer.write_word(word.as_bytes())?;
        table.insert(codes.next(), word);
        if codes.advance() {
            trace!(epoch = codes.epoch(), "dictionary reset");
            table.reset();
        }
    }

    writer.flush()?;
    Ok(writer.bits_written())
}
