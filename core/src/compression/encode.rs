// compression/encode.rs
//! compression/encode.rs
//! LZ78 encoder: raw symbols in, `(code, symbol)` pairs out.
use std::io::{Read, Write};

use tracing::{debug, trace};

use crate::compression::constants::STOP_CODE;
use crate::compression::protocol::{code_bit_width, CodeCounter};
use crate::compression::trie::Trie;
use crate::compression::types::Lz78Config;
use crate::stream::{BitWriter, PairSink, SymbolReader};
use crate::telemetry::TelemetryCounters;
use crate::types::StreamResult;

/// Summary: Compress everything readable from `input` into a bit-packed pair stream on
/// `output`, terminated by `(STOP_CODE, 0)` and flushed.
/// - The container header is not written here (see `headers::write_header`).
/// - Bytes read and bits written are added to `counters`.
pub fn encode<R: Read, W: Write>(
    input: R,
    output: W,
    config: &Lz78Config,
    counters: &mut TelemetryCounters,
) -> StreamResult<()> {
    config.validate()?;
    let mut writer = BitWriter::with_block_size(output, config.block_size);

    let symbols = encode_pairs(input, &mut writer, config)?;
    writer.flush()?;

    counters.add_symbols(symbols);
    counters.add_bits(writer.bits_written());
    debug!(symbols, bits = writer.bits_written(), "encode finished");
    Ok(())
}

/// Run the LZ78 dictionary over `input`, handing every pair to `sink`.
///
/// Returns the number of input bytes consumed. The sink is not flushed.
pub fn encode_pairs<R: Read, S: PairSink + ?Sized>(
    input: R,
    sink: &mut S,
    config: &Lz78Config,
) -> StreamResult<u64> {
    config.validate()?;
    let mut reader = SymbolReader::with_block_size(input, config.block_size);
    let mut trie = Trie::new();
    let mut codes = CodeCounter::new(config.max_code);

    let root = trie.root();
    let mut current = root;
    let mut parent = root;
    let mut last_sym = 0u8;

    while let Some(sym) = reader.read_sym()? {
        match trie.step(current, sym) {
            Some(next) => {
                parent = current;
                current = next;
            }
            None => {
                sink.write_pair(trie.code(current), sym, codes.width())?;
                trie.insert(current, sym, codes.next());
                current = root;
                if codes.advance() {
                    trace!(epoch = codes.epoch(), "dictionary reset");
                    trie.reset();
                }
            }
        }
        last_sym = sym;
    }

    // Input ended inside a known sequence: spell it out as (its prefix, its last symbol).
    let mut stop_width = codes.width();
    if current != root {
        sink.write_pair(trie.code(parent), last_sym, codes.width())?;
        // No reset here: the counter wraps, so a pair that took the last code leaves a
        // 1-bit terminator. The decoder still reads STOP_CODE since the pad symbol is zero.
        stop_width = code_bit_width(codes.wrapped_next());
    }
    sink.write_pair(STOP_CODE, 0, stop_width)?;

    Ok(reader.symbols_read())
}
