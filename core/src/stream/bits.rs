// ## 📂 File: `src/stream/bits.rs`
//! stream/bits.rs
//!
//! Bit-level channel carrying the `(code, symbol)` pair stream.
//!
//! Design notes:
//! - Values of 1..=16 bits are packed least-significant bit first within each byte, in the
//!   order they are written. Host byte order plays no part.
//! - Writes go through a fixed block; a full block is flushed before more bits are added.
//!   `flush` emits the partial trailing byte with its unused high bits zeroed.
//! - Reads refill a fixed block from the source. A short fill bounds the readable bits;
//!   reading past the final bound is an `UnexpectedEof` I/O error.
//! - Every operation is width-checked, so a dictionary bug surfaces as `StreamError::BitWidth`
//!   instead of silently corrupting the stream.

use std::io::{self, Read, Write};

use crate::compression::constants::{MAX_CODE_BITS, STOP_CODE, SYMBOL_BITS};
use crate::constants::{BLOCK, BYTE};
use crate::stream::bytes::{read_bytes, write_bytes};
use crate::types::{StreamError, StreamResult};

const BYTE_BITS: usize = BYTE as usize;

/// Destination of encoded pairs.
pub trait PairSink {
    /// Emit `code` at `width` bits followed by `symbol` at 8 bits.
    fn write_pair(&mut self, code: u16, symbol: u8, width: u8) -> StreamResult<()>;
}

/// Source of encoded pairs.
pub trait PairSource {
    /// Read one pair whose code is `width` bits wide.
    /// Returns `None` once `STOP_CODE` is read.
    fn read_pair(&mut self, width: u8) -> StreamResult<Option<(u16, u8)>>;
}

#[inline]
fn check_width(value: u16, width: u8) -> StreamResult<()> {
    if width == 0 || width > MAX_CODE_BITS {
        return Err(StreamError::BitWidth { width, value });
    }
    if width < MAX_CODE_BITS && (value >> width) != 0 {
        return Err(StreamError::BitWidth { width, value });
    }
    Ok(())
}

#[derive(Debug)]
pub struct BitWriter<W: Write> {
    inner: W,
    block: Vec<u8>,
    bit_index: usize,
    bits: u64,
}

impl<W: Write> BitWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: W, block_size: usize) -> Self {
        Self { inner, block: vec![0u8; block_size.max(1)], bit_index: 0, bits: 0 }
    }

    /// Append the low `width` bits of `value`.
    pub fn write_bits(&mut self, value: u16, width: u8) -> StreamResult<()> {
        check_width(value, width)?;

        let mut value = value as u32;
        let mut remaining = width as usize;
        while remaining > 0 {
            if self.bit_index == self.block.len() * BYTE_BITS {
                self.flush_block()?;
            }
            let byte = self.bit_index / BYTE_BITS;
            let offset = self.bit_index % BYTE_BITS;
            let take = remaining.min(BYTE_BITS - offset);
            let mask = (1u32 << take) - 1;

            self.block[byte] |= ((value & mask) << offset) as u8;

            value >>= take;
            remaining -= take;
            self.bit_index += take;
        }
        Ok(())
    }

    /// Emit any buffered bits (partial trailing byte zero-padded) and flush the sink.
    pub fn flush(&mut self) -> StreamResult<()> {
        self.flush_block()?;
        self.inner.flush()?;
        Ok(())
    }

    /// Total bits handed to the sink so far (whole bytes, padding included).
    pub fn bits_written(&self) -> u64 {
        self.bits
    }

    /// Bits buffered but not yet flushed.
    pub fn pending_bits(&self) -> usize {
        self.bit_index
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn flush_block(&mut self) -> io::Result<()> {
        if self.bit_index == 0 {
            return Ok(());
        }
        let n = self.bit_index.div_ceil(BYTE_BITS);
        write_bytes(&mut self.inner, &self.block[..n])?;
        self.block[..n].fill(0);
        self.bits += (n * BYTE_BITS) as u64;
        self.bit_index = 0;
        Ok(())
    }
}

impl<W: Write> PairSink for BitWriter<W> {
    fn write_pair(&mut self, code: u16, symbol: u8, width: u8) -> StreamResult<()> {
        self.write_bits(code, width)?;
        self.write_bits(symbol as u16, SYMBOL_BITS)
    }
}

#[derive(Debug)]
pub struct BitReader<R: Read> {
    inner: R,
    block: Vec<u8>,
    bit_index: usize,
    valid_bits: usize,
    bytes: u64,
}

impl<R: Read> BitReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: R, block_size: usize) -> Self {
        Self { inner, block: vec![0u8; block_size.max(1)], bit_index: 0, valid_bits: 0, bytes: 0 }
    }

    /// Consume the next `width` bits.
    pub fn read_bits(&mut self, width: u8) -> StreamResult<u16> {
        check_width(0, width)?;

        let mut value = 0u32;
        let mut filled = 0usize;
        while filled < width as usize {
            if self.bit_index == self.valid_bits {
                self.refill()?;
            }
            let byte = self.bit_index / BYTE_BITS;
            let offset = self.bit_index % BYTE_BITS;
            let take = (width as usize - filled).min(BYTE_BITS - offset);
            let mask = (1u32 << take) - 1;

            value |= ((self.block[byte] as u32 >> offset) & mask) << filled;

            filled += take;
            self.bit_index += take;
        }
        Ok(value as u16)
    }

    /// Total bytes pulled from the source so far.
    pub fn bytes_read(&self) -> u64 {
        self.bytes
    }

    pub fn into_inner(self) -> R {
        self.inner
    }

    fn refill(&mut self) -> StreamResult<()> {
        let n = read_bytes(&mut self.inner, &mut self.block)?;
        self.bytes += n as u64;
        self.bit_index = 0;
        self.valid_bits = n * BYTE_BITS;
        if n == 0 {
            return Err(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "pair stream ended before STOP_CODE",
            )
            .into());
        }
        Ok(())
    }
}

impl<R: Read> PairSource for BitReader<R> {
    fn read_pair(&mut self, width: u8) -> StreamResult<Option<(u16, u8)>> {
        let code = self.read_bits(width)?;
        if code == STOP_CODE {
            return Ok(None);
        }
        let symbol = self.read_bits(SYMBOL_BITS)? as u8;
        Ok(Some((code, symbol)))
    }
}
