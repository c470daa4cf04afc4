// ## 📂 File: `src/stream/bytes.rs`
//! stream/bytes.rs
//!
//! Raw byte channel: the encoder's input symbols and the decoder's output words.
//!
//! Design notes:
//! - `read_bytes` keeps calling `read` until the buffer is full, the source reports
//!   exhaustion (`Ok(0)`), or a real error occurs. `Interrupted` is retried.
//! - `write_bytes` keeps calling `write` until every byte is accepted.
//! - Both block buffers are owned by their channel; nothing here is process-wide.

use std::io::{self, Read, Write};

use crate::constants::{BLOCK, BYTE};

/// Fill `buf` from `r`, looping over short reads.
///
/// Returns the number of bytes read; less than `buf.len()` only at end of input.
pub fn read_bytes<R: Read + ?Sized>(r: &mut R, buf: &mut [u8]) -> io::Result<usize> {
    let mut total = 0;
    while total < buf.len() {
        match r.read(&mut buf[total..]) {
            Ok(0) => break,
            Ok(n) => total += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(total)
}

/// Write all of `buf` to `w`, looping over short writes.
pub fn write_bytes<W: Write + ?Sized>(w: &mut W, buf: &[u8]) -> io::Result<()> {
    let mut written = 0;
    while written < buf.len() {
        match w.write(&buf[written..]) {
            Ok(0) => {
                return Err(io::Error::new(io::ErrorKind::WriteZero, "sink accepted no bytes"));
            }
            Ok(n) => written += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
    Ok(())
}

/// Block-buffered symbol source for the encoder.
#[derive(Debug)]
pub struct SymbolReader<R: Read> {
    inner: R,
    block: Vec<u8>,
    index: usize,
    len: usize,
    symbols: u64,
}

impl<R: Read> SymbolReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: R, block_size: usize) -> Self {
        Self { inner, block: vec![0u8; block_size.max(1)], index: 0, len: 0, symbols: 0 }
    }

    /// Next input symbol, or `None` once the source is exhausted.
    pub fn read_sym(&mut self) -> io::Result<Option<u8>> {
        if self.index == self.len {
            let n = read_bytes(&mut self.inner, &mut self.block)?;
            self.index = 0;
            self.len = n;
            self.symbols += n as u64;
            if n == 0 {
                return Ok(None);
            }
        }

        let sym = self.block[self.index];
        self.index += 1;
        Ok(Some(sym))
    }

    /// Total bytes pulled from the source so far.
    pub fn symbols_read(&self) -> u64 {
        self.symbols
    }
}

/// Block-buffered word sink for the decoder.
#[derive(Debug)]
pub struct SymbolWriter<W: Write> {
    inner: W,
    block: Vec<u8>,
    index: usize,
    bits: u64,
}

impl<W: Write> SymbolWriter<W> {
    pub fn new(inner: W) -> Self {
        Self::with_block_size(inner, BLOCK)
    }

    pub fn with_block_size(inner: W, block_size: usize) -> Self {
        Self { inner, block: vec![0u8; block_size.max(1)], index: 0, bits: 0 }
    }

    /// Append a decoded word. Words longer than a block are split across flushes.
    pub fn write_word(&mut self, word: &[u8]) -> io::Result<()> {
        let mut rest = word;
        while !rest.is_empty() {
            if self.index == self.block.len() {
                self.flush_block()?;
            }
            let take = rest.len().min(self.block.len() - self.index);
            self.block[self.index..self.index + take].copy_from_slice(&rest[..take]);
            self.index += take;
            rest = &rest[take..];
        }
        Ok(())
    }

    /// Drain the block and flush the underlying writer.
    pub fn flush(&mut self) -> io::Result<()> {
        self.flush_block()?;
        self.inner.flush()
    }

    /// Total bits handed to the sink so far.
    pub fn bits_written(&self) -> u64 {
        self.bits
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    fn flush_block(&mut self) -> io::Result<()> {
        if self.index == 0 {
            return Ok(());
        }
        write_bytes(&mut self.inner, &self.block[..self.index])?;
        self.bits += (self.index as u64) * BYTE as u64;
        self.index = 0;
        Ok(())
    }
}
