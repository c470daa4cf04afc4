#[cfg(test)]
mod tests {
    use std::io::{self, Cursor, Read, Write};

    use proptest::prelude::*;

    use lz78_core::{
        compression::STOP_CODE,
        stream::{read_bytes, write_bytes, BitReader, BitWriter, PairSink, PairSource, SymbolReader, SymbolWriter},
        types::StreamError,
    };

    /// Hands out one byte per call and interrupts every other call.
    struct Trickle {
        data: Vec<u8>,
        pos: usize,
        interrupt: bool,
    }

    impl Trickle {
        fn new(data: &[u8]) -> Self {
            Self { data: data.to_vec(), pos: 0, interrupt: true }
        }
    }

    impl Read for Trickle {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            self.interrupt = !self.interrupt;
            if self.interrupt {
                return Err(io::Error::new(io::ErrorKind::Interrupted, "signal"));
            }
            if self.pos == self.data.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.data[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    /// Accepts at most two bytes per write.
    struct Narrow(Vec<u8>);

    impl Write for Narrow {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            let n = buf.len().min(2);
            self.0.extend_from_slice(&buf[..n]);
            Ok(n)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    struct Full;

    impl Write for Full {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Ok(0)
        }
        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    fn packed(values: &[(u16, u8)], block_size: usize) -> Vec<u8> {
        let mut w = BitWriter::with_block_size(Vec::new(), block_size);
        for &(v, width) in values {
            w.write_bits(v, width).unwrap();
        }
        w.flush().unwrap();
        w.into_inner()
    }

// ## 1️⃣ Packing layout

    #[test]
    fn bits_fill_each_byte_from_the_low_end() {
        assert_eq!(packed(&[(0b1, 1), (0b10, 2), (0b11111, 5)], 16), vec![0xFD]);
    }

    #[test]
    fn values_straddle_byte_boundaries() {
        assert_eq!(packed(&[(0x1FF, 9)], 16), vec![0xFF, 0x01]);
        assert_eq!(packed(&[(0xABCD, 16)], 16), vec![0xCD, 0xAB]);
        assert_eq!(packed(&[(0b1, 1), (0xFFFF, 16)], 16), vec![0xFF, 0xFF, 0x01]);
    }

    #[test]
    fn flush_zero_pads_the_trailing_byte() {
        let mut w = BitWriter::new(Vec::new());
        w.write_bits(0b101, 3).unwrap();
        assert_eq!(w.pending_bits(), 3);
        assert_eq!(w.bits_written(), 0);

        w.flush().unwrap();
        assert_eq!(w.pending_bits(), 0);
        assert_eq!(w.bits_written(), 8);
        assert_eq!(w.into_inner(), vec![0x05]);
    }

    #[test]
    fn flush_without_bits_writes_nothing() {
        let mut w = BitWriter::new(Vec::new());
        w.flush().unwrap();
        assert!(w.into_inner().is_empty());
    }

    #[test]
    fn block_size_does_not_change_the_stream() {
        let values: Vec<(u16, u8)> = (0..500u16).map(|i| (i % 97, 7 + (i % 9) as u8)).collect();
        let reference = packed(&values, 4096);
        for block_size in [1, 2, 3, 7, 64] {
            assert_eq!(packed(&values, block_size), reference, "block_size {block_size}");
        }
    }

// ## 2️⃣ Width checks

    #[test]
    fn rejects_zero_and_oversized_widths() {
        let mut w = BitWriter::new(Vec::new());
        assert!(matches!(w.write_bits(0, 0), Err(StreamError::BitWidth { width: 0, .. })));
        assert!(matches!(w.write_bits(0, 17), Err(StreamError::BitWidth { width: 17, .. })));

        let mut r = BitReader::new(Cursor::new(vec![0xFF; 4]));
        assert!(matches!(r.read_bits(0), Err(StreamError::BitWidth { width: 0, .. })));
        assert!(matches!(r.read_bits(17), Err(StreamError::BitWidth { width: 17, .. })));
    }

    #[test]
    fn rejects_values_wider_than_width() {
        let mut w = BitWriter::new(Vec::new());
        assert!(matches!(w.write_bits(4, 2), Err(StreamError::BitWidth { width: 2, value: 4 })));
        w.write_bits(3, 2).unwrap();
        w.write_bits(u16::MAX, 16).unwrap();
    }

// ## 3️⃣ Reading

    #[test]
    fn reader_mirrors_writer() {
        let bytes = packed(&[(0b1, 1), (0x1FF, 9), (0xABCD, 16), (5, 3)], 4096);
        let mut r = BitReader::with_block_size(Cursor::new(bytes), 2);
        assert_eq!(r.read_bits(1).unwrap(), 0b1);
        assert_eq!(r.read_bits(9).unwrap(), 0x1FF);
        assert_eq!(r.read_bits(16).unwrap(), 0xABCD);
        assert_eq!(r.read_bits(3).unwrap(), 5);
        assert_eq!(r.bytes_read(), 4);
    }

    #[test]
    fn reading_past_the_end_is_unexpected_eof() {
        let mut r = BitReader::new(Cursor::new(vec![0xAB]));
        assert_eq!(r.read_bits(8).unwrap(), 0xAB);
        match r.read_bits(1) {
            Err(StreamError::Io(e)) => assert_eq!(e.kind(), io::ErrorKind::UnexpectedEof),
            other => panic!("expected UnexpectedEof, got {other:?}"),
        }
    }

    #[test]
    fn reader_survives_short_and_interrupted_reads() {
        let bytes = packed(&[(0x1234, 13), (0x7F, 7), (1, 1)], 4096);
        let mut r = BitReader::with_block_size(Trickle::new(&bytes), 8);
        assert_eq!(r.read_bits(13).unwrap(), 0x1234);
        assert_eq!(r.read_bits(7).unwrap(), 0x7F);
        assert_eq!(r.read_bits(1).unwrap(), 1);
    }

// ## 4️⃣ Pairs

    #[test]
    fn pairs_are_code_then_symbol() {
        let mut w = BitWriter::new(Vec::new());
        w.write_pair(2, b'A', 2).unwrap();
        w.flush().unwrap();
        // code 0b10 then 0x41 shifted up by two bits
        assert_eq!(w.into_inner(), vec![0x06, 0x01]);
    }

    #[test]
    fn stop_code_ends_pairs_without_reading_the_pad() {
        let mut w = BitWriter::new(Vec::new());
        w.write_pair(3, b'x', 3).unwrap();
        w.write_pair(STOP_CODE, 0, 3).unwrap();
        w.flush().unwrap();
        let bytes = w.into_inner();
        assert_eq!(bytes.len(), 3); // 11 + 11 bits

        let mut r = BitReader::new(Cursor::new(bytes));
        assert_eq!(r.read_pair(3).unwrap(), Some((3, b'x')));
        assert_eq!(r.read_pair(3).unwrap(), None);
        // The pad symbol is still there to read.
        assert_eq!(r.read_bits(8).unwrap(), 0);
    }

// ## 5️⃣ Raw byte channel

    #[test]
    fn read_bytes_loops_until_full_or_exhausted() {
        let mut src = Trickle::new(b"hello");
        let mut buf = [0u8; 3];
        assert_eq!(read_bytes(&mut src, &mut buf).unwrap(), 3);
        assert_eq!(&buf, b"hel");

        let mut rest = [0u8; 8];
        assert_eq!(read_bytes(&mut src, &mut rest).unwrap(), 2);
        assert_eq!(&rest[..2], b"lo");
    }

    #[test]
    fn write_bytes_loops_over_short_writes() {
        let mut sink = Narrow(Vec::new());
        write_bytes(&mut sink, b"abcdefg").unwrap();
        assert_eq!(sink.0, b"abcdefg");
    }

    #[test]
    fn write_bytes_fails_on_a_stuck_sink() {
        let err = write_bytes(&mut Full, b"x").unwrap_err();
        assert_eq!(err.kind(), io::ErrorKind::WriteZero);
    }

    #[test]
    fn symbol_reader_yields_every_byte_then_none() {
        let mut r = SymbolReader::with_block_size(Trickle::new(b"abcde"), 2);
        let mut seen = Vec::new();
        while let Some(b) = r.read_sym().unwrap() {
            seen.push(b);
        }
        assert_eq!(seen, b"abcde");
        assert_eq!(r.symbols_read(), 5);
        assert_eq!(r.read_sym().unwrap(), None);
    }

    #[test]
    fn symbol_writer_splits_words_longer_than_a_block() {
        let mut w = SymbolWriter::with_block_size(Vec::new(), 3);
        w.write_word(b"ab").unwrap();
        w.write_word(b"cdefghij").unwrap();
        w.write_word(b"").unwrap();
        w.flush().unwrap();
        assert_eq!(w.bits_written(), 80);
        assert_eq!(w.into_inner(), b"abcdefghij");
    }

    proptest! {
        #[test]
        fn prop_bits_read_back_in_order(
            values in prop::collection::vec((any::<u16>(), 1u8..=16), 0..200),
            block_size in 1usize..32,
        ) {
            let masked: Vec<(u16, u8)> = values
                .iter()
                .map(|&(v, w)| (if w == 16 { v } else { v & ((1u16 << w) - 1) }, w))
                .collect();
            let total_bits: usize = masked.iter().map(|&(_, w)| w as usize).sum();

            let bytes = packed(&masked, block_size);
            prop_assert_eq!(bytes.len(), total_bits.div_ceil(8));

            let mut r = BitReader::with_block_size(Cursor::new(bytes), block_size);
            for &(v, w) in &masked {
                prop_assert_eq!(r.read_bits(w).unwrap(), v);
            }
        }
    }
}
