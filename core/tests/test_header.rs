#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use byteorder::{BigEndian, LittleEndian};
    use proptest::prelude::*;

    use lz78_core::{
        constants::{DEFAULT_PROTECTION, MAGIC},
        headers::{
            decode_header, decode_header_as, encode_header, encode_header_as, read_header, write_header,
            FileHeader, HeaderError, HEADER_LEN,
        },
        telemetry::TelemetryCounters,
        types::StreamError,
    };

// ## 1️⃣ Layout

    #[test]
    fn header_is_six_bytes_little_endian() {
        let h = FileHeader::new(0o100644);
        let buf = encode_header(&h);

        assert_eq!(buf.len(), HEADER_LEN);
        assert_eq!(FileHeader::LEN, 6);
        assert_eq!(&buf[0..4], &[0xAC, 0xBA, 0xAD, 0xBA]);
        assert_eq!(&buf[4..6], &(0o100644u16).to_le_bytes());
    }

    #[test]
    fn default_header_carries_magic_and_default_protection() {
        let h = FileHeader::default();
        assert_eq!(h.magic, MAGIC);
        assert_eq!(h.protection, DEFAULT_PROTECTION);
        h.validate().unwrap();
    }

    #[test]
    fn permissions_strip_file_type_bits() {
        let h = FileHeader::new(0o100640);
        assert_eq!(h.permissions(), 0o640);
    }

// ## 2️⃣ Validation

    #[test]
    fn decode_roundtrip() {
        let h = FileHeader::new(0o755);
        let back = decode_header(&encode_header(&h)).unwrap();
        assert_eq!(back, h);
    }

    #[test]
    fn decode_rejects_bad_magic() {
        let mut buf = encode_header(&FileHeader::new(0o644));
        buf[0] ^= 0xFF;

        let err = decode_header(&buf).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidMagic { need: MAGIC, .. }));
    }

    #[test]
    fn decode_rejects_short_buffer() {
        let buf = encode_header(&FileHeader::default());
        let err = decode_header(&buf[..5]).unwrap_err();
        assert!(matches!(err, HeaderError::BufferTooShort { have: 5, need: 6 }));
    }

    #[test]
    fn error_messages_name_the_values() {
        let err = HeaderError::InvalidMagic { have: 0xDEADBEEF, need: MAGIC };
        let msg = err.to_string();
        assert!(msg.contains("0xbaadbaac"), "{msg}");
        assert!(msg.contains("0xdeadbeef"), "{msg}");
    }

// ## 3️⃣ Byte order

    #[test]
    fn opposite_order_sees_swapped_fields() {
        let h = FileHeader::new(0o600);

        // Written as big-endian, the swapped header is byte-identical to the disk form.
        assert_eq!(encode_header_as::<BigEndian>(&h.swapped()), encode_header(&h));

        // A big-endian reader of the disk bytes sees the swapped magic and rejects it.
        let disk = encode_header(&h);
        let err = decode_header_as::<BigEndian>(&disk).unwrap_err();
        assert!(matches!(err, HeaderError::InvalidMagic { have, .. } if have == MAGIC.swap_bytes()));

        // Normalizing by swapping back restores the original.
        let be = encode_header_as::<BigEndian>(&h);
        assert_eq!(decode_header_as::<BigEndian>(&be).unwrap(), h);
        assert_eq!(decode_header_as::<LittleEndian>(&disk).unwrap(), h);
    }

    #[test]
    fn swapped_is_an_involution() {
        let h = FileHeader::new(0x1234);
        assert_eq!(h.swapped().swapped(), h);
        assert_eq!(h.swapped().protection, 0x3412);
    }

// ## 4️⃣ Stream helpers

    #[test]
    fn write_then_read_counts_bytes() {
        let h = FileHeader::new(0o640);
        let mut out = Vec::new();
        let mut enc = TelemetryCounters::new();
        write_header(&mut out, &h, &mut enc).unwrap();
        assert_eq!(out.len(), HEADER_LEN);
        assert_eq!(enc.bits, 48);

        let mut dec = TelemetryCounters::new();
        let back = read_header(&mut Cursor::new(out), &mut dec).unwrap();
        assert_eq!(back, h);
        assert_eq!(dec.symbols, 6);
    }

    #[test]
    fn read_header_stops_at_header_on_bad_magic() {
        let mut data = vec![0x00, 0x11, 0x22, 0x33, 0x44, 0x55];
        data.extend_from_slice(&[0xAA; 64]);
        let mut cursor = Cursor::new(data);

        let err = read_header(&mut cursor, &mut TelemetryCounters::new()).unwrap_err();
        assert!(err.is_invalid_magic());
        assert_eq!(cursor.position(), HEADER_LEN as u64);
    }

    #[test]
    fn read_header_reports_truncated_input() {
        let mut cursor = Cursor::new(vec![0xAC, 0xBA]);
        let err = read_header(&mut cursor, &mut TelemetryCounters::new()).unwrap_err();
        assert!(matches!(err, StreamError::Header(HeaderError::BufferTooShort { have: 2, .. })));
        assert!(!err.is_invalid_magic());
    }

    proptest! {
        #[test]
        fn prop_any_protection_roundtrips(protection in any::<u16>()) {
            let h = FileHeader::new(protection);
            prop_assert_eq!(decode_header(&encode_header(&h)).unwrap(), h);
        }

        #[test]
        fn prop_foreign_magic_is_rejected(magic in any::<u32>(), protection in any::<u16>()) {
            prop_assume!(magic != MAGIC);
            let h = FileHeader { magic, protection };
            let is_invalid_magic = matches!(
                decode_header(&encode_header(&h)),
                Err(HeaderError::InvalidMagic { .. })
            );
            prop_assert!(is_invalid_magic);
        }
    }
}
