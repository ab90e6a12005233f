use super::*;

#[test]
fn small_values_take_one_byte() {
    assert_eq!(encode_varint(0), vec![0x00]);
    assert_eq!(encode_varint(1), vec![0x01]);
    assert_eq!(encode_varint(127), vec![0x7F]);
}

#[test]
fn continuation_bit_splits_groups() {
    assert_eq!(encode_varint(128), vec![0x80, 0x01]);
    assert_eq!(encode_varint(300), vec![0xAC, 0x02]);
    assert_eq!(encode_varint(16_384), vec![0x80, 0x80, 0x01]);
}

#[test]
fn length_matches_encoding() {
    for value in [0, 1, 127, 128, 16_383, 16_384, u32::MAX as u64, u64::MAX] {
        assert_eq!(varint_len(value), encode_varint(value).len(), "{value}");
    }
    assert_eq!(varint_len(u64::MAX), 10);
}

#[test]
fn writer_and_reader_agree() {
    let mut buf = Vec::new();
    for value in [0, 300, 1 << 35, u64::MAX] {
        write_varint(&mut buf, value).unwrap();
    }

    let mut cursor = buf.as_slice();
    assert_eq!(read_varint(&mut cursor).unwrap(), 0);
    assert_eq!(read_varint(&mut cursor).unwrap(), 300);
    assert_eq!(read_varint(&mut cursor).unwrap(), 1 << 35);
    assert_eq!(read_varint(&mut cursor).unwrap(), u64::MAX);
    assert!(cursor.is_empty());
}

#[test]
fn decode_reports_consumed_bytes() {
    let (value, used) = decode_varint(&[0xAC, 0x02, 0xFF]).unwrap();
    assert_eq!(value, 300);
    assert_eq!(used, 2);
}

#[test]
fn eof_inside_varint_is_truncation() {
    let err = read_varint(&mut [0x80u8, 0x80].as_slice()).unwrap_err();
    assert!(matches!(
        err,
        FormatError::Truncated {
            expected: 3,
            actual: 2
        }
    ));

    let err = read_varint(&mut [].as_slice()).unwrap_err();
    assert!(matches!(err, FormatError::Truncated { actual: 0, .. }));
}

#[test]
fn overlong_encoding_is_rejected() {
    let eleven = [0x80u8; 11];
    let err = read_varint(&mut eleven.as_slice()).unwrap_err();
    assert!(matches!(err, FormatError::VarintOverflow));

    // Ten bytes whose last group would set bit 65.
    let mut too_big = vec![0xFFu8; 9];
    too_big.push(0x02);
    let err = read_varint(&mut too_big.as_slice()).unwrap_err();
    assert!(matches!(err, FormatError::VarintOverflow));
}
