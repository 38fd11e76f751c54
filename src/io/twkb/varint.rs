//! Unsigned LEB128 varints and the zigzag mapping for signed values.

use std::io::Write;

use byteorder::WriteBytesExt;

use crate::error::{GeoWireError, Result};

/// The longest encoding of a `u64`.
const MAX_VARINT_LEN: usize = 10;

pub(crate) fn zigzag_encode(value: i64) -> u64 {
    ((value << 1) ^ (value >> 63)) as u64
}

pub(crate) fn zigzag_decode(value: u64) -> i64 {
    ((value >> 1) as i64) ^ -((value & 1) as i64)
}

/// Read an unsigned varint from `buf` starting at `*pos`, advancing `*pos` past it.
pub(crate) fn read_uvarint(buf: &[u8], pos: &mut usize) -> Result<u64> {
    let mut value = 0_u64;
    for i in 0..MAX_VARINT_LEN {
        let byte = *buf.get(*pos).ok_or_else(|| {
            GeoWireError::Malformed(format!("truncated varint at offset {}", *pos))
        })?;
        *pos += 1;

        let payload = u64::from(byte & 0x7f);
        let shift = 7 * i as u32;
        // The tenth byte may only carry the single remaining bit.
        if i == MAX_VARINT_LEN - 1 && payload > 1 {
            return Err(GeoWireError::Malformed(format!(
                "varint overflows 64 bits at offset {}",
                *pos - 1
            )));
        }
        value |= payload << shift;

        if byte & 0x80 == 0 {
            return Ok(value);
        }
    }
    Err(GeoWireError::Malformed(format!(
        "varint longer than {MAX_VARINT_LEN} bytes at offset {}",
        *pos
    )))
}

pub(crate) fn read_varint(buf: &[u8], pos: &mut usize) -> Result<i64> {
    read_uvarint(buf, pos).map(zigzag_decode)
}

pub(crate) fn write_uvarint<W: Write>(writer: &mut W, mut value: u64) -> Result<()> {
    while value >= 0x80 {
        writer.write_u8((value as u8 & 0x7f) | 0x80)?;
        value >>= 7;
    }
    writer.write_u8(value as u8)?;
    Ok(())
}

pub(crate) fn write_varint<W: Write>(writer: &mut W, value: i64) -> Result<()> {
    write_uvarint(writer, zigzag_encode(value))
}

/// The encoded length of an unsigned varint.
pub(crate) fn uvarint_len(value: u64) -> usize {
    let bits = 64 - value.leading_zeros() as usize;
    bits.div_ceil(7).max(1)
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn zigzag() {
        let pairs = [(0, 0), (-1, 1), (1, 2), (-2, 3), (2, 4), (30, 60), (-150, 299)];
        for (signed, unsigned) in pairs {
            assert_eq!(zigzag_encode(signed), unsigned);
            assert_eq!(zigzag_decode(unsigned), signed);
        }
        assert_eq!(zigzag_encode(i64::MAX), u64::MAX - 1);
        assert_eq!(zigzag_encode(i64::MIN), u64::MAX);
        assert_eq!(zigzag_decode(u64::MAX), i64::MIN);
    }

    #[test]
    fn known_encodings() {
        for (value, bytes) in [
            (0_u64, vec![0x00]),
            (1, vec![0x01]),
            (127, vec![0x7f]),
            (128, vec![0x80, 0x01]),
            (300, vec![0xac, 0x02]),
            (602, vec![0xda, 0x04]),
        ] {
            let mut buf = vec![];
            write_uvarint(&mut buf, value).unwrap();
            assert_eq!(buf, bytes);
            assert_eq!(uvarint_len(value), bytes.len());

            let mut pos = 0;
            assert_eq!(read_uvarint(&buf, &mut pos).unwrap(), value);
            assert_eq!(pos, bytes.len());
        }
    }

    #[test]
    fn extremes() {
        for value in [u64::MAX, u64::MAX >> 1, 1 << 63] {
            let mut buf = vec![];
            write_uvarint(&mut buf, value).unwrap();
            assert_eq!(buf.len(), uvarint_len(value));
            let mut pos = 0;
            assert_eq!(read_uvarint(&buf, &mut pos).unwrap(), value);
        }
        let mut buf = vec![];
        write_varint(&mut buf, i64::MIN).unwrap();
        let mut pos = 0;
        assert_eq!(read_varint(&buf, &mut pos).unwrap(), i64::MIN);
    }

    #[test]
    fn truncated() {
        let mut pos = 0;
        assert!(matches!(
            read_uvarint(&[0x80, 0x80], &mut pos),
            Err(GeoWireError::Malformed(_))
        ));
        let mut pos = 0;
        assert!(read_uvarint(&[], &mut pos).is_err());
    }

    #[test]
    fn overflow() {
        let mut pos = 0;
        assert!(read_uvarint(&[0xff; 10], &mut pos).is_err());
        let mut pos = 0;
        let mut too_wide = [0xff; 10];
        too_wide[9] = 0x02;
        assert!(read_uvarint(&too_wide, &mut pos).is_err());
        let mut pos = 0;
        assert!(read_uvarint(&[0x80; 11], &mut pos).is_err());
    }
}
