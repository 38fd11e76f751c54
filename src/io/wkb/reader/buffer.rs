use std::io::Cursor;

use byteorder::{BigEndian, LittleEndian, ReadBytesExt};

use crate::datatypes::GeometryType;
use crate::error::{GeoWireError, Result};
use crate::io::wkb::common::{Endianness, WkbTypeCode};

/// The header of one WKB or EWKB geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WkbHeader {
    pub(crate) byte_order: Endianness,
    pub(crate) geometry_type: GeometryType,
    pub(crate) srid: Option<i32>,
}

/// A forward-only cursor over a WKB buffer.
///
/// The byte order is taken from the most recently read byte order flag, so nested geometries
/// may each use their own.
pub(crate) struct WkbBuffer<'a> {
    reader: Cursor<&'a [u8]>,
    byte_order: Endianness,
}

impl<'a> WkbBuffer<'a> {
    pub(crate) fn new(buf: &'a [u8], offset: usize, byte_order: Endianness) -> Self {
        let mut reader = Cursor::new(buf);
        reader.set_position(offset as u64);
        Self { reader, byte_order }
    }

    pub(crate) fn position(&self) -> usize {
        self.reader.position() as usize
    }

    pub(crate) fn remaining(&self) -> usize {
        self.reader.get_ref().len().saturating_sub(self.position())
    }

    fn truncated(&self, need: usize) -> GeoWireError {
        GeoWireError::Malformed(format!(
            "WKB buffer too small at offset {}: need {need} bytes, {} remaining",
            self.position(),
            self.remaining()
        ))
    }

    pub(crate) fn read_byte_order(&mut self) -> Result<Endianness> {
        if self.remaining() < 1 {
            return Err(self.truncated(1));
        }
        self.byte_order = Endianness::try_from(self.reader.read_u8()?)?;
        Ok(self.byte_order)
    }

    pub(crate) fn read_u32(&mut self) -> Result<u32> {
        if self.remaining() < 4 {
            return Err(self.truncated(4));
        }
        let value = match self.byte_order {
            Endianness::BigEndian => self.reader.read_u32::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_u32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_i32(&mut self) -> Result<i32> {
        if self.remaining() < 4 {
            return Err(self.truncated(4));
        }
        let value = match self.byte_order {
            Endianness::BigEndian => self.reader.read_i32::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_i32::<LittleEndian>()?,
        };
        Ok(value)
    }

    pub(crate) fn read_f64(&mut self) -> Result<f64> {
        if self.remaining() < 8 {
            return Err(self.truncated(8));
        }
        let value = match self.byte_order {
            Endianness::BigEndian => self.reader.read_f64::<BigEndian>()?,
            Endianness::LittleEndian => self.reader.read_f64::<LittleEndian>()?,
        };
        Ok(value)
    }

    /// Read an element count and check that `count` elements of at least `min_element_size`
    /// bytes each can still fit in the buffer.
    pub(crate) fn read_count(&mut self, min_element_size: usize) -> Result<usize> {
        let count = usize::try_from(self.read_u32()?)?;
        let needed = count
            .checked_mul(min_element_size)
            .ok_or(GeoWireError::Overflow)?;
        if needed > self.remaining() {
            return Err(GeoWireError::Malformed(format!(
                "WKB count {count} at offset {} needs at least {needed} bytes, {} remaining",
                self.position() - 4,
                self.remaining()
            )));
        }
        Ok(count)
    }

    /// Read a byte order flag, a type code and, for EWKB, the SRID.
    pub(crate) fn read_header(&mut self) -> Result<WkbHeader> {
        let byte_order = self.read_byte_order()?;
        let code = WkbTypeCode::decode(self.read_u32()?)?;
        let srid = if code.has_srid {
            Some(self.read_i32()?)
        } else {
            None
        };
        Ok(WkbHeader {
            byte_order,
            geometry_type: code.geometry_type,
            srid,
        })
    }
}
