mod buffer;
mod geometry;
mod linestring;
mod multi;
mod point;
mod polygon;

use crate::coord::{Xy, Xym, Xyz, Xyzm};
use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};
use crate::geometry::AnyGeometry;
use crate::io::decode_failure;
use crate::io::wkb::common::Endianness;
use crate::trait_::GeometryRecord;

use buffer::{WkbBuffer, WkbHeader};

/// A WKB or EWKB encoded geometry.
///
/// Only the header is parsed on construction. Every accessor decodes the body from the start.
/// Byte order is read from the buffer, so concatenated geometries of mixed byte order can be
/// decoded one after another with [`WkbRecord::try_new_at`] and [`WkbRecord::byte_len`].
#[derive(Debug, Clone, Copy)]
pub struct WkbRecord<'a> {
    buf: &'a [u8],
    offset: usize,
    header: WkbHeader,
    body_offset: usize,
    is_null: bool,
}

impl<'a> WkbRecord<'a> {
    /// Parse the header of the geometry at the start of `buf`.
    pub fn try_new(buf: &'a [u8]) -> Result<Self> {
        Self::try_new_at(buf, 0)
    }

    /// Parse the header of the geometry starting `offset` bytes into `buf`.
    pub fn try_new_at(buf: &'a [u8], offset: usize) -> Result<Self> {
        if offset >= buf.len() {
            return Err(GeoWireError::InvalidArgument(format!(
                "start offset {offset} is out of range for a buffer of {} bytes",
                buf.len()
            )));
        }

        let mut reader = WkbBuffer::new(buf, offset, Endianness::LittleEndian);
        let header = reader
            .read_header()
            .map_err(|err| decode_failure("WKB", err))?;
        let body_offset = reader.position();
        let is_null = peek_is_null(&mut reader, header.geometry_type)
            .map_err(|err| decode_failure("WKB", err))?;

        log::trace!(
            "WKB record {} (srid {:?}, {:?}) at offset {offset}",
            header.geometry_type,
            header.srid,
            header.byte_order
        );

        Ok(Self {
            buf,
            offset,
            header,
            body_offset,
            is_null,
        })
    }

    /// The byte order of the outermost geometry.
    pub fn byte_order(&self) -> Endianness {
        self.header.byte_order
    }

    /// Whether this is EWKB carrying an SRID.
    pub fn is_extended(&self) -> bool {
        self.header.srid.is_some()
    }

    /// The number of bytes this geometry occupies, including its header.
    ///
    /// This decodes the whole geometry.
    pub fn byte_len(&self) -> Result<usize> {
        let mut reader = self.body();
        geometry::read_any_geometry(&mut reader, self.header.geometry_type)
            .map_err(|err| decode_failure("WKB", err))?;
        Ok(reader.position() - self.offset)
    }

    fn body(&self) -> WkbBuffer<'a> {
        WkbBuffer::new(self.buf, self.body_offset, self.header.byte_order)
    }
}

/// Points are empty when every ordinate is NaN, everything else when its first count is zero.
fn peek_is_null(reader: &mut WkbBuffer, geometry_type: GeometryType) -> Result<bool> {
    if geometry_type.kind() != GeometryKind::Point {
        return Ok(reader.read_u32()? == 0);
    }
    let is_null = match geometry_type.dimension() {
        Dimension::XY => point::read_point::<Xy>(reader)?.is_empty(),
        Dimension::XYZ => point::read_point::<Xyz>(reader)?.is_empty(),
        Dimension::XYM => point::read_point::<Xym>(reader)?.is_empty(),
        Dimension::XYZM => point::read_point::<Xyzm>(reader)?.is_empty(),
    };
    Ok(is_null)
}

impl<'a> GeometryRecord for WkbRecord<'a> {
    fn geometry_type(&self) -> GeometryType {
        self.header.geometry_type
    }

    fn srid(&self) -> Option<i32> {
        self.header.srid
    }

    fn is_null(&self) -> bool {
        self.is_null
    }

    fn get_geometry(&self) -> Result<AnyGeometry> {
        geometry::read_any_geometry(&mut self.body(), self.header.geometry_type)
            .map_err(|err| decode_failure("WKB", err))
    }
}
