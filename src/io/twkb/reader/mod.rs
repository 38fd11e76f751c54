mod cursor;
mod geometry;

use crate::datatypes::GeometryType;
use crate::error::{GeoWireError, Result};
use crate::geometry::AnyGeometry;
use crate::io::decode_failure;
use crate::io::twkb::common::{unscale_ordinate, TwkbBoundingBox, TwkbHeader};
use crate::trait_::GeometryRecord;

use cursor::TwkbCursor;

/// A TWKB encoded geometry.
///
/// Construction reads the header bytes, the optional size and the optional bounding box. The
/// body is decoded by each accessor call, always from its first coordinate, because every
/// coordinate is a delta from the one before it.
#[derive(Debug, Clone, Copy)]
pub struct TwkbRecord<'a> {
    buf: &'a [u8],
    offset: usize,
    header: TwkbHeader,
    size: Option<usize>,
    bbox: Option<TwkbBoundingBox>,
    /// Offset just past the size varint, where the size counts from.
    content_offset: usize,
    body_offset: usize,
}

impl<'a> TwkbRecord<'a> {
    pub fn try_new(buf: &'a [u8]) -> Result<Self> {
        Self::try_new_at(buf, 0)
    }

    /// Read the header of the geometry starting `offset` bytes into `buf`.
    pub fn try_new_at(buf: &'a [u8], offset: usize) -> Result<Self> {
        if offset >= buf.len() {
            return Err(GeoWireError::InvalidArgument(format!(
                "start offset {offset} is out of range for a buffer of {} bytes",
                buf.len()
            )));
        }
        let record = Self::read_header(buf, offset).map_err(|err| decode_failure("TWKB", err))?;
        log::trace!(
            "TWKB record {} (precision {}) at offset {offset}",
            record.header.geometry_type(),
            record.header.precision
        );
        Ok(record)
    }

    fn read_header(buf: &'a [u8], offset: usize) -> Result<Self> {
        let mut cursor = TwkbCursor::new(buf, offset, [0; 4]);
        let type_byte = cursor.read_u8()?;
        let metadata = cursor.read_u8()?;
        let header = TwkbHeader::decode(type_byte, metadata, || cursor.read_u8())?;

        let mut record = Self {
            buf,
            offset,
            header,
            size: None,
            bbox: None,
            content_offset: cursor.position(),
            body_offset: cursor.position(),
        };
        // Nothing follows the header of an empty geometry.
        if header.is_empty {
            return Ok(record);
        }

        if header.has_size {
            let size = usize::try_from(cursor.read_uvarint()?)?;
            if size > cursor.remaining() {
                return Err(GeoWireError::Malformed(format!(
                    "TWKB size {size} exceeds the {} remaining bytes",
                    cursor.remaining()
                )));
            }
            record.size = Some(size);
            record.content_offset = cursor.position();
        }

        if header.has_bbox {
            let precisions = header.axis_precisions();
            let mut mins = [0.; 4];
            let mut maxs = [0.; 4];
            for i in 0..header.dimension.size() {
                let min = cursor.read_varint()?;
                let max = min
                    .checked_add(cursor.read_varint()?)
                    .ok_or(GeoWireError::Overflow)?;
                mins[i] = unscale_ordinate(min, precisions[i]);
                maxs[i] = unscale_ordinate(max, precisions[i]);
            }
            record.bbox = Some(TwkbBoundingBox::from_axes(header.dimension, mins, maxs));
        }

        record.body_offset = cursor.position();
        Ok(record)
    }

    /// The decimal precision of the X and Y ordinates.
    pub fn precision(&self) -> i8 {
        self.header.precision
    }

    /// The bounding box, when the encoder included one.
    pub fn bbox(&self) -> Option<TwkbBoundingBox> {
        self.bbox
    }

    /// The byte count following the size field, when the encoder included one.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// The ID list of a multi-geometry, when the encoder included one.
    pub fn ids(&self) -> Result<Option<Vec<i64>>> {
        if !self.header.has_ids || self.header.is_empty || !self.header.kind.is_multi() {
            return Ok(None);
        }
        let mut cursor = self.body();
        geometry::read_id_list(&mut cursor, self.header.dimension, self.header.kind)
            .map(Some)
            .map_err(|err| decode_failure("TWKB", err))
    }

    /// The number of bytes this geometry occupies, including its header.
    ///
    /// With a size field this is computed without decoding the body.
    pub fn byte_len(&self) -> Result<usize> {
        if self.header.is_empty {
            return Ok(self.body_offset - self.offset);
        }
        if let Some(size) = self.size {
            return Ok(self.content_offset + size - self.offset);
        }
        let mut cursor = self.body();
        self.read_body(&mut cursor)?;
        Ok(cursor.position() - self.offset)
    }

    fn body(&self) -> TwkbCursor<'a> {
        TwkbCursor::new(self.buf, self.body_offset, self.header.axis_precisions())
    }

    fn read_body(&self, cursor: &mut TwkbCursor) -> Result<AnyGeometry> {
        geometry::read_any_geometry(
            cursor,
            self.header.kind,
            self.header.dimension,
            self.header.has_ids,
        )
        .map_err(|err| decode_failure("TWKB", err))
    }
}

impl<'a> GeometryRecord for TwkbRecord<'a> {
    fn geometry_type(&self) -> GeometryType {
        self.header.geometry_type()
    }

    fn is_null(&self) -> bool {
        self.header.is_empty
    }

    fn get_geometry(&self) -> Result<AnyGeometry> {
        if self.header.is_empty {
            return Ok(AnyGeometry::empty(self.geometry_type()));
        }
        self.read_body(&mut self.body())
    }
}
