mod body;

use std::io::Write;

use byteorder::WriteBytesExt;
use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::io::twkb::common::{TwkbHeader, EXTENDED_PRECISION_RANGE, PRECISION_RANGE};
use crate::io::twkb::varint::{uvarint_len, write_uvarint, write_varint};
use crate::trait_::GeometryWriter;

use body::BodyEncoder;

/// Options for writing TWKB.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TwkbWriteOptions {
    /// Decimal places kept for X and Y, in -8..=7. Negative values round to tens, hundreds, ...
    pub precision: i8,

    /// Decimal places kept for Z, in -4..=3.
    pub z_precision: i8,

    /// Decimal places kept for M, in -4..=3.
    pub m_precision: i8,

    /// Prefix each geometry with its bounding box.
    pub include_bbox: bool,

    /// Prefix each geometry with its byte size, so readers can skip it without decoding.
    pub include_size: bool,

    /// IDs to write with each multi-geometry. The length must match the element count.
    /// Single geometries ignore this.
    pub ids: Option<Vec<i64>>,
}

impl TwkbWriteOptions {
    pub fn with_precision(self, precision: i8) -> Self {
        Self { precision, ..self }
    }

    pub fn validate(&self) -> Result<()> {
        if !PRECISION_RANGE.contains(&self.precision) {
            return Err(GeoWireError::InvalidArgument(format!(
                "TWKB precision {} is outside {PRECISION_RANGE:?}",
                self.precision
            )));
        }
        for (axis, precision) in [("Z", self.z_precision), ("M", self.m_precision)] {
            if !EXTENDED_PRECISION_RANGE.contains(&precision) {
                return Err(GeoWireError::InvalidArgument(format!(
                    "TWKB {axis} precision {precision} is outside {EXTENDED_PRECISION_RANGE:?}"
                )));
            }
        }
        Ok(())
    }

    /// The ID list for a multi-geometry of `count` elements.
    fn ids_for(&self, count: usize) -> Result<Option<&[i64]>> {
        match &self.ids {
            Some(ids) if ids.len() != count => Err(GeoWireError::InvalidArgument(format!(
                "{} IDs given for a multi-geometry of {count} elements",
                ids.len()
            ))),
            Some(ids) => Ok(Some(ids)),
            None => Ok(None),
        }
    }
}

/// Frame one geometry: header bytes, optional size and bounding box, then the body produced by
/// `encode`.
fn write_framed<W: Write>(
    writer: &mut W,
    options: &TwkbWriteOptions,
    geometry_type: GeometryType,
    is_empty: bool,
    has_ids: bool,
    encode: impl FnOnce(&mut BodyEncoder) -> Result<()>,
) -> Result<()> {
    let mut header = TwkbHeader {
        kind: geometry_type.kind(),
        dimension: geometry_type.dimension(),
        precision: options.precision,
        z_precision: options.z_precision,
        m_precision: options.m_precision,
        has_bbox: false,
        has_size: false,
        has_ids: false,
        is_empty,
    };

    if is_empty {
        writer.write_u8(header.type_byte())?;
        writer.write_u8(header.metadata_byte())?;
        if let Some(byte) = header.extended_dimensions_byte() {
            writer.write_u8(byte)?;
        }
        return Ok(());
    }

    let mut encoder = BodyEncoder::new(header.axis_precisions());
    encode(&mut encoder)?;

    // A geometry made only of empty parts has no extent to write.
    let mut bbox = vec![];
    if let Some((mins, maxs)) = encoder.extent().filter(|_| options.include_bbox) {
        for i in 0..header.dimension.size() {
            write_varint(&mut bbox, mins[i])?;
            write_varint(
                &mut bbox,
                maxs[i].checked_sub(mins[i]).ok_or(GeoWireError::Overflow)?,
            )?;
        }
        header.has_bbox = true;
    }
    header.has_size = options.include_size;
    header.has_ids = has_ids;
    let body = encoder.into_inner();
    let size = u64::try_from(bbox.len() + body.len())?;
    let size_len = if header.has_size {
        uvarint_len(size)
    } else {
        0
    };

    let mut frame = Vec::with_capacity(3 + size_len + bbox.len() + body.len());
    frame.push(header.type_byte());
    frame.push(header.metadata_byte());
    if let Some(byte) = header.extended_dimensions_byte() {
        frame.push(byte);
    }
    if header.has_size {
        write_uvarint(&mut frame, size)?;
    }
    frame.extend_from_slice(&bbox);
    frame.extend_from_slice(&body);
    writer.write_all(&frame)?;
    Ok(())
}

/// Writes TWKB to an underlying [`Write`].
///
/// Every call appends one complete geometry. The coordinate delta chain starts from zero for
/// each geometry and runs across all of its rings and elements.
#[derive(Debug)]
pub struct TwkbWriter<W: Write> {
    writer: W,
    options: TwkbWriteOptions,
}

impl<W: Write> TwkbWriter<W> {
    /// A writer at precision 0 with no optional metadata.
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            options: Default::default(),
        }
    }

    /// Fails with [`GeoWireError::InvalidArgument`] when a precision is out of range.
    pub fn try_new(writer: W, options: TwkbWriteOptions) -> Result<Self> {
        options.validate()?;
        log::trace!("TWKB writer with {options:?}");
        Ok(Self { writer, options })
    }

    pub fn options(&self) -> &TwkbWriteOptions {
        &self.options
    }

    /// Replace the IDs written with the next multi-geometries.
    pub fn set_ids(&mut self, ids: Option<Vec<i64>>) {
        self.options.ids = ids;
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn write_single<C: CoordTrait>(
        &mut self,
        kind: GeometryKind,
        is_empty: bool,
        encode: impl FnOnce(&mut BodyEncoder) -> Result<()>,
    ) -> Result<()> {
        write_framed(
            &mut self.writer,
            &self.options,
            GeometryType::new(kind, C::DIMENSION),
            is_empty,
            false,
            encode,
        )
    }
}

impl<W: Write> GeometryWriter for TwkbWriter<W> {
    fn write_point<C: CoordTrait>(&mut self, geom: &Point<C>) -> Result<()> {
        self.write_single::<C>(GeometryKind::Point, geom.is_empty(), |encoder| {
            encoder.write_point(geom)
        })
    }

    fn write_line_string<C: CoordTrait>(&mut self, geom: &LineString<C>) -> Result<()> {
        self.write_single::<C>(GeometryKind::LineString, geom.is_empty(), |encoder| {
            encoder.write_line_string(geom)
        })
    }

    fn write_polygon<C: CoordTrait>(&mut self, geom: &Polygon<C>) -> Result<()> {
        self.write_single::<C>(GeometryKind::Polygon, geom.is_empty(), |encoder| {
            encoder.write_polygon(geom)
        })
    }

    fn write_multi_point<C: CoordTrait>(&mut self, geom: &MultiPoint<C>) -> Result<()> {
        let ids = self.options.ids_for(geom.num_points())?;
        write_framed(
            &mut self.writer,
            &self.options,
            GeometryType::new(GeometryKind::MultiPoint, C::DIMENSION),
            geom.is_empty(),
            ids.is_some(),
            |encoder| encoder.write_multi_point(geom, ids),
        )
    }

    fn write_multi_line_string<C: CoordTrait>(
        &mut self,
        geom: &MultiLineString<C>,
    ) -> Result<()> {
        let ids = self.options.ids_for(geom.num_line_strings())?;
        write_framed(
            &mut self.writer,
            &self.options,
            GeometryType::new(GeometryKind::MultiLineString, C::DIMENSION),
            geom.is_empty(),
            ids.is_some(),
            |encoder| encoder.write_multi_line_string(geom, ids),
        )
    }

    fn write_multi_polygon<C: CoordTrait>(&mut self, geom: &MultiPolygon<C>) -> Result<()> {
        let ids = self.options.ids_for(geom.num_polygons())?;
        write_framed(
            &mut self.writer,
            &self.options,
            GeometryType::new(GeometryKind::MultiPolygon, C::DIMENSION),
            geom.is_empty(),
            ids.is_some(),
            |encoder| encoder.write_multi_polygon(geom, ids),
        )
    }
}
