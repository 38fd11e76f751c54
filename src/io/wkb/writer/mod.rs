mod geometry;
mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

use std::io::Write;

use byteorder::{BigEndian, LittleEndian, WriteBytesExt};
use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::io::wkb::common::{Endianness, WkbByteOrder, WkbTypeCode};
use crate::trait_::GeometryWriter;

pub use geometry::geometry_wkb_size;
pub use linestring::line_string_wkb_size;
pub use multilinestring::multi_line_string_wkb_size;
pub use multipoint::multi_point_wkb_size;
pub use multipolygon::multi_polygon_wkb_size;
pub use point::point_wkb_size;
pub use polygon::polygon_wkb_size;

use linestring::write_line_string;
use multilinestring::write_multi_line_string;
use multipoint::write_multi_point;
use multipolygon::write_multi_polygon;
use point::write_point;
use polygon::write_polygon;

/// Options for writing WKB.
///
/// Setting an SRID produces EWKB: the outermost type code gets the `0x20000000` flag and the
/// SRID follows it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WkbWriteOptions {
    /// Byte order of every header, count and coordinate written.
    pub byte_order: Endianness,

    /// SRID to embed; `None` writes plain ISO WKB.
    pub srid: Option<i32>,
}

impl WkbWriteOptions {
    /// Little-endian EWKB with the given SRID.
    pub fn ewkb(srid: i32) -> Self {
        Self {
            srid: Some(srid),
            ..Default::default()
        }
    }

    pub fn with_byte_order(self, byte_order: Endianness) -> Self {
        Self { byte_order, ..self }
    }
}

fn write_header<B: WkbByteOrder, W: Write>(
    writer: &mut W,
    geometry_type: GeometryType,
    srid: Option<i32>,
) -> Result<()> {
    writer.write_u8(B::ENDIANNESS.into())?;
    let code = WkbTypeCode {
        geometry_type,
        has_srid: srid.is_some(),
    };
    writer.write_u32::<B>(code.encode())?;
    if let Some(srid) = srid {
        writer.write_i32::<B>(srid)?;
    }
    Ok(())
}

fn write_count<B: WkbByteOrder, W: Write>(writer: &mut W, count: usize) -> Result<()> {
    writer.write_u32::<B>(u32::try_from(count)?)?;
    Ok(())
}

fn write_coord<B: WkbByteOrder, W: Write, C: CoordTrait>(writer: &mut W, coord: &C) -> Result<()> {
    for ordinate in coord.ordinates() {
        writer.write_f64::<B>(ordinate)?;
    }
    Ok(())
}

fn write_coords<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    coords: &[C],
) -> Result<()> {
    write_count::<B, _>(writer, coords.len())?;
    for coord in coords {
        write_coord::<B, _, _>(writer, coord)?;
    }
    Ok(())
}

/// Writes WKB, or EWKB when an SRID is configured, to an underlying [`Write`].
///
/// Every call appends one complete, self-describing geometry.
#[derive(Debug)]
pub struct WkbWriter<W: Write> {
    writer: W,
    options: WkbWriteOptions,
}

impl<W: Write> WkbWriter<W> {
    /// A little-endian ISO WKB writer.
    pub fn new(writer: W) -> Self {
        Self::with_options(writer, Default::default())
    }

    pub fn with_options(writer: W, options: WkbWriteOptions) -> Self {
        log::trace!("WKB writer with {options:?}");
        Self { writer, options }
    }

    pub fn options(&self) -> &WkbWriteOptions {
        &self.options
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

macro_rules! dispatch_byte_order {
    ($self:ident, $func:ident, $geom:expr) => {
        match $self.options.byte_order {
            Endianness::LittleEndian => {
                $func::<LittleEndian, _, _>(&mut $self.writer, $geom, $self.options.srid)
            }
            Endianness::BigEndian => {
                $func::<BigEndian, _, _>(&mut $self.writer, $geom, $self.options.srid)
            }
        }
    };
}

impl<W: Write> GeometryWriter for WkbWriter<W> {
    fn write_point<C: CoordTrait>(&mut self, geom: &Point<C>) -> Result<()> {
        dispatch_byte_order!(self, write_point, geom)
    }

    fn write_line_string<C: CoordTrait>(&mut self, geom: &LineString<C>) -> Result<()> {
        dispatch_byte_order!(self, write_line_string, geom)
    }

    fn write_polygon<C: CoordTrait>(&mut self, geom: &Polygon<C>) -> Result<()> {
        dispatch_byte_order!(self, write_polygon, geom)
    }

    fn write_multi_point<C: CoordTrait>(&mut self, geom: &MultiPoint<C>) -> Result<()> {
        dispatch_byte_order!(self, write_multi_point, geom)
    }

    fn write_multi_line_string<C: CoordTrait>(
        &mut self,
        geom: &MultiLineString<C>,
    ) -> Result<()> {
        dispatch_byte_order!(self, write_multi_line_string, geom)
    }

    fn write_multi_polygon<C: CoordTrait>(&mut self, geom: &MultiPolygon<C>) -> Result<()> {
        dispatch_byte_order!(self, write_multi_polygon, geom)
    }
}
