use std::io::Write;

use byteorder::WriteBytesExt;

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::Point;
use crate::io::wkb::common::WkbByteOrder;
use crate::io::wkb::writer::{write_coord, write_header};

/// The byte length of a WKBPoint, excluding any SRID
pub fn point_wkb_size<C: CoordTrait>(_geom: &Point<C>) -> usize {
    let header = 1 + 4;
    let coords = C::DIMENSION.size() * 8;
    header + coords
}

/// Write a Point geometry encoded as WKB. The empty point is written as all-NaN ordinates.
pub(super) fn write_point<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    geom: &Point<C>,
    srid: Option<i32>,
) -> Result<()> {
    write_header::<B, _>(
        writer,
        GeometryType::new(GeometryKind::Point, C::DIMENSION),
        srid,
    )?;

    match geom.coord() {
        Some(coord) => write_coord::<B, _, _>(writer, &coord)?,
        None => {
            for _ in 0..C::DIMENSION.size() {
                writer.write_f64::<B>(f64::NAN)?;
            }
        }
    }

    Ok(())
}
