use std::io::Write;

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::MultiPolygon;
use crate::io::wkb::common::WkbByteOrder;
use crate::io::wkb::writer::polygon::{polygon_wkb_size, write_polygon};
use crate::io::wkb::writer::{write_count, write_header};

/// The byte length of a WKBMultiPolygon, excluding any SRID
pub fn multi_polygon_wkb_size<C: CoordTrait>(geom: &MultiPolygon<C>) -> usize {
    1 + 4 + 4 + geom.polygons().iter().map(polygon_wkb_size).sum::<usize>()
}

/// Write a MultiPolygon geometry encoded as WKB. Each polygon repeats its own header.
pub(super) fn write_multi_polygon<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    geom: &MultiPolygon<C>,
    srid: Option<i32>,
) -> Result<()> {
    write_header::<B, _>(
        writer,
        GeometryType::new(GeometryKind::MultiPolygon, C::DIMENSION),
        srid,
    )?;

    write_count::<B, _>(writer, geom.num_polygons())?;
    for polygon in geom.polygons() {
        write_polygon::<B, _, _>(writer, polygon, None)?;
    }

    Ok(())
}
