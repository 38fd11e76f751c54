use std::io::Write;

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::MultiPoint;
use crate::io::wkb::common::WkbByteOrder;
use crate::io::wkb::writer::point::{point_wkb_size, write_point};
use crate::io::wkb::writer::{write_count, write_header};

/// The byte length of a WKBMultiPoint, excluding any SRID
pub fn multi_point_wkb_size<C: CoordTrait>(geom: &MultiPoint<C>) -> usize {
    1 + 4 + 4 + geom.points().iter().map(point_wkb_size).sum::<usize>()
}

/// Write a MultiPoint geometry encoded as WKB. Each point repeats its own header.
pub(super) fn write_multi_point<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    geom: &MultiPoint<C>,
    srid: Option<i32>,
) -> Result<()> {
    write_header::<B, _>(
        writer,
        GeometryType::new(GeometryKind::MultiPoint, C::DIMENSION),
        srid,
    )?;

    write_count::<B, _>(writer, geom.num_points())?;
    for point in geom.points() {
        write_point::<B, _, _>(writer, point, None)?;
    }

    Ok(())
}
