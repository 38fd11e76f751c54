use std::io::Write;

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::LineString;
use crate::io::wkb::common::WkbByteOrder;
use crate::io::wkb::writer::{write_coords, write_header};

/// The byte length of a WKBLineString, excluding any SRID
pub fn line_string_wkb_size<C: CoordTrait>(geom: &LineString<C>) -> usize {
    1 + 4 + 4 + (geom.num_coords() * C::DIMENSION.size() * 8)
}

/// Write a LineString geometry encoded as WKB
pub(super) fn write_line_string<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    geom: &LineString<C>,
    srid: Option<i32>,
) -> Result<()> {
    write_header::<B, _>(
        writer,
        GeometryType::new(GeometryKind::LineString, C::DIMENSION),
        srid,
    )?;
    write_coords::<B, _, _>(writer, geom.coords())
}
