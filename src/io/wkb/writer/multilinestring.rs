use std::io::Write;

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::MultiLineString;
use crate::io::wkb::common::WkbByteOrder;
use crate::io::wkb::writer::linestring::{line_string_wkb_size, write_line_string};
use crate::io::wkb::writer::{write_count, write_header};

/// The byte length of a WKBMultiLineString, excluding any SRID
pub fn multi_line_string_wkb_size<C: CoordTrait>(geom: &MultiLineString<C>) -> usize {
    1 + 4
        + 4
        + geom
            .line_strings()
            .iter()
            .map(line_string_wkb_size)
            .sum::<usize>()
}

/// Write a MultiLineString geometry encoded as WKB. Each line string repeats its own header.
pub(super) fn write_multi_line_string<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    geom: &MultiLineString<C>,
    srid: Option<i32>,
) -> Result<()> {
    write_header::<B, _>(
        writer,
        GeometryType::new(GeometryKind::MultiLineString, C::DIMENSION),
        srid,
    )?;

    write_count::<B, _>(writer, geom.num_line_strings())?;
    for line_string in geom.line_strings() {
        write_line_string::<B, _, _>(writer, line_string, None)?;
    }

    Ok(())
}
