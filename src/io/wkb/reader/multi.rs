use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};
use crate::geometry::{MultiLineString, MultiPoint, MultiPolygon};
use crate::io::wkb::reader::buffer::WkbBuffer;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::point::{coord_size, read_point};
use crate::io::wkb::reader::polygon::read_polygon;

/// Byte order flag plus type code.
const HEADER_BYTES: usize = 1 + 4;

/// Read and validate the self-describing header of one element of a multi geometry.
///
/// A nested SRID is tolerated and skipped.
fn read_element_header<C: CoordTrait>(buf: &mut WkbBuffer, kind: GeometryKind) -> Result<()> {
    let offset = buf.position();
    let header = buf.read_header()?;
    let expected = GeometryType::new(kind, C::DIMENSION);
    if header.geometry_type != expected {
        return Err(GeoWireError::Malformed(format!(
            "WKB element at offset {offset} is {}, expected {expected}",
            header.geometry_type
        )));
    }
    Ok(())
}

pub(crate) fn read_multi_point<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<MultiPoint<C>> {
    let num_points = buf.read_count(HEADER_BYTES + coord_size::<C>())?;
    let mut points = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        read_element_header::<C>(buf, GeometryKind::Point)?;
        points.push(read_point(buf)?);
    }
    Ok(MultiPoint::new(points))
}

pub(crate) fn read_multi_line_string<C: CoordTrait>(
    buf: &mut WkbBuffer,
) -> Result<MultiLineString<C>> {
    let num_line_strings = buf.read_count(HEADER_BYTES + 4)?;
    let mut line_strings = Vec::with_capacity(num_line_strings);
    for _ in 0..num_line_strings {
        read_element_header::<C>(buf, GeometryKind::LineString)?;
        line_strings.push(read_line_string(buf)?);
    }
    Ok(MultiLineString::new(line_strings))
}

pub(crate) fn read_multi_polygon<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<MultiPolygon<C>> {
    let num_polygons = buf.read_count(HEADER_BYTES + 4)?;
    let mut polygons = Vec::with_capacity(num_polygons);
    for _ in 0..num_polygons {
        read_element_header::<C>(buf, GeometryKind::Polygon)?;
        polygons.push(read_polygon(buf)?);
    }
    Ok(MultiPolygon::new(polygons))
}
