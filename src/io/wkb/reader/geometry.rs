use crate::coord::{CoordTrait, Xy, Xym, Xyz, Xyzm};
use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::{AnyGeometry, Geometry};
use crate::io::wkb::reader::buffer::WkbBuffer;
use crate::io::wkb::reader::linestring::read_line_string;
use crate::io::wkb::reader::multi::{read_multi_line_string, read_multi_point, read_multi_polygon};
use crate::io::wkb::reader::point::read_point;
use crate::io::wkb::reader::polygon::read_polygon;

/// Read the body of a geometry whose header has already been consumed.
pub(crate) fn read_geometry<C: CoordTrait>(
    buf: &mut WkbBuffer,
    kind: GeometryKind,
) -> Result<Geometry<C>> {
    let geom = match kind {
        GeometryKind::Point => Geometry::Point(read_point(buf)?),
        GeometryKind::LineString => Geometry::LineString(read_line_string(buf)?),
        GeometryKind::Polygon => Geometry::Polygon(read_polygon(buf)?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(read_multi_point(buf)?),
        GeometryKind::MultiLineString => Geometry::MultiLineString(read_multi_line_string(buf)?),
        GeometryKind::MultiPolygon => Geometry::MultiPolygon(read_multi_polygon(buf)?),
    };
    Ok(geom)
}

pub(crate) fn read_any_geometry(
    buf: &mut WkbBuffer,
    geometry_type: GeometryType,
) -> Result<AnyGeometry> {
    let kind = geometry_type.kind();
    let geom = match geometry_type.dimension() {
        Dimension::XY => AnyGeometry::XY(read_geometry::<Xy>(buf, kind)?),
        Dimension::XYZ => AnyGeometry::XYZ(read_geometry::<Xyz>(buf, kind)?),
        Dimension::XYM => AnyGeometry::XYM(read_geometry::<Xym>(buf, kind)?),
        Dimension::XYZM => AnyGeometry::XYZM(read_geometry::<Xyzm>(buf, kind)?),
    };
    Ok(geom)
}
