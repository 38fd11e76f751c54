use crate::coord::CoordTrait;
use crate::geometry::{AnyGeometry, Geometry};
use crate::io::wkb::writer::{
    line_string_wkb_size, multi_line_string_wkb_size, multi_point_wkb_size,
    multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size,
};

fn wkb_size<C: CoordTrait>(geom: &Geometry<C>) -> usize {
    match geom {
        Geometry::Point(g) => point_wkb_size(g),
        Geometry::LineString(g) => line_string_wkb_size(g),
        Geometry::Polygon(g) => polygon_wkb_size(g),
        Geometry::MultiPoint(g) => multi_point_wkb_size(g),
        Geometry::MultiLineString(g) => multi_line_string_wkb_size(g),
        Geometry::MultiPolygon(g) => multi_polygon_wkb_size(g),
    }
}

/// The byte length of any geometry encoded as WKB, excluding any SRID
pub fn geometry_wkb_size(geom: &AnyGeometry) -> usize {
    match geom {
        AnyGeometry::XY(g) => wkb_size(g),
        AnyGeometry::XYZ(g) => wkb_size(g),
        AnyGeometry::XYM(g) => wkb_size(g),
        AnyGeometry::XYZM(g) => wkb_size(g),
    }
}
