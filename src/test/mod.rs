//! Shared fixtures for unit tests.

use crate::coord::CoordTrait;
use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::geometry::{
    AnyGeometry, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

pub(crate) mod linestring;
pub(crate) mod point;

/// A coordinate whose ordinates are `base`, `base + 1`, `base + 2`, `base + 3` in x, y, z, m
/// order.
fn c<C: CoordTrait>(base: f64) -> C {
    C::from_ordinates(&[base, base + 1., base + 2., base + 3.])
}

fn ring<C: CoordTrait>(base: f64) -> LineString<C> {
    LineString::new(vec![c(base), c(base + 10.), c(base + 20.), c(base)])
}

pub(crate) fn sample<C: CoordTrait>(kind: GeometryKind) -> Geometry<C> {
    match kind {
        GeometryKind::Point => Geometry::Point(Point::new(c(30.))),
        GeometryKind::LineString => {
            Geometry::LineString(LineString::new(vec![c(30.), c(10.), c(40.)]))
        }
        GeometryKind::Polygon => {
            Geometry::Polygon(Polygon::new(ring(0.), vec![ring(2.), ring(4.)]))
        }
        GeometryKind::MultiPoint => {
            Geometry::MultiPoint(MultiPoint::from_iter([c(1.), c(-2.), c(1e6)]))
        }
        GeometryKind::MultiLineString => Geometry::MultiLineString(MultiLineString::new(vec![
            LineString::new(vec![c(1.), c(2.)]),
            LineString::empty(),
            LineString::new(vec![c(-3.), c(7.), c(9.)]),
        ])),
        GeometryKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::new(vec![
            Polygon::new(ring(0.), vec![]),
            Polygon::new(ring(100.), vec![ring(102.)]),
        ])),
    }
}

/// One non-empty sample geometry for a (shape, dimension) tag.
pub(crate) fn sample_geometry(geometry_type: GeometryType) -> AnyGeometry {
    let kind = geometry_type.kind();
    match geometry_type.dimension() {
        Dimension::XY => AnyGeometry::XY(sample(kind)),
        Dimension::XYZ => AnyGeometry::XYZ(sample(kind)),
        Dimension::XYM => AnyGeometry::XYM(sample(kind)),
        Dimension::XYZM => AnyGeometry::XYZM(sample(kind)),
    }
}
