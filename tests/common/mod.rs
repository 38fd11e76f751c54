#![allow(dead_code)]

use geowire::coord::{CoordTrait, Xy, Xym, Xyz, Xyzm};
use geowire::datatypes::{Dimension, GeometryKind, GeometryType};
use geowire::geometry::{
    AnyGeometry, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};

/// A coordinate whose ordinates step by `step` from `base`, in x, y, z, m order.
fn c<C: CoordTrait>(base: f64, step: f64) -> C {
    C::from_ordinates(&[base, base + step, base + 2. * step, base + 3. * step])
}

fn ring<C: CoordTrait>(base: f64, step: f64) -> LineString<C> {
    LineString::new(vec![
        c(base, step),
        c(base + 4. * step, step),
        c(base + 8. * step, step),
        c(base, step),
    ])
}

fn shape<C: CoordTrait>(kind: GeometryKind, step: f64) -> Geometry<C> {
    match kind {
        GeometryKind::Point => Geometry::Point(Point::new(c(30. * step, step))),
        GeometryKind::LineString => Geometry::LineString(LineString::new(vec![
            c(30. * step, step),
            c(-10. * step, step),
            c(40. * step, step),
        ])),
        GeometryKind::Polygon => Geometry::Polygon(Polygon::new(
            ring(0., step),
            vec![ring(step, step), ring(-step, step)],
        )),
        GeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint::from_iter([
            c(step, step),
            c(-7. * step, step),
            c(1000. * step, step),
        ])),
        GeometryKind::MultiLineString => Geometry::MultiLineString(MultiLineString::new(vec![
            LineString::new(vec![c(step, step), c(2. * step, step)]),
            LineString::empty(),
            LineString::new(vec![c(-3. * step, step), c(9. * step, step)]),
        ])),
        GeometryKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::new(vec![
            Polygon::new(ring(0., step), vec![]),
            Polygon::new(ring(100. * step, step), vec![ring(101. * step, step)]),
        ])),
    }
}

/// A non-empty geometry for every tag. With a `step` that is a multiple of 10^-p every ordinate
/// survives TWKB at precision p unchanged.
pub fn sample(geometry_type: GeometryType, step: f64) -> AnyGeometry {
    let kind = geometry_type.kind();
    match geometry_type.dimension() {
        Dimension::XY => AnyGeometry::XY(shape::<Xy>(kind, step)),
        Dimension::XYZ => AnyGeometry::XYZ(shape::<Xyz>(kind, step)),
        Dimension::XYM => AnyGeometry::XYM(shape::<Xym>(kind, step)),
        Dimension::XYZM => AnyGeometry::XYZM(shape::<Xyzm>(kind, step)),
    }
}

/// Two polygons, the second with one hole.
pub fn nested_multi_polygon() -> MultiPolygon<Xy> {
    let square = |x: f64, y: f64, size: f64| {
        LineString::new(vec![
            Xy::new(x, y),
            Xy::new(x + size, y),
            Xy::new(x + size, y + size),
            Xy::new(x, y + size),
            Xy::new(x, y),
        ])
    };
    MultiPolygon::new(vec![
        Polygon::new(square(0., 0., 10.), vec![]),
        Polygon::new(square(20., 20., 10.), vec![square(22., 22., 4.)]),
    ])
}
