//! The plain geometry value model.
//!
//! Every shape is generic over a [`CoordTrait`] tuple, so the dimension of a value is part of
//! its type. [`Geometry`] is the closed union of the six shapes for one dimension and
//! [`AnyGeometry`] is the closed union over the four dimensions; together they mirror the
//! 24-entry type space of the wire formats.

use serde::{Deserialize, Serialize};

use crate::coord::{CoordTrait, Xy, Xym, Xyz, Xyzm};
use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};

mod linestring;
mod multilinestring;
mod multipoint;
mod multipolygon;
mod point;
mod polygon;

pub use linestring::{LineString, LinearRing};
pub use multilinestring::MultiLineString;
pub use multipoint::MultiPoint;
pub use multipolygon::MultiPolygon;
pub use point::Point;
pub use polygon::{Holes, Polygon};

pub type PointZ = Point<Xyz>;
pub type PointM = Point<Xym>;
pub type PointZM = Point<Xyzm>;
pub type LineStringZ = LineString<Xyz>;
pub type LineStringM = LineString<Xym>;
pub type LineStringZM = LineString<Xyzm>;
pub type PolygonZ = Polygon<Xyz>;
pub type PolygonM = Polygon<Xym>;
pub type PolygonZM = Polygon<Xyzm>;
pub type MultiPointZ = MultiPoint<Xyz>;
pub type MultiPointM = MultiPoint<Xym>;
pub type MultiPointZM = MultiPoint<Xyzm>;
pub type MultiLineStringZ = MultiLineString<Xyz>;
pub type MultiLineStringM = MultiLineString<Xym>;
pub type MultiLineStringZM = MultiLineString<Xyzm>;
pub type MultiPolygonZ = MultiPolygon<Xyz>;
pub type MultiPolygonM = MultiPolygon<Xym>;
pub type MultiPolygonZM = MultiPolygon<Xyzm>;

/// One geometry of a known dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Geometry<C: CoordTrait> {
    Point(Point<C>),
    LineString(LineString<C>),
    Polygon(Polygon<C>),
    MultiPoint(MultiPoint<C>),
    MultiLineString(MultiLineString<C>),
    MultiPolygon(MultiPolygon<C>),
}

impl<C: CoordTrait> Geometry<C> {
    pub fn kind(&self) -> GeometryKind {
        match self {
            Geometry::Point(_) => GeometryKind::Point,
            Geometry::LineString(_) => GeometryKind::LineString,
            Geometry::Polygon(_) => GeometryKind::Polygon,
            Geometry::MultiPoint(_) => GeometryKind::MultiPoint,
            Geometry::MultiLineString(_) => GeometryKind::MultiLineString,
            Geometry::MultiPolygon(_) => GeometryKind::MultiPolygon,
        }
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::new(self.kind(), C::DIMENSION)
    }

    /// Whether this geometry holds no coordinates.
    pub fn is_empty(&self) -> bool {
        match self {
            Geometry::Point(g) => g.is_empty(),
            Geometry::LineString(g) => g.is_empty(),
            Geometry::Polygon(g) => g.is_empty(),
            Geometry::MultiPoint(g) => g.is_empty(),
            Geometry::MultiLineString(g) => g.is_empty(),
            Geometry::MultiPolygon(g) => g.is_empty(),
        }
    }

    /// The canonical empty value of a shape.
    pub fn empty(kind: GeometryKind) -> Self {
        match kind {
            GeometryKind::Point => Geometry::Point(Point::empty()),
            GeometryKind::LineString => Geometry::LineString(LineString::empty()),
            GeometryKind::Polygon => Geometry::Polygon(Polygon::empty()),
            GeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint::empty()),
            GeometryKind::MultiLineString => Geometry::MultiLineString(MultiLineString::empty()),
            GeometryKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::empty()),
        }
    }
}

/// One geometry of any dimension.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum AnyGeometry {
    XY(Geometry<Xy>),
    XYZ(Geometry<Xyz>),
    XYM(Geometry<Xym>),
    XYZM(Geometry<Xyzm>),
}

impl AnyGeometry {
    pub fn dimension(&self) -> Dimension {
        match self {
            AnyGeometry::XY(_) => Dimension::XY,
            AnyGeometry::XYZ(_) => Dimension::XYZ,
            AnyGeometry::XYM(_) => Dimension::XYM,
            AnyGeometry::XYZM(_) => Dimension::XYZM,
        }
    }

    pub fn kind(&self) -> GeometryKind {
        match self {
            AnyGeometry::XY(g) => g.kind(),
            AnyGeometry::XYZ(g) => g.kind(),
            AnyGeometry::XYM(g) => g.kind(),
            AnyGeometry::XYZM(g) => g.kind(),
        }
    }

    pub fn geometry_type(&self) -> GeometryType {
        GeometryType::new(self.kind(), self.dimension())
    }

    pub fn is_empty(&self) -> bool {
        match self {
            AnyGeometry::XY(g) => g.is_empty(),
            AnyGeometry::XYZ(g) => g.is_empty(),
            AnyGeometry::XYM(g) => g.is_empty(),
            AnyGeometry::XYZM(g) => g.is_empty(),
        }
    }

    /// The canonical empty value for a (shape, dimension) tag.
    pub fn empty(geometry_type: GeometryType) -> Self {
        let kind = geometry_type.kind();
        match geometry_type.dimension() {
            Dimension::XY => AnyGeometry::XY(Geometry::empty(kind)),
            Dimension::XYZ => AnyGeometry::XYZ(Geometry::empty(kind)),
            Dimension::XYM => AnyGeometry::XYM(Geometry::empty(kind)),
            Dimension::XYZM => AnyGeometry::XYZM(Geometry::empty(kind)),
        }
    }

    /// Narrow to one concrete (shape, dimension) pair.
    ///
    /// Fails with [`GeoWireError::InvalidGeometryType`] unless both the shape and the dimension
    /// match exactly.
    pub fn narrow<G: TypedGeometry>(self) -> Result<G> {
        let expected = G::geometry_type();
        let found = self.geometry_type();
        let mismatch = || GeoWireError::InvalidGeometryType { expected, found };
        let geom = G::Coord::narrow(self).map_err(|_| mismatch())?;
        G::from_geometry(geom).map_err(|_| mismatch())
    }
}

impl<C: CoordTrait> From<Geometry<C>> for AnyGeometry {
    fn from(value: Geometry<C>) -> Self {
        C::widen(value)
    }
}

/// A concrete shape of a concrete dimension, i.e. one of the 24 typed accessor results.
pub trait TypedGeometry: Sized {
    type Coord: CoordTrait;

    const KIND: GeometryKind;

    fn geometry_type() -> GeometryType {
        GeometryType::new(Self::KIND, Self::Coord::DIMENSION)
    }

    /// Unwrap from the per-dimension union, handing the geometry back if the shape differs.
    fn from_geometry(
        geom: Geometry<Self::Coord>,
    ) -> std::result::Result<Self, Geometry<Self::Coord>>;

    fn into_geometry(self) -> Geometry<Self::Coord>;
}

macro_rules! impl_typed_geometry {
    ($struct_name:ident, $variant:ident) => {
        impl<C: CoordTrait> TypedGeometry for $struct_name<C> {
            type Coord = C;

            const KIND: GeometryKind = GeometryKind::$variant;

            fn from_geometry(geom: Geometry<C>) -> std::result::Result<Self, Geometry<C>> {
                match geom {
                    Geometry::$variant(g) => Ok(g),
                    other => Err(other),
                }
            }

            fn into_geometry(self) -> Geometry<C> {
                Geometry::$variant(self)
            }
        }

        impl<C: CoordTrait> From<$struct_name<C>> for Geometry<C> {
            fn from(value: $struct_name<C>) -> Self {
                Geometry::$variant(value)
            }
        }

        impl<C: CoordTrait> From<$struct_name<C>> for AnyGeometry {
            fn from(value: $struct_name<C>) -> Self {
                C::widen(Geometry::$variant(value))
            }
        }

        impl<C: CoordTrait> TryFrom<AnyGeometry> for $struct_name<C> {
            type Error = GeoWireError;

            fn try_from(value: AnyGeometry) -> Result<Self> {
                value.narrow()
            }
        }
    };
}

impl_typed_geometry!(Point, Point);
impl_typed_geometry!(LineString, LineString);
impl_typed_geometry!(Polygon, Polygon);
impl_typed_geometry!(MultiPoint, MultiPoint);
impl_typed_geometry!(MultiLineString, MultiLineString);
impl_typed_geometry!(MultiPolygon, MultiPolygon);

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn narrow_exact_match() {
        let geom: AnyGeometry = Point::new(Xyz::new(1., 2., 3.)).into();
        assert_eq!(
            geom.geometry_type(),
            GeometryType::new(GeometryKind::Point, Dimension::XYZ)
        );
        let point: PointZ = geom.narrow().unwrap();
        assert_eq!(point.coord(), Some(Xyz::new(1., 2., 3.)));
    }

    #[test]
    fn narrow_never_coerces_dimension() {
        let geom: AnyGeometry = Point::new(Xyz::new(1., 2., 3.)).into();
        let err = geom.clone().narrow::<Point<Xy>>().unwrap_err();
        assert!(matches!(err, GeoWireError::InvalidGeometryType { .. }));
        let err = geom.clone().narrow::<PointM>().unwrap_err();
        assert!(matches!(err, GeoWireError::InvalidGeometryType { .. }));
        let err = geom.narrow::<MultiPointZ>().unwrap_err();
        assert!(matches!(err, GeoWireError::InvalidGeometryType { .. }));
    }

    #[test]
    fn canonical_empty() {
        for geometry_type in GeometryType::all() {
            let empty = AnyGeometry::empty(geometry_type);
            assert!(empty.is_empty());
            assert_eq!(empty.geometry_type(), geometry_type);
        }
    }
}
