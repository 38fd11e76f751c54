//! The two contracts every codec implements: [`GeometryRecord`] for reading and
//! [`GeometryWriter`] for writing.

use crate::coord::{CoordTrait, Xy, Xym, Xyz, Xyzm};
use crate::datatypes::GeometryType;
use crate::error::{GeoWireError, Result};
use crate::geometry::{
    AnyGeometry, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
    TypedGeometry,
};

/// Decode `record` and narrow it to `G`, failing before any body decoding when the tag differs.
fn get_typed<G: TypedGeometry, R: GeometryRecord + ?Sized>(record: &R) -> Result<G> {
    let expected = G::geometry_type();
    let found = record.geometry_type();
    if expected != found {
        return Err(GeoWireError::InvalidGeometryType { expected, found });
    }
    record.get_geometry()?.narrow()
}

/// Read access to one encoded geometry.
///
/// Construction of a record inspects only the header (type, dimension and SRID). Every accessor
/// call decodes the body from scratch. The typed accessors fail with
/// [`GeoWireError::InvalidGeometryType`] unless both the shape and the dimension of the stored tag
/// match the accessor exactly.
pub trait GeometryRecord {
    /// The (shape, dimension) tag of the encoded geometry.
    fn geometry_type(&self) -> GeometryType;

    /// The spatial reference ID carried by the encoding, if any.
    fn srid(&self) -> Option<i32> {
        None
    }

    /// Whether the payload denotes the empty geometry.
    fn is_null(&self) -> bool;

    /// Decode the payload into the matching concrete value.
    fn get_geometry(&self) -> Result<AnyGeometry>;

    /// Decode the payload as `G`.
    fn get<G: TypedGeometry>(&self) -> Result<G>
    where
        Self: Sized,
    {
        get_typed(self)
    }

    fn get_point(&self) -> Result<Point<Xy>> {
        get_typed(self)
    }

    fn get_point_z(&self) -> Result<Point<Xyz>> {
        get_typed(self)
    }

    fn get_point_m(&self) -> Result<Point<Xym>> {
        get_typed(self)
    }

    fn get_point_zm(&self) -> Result<Point<Xyzm>> {
        get_typed(self)
    }

    fn get_line_string(&self) -> Result<LineString<Xy>> {
        get_typed(self)
    }

    fn get_line_string_z(&self) -> Result<LineString<Xyz>> {
        get_typed(self)
    }

    fn get_line_string_m(&self) -> Result<LineString<Xym>> {
        get_typed(self)
    }

    fn get_line_string_zm(&self) -> Result<LineString<Xyzm>> {
        get_typed(self)
    }

    fn get_polygon(&self) -> Result<Polygon<Xy>> {
        get_typed(self)
    }

    fn get_polygon_z(&self) -> Result<Polygon<Xyz>> {
        get_typed(self)
    }

    fn get_polygon_m(&self) -> Result<Polygon<Xym>> {
        get_typed(self)
    }

    fn get_polygon_zm(&self) -> Result<Polygon<Xyzm>> {
        get_typed(self)
    }

    fn get_multi_point(&self) -> Result<MultiPoint<Xy>> {
        get_typed(self)
    }

    fn get_multi_point_z(&self) -> Result<MultiPoint<Xyz>> {
        get_typed(self)
    }

    fn get_multi_point_m(&self) -> Result<MultiPoint<Xym>> {
        get_typed(self)
    }

    fn get_multi_point_zm(&self) -> Result<MultiPoint<Xyzm>> {
        get_typed(self)
    }

    fn get_multi_line_string(&self) -> Result<MultiLineString<Xy>> {
        get_typed(self)
    }

    fn get_multi_line_string_z(&self) -> Result<MultiLineString<Xyz>> {
        get_typed(self)
    }

    fn get_multi_line_string_m(&self) -> Result<MultiLineString<Xym>> {
        get_typed(self)
    }

    fn get_multi_line_string_zm(&self) -> Result<MultiLineString<Xyzm>> {
        get_typed(self)
    }

    fn get_multi_polygon(&self) -> Result<MultiPolygon<Xy>> {
        get_typed(self)
    }

    fn get_multi_polygon_z(&self) -> Result<MultiPolygon<Xyz>> {
        get_typed(self)
    }

    fn get_multi_polygon_m(&self) -> Result<MultiPolygon<Xym>> {
        get_typed(self)
    }

    fn get_multi_polygon_zm(&self) -> Result<MultiPolygon<Xyzm>> {
        get_typed(self)
    }
}

/// Append-only encoding of geometries.
///
/// Each method is generic over the coordinate tuple, so every (shape, dimension) pair gets its
/// own instantiation. Writing is the structural inverse of the matching
/// [`GeometryRecord`] accessor.
pub trait GeometryWriter {
    fn write_point<C: CoordTrait>(&mut self, geom: &Point<C>) -> Result<()>;

    fn write_line_string<C: CoordTrait>(&mut self, geom: &LineString<C>) -> Result<()>;

    fn write_polygon<C: CoordTrait>(&mut self, geom: &Polygon<C>) -> Result<()>;

    fn write_multi_point<C: CoordTrait>(&mut self, geom: &MultiPoint<C>) -> Result<()>;

    fn write_multi_line_string<C: CoordTrait>(&mut self, geom: &MultiLineString<C>)
        -> Result<()>;

    fn write_multi_polygon<C: CoordTrait>(&mut self, geom: &MultiPolygon<C>) -> Result<()>;

    fn write_geometry<C: CoordTrait>(&mut self, geom: &Geometry<C>) -> Result<()> {
        match geom {
            Geometry::Point(g) => self.write_point(g),
            Geometry::LineString(g) => self.write_line_string(g),
            Geometry::Polygon(g) => self.write_polygon(g),
            Geometry::MultiPoint(g) => self.write_multi_point(g),
            Geometry::MultiLineString(g) => self.write_multi_line_string(g),
            Geometry::MultiPolygon(g) => self.write_multi_polygon(g),
        }
    }

    fn write_any_geometry(&mut self, geom: &AnyGeometry) -> Result<()> {
        match geom {
            AnyGeometry::XY(g) => self.write_geometry(g),
            AnyGeometry::XYZ(g) => self.write_geometry(g),
            AnyGeometry::XYM(g) => self.write_geometry(g),
            AnyGeometry::XYZM(g) => self.write_geometry(g),
        }
    }
}
