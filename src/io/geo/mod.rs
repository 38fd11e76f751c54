//! Convert between the XY value model and [`geo`] types.
//!
//! Only XY values convert. The `*_to_geo` functions accept any dimension and keep the first two
//! ordinates.

use crate::coord::{CoordTrait, Xy};
use crate::error::GeoWireError;
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};

/// Convert any coordinate to a [`geo::Coord`].
///
/// Only the first two dimensions will be kept.
pub fn coord_to_geo<C: CoordTrait>(coord: &C) -> geo::Coord {
    geo::Coord {
        x: coord.x(),
        y: coord.y(),
    }
}

/// Convert any Point to a [`geo::Point`]. The empty point has no `geo` counterpart.
pub fn point_to_geo<C: CoordTrait>(point: &Point<C>) -> Option<geo::Point> {
    point.coord().map(|coord| geo::Point(coord_to_geo(&coord)))
}

/// Convert any LineString to a [`geo::LineString`].
pub fn line_string_to_geo<C: CoordTrait>(line_string: &LineString<C>) -> geo::LineString {
    geo::LineString::new(line_string.coords().iter().map(coord_to_geo).collect())
}

/// Convert any Polygon to a [`geo::Polygon`]. The empty polygon has an empty exterior.
pub fn polygon_to_geo<C: CoordTrait>(polygon: &Polygon<C>) -> geo::Polygon {
    let exterior = polygon
        .exterior()
        .map(line_string_to_geo)
        .unwrap_or_else(|| geo::LineString::new(vec![]));
    let interiors = polygon.holes().iter().map(line_string_to_geo).collect();
    geo::Polygon::new(exterior, interiors)
}

/// Convert any MultiPoint to a [`geo::MultiPoint`]. Empty members are dropped.
pub fn multi_point_to_geo<C: CoordTrait>(multi_point: &MultiPoint<C>) -> geo::MultiPoint {
    geo::MultiPoint::new(multi_point.points().iter().filter_map(point_to_geo).collect())
}

/// Convert any MultiLineString to a [`geo::MultiLineString`].
pub fn multi_line_string_to_geo<C: CoordTrait>(
    multi_line_string: &MultiLineString<C>,
) -> geo::MultiLineString {
    geo::MultiLineString::new(
        multi_line_string
            .line_strings()
            .iter()
            .map(line_string_to_geo)
            .collect(),
    )
}

/// Convert any MultiPolygon to a [`geo::MultiPolygon`].
pub fn multi_polygon_to_geo<C: CoordTrait>(multi_polygon: &MultiPolygon<C>) -> geo::MultiPolygon {
    geo::MultiPolygon::new(multi_polygon.polygons().iter().map(polygon_to_geo).collect())
}

fn coord_from_geo(coord: geo::Coord) -> Xy {
    Xy::new(coord.x, coord.y)
}

impl TryFrom<Point<Xy>> for geo::Point {
    type Error = GeoWireError;

    fn try_from(value: Point<Xy>) -> Result<Self, Self::Error> {
        point_to_geo(&value).ok_or_else(|| {
            GeoWireError::InvalidArgument("geo::Point cannot represent an empty point".to_string())
        })
    }
}

impl From<LineString<Xy>> for geo::LineString {
    fn from(value: LineString<Xy>) -> Self {
        line_string_to_geo(&value)
    }
}

impl From<Polygon<Xy>> for geo::Polygon {
    fn from(value: Polygon<Xy>) -> Self {
        polygon_to_geo(&value)
    }
}

impl From<MultiPoint<Xy>> for geo::MultiPoint {
    fn from(value: MultiPoint<Xy>) -> Self {
        multi_point_to_geo(&value)
    }
}

impl From<MultiLineString<Xy>> for geo::MultiLineString {
    fn from(value: MultiLineString<Xy>) -> Self {
        multi_line_string_to_geo(&value)
    }
}

impl From<MultiPolygon<Xy>> for geo::MultiPolygon {
    fn from(value: MultiPolygon<Xy>) -> Self {
        multi_polygon_to_geo(&value)
    }
}

impl From<geo::Point> for Point<Xy> {
    fn from(value: geo::Point) -> Self {
        Point::new(coord_from_geo(value.0))
    }
}

impl From<geo::LineString> for LineString<Xy> {
    fn from(value: geo::LineString) -> Self {
        value.0.into_iter().map(coord_from_geo).collect()
    }
}

impl From<geo::Polygon> for Polygon<Xy> {
    fn from(value: geo::Polygon) -> Self {
        let (exterior, interiors) = value.into_inner();
        // the empty geo polygon has an empty exterior
        if exterior.0.is_empty() && interiors.is_empty() {
            return Polygon::empty();
        }
        Polygon::new(
            exterior.into(),
            interiors.into_iter().map(LineString::from).collect(),
        )
    }
}

impl From<geo::MultiPoint> for MultiPoint<Xy> {
    fn from(value: geo::MultiPoint) -> Self {
        value.0.into_iter().map(|point| coord_from_geo(point.0)).collect()
    }
}

impl From<geo::MultiLineString> for MultiLineString<Xy> {
    fn from(value: geo::MultiLineString) -> Self {
        MultiLineString::new(value.0.into_iter().map(LineString::from).collect())
    }
}

impl From<geo::MultiPolygon> for MultiPolygon<Xy> {
    fn from(value: geo::MultiPolygon) -> Self {
        MultiPolygon::new(value.0.into_iter().map(Polygon::from).collect())
    }
}
