use std::str::FromStr;

use wkt::Wkt;

use crate::coord::{CoordTrait, Xy, Xym, Xyz, Xyzm};
use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};
use crate::geometry::{
    AnyGeometry, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::wkt::writer::{dimension_suffix, keyword};

/// Parse `body` as a `kind` of dimension `C` with the `wkt` crate.
///
/// The keyword and an explicit dimension suffix are put back in front of the body, so the parser
/// never has to guess the dimension.
fn parse<C: CoordTrait>(kind: GeometryKind, body: &str) -> Result<Wkt<f64>> {
    let text = format!("{}{} {body}", keyword(kind), dimension_suffix(C::DIMENSION));
    Wkt::<f64>::from_str(&text)
        .map_err(|err| GeoWireError::Malformed(format!("invalid WKT body {body:?}: {err}")))
}

fn coord_from_wkt<C: CoordTrait>(coord: &wkt::types::Coord<f64>) -> Result<C> {
    let mut ordinates = [coord.x, coord.y, 0., 0.];
    let mut count = 2;
    for value in [coord.z, coord.m].into_iter().flatten() {
        ordinates[count] = value;
        count += 1;
    }
    if count != C::DIMENSION.size() {
        return Err(GeoWireError::Malformed(format!(
            "coordinate with {count} ordinates in a {} geometry",
            C::DIMENSION
        )));
    }
    Ok(C::from_ordinates(&ordinates))
}

fn point_from_wkt<C: CoordTrait>(point: &wkt::types::Point<f64>) -> Result<Point<C>> {
    let coord = point.0.as_ref().map(coord_from_wkt).transpose()?;
    Ok(Point::from(coord))
}

fn line_string_from_wkt<C: CoordTrait>(
    line_string: &wkt::types::LineString<f64>,
) -> Result<LineString<C>> {
    line_string.0.iter().map(coord_from_wkt).collect()
}

fn polygon_from_wkt<C: CoordTrait>(polygon: &wkt::types::Polygon<f64>) -> Result<Polygon<C>> {
    let rings = polygon
        .0
        .iter()
        .map(line_string_from_wkt)
        .collect::<Result<Vec<_>>>()?;
    Ok(Polygon::from_rings(rings))
}

fn multi_line_string_from_wkt<C: CoordTrait>(
    multi_line_string: &wkt::types::MultiLineString<f64>,
) -> Result<MultiLineString<C>> {
    let line_strings = multi_line_string
        .0
        .iter()
        .map(line_string_from_wkt)
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiLineString::new(line_strings))
}

fn multi_polygon_from_wkt<C: CoordTrait>(
    multi_polygon: &wkt::types::MultiPolygon<f64>,
) -> Result<MultiPolygon<C>> {
    let polygons = multi_polygon
        .0
        .iter()
        .map(polygon_from_wkt)
        .collect::<Result<Vec<_>>>()?;
    Ok(MultiPolygon::new(polygons))
}

fn is_empty_keyword(member: &str) -> bool {
    member.eq_ignore_ascii_case("EMPTY")
}

/// Split a parenthesised multipoint body into its trimmed top-level members.
fn split_members(body: &str) -> Result<Vec<&str>> {
    let inner = body
        .trim()
        .strip_prefix('(')
        .and_then(|inner| inner.strip_suffix(')'))
        .ok_or_else(|| {
            GeoWireError::Malformed(format!("expected a parenthesised WKT body, found {body:?}"))
        })?;
    let mut members = vec![];
    let mut depth = 0_usize;
    let mut start = 0;
    for (i, c) in inner.char_indices() {
        match c {
            '(' => depth += 1,
            ')' => {
                depth = depth.checked_sub(1).ok_or_else(|| {
                    GeoWireError::Malformed(format!("unbalanced parentheses in {body:?}"))
                })?
            }
            ',' if depth == 0 => {
                members.push(inner[start..i].trim());
                start = i + 1;
            }
            _ => {}
        }
    }
    members.push(inner[start..].trim());
    Ok(members)
}

/// Multipoints go through the `wkt` crate without their `EMPTY` members, which are put back in
/// place afterwards.
fn read_multi_point<C: CoordTrait>(body: &str) -> Result<MultiPoint<C>> {
    let members = split_members(body)?;
    let present: Vec<&str> = members
        .iter()
        .copied()
        .filter(|member| !is_empty_keyword(member))
        .collect();

    let parsed = if present.is_empty() {
        vec![]
    } else {
        let body = format!("({})", present.join(", "));
        match parse::<C>(GeometryKind::MultiPoint, &body)? {
            Wkt::MultiPoint(multi_point) => multi_point
                .0
                .iter()
                .map(point_from_wkt)
                .collect::<Result<Vec<_>>>()?,
            _ => {
                return Err(GeoWireError::Malformed(format!(
                    "WKT body {body:?} is not a MultiPoint"
                )))
            }
        }
    };
    if parsed.len() != present.len() {
        return Err(GeoWireError::Malformed(format!(
            "expected {} points in {body:?}, parsed {}",
            present.len(),
            parsed.len()
        )));
    }

    let mut parsed = parsed.into_iter();
    let points = members
        .iter()
        .map(|member| {
            if is_empty_keyword(member) {
                Point::empty()
            } else {
                parsed.next().unwrap_or_else(Point::empty)
            }
        })
        .collect();
    Ok(MultiPoint::new(points))
}

/// Parse a non-empty parenthesised body.
pub(super) fn read_geometry<C: CoordTrait>(body: &str, kind: GeometryKind) -> Result<Geometry<C>> {
    if kind == GeometryKind::MultiPoint {
        return read_multi_point(body).map(Geometry::MultiPoint);
    }
    let geometry = match (kind, parse::<C>(kind, body)?) {
        (GeometryKind::Point, Wkt::Point(g)) => Geometry::Point(point_from_wkt(&g)?),
        (GeometryKind::LineString, Wkt::LineString(g)) => {
            Geometry::LineString(line_string_from_wkt(&g)?)
        }
        (GeometryKind::Polygon, Wkt::Polygon(g)) => Geometry::Polygon(polygon_from_wkt(&g)?),
        (GeometryKind::MultiLineString, Wkt::MultiLineString(g)) => {
            Geometry::MultiLineString(multi_line_string_from_wkt(&g)?)
        }
        (GeometryKind::MultiPolygon, Wkt::MultiPolygon(g)) => {
            Geometry::MultiPolygon(multi_polygon_from_wkt(&g)?)
        }
        (kind, _) => {
            return Err(GeoWireError::Malformed(format!(
                "WKT body {body:?} is not a {kind}"
            )))
        }
    };
    Ok(geometry)
}

pub(super) fn read_any_geometry(body: &str, geometry_type: GeometryType) -> Result<AnyGeometry> {
    let kind = geometry_type.kind();
    let geometry = match geometry_type.dimension() {
        Dimension::XY => AnyGeometry::XY(read_geometry::<Xy>(body, kind)?),
        Dimension::XYZ => AnyGeometry::XYZ(read_geometry::<Xyz>(body, kind)?),
        Dimension::XYM => AnyGeometry::XYM(read_geometry::<Xym>(body, kind)?),
        Dimension::XYZM => AnyGeometry::XYZM(read_geometry::<Xyzm>(body, kind)?),
    };
    Ok(geometry)
}
