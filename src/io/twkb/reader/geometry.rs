use crate::coord::{CoordTrait, Xy, Xym, Xyz, Xyzm};
use crate::datatypes::{Dimension, GeometryKind};
use crate::error::Result;
use crate::geometry::{
    AnyGeometry, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::twkb::reader::cursor::TwkbCursor;

fn read_point<C: CoordTrait>(cursor: &mut TwkbCursor) -> Result<Point<C>> {
    Ok(Point::new(cursor.read_coord()?))
}

fn read_line_string<C: CoordTrait>(cursor: &mut TwkbCursor) -> Result<LineString<C>> {
    Ok(LineString::new(cursor.read_coords()?))
}

fn read_polygon<C: CoordTrait>(cursor: &mut TwkbCursor) -> Result<Polygon<C>> {
    let num_rings = cursor.read_count(1)?;
    let mut rings = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        rings.push(read_line_string(cursor)?);
    }
    Ok(Polygon::from_rings(rings))
}

/// Read the element count of a multi-geometry and skip past its ID list, if any.
fn read_multi_count(
    cursor: &mut TwkbCursor,
    has_ids: bool,
    min_element_size: usize,
) -> Result<usize> {
    let count = cursor.read_count(min_element_size)?;
    if has_ids {
        cursor.read_ids(count)?;
    }
    Ok(count)
}

fn read_multi<T>(
    cursor: &mut TwkbCursor,
    has_ids: bool,
    min_element_size: usize,
    read_element: impl Fn(&mut TwkbCursor) -> Result<T>,
) -> Result<Vec<T>> {
    let count = read_multi_count(cursor, has_ids, min_element_size)?;
    let mut elements = Vec::with_capacity(count);
    for _ in 0..count {
        elements.push(read_element(cursor)?);
    }
    Ok(elements)
}

/// Read a non-empty geometry body. The delta chain in `cursor` runs across every element.
pub(super) fn read_geometry<C: CoordTrait>(
    cursor: &mut TwkbCursor,
    kind: GeometryKind,
    has_ids: bool,
) -> Result<Geometry<C>> {
    let dims = C::DIMENSION.size();
    let geometry = match kind {
        GeometryKind::Point => Geometry::Point(read_point(cursor)?),
        GeometryKind::LineString => Geometry::LineString(read_line_string(cursor)?),
        GeometryKind::Polygon => Geometry::Polygon(read_polygon(cursor)?),
        GeometryKind::MultiPoint => Geometry::MultiPoint(MultiPoint::new(read_multi(
            cursor,
            has_ids,
            dims,
            read_point::<C>,
        )?)),
        GeometryKind::MultiLineString => Geometry::MultiLineString(MultiLineString::new(
            read_multi(cursor, has_ids, 1, read_line_string::<C>)?,
        )),
        GeometryKind::MultiPolygon => Geometry::MultiPolygon(MultiPolygon::new(read_multi(
            cursor,
            has_ids,
            1,
            read_polygon::<C>,
        )?)),
    };
    Ok(geometry)
}

pub(super) fn read_any_geometry(
    cursor: &mut TwkbCursor,
    kind: GeometryKind,
    dimension: Dimension,
    has_ids: bool,
) -> Result<AnyGeometry> {
    let geometry = match dimension {
        Dimension::XY => AnyGeometry::XY(read_geometry::<Xy>(cursor, kind, has_ids)?),
        Dimension::XYZ => AnyGeometry::XYZ(read_geometry::<Xyz>(cursor, kind, has_ids)?),
        Dimension::XYM => AnyGeometry::XYM(read_geometry::<Xym>(cursor, kind, has_ids)?),
        Dimension::XYZM => AnyGeometry::XYZM(read_geometry::<Xyzm>(cursor, kind, has_ids)?),
    };
    Ok(geometry)
}

/// Read just the ID list of a multi-geometry body.
pub(super) fn read_id_list(
    cursor: &mut TwkbCursor,
    dimension: Dimension,
    kind: GeometryKind,
) -> Result<Vec<i64>> {
    let min_element_size = if kind == GeometryKind::MultiPoint {
        dimension.size()
    } else {
        1
    };
    let count = cursor.read_count(min_element_size)?;
    cursor.read_ids(count)
}
