use crate::coord::CoordTrait;
use crate::error::Result;
use crate::geometry::LineString;
use crate::io::wkb::reader::buffer::WkbBuffer;
use crate::io::wkb::reader::point::{coord_size, read_coord};

/// Read a point count followed by that many coordinate tuples.
pub(crate) fn read_coords<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<Vec<C>> {
    let num_points = buf.read_count(coord_size::<C>())?;
    let mut coords = Vec::with_capacity(num_points);
    for _ in 0..num_points {
        coords.push(read_coord(buf)?);
    }
    Ok(coords)
}

pub(crate) fn read_line_string<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<LineString<C>> {
    Ok(LineString::new(read_coords(buf)?))
}
