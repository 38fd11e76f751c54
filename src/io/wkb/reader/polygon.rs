use crate::coord::CoordTrait;
use crate::error::Result;
use crate::geometry::{LineString, Polygon};
use crate::io::wkb::reader::buffer::WkbBuffer;
use crate::io::wkb::reader::linestring::read_coords;

pub(crate) fn read_polygon<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<Polygon<C>> {
    // Every ring carries at least its own 4-byte point count
    let num_rings = buf.read_count(4)?;
    let mut rings = Vec::with_capacity(num_rings);
    for _ in 0..num_rings {
        rings.push(LineString::new(read_coords(buf)?));
    }
    Ok(Polygon::from_rings(rings))
}
