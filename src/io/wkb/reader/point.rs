use crate::coord::CoordTrait;
use crate::error::Result;
use crate::geometry::Point;
use crate::io::wkb::reader::buffer::WkbBuffer;

/// The number of bytes in a WKB coordinate tuple of dimension `C`.
pub(crate) fn coord_size<C: CoordTrait>() -> usize {
    8 * C::DIMENSION.size()
}

pub(crate) fn read_coord<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<C> {
    let mut ordinates = [0.; 4];
    for ordinate in ordinates.iter_mut().take(C::DIMENSION.size()) {
        *ordinate = buf.read_f64()?;
    }
    Ok(C::from_ordinates(&ordinates))
}

/// Read the body of a WKB point. An all-NaN tuple is the empty point.
pub(crate) fn read_point<C: CoordTrait>(buf: &mut WkbBuffer) -> Result<Point<C>> {
    let coord: C = read_coord(buf)?;
    if coord.ordinates().all(f64::is_nan) {
        Ok(Point::empty())
    } else {
        Ok(Point::new(coord))
    }
}
