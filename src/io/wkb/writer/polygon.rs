use std::io::Write;

use crate::coord::CoordTrait;
use crate::datatypes::{GeometryKind, GeometryType};
use crate::error::Result;
use crate::geometry::Polygon;
use crate::io::wkb::common::WkbByteOrder;
use crate::io::wkb::writer::{write_coords, write_count, write_header};

/// The byte length of a WKBPolygon, excluding any SRID
pub fn polygon_wkb_size<C: CoordTrait>(geom: &Polygon<C>) -> usize {
    let each_coord = C::DIMENSION.size() * 8;
    let rings: usize = geom
        .rings()
        .iter()
        .map(|ring| 4 + ring.num_coords() * each_coord)
        .sum();
    1 + 4 + 4 + rings
}

/// Write a Polygon geometry encoded as WKB
pub(super) fn write_polygon<B: WkbByteOrder, W: Write, C: CoordTrait>(
    writer: &mut W,
    geom: &Polygon<C>,
    srid: Option<i32>,
) -> Result<()> {
    write_header::<B, _>(
        writer,
        GeometryType::new(GeometryKind::Polygon, C::DIMENSION),
        srid,
    )?;

    write_count::<B, _>(writer, geom.num_rings())?;
    for ring in geom.rings() {
        write_coords::<B, _, _>(writer, ring.coords())?;
    }

    Ok(())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Xy;
    use crate::io::wkb::writer::WkbWriter;
    use crate::test::polygon::{p0, p1};
    use crate::trait_::GeometryWriter;
    use geozero::{CoordDimensions, ToWkb};

    #[test]
    fn matches_geozero() {
        for polygon in [p0(), p1()] {
            let mut writer = WkbWriter::new(vec![]);
            writer.write_polygon(&polygon).unwrap();
            let buf = writer.into_inner();

            let expected = geo::Geometry::Polygon(polygon.clone().into())
                .to_wkb(CoordDimensions::xy())
                .unwrap();
            assert_eq!(buf, expected);
            assert_eq!(buf.len(), polygon_wkb_size(&polygon));
        }
    }

    #[test]
    fn empty_polygon() {
        let mut writer = WkbWriter::new(vec![]);
        writer.write_polygon(&Polygon::<Xy>::empty()).unwrap();
        assert_eq!(writer.into_inner(), vec![1, 3, 0, 0, 0, 0, 0, 0, 0]);
    }
}
