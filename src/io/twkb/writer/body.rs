use crate::coord::CoordTrait;
use crate::error::{GeoWireError, Result};
use crate::geometry::{LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon};
use crate::io::twkb::common::scale_ordinate;
use crate::io::twkb::varint::{write_uvarint, write_varint};

/// Encodes the body of one top-level geometry, threading the delta chain through every
/// coordinate and tracking the extent of the scaled values.
#[derive(Debug)]
pub(super) struct BodyEncoder {
    buf: Vec<u8>,
    precisions: [i8; 4],
    last: [i64; 4],
    mins: [i64; 4],
    maxs: [i64; 4],
    num_coords: usize,
}

impl BodyEncoder {
    pub(super) fn new(precisions: [i8; 4]) -> Self {
        Self {
            buf: vec![],
            precisions,
            last: [0; 4],
            mins: [0; 4],
            maxs: [0; 4],
            num_coords: 0,
        }
    }

    fn write_count(&mut self, count: usize) -> Result<()> {
        write_uvarint(&mut self.buf, u64::try_from(count)?)
    }

    fn write_coord<C: CoordTrait>(&mut self, coord: &C) -> Result<()> {
        for (i, ordinate) in coord.ordinates().enumerate() {
            let value = scale_ordinate(ordinate, self.precisions[i])?;
            let delta = value
                .checked_sub(self.last[i])
                .ok_or(GeoWireError::Overflow)?;
            write_varint(&mut self.buf, delta)?;
            self.last[i] = value;

            if self.num_coords == 0 {
                self.mins[i] = value;
                self.maxs[i] = value;
            } else {
                self.mins[i] = self.mins[i].min(value);
                self.maxs[i] = self.maxs[i].max(value);
            }
        }
        self.num_coords += 1;
        Ok(())
    }

    fn write_coords<C: CoordTrait>(&mut self, coords: &[C]) -> Result<()> {
        self.write_count(coords.len())?;
        for coord in coords {
            self.write_coord(coord)?;
        }
        Ok(())
    }

    /// Write the element count of a multi-geometry followed by its delta-chained IDs.
    fn write_multi_header(&mut self, count: usize, ids: Option<&[i64]>) -> Result<()> {
        self.write_count(count)?;
        if let Some(ids) = ids {
            let mut last = 0_i64;
            for &id in ids {
                let delta = id.checked_sub(last).ok_or(GeoWireError::Overflow)?;
                write_varint(&mut self.buf, delta)?;
                last = id;
            }
        }
        Ok(())
    }

    pub(super) fn write_point<C: CoordTrait>(&mut self, geom: &Point<C>) -> Result<()> {
        match geom.coord() {
            Some(coord) => self.write_coord(&coord),
            None => Err(GeoWireError::Malformed(
                "TWKB cannot encode an empty point inside a multipoint".to_string(),
            )),
        }
    }

    pub(super) fn write_line_string<C: CoordTrait>(&mut self, geom: &LineString<C>) -> Result<()> {
        self.write_coords(geom.coords())
    }

    pub(super) fn write_polygon<C: CoordTrait>(&mut self, geom: &Polygon<C>) -> Result<()> {
        self.write_count(geom.num_rings())?;
        for ring in geom.rings() {
            self.write_coords(ring.coords())?;
        }
        Ok(())
    }

    pub(super) fn write_multi_point<C: CoordTrait>(
        &mut self,
        geom: &MultiPoint<C>,
        ids: Option<&[i64]>,
    ) -> Result<()> {
        self.write_multi_header(geom.num_points(), ids)?;
        for point in geom.points() {
            self.write_point(point)?;
        }
        Ok(())
    }

    pub(super) fn write_multi_line_string<C: CoordTrait>(
        &mut self,
        geom: &MultiLineString<C>,
        ids: Option<&[i64]>,
    ) -> Result<()> {
        self.write_multi_header(geom.num_line_strings(), ids)?;
        for line_string in geom.line_strings() {
            self.write_line_string(line_string)?;
        }
        Ok(())
    }

    pub(super) fn write_multi_polygon<C: CoordTrait>(
        &mut self,
        geom: &MultiPolygon<C>,
        ids: Option<&[i64]>,
    ) -> Result<()> {
        self.write_multi_header(geom.num_polygons(), ids)?;
        for polygon in geom.polygons() {
            self.write_polygon(polygon)?;
        }
        Ok(())
    }

    /// The scaled minimum and maximum of each axis, if any coordinate was written.
    pub(super) fn extent(&self) -> Option<([i64; 4], [i64; 4])> {
        (self.num_coords > 0).then_some((self.mins, self.maxs))
    }

    pub(super) fn into_inner(self) -> Vec<u8> {
        self.buf
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::Xy;

    #[test]
    fn delta_chain_spans_rings() {
        let polygon = Polygon::new(
            LineString::new(vec![Xy::new(0., 0.), Xy::new(10., 0.), Xy::new(0., 0.)]),
            vec![LineString::new(vec![
                Xy::new(1., 1.),
                Xy::new(2., 1.),
                Xy::new(1., 1.),
            ])],
        );
        let mut encoder = BodyEncoder::new([0; 4]);
        encoder.write_polygon(&polygon).unwrap();
        assert_eq!(encoder.extent(), Some(([0, 0, 0, 0], [10, 1, 0, 0])));
        assert_eq!(
            encoder.into_inner(),
            vec![
                0x02, // rings
                0x03, 0x00, 0x00, 0x14, 0x00, 0x13, 0x00, // exterior
                // the hole continues from (0 0), not from the origin of a new chain
                0x03, 0x02, 0x02, 0x02, 0x00, 0x01, 0x00,
            ]
        );
    }

    #[test]
    fn ids_are_delta_chained() {
        let multi_point = MultiPoint::from_iter([Xy::new(1., 1.), Xy::new(2., 2.)]);
        let mut encoder = BodyEncoder::new([0; 4]);
        encoder
            .write_multi_point(&multi_point, Some(&[10, 7]))
            .unwrap();
        assert_eq!(
            encoder.into_inner(),
            vec![0x02, 0x14, 0x05, 0x02, 0x02, 0x02, 0x02]
        );
    }

    #[test]
    fn empty_member_point() {
        let multi_point = MultiPoint::new(vec![Point::new(Xy::new(1., 1.)), Point::empty()]);
        let mut encoder = BodyEncoder::new([0; 4]);
        assert!(matches!(
            encoder.write_multi_point(&multi_point, None),
            Err(GeoWireError::Malformed(_))
        ));
    }
}
