use crate::error::Result;
use crate::geometry::AnyGeometry;
use crate::io::wkb::common::Endianness;
use crate::io::wkb::reader::WkbRecord;
use crate::io::wkb::writer::{geometry_wkb_size, WkbWriteOptions, WkbWriter};
use crate::trait_::{GeometryRecord, GeometryWriter};

/// Decode a WKB or EWKB buffer into a geometry, discarding any SRID.
pub fn from_wkb(buf: &[u8]) -> Result<AnyGeometry> {
    WkbRecord::try_new(buf)?.get_geometry()
}

/// Encode a geometry as ISO WKB in the given byte order.
pub fn to_wkb(geom: &AnyGeometry, byte_order: Endianness) -> Result<Vec<u8>> {
    write_with_options(geom, WkbWriteOptions::default().with_byte_order(byte_order))
}

/// Encode a geometry as EWKB carrying `srid`.
pub fn to_ewkb(geom: &AnyGeometry, srid: i32, byte_order: Endianness) -> Result<Vec<u8>> {
    write_with_options(geom, WkbWriteOptions::ewkb(srid).with_byte_order(byte_order))
}

fn write_with_options(geom: &AnyGeometry, options: WkbWriteOptions) -> Result<Vec<u8>> {
    let srid_len = if options.srid.is_some() { 4 } else { 0 };
    let buf = Vec::with_capacity(geometry_wkb_size(geom) + srid_len);
    let mut writer = WkbWriter::with_options(buf, options);
    writer.write_any_geometry(geom)?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::{Dimension, GeometryKind, GeometryType};
    use crate::test::sample_geometry;

    #[test]
    fn round_trip_every_type() {
        for geometry_type in GeometryType::all() {
            let geom = sample_geometry(geometry_type);
            for byte_order in [Endianness::LittleEndian, Endianness::BigEndian] {
                let buf = to_wkb(&geom, byte_order).unwrap();
                assert_eq!(buf.len(), geometry_wkb_size(&geom));
                assert_eq!(from_wkb(&buf).unwrap(), geom, "{geometry_type}");

                let buf = to_ewkb(&geom, 4326, byte_order).unwrap();
                let record = WkbRecord::try_new(&buf).unwrap();
                assert_eq!(record.srid(), Some(4326));
                assert_eq!(record.geometry_type(), geometry_type);
                assert_eq!(record.get_geometry().unwrap(), geom);
                assert_eq!(record.byte_len().unwrap(), buf.len());
            }
        }
    }

    #[test]
    fn concatenated_mixed_byte_order() {
        let first = sample_geometry(GeometryType::new(GeometryKind::Point, Dimension::XYZ));
        let second = sample_geometry(GeometryType::new(GeometryKind::MultiPolygon, Dimension::XY));
        let mut buf = to_wkb(&first, Endianness::BigEndian).unwrap();
        buf.extend(to_ewkb(&second, 3857, Endianness::LittleEndian).unwrap());

        let record = WkbRecord::try_new(&buf).unwrap();
        assert_eq!(record.byte_order(), Endianness::BigEndian);
        let next = WkbRecord::try_new_at(&buf, record.byte_len().unwrap()).unwrap();
        assert_eq!(next.byte_order(), Endianness::LittleEndian);
        assert_eq!(next.srid(), Some(3857));
        assert_eq!(next.get_geometry().unwrap(), second);
    }
}
