use crate::error::Result;
use crate::geometry::AnyGeometry;
use crate::io::wkt::reader::WktRecord;
use crate::io::wkt::writer::{WktWriteOptions, WktWriter};
use crate::trait_::{GeometryRecord, GeometryWriter};

/// Parse WKT or EWKT into a geometry, discarding any SRID.
pub fn from_wkt(text: &str) -> Result<AnyGeometry> {
    WktRecord::try_new(text)?.get_geometry()
}

/// Format a geometry as WKT.
pub fn to_wkt(geom: &AnyGeometry) -> Result<String> {
    write_with_options(geom, Default::default())
}

/// Format a geometry as EWKT carrying `srid`.
pub fn to_ewkt(geom: &AnyGeometry, srid: i32) -> Result<String> {
    write_with_options(geom, WktWriteOptions::ewkt(srid))
}

fn write_with_options(geom: &AnyGeometry, options: WktWriteOptions) -> Result<String> {
    let mut writer = WktWriter::with_options(String::new(), options);
    writer.write_any_geometry(geom)?;
    Ok(writer.into_inner())
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::datatypes::GeometryType;
    use crate::test::sample_geometry;

    #[test]
    fn round_trip_every_type() {
        for geometry_type in GeometryType::all() {
            let geom = sample_geometry(geometry_type);
            let text = to_wkt(&geom).unwrap();
            assert_eq!(from_wkt(&text).unwrap(), geom, "{text}");

            let text = to_ewkt(&geom, 4326).unwrap();
            let record = WktRecord::try_new(&text).unwrap();
            assert_eq!(record.srid(), Some(4326));
            assert_eq!(record.geometry_type(), geometry_type);
            assert_eq!(record.get_geometry().unwrap(), geom);
        }
    }

    #[test]
    fn literal_round_trip() {
        let text = "SRID=4326;POINT Z (1 1 80)";
        let record = WktRecord::try_new(text).unwrap();
        let srid = record.srid().unwrap();
        let geom = record.get_geometry().unwrap();
        assert_eq!(to_ewkt(&geom, srid).unwrap(), text);
    }
}
