mod body;
mod header;

use crate::datatypes::GeometryType;
use crate::error::Result;
use crate::geometry::AnyGeometry;
use crate::io::decode_failure;
use crate::trait_::GeometryRecord;

use header::{read_header, WktHeader};

/// A WKT or EWKT encoded geometry.
///
/// Construction parses the optional `SRID=<n>;` prefix, the type keyword and its dimension. When
/// no `Z`, `M` or `ZM` suffix is given the dimension is inferred from the first coordinate tuple,
/// so `POINT (1 2 3)` is a `Point Z`. Trailing content after the body is rejected here. The body
/// itself is parsed by each accessor call.
#[derive(Debug, Clone, Copy)]
pub struct WktRecord<'a> {
    text: &'a str,
    header: WktHeader,
}

impl<'a> WktRecord<'a> {
    pub fn try_new(text: &'a str) -> Result<Self> {
        let header = read_header(text).map_err(|err| decode_failure("WKT", err))?;
        log::trace!(
            "WKT record {} (srid {:?})",
            header.geometry_type,
            header.srid
        );
        Ok(Self { text, header })
    }

    /// Whether this is EWKT carrying an SRID.
    pub fn is_extended(&self) -> bool {
        self.header.srid.is_some()
    }

    pub fn text(&self) -> &'a str {
        self.text
    }
}

impl<'a> GeometryRecord for WktRecord<'a> {
    fn geometry_type(&self) -> GeometryType {
        self.header.geometry_type
    }

    fn srid(&self) -> Option<i32> {
        self.header.srid
    }

    fn is_null(&self) -> bool {
        self.header.is_empty
    }

    fn get_geometry(&self) -> Result<AnyGeometry> {
        if self.header.is_empty {
            return Ok(AnyGeometry::empty(self.header.geometry_type));
        }
        body::read_any_geometry(self.header.body(self.text), self.header.geometry_type)
            .map_err(|err| decode_failure("WKT", err))
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::coord::{Xy, Xyz, Xyzm};
    use crate::datatypes::{Dimension, GeometryKind};
    use crate::error::GeoWireError;
    use crate::geometry::{LineString, Point, Polygon};
    use crate::test::polygon::p1;

    #[test]
    fn ewkt_point_z() {
        let record = WktRecord::try_new("SRID=4326;POINT Z (1 1 80)").unwrap();
        assert_eq!(record.srid(), Some(4326));
        assert!(record.is_extended());
        assert!(!record.is_null());
        assert_eq!(
            record.get_point_z().unwrap(),
            Point::new(Xyz::new(1., 1., 80.))
        );
        assert!(matches!(
            record.get_point(),
            Err(GeoWireError::InvalidGeometryType { .. })
        ));
    }

    #[test]
    fn fused_and_spaced_suffix() {
        let expected = Point::new(Xyzm::new(1., 2., 3., 4.));
        for text in ["POINTZM(1 2 3 4)", "point zm (1 2 3 4)", "Point(1 2 3 4)"] {
            let record = WktRecord::try_new(text).unwrap();
            assert_eq!(record.get_point_zm().unwrap(), expected, "{text}");
        }
    }

    #[test]
    fn polygon_with_holes() {
        let text = "POLYGON ((-111 45, -111 41, -104 41, -104 45, -111 45), \
                    (-110 44, -110 42, -105 42, -105 44, -110 44), \
                    (-108.5 43.5, -108 43, -107.5 43.5, -108.5 43.5))";
        let record = WktRecord::try_new(text).unwrap();
        let polygon = record.get_polygon().unwrap();
        assert_eq!(polygon, p1());
        assert_eq!(polygon.holes().len(), 2);
    }

    #[test]
    fn empty() {
        let record = WktRecord::try_new("LINESTRING EMPTY").unwrap();
        assert!(record.is_null());
        assert_eq!(record.get_line_string().unwrap(), LineString::<Xy>::empty());

        let record = WktRecord::try_new("POLYGON Z EMPTY").unwrap();
        assert_eq!(
            record.geometry_type(),
            GeometryType::new(GeometryKind::Polygon, Dimension::XYZ)
        );
        assert_eq!(record.get_polygon_z().unwrap(), Polygon::empty());
    }

    #[test]
    fn malformed() {
        for text in [
            "",
            "CIRCLE (1 2)",
            "POINT",
            "POINT (1 2",
            "SRID=4326POINT (1 2)",
            "POINT (1 2) garbage",
            "LINESTRING (1 2, 3)",
        ] {
            let result = WktRecord::try_new(text).and_then(|record| record.get_geometry());
            assert!(
                matches!(result, Err(GeoWireError::Malformed(_))),
                "{text:?}"
            );
        }
    }
}
