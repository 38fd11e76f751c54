//! [`Display`](fmt::Display) for every geometry value, rendered as WKT.
//!
//! A precision given in the format string fixes the number of decimals, so `{:.3}` rounds
//! every ordinate to three places.

use std::fmt;

use crate::coord::CoordTrait;
use crate::geometry::{
    AnyGeometry, Geometry, LineString, MultiLineString, MultiPoint, MultiPolygon, Point, Polygon,
};
use crate::io::wkt::{WktWriteOptions, WktWriter};
use crate::trait_::GeometryWriter;

fn writer<'a, 'b>(f: &'a mut fmt::Formatter<'b>) -> WktWriter<&'a mut fmt::Formatter<'b>> {
    let options = WktWriteOptions {
        srid: None,
        precision: f.precision(),
    };
    WktWriter::with_options(f, options).allow_non_finite()
}

macro_rules! impl_fmt {
    ($struct_name:ident, $write_fn:ident) => {
        impl<C: CoordTrait> fmt::Display for $struct_name<C> {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                writer(f).$write_fn(self).map_err(|_| fmt::Error)
            }
        }
    };
}

impl_fmt!(Point, write_point);
impl_fmt!(LineString, write_line_string);
impl_fmt!(Polygon, write_polygon);
impl_fmt!(MultiPoint, write_multi_point);
impl_fmt!(MultiLineString, write_multi_line_string);
impl_fmt!(MultiPolygon, write_multi_polygon);
impl_fmt!(Geometry, write_geometry);

impl fmt::Display for AnyGeometry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writer(f)
            .write_any_geometry(self)
            .map_err(|_| fmt::Error)
    }
}
