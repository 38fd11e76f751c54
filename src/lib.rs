//! Codecs between an in-memory, multi-dimensional vector geometry model and the common wire
//! encodings of that model: ISO [WKB](io::wkb) and its SRID-carrying extension EWKB,
//! [WKT](io::wkt) and EWKT, and the compact variable-length [TWKB](io::twkb).
//!
//! Every decoder implements [`GeometryRecord`], every encoder implements [`GeometryWriter`].
//!
//! ```
//! use geowire::io::wkt::WktRecord;
//! use geowire::GeometryRecord;
//!
//! let record = WktRecord::try_new("SRID=4326;POINT Z (1 1 80)").unwrap();
//! assert_eq!(record.srid(), Some(4326));
//! let point = record.get_point_z().unwrap();
//! assert_eq!(point.coord().unwrap().z, 80.0);
//! ```

#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![cfg_attr(not(test), deny(unused_crate_dependencies))]

pub use trait_::{GeometryRecord, GeometryWriter};

pub mod coord;
pub mod datatypes;
pub mod error;
pub mod geometry;
pub mod io;
#[cfg(test)]
pub(crate) mod test;
pub mod trait_;
