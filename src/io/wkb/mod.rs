//! Reading and writing ISO WKB and PostGIS EWKB.
//!
//! Writers always emit the ISO dimension offsets (+1000, +2000, +3000). Readers additionally
//! accept the EWKB high-bit Z and M flags, so buffers produced by PostGIS decode as well.

mod api;
mod common;
mod reader;
mod writer;

pub use api::{from_wkb, to_ewkb, to_wkb};
pub use common::Endianness;
pub use reader::WkbRecord;
pub use writer::{
    geometry_wkb_size, line_string_wkb_size, multi_line_string_wkb_size, multi_point_wkb_size,
    multi_polygon_wkb_size, point_wkb_size, polygon_wkb_size, WkbWriteOptions, WkbWriter,
};
