//! Reading and writing WKT and EWKT.
//!
//! Keywords are case-insensitive and whitespace between tokens is free. The reader accepts a
//! dimension suffix fused to the keyword (`POINTZ`) or separated from it (`POINT Z`), and
//! multipoint members with or without their own parentheses. Geometry bodies are parsed with the
//! [`wkt`] crate.

mod api;
mod reader;
mod writer;

pub use api::{from_wkt, to_ewkt, to_wkt};
pub use reader::WktRecord;
pub use writer::{WktWriteOptions, WktWriter};
