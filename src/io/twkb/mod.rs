//! Reading and writing TWKB, the compact delta-encoded binary format.
//!
//! Ordinates are scaled by a power of ten, rounded to integers and written as zigzag varint
//! deltas from the previous coordinate. The delta chain starts at zero for each top-level
//! geometry and is never reset between rings or elements.

mod api;
mod common;
mod reader;
mod varint;
mod writer;

pub use api::{from_twkb, to_twkb};
pub use common::TwkbBoundingBox;
pub use reader::TwkbRecord;
pub use writer::{TwkbWriteOptions, TwkbWriter};
