//! Reader and writer implementations of the supported wire encodings, plus interoperability
//! with the `geo` crate.

mod display;
pub mod geo;
pub mod twkb;
pub mod wkb;
pub mod wkt;

use crate::error::GeoWireError;

/// Log a decode failure before handing it back to the caller.
pub(crate) fn decode_failure(codec: &'static str, err: GeoWireError) -> GeoWireError {
    log::debug!("{codec} decode failed: {err}");
    err
}
