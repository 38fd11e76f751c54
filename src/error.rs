//! Defines [`GeoWireError`], representing all errors returned by this crate.

use std::fmt::Debug;
use thiserror::Error;

use crate::datatypes::GeometryType;

/// Enum with all errors in this crate.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum GeoWireError {
    /// A typed accessor was invoked against a payload with a different (type, dimension) tag.
    #[error("Invalid geometry type: expected {expected}, found {found}")]
    InvalidGeometryType {
        expected: GeometryType,
        found: GeometryType,
    },

    /// The input could not be decoded.
    #[error("Malformed input: {0}")]
    Malformed(String),

    /// An argument was rejected before any decoding or encoding took place.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A count or a scaled coordinate does not fit in its wire representation.
    #[error("Overflow")]
    Overflow,

    /// [std::io::Error]
    #[error(transparent)]
    IOError(#[from] std::io::Error),

    /// [std::fmt::Error]
    #[error(transparent)]
    FmtError(#[from] std::fmt::Error),
}

/// Crate-specific result type.
pub type Result<T> = std::result::Result<T, GeoWireError>;

impl From<std::num::TryFromIntError> for GeoWireError {
    fn from(_value: std::num::TryFromIntError) -> Self {
        GeoWireError::Overflow
    }
}
