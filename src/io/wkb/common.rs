use byteorder::{BigEndian, ByteOrder, LittleEndian};
use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};

/// EWKB flag signalling a 4-byte SRID right after the type code.
pub(crate) const SRID_FLAG_BIT: u32 = 0x2000_0000;
/// EWKB (PostGIS) flag signalling a Z ordinate.
pub(crate) const Z_FLAG_BIT: u32 = 0x8000_0000;
/// EWKB (PostGIS) flag signalling an M ordinate.
pub(crate) const M_FLAG_BIT: u32 = 0x4000_0000;

/// Byte order of a WKB geometry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Endianness {
    BigEndian,
    #[default]
    LittleEndian,
}

impl TryFrom<u8> for Endianness {
    type Error = GeoWireError;

    fn try_from(value: u8) -> Result<Self> {
        match value {
            0 => Ok(Endianness::BigEndian),
            1 => Ok(Endianness::LittleEndian),
            other => Err(GeoWireError::Malformed(format!(
                "unexpected WKB byte order flag {other}"
            ))),
        }
    }
}

impl From<Endianness> for u8 {
    fn from(value: Endianness) -> Self {
        use Endianness::*;
        match value {
            BigEndian => 0,
            LittleEndian => 1,
        }
    }
}

/// A [`ByteOrder`] that knows its own WKB flag byte.
pub(crate) trait WkbByteOrder: ByteOrder {
    const ENDIANNESS: Endianness;
}

impl WkbByteOrder for LittleEndian {
    const ENDIANNESS: Endianness = Endianness::LittleEndian;
}

impl WkbByteOrder for BigEndian {
    const ENDIANNESS: Endianness = Endianness::BigEndian;
}

/// A decoded WKB type code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct WkbTypeCode {
    pub(crate) geometry_type: GeometryType,
    pub(crate) has_srid: bool,
}

impl WkbTypeCode {
    /// Decode a type code, accepting both the ISO dimension offsets (+1000, +2000, +3000) and the
    /// EWKB high-bit Z/M flags.
    pub(crate) fn decode(code: u32) -> Result<Self> {
        let has_srid = code & SRID_FLAG_BIT != 0;
        let iso_code = code & !(SRID_FLAG_BIT | Z_FLAG_BIT | M_FLAG_BIT);

        let (iso_z, iso_m) = match iso_code / 1000 {
            0 => (false, false),
            1 => (true, false),
            2 => (false, true),
            3 => (true, true),
            _ => {
                return Err(GeoWireError::Malformed(format!(
                    "unknown WKB geometry type code {code:#x}"
                )))
            }
        };
        let has_z = iso_z || code & Z_FLAG_BIT != 0;
        let has_m = iso_m || code & M_FLAG_BIT != 0;

        let kind = u8::try_from(iso_code % 1000)
            .ok()
            .and_then(|base| GeometryKind::try_from(base).ok())
            .ok_or_else(|| {
                GeoWireError::Malformed(format!("unknown WKB geometry type code {code:#x}"))
            })?;

        Ok(Self {
            geometry_type: GeometryType::new(kind, Dimension::from_flags(has_z, has_m)),
            has_srid,
        })
    }

    /// Encode with ISO dimension offsets, plus the SRID flag when requested.
    pub(crate) fn encode(&self) -> u32 {
        let offset = match self.geometry_type.dimension() {
            Dimension::XY => 0,
            Dimension::XYZ => 1000,
            Dimension::XYM => 2000,
            Dimension::XYZM => 3000,
        };
        let base = u32::from(u8::from(self.geometry_type.kind()));
        let srid = if self.has_srid { SRID_FLAG_BIT } else { 0 };
        (base + offset) | srid
    }
}
