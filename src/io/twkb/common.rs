use serde::{Deserialize, Serialize};

use crate::datatypes::{Dimension, GeometryKind, GeometryType};
use crate::error::{GeoWireError, Result};
use crate::io::twkb::varint::{zigzag_decode, zigzag_encode};

pub(crate) const BBOX_FLAG: u8 = 0b0000_0001;
pub(crate) const SIZE_FLAG: u8 = 0b0000_0010;
pub(crate) const ID_LIST_FLAG: u8 = 0b0000_0100;
pub(crate) const EXTENDED_DIMENSIONS_FLAG: u8 = 0b0000_1000;
pub(crate) const EMPTY_FLAG: u8 = 0b0001_0000;

const Z_FLAG: u8 = 0b0000_0001;
const M_FLAG: u8 = 0b0000_0010;

/// Range of the XY precision, stored zigzag-encoded in four bits.
pub(crate) const PRECISION_RANGE: std::ops::RangeInclusive<i8> = -8..=7;
/// Range of the Z and M precisions, stored zigzag-encoded in three bits.
pub(crate) const EXTENDED_PRECISION_RANGE: std::ops::RangeInclusive<i8> = -4..=3;

/// The type byte, metadata byte and extended dimensions byte of a TWKB geometry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct TwkbHeader {
    pub(crate) kind: GeometryKind,
    pub(crate) dimension: Dimension,
    pub(crate) precision: i8,
    pub(crate) z_precision: i8,
    pub(crate) m_precision: i8,
    pub(crate) has_bbox: bool,
    pub(crate) has_size: bool,
    pub(crate) has_ids: bool,
    pub(crate) is_empty: bool,
}

impl TwkbHeader {
    pub(crate) fn geometry_type(&self) -> GeometryType {
        GeometryType::new(self.kind, self.dimension)
    }

    /// The decimal exponent of each ordinate, in x, y, z, m order with absent axes skipped.
    pub(crate) fn axis_precisions(&self) -> [i8; 4] {
        let p = self.precision;
        match self.dimension {
            Dimension::XY => [p, p, 0, 0],
            Dimension::XYZ => [p, p, self.z_precision, 0],
            Dimension::XYM => [p, p, self.m_precision, 0],
            Dimension::XYZM => [p, p, self.z_precision, self.m_precision],
        }
    }

    pub(crate) fn type_byte(&self) -> u8 {
        // zigzag of -8..=7 fits the high nibble
        ((zigzag_encode(self.precision.into()) as u8) << 4) | u8::from(self.kind)
    }

    pub(crate) fn metadata_byte(&self) -> u8 {
        let mut flags = 0;
        if self.has_bbox {
            flags |= BBOX_FLAG;
        }
        if self.has_size {
            flags |= SIZE_FLAG;
        }
        if self.has_ids {
            flags |= ID_LIST_FLAG;
        }
        if self.dimension != Dimension::XY {
            flags |= EXTENDED_DIMENSIONS_FLAG;
        }
        if self.is_empty {
            flags |= EMPTY_FLAG;
        }
        flags
    }

    /// The extended dimensions byte, if this header needs one.
    pub(crate) fn extended_dimensions_byte(&self) -> Option<u8> {
        if self.dimension == Dimension::XY {
            return None;
        }
        let mut byte = 0;
        if self.dimension.has_z() {
            byte |= Z_FLAG | ((zigzag_encode(self.z_precision.into()) as u8) << 2);
        }
        if self.dimension.has_m() {
            byte |= M_FLAG | ((zigzag_encode(self.m_precision.into()) as u8) << 5);
        }
        Some(byte)
    }

    /// Decode the type and metadata bytes. `extended` is called to fetch the extended
    /// dimensions byte when the metadata announces one.
    pub(crate) fn decode(
        type_byte: u8,
        metadata: u8,
        extended: impl FnOnce() -> Result<u8>,
    ) -> Result<Self> {
        let kind = GeometryKind::try_from(type_byte & 0x0f).map_err(|_| {
            GeoWireError::Malformed(format!(
                "unknown TWKB geometry type {}",
                type_byte & 0x0f
            ))
        })?;
        let precision = zigzag_decode(u64::from(type_byte >> 4)) as i8;

        let (dimension, z_precision, m_precision) = if metadata & EXTENDED_DIMENSIONS_FLAG != 0 {
            let byte = extended()?;
            let has_z = byte & Z_FLAG != 0;
            let has_m = byte & M_FLAG != 0;
            let z_precision = zigzag_decode(u64::from((byte >> 2) & 0b111)) as i8;
            let m_precision = zigzag_decode(u64::from(byte >> 5)) as i8;
            (Dimension::from_flags(has_z, has_m), z_precision, m_precision)
        } else {
            (Dimension::XY, 0, 0)
        };

        Ok(Self {
            kind,
            dimension,
            precision,
            z_precision,
            m_precision,
            has_bbox: metadata & BBOX_FLAG != 0,
            has_size: metadata & SIZE_FLAG != 0,
            has_ids: metadata & ID_LIST_FLAG != 0,
            is_empty: metadata & EMPTY_FLAG != 0,
        })
    }
}

/// The scale factor between real and stored values: stored = round(value × 10^precision).
pub(crate) fn scale_ordinate(value: f64, precision: i8) -> Result<i64> {
    if !value.is_finite() {
        return Err(GeoWireError::Malformed(format!(
            "TWKB cannot encode the ordinate {value}"
        )));
    }
    let factor = 10_f64.powi(i32::from(precision.unsigned_abs()));
    let scaled = if precision >= 0 {
        (value * factor).round()
    } else {
        (value / factor).round()
    };
    if scaled < i64::MIN as f64 || scaled >= i64::MAX as f64 {
        return Err(GeoWireError::Overflow);
    }
    Ok(scaled as i64)
}

pub(crate) fn unscale_ordinate(value: i64, precision: i8) -> f64 {
    let factor = 10_f64.powi(i32::from(precision.unsigned_abs()));
    if precision >= 0 {
        value as f64 / factor
    } else {
        value as f64 * factor
    }
}

/// The extent of a TWKB geometry, as stored in its optional bounding box.
///
/// Values are in real units, rounded to the geometry's precision.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TwkbBoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
    pub min_z: Option<f64>,
    pub max_z: Option<f64>,
    pub min_m: Option<f64>,
    pub max_m: Option<f64>,
}

impl TwkbBoundingBox {
    /// Build from per-axis minimums and maximums, in x, y, z, m order with absent axes skipped.
    pub(crate) fn from_axes(dimension: Dimension, mins: [f64; 4], maxs: [f64; 4]) -> Self {
        let (z, m) = match dimension {
            Dimension::XY => (None, None),
            Dimension::XYZ => (Some(2), None),
            Dimension::XYM => (None, Some(2)),
            Dimension::XYZM => (Some(2), Some(3)),
        };
        Self {
            min_x: mins[0],
            min_y: mins[1],
            max_x: maxs[0],
            max_y: maxs[1],
            min_z: z.map(|i| mins[i]),
            max_z: z.map(|i| maxs[i]),
            min_m: m.map(|i| mins[i]),
            max_m: m.map(|i| maxs[i]),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn header_bytes() {
        let header = TwkbHeader {
            kind: GeometryKind::LineString,
            dimension: Dimension::XY,
            precision: 1,
            z_precision: 0,
            m_precision: 0,
            has_bbox: false,
            has_size: false,
            has_ids: false,
            is_empty: false,
        };
        assert_eq!(header.type_byte(), 0x22);
        assert_eq!(header.metadata_byte(), 0x00);
        assert_eq!(header.extended_dimensions_byte(), None);

        let decoded = TwkbHeader::decode(0x22, 0x00, || unreachable!()).unwrap();
        assert_eq!(decoded, header);
    }

    #[test]
    fn extended_dimensions() {
        let header = TwkbHeader {
            kind: GeometryKind::Point,
            dimension: Dimension::XYZM,
            precision: -8,
            z_precision: 3,
            m_precision: -4,
            has_bbox: true,
            has_size: true,
            has_ids: false,
            is_empty: false,
        };
        assert_eq!(header.type_byte(), 0xf1);
        assert_eq!(header.metadata_byte(), 0x0b);
        let extended = header.extended_dimensions_byte().unwrap();
        assert_eq!(extended, 0b111_110_11);

        let decoded = TwkbHeader::decode(0xf1, 0x0b, || Ok(extended)).unwrap();
        assert_eq!(decoded, header);
        assert_eq!(decoded.axis_precisions(), [-8, -8, 3, -4]);
    }

    #[test]
    fn unknown_type() {
        assert!(TwkbHeader::decode(0x07, 0, || Ok(0)).is_err());
        assert!(TwkbHeader::decode(0x00, 0, || Ok(0)).is_err());
    }

    #[test]
    fn scaling() {
        assert_eq!(scale_ordinate(30.1, 1).unwrap(), 301);
        assert_eq!(scale_ordinate(-2.5, 0).unwrap(), -3);
        assert_eq!(scale_ordinate(1234., -2).unwrap(), 12);
        assert_eq!(unscale_ordinate(12, -2), 1200.);
        assert_eq!(unscale_ordinate(301, 1), 30.1);
        assert!(matches!(
            scale_ordinate(f64::NAN, 0),
            Err(GeoWireError::Malformed(_))
        ));
        assert!(matches!(
            scale_ordinate(1e300, 7),
            Err(GeoWireError::Overflow)
        ));
    }
}
