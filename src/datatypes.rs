//! Geometry type tags shared by every codec.

use std::fmt::Display;

use num_enum::{IntoPrimitive, TryFromPrimitive};
use serde::{Deserialize, Serialize};

/// The dimension of a geometry's coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Dimension {
    /// Two-dimensional.
    XY,

    /// Three-dimensional.
    XYZ,

    /// XYM (2D with measure).
    XYM,

    /// XYZM (3D with measure).
    XYZM,
}

impl Dimension {
    /// Construct from the two orthogonal axis flags.
    pub fn from_flags(has_z: bool, has_m: bool) -> Self {
        match (has_z, has_m) {
            (false, false) => Dimension::XY,
            (true, false) => Dimension::XYZ,
            (false, true) => Dimension::XYM,
            (true, true) => Dimension::XYZM,
        }
    }

    /// Returns the number of dimensions.
    pub fn size(&self) -> usize {
        match self {
            Dimension::XY => 2,
            Dimension::XYZ => 3,
            Dimension::XYM => 3,
            Dimension::XYZM => 4,
        }
    }

    pub fn has_z(&self) -> bool {
        matches!(self, Dimension::XYZ | Dimension::XYZM)
    }

    pub fn has_m(&self) -> bool {
        matches!(self, Dimension::XYM | Dimension::XYZM)
    }
}

impl Display for Dimension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dimension::XY => write!(f, "XY"),
            Dimension::XYZ => write!(f, "XYZ"),
            Dimension::XYM => write!(f, "XYM"),
            Dimension::XYZM => write!(f, "XYZM"),
        }
    }
}

/// The base shape of a geometry, independent of its dimension.
///
/// The discriminants are the shared WKB and TWKB type codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, TryFromPrimitive, IntoPrimitive)]
#[repr(u8)]
pub enum GeometryKind {
    Point = 1,
    LineString = 2,
    Polygon = 3,
    MultiPoint = 4,
    MultiLineString = 5,
    MultiPolygon = 6,
}

impl GeometryKind {
    /// All six base shapes, in type code order.
    pub const ALL: [GeometryKind; 6] = [
        GeometryKind::Point,
        GeometryKind::LineString,
        GeometryKind::Polygon,
        GeometryKind::MultiPoint,
        GeometryKind::MultiLineString,
        GeometryKind::MultiPolygon,
    ];

    /// The single shape making up the elements of a multi shape.
    pub fn element_kind(&self) -> Option<GeometryKind> {
        match self {
            GeometryKind::MultiPoint => Some(GeometryKind::Point),
            GeometryKind::MultiLineString => Some(GeometryKind::LineString),
            GeometryKind::MultiPolygon => Some(GeometryKind::Polygon),
            _ => None,
        }
    }

    pub fn is_multi(&self) -> bool {
        self.element_kind().is_some()
    }
}

impl Display for GeometryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            GeometryKind::Point => "Point",
            GeometryKind::LineString => "LineString",
            GeometryKind::Polygon => "Polygon",
            GeometryKind::MultiPoint => "MultiPoint",
            GeometryKind::MultiLineString => "MultiLineString",
            GeometryKind::MultiPolygon => "MultiPolygon",
        };
        f.write_str(name)
    }
}

/// The (base shape, dimension) tag that drives all codec dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GeometryType {
    kind: GeometryKind,
    dimension: Dimension,
}

impl GeometryType {
    pub fn new(kind: GeometryKind, dimension: Dimension) -> Self {
        Self { kind, dimension }
    }

    pub fn kind(&self) -> GeometryKind {
        self.kind
    }

    pub fn dimension(&self) -> Dimension {
        self.dimension
    }

    /// Every one of the 24 (shape, dimension) combinations.
    pub fn all() -> impl Iterator<Item = GeometryType> {
        GeometryKind::ALL.into_iter().flat_map(|kind| {
            [Dimension::XY, Dimension::XYZ, Dimension::XYM, Dimension::XYZM]
                .into_iter()
                .map(move |dimension| GeometryType::new(kind, dimension))
        })
    }
}

impl Display for GeometryType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.kind)?;
        match self.dimension {
            Dimension::XY => Ok(()),
            Dimension::XYZ => write!(f, " Z"),
            Dimension::XYM => write!(f, " M"),
            Dimension::XYZM => write!(f, " ZM"),
        }
    }
}
