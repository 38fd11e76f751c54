//! Coordinate tuples for the four dimension variants.

use std::fmt::Debug;

use serde::{Deserialize, Serialize};

use crate::datatypes::Dimension;
use crate::geometry::{AnyGeometry, Geometry};

/// A trait for accessing data from a coordinate tuple of a fixed dimension.
///
/// The dimension is part of the type, so a `Point<Xyz>` can never hold an XY tuple.
pub trait CoordTrait:
    Copy + Debug + Default + PartialEq + Send + Sync + Serialize + 'static
{
    /// Native dimension of the coordinate tuple
    const DIMENSION: Dimension;

    /// Access the n'th (0-based) element of the tuple, in x, y, [z], [m] order.
    /// May panic if n >= DIMENSION.
    /// See also [`nth()`](Self::nth).
    fn nth_unchecked(&self, n: usize) -> f64;

    /// Access the n'th (0-based) element of the tuple, in x, y, [z], [m] order.
    fn nth(&self, n: usize) -> Option<f64> {
        if n < Self::DIMENSION.size() {
            Some(self.nth_unchecked(n))
        } else {
            None
        }
    }

    /// Build a tuple from the first `DIMENSION.size()` ordinates.
    fn from_ordinates(ordinates: &[f64; 4]) -> Self;

    /// x component of this coord
    fn x(&self) -> f64;

    /// y component of this coord
    fn y(&self) -> f64;

    /// z component of this coord, if the dimension has one
    fn z(&self) -> Option<f64> {
        None
    }

    /// m component of this coord, if the dimension has one
    fn m(&self) -> Option<f64> {
        None
    }

    /// Iterate over the ordinates of this tuple.
    fn ordinates(&self) -> impl Iterator<Item = f64> + '_ {
        (0..Self::DIMENSION.size()).map(|n| self.nth_unchecked(n))
    }

    /// Narrow a dimension-erased geometry to this dimension, handing it back on mismatch.
    fn narrow(geom: AnyGeometry) -> std::result::Result<Geometry<Self>, AnyGeometry>;

    /// Erase the dimension of a geometry.
    fn widen(geom: Geometry<Self>) -> AnyGeometry;
}

/// A two-dimensional coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xy {
    pub x: f64,
    pub y: f64,
}

/// A three-dimensional coordinate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xyz {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

/// A two-dimensional coordinate with a measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xym {
    pub x: f64,
    pub y: f64,
    pub m: f64,
}

/// A three-dimensional coordinate with a measure.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Xyzm {
    pub x: f64,
    pub y: f64,
    pub z: f64,
    pub m: f64,
}

impl Xy {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl Xyz {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Xym {
    pub fn new(x: f64, y: f64, m: f64) -> Self {
        Self { x, y, m }
    }
}

impl Xyzm {
    pub fn new(x: f64, y: f64, z: f64, m: f64) -> Self {
        Self { x, y, z, m }
    }
}

impl CoordTrait for Xy {
    const DIMENSION: Dimension = Dimension::XY;

    fn nth_unchecked(&self, n: usize) -> f64 {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("XY coordinate has no ordinate {n}"),
        }
    }

    fn from_ordinates(ordinates: &[f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1])
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn narrow(geom: AnyGeometry) -> std::result::Result<Geometry<Self>, AnyGeometry> {
        match geom {
            AnyGeometry::XY(g) => Ok(g),
            other => Err(other),
        }
    }

    fn widen(geom: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::XY(geom)
    }
}

impl CoordTrait for Xyz {
    const DIMENSION: Dimension = Dimension::XYZ;

    fn nth_unchecked(&self, n: usize) -> f64 {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            _ => panic!("XYZ coordinate has no ordinate {n}"),
        }
    }

    fn from_ordinates(ordinates: &[f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1], ordinates[2])
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        Some(self.z)
    }

    fn narrow(geom: AnyGeometry) -> std::result::Result<Geometry<Self>, AnyGeometry> {
        match geom {
            AnyGeometry::XYZ(g) => Ok(g),
            other => Err(other),
        }
    }

    fn widen(geom: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::XYZ(geom)
    }
}

impl CoordTrait for Xym {
    const DIMENSION: Dimension = Dimension::XYM;

    fn nth_unchecked(&self, n: usize) -> f64 {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.m,
            _ => panic!("XYM coordinate has no ordinate {n}"),
        }
    }

    fn from_ordinates(ordinates: &[f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1], ordinates[2])
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn narrow(geom: AnyGeometry) -> std::result::Result<Geometry<Self>, AnyGeometry> {
        match geom {
            AnyGeometry::XYM(g) => Ok(g),
            other => Err(other),
        }
    }

    fn widen(geom: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::XYM(geom)
    }
}

impl CoordTrait for Xyzm {
    const DIMENSION: Dimension = Dimension::XYZM;

    fn nth_unchecked(&self, n: usize) -> f64 {
        match n {
            0 => self.x,
            1 => self.y,
            2 => self.z,
            3 => self.m,
            _ => panic!("XYZM coordinate has no ordinate {n}"),
        }
    }

    fn from_ordinates(ordinates: &[f64; 4]) -> Self {
        Self::new(ordinates[0], ordinates[1], ordinates[2], ordinates[3])
    }

    fn x(&self) -> f64 {
        self.x
    }

    fn y(&self) -> f64 {
        self.y
    }

    fn z(&self) -> Option<f64> {
        Some(self.z)
    }

    fn m(&self) -> Option<f64> {
        Some(self.m)
    }

    fn narrow(geom: AnyGeometry) -> std::result::Result<Geometry<Self>, AnyGeometry> {
        match geom {
            AnyGeometry::XYZM(g) => Ok(g),
            other => Err(other),
        }
    }

    fn widen(geom: Geometry<Self>) -> AnyGeometry {
        AnyGeometry::XYZM(geom)
    }
}
