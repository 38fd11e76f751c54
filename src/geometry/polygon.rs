use std::ops::Index;

use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::geometry::LinearRing;

/// A polygon, stored as a single list of rings.
///
/// Ring 0 is the exterior boundary and rings 1.. are holes. A polygon with no rings is the
/// empty polygon.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon<C: CoordTrait> {
    rings: Vec<LinearRing<C>>,
}

impl<C: CoordTrait> Polygon<C> {
    pub fn new(exterior: LinearRing<C>, interiors: Vec<LinearRing<C>>) -> Self {
        let mut rings = Vec::with_capacity(1 + interiors.len());
        rings.push(exterior);
        rings.extend(interiors);
        Self { rings }
    }

    /// Construct from the full ring list, exterior first.
    pub fn from_rings(rings: Vec<LinearRing<C>>) -> Self {
        Self { rings }
    }

    pub fn empty() -> Self {
        Self { rings: vec![] }
    }

    pub fn exterior(&self) -> Option<&LinearRing<C>> {
        self.rings.first()
    }

    /// All rings, exterior first.
    pub fn rings(&self) -> &[LinearRing<C>] {
        &self.rings
    }

    pub fn num_rings(&self) -> usize {
        self.rings.len()
    }

    /// A view over the interior rings. `holes()[i]` is `rings()[i + 1]`.
    pub fn holes(&self) -> Holes<'_, C> {
        Holes {
            rings: &self.rings,
            offset: 1,
        }
    }

    pub fn num_interiors(&self) -> usize {
        self.rings.len().saturating_sub(1)
    }

    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    pub fn into_rings(self) -> Vec<LinearRing<C>> {
        self.rings
    }
}

/// The interior rings of a [`Polygon`], as an index-shifted view over the polygon's own ring
/// storage.
#[derive(Debug, Clone, Copy)]
pub struct Holes<'a, C: CoordTrait> {
    rings: &'a [LinearRing<C>],
    offset: usize,
}

impl<'a, C: CoordTrait> Holes<'a, C> {
    pub fn len(&self) -> usize {
        self.rings.len().saturating_sub(self.offset)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn get(&self, i: usize) -> Option<&'a LinearRing<C>> {
        self.rings.get(i + self.offset)
    }

    pub fn iter(&self) -> std::slice::Iter<'a, LinearRing<C>> {
        self.rings
            .get(self.offset..)
            .unwrap_or_default()
            .iter()
    }
}

impl<'a, C: CoordTrait> Index<usize> for Holes<'a, C> {
    type Output = LinearRing<C>;

    fn index(&self, index: usize) -> &Self::Output {
        &self.rings[index + self.offset]
    }
}

impl<'a, C: CoordTrait> IntoIterator for Holes<'a, C> {
    type Item = &'a LinearRing<C>;
    type IntoIter = std::slice::Iter<'a, LinearRing<C>>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
