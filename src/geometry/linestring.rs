use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;

/// An ordered sequence of same-dimension coordinates. May be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineString<C: CoordTrait>(Vec<C>);

/// A closed line string bounding a polygon. Closure is not enforced.
pub type LinearRing<C> = LineString<C>;

impl<C: CoordTrait> LineString<C> {
    pub fn new(coords: Vec<C>) -> Self {
        Self(coords)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn coords(&self) -> &[C] {
        &self.0
    }

    pub fn coord(&self, i: usize) -> Option<&C> {
        self.0.get(i)
    }

    pub fn num_coords(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Whether the first and last coordinates are equal.
    pub fn is_closed(&self) -> bool {
        match (self.0.first(), self.0.last()) {
            (Some(first), Some(last)) => first == last,
            _ => true,
        }
    }

    pub fn into_inner(self) -> Vec<C> {
        self.0
    }
}

impl<C: CoordTrait> From<Vec<C>> for LineString<C> {
    fn from(value: Vec<C>) -> Self {
        Self::new(value)
    }
}

impl<C: CoordTrait> FromIterator<C> for LineString<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}
