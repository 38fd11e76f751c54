use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::geometry::Point;

/// An ordered collection of points. An empty collection is a valid value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPoint<C: CoordTrait>(Vec<Point<C>>);

impl<C: CoordTrait> MultiPoint<C> {
    pub fn new(points: Vec<Point<C>>) -> Self {
        Self(points)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn points(&self) -> &[Point<C>] {
        &self.0
    }

    pub fn num_points(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Point<C>> {
        self.0
    }
}

impl<C: CoordTrait> From<Vec<Point<C>>> for MultiPoint<C> {
    fn from(value: Vec<Point<C>>) -> Self {
        Self::new(value)
    }
}

impl<C: CoordTrait> FromIterator<C> for MultiPoint<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        Self(iter.into_iter().map(Point::new).collect())
    }
}
