use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::geometry::Polygon;

/// An ordered collection of polygons. An empty collection is a valid value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiPolygon<C: CoordTrait>(Vec<Polygon<C>>);

impl<C: CoordTrait> MultiPolygon<C> {
    pub fn new(polygons: Vec<Polygon<C>>) -> Self {
        Self(polygons)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn polygons(&self) -> &[Polygon<C>] {
        &self.0
    }

    pub fn num_polygons(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<Polygon<C>> {
        self.0
    }
}

impl<C: CoordTrait> From<Vec<Polygon<C>>> for MultiPolygon<C> {
    fn from(value: Vec<Polygon<C>>) -> Self {
        Self::new(value)
    }
}
