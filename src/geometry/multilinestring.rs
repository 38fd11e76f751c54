use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;
use crate::geometry::LineString;

/// An ordered collection of line strings. An empty collection is a valid value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MultiLineString<C: CoordTrait>(Vec<LineString<C>>);

impl<C: CoordTrait> MultiLineString<C> {
    pub fn new(line_strings: Vec<LineString<C>>) -> Self {
        Self(line_strings)
    }

    pub fn empty() -> Self {
        Self(vec![])
    }

    pub fn line_strings(&self) -> &[LineString<C>] {
        &self.0
    }

    pub fn num_line_strings(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn into_inner(self) -> Vec<LineString<C>> {
        self.0
    }
}

impl<C: CoordTrait> From<Vec<LineString<C>>> for MultiLineString<C> {
    fn from(value: Vec<LineString<C>>) -> Self {
        Self::new(value)
    }
}
