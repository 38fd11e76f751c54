use serde::{Deserialize, Serialize};

use crate::coord::CoordTrait;

/// A single position, or the empty point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point<C: CoordTrait>(Option<C>);

impl<C: CoordTrait> Point<C> {
    pub fn new(coord: C) -> Self {
        Self(Some(coord))
    }

    pub fn empty() -> Self {
        Self(None)
    }

    /// The coordinate of this point, or `None` for the empty point.
    pub fn coord(&self) -> Option<C> {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }
}

impl<C: CoordTrait> From<C> for Point<C> {
    fn from(value: C) -> Self {
        Self::new(value)
    }
}

impl<C: CoordTrait> From<Option<C>> for Point<C> {
    fn from(value: Option<C>) -> Self {
        Self(value)
    }
}
