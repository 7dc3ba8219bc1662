//! Grid coordinates

use serde::{Deserialize, Serialize};
use std::fmt;

/// Integer coordinate of a grid cell.
///
/// `x` grows eastward and `y` grows northward. Positions are always inside
/// the grid they were issued by; off-grid targets are represented as `None`
/// by [`ForestGrid::offset`](crate::grid::ForestGrid::offset).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct GridPos {
    pub x: usize,
    pub y: usize,
}

impl GridPos {
    #[must_use]
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }
}

impl From<(usize, usize)> for GridPos {
    fn from((x, y): (usize, usize)) -> Self {
        Self { x, y }
    }
}

impl fmt::Display for GridPos {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
