//! Integer grid coordinates shared by configuration and pathfinding.

use std::fmt;

/// A cell position on the world grid, `(x, y)` with `(0, 0)` top-left.
#[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CellCoord {
    pub x: u32,
    pub y: u32,
}

impl CellCoord {
    #[inline]
    pub const fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Manhattan distance to `other`.
    ///
    /// This is a lower bound on any traversable path length and is used only
    /// for sanity checks — travel times always come from the blocked-aware
    /// grid path, never from coordinate distance.
    #[inline]
    pub fn manhattan(self, other: CellCoord) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }
}

impl fmt::Display for CellCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}
