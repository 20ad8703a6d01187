//! Immutable, precomputed paths between two cells.

use sc_core::CellCoord;

/// The result of a path query: an ordered waypoint sequence from source to
/// destination over traversable cells only.
///
/// Invariant: `length() == waypoints.len() - 1` — the number of traversable
/// steps, *not* the straight-line or Manhattan distance.  A route between a
/// cell and itself has one waypoint and length 0.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    waypoints: Vec<CellCoord>,
}

impl Route {
    /// Build a route from a non-empty waypoint sequence.
    ///
    /// Only `WorldGrid::path` constructs routes in practice; this is public
    /// for tests and custom planners.
    ///
    /// # Panics
    /// Debug-asserts that `waypoints` is non-empty.
    pub fn new(waypoints: Vec<CellCoord>) -> Self {
        debug_assert!(!waypoints.is_empty(), "a route has at least its source cell");
        Self { waypoints }
    }

    /// Number of traversable steps from source to destination.
    #[inline]
    pub fn length(&self) -> usize {
        self.waypoints.len() - 1
    }

    /// The full waypoint sequence, source first, destination last.
    #[inline]
    pub fn waypoints(&self) -> &[CellCoord] {
        &self.waypoints
    }

    /// The cell at `position_index` steps along the route.
    ///
    /// `position_index` must be in `[0, length()]`.
    #[inline]
    pub fn cell_at(&self, position_index: usize) -> CellCoord {
        self.waypoints[position_index]
    }

    /// `true` if the source and destination are the same cell.
    pub fn is_trivial(&self) -> bool {
        self.length() == 0
    }

    /// Trip duration in ticks at `steps_per_tick` cells per tick (ceiling
    /// division so a vehicle never arrives before the correct tick).
    ///
    /// A trivial route still costs one tick: arrival is observed on the
    /// first `advance`, never at assignment time.
    pub fn travel_ticks(&self, steps_per_tick: u32) -> u64 {
        (self.length() as u64).div_ceil(steps_per_tick.max(1) as u64).max(1)
    }
}
