//! The world grid: a 2D cell map with per-cell block flags.
//!
//! # Data layout
//!
//! Blocks are stored as a dense row-major `Vec<bool>` — for the grid sizes
//! this simulator deals in (tens to low hundreds per side), a dense bitmap
//! beats a hash set on both lookup cost and cache behavior, and makes the
//! "blocked cells are static for a run" invariant trivial to uphold: the
//! vector is never mutated after construction.

use std::collections::VecDeque;

use sc_core::{CellCoord, GridConfig};

use crate::{GridError, GridResult, Route};

/// A 2D cell map answering path-existence and path-length queries.
pub struct WorldGrid {
    width:   u32,
    height:  u32,
    /// Row-major block flags, `true` = excluded from pathfinding.
    blocked: Vec<bool>,
}

impl WorldGrid {
    /// Build a grid from its config.  Blocked cells outside the grid bounds
    /// are rejected by the world builder before this is called; here they
    /// are simply ignored.
    pub fn new(config: &GridConfig) -> Self {
        let mut blocked = vec![false; (config.width as usize) * (config.height as usize)];
        for &cell in &config.blocked {
            if cell.x < config.width && cell.y < config.height {
                blocked[cell_index(config.width, cell)] = true;
            }
        }
        Self { width: config.width, height: config.height, blocked }
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    /// `true` if `cell` lies within the grid bounds.
    #[inline]
    pub fn in_bounds(&self, cell: CellCoord) -> bool {
        cell.x < self.width && cell.y < self.height
    }

    /// `true` if `cell` is in bounds and flagged as blocked.
    #[inline]
    pub fn is_blocked(&self, cell: CellCoord) -> bool {
        self.in_bounds(cell) && self.blocked[cell_index(self.width, cell)]
    }

    /// Shortest traversable path from `from` to `to`.
    ///
    /// Breadth-first search over the 4-connected grid; blocked cells never
    /// enter the frontier.  Neighbor expansion order is fixed (up, down,
    /// left, right) so equal-length paths resolve identically on every run.
    ///
    /// # Errors
    ///
    /// - [`GridError::OutOfBounds`] / [`GridError::Blocked`] if either
    ///   endpoint is invalid.
    /// - [`GridError::PathNotFound`] if no traversable path exists.
    pub fn path(&self, from: CellCoord, to: CellCoord) -> GridResult<Route> {
        self.check_endpoint(from)?;
        self.check_endpoint(to)?;

        if from == to {
            return Ok(Route::new(vec![from]));
        }

        // prev[cell] = the cell we reached `cell` from; INVALID_PREV for
        // unreached cells.  Doubles as the visited set.
        let mut prev = vec![INVALID_PREV; self.blocked.len()];
        let mut frontier = VecDeque::new();

        prev[cell_index(self.width, from)] = cell_index(self.width, from) as u32;
        frontier.push_back(from);

        while let Some(cell) = frontier.pop_front() {
            for neighbor in self.neighbors(cell) {
                let idx = cell_index(self.width, neighbor);
                if self.blocked[idx] || prev[idx] != INVALID_PREV {
                    continue;
                }
                prev[idx] = cell_index(self.width, cell) as u32;
                if neighbor == to {
                    return Ok(self.reconstruct(&prev, from, to));
                }
                frontier.push_back(neighbor);
            }
        }

        Err(GridError::PathNotFound { from, to })
    }

    // ── BFS internals ─────────────────────────────────────────────────────

    fn check_endpoint(&self, cell: CellCoord) -> GridResult<()> {
        if !self.in_bounds(cell) {
            return Err(GridError::OutOfBounds(cell, self.width, self.height));
        }
        if self.blocked[cell_index(self.width, cell)] {
            return Err(GridError::Blocked(cell));
        }
        Ok(())
    }

    /// In-bounds 4-connected neighbors in fixed expansion order.
    fn neighbors(&self, cell: CellCoord) -> impl Iterator<Item = CellCoord> + '_ {
        let candidates = [
            (cell.y > 0).then(|| CellCoord::new(cell.x, cell.y.wrapping_sub(1))),
            (cell.y + 1 < self.height).then(|| CellCoord::new(cell.x, cell.y + 1)),
            (cell.x > 0).then(|| CellCoord::new(cell.x.wrapping_sub(1), cell.y)),
            (cell.x + 1 < self.width).then(|| CellCoord::new(cell.x + 1, cell.y)),
        ];
        candidates.into_iter().flatten()
    }

    /// Trace `prev` back from destination to source and reverse.
    fn reconstruct(&self, prev: &[u32], from: CellCoord, to: CellCoord) -> Route {
        let mut waypoints = vec![to];
        let mut cur = cell_index(self.width, to);
        let source = cell_index(self.width, from);
        while cur != source {
            cur = prev[cur] as usize;
            waypoints.push(cell_from_index(self.width, cur));
        }
        waypoints.reverse();
        Route::new(waypoints)
    }
}

/// Sentinel for "cell not yet reached" in the predecessor array.
const INVALID_PREV: u32 = u32::MAX;

#[inline]
fn cell_index(width: u32, cell: CellCoord) -> usize {
    cell.y as usize * width as usize + cell.x as usize
}

#[inline]
fn cell_from_index(width: u32, index: usize) -> CellCoord {
    CellCoord::new((index % width as usize) as u32, (index / width as usize) as u32)
}
