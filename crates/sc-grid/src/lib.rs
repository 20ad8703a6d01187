//! `sc-grid` — the world grid and blocked-aware pathfinding.
//!
//! # Crate layout
//!
//! | Module    | Contents                                               |
//! |-----------|--------------------------------------------------------|
//! | [`grid`]  | `WorldGrid` — 2D cell map with per-cell block flags    |
//! | [`route`] | `Route` — immutable waypoint path between two cells    |
//! | [`error`] | `GridError`, `GridResult<T>`                           |
//!
//! # Path semantics
//!
//! [`WorldGrid::path`] runs breadth-first search over the 4-connected grid.
//! Blocked cells are excluded from the search frontier entirely — they are
//! never penalized, visited, or "walked around implicitly".  When no
//! traversable path exists the query returns
//! [`GridError::PathNotFound`]; callers must treat that as "no feasible
//! route" and must never substitute a straight-line distance.

pub mod error;
pub mod grid;
pub mod route;

#[cfg(test)]
mod tests;

pub use error::{GridError, GridResult};
pub use grid::WorldGrid;
pub use route::Route;
