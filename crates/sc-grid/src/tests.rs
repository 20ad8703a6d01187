//! Unit tests for sc-grid.

use sc_core::{CellCoord, GridConfig};

use crate::{GridError, Route, WorldGrid};

// ── Helpers ───────────────────────────────────────────────────────────────────

fn grid(width: u32, height: u32, blocked: &[(u32, u32)]) -> WorldGrid {
    WorldGrid::new(&GridConfig {
        width,
        height,
        blocked: blocked.iter().map(|&(x, y)| CellCoord::new(x, y)).collect(),
    })
}

fn c(x: u32, y: u32) -> CellCoord {
    CellCoord::new(x, y)
}

// ── Path queries ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod path_tests {
    use super::*;

    #[test]
    fn straight_line_on_open_grid() {
        let g = grid(5, 5, &[]);
        let route = g.path(c(0, 0), c(4, 0)).unwrap();
        assert_eq!(route.length(), 4);
        assert_eq!(route.waypoints().first(), Some(&c(0, 0)));
        assert_eq!(route.waypoints().last(), Some(&c(4, 0)));
    }

    #[test]
    fn length_matches_bfs_shortest_path() {
        // On an open grid the BFS length equals the Manhattan distance.
        let g = grid(8, 8, &[]);
        let route = g.path(c(1, 1), c(6, 4)).unwrap();
        assert_eq!(route.length() as u32, c(1, 1).manhattan(c(6, 4)));
    }

    #[test]
    fn consecutive_waypoints_are_adjacent() {
        let g = grid(6, 6, &[(2, 0), (2, 1), (2, 2)]);
        let route = g.path(c(0, 0), c(5, 0)).unwrap();
        for pair in route.waypoints().windows(2) {
            assert_eq!(pair[0].manhattan(pair[1]), 1, "waypoints must be 4-connected");
        }
    }

    #[test]
    fn detour_around_wall_is_longer_than_manhattan() {
        // Vertical wall at x=2 with a gap at y=4 only.
        let g = grid(5, 5, &[(2, 0), (2, 1), (2, 2), (2, 3)]);
        let route = g.path(c(0, 0), c(4, 0)).unwrap();
        assert!(route.length() as u32 > c(0, 0).manhattan(c(4, 0)));
        // The route must thread the gap, never a blocked cell.
        assert!(route.waypoints().iter().all(|&w| !g.is_blocked(w)));
        assert!(route.waypoints().contains(&c(2, 4)));
    }

    #[test]
    fn fully_walled_off_is_path_not_found() {
        // Wall the entire column x=2: every path from left to right is cut.
        let g = grid(5, 5, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)]);
        assert_eq!(
            g.path(c(0, 0), c(4, 0)),
            Err(GridError::PathNotFound { from: c(0, 0), to: c(4, 0) })
        );
    }

    #[test]
    fn same_cell_is_trivial_route() {
        let g = grid(3, 3, &[]);
        let route = g.path(c(1, 1), c(1, 1)).unwrap();
        assert!(route.is_trivial());
        assert_eq!(route.length(), 0);
        assert_eq!(route.waypoints(), &[c(1, 1)]);
    }

    #[test]
    fn blocked_endpoint_rejected() {
        let g = grid(3, 3, &[(1, 1)]);
        assert_eq!(g.path(c(1, 1), c(0, 0)), Err(GridError::Blocked(c(1, 1))));
        assert_eq!(g.path(c(0, 0), c(1, 1)), Err(GridError::Blocked(c(1, 1))));
    }

    #[test]
    fn out_of_bounds_endpoint_rejected() {
        let g = grid(3, 3, &[]);
        assert!(matches!(g.path(c(0, 0), c(3, 0)), Err(GridError::OutOfBounds(..))));
    }

    #[test]
    fn deterministic_across_repeated_queries() {
        let g = grid(7, 7, &[(3, 3), (3, 4)]);
        let a = g.path(c(0, 0), c(6, 6)).unwrap();
        let b = g.path(c(0, 0), c(6, 6)).unwrap();
        assert_eq!(a, b);
    }
}

// ── Route invariants ──────────────────────────────────────────────────────────

#[cfg(test)]
mod route_tests {
    use super::*;

    #[test]
    fn length_is_waypoints_minus_one() {
        let route = Route::new(vec![c(0, 0), c(1, 0), c(2, 0)]);
        assert_eq!(route.length(), 2);
        assert_eq!(route.cell_at(0), c(0, 0));
        assert_eq!(route.cell_at(2), c(2, 0));
    }

    #[test]
    fn travel_ticks_is_ceiling_division() {
        let waypoints: Vec<_> = (0..=10).map(|x| c(x, 0)).collect();
        let route = Route::new(waypoints); // length 10
        assert_eq!(route.travel_ticks(3), 4); // ceil(10 / 3)
        assert_eq!(route.travel_ticks(5), 2);
        assert_eq!(route.travel_ticks(10), 1);
        assert_eq!(route.travel_ticks(11), 1);
    }

    #[test]
    fn trivial_route_still_costs_one_tick() {
        let route = Route::new(vec![c(2, 2)]);
        assert_eq!(route.travel_ticks(4), 1);
    }
}

// ── Grid flags ────────────────────────────────────────────────────────────────

#[cfg(test)]
mod grid_tests {
    use super::*;

    #[test]
    fn blocked_lookup() {
        let g = grid(4, 4, &[(1, 2)]);
        assert!(g.is_blocked(c(1, 2)));
        assert!(!g.is_blocked(c(2, 1)));
        assert!(!g.is_blocked(c(9, 9))); // out of bounds is not "blocked"
    }

    #[test]
    fn out_of_range_blocks_in_config_ignored() {
        let g = grid(2, 2, &[(5, 5)]);
        assert!(g.path(c(0, 0), c(1, 1)).is_ok());
    }
}
