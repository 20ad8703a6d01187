//! Precomputed routes between facility pairs.

use rustc_hash::FxHashMap;

use sc_core::FacilityId;
use sc_grid::Route;

/// Cache of shortest routes keyed by ordered `(origin, destination)` pair.
/// Pairs with no path are simply absent; dispatch treats a missing entry as
/// a route failure for the order, not an error.
#[derive(Debug, Default)]
pub struct RouteTable {
    routes: FxHashMap<(FacilityId, FacilityId), Route>,
}

impl RouteTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, from: FacilityId, to: FacilityId, route: Route) {
        self.routes.insert((from, to), route);
    }

    pub fn get(&self, from: FacilityId, to: FacilityId) -> Option<&Route> {
        self.routes.get(&(from, to))
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}
