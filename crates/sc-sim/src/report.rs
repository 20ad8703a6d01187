//! Per-tick commit summary.

use sc_core::{Order, Tick};
use sc_facility::{RouteFailure, Shortfall};

/// What one committed tick did, as returned by
/// [`TickScheduler::advance_tick`][crate::TickScheduler::advance_tick] and
/// passed to observers.
#[derive(Debug, Clone, Default)]
pub struct TickReport {
    pub tick: Tick,
    /// Orders delivered this tick, in commit order.
    pub deliveries: Vec<Order>,
    /// Demand and placements that could not be satisfied.
    pub shortfalls: Vec<Shortfall>,
    /// Orders left undispatched because no route connects their endpoints.
    pub route_failures: Vec<RouteFailure>,
    /// New orders committed this tick.
    pub orders_placed: u32,
    /// Units sold by seller units this tick.
    pub units_sold: u32,
    /// Production lots committed this tick.
    pub lots_produced: u32,
}

impl TickReport {
    pub(crate) fn new(tick: Tick) -> Self {
        Self { tick, ..Self::default() }
    }
}
