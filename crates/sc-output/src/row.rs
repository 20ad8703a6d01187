//! Plain data row types written by output backends.

/// Summary statistics for one committed tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickSummaryRow {
    pub tick:            u64,
    pub deliveries:      u64,
    pub orders_placed:   u64,
    pub units_sold:      u64,
    pub lots_produced:   u64,
    /// Total units of unmet demand and rejected placements this tick.
    pub shortfall_units: u64,
    pub route_failures:  u64,
}

/// One completed delivery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeliveryRow {
    pub tick:        u64,
    pub order_id:    u64,
    pub sku:         u16,
    pub origin:      u32,
    pub destination: u32,
    pub quantity:    u32,
    /// Ticks from order placement to delivery.
    pub lead_ticks:  u64,
}
