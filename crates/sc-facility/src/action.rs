//! External actions targeted at a single unit of a single facility.

use sc_core::SkuId;

/// A request submitted from outside the simulation, delivered to its target
/// unit at the start of the tick it was queued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Ask a consumer unit to place a replenishment order with its source.
    PlaceOrder { sku: SkuId, quantity: u32 },
    /// Present customer demand to a seller unit.  The SKU sold is fixed by
    /// the seller's configuration.
    Demand { quantity: u32 },
}
