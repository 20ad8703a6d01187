//! Effects produced by unit compute and applied by the scheduler's commit
//! pass.  Effects are plain data; nothing here mutates the world.

use sc_core::{FacilityId, OrderDraft, OrderId, SkuId, VehicleId};

/// One atomic state change requested by a unit.  The scheduler validates the
/// full effect set of a tick before applying any of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// An in-transit vehicle steps along its route.
    VehicleMoved {
        facility:       FacilityId,
        vehicle:        VehicleId,
        position_index: usize,
    },
    /// An idle vehicle picks up a pending order.
    VehicleAssigned {
        facility: FacilityId,
        vehicle:  VehicleId,
        order:    OrderId,
    },
    /// An arrived vehicle hands its payload to the destination facility.
    OrderDelivered {
        facility: FacilityId,
        vehicle:  VehicleId,
        order:    OrderId,
    },
    /// A consumer unit places a new order with its source facility.
    OrderPlaced(OrderDraft),
    /// A seller unit removes sold stock.
    StockWithdrawn {
        facility: FacilityId,
        sku:      SkuId,
        quantity: u32,
    },
    /// A manufacture unit converts input stock into output stock.
    LotsProduced {
        facility:        FacilityId,
        input_sku:       SkuId,
        input_quantity:  u32,
        output_sku:      SkuId,
        output_quantity: u32,
        lots:            u32,
    },
}
