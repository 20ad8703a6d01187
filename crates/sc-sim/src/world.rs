//! The committed world state.

use sc_core::{CellCoord, FacilityId, Order, OrderBook, SkuId, VehicleId};
use sc_facility::{Facility, RouteTable};
use sc_grid::WorldGrid;

/// Everything the simulation owns: the grid, the facilities (indexed by
/// `FacilityId`), the order book, and the precomputed route cache.
///
/// Only the scheduler's commit pass mutates a `World`; everything else reads
/// it through the query methods here or a `TickContext` snapshot.
pub struct World {
    pub(crate) grid:       WorldGrid,
    pub(crate) facilities: Vec<Facility>,
    pub(crate) orders:     OrderBook,
    pub(crate) routes:     RouteTable,
}

impl World {
    pub(crate) fn new(
        grid: WorldGrid,
        facilities: Vec<Facility>,
        routes: RouteTable,
    ) -> Self {
        Self { grid, facilities, orders: OrderBook::new(), routes }
    }

    // ── Queries ───────────────────────────────────────────────────────────

    pub fn grid(&self) -> &WorldGrid {
        &self.grid
    }

    pub fn facility(&self, id: FacilityId) -> Option<&Facility> {
        self.facilities.get(id.index())
    }

    /// All facilities in ascending id order.
    pub fn facilities(&self) -> &[Facility] {
        &self.facilities
    }

    pub fn orders(&self) -> &OrderBook {
        &self.orders
    }

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    /// Committed stock level of one SKU at one facility (0 if the facility
    /// does not exist).
    pub fn stock_level(&self, facility: FacilityId, sku: SkuId) -> u32 {
        self.facility(facility)
            .map(|f| f.stock().level(sku))
            .unwrap_or(0)
    }

    /// All stocked SKUs and levels at `facility`, sorted by SKU.
    pub fn stock_levels(&self, facility: FacilityId) -> Vec<(SkuId, u32)> {
        self.facility(facility)
            .map(|f| f.stock().levels_sorted())
            .unwrap_or_default()
    }

    /// Grid positions of every in-transit vehicle, ascending by facility
    /// then vehicle id.
    pub fn vehicle_positions(&self) -> Vec<(FacilityId, VehicleId, CellCoord)> {
        let mut positions = Vec::new();
        for facility in &self.facilities {
            let Some(fleet) = facility.fleet() else { continue };
            for vehicle in fleet.iter() {
                if let Some(cell) = vehicle.current_cell() {
                    positions.push((facility.id(), vehicle.id(), cell));
                }
            }
        }
        positions
    }

    /// Orders not yet assigned to a vehicle.
    pub fn pending_order_count(&self) -> usize {
        self.orders.pending_count()
    }

    pub fn order(&self, id: sc_core::OrderId) -> Option<&Order> {
        self.orders.get(id)
    }
}
