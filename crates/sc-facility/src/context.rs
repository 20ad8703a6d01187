//! Read-only view of committed world state handed to unit compute.

use sc_core::{FacilityId, OrderBook, Tick};

use crate::{Facility, RouteTable, Stock};

/// Borrowed snapshot of the committed world for one tick's compute phase.
/// Units read through this instead of holding references into the world,
/// which keeps compute free of aliasing with the commit pass.
#[derive(Clone, Copy)]
pub struct TickContext<'a> {
    pub tick:       Tick,
    pub facilities: &'a [Facility],
    pub orders:     &'a OrderBook,
    pub routes:     &'a RouteTable,
}

impl<'a> TickContext<'a> {
    pub fn facility(&self, id: FacilityId) -> Option<&'a Facility> {
        self.facilities.get(id.index())
    }

    pub fn stock(&self, id: FacilityId) -> Option<&'a Stock> {
        self.facility(id).map(|f| f.stock())
    }
}
