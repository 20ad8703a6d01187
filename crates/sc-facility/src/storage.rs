//! Storage unit: the facility's stock audit.

use sc_core::FacilityId;

use crate::{StockLedger, TickContext, UnitError, UnitKind, UnitPending};

/// Audits the facility's stock against its book-keeping each tick.  Steps
/// first so a desync is caught before any other unit acts on bad numbers.
/// The stock itself lives on the facility; this unit carries no state.
#[derive(Debug, Default)]
pub struct StorageUnit;

impl StorageUnit {
    pub fn new() -> Self {
        Self
    }

    pub fn compute(
        &self,
        facility: FacilityId,
        ctx: &TickContext<'_>,
        _ledger: &mut StockLedger,
    ) -> Result<UnitPending, UnitError> {
        let stock = ctx
            .stock(facility)
            .expect("storage unit computes for its own facility");

        // Every non-delivered order destined here must hold a matching
        // inbound reservation.  A mismatch means commit book-keeping broke,
        // which is fatal for the tick.
        let booked = ctx.orders.inbound_quantity(facility);
        if booked != stock.reserved_inbound() as u64 {
            return Err(UnitError::ReservationDesync(
                facility,
                booked,
                stock.reserved_inbound(),
            ));
        }

        if stock.total() + stock.reserved_inbound() > stock.capacity() {
            return Err(UnitError::CapacityExceeded(facility, stock.capacity()));
        }

        Ok(UnitPending::new(facility, UnitKind::Storage))
    }
}
