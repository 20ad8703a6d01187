//! Consumer unit: replenishment orders against a fixed source facility.

use sc_core::{FacilityId, OrderDraft};

use crate::{
    Action, Effect, Shortfall, ShortfallCause, StockLedger, TickContext, UnitError, UnitKind,
    UnitPending,
};

/// Places replenishment orders with a single upstream source.  Capacity for
/// the ordered quantity is claimed at placement time, so a delivery can
/// never arrive to a full store.
#[derive(Debug)]
pub struct ConsumerUnit {
    source: FacilityId,
}

impl ConsumerUnit {
    pub fn new(source: FacilityId) -> Self {
        Self { source }
    }

    pub fn source(&self) -> FacilityId {
        self.source
    }

    pub fn compute(
        &self,
        facility: FacilityId,
        ctx: &TickContext<'_>,
        ledger: &mut StockLedger,
        actions: &[Action],
    ) -> Result<UnitPending, UnitError> {
        let mut pending = UnitPending::new(facility, UnitKind::Consumer);
        let stock = ctx
            .stock(facility)
            .expect("consumer unit computes for its own facility");

        for action in actions {
            let Action::PlaceOrder { sku, quantity } = *action else {
                continue;
            };
            if quantity <= ledger.headroom(stock) {
                ledger.claim_inbound(quantity);
                pending.effects.push(Effect::OrderPlaced(OrderDraft {
                    sku,
                    origin: self.source,
                    destination: facility,
                    quantity,
                    placed_tick: ctx.tick,
                }));
            } else {
                pending.shortfalls.push(Shortfall {
                    facility,
                    sku,
                    quantity,
                    cause: ShortfallCause::InsufficientCapacity,
                });
            }
        }

        Ok(pending)
    }
}
