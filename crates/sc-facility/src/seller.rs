//! Seller unit: sales against local stock.

use sc_core::{FacilityId, SkuId};

use crate::{
    Action, Effect, Shortfall, ShortfallCause, StockLedger, TickContext, UnitError, UnitKind,
    UnitPending,
};

/// Sells one configured SKU against the facility's stock.  Demand beyond
/// what is on hand is partially filled and the remainder reported as a
/// shortfall, never carried over to the next tick.
#[derive(Debug)]
pub struct SellerUnit {
    sku: SkuId,
}

impl SellerUnit {
    pub fn new(sku: SkuId) -> Self {
        Self { sku }
    }

    pub fn sku(&self) -> SkuId {
        self.sku
    }

    pub fn compute(
        &self,
        facility: FacilityId,
        ctx: &TickContext<'_>,
        ledger: &mut StockLedger,
        actions: &[Action],
    ) -> Result<UnitPending, UnitError> {
        let mut pending = UnitPending::new(facility, UnitKind::Seller);
        let stock = ctx
            .stock(facility)
            .expect("seller unit computes for its own facility");

        for action in actions {
            let Action::Demand { quantity } = *action else {
                continue;
            };
            let sold = ledger.available(stock, self.sku).min(quantity);
            if sold > 0 {
                ledger.withdraw(self.sku, sold);
                pending.effects.push(Effect::StockWithdrawn {
                    facility,
                    sku: self.sku,
                    quantity: sold,
                });
            }
            if sold < quantity {
                pending.shortfalls.push(Shortfall {
                    facility,
                    sku: self.sku,
                    quantity: quantity - sold,
                    cause: ShortfallCause::InsufficientStock,
                });
            }
        }

        Ok(pending)
    }
}
