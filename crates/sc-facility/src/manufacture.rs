//! Manufacture unit: lot-based conversion of one SKU into another.

use sc_core::{FacilityId, SkuId};

use crate::{Effect, StockLedger, TickContext, UnitError, UnitKind, UnitPending};

/// Converts `inputs_per_lot` units of the input SKU into `output_per_lot`
/// units of the output SKU, up to `max_lots_per_tick` lots per tick.
///
/// Lots are all-or-nothing: a lot is produced only if its full input is on
/// hand *and* the net stock change fits the facility's headroom.  With 1.5
/// lots' worth of input, exactly one lot runs.
#[derive(Debug)]
pub struct ManufactureUnit {
    input_sku:         SkuId,
    output_sku:        SkuId,
    inputs_per_lot:    u32,
    output_per_lot:    u32,
    max_lots_per_tick: u32,
}

impl ManufactureUnit {
    pub fn new(
        input_sku: SkuId,
        output_sku: SkuId,
        inputs_per_lot: u32,
        output_per_lot: u32,
        max_lots_per_tick: u32,
    ) -> Self {
        debug_assert!(inputs_per_lot >= 1 && output_per_lot >= 1);
        Self {
            input_sku,
            output_sku,
            inputs_per_lot,
            output_per_lot,
            max_lots_per_tick,
        }
    }

    pub fn compute(
        &self,
        facility: FacilityId,
        ctx: &TickContext<'_>,
        ledger: &mut StockLedger,
    ) -> Result<UnitPending, UnitError> {
        let mut pending = UnitPending::new(facility, UnitKind::Manufacture);
        let stock = ctx
            .stock(facility)
            .expect("manufacture unit computes for its own facility");

        let mut lots = 0u32;
        while lots < self.max_lots_per_tick {
            if ledger.available(stock, self.input_sku) < self.inputs_per_lot {
                break;
            }
            // A lot frees inputs_per_lot of capacity and fills output_per_lot.
            let net_growth = self.output_per_lot.saturating_sub(self.inputs_per_lot);
            if ledger.headroom(stock) < net_growth {
                break;
            }
            ledger.withdraw(self.input_sku, self.inputs_per_lot);
            ledger.deposit(self.output_sku, self.output_per_lot);
            lots += 1;
        }

        if lots > 0 {
            pending.effects.push(Effect::LotsProduced {
                facility,
                input_sku: self.input_sku,
                input_quantity: lots * self.inputs_per_lot,
                output_sku: self.output_sku,
                output_quantity: lots * self.output_per_lot,
                lots,
            });
        }

        Ok(pending)
    }
}
