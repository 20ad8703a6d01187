//! The per-facility, per-tick claim ledger.
//!
//! Compute must be a pure function of *committed* state — but two units of
//! one facility may both want the same stock in the same tick (a seller
//! withdrawing the SKU a manufacturer consumes, a consumer claiming the
//! capacity a producer is about to fill).  The ledger is how the documented
//! stepping order resolves that: the scheduler creates one `StockLedger` per
//! facility per tick, and each unit's compute records its claims in it, so a
//! *later* unit in the fixed order sees the claims of *earlier* units
//! without anyone reading uncommitted next-state.

use rustc_hash::FxHashMap;

use sc_core::SkuId;

use crate::Stock;

/// Net stock and capacity claims made by this facility's units so far this
/// tick.  Dropped after compute; the authoritative mutations happen in the
/// commit pass.
#[derive(Debug, Default)]
pub struct StockLedger {
    /// Net per-SKU stock delta claimed this tick (withdrawals negative).
    delta: FxHashMap<SkuId, i64>,
    /// Capacity claimed for orders placed this tick.
    inbound_claimed: u32,
}

impl StockLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Committed level of `sku` adjusted by this tick's claims.
    pub fn available(&self, stock: &Stock, sku: SkuId) -> u32 {
        let projected = stock.level(sku) as i64 + self.delta.get(&sku).copied().unwrap_or(0);
        projected.max(0) as u32
    }

    /// Capacity still unclaimed after committed stock, committed inbound
    /// reservations, and this tick's claims.
    pub fn headroom(&self, stock: &Stock) -> u32 {
        let net: i64 = self.delta.values().sum();
        let projected_total = stock.total() as i64 + net;
        let claimed = projected_total
            + stock.reserved_inbound() as i64
            + self.inbound_claimed as i64;
        (stock.capacity() as i64 - claimed).max(0) as u32
    }

    /// Record a withdrawal claim.
    pub fn withdraw(&mut self, sku: SkuId, quantity: u32) {
        *self.delta.entry(sku).or_insert(0) -= quantity as i64;
    }

    /// Record a deposit claim.
    pub fn deposit(&mut self, sku: SkuId, quantity: u32) {
        *self.delta.entry(sku).or_insert(0) += quantity as i64;
    }

    /// Record an inbound capacity claim for a new order.
    pub fn claim_inbound(&mut self, quantity: u32) {
        self.inbound_claimed += quantity;
    }
}
