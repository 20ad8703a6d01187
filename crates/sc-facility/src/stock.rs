//! Committed per-facility storage state.
//!
//! `Stock` is the shared mutable resource the two-phase protocol exists to
//! protect: several units of one facility read and write it, but only the
//! scheduler's commit pass ever calls the mutating methods here.  Every
//! mutation is fallible and checks the storage invariants, so a corrupted
//! pending state surfaces as a [`UnitError`] instead of silently committing.

use rustc_hash::FxHashMap;

use sc_core::{FacilityId, SkuId};

use crate::{UnitError, UnitResult};

/// Stock levels, capacity, and inbound reservations for one facility.
///
/// Capacity covers *committed* stock plus `reserved_inbound`: capacity is
/// claimed when an order is placed, not when the goods arrive, so an
/// arriving delivery always fits.
#[derive(Debug, Clone)]
pub struct Stock {
    owner:    FacilityId,
    capacity: u32,
    levels:   FxHashMap<SkuId, u32>,
    /// Total quantity of undelivered orders destined for this facility.
    reserved_inbound: u32,
}

impl Stock {
    pub fn new(owner: FacilityId, capacity: u32, initial: &[(SkuId, u32)]) -> Self {
        let mut levels = FxHashMap::default();
        for &(sku, quantity) in initial {
            *levels.entry(sku).or_insert(0) += quantity;
        }
        Self { owner, capacity, levels, reserved_inbound: 0 }
    }

    // ── Reads ─────────────────────────────────────────────────────────────

    #[inline]
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Committed level of one SKU (0 if never stocked).
    #[inline]
    pub fn level(&self, sku: SkuId) -> u32 {
        self.levels.get(&sku).copied().unwrap_or(0)
    }

    /// Total committed units across all SKUs.
    pub fn total(&self) -> u32 {
        self.levels.values().sum()
    }

    #[inline]
    pub fn reserved_inbound(&self) -> u32 {
        self.reserved_inbound
    }

    /// Units of capacity not yet claimed by stock or inbound reservations.
    pub fn headroom(&self) -> u32 {
        self.capacity
            .saturating_sub(self.total())
            .saturating_sub(self.reserved_inbound)
    }

    /// All stocked SKUs and levels, sorted by SKU for deterministic output.
    pub fn levels_sorted(&self) -> Vec<(SkuId, u32)> {
        let mut levels: Vec<_> = self
            .levels
            .iter()
            .filter(|&(_, &q)| q > 0)
            .map(|(&sku, &q)| (sku, q))
            .collect();
        levels.sort_unstable_by_key(|&(sku, _)| sku);
        levels
    }

    // ── Commit-phase mutations ────────────────────────────────────────────

    /// Add `quantity` units of `sku`, checking the capacity invariant.
    pub fn deposit(&mut self, sku: SkuId, quantity: u32) -> UnitResult<()> {
        let projected = self.total() as u64 + self.reserved_inbound as u64 + quantity as u64;
        if projected > self.capacity as u64 {
            return Err(UnitError::CapacityExceeded(self.owner, self.capacity));
        }
        *self.levels.entry(sku).or_insert(0) += quantity;
        Ok(())
    }

    /// Remove `quantity` units of `sku`.
    pub fn withdraw(&mut self, sku: SkuId, quantity: u32) -> UnitResult<()> {
        let level = self.levels.entry(sku).or_insert(0);
        if *level < quantity {
            return Err(UnitError::NegativeStock(self.owner, sku));
        }
        *level -= quantity;
        Ok(())
    }

    /// Claim capacity for `quantity` units of future inbound goods.
    pub fn reserve_inbound(&mut self, quantity: u32) -> UnitResult<()> {
        let projected = self.total() as u64 + self.reserved_inbound as u64 + quantity as u64;
        if projected > self.capacity as u64 {
            return Err(UnitError::CapacityExceeded(self.owner, self.capacity));
        }
        self.reserved_inbound += quantity;
        Ok(())
    }

    /// Release an inbound reservation.  Called just before the matching
    /// [`deposit`](Self::deposit) when a delivery lands, so the freed
    /// reservation covers the deposited quantity.
    pub fn release_inbound(&mut self, quantity: u32) -> UnitResult<()> {
        if self.reserved_inbound < quantity {
            return Err(UnitError::ReservationUnderflow(self.owner));
        }
        self.reserved_inbound -= quantity;
        Ok(())
    }
}
