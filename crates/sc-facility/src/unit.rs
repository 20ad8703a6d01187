//! The unit enum and the compute-phase output types.
//!
//! Units are the active parts of a facility.  Each tick every unit is asked
//! to *compute*: read committed state, record intra-facility claims in the
//! ledger, and emit effects.  Units never mutate the world directly; the
//! scheduler applies their effects in the commit pass.
//!
//! Within one facility units always step in a fixed order, so results stay
//! reproducible when several units touch the same stock:
//!
//! | order | unit         |
//! |-------|--------------|
//! | 1     | storage      |
//! | 2     | distribution |
//! | 3     | consumer     |
//! | 4     | seller       |
//! | 5     | manufacture  |

use std::fmt;

use sc_core::{CellCoord, FacilityId, OrderId, SkuId};

use crate::{
    Action, ConsumerUnit, DistributionUnit, Effect, ManufactureUnit, SellerUnit, StockLedger,
    StorageUnit, TickContext, UnitError,
};

// ── unit kinds ──────────────────────────────────────────────────────────

/// Discriminant for the unit variants.  The derived `Ord` is the stepping
/// order documented in the module docs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum UnitKind {
    Storage,
    Distribution,
    Consumer,
    Seller,
    Manufacture,
}

impl fmt::Display for UnitKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            UnitKind::Storage => "storage",
            UnitKind::Distribution => "distribution",
            UnitKind::Consumer => "consumer",
            UnitKind::Seller => "seller",
            UnitKind::Manufacture => "manufacture",
        };
        f.write_str(name)
    }
}

// ── compute output ──────────────────────────────────────────────────────

/// Demand a unit could not satisfy this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortfall {
    pub facility: FacilityId,
    pub sku:      SkuId,
    pub quantity: u32,
    pub cause:    ShortfallCause,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortfallCause {
    /// The destination lacked headroom for a new order.
    InsufficientCapacity,
    /// The seller lacked stock for the demanded quantity.
    InsufficientStock,
}

/// An order that could not be dispatched because no route exists between
/// its endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RouteFailure {
    pub order: OrderId,
    pub from:  CellCoord,
    pub to:    CellCoord,
}

/// Everything one unit's compute produced this tick.
#[derive(Debug, Clone)]
pub struct UnitPending {
    pub facility:       FacilityId,
    pub kind:           UnitKind,
    pub effects:        Vec<Effect>,
    pub shortfalls:     Vec<Shortfall>,
    pub route_failures: Vec<RouteFailure>,
}

impl UnitPending {
    pub fn new(facility: FacilityId, kind: UnitKind) -> Self {
        Self {
            facility,
            kind,
            effects: Vec::new(),
            shortfalls: Vec::new(),
            route_failures: Vec::new(),
        }
    }
}

// ── the unit enum ───────────────────────────────────────────────────────

/// One active component of a facility.  Enum dispatch keeps compute
/// monomorphic and lets the scheduler match on variants during commit.
#[derive(Debug)]
pub enum Unit {
    Storage(StorageUnit),
    Distribution(DistributionUnit),
    Consumer(ConsumerUnit),
    Seller(SellerUnit),
    Manufacture(ManufactureUnit),
}

impl Unit {
    pub fn kind(&self) -> UnitKind {
        match self {
            Unit::Storage(_) => UnitKind::Storage,
            Unit::Distribution(_) => UnitKind::Distribution,
            Unit::Consumer(_) => UnitKind::Consumer,
            Unit::Seller(_) => UnitKind::Seller,
            Unit::Manufacture(_) => UnitKind::Manufacture,
        }
    }

    /// Run this unit's compute phase.  Reads committed state through `ctx`,
    /// records intra-facility claims in `ledger`, and returns the effects to
    /// commit.  A returned error is fatal for the whole tick.
    pub fn compute(
        &self,
        facility: FacilityId,
        ctx: &TickContext<'_>,
        ledger: &mut StockLedger,
        actions: &[Action],
    ) -> Result<UnitPending, UnitError> {
        match self {
            Unit::Storage(u) => u.compute(facility, ctx, ledger),
            Unit::Distribution(u) => u.compute(facility, ctx),
            Unit::Consumer(u) => u.compute(facility, ctx, ledger, actions),
            Unit::Seller(u) => u.compute(facility, ctx, ledger, actions),
            Unit::Manufacture(u) => u.compute(facility, ctx, ledger),
        }
    }
}
