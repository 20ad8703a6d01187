//! Orders and the global order book.
//!
//! An [`Order`] is a request to move `quantity` units of one SKU from an
//! origin facility to a destination facility.  Orders are created by a
//! ConsumerUnit, picked up by the origin's DistributionUnit (FIFO by
//! `placed_tick`, ties by `OrderId`), and delivered by a vehicle.
//!
//! The [`OrderBook`] is the single authoritative record of every order's
//! status.  It is keyed by `OrderId`, and ids are allocated monotonically at
//! commit time, so map iteration order *is* placement order — the FIFO
//! tie-break falls out of the data structure.

use std::collections::BTreeMap;
use std::fmt;

use crate::{FacilityId, OrderId, SkuId, Tick};

// ── Order ─────────────────────────────────────────────────────────────────────

/// Lifecycle state of an order.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum OrderStatus {
    /// Created, not yet assigned to a vehicle.
    Pending,
    /// Loaded on a vehicle and moving.
    InTransit,
    /// Arrived and deposited at the destination.
    Delivered,
}

/// A quantity of goods requested to move from `origin` to `destination`.
#[derive(Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Order {
    pub id:          OrderId,
    pub sku:         SkuId,
    /// Facility that ships the goods.
    pub origin:      FacilityId,
    /// Facility that receives the goods (the one that placed the order).
    pub destination: FacilityId,
    /// Always > 0 — enforced at action submission and config validation.
    pub quantity:    u32,
    pub placed_tick: Tick,
    pub status:      OrderStatus,
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}x{} {} -> {} ({:?})",
            self.id, self.quantity, self.sku, self.origin, self.destination, self.status
        )
    }
}

/// An order as produced by a ConsumerUnit's compute phase, before the book
/// has allocated it an id.  Ids are assigned during commit, in apply order,
/// which keeps them deterministic even when compute ran in parallel.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct OrderDraft {
    pub sku:         SkuId,
    pub origin:      FacilityId,
    pub destination: FacilityId,
    pub quantity:    u32,
    pub placed_tick: Tick,
}

// ── OrderBook ─────────────────────────────────────────────────────────────────

/// The authoritative record of every order in the world.
#[derive(Default, Debug)]
pub struct OrderBook {
    orders:  BTreeMap<OrderId, Order>,
    next_id: u64,
}

impl OrderBook {
    pub fn new() -> Self {
        Self::default()
    }

    /// Materialize `draft` as a `Pending` order and return its new id.
    pub fn place(&mut self, draft: OrderDraft) -> OrderId {
        let id = OrderId(self.next_id);
        self.next_id += 1;
        self.orders.insert(
            id,
            Order {
                id,
                sku:         draft.sku,
                origin:      draft.origin,
                destination: draft.destination,
                quantity:    draft.quantity,
                placed_tick: draft.placed_tick,
                status:      OrderStatus::Pending,
            },
        );
        id
    }

    pub fn get(&self, id: OrderId) -> Option<&Order> {
        self.orders.get(&id)
    }

    pub fn get_mut(&mut self, id: OrderId) -> Option<&mut Order> {
        self.orders.get_mut(&id)
    }

    /// All orders in id (= placement) order.
    pub fn iter(&self) -> impl Iterator<Item = &Order> {
        self.orders.values()
    }

    /// Pending orders that facility `origin` must ship, in placement order.
    pub fn pending_from(&self, origin: FacilityId) -> impl Iterator<Item = &Order> {
        self.orders
            .values()
            .filter(move |o| o.origin == origin && o.status == OrderStatus::Pending)
    }

    /// Total quantity of undelivered orders destined for `facility`.
    ///
    /// Pending and in-transit orders both hold an inbound capacity
    /// reservation at the destination until delivery releases it.
    pub fn inbound_quantity(&self, facility: FacilityId) -> u64 {
        self.orders
            .values()
            .filter(|o| o.destination == facility && o.status != OrderStatus::Delivered)
            .map(|o| o.quantity as u64)
            .sum()
    }

    /// Number of orders still in `Pending` status.
    pub fn pending_count(&self) -> usize {
        self.orders
            .values()
            .filter(|o| o.status == OrderStatus::Pending)
            .count()
    }

    pub fn len(&self) -> usize {
        self.orders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.orders.is_empty()
    }
}
