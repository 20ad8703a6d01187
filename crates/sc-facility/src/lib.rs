//! `sc-facility` — facility units and the two-phase stepping contracts.
//!
//! # Crate layout
//!
//! | Module           | Contents                                              |
//! |------------------|-------------------------------------------------------|
//! | [`unit`]         | `Unit`, `UnitKind`, `UnitPending` — the stepping contract |
//! | [`storage`]      | `StorageUnit` — capacity validation and reservations  |
//! | [`distribution`] | `DistributionUnit` — vehicles, FIFO order assignment  |
//! | [`consumer`]     | `ConsumerUnit` — place-order actions → `Order`s       |
//! | [`seller`]       | `SellerUnit` — demand → stock withdrawals             |
//! | [`manufacture`]  | `ManufactureUnit` — all-or-nothing production lots    |
//! | [`facility`]     | `Facility` — unit map in documented stepping order    |
//! | [`stock`]        | `Stock` — committed per-facility storage state        |
//! | [`ledger`]       | `StockLedger` — per-tick claim ledger (the tie-break) |
//! | [`context`]      | `TickContext` — read-only committed snapshot          |
//! | [`effect`]       | `Effect` — data-only commit instructions              |
//! | [`routes`]       | `RouteTable` — precomputed facility-pair routes       |
//! | [`action`]       | `Action` — externally submitted unit inputs           |
//! | [`error`]        | `UnitError`, `UnitResult<T>`                          |
//!
//! # Two-phase tick protocol
//!
//! Every unit exposes a `compute` that is a pure function of the *committed*
//! world state, this tick's queued actions, and the facility's
//! [`StockLedger`].  Compute never mutates shared state; it returns a
//! [`UnitPending`] of data-only [`Effect`]s that the scheduler applies in a
//! single sequential commit pass.  Because no unit ever observes another
//! unit's committed next-state mid-tick, the fixed stepping order —
//! `Storage < Distribution < Consumer < Seller < Manufacture`, encoded in
//! `UnitKind`'s `Ord` — is a documented tie-break for units sharing a
//! storage resource, not a source of silent one-tick delays.

pub mod action;
pub mod consumer;
pub mod context;
pub mod distribution;
pub mod effect;
pub mod error;
pub mod facility;
pub mod ledger;
pub mod manufacture;
pub mod routes;
pub mod seller;
pub mod stock;
pub mod storage;
pub mod unit;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use action::Action;
pub use consumer::ConsumerUnit;
pub use context::TickContext;
pub use distribution::DistributionUnit;
pub use effect::Effect;
pub use error::{UnitError, UnitResult};
pub use facility::Facility;
pub use ledger::StockLedger;
pub use manufacture::ManufactureUnit;
pub use routes::RouteTable;
pub use seller::SellerUnit;
pub use stock::Stock;
pub use storage::StorageUnit;
pub use unit::{RouteFailure, Shortfall, ShortfallCause, Unit, UnitKind, UnitPending};
