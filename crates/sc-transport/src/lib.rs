//! `sc-transport` — vehicle movement state and per-facility fleets.
//!
//! # Crate layout
//!
//! | Module      | Contents                                             |
//! |-------------|------------------------------------------------------|
//! | [`vehicle`] | `Vehicle`, `Trip`, `Progress` — the travel model     |
//! | [`fleet`]   | `Fleet` — a facility's vehicles, id-indexed          |
//! | [`error`]   | `TransportError`, `TransportResult<T>`               |
//!
//! # Travel model
//!
//! A vehicle's velocity is a **speed**: `steps_per_tick` grid cells per
//! tick along a blocked-aware [`Route`].  A trip of route length `L`
//! therefore takes `ceil(L / steps_per_tick)` ticks.  Per-tick advancement
//! is capped at the remaining route length, so a vehicle can never
//! overshoot, and `position_index == length` ("arrived") is a same-tick
//! event: the payload is delivered and the vehicle becomes reusable in the
//! tick it arrives, never a flag checked one tick later.

pub mod error;
pub mod fleet;
pub mod vehicle;


pub use error::{TransportError, TransportResult};
pub use fleet::Fleet;
pub use vehicle::{Progress, Trip, Vehicle};
