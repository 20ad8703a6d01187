//! `sc-sim` — world construction and the tick scheduler.
//!
//! # Crate layout
//!
//! | Module        | Contents                                                |
//! |---------------|---------------------------------------------------------|
//! | [`builder`]   | `WorldBuilder` — config validation, route precompute    |
//! | [`world`]     | `World` — committed state and the query API             |
//! | [`queue`]     | `ActionQueue` — per-tick external action delivery       |
//! | [`scheduler`] | `TickScheduler` — the collect/compute/commit tick loop  |
//! | [`report`]    | `TickReport` — per-tick commit summary                  |
//! | [`observer`]  | `SimObserver` trait and `NoopObserver`                  |
//! | [`error`]     | `SimError`, `SimResult<T>`                              |
//!
//! # Example
//!
//! ```rust,ignore
//! let mut sim = WorldBuilder::new(config).build()?;
//! sim.submit(Tick(0), retailer, UnitKind::Consumer,
//!            Action::PlaceOrder { sku, quantity: 20 })?;
//! sim.run(&mut NoopObserver)?;
//! println!("delivered after {} ticks", sim.current_tick());
//! ```

pub mod builder;
pub mod error;
pub mod observer;
pub mod queue;
pub mod report;
pub mod scheduler;
pub mod world;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use builder::WorldBuilder;
pub use error::{SimError, SimResult};
pub use observer::{NoopObserver, SimObserver};
pub use queue::{ActionQueue, SubmittedAction};
pub use report::TickReport;
pub use scheduler::{SchedulerState, TickPhase, TickScheduler};
pub use world::World;
