//! `sc-core` — foundational types for the `sc` supply-chain simulator.
//!
//! This crate is a dependency of every other `sc-*` crate.  It intentionally
//! has no `sc-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                          |
//! |------------|---------------------------------------------------|
//! | [`ids`]    | `FacilityId`, `VehicleId`, `OrderId`, `SkuId`     |
//! | [`cell`]   | `CellCoord` — integer grid coordinates            |
//! | [`tick`]   | `Tick`, `SimClock`                                |
//! | [`order`]  | `Order`, `OrderStatus`, `OrderBook`               |
//! | [`config`] | `WorldConfig` and per-facility unit configs       |
//! | [`error`]  | `CoreError`, `CoreResult`                         |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod cell;
pub mod config;
pub mod error;
pub mod ids;
pub mod order;
pub mod tick;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cell::CellCoord;
pub use config::{
    ConsumerConfig, DistributionConfig, FacilityConfig, GridConfig, ManufactureConfig, SimConfig,
    SellerConfig, StorageConfig, WorldConfig,
};
pub use error::{CoreError, CoreResult};
pub use ids::{FacilityId, OrderId, SkuId, VehicleId};
pub use order::{Order, OrderBook, OrderDraft, OrderStatus};
pub use tick::{SimClock, Tick};
