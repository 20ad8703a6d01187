//! World configuration — the immutable snapshot consumed at construction.
//!
//! Typically loaded from a TOML/JSON file by the application crate (enable
//! the `serde` feature) and handed to the world builder exactly once.  The
//! engine never re-reads configuration mid-run; malformed input is rejected
//! up front and the simulation never starts.

use crate::{CellCoord, SkuId};

/// Top-level simulation parameters.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SimConfig {
    /// Total ticks to simulate.  The scheduler transitions to `Terminated`
    /// once this many ticks have committed.
    pub tick_limit: u64,

    /// Master RNG seed for demand generators and other exogenous drivers.
    /// The engine itself uses no randomness; the seed is carried here so a
    /// run is fully described by its config.
    pub seed: u64,

    /// Worker thread count for the parallel compute phase.  `None` uses all
    /// logical cores.  Ignored without the `parallel` feature.
    pub num_threads: Option<usize>,
}

/// Grid dimensions and the static set of blocked cells.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridConfig {
    pub width:  u32,
    pub height: u32,
    /// Cells excluded from pathfinding for the whole run.
    pub blocked: Vec<CellCoord>,
}

/// Storage capacity and starting stock for one facility.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct StorageConfig {
    /// Maximum total units held across all SKUs, including reserved inbound.
    pub capacity: u32,
    pub initial_stock: Vec<(SkuId, u32)>,
}

/// Vehicle fleet for a facility's DistributionUnit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistributionConfig {
    /// One entry per vehicle: its speed in grid cells per tick (≥ 1).
    pub vehicle_speeds: Vec<u32>,
}

/// Order placement for a facility's ConsumerUnit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConsumerConfig {
    /// Index into `WorldConfig::facilities` of the facility orders are
    /// placed against (the shipping side).  Must own a DistributionUnit.
    pub source: usize,
}

/// Demand fulfillment for a facility's SellerUnit.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SellerConfig {
    /// The SKU this facility sells.
    pub sku: SkuId,
}

/// Production parameters for a facility's ManufactureUnit.
///
/// A production lot is all-or-nothing: each lot consumes exactly
/// `inputs_per_lot` units of `input_sku` and emits `output_per_lot` units of
/// `output_sku`; a lot with insufficient input stock is skipped entirely.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ManufactureConfig {
    pub input_sku:  SkuId,
    pub output_sku: SkuId,
    /// Input units consumed per lot (≥ 1).
    pub inputs_per_lot: u32,
    /// Output units emitted per lot (≥ 1).
    pub output_per_lot: u32,
    /// Production speed: maximum lots started per tick.
    pub max_lots_per_tick: u32,
}

/// One facility: its position, storage, and optional unit capabilities.
///
/// Every facility owns a StorageUnit; the other units are opt-in.  A plain
/// warehouse is just `storage`; a retailer adds `consumer` + `seller`; a
/// plant adds `manufacture`; a supplier or distribution center adds
/// `distribution`.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FacilityConfig {
    pub name:     String,
    /// Grid cell the facility occupies.  Must be in bounds and not blocked.
    pub position: CellCoord,
    pub storage:  StorageConfig,
    pub distribution: Option<DistributionConfig>,
    pub consumer:     Option<ConsumerConfig>,
    pub seller:       Option<SellerConfig>,
    pub manufacture:  Option<ManufactureConfig>,
}

/// The complete world description.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WorldConfig {
    pub grid:       GridConfig,
    pub facilities: Vec<FacilityConfig>,
    pub sim:        SimConfig,
}
