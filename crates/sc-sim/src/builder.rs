//! World construction and configuration validation.

use std::collections::BTreeMap;

use sc_core::{FacilityId, WorldConfig};
use sc_facility::{
    ConsumerUnit, DistributionUnit, Facility, ManufactureUnit, RouteTable, SellerUnit, Stock,
    StorageUnit, Unit, UnitKind,
};
use sc_grid::{GridError, WorldGrid};
use sc_transport::Fleet;

use crate::{SimError, SimResult, TickScheduler, World};

/// Builds a validated [`World`] and its [`TickScheduler`] from a
/// [`WorldConfig`].
///
/// Validation is all-up-front: a malformed config is rejected with
/// [`SimError::Config`] before any state is created, and a world that builds
/// successfully can only fail at runtime through an invariant violation, not
/// through bad input.
///
/// Routes between every shipping facility and every other facility are
/// precomputed here; a pair the grid cannot connect is recorded as *absent*,
/// which dispatch later surfaces per order as a route failure.
pub struct WorldBuilder {
    config: WorldConfig,
}

impl WorldBuilder {
    pub fn new(config: WorldConfig) -> Self {
        Self { config }
    }

    pub fn build(self) -> SimResult<TickScheduler> {
        let config = self.config;
        validate(&config)?;

        let grid = WorldGrid::new(&config.grid);

        let mut facilities = Vec::with_capacity(config.facilities.len());
        for (i, fc) in config.facilities.iter().enumerate() {
            let id = FacilityId(i as u32);
            let stock = Stock::new(id, fc.storage.capacity, &fc.storage.initial_stock);

            let mut units = BTreeMap::new();
            units.insert(UnitKind::Storage, Unit::Storage(StorageUnit::new()));
            if let Some(d) = &fc.distribution {
                units.insert(
                    UnitKind::Distribution,
                    Unit::Distribution(DistributionUnit::new(Fleet::new(&d.vehicle_speeds))),
                );
            }
            if let Some(c) = &fc.consumer {
                units.insert(
                    UnitKind::Consumer,
                    Unit::Consumer(ConsumerUnit::new(FacilityId(c.source as u32))),
                );
            }
            if let Some(s) = &fc.seller {
                units.insert(UnitKind::Seller, Unit::Seller(SellerUnit::new(s.sku)));
            }
            if let Some(m) = &fc.manufacture {
                units.insert(
                    UnitKind::Manufacture,
                    Unit::Manufacture(ManufactureUnit::new(
                        m.input_sku,
                        m.output_sku,
                        m.inputs_per_lot,
                        m.output_per_lot,
                        m.max_lots_per_tick,
                    )),
                );
            }

            facilities.push(Facility::new(
                id,
                fc.name.clone(),
                fc.position,
                stock,
                units,
            ));
        }

        // Precompute routes out of every shipping facility.  Unreachable
        // pairs stay absent; that is data, not an error.
        let mut routes = RouteTable::new();
        for origin in &facilities {
            if origin.fleet().is_none() {
                continue;
            }
            for dest in &facilities {
                if dest.id() == origin.id() {
                    continue;
                }
                match grid.path(origin.position(), dest.position()) {
                    Ok(route) => routes.insert(origin.id(), dest.id(), route),
                    Err(GridError::PathNotFound { .. }) => {}
                    Err(e) => return Err(SimError::Config(e.to_string())),
                }
            }
        }

        let world = World::new(grid, facilities, routes);
        Ok(TickScheduler::new(world, config.sim))
    }
}

fn validate(config: &WorldConfig) -> SimResult<()> {
    let fail = |msg: String| Err(SimError::Config(msg));

    if config.grid.width == 0 || config.grid.height == 0 {
        return fail(format!(
            "grid must be at least 1x1, got {}x{}",
            config.grid.width, config.grid.height
        ));
    }
    if config.facilities.is_empty() {
        return fail("world has no facilities".into());
    }

    let grid = WorldGrid::new(&config.grid);
    for (i, fc) in config.facilities.iter().enumerate() {
        let at = |msg: &str| format!("facility {i} ({}): {msg}", fc.name);

        if !grid.in_bounds(fc.position) {
            return fail(at(&format!("position {} is out of bounds", fc.position)));
        }
        if grid.is_blocked(fc.position) {
            return fail(at(&format!("position {} is a blocked cell", fc.position)));
        }

        let initial: u64 = fc.storage.initial_stock.iter().map(|&(_, q)| q as u64).sum();
        if initial > fc.storage.capacity as u64 {
            return fail(at(&format!(
                "initial stock {initial} exceeds capacity {}",
                fc.storage.capacity
            )));
        }

        if let Some(d) = &fc.distribution {
            if d.vehicle_speeds.is_empty() {
                return fail(at("distribution unit has no vehicles"));
            }
            if d.vehicle_speeds.iter().any(|&s| s == 0) {
                return fail(at("vehicle speeds must be at least 1 cell per tick"));
            }
        }

        if let Some(c) = &fc.consumer {
            if c.source >= config.facilities.len() {
                return fail(at(&format!("consumer source index {} out of range", c.source)));
            }
            if c.source == i {
                return fail(at("consumer cannot order from its own facility"));
            }
            if config.facilities[c.source].distribution.is_none() {
                return fail(at(&format!(
                    "consumer source {} has no distribution unit",
                    config.facilities[c.source].name
                )));
            }
        }

        if let Some(m) = &fc.manufacture {
            if m.input_sku == m.output_sku {
                return fail(at("manufacture input and output SKU must differ"));
            }
            if m.inputs_per_lot == 0 || m.output_per_lot == 0 {
                return fail(at("manufacture lot sizes must be at least 1"));
            }
            if m.max_lots_per_tick == 0 {
                return fail(at("manufacture must run at least 1 lot per tick"));
            }
        }
    }

    Ok(())
}
