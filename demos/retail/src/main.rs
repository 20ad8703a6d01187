//! retail — a two-echelon supply chain on a 12x8 grid.
//!
//! A plant manufactures goods from raw material and ships them across a
//! walled grid (vehicles must detour through a gap) to a shop that sells
//! against randomized daily demand.  The shop runs a simple order-up-to
//! replenishment policy driven by the engine's query API.
//!
//! Scale comment: swap the embedded config for a deserialized file (enable
//! the `serde` feature on sc-core) to run real networks with hundreds of
//! facilities.

use std::path::Path;
use std::time::Instant;

use anyhow::Result;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use sc_core::{
    CellCoord, ConsumerConfig, DistributionConfig, FacilityConfig, FacilityId, GridConfig,
    ManufactureConfig, SellerConfig, SimConfig, SkuId, StorageConfig, Tick, WorldConfig,
};
use sc_facility::{Action, UnitKind};
use sc_output::{CsvWriter, OutputWriter, SimOutputObserver};
use sc_sim::{SimObserver, TickReport, World, WorldBuilder};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:       u64 = 42;
const TICK_LIMIT: u64 = 60;

const RAW:   SkuId = SkuId(1);
const GOODS: SkuId = SkuId(2);

const PLANT: FacilityId = FacilityId(0);
const SHOP:  FacilityId = FacilityId(1);

/// Order-up-to level for the shop: place an order whenever on-hand plus
/// inbound drops below this.
const ORDER_UP_TO: u32 = 80;
const ORDER_SIZE:  u32 = 40;

// ── World definition ──────────────────────────────────────────────────────────

fn world_config() -> WorldConfig {
    // A wall at x = 5 with a gap at the bottom two rows forces every trip
    // through a detour.
    let blocked: Vec<CellCoord> = (0..6).map(|y| CellCoord::new(5, y)).collect();

    WorldConfig {
        grid: GridConfig { width: 12, height: 8, blocked },
        facilities: vec![
            FacilityConfig {
                name:     "plant".into(),
                position: CellCoord::new(1, 1),
                storage:  StorageConfig {
                    capacity:      2_000,
                    initial_stock: vec![(RAW, 600)],
                },
                distribution: Some(DistributionConfig { vehicle_speeds: vec![2, 3] }),
                consumer:     None,
                seller:       None,
                manufacture:  Some(ManufactureConfig {
                    input_sku:         RAW,
                    output_sku:        GOODS,
                    inputs_per_lot:    10,
                    output_per_lot:    8,
                    max_lots_per_tick: 4,
                }),
            },
            FacilityConfig {
                name:     "shop".into(),
                position: CellCoord::new(10, 1),
                storage:  StorageConfig { capacity: 150, initial_stock: vec![(GOODS, 40)] },
                distribution: None,
                consumer:     Some(ConsumerConfig { source: 0 }),
                seller:       Some(SellerConfig { sku: GOODS }),
                manufacture:  None,
            },
        ],
        sim: SimConfig { tick_limit: TICK_LIMIT, seed: SEED, num_threads: None },
    }
}

// ── Observer wrapper to accumulate totals ─────────────────────────────────────

struct TotalsObserver<W: OutputWriter> {
    inner:           SimOutputObserver<W>,
    delivered_units: u64,
    units_sold:      u64,
    shortfall_units: u64,
}

impl<W: OutputWriter> TotalsObserver<W> {
    fn new(inner: SimOutputObserver<W>) -> Self {
        Self { inner, delivered_units: 0, units_sold: 0, shortfall_units: 0 }
    }
}

impl<W: OutputWriter> SimObserver for TotalsObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, world: &World) {
        self.delivered_units += report
            .deliveries
            .iter()
            .map(|o| o.quantity as u64)
            .sum::<u64>();
        self.units_sold += report.units_sold as u64;
        self.shortfall_units += report
            .shortfalls
            .iter()
            .map(|s| s.quantity as u64)
            .sum::<u64>();
        self.inner.on_tick_end(report, world);
    }

    fn on_sim_end(&mut self, final_tick: Tick) {
        self.inner.on_sim_end(final_tick);
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    println!("=== retail — sc supply-chain simulator ===");
    println!("Ticks: {TICK_LIMIT}  |  Seed: {SEED}");
    println!();

    // 1. Build the world.
    let mut sim = WorldBuilder::new(world_config()).build()?;
    let route = sim
        .world()
        .routes()
        .get(PLANT, SHOP)
        .expect("plant and shop are connected");
    println!(
        "Route plant -> shop: {} steps (detour around the wall; straight-line would be 9)",
        route.length()
    );
    println!();

    // 2. Set up CSV output.
    std::fs::create_dir_all("output/retail")?;
    let writer = CsvWriter::new(Path::new("output/retail"))?;
    let mut obs = TotalsObserver::new(SimOutputObserver::new(writer));

    // 3. Drive the sim tick by tick: random demand every tick, a
    //    replenishment order whenever the shop's inventory position is low.
    let mut rng = SmallRng::seed_from_u64(SEED);
    let t0 = Instant::now();

    for t in 0..TICK_LIMIT {
        let now = Tick(t);

        let demand = rng.gen_range(2..=8);
        sim.submit(now, SHOP, UnitKind::Seller, Action::Demand { quantity: demand })?;

        let position = sim.world().stock_level(SHOP, GOODS)
            + sim.world().orders().inbound_quantity(SHOP) as u32;
        if position < ORDER_UP_TO {
            sim.submit(
                now,
                SHOP,
                UnitKind::Consumer,
                Action::PlaceOrder { sku: GOODS, quantity: ORDER_SIZE },
            )?;
        }

        sim.run_ticks(1, &mut obs)?;
    }
    let elapsed = t0.elapsed();

    // run_ticks leaves the final flush to us.
    obs.on_sim_end(sim.current_tick());

    if let Some(e) = obs.inner.take_error() {
        eprintln!("output error: {e}");
    }

    // 4. Summary.
    let world = sim.world();
    println!("Done in {elapsed:.2?}");
    println!();
    println!("Shipped to shop:   {} units", obs.delivered_units);
    println!("Sold to customers: {} units", obs.units_sold);
    println!("Unmet demand:      {} units", obs.shortfall_units);
    println!(
        "Plant stock:       {} raw, {} goods",
        world.stock_level(PLANT, RAW),
        world.stock_level(PLANT, GOODS)
    );
    println!("Shop stock:        {} goods", world.stock_level(SHOP, GOODS));
    println!("Orders placed:     {}", world.orders().len());
    println!();
    println!("CSV written to output/retail/");

    Ok(())
}
