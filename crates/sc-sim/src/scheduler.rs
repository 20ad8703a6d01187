//! The tick scheduler and its two-phase commit engine.

use rustc_hash::FxHashMap;

use sc_core::{FacilityId, OrderStatus, SimClock, SimConfig, Tick};
use sc_facility::{
    Action, Effect, Facility, Stock, StockLedger, TickContext, UnitKind, UnitPending, UnitResult,
};
use sc_transport::Fleet;

use crate::{ActionQueue, SimError, SimObserver, SimResult, SubmittedAction, TickReport, World};

// ── Scheduler state machine ───────────────────────────────────────────────────

/// Phase of the tick currently being processed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickPhase {
    /// Draining this tick's queued actions.
    Collecting,
    /// Running every unit's compute against the committed state.
    Computing,
    /// Validating and applying the collected effects.
    Committing,
}

/// Lifecycle of the scheduler.
///
/// `Idle → Running(Collecting → Computing → Committing) → Idle` each tick;
/// `Terminated` once the tick limit is reached or a tick aborts fatally.
/// A terminated scheduler never runs another tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulerState {
    Idle,
    Running(TickPhase),
    Terminated,
}

// ── TickScheduler ─────────────────────────────────────────────────────────────

/// Drives the simulation one tick at a time.
///
/// Each tick runs the same three phases:
///
/// 1. **Collect**: drain the [`ActionQueue`] for the current tick and group
///    actions by target unit.  Actions queued for tick T are seen by their
///    unit in tick T's compute, never a tick late.
/// 2. **Compute** (optionally parallel across facilities with the
///    `parallel` feature): every unit of every facility produces effects
///    from the committed state, its actions, and the facility's per-tick
///    [`StockLedger`].  Nothing is mutated.
/// 3. **Commit** (sequential, ascending facility id then unit stepping
///    order): all stock-affecting effects are first replayed against cloned
///    stocks; if any replay violates a storage invariant the whole tick is
///    abandoned, nothing is applied, and the scheduler terminates.
///    Otherwise the effects are applied to the world in the same order.
///
/// Because commit order is fixed and compute reads only committed state,
/// runs are bit-identical with and without the `parallel` feature.
///
/// Create via [`WorldBuilder`][crate::WorldBuilder].
pub struct TickScheduler {
    world:  World,
    queue:  ActionQueue,
    clock:  SimClock,
    config: SimConfig,
    state:  SchedulerState,
}

impl TickScheduler {
    pub(crate) fn new(world: World, config: SimConfig) -> Self {
        #[cfg(feature = "parallel")]
        if let Some(n) = config.num_threads {
            // Best effort: the global pool may already exist.
            let _ = rayon::ThreadPoolBuilder::new().num_threads(n).build_global();
        }

        let state = if config.tick_limit == 0 {
            SchedulerState::Terminated
        } else {
            SchedulerState::Idle
        };
        Self {
            world,
            queue: ActionQueue::new(),
            clock: SimClock::new(),
            config,
            state,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn config(&self) -> &SimConfig {
        &self.config
    }

    pub fn current_tick(&self) -> Tick {
        self.clock.current_tick
    }

    pub fn state(&self) -> SchedulerState {
        self.state
    }

    pub fn is_terminated(&self) -> bool {
        self.state == SchedulerState::Terminated
    }

    /// Stop before the next tick begins.
    ///
    /// Ticks are synchronous, so there is never an in-flight tick to wait
    /// for; the world keeps its last committed state.
    pub fn terminate(&mut self) {
        self.state = SchedulerState::Terminated;
    }

    // ── Action submission ─────────────────────────────────────────────────

    /// Queue `action` for the given unit at `tick`.
    ///
    /// The target facility and unit are checked now, so a typo fails at
    /// submission instead of silently dropping the action at delivery.
    /// Zero-quantity actions are rejected here too; this is what upholds
    /// the order book's `quantity > 0` invariant. Submitting for an
    /// already-committed tick fails with [`SimError::PastTick`] and leaves
    /// the queue unchanged.
    pub fn submit(
        &mut self,
        tick: Tick,
        facility: FacilityId,
        unit: UnitKind,
        action: Action,
    ) -> SimResult<()> {
        if self.is_terminated() {
            return Err(SimError::Terminated);
        }
        let target = self
            .world
            .facility(facility)
            .ok_or(SimError::UnknownFacility(facility))?;
        if !target.has_unit(unit) {
            return Err(SimError::UnknownUnit { facility, kind: unit });
        }
        let (Action::PlaceOrder { quantity, .. } | Action::Demand { quantity }) = action;
        if quantity == 0 {
            return Err(SimError::ZeroQuantity { facility, kind: unit });
        }
        self.queue.submit(
            self.clock.current_tick,
            tick,
            SubmittedAction { facility, unit, action },
        )
    }

    pub fn queued_actions(&self) -> usize {
        self.queue.len()
    }

    // ── Tick loop ─────────────────────────────────────────────────────────

    /// Run from the current tick until the tick limit (or a fatal abort).
    ///
    /// Calls observer hooks at every tick boundary.  Use
    /// [`NoopObserver`][crate::NoopObserver] if you don't need callbacks.
    pub fn run<O: SimObserver>(&mut self, observer: &mut O) -> SimResult<()> {
        while !self.is_terminated() {
            observer.on_tick_start(self.clock.current_tick);
            match self.advance_tick() {
                Ok(report) => observer.on_tick_end(&report, &self.world),
                Err(e) => {
                    observer.on_sim_end(self.clock.current_tick);
                    return Err(e);
                }
            }
        }
        observer.on_sim_end(self.clock.current_tick);
        Ok(())
    }

    /// Run at most `n` ticks from the current position.
    ///
    /// Useful for tests and incremental stepping; stops early at the tick
    /// limit.
    pub fn run_ticks<O: SimObserver>(&mut self, n: u64, observer: &mut O) -> SimResult<()> {
        for _ in 0..n {
            if self.is_terminated() {
                break;
            }
            observer.on_tick_start(self.clock.current_tick);
            let report = self.advance_tick()?;
            observer.on_tick_end(&report, &self.world);
        }
        Ok(())
    }

    /// Process exactly one tick: collect, compute, commit, advance the
    /// clock.
    ///
    /// On a fatal [`UnitError`] the tick's effects are discarded in full,
    /// the world keeps its last committed state, and the scheduler
    /// transitions to `Terminated`.
    pub fn advance_tick(&mut self) -> SimResult<TickReport> {
        if self.is_terminated() {
            return Err(SimError::Terminated);
        }
        let now = self.clock.current_tick;

        // ── Phase 1: collect ──────────────────────────────────────────────
        self.state = SchedulerState::Running(TickPhase::Collecting);
        let mut actions: FxHashMap<(FacilityId, UnitKind), Vec<Action>> = FxHashMap::default();
        for sa in self.queue.drain_tick(now) {
            actions.entry((sa.facility, sa.unit)).or_default().push(sa.action);
        }

        // ── Phase 2: compute ──────────────────────────────────────────────
        self.state = SchedulerState::Running(TickPhase::Computing);
        let pendings = match self.compute(now, &actions) {
            Ok(p) => p,
            Err(e) => {
                self.state = SchedulerState::Terminated;
                return Err(e.into());
            }
        };

        // ── Phase 3: commit ───────────────────────────────────────────────
        self.state = SchedulerState::Running(TickPhase::Committing);
        if let Err(e) = validate_effects(&self.world, &pendings) {
            self.state = SchedulerState::Terminated;
            return Err(e.into());
        }
        let report = match self.apply(now, pendings) {
            Ok(r) => r,
            Err(e) => {
                self.state = SchedulerState::Terminated;
                return Err(e);
            }
        };

        self.clock.advance();
        self.state = if self.clock.current_tick.0 >= self.config.tick_limit {
            SchedulerState::Terminated
        } else {
            SchedulerState::Idle
        };
        Ok(report)
    }

    // ── Compute phase ─────────────────────────────────────────────────────

    /// Compute every unit of every facility, in ascending facility id and
    /// unit stepping order.
    ///
    /// With the `parallel` Cargo feature, facilities compute on Rayon's
    /// thread pool; this is race-free because facilities share no mutable
    /// state during compute (each gets its own ledger, and cross-facility
    /// effects only land at commit).
    fn compute(
        &self,
        now: Tick,
        actions: &FxHashMap<(FacilityId, UnitKind), Vec<Action>>,
    ) -> UnitResult<Vec<UnitPending>> {
        let ctx = TickContext {
            tick:       now,
            facilities: &self.world.facilities,
            orders:     &self.world.orders,
            routes:     &self.world.routes,
        };

        #[cfg(not(feature = "parallel"))]
        let per_facility: UnitResult<Vec<Vec<UnitPending>>> = self
            .world
            .facilities
            .iter()
            .map(|f| compute_facility(f, &ctx, actions))
            .collect();

        #[cfg(feature = "parallel")]
        let per_facility: UnitResult<Vec<Vec<UnitPending>>> = {
            use rayon::prelude::*;

            self.world
                .facilities
                .par_iter()
                .map(|f| compute_facility(f, &ctx, actions))
                .collect()
        };

        Ok(per_facility?.into_iter().flatten().collect())
    }

    // ── Commit phase ──────────────────────────────────────────────────────

    /// Apply validated effects to the world, in compute order.
    fn apply(&mut self, now: Tick, pendings: Vec<UnitPending>) -> SimResult<TickReport> {
        let mut report = TickReport::new(now);

        for pending in pendings {
            report.shortfalls.extend(pending.shortfalls);
            report.route_failures.extend(pending.route_failures);

            for effect in pending.effects {
                match effect {
                    Effect::VehicleMoved { facility, vehicle, position_index } => {
                        self.fleet_mut(facility)?.with_vehicle_mut(vehicle, |v| {
                            v.advance();
                            debug_assert_eq!(
                                v.trip().map(|t| t.position_index),
                                Some(position_index),
                            );
                            Ok(())
                        })?;
                    }

                    Effect::OrderDelivered { facility, vehicle, order } => {
                        let payload = self
                            .fleet_mut(facility)?
                            .with_vehicle_mut(vehicle, |v| v.deliver())?;
                        debug_assert_eq!(payload.id, order);

                        let record = self
                            .world
                            .orders
                            .get_mut(order)
                            .expect("delivered order is in the book");
                        record.status = OrderStatus::Delivered;
                        let delivered = record.clone();

                        let stock = self.world.facilities[delivered.destination.index()]
                            .stock_mut();
                        stock.release_inbound(delivered.quantity)?;
                        stock.deposit(delivered.sku, delivered.quantity)?;
                        report.deliveries.push(delivered);
                    }

                    Effect::VehicleAssigned { facility, vehicle, order } => {
                        let record = self
                            .world
                            .orders
                            .get_mut(order)
                            .expect("assigned order is in the book");
                        record.status = OrderStatus::InTransit;
                        let payload = record.clone();

                        let route = self
                            .world
                            .routes
                            .get(payload.origin, payload.destination)
                            .expect("dispatch only assigns routable orders")
                            .clone();
                        self.fleet_mut(facility)?
                            .with_vehicle_mut(vehicle, |v| v.assign(route, payload))?;
                    }

                    Effect::OrderPlaced(draft) => {
                        let destination = draft.destination;
                        let quantity = draft.quantity;
                        self.world.orders.place(draft);
                        self.world.facilities[destination.index()]
                            .stock_mut()
                            .reserve_inbound(quantity)?;
                        report.orders_placed += 1;
                    }

                    Effect::StockWithdrawn { facility, sku, quantity } => {
                        self.world.facilities[facility.index()]
                            .stock_mut()
                            .withdraw(sku, quantity)?;
                        report.units_sold += quantity;
                    }

                    Effect::LotsProduced {
                        facility,
                        input_sku,
                        input_quantity,
                        output_sku,
                        output_quantity,
                        lots,
                    } => {
                        let stock = self.world.facilities[facility.index()].stock_mut();
                        stock.withdraw(input_sku, input_quantity)?;
                        stock.deposit(output_sku, output_quantity)?;
                        report.lots_produced += lots;
                    }
                }
            }
        }

        Ok(report)
    }

    fn fleet_mut(&mut self, id: FacilityId) -> SimResult<&mut Fleet> {
        self.world
            .facilities
            .get_mut(id.index())
            .ok_or(SimError::UnknownFacility(id))?
            .fleet_mut()
            .ok_or(SimError::UnknownUnit { facility: id, kind: UnitKind::Distribution })
    }
}

/// Compute one facility's units in stepping order, sharing one ledger.
fn compute_facility(
    facility: &Facility,
    ctx: &TickContext<'_>,
    actions: &FxHashMap<(FacilityId, UnitKind), Vec<Action>>,
) -> UnitResult<Vec<UnitPending>> {
    let mut ledger = StockLedger::new();
    let mut pendings = Vec::new();
    for unit in facility.units() {
        let acts = actions
            .get(&(facility.id(), unit.kind()))
            .map(Vec::as_slice)
            .unwrap_or(&[]);
        pendings.push(unit.compute(facility.id(), ctx, &mut ledger, acts)?);
    }
    Ok(pendings)
}

/// Replay all stock-affecting effects against cloned stocks.
///
/// This is what makes a fatal tick all-or-nothing: any invariant violation
/// surfaces here, before the world has been touched.
fn validate_effects(world: &World, pendings: &[UnitPending]) -> UnitResult<()> {
    let mut stocks: Vec<Stock> = world
        .facilities
        .iter()
        .map(|f| f.stock().clone())
        .collect();

    for pending in pendings {
        for effect in &pending.effects {
            match effect {
                Effect::OrderDelivered { order, .. } => {
                    let o = world
                        .orders
                        .get(*order)
                        .expect("delivered order is in the book");
                    let stock = &mut stocks[o.destination.index()];
                    stock.release_inbound(o.quantity)?;
                    stock.deposit(o.sku, o.quantity)?;
                }
                Effect::OrderPlaced(draft) => {
                    stocks[draft.destination.index()].reserve_inbound(draft.quantity)?;
                }
                Effect::StockWithdrawn { facility, sku, quantity } => {
                    stocks[facility.index()].withdraw(*sku, *quantity)?;
                }
                Effect::LotsProduced {
                    facility,
                    input_sku,
                    input_quantity,
                    output_sku,
                    output_quantity,
                    ..
                } => {
                    let stock = &mut stocks[facility.index()];
                    stock.withdraw(*input_sku, *input_quantity)?;
                    stock.deposit(*output_sku, *output_quantity)?;
                }
                Effect::VehicleMoved { .. } | Effect::VehicleAssigned { .. } => {}
            }
        }
    }

    Ok(())
}
