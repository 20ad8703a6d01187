//! Distribution unit: vehicle movement, delivery, and order dispatch.

use sc_core::{FacilityId, OrderId, Tick};
use sc_transport::{Fleet, Progress};

use crate::{Effect, RouteFailure, TickContext, UnitError, UnitKind, UnitPending};

/// Owns the facility's vehicle fleet.  Each tick it advances in-transit
/// vehicles, delivers arrived payloads, and assigns idle vehicles to
/// pending outbound orders oldest-first.
///
/// A vehicle that arrives this tick delivers this tick and immediately
/// rejoins the idle pool, so it can pick up a new order in the same tick.
#[derive(Debug)]
pub struct DistributionUnit {
    fleet: Fleet,
}

impl DistributionUnit {
    pub fn new(fleet: Fleet) -> Self {
        Self { fleet }
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    pub fn fleet_mut(&mut self) -> &mut Fleet {
        &mut self.fleet
    }

    pub fn compute(
        &self,
        facility: FacilityId,
        ctx: &TickContext<'_>,
    ) -> Result<UnitPending, UnitError> {
        let mut pending = UnitPending::new(facility, UnitKind::Distribution);
        let mut idle: Vec<_> = Vec::with_capacity(self.fleet.len());

        // Movement first.  planned_advance never mutates; the matching
        // advance happens in the commit pass.
        for vehicle in self.fleet.iter() {
            match vehicle.planned_advance() {
                Progress::Idle => idle.push(vehicle.id()),
                Progress::InTransit(position_index) => {
                    pending.effects.push(Effect::VehicleMoved {
                        facility,
                        vehicle: vehicle.id(),
                        position_index,
                    });
                }
                Progress::Arrived => {
                    let trip = vehicle.trip().expect("arrived vehicle has a trip");
                    pending.effects.push(Effect::VehicleMoved {
                        facility,
                        vehicle: vehicle.id(),
                        position_index: trip.route.length(),
                    });
                    pending.effects.push(Effect::OrderDelivered {
                        facility,
                        vehicle: vehicle.id(),
                        order: trip.payload.id,
                    });
                    // Delivery frees the vehicle within the same tick.
                    idle.push(vehicle.id());
                }
            }
        }

        // Dispatch oldest-first for reproducible assignment.  Routability
        // is checked for the whole backlog, not just the orders a free
        // vehicle could take, so an unroutable order surfaces as a failure
        // every tick it sits in the book.
        let mut backlog: Vec<(Tick, OrderId)> = ctx
            .orders
            .pending_from(facility)
            .map(|order| (order.placed_tick, order.id))
            .collect();
        backlog.sort_unstable();

        let mut next_idle = 0;
        for (_, order_id) in backlog {
            let order = ctx.orders.get(order_id).expect("backlog order exists");
            if ctx.routes.get(order.origin, order.destination).is_none() {
                let from = ctx
                    .facility(order.origin)
                    .expect("order origin exists")
                    .position();
                let to = ctx
                    .facility(order.destination)
                    .expect("order destination exists")
                    .position();
                pending.route_failures.push(RouteFailure {
                    order: order_id,
                    from,
                    to,
                });
                continue;
            }
            if next_idle >= idle.len() {
                // Routable but no free vehicle; it stays pending.
                continue;
            }
            pending.effects.push(Effect::VehicleAssigned {
                facility,
                vehicle: idle[next_idle],
                order: order_id,
            });
            next_idle += 1;
        }

        Ok(pending)
    }
}
