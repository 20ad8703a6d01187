//! Per-vehicle movement state.

use sc_core::{CellCoord, Order, VehicleId};
use sc_grid::Route;

use crate::{TransportError, TransportResult};

/// Outcome of advancing a vehicle by one tick.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Progress {
    /// No trip assigned; nothing moved.
    Idle,
    /// Moved to the given `position_index`, destination not yet reached.
    InTransit(usize),
    /// Reached the end of the route this tick.  The payload must be
    /// delivered before the tick ends.
    Arrived,
}

/// An in-flight journey: a route, how far along it the vehicle is, and the
/// order being carried.
#[derive(Debug, Clone)]
pub struct Trip {
    pub route: Route,
    /// Steps taken so far, in `[0, route.length()]`.  Only ever increases.
    pub position_index: usize,
    pub payload: Order,
}

impl Trip {
    /// The cell the vehicle currently occupies.
    #[inline]
    pub fn current_cell(&self) -> CellCoord {
        self.route.cell_at(self.position_index)
    }
}

/// A stateful mover bound to one facility's fleet.
///
/// A vehicle is either idle (no trip) or traversing a route at
/// `steps_per_tick` cells per tick.  Arrival (`position_index ==
/// route.length()`) is a same-tick event: [`deliver`](Self::deliver) hands
/// the payload back and the vehicle is immediately reusable.
#[derive(Debug, Clone)]
pub struct Vehicle {
    id: VehicleId,
    steps_per_tick: u32,
    trip: Option<Trip>,
}

impl Vehicle {
    /// Create an idle vehicle.  `steps_per_tick` must be ≥ 1 (validated at
    /// world construction).
    pub fn new(id: VehicleId, steps_per_tick: u32) -> Self {
        debug_assert!(steps_per_tick >= 1);
        Self { id, steps_per_tick, trip: None }
    }

    #[inline]
    pub fn id(&self) -> VehicleId {
        self.id
    }

    #[inline]
    pub fn steps_per_tick(&self) -> u32 {
        self.steps_per_tick
    }

    #[inline]
    pub fn trip(&self) -> Option<&Trip> {
        self.trip.as_ref()
    }

    #[inline]
    pub fn is_idle(&self) -> bool {
        self.trip.is_none()
    }

    /// `true` if the vehicle is at the end of its route with an undelivered
    /// payload.
    pub fn has_arrived(&self) -> bool {
        self.trip
            .as_ref()
            .is_some_and(|t| t.position_index == t.route.length())
    }

    /// Bind the vehicle to `route`, carrying `payload`.
    ///
    /// Fails with [`TransportError::AlreadyOccupied`] if a payload is
    /// already set; an in-flight trip is never silently replaced.
    pub fn assign(&mut self, route: Route, payload: Order) -> TransportResult<()> {
        if self.trip.is_some() {
            return Err(TransportError::AlreadyOccupied(self.id));
        }
        self.trip = Some(Trip { route, position_index: 0, payload });
        Ok(())
    }

    /// The position this vehicle would reach if advanced now, without
    /// mutating anything.  Used by the compute phase, which must not touch
    /// committed state; the commit phase replays it via [`advance`](Self::advance).
    pub fn planned_advance(&self) -> Progress {
        match &self.trip {
            None => Progress::Idle,
            Some(trip) => {
                let next = (trip.position_index + self.steps_per_tick as usize)
                    .min(trip.route.length());
                if next == trip.route.length() {
                    Progress::Arrived
                } else {
                    Progress::InTransit(next)
                }
            }
        }
    }

    /// Advance along the route by up to `steps_per_tick` cells, capped at
    /// the route's remaining length so the vehicle cannot overshoot.
    pub fn advance(&mut self) -> Progress {
        match &mut self.trip {
            None => Progress::Idle,
            Some(trip) => {
                trip.position_index = (trip.position_index + self.steps_per_tick as usize)
                    .min(trip.route.length());
                if trip.position_index == trip.route.length() {
                    Progress::Arrived
                } else {
                    Progress::InTransit(trip.position_index)
                }
            }
        }
    }

    /// Hand over the payload and return to the idle pool.
    ///
    /// Fails with [`TransportError::NotArrived`] while
    /// `position_index < route.length()`, and [`TransportError::Idle`] if
    /// there is no trip at all.
    pub fn deliver(&mut self) -> TransportResult<Order> {
        match &self.trip {
            None => Err(TransportError::Idle(self.id)),
            Some(trip) if trip.position_index < trip.route.length() => Err(
                TransportError::NotArrived(self.id, trip.position_index, trip.route.length()),
            ),
            Some(_) => {
                // Checked above: the trip exists and is at its destination.
                let trip = self.trip.take().ok_or(TransportError::Idle(self.id))?;
                Ok(trip.payload)
            }
        }
    }

    /// The cell this vehicle occupies, or `None` while idle (idle vehicles
    /// live "at" their facility and have no grid position of their own).
    pub fn current_cell(&self) -> Option<CellCoord> {
        self.trip.as_ref().map(Trip::current_cell)
    }
}
