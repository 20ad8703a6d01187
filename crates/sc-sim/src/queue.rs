//! `ActionQueue` — sparse per-tick external action queue.
//!
//! External drivers (demand generators, replenishment policies, test
//! harnesses) submit actions *for* a tick; the scheduler drains exactly that
//! tick's batch at the start of its collection phase.  Actions queued for
//! the current tick are therefore visible to their target unit in the same
//! tick's compute.
//!
//! `BTreeMap` keyed by tick gives O(log W) submit and drain where W is the
//! number of distinct future ticks with queued actions.

use std::collections::BTreeMap;

use sc_core::{FacilityId, Tick};
use sc_facility::{Action, UnitKind};

use crate::{SimError, SimResult};

/// An action bound to its target facility and unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubmittedAction {
    pub facility: FacilityId,
    pub unit:     UnitKind,
    pub action:   Action,
}

/// Queue mapping ticks to the actions that must be delivered at that tick.
#[derive(Default)]
pub struct ActionQueue {
    inner: BTreeMap<Tick, Vec<SubmittedAction>>,
    /// Cached total entry count for O(1) `len()`.
    total: usize,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `action` for delivery at `tick`.
    ///
    /// `tick` must be `now` or later; a submission for an already-committed
    /// tick fails with [`SimError::PastTick`] and leaves the queue untouched.
    pub fn submit(&mut self, now: Tick, tick: Tick, action: SubmittedAction) -> SimResult<()> {
        if tick < now {
            return Err(SimError::PastTick { submitted: tick, current: now });
        }
        self.inner.entry(tick).or_default().push(action);
        self.total += 1;
        Ok(())
    }

    /// Remove and return all actions queued for exactly `tick`, in
    /// submission order.
    pub fn drain_tick(&mut self, tick: Tick) -> Vec<SubmittedAction> {
        let actions = self.inner.remove(&tick).unwrap_or_default();
        self.total -= actions.len();
        actions
    }

    /// The earliest tick with at least one queued action.
    pub fn next_tick(&self) -> Option<Tick> {
        self.inner.keys().next().copied()
    }

    pub fn len(&self) -> usize {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}
