//! Simulation observer trait for progress reporting and data collection.

use sc_core::Tick;

use crate::{TickReport, World};

/// Callbacks invoked by [`TickScheduler::run`][crate::TickScheduler::run] at
/// key points in the tick loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — progress printer
///
/// ```rust,ignore
/// struct ProgressPrinter { interval: u64 }
///
/// impl SimObserver for ProgressPrinter {
///     fn on_tick_end(&mut self, report: &TickReport, _world: &World) {
///         if report.tick.0 % self.interval == 0 {
///             println!("{}: {} deliveries", report.tick, report.deliveries.len());
///         }
///     }
/// }
/// ```
pub trait SimObserver {
    /// Called at the very start of each tick, before any processing.
    fn on_tick_start(&mut self, _tick: Tick) {}

    /// Called after each tick commits, with the tick's report and read-only
    /// access to the freshly committed world.
    fn on_tick_end(&mut self, _report: &TickReport, _world: &World) {}

    /// Called once after the final tick commits (or after a fatal abort).
    fn on_sim_end(&mut self, _final_tick: Tick) {}
}

/// A [`SimObserver`] that does nothing.  Use when you need to call `run` but
/// don't want progress callbacks.
pub struct NoopObserver;

impl SimObserver for NoopObserver {}
