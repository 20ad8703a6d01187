//! `SimOutputObserver<W>` — bridges `SimObserver` to an `OutputWriter`.

use sc_core::Tick;
use sc_sim::{SimObserver, TickReport, World};

use crate::row::{DeliveryRow, TickSummaryRow};
use crate::writer::OutputWriter;
use crate::OutputError;

/// A [`SimObserver`] that writes tick summaries and deliveries to any
/// [`OutputWriter`] backend.
///
/// Errors from the writer are stored internally because `SimObserver`
/// methods have no return value.  After the run finishes, check for errors
/// with [`take_error`][Self::take_error].
pub struct SimOutputObserver<W: OutputWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: OutputWriter> SimOutputObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after the run returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the sim).
    pub fn into_writer(self) -> W {
        self.writer
    }

    fn store_err(&mut self, result: crate::OutputResult<()>) {
        if let Err(e) = result {
            // Keep only the first error.
            if self.last_error.is_none() {
                self.last_error = Some(e);
            }
        }
    }
}

impl<W: OutputWriter> SimObserver for SimOutputObserver<W> {
    fn on_tick_end(&mut self, report: &TickReport, _world: &World) {
        let shortfall_units: u64 = report
            .shortfalls
            .iter()
            .map(|s| s.quantity as u64)
            .sum();
        let summary = TickSummaryRow {
            tick:            report.tick.0,
            deliveries:      report.deliveries.len() as u64,
            orders_placed:   report.orders_placed as u64,
            units_sold:      report.units_sold as u64,
            lots_produced:   report.lots_produced as u64,
            shortfall_units,
            route_failures:  report.route_failures.len() as u64,
        };
        let result = self.writer.write_tick_summary(&summary);
        self.store_err(result);

        if !report.deliveries.is_empty() {
            let rows: Vec<DeliveryRow> = report
                .deliveries
                .iter()
                .map(|order| DeliveryRow {
                    tick:        report.tick.0,
                    order_id:    order.id.0,
                    sku:         order.sku.0,
                    origin:      order.origin.0,
                    destination: order.destination.0,
                    quantity:    order.quantity,
                    lead_ticks:  report.tick.since(order.placed_tick),
                })
                .collect();
            let result = self.writer.write_deliveries(&rows);
            self.store_err(result);
        }
    }

    fn on_sim_end(&mut self, _final_tick: Tick) {
        let result = self.writer.finish();
        self.store_err(result);
    }
}
