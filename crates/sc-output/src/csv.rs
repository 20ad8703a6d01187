//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `deliveries.csv`
//! - `tick_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{DeliveryRow, OutputResult, TickSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    deliveries: Writer<File>,
    summaries:  Writer<File>,
    finished:   bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut deliveries = Writer::from_path(dir.join("deliveries.csv"))?;
        deliveries.write_record([
            "tick",
            "order_id",
            "sku",
            "origin",
            "destination",
            "quantity",
            "lead_ticks",
        ])?;

        let mut summaries = Writer::from_path(dir.join("tick_summaries.csv"))?;
        summaries.write_record([
            "tick",
            "deliveries",
            "orders_placed",
            "units_sold",
            "lots_produced",
            "shortfall_units",
            "route_failures",
        ])?;

        Ok(Self {
            deliveries,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_deliveries(&mut self, rows: &[DeliveryRow]) -> OutputResult<()> {
        for row in rows {
            self.deliveries.write_record(&[
                row.tick.to_string(),
                row.order_id.to_string(),
                row.sku.to_string(),
                row.origin.to_string(),
                row.destination.to_string(),
                row.quantity.to_string(),
                row.lead_ticks.to_string(),
            ])?;
        }
        Ok(())
    }

    fn write_tick_summary(&mut self, row: &TickSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.tick.to_string(),
            row.deliveries.to_string(),
            row.orders_placed.to_string(),
            row.units_sold.to_string(),
            row.lots_produced.to_string(),
            row.shortfall_units.to_string(),
            row.route_failures.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.deliveries.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}
