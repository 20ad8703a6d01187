//! `sc-output` — simulation output writers for the sc supply-chain
//! simulator.
//!
//! The CSV backend creates two files:
//!
//! | File                 | Contents                              |
//! |----------------------|---------------------------------------|
//! | `deliveries.csv`     | one row per completed delivery        |
//! | `tick_summaries.csv` | one row per committed tick            |
//!
//! Backends implement [`OutputWriter`] and are driven by
//! [`SimOutputObserver`], which implements `sc_sim::SimObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use sc_output::{CsvWriter, SimOutputObserver};
//!
//! let writer = CsvWriter::new(Path::new("./output"))?;
//! let mut obs = SimOutputObserver::new(writer);
//! sim.run(&mut obs)?;
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvWriter;
pub use error::{OutputError, OutputResult};
pub use observer::SimOutputObserver;
pub use row::{DeliveryRow, TickSummaryRow};
pub use writer::OutputWriter;
