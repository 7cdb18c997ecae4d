//! `dd-output` — dispatch result writers for the rust_dd framework.
//!
//! The CSV backend creates two files in the configured directory:
//!
//! | File              | Contents                                  |
//! |-------------------|-------------------------------------------|
//! | `assignments.csv` | One row per completed assignment          |
//! | `run_summary.csv` | Exactly one row, written at run end       |
//!
//! The backend implements [`ReportWriter`] and is driven by
//! [`RecordingObserver`], which implements `dd_dispatch::DispatchObserver`.
//!
//! # Usage
//!
//! ```rust,ignore
//! use dd_output::{CsvReportWriter, RecordingObserver};
//!
//! let writer = CsvReportWriter::new(Path::new("./output"))?;
//! let mut obs = RecordingObserver::new(writer);
//! let report = dispatcher.run(&orders, &mut obs);
//! obs.take_error().map(|e| eprintln!("output error: {e}"));
//! ```

pub mod csv;
pub mod error;
pub mod observer;
pub mod row;
pub mod writer;


pub use csv::CsvReportWriter;
pub use error::{OutputError, OutputResult};
pub use observer::RecordingObserver;
pub use row::{AssignmentRow, RunSummaryRow};
pub use writer::ReportWriter;
