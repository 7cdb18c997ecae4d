//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `assignments.csv`
//! - `run_summary.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::ReportWriter;
use crate::{AssignmentRow, OutputResult, RunSummaryRow};

/// Writes dispatch output to two CSV files.
pub struct CsvReportWriter {
    assignments: Writer<File>,
    summary:     Writer<File>,
    finished:    bool,
}

impl CsvReportWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut assignments = Writer::from_path(dir.join("assignments.csv"))?;
        assignments.write_record(["order_id", "customer", "depot", "items", "delivery_time"])?;

        let mut summary = Writer::from_path(dir.join("run_summary.csv"))?;
        summary.write_record([
            "total_time",
            "units_used",
            "final_battery",
            "outcome",
            "completed_orders",
        ])?;

        Ok(Self {
            assignments,
            summary,
            finished: false,
        })
    }
}

impl ReportWriter for CsvReportWriter {
    fn write_assignment(&mut self, row: &AssignmentRow) -> OutputResult<()> {
        self.assignments.write_record(&[
            row.order_id.to_string(),
            row.customer.clone(),
            row.depot.clone(),
            row.items.to_string(),
            row.delivery_time.to_string(),
        ])?;
        Ok(())
    }

    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()> {
        self.summary.write_record(&[
            row.total_time.to_string(),
            row.units_used.to_string(),
            format!("{:.2}", row.final_battery),
            row.outcome.to_string(),
            row.completed_orders.to_string(),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.assignments.flush()?;
        self.summary.flush()?;
        Ok(())
    }
}
