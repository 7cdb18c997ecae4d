//! `RecordingObserver<W>` — bridges `DispatchObserver` to a `ReportWriter`.

use dd_dispatch::{AssignmentRecord, DispatchObserver, DispatchReport};
use dd_fleet::{Depot, Order};

use crate::OutputError;
use crate::row::{AssignmentRow, RunSummaryRow};
use crate::writer::ReportWriter;

/// A [`DispatchObserver`] that writes assignment rows and the run summary to
/// any [`ReportWriter`] backend.
///
/// Errors from the writer are stored internally because `DispatchObserver`
/// methods have no return value.  After `dispatcher.run()` returns, check
/// for errors with [`take_error`][Self::take_error].
pub struct RecordingObserver<W: ReportWriter> {
    writer:     W,
    last_error: Option<OutputError>,
}

impl<W: ReportWriter> RecordingObserver<W> {
    pub fn new(writer: W) -> Self {
        Self { writer, last_error: None }
    }

    /// Take the stored write error (if any) after `run()` returns.
    ///
    /// Returns `None` if all writes succeeded.
    pub fn take_error(&mut self) -> Option<OutputError> {
        self.last_error.take()
    }

    /// Unwrap the inner writer (e.g. to inspect files after the run).
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

impl<W: ReportWriter> DispatchObserver for RecordingObserver<W> {
    fn on_assignment(&mut self, record: &AssignmentRecord, order: &Order, depot: &Depot) {
        let row = AssignmentRow {
            order_id:      record.order.0,
            customer:      order.customer.clone(),
            depot:         depot.name.clone(),
            items:         order.size() as u64,
            delivery_time: record.delivery_time,
        };
        let result = self.writer.write_assignment(&row);
        self.store_err(result);
    }

    fn on_run_end(&mut self, report: &DispatchReport) {
        let row = RunSummaryRow {
            total_time:       report.total_time,
            units_used:       report.units_used,
            final_battery:    report.final_battery.percent(),
            outcome:          report.outcome,
            completed_orders: report.assignments.len() as u64,
        };
        let result = self.writer.write_summary(&row);
        self.store_err(result);
        let result = self.writer.finish();
        self.store_err(result);
    }
}
