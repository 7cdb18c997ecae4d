//! The `ReportWriter` trait implemented by all backend writers.

use crate::{AssignmentRow, OutputResult, RunSummaryRow};

/// Trait implemented by output backends.
///
/// All methods are infallible from the observer's perspective — errors are
/// stored internally and retrieved with
/// [`RecordingObserver::take_error`][crate::RecordingObserver::take_error].
pub trait ReportWriter {
    /// Write one assignment row.
    fn write_assignment(&mut self, row: &AssignmentRow) -> OutputResult<()>;

    /// Write the run summary row.
    fn write_summary(&mut self, row: &RunSummaryRow) -> OutputResult<()>;

    /// Flush and close all underlying file handles.
    ///
    /// Idempotent — safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}
