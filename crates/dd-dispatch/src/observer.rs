//! Dispatch observer trait for progress reporting and data collection.

use dd_core::OrderId;
use dd_fleet::{Depot, Order};

use crate::report::{AssignmentRecord, DispatchReport};

/// Callbacks invoked by [`Dispatcher::run`][crate::Dispatcher::run] at key
/// points in the per-order loop.
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.  The core performs no formatting or
/// I/O of its own — this trait is the only surface output collaborators
/// attach to.
///
/// # Example — console progress
///
/// ```rust,ignore
/// struct Console;
///
/// impl DispatchObserver for Console {
///     fn on_assignment(&mut self, record: &AssignmentRecord, order: &Order, depot: &Depot) {
///         println!("{} delivered {} items to {}", depot.name, order.size(), order.customer);
///     }
/// }
/// ```
pub trait DispatchObserver {
    /// Called after an order's record is appended.
    fn on_assignment(&mut self, _record: &AssignmentRecord, _order: &Order, _depot: &Depot) {}

    /// Called when the unit diverts to `depot` to recharge before
    /// attempting `order`.  `leg_time` is the diversion's time cost.
    fn on_recharge(&mut self, _order: OrderId, _depot: &Depot, _leg_time: u64) {}

    /// Called exactly once, after the run terminates (for any outcome).
    fn on_run_end(&mut self, _report: &DispatchReport) {}
}

/// A [`DispatchObserver`] that does nothing.  Use when you need to call
/// `run` but don't want progress callbacks.
pub struct NoopObserver;

impl DispatchObserver for NoopObserver {}
