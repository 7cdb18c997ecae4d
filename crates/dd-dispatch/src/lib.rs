//! `dd-dispatch` — the delivery scheduling loop for the rust_dd framework.
//!
//! # Per-order loop
//!
//! ```text
//! for order in orders (input order):
//!   ① Assign    — nearest depot to the order under the run's metric.
//!   ② Recharge? — if the battery cannot cover the leg, divert: add the
//!                 recharge-leg distance to total time, reset to full,
//!                 re-assign.  Still short at full charge → Unreachable.
//!   ③ Deliver   — add the delivery-leg distance to total time
//!                 (1 distance unit = 1 time unit).
//!   ④ Drain     — battery -= distance × consumption rate; a clamp at zero
//!                 ends the run with BatteryExhausted.
//!   ⑤ Account   — units_used += ceil(order size / unit capacity).
//!   ⑥ Govern    — stop when the logical or the wall budget trips
//!                 (BudgetExceeded; checked every iteration).
//!   ⑦ Record    — append the order's AssignmentRecord.
//! ```
//!
//! Every early termination preserves the assignments recorded so far.  The
//! loop is single-threaded, synchronous, and non-reentrant: one `run` call
//! is an atomic unit of work, and orders arriving mid-run belong to the
//! *next* run's batch.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use dd_dispatch::{DispatchConfig, Dispatcher, NoopObserver};
//!
//! let config = DispatchConfig::new(Metric::Grid, 0.1, 1, BatteryLevel::FULL, budget)?;
//! let report = Dispatcher::new(config, &roster).run(&orders, &mut NoopObserver);
//! ```

pub mod engine;
pub mod error;
pub mod observer;
pub mod policy;
pub mod report;
pub mod state;


pub use engine::{DispatchConfig, Dispatcher};
pub use error::{DispatchError, DispatchResult};
pub use observer::{DispatchObserver, NoopObserver};
pub use policy::{must_recharge, travel_drain};
pub use report::{AssignmentRecord, DispatchReport, RunOutcome};
