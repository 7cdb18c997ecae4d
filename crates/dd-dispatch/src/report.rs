//! Result types handed back to output collaborators.

use dd_core::{DepotId, OrderId};
use dd_fleet::BatteryLevel;

// ── RunOutcome ────────────────────────────────────────────────────────────────

/// How a dispatch run ended.
///
/// `BudgetExceeded` is a normal outcome, not a failure — a governor did its
/// job.  `BatteryExhausted` and `Unreachable` are defect-class conditions,
/// but all three early terminations still carry every assignment recorded
/// before the stopping instant.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RunOutcome {
    /// Every order in the batch was processed.
    Completed,
    /// The logical or wall-clock budget tripped mid-batch.
    BudgetExceeded,
    /// A drain clamped the battery at zero.
    BatteryExhausted,
    /// A delivery leg exceeded what a full charge can cover.
    Unreachable,
}

impl RunOutcome {
    /// `true` for the one outcome that means "all orders processed".
    #[inline]
    pub fn is_completed(self) -> bool {
        self == RunOutcome::Completed
    }
}

impl std::fmt::Display for RunOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            RunOutcome::Completed        => "completed",
            RunOutcome::BudgetExceeded   => "budget exceeded",
            RunOutcome::BatteryExhausted => "battery exhausted",
            RunOutcome::Unreachable      => "unreachable destination",
        };
        f.write_str(s)
    }
}

// ── AssignmentRecord ──────────────────────────────────────────────────────────

/// One order's depot assignment.  Immutable once written.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AssignmentRecord {
    pub order: OrderId,
    pub depot: DepotId,
    /// The delivery-leg travel time for this order, in time units.
    pub delivery_time: u64,
}

// ── DispatchReport ────────────────────────────────────────────────────────────

/// Aggregate result of one dispatch run.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchReport {
    /// Accumulated simulated time units.  On a budget trip this is the
    /// minimum of the simulated total and the elapsed wall-clock
    /// milliseconds at the stopping instant — the literal governed quantity,
    /// so check `outcome` before interpreting it as a schedule length.
    pub total_time: u64,

    /// Total delivery units consumed across processed orders.
    pub units_used: u64,

    /// The acting unit's battery level when the run ended.
    pub final_battery: BatteryLevel,

    pub outcome: RunOutcome,

    /// One record per fully processed order, in input order.
    pub assignments: Vec<AssignmentRecord>,
}
