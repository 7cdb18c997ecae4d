//! Plain data row types written by output backends.

use dd_dispatch::RunOutcome;

/// One completed order assignment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssignmentRow {
    pub order_id: u32,
    pub customer: String,
    pub depot:    String,
    pub items:    u64,
    /// Delivery-leg travel time in time units.
    pub delivery_time: u64,
}

/// The aggregate result of one dispatch run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummaryRow {
    pub total_time:       u64,
    pub units_used:       u64,
    pub final_battery:    f64,
    pub outcome:          RunOutcome,
    pub completed_orders: u64,
}
