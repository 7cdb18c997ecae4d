//! The `Dispatcher` and its per-order loop.

use dd_core::{BudgetClock, Metric, RunBudget};
use dd_fleet::{BatteryLevel, DepotRoster, DrainOutcome, Order, Unit};

use crate::error::{DispatchError, DispatchResult};
use crate::observer::DispatchObserver;
use crate::policy::{must_recharge, travel_drain};
use crate::report::{AssignmentRecord, DispatchReport, RunOutcome};
use crate::state::RunState;

// ── DispatchConfig ────────────────────────────────────────────────────────────

/// Static parameters of one dispatch run.
///
/// Construction validates rates and capacities, so a malformed configuration
/// is rejected before any order is touched — the loop itself never has to
/// discover a config error mid-batch.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DispatchConfig {
    /// The single distance metric used for every leg of this run.
    pub metric: Metric,

    /// Battery percentage consumed per distance unit.
    pub consumption_rate: f64,

    /// Items one delivery unit carries per trip.
    pub unit_capacity: u32,

    /// The acting unit's charge at run start.
    pub initial_battery: BatteryLevel,

    pub budget: RunBudget,
}

impl DispatchConfig {
    pub fn new(
        metric:           Metric,
        consumption_rate: f64,
        unit_capacity:    u32,
        initial_battery:  BatteryLevel,
        budget:           RunBudget,
    ) -> DispatchResult<Self> {
        if !consumption_rate.is_finite() || consumption_rate <= 0.0 {
            return Err(DispatchError::InvalidConsumptionRate(consumption_rate));
        }
        if unit_capacity == 0 {
            return Err(DispatchError::ZeroUnitCapacity);
        }
        Ok(Self { metric, consumption_rate, unit_capacity, initial_battery, budget })
    }

    /// Derive a config from a fleet unit: its consumption rate and current
    /// battery become the run's energy model.
    pub fn for_unit(
        unit:          &Unit,
        metric:        Metric,
        unit_capacity: u32,
        budget:        RunBudget,
    ) -> DispatchResult<Self> {
        Self::new(metric, unit.consumption_rate, unit_capacity, unit.battery, budget)
    }
}

// ── Dispatcher ────────────────────────────────────────────────────────────────

/// The delivery scheduler.
///
/// Borrows the depot roster read-only; owns nothing mutable between runs.
/// Each [`run`][Dispatcher::run] call is an independent, atomic unit of
/// work — concurrent runs over disjoint rosters need no coordination.
pub struct Dispatcher<'a> {
    config: DispatchConfig,
    roster: &'a DepotRoster,
}

impl<'a> Dispatcher<'a> {
    pub fn new(config: DispatchConfig, roster: &'a DepotRoster) -> Self {
        Self { config, roster }
    }

    /// Process `orders` in input order and return the aggregate report.
    ///
    /// Termination: all orders consumed (`Completed`), a governor trips
    /// (`BudgetExceeded`), or a defect-class condition fires
    /// (`BatteryExhausted`, `Unreachable`).  Every early exit keeps the
    /// assignments recorded before the stopping instant.
    pub fn run<O: DispatchObserver>(&self, orders: &[Order], observer: &mut O) -> DispatchReport {
        let metric = self.config.metric;
        let rate   = self.config.consumption_rate;

        let clock = BudgetClock::start(self.config.budget.wall_limit);
        let mut state = RunState::new(self.config.initial_battery);
        let mut assignments: Vec<AssignmentRecord> = Vec::with_capacity(orders.len());
        let mut outcome = RunOutcome::Completed;

        for order in orders {
            // ── ① Assign: nearest depot for this order ────────────────────
            let mut depot = self.roster.nearest(order.location, metric);
            let mut distance = metric.distance(order.location, depot.location);

            // ── ② Recharge diversion ──────────────────────────────────────
            //
            // The diversion leg costs time but no battery: the unit leaves
            // the depot at exactly full charge.  The depot (and hence the
            // delivery distance) is recomputed afterwards.
            if must_recharge(state.battery.percent(), distance, rate) {
                state.total_time += distance;
                state.battery.recharge();
                observer.on_recharge(order.id, depot, distance);

                depot = self.roster.nearest(order.location, metric);
                distance = metric.distance(order.location, depot.location);

                if must_recharge(state.battery.percent(), distance, rate) {
                    // Even a full charge cannot cover this leg.  Named exit
                    // instead of a recharge loop.
                    outcome = RunOutcome::Unreachable;
                    break;
                }
            }

            // ── ③ Deliver: 1 distance unit = 1 time unit ─────────────────
            state.total_time += distance;

            // ── ④ Drain ───────────────────────────────────────────────────
            let exhausted =
                state.battery.drain(travel_drain(distance, rate)) == DrainOutcome::Exhausted;

            // ── ⑤ Account units ───────────────────────────────────────────
            state.units_used += order.units_required(self.config.unit_capacity);

            if exhausted {
                outcome = RunOutcome::BatteryExhausted;
                break;
            }

            // ── ⑥ Govern: both budgets, every iteration ───────────────────
            //
            // The tripping order's time and units are already counted, but
            // its record is not appended.  On a trip the reported total is
            // the minimum of the two governed quantities at this instant.
            if self.config.budget.logical_exceeded(state.total_time) || clock.wall_exceeded() {
                outcome = RunOutcome::BudgetExceeded;
                state.total_time = state.total_time.min(clock.elapsed_ms());
                break;
            }

            // ── ⑦ Record ──────────────────────────────────────────────────
            let record = AssignmentRecord {
                order:         order.id,
                depot:         depot.id,
                delivery_time: distance,
            };
            observer.on_assignment(&record, order, depot);
            assignments.push(record);
        }

        let report = DispatchReport {
            total_time:    state.total_time,
            units_used:    state.units_used,
            final_battery: state.battery,
            outcome,
            assignments,
        };
        observer.on_run_end(&report);
        report
    }
}
