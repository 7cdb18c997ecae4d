//! Charging-time computation.
//!
//! All functions here are pure: they read battery levels from an immutable
//! fleet snapshot and never write one back, so computing a schedule twice
//! over the same snapshot yields identical results.

use rustc_hash::FxHashMap;

use dd_core::{StationId, UnitId};
use dd_fleet::{BatteryLevel, Unit};

use crate::assignment::StationAssignment;
use crate::station::{ChargingStation, StationKind};
use crate::{ChargingError, ChargingResult};

/// Minutes to bring one battery from its current level back to full at
/// `station`.
///
/// Base time is `(100 − level) / rate`; a `Fast` station divides that by
/// `fast_factor` (validated positive and finite — typically > 1).
pub fn charging_time(
    battery:     BatteryLevel,
    station:     &ChargingStation,
    fast_factor: f64,
) -> ChargingResult<f64> {
    if !fast_factor.is_finite() || fast_factor <= 0.0 {
        return Err(ChargingError::InvalidFastFactor(fast_factor));
    }
    let base = (100.0 - battery.percent()) / station.rate_per_minute;
    Ok(match station.kind {
        StationKind::Fast     => base / fast_factor,
        StationKind::Standard => base,
    })
}

/// Minutes until *every* battery in `batteries` is full at `station` — the
/// slowest unit gates the station.  `0` for an empty station.
pub fn station_max_charging_time(
    station:     &ChargingStation,
    batteries:   impl IntoIterator<Item = BatteryLevel>,
    fast_factor: f64,
) -> ChargingResult<f64> {
    let mut max = 0.0f64;
    for battery in batteries {
        max = max.max(charging_time(battery, station, fast_factor)?);
    }
    Ok(max)
}

// ── ChargingSchedule ──────────────────────────────────────────────────────────

/// The computed recharge schedule for one station bank.
#[derive(Clone, Debug, Default)]
pub struct ChargingSchedule {
    /// Minutes until each assigned unit is full at its station.
    pub per_unit: FxHashMap<UnitId, f64>,

    /// Minutes until each station has charged all of its units
    /// (its slowest unit's time; `0.0` for stations with no units).
    pub per_station: FxHashMap<StationId, f64>,

    /// Sum of the per-station maxima divided by the total number of
    /// assigned units.
    ///
    /// Note the weighting: this averages *station-gating* times over units,
    /// which is **not** the mean of `per_unit` values.  Two units at one
    /// slow station contribute that station's single maximum (counted once)
    /// spread over both units.  `0.0` when no units are assigned.
    pub average: f64,
}

/// Compute the full charging schedule for `stations` over the fleet
/// snapshot in `units`, per the validated `assignment`.
///
/// Pure and idempotent — battery levels are read, never written.
pub fn compute_schedule(
    stations:    &[ChargingStation],
    units:       &[Unit],
    assignment:  &StationAssignment,
    fast_factor: f64,
) -> ChargingResult<ChargingSchedule> {
    let batteries: FxHashMap<UnitId, BatteryLevel> =
        units.iter().map(|u| (u.id, u.battery)).collect();

    let mut schedule = ChargingSchedule::default();
    let mut station_sum = 0.0f64;

    for station in stations {
        let mut station_max = 0.0f64;
        for &unit in assignment.units_at(station.id) {
            // Holds whenever `units` is the snapshot the assignment was
            // validated against; a mismatched snapshot is rejected here.
            let battery = *batteries.get(&unit).ok_or(ChargingError::UnknownUnit(unit))?;
            let minutes = charging_time(battery, station, fast_factor)?;
            schedule.per_unit.insert(unit, minutes);
            station_max = station_max.max(minutes);
        }
        schedule.per_station.insert(station.id, station_max);
        station_sum += station_max;
    }

    schedule.average = if assignment.is_empty() {
        0.0
    } else {
        station_sum / assignment.len() as f64
    };

    Ok(schedule)
}
