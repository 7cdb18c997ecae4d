//! `dd-charging` — the recharge-scheduling model for the rust_dd framework.
//!
//! Independent of the dispatch loop: given a bank of heterogeneous charging
//! stations, a fleet snapshot, and a validated unit→station assignment, it
//! computes how long each unit — and each station — needs to bring every
//! battery back to full.
//!
//! # Crate layout
//!
//! | Module         | Contents                                          |
//! |----------------|---------------------------------------------------|
//! | [`station`]    | `StationKind`, `ChargingStation`                  |
//! | [`assignment`] | `StationAssignment` (capacity-checked ownership map) |
//! | [`schedule`]   | `charging_time`, `station_max_charging_time`, `compute_schedule` |
//! | [`error`]      | `ChargingError`, `ChargingResult<T>`              |
//!
//! Everything here is a pure function over immutable snapshots: computing a
//! schedule never mutates a battery level, so the same inputs always yield
//! the same schedule.

pub mod assignment;
pub mod error;
pub mod schedule;
pub mod station;

#[cfg(test)]
mod tests;

pub use assignment::StationAssignment;
pub use error::{ChargingError, ChargingResult};
pub use schedule::{ChargingSchedule, charging_time, compute_schedule, station_max_charging_time};
pub use station::{ChargingStation, StationKind};
