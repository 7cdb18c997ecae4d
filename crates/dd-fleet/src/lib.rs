//! `dd-fleet` — domain data model for the `rust_dd` framework.
//!
//! # Crate layout
//!
//! | Module    | Contents                                         |
//! |-----------|--------------------------------------------------|
//! | [`depot`] | `Depot`, `DepotRoster` (validated, nearest-query) |
//! | [`order`] | `Order` and unit-count accounting                |
//! | [`unit`]  | `UnitKind`, `BatteryLevel`, `Unit`               |
//! | [`error`] | `FleetError`, `FleetResult<T>`                   |
//!
//! Everything here is a plain data record plus free functions or small
//! inherent methods — no behavior-bearing objects.  The dispatch engine and
//! the charging model both operate over immutable snapshots of these types,
//! which keeps them testable as pure functions.

pub mod depot;
pub mod error;
pub mod order;
pub mod unit;


pub use depot::{Depot, DepotRoster};
pub use error::{FleetError, FleetResult};
pub use order::Order;
pub use unit::{BatteryLevel, DrainOutcome, Unit, UnitKind};
