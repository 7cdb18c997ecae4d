//! CSV loaders.
//!
//! # CSV formats
//!
//! Depots — one row per depot, roster order = file order:
//!
//! ```csv
//! name,x,y
//! North,0,0
//! South,10,10
//! ```
//!
//! Orders — one row per order, `items` holds `;`-separated descriptors
//! (empty string → an order with no items):
//!
//! ```csv
//! customer,x,y,items
//! Ada,1,1,book;lamp
//! Grace,4,-2,kettle
//! ```
//!
//! Units — `kind` is `normal` or `fast`, case-insensitive:
//!
//! ```csv
//! kind,max_load,consumption_rate,battery_level
//! normal,10,0.1,100
//! fast,5,0.2,40
//! ```
//!
//! Station assignments — pairs validated against the station bank and fleet
//! snapshots (capacity limits included) before the map is returned:
//!
//! ```csv
//! unit_id,station_id
//! 0,0
//! 1,2
//! ```

use std::io::Read;
use std::path::Path;

use serde::Deserialize;

use dd_charging::{ChargingStation, StationAssignment};
use dd_core::{GridPoint, OrderId, StationId, UnitId};
use dd_fleet::{BatteryLevel, DepotRoster, Order, Unit, UnitKind};

use crate::{InputError, InputResult};

// ── CSV records ───────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct DepotRecord {
    name: String,
    x:    i32,
    y:    i32,
}

#[derive(Deserialize)]
struct OrderRecord {
    customer: String,
    x:        i32,
    y:        i32,
    items:    String,
}

#[derive(Deserialize)]
struct UnitRecord {
    kind:             String,
    max_load:         u32,
    consumption_rate: f64,
    battery_level:    f64,
}

#[derive(Deserialize)]
struct AssignmentRecord {
    unit_id:    u16,
    station_id: u16,
}

// ── Depots ────────────────────────────────────────────────────────────────────

/// Load a [`DepotRoster`] from a CSV file.
pub fn load_depots_csv(path: &Path) -> InputResult<DepotRoster> {
    load_depots_reader(std::fs::File::open(path)?)
}

/// Like [`load_depots_csv`] but accepts any `Read` source.
///
/// Inherits the roster's validation: an empty file or a duplicate depot
/// name is rejected here, before any run starts.
pub fn load_depots_reader<R: Read>(reader: R) -> InputResult<DepotRoster> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut entries = Vec::new();
    for result in csv_reader.deserialize::<DepotRecord>() {
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;
        entries.push((row.name, GridPoint::new(row.x, row.y)));
    }
    Ok(DepotRoster::new(entries)?)
}

// ── Orders ────────────────────────────────────────────────────────────────────

/// Load an order batch from a CSV file.  `OrderId`s follow file order.
pub fn load_orders_csv(path: &Path) -> InputResult<Vec<Order>> {
    load_orders_reader(std::fs::File::open(path)?)
}

/// Like [`load_orders_csv`] but accepts any `Read` source.
pub fn load_orders_reader<R: Read>(reader: R) -> InputResult<Vec<Order>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut orders = Vec::new();
    for (i, result) in csv_reader.deserialize::<OrderRecord>().enumerate() {
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;
        let items: Vec<String> = if row.items.is_empty() {
            Vec::new()
        } else {
            row.items.split(';').map(str::to_string).collect()
        };
        orders.push(Order::new(
            OrderId(i as u32),
            row.customer,
            GridPoint::new(row.x, row.y),
            items,
        ));
    }
    Ok(orders)
}

// ── Units ─────────────────────────────────────────────────────────────────────

/// Load a fleet snapshot from a CSV file.  `UnitId`s follow file order.
pub fn load_units_csv(path: &Path) -> InputResult<Vec<Unit>> {
    load_units_reader(std::fs::File::open(path)?)
}

/// Like [`load_units_csv`] but accepts any `Read` source.
pub fn load_units_reader<R: Read>(reader: R) -> InputResult<Vec<Unit>> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut units = Vec::new();
    for (i, result) in csv_reader.deserialize::<UnitRecord>().enumerate() {
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;
        units.push(Unit::new(
            UnitId(i as u16),
            parse_kind(&row.kind)?,
            row.max_load,
            row.consumption_rate,
            BatteryLevel::new(row.battery_level)?,
        )?);
    }
    Ok(units)
}

// ── Station assignment ────────────────────────────────────────────────────────

/// Load and validate a unit→station assignment from a CSV file.
pub fn load_assignment_csv(
    path:     &Path,
    stations: &[ChargingStation],
    units:    &[Unit],
) -> InputResult<StationAssignment> {
    load_assignment_reader(std::fs::File::open(path)?, stations, units)
}

/// Like [`load_assignment_csv`] but accepts any `Read` source.
///
/// Validation (unknown IDs, duplicates, station capacity) happens in
/// [`StationAssignment::new`] against the given snapshots.
pub fn load_assignment_reader<R: Read>(
    reader:   R,
    stations: &[ChargingStation],
    units:    &[Unit],
) -> InputResult<StationAssignment> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    let mut pairs = Vec::new();
    for result in csv_reader.deserialize::<AssignmentRecord>() {
        let row = result.map_err(|e| InputError::Parse(e.to_string()))?;
        pairs.push((UnitId(row.unit_id), StationId(row.station_id)));
    }
    Ok(StationAssignment::new(pairs, stations, units)?)
}

// ── Helpers ───────────────────────────────────────────────────────────────────

fn parse_kind(s: &str) -> InputResult<UnitKind> {
    match s.trim().to_ascii_lowercase().as_str() {
        "normal" => Ok(UnitKind::Normal),
        "fast"   => Ok(UnitKind::Fast),
        other    => Err(InputError::Parse(format!("unknown unit kind: {other:?}"))),
    }
}
