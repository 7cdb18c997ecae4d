//! citygrid — smallest end-to-end example for the rust_dd framework.
//!
//! Dispatches a seeded batch of synthetic orders across a three-depot grid
//! city, writes the assignment log and run summary as CSV, then computes
//! the recharge schedule for the returning fleet at a three-station bank.

use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use dd_charging::{ChargingStation, StationKind, compute_schedule};
use dd_core::{GridPoint, Metric, OrderId, RunBudget, StationId};
use dd_dispatch::{DispatchConfig, Dispatcher};
use dd_fleet::{DepotRoster, Order};
use dd_input::{load_assignment_reader, load_units_reader};
use dd_output::{CsvReportWriter, RecordingObserver};

// ── Constants ─────────────────────────────────────────────────────────────────

const SEED:            u64 = 42;
const ORDER_COUNT:     u32 = 12;
const UNIT_CAPACITY:   u32 = 3;
const FAST_FACTOR:     f64 = 2.0;
const LOGICAL_BUDGET:  u64 = 500;
const WALL_BUDGET_MS:  u64 = 250;
const OUTPUT_DIR:      &str = "output";

// ── Fleet CSV ─────────────────────────────────────────────────────────────────

const UNITS_CSV: &str = "\
kind,max_load,consumption_rate,battery_level\n\
normal,10,0.1,100\n\
normal,8,0.1,65\n\
normal,12,0.1,40\n\
fast,5,0.2,80\n\
fast,5,0.2,90\n\
";

// Units 0-2 at the cheap station, 3-4 at the fast one.
const ASSIGNMENT_CSV: &str = "\
unit_id,station_id\n\
0,0\n\
1,0\n\
2,1\n\
3,2\n\
4,2\n\
";

// ── Scenario pieces ───────────────────────────────────────────────────────────

fn depots() -> Result<DepotRoster> {
    Ok(DepotRoster::new(vec![
        ("North".to_string(), GridPoint::new(0, 15)),
        ("Center".to_string(), GridPoint::new(0, 0)),
        ("Harbor".to_string(), GridPoint::new(-12, -8)),
    ])?)
}

fn synthetic_orders(rng: &mut SmallRng) -> Vec<Order> {
    (0..ORDER_COUNT)
        .map(|i| {
            let location = GridPoint::new(rng.gen_range(-20..=20), rng.gen_range(-20..=20));
            let items = (0..rng.gen_range(1..=4))
                .map(|j| format!("parcel-{i}-{j}"))
                .collect();
            Order::new(OrderId(i), format!("customer-{i}"), location, items)
        })
        .collect()
}

fn station_bank() -> Result<Vec<ChargingStation>> {
    Ok(vec![
        ChargingStation::new(StationId(0), "Cheapest", StationKind::Standard, 100, 10.0, 5)?,
        ChargingStation::new(StationId(1), "Normal", StationKind::Standard, 200, 5.0, 5)?,
        ChargingStation::new(StationId(2), "Fast", StationKind::Fast, 300, 20.0, 2)?,
    ])
}

// ── Main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    // Optional first argument selects the metric; defaults to grid streets.
    let metric = match std::env::args().nth(1) {
        Some(arg) => arg.parse::<Metric>().context("parse metric argument")?,
        None      => Metric::Grid,
    };

    let mut rng = SmallRng::seed_from_u64(SEED);

    let roster = depots()?;
    let orders = synthetic_orders(&mut rng);
    let units = load_units_reader(Cursor::new(UNITS_CSV))?;

    // The freshest unit flies the batch.
    let config = DispatchConfig::for_unit(
        &units[0],
        metric,
        UNIT_CAPACITY,
        RunBudget::new(LOGICAL_BUDGET, Duration::from_millis(WALL_BUDGET_MS)),
    )?;

    std::fs::create_dir_all(OUTPUT_DIR)?;
    let writer = CsvReportWriter::new(Path::new(OUTPUT_DIR))
        .context("open output CSV files")?;
    let mut observer = RecordingObserver::new(writer);

    let report = Dispatcher::new(config, &roster).run(&orders, &mut observer);
    if let Some(e) = observer.take_error() {
        eprintln!("output error: {e}");
    }

    println!("outcome:          {}", report.outcome);
    println!("total time:       {} units", report.total_time);
    println!("units used:       {}", report.units_used);
    println!("final battery:    {}", report.final_battery);
    println!("assignments:      {}/{}", report.assignments.len(), orders.len());
    if !report.outcome.is_completed() {
        println!(
            "(run ended early — {} orders have no assignment record)",
            orders.len() - report.assignments.len(),
        );
    }
    for record in &report.assignments {
        let Some(depot) = roster.get(record.depot) else { continue };
        let order = &orders[record.order.index()];
        println!(
            "  {} delivered {} items to {} at {} in {} minutes",
            depot.name,
            order.size(),
            order.customer,
            order.location,
            record.delivery_time,
        );
    }

    // ── Recharge schedule for the whole fleet ─────────────────────────────
    let stations = station_bank()?;
    let assignment = load_assignment_reader(Cursor::new(ASSIGNMENT_CSV), &stations, &units)?;
    let schedule = compute_schedule(&stations, &units, &assignment, FAST_FACTOR)?;

    println!("\ncharging schedule (fast factor {FAST_FACTOR}):");
    for station in &stations {
        println!(
            "  {:8} — {} units, ready in {:.1} min",
            station.name,
            assignment.units_at(station.id).len(),
            schedule.per_station[&station.id],
        );
        for &unit_id in assignment.units_at(station.id) {
            let unit = &units[unit_id.index()];
            println!(
                "    unit {} at {} — full in {:.1} min, draws {}% per leg at max load",
                unit.id.0,
                unit.battery,
                schedule.per_unit[&unit.id],
                unit.full_load_draw(),
            );
        }
    }
    println!("  average charge time: {:.2} min", schedule.average);

    Ok(())
}
