//! `dd-core` — foundational types for the `rust_dd` delivery dispatch
//! framework.
//!
//! This crate is a dependency of every other `dd-*` crate.  It intentionally
//! has no `dd-*` dependencies and minimal external ones (only `thiserror`,
//! plus optional `serde`).
//!
//! # What lives here
//!
//! | Module     | Contents                                            |
//! |------------|-----------------------------------------------------|
//! | [`ids`]    | `DepotId`, `OrderId`, `UnitId`, `StationId`         |
//! | [`grid`]   | `GridPoint`, `Metric` (grid / rounded Euclidean)    |
//! | [`budget`] | `RunBudget`, `BudgetClock`                          |
//! | [`error`]  | `CoreError`, `CoreResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                              |
//! |---------|-----------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types. |

pub mod budget;
pub mod error;
pub mod grid;
pub mod ids;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use budget::{BudgetClock, RunBudget};
pub use error::{CoreError, CoreResult};
pub use grid::{GridPoint, Metric};
pub use ids::{DepotId, OrderId, StationId, UnitId};
