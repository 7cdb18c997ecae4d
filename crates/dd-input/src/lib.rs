//! `dd-input` — CSV batch loaders for the rust_dd framework.
//!
//! Input arrives as complete, validated batches: each loader reads a whole
//! CSV source, converts rows to domain types, and hands the finished batch
//! to the core in one call.  There is no interactive or incremental input
//! path — orders arriving while a run is in progress belong in the *next*
//! run's file.
//!
//! | Loader                  | CSV columns                                     |
//! |-------------------------|-------------------------------------------------|
//! | [`load_depots_reader`]  | `name,x,y`                                      |
//! | [`load_orders_reader`]  | `customer,x,y,items` (items `;`-separated)      |
//! | [`load_units_reader`]   | `kind,max_load,consumption_rate,battery_level`  |
//! | [`load_assignment_reader`] | `unit_id,station_id`                         |
//!
//! Each `_reader` function accepts any `Read` source (pass a
//! `std::io::Cursor` in tests); the `_csv` variants open a file path.

pub mod error;
pub mod loader;

#[cfg(test)]
mod tests;

pub use error::{InputError, InputResult};
pub use loader::{
    load_assignment_csv, load_assignment_reader, load_depots_csv, load_depots_reader,
    load_orders_csv, load_orders_reader, load_units_csv, load_units_reader,
};
