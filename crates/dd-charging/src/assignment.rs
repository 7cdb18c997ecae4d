//! The unit→station ownership map.
//!
//! Which units sit at which station is an explicit, validated map rather
//! than per-station unit lists: every capacity and identity check happens
//! once, here, at setup time.  After construction the invariant
//! `units at station s <= s.max_units` holds for every station.

use rustc_hash::{FxHashMap, FxHashSet};

use dd_core::{StationId, UnitId};
use dd_fleet::Unit;

use crate::station::ChargingStation;
use crate::{ChargingError, ChargingResult};

/// A validated static assignment of fleet units to charging stations.
#[derive(Clone, Debug, Default)]
pub struct StationAssignment {
    by_unit:    FxHashMap<UnitId, StationId>,
    by_station: FxHashMap<StationId, Vec<UnitId>>,
}

impl StationAssignment {
    /// Build and validate an assignment from `(unit, station)` pairs.
    ///
    /// Rejects references to units or stations absent from the given
    /// snapshots, a unit listed twice, and any station assigned more units
    /// than its `max_units` capacity.  Units absent from `pairs` simply
    /// don't charge — that is not an error.
    pub fn new(
        pairs:    impl IntoIterator<Item = (UnitId, StationId)>,
        stations: &[ChargingStation],
        units:    &[Unit],
    ) -> ChargingResult<Self> {
        let known_units: FxHashSet<UnitId> = units.iter().map(|u| u.id).collect();
        let capacities: FxHashMap<StationId, usize> =
            stations.iter().map(|s| (s.id, s.max_units)).collect();

        let mut by_unit = FxHashMap::default();
        let mut by_station: FxHashMap<StationId, Vec<UnitId>> = FxHashMap::default();

        for (unit, station) in pairs {
            if !known_units.contains(&unit) {
                return Err(ChargingError::UnknownUnit(unit));
            }
            let Some(&max) = capacities.get(&station) else {
                return Err(ChargingError::UnknownStation(station));
            };
            if by_unit.insert(unit, station).is_some() {
                return Err(ChargingError::DuplicateUnit(unit));
            }
            let at_station = by_station.entry(station).or_default();
            at_station.push(unit);
            if at_station.len() > max {
                return Err(ChargingError::OverCapacity {
                    station,
                    got: at_station.len(),
                    max,
                });
            }
        }

        Ok(Self { by_unit, by_station })
    }

    /// The station `unit` charges at, if it is assigned anywhere.
    #[inline]
    pub fn station_of(&self, unit: UnitId) -> Option<StationId> {
        self.by_unit.get(&unit).copied()
    }

    /// The units assigned to `station`, in assignment order.
    pub fn units_at(&self, station: StationId) -> &[UnitId] {
        self.by_station
            .get(&station)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Total units assigned across all stations.
    pub fn len(&self) -> usize {
        self.by_unit.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_unit.is_empty()
    }
}
