//! Depots and the nearest-depot query.
//!
//! A `DepotRoster` is validated once at construction (non-empty, unique
//! names) and read-only afterwards, so every query during a dispatch run
//! operates over the same immutable snapshot.

use dd_core::{DepotId, GridPoint, Metric};

use crate::{FleetError, FleetResult};

/// A fixed location deliveries originate from and units recharge at.
///
/// Identity is the roster-assigned `id`; names are unique per roster and
/// exist for human-readable output only.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Depot {
    pub id:       DepotId,
    pub name:     String,
    pub location: GridPoint,
}

// ── DepotRoster ───────────────────────────────────────────────────────────────

/// The validated, ordered set of depots for one deployment.
///
/// Order matters: [`DepotRoster::nearest`] breaks distance ties in favor of
/// the first-listed depot, and that tie order is part of the contract.
#[derive(Clone, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DepotRoster {
    depots: Vec<Depot>,
}

impl DepotRoster {
    /// Build a roster from `(name, location)` pairs, assigning `DepotId`s in
    /// input order.
    ///
    /// Fails with [`FleetError::NoDepots`] on an empty input and
    /// [`FleetError::DuplicateDepotName`] on a repeated name — both checked
    /// here so a dispatch run never discovers a malformed roster mid-loop.
    pub fn new(entries: Vec<(String, GridPoint)>) -> FleetResult<Self> {
        if entries.is_empty() {
            return Err(FleetError::NoDepots);
        }
        let mut depots = Vec::with_capacity(entries.len());
        for (i, (name, location)) in entries.into_iter().enumerate() {
            if depots.iter().any(|d: &Depot| d.name == name) {
                return Err(FleetError::DuplicateDepotName(name));
            }
            depots.push(Depot {
                id: DepotId(i as u16),
                name,
                location,
            });
        }
        Ok(Self { depots })
    }

    /// The depot nearest to `point` under `metric`.
    ///
    /// O(n) scan with strict-less comparison, so equidistant candidates
    /// resolve to the first-listed depot.  Pure — no caching, no mutation.
    pub fn nearest(&self, point: GridPoint, metric: Metric) -> &Depot {
        // Non-emptiness is a construction invariant.
        let mut best = &self.depots[0];
        let mut best_dist = metric.distance(point, best.location);
        for depot in &self.depots[1..] {
            let dist = metric.distance(point, depot.location);
            if dist < best_dist {
                best = depot;
                best_dist = dist;
            }
        }
        best
    }

    #[inline]
    pub fn get(&self, id: DepotId) -> Option<&Depot> {
        self.depots.get(id.index())
    }

    pub fn iter(&self) -> impl Iterator<Item = &Depot> {
        self.depots.iter()
    }

    pub fn len(&self) -> usize {
        self.depots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.depots.is_empty()
    }
}
