//! Delivery units and their battery state.
//!
//! `BatteryLevel` is the only mutable piece of unit state the dispatch
//! engine touches.  The newtype keeps the `0.0 ..= 100.0` invariant at every
//! observation point: draining clamps at zero (and reports the clamp),
//! recharging snaps to exactly full.

use dd_core::UnitId;

use crate::{FleetError, FleetResult};

/// Unit hardware class.  `Fast` units pair with fast charging stations; the
/// flight model itself does not distinguish the two.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnitKind {
    Normal,
    Fast,
}

// ── BatteryLevel ──────────────────────────────────────────────────────────────

/// What happened when energy was drawn from a battery.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DrainOutcome {
    /// The full amount was available.
    Ok,
    /// The draw would have gone negative; the level clamped to 0.
    Exhausted,
}

/// A battery charge percentage, invariant `0.0 ..= 100.0`.
#[derive(Copy, Clone, Debug, PartialEq, PartialOrd)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BatteryLevel(f64);

impl BatteryLevel {
    pub const FULL: BatteryLevel = BatteryLevel(100.0);

    /// Construct from a percentage; rejects values outside `0..=100` or
    /// non-finite input.
    pub fn new(percent: f64) -> FleetResult<Self> {
        if !percent.is_finite() || !(0.0..=100.0).contains(&percent) {
            return Err(FleetError::BatteryOutOfRange(percent));
        }
        Ok(Self(percent))
    }

    #[inline]
    pub fn percent(self) -> f64 {
        self.0
    }

    /// Draw `amount` percentage points.
    ///
    /// Clamps at zero rather than going negative; the clamp is reported so
    /// the caller can surface a battery-exhausted condition instead of
    /// silently continuing with an impossible state.
    pub fn drain(&mut self, amount: f64) -> DrainOutcome {
        if amount > self.0 {
            self.0 = 0.0;
            DrainOutcome::Exhausted
        } else {
            self.0 -= amount;
            DrainOutcome::Ok
        }
    }

    /// Reset to exactly full charge.
    #[inline]
    pub fn recharge(&mut self) {
        *self = Self::FULL;
    }
}

impl std::fmt::Display for BatteryLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:.2}%", self.0)
    }
}

// ── Unit ──────────────────────────────────────────────────────────────────────

/// A mobile delivery agent with finite energy and carrying capacity.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Unit {
    pub id:   UnitId,
    pub kind: UnitKind,

    /// Maximum load in kilograms.
    pub max_load: u32,

    /// Battery percentage consumed per distance unit travelled.
    pub consumption_rate: f64,

    pub battery: BatteryLevel,
}

impl Unit {
    /// Construct a unit, validating rates and capacities up front so a
    /// malformed fleet is rejected before any run starts.
    pub fn new(
        id:               UnitId,
        kind:             UnitKind,
        max_load:         u32,
        consumption_rate: f64,
        battery:          BatteryLevel,
    ) -> FleetResult<Self> {
        if !consumption_rate.is_finite() || consumption_rate <= 0.0 {
            return Err(FleetError::InvalidConsumptionRate { unit: id, rate: consumption_rate });
        }
        if max_load == 0 {
            return Err(FleetError::ZeroMaxLoad { unit: id });
        }
        Ok(Self { id, kind, max_load, consumption_rate, battery })
    }

    /// Energy draw per distance unit when flying at maximum load, rounded
    /// to whole percentage points.
    pub fn full_load_draw(&self) -> u32 {
        (self.max_load as f64 * self.consumption_rate).round() as u32
    }
}
