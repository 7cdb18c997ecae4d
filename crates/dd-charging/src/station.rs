//! Charging stations.

use dd_core::StationId;

use crate::{ChargingError, ChargingResult};

/// Station hardware class.  `Fast` stations divide the base charging time by
/// the bank-wide fast-charging factor.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum StationKind {
    Standard,
    Fast,
}

/// A charging resource with a fixed recharge rate and unit capacity.
///
/// Plain data: which units sit at a station is tracked separately in
/// [`StationAssignment`][crate::StationAssignment], not embedded here, so a
/// station snapshot stays immutable across schedule computations.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChargingStation {
    pub id:   StationId,
    pub name: String,
    pub kind: StationKind,

    /// Purchase price — carried through for reporting, not used by the
    /// scheduling math.
    pub price: u32,

    /// Battery percentage restored per minute.
    pub rate_per_minute: f64,

    /// How many units the station can hold at once.
    pub max_units: usize,
}

impl ChargingStation {
    /// Construct a station, rejecting non-positive rates and zero capacity
    /// up front so schedule computations never meet a malformed station.
    pub fn new(
        id:              StationId,
        name:            impl Into<String>,
        kind:            StationKind,
        price:           u32,
        rate_per_minute: f64,
        max_units:       usize,
    ) -> ChargingResult<Self> {
        if !rate_per_minute.is_finite() || rate_per_minute <= 0.0 {
            return Err(ChargingError::InvalidChargingRate { station: id, rate: rate_per_minute });
        }
        if max_units == 0 {
            return Err(ChargingError::ZeroCapacity { station: id });
        }
        Ok(Self {
            id,
            name: name.into(),
            kind,
            price,
            rate_per_minute,
            max_units,
        })
    }
}
