use dd_core::{StationId, UnitId};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ChargingError {
    #[error("station {station}: charging rate must be positive and finite, got {rate}")]
    InvalidChargingRate { station: StationId, rate: f64 },

    #[error("station {station}: capacity must be at least 1")]
    ZeroCapacity { station: StationId },

    #[error("fast-charging factor must be positive and finite, got {0}")]
    InvalidFastFactor(f64),

    #[error("station {station} over capacity: {got} units assigned, max {max}")]
    OverCapacity {
        station: StationId,
        got:     usize,
        max:     usize,
    },

    #[error("assignment references unknown station {0}")]
    UnknownStation(StationId),

    #[error("assignment references unknown unit {0}")]
    UnknownUnit(UnitId),

    #[error("unit {0} assigned to more than one station")]
    DuplicateUnit(UnitId),
}

pub type ChargingResult<T> = Result<T, ChargingError>;
