use dd_core::UnitId;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum FleetError {
    #[error("depot roster is empty")]
    NoDepots,

    #[error("duplicate depot name: {0}")]
    DuplicateDepotName(String),

    #[error("unit {unit}: consumption rate must be positive and finite, got {rate}")]
    InvalidConsumptionRate { unit: UnitId, rate: f64 },

    #[error("unit {unit}: max load must be at least 1")]
    ZeroMaxLoad { unit: UnitId },

    #[error("battery level {0} outside 0..=100")]
    BatteryOutOfRange(f64),
}

pub type FleetResult<T> = Result<T, FleetError>;
