use thiserror::Error;

/// Configuration-class failures, all detected before any order is processed.
///
/// Runtime conditions (budget trips, battery exhaustion, unreachable
/// destinations) are *not* errors — they are [`RunOutcome`][crate::RunOutcome]
/// variants, because they carry a partial result.
#[derive(Debug, Error)]
pub enum DispatchError {
    #[error("consumption rate must be positive and finite, got {0}")]
    InvalidConsumptionRate(f64),

    #[error("unit capacity must be at least 1")]
    ZeroUnitCapacity,
}

pub type DispatchResult<T> = Result<T, DispatchError>;
