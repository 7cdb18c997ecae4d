use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("input parse error: {0}")]
    Parse(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Fleet(#[from] dd_fleet::FleetError),

    #[error(transparent)]
    Charging(#[from] dd_charging::ChargingError),
}

pub type InputResult<T> = Result<T, InputError>;
