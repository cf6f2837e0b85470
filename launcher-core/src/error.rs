//! Errors reported at the command and configuration boundary.
//!
//! The physics itself cannot fail. Anything that could poison the integrator
//! (a NaN speed, a non-positive time step) is turned away here instead.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("time step must be finite and positive, got {0}")]
    InvalidTimeStep(f64),

    #[error("speed must be a finite number, got {0}")]
    InvalidSpeed(f64),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("preset not found: {0}")]
    PresetNotFound(String),
}

pub type Result<T> = std::result::Result<T, SimulationError>;
