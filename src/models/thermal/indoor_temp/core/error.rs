use thiserror::Error;

use crate::support::astronomy::AstronomyError;

use super::InputError;

/// Errors that can occur while simulating indoor temperature.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    /// The hourly outdoor data was malformed.
    #[error("invalid outdoor data")]
    Input(#[from] InputError),

    /// The daylight window could not be computed.
    #[error("daylight window unavailable")]
    Astronomy(#[from] AstronomyError),
}
