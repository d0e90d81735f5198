use std::fmt;

use thiserror::Error;

use crate::support::constraint::ConstraintError;

/// Names one of the hourly input sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Series {
    /// Outdoor dry-bulb temperatures.
    Temperature,
    /// Relative humidities.
    Humidity,
    /// Combined hourly records.
    Records,
}

impl fmt::Display for Series {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Series::Temperature => "temperature",
            Series::Humidity => "humidity",
            Series::Records => "record",
        })
    }
}

/// Errors that can occur while building a day of outdoor conditions.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum InputError {
    /// A sequence does not hold one value per hour.
    #[error("expected {expected} hourly {series} values, got {actual}")]
    Length {
        series: Series,
        expected: usize,
        actual: usize,
    },

    /// A relative humidity is outside 0–100 %.
    #[error("relative humidity at hour {hour} must be within 0-100 %")]
    Humidity {
        hour: usize,
        #[source]
        source: ConstraintError,
    },
}
