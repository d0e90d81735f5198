use thiserror::Error;

use super::DayOfYear;

/// Errors that can occur while computing the daylight window.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AstronomyError {
    /// The day of year is outside `1..=366`.
    #[error("day of year must be in 1..=366, got {day}")]
    DayOfYear { day: u16 },

    /// The latitude is not a finite angle within ±90°.
    #[error("latitude must be within ±90°, got {latitude}°")]
    Latitude {
        /// Rejected latitude, in degrees.
        latitude: f64,
    },

    /// The sun stays above the horizon all day.
    ///
    /// The day-length arccos argument fell below −1.
    #[error("no sunset at latitude {latitude}° on day {day} (polar day)")]
    PolarDay {
        /// Latitude, in degrees.
        latitude: f64,
        day: DayOfYear,
    },

    /// The sun stays below the horizon all day.
    ///
    /// The day-length arccos argument rose above 1.
    #[error("no sunrise at latitude {latitude}° on day {day} (polar night)")]
    PolarNight {
        /// Latitude, in degrees.
        latitude: f64,
        day: DayOfYear,
    },
}
