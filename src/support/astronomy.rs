//! Sunrise, sunset, and day length from latitude and day of year.
//!
//! The model is the textbook declination/day-length pair:
//!
//! - declination `δ = 23.45° · sin(360/365 · (284 + n))`
//! - day length `(24/π) · arccos(−tan φ · tan δ)` hours
//!
//! Solar noon is fixed at 12:00, so sunrise and sunset sit symmetrically
//! around it. Latitudes and days where the arccos argument leaves `[-1, 1]`
//! have no sunrise or sunset and are reported as
//! [`AstronomyError::PolarDay`] or [`AstronomyError::PolarNight`].
//!
//! ```
//! use indoor_temp_models::support::astronomy::{DayOfYear, DaylightWindow};
//! use uom::si::{angle::degree, f64::Angle, time::hour};
//!
//! let memphis = Angle::new::<degree>(35.15);
//! let window = DaylightWindow::new(memphis, DayOfYear::new(264)?)?;
//!
//! assert!((window.length().get::<hour>() - 11.96).abs() < 0.05);
//! assert_eq!(window.sunrise_clock().to_string(), "6:00 AM");
//! # Ok::<(), indoor_temp_models::support::astronomy::AstronomyError>(())
//! ```

mod clock;
mod day_of_year;
mod daylight;
mod error;

pub use clock::ClockTime;
pub use day_of_year::DayOfYear;
pub use daylight::{DaylightWindow, declination};
pub use error::AstronomyError;
