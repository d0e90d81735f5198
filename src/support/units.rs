//! Extensions to [`uom`].
//!
//! Every physical quantity in this crate is a [`uom`] quantity. Outdoor and
//! indoor temperatures are absolute ([`ThermodynamicTemperature`]), while
//! heat-index corrections, solar gains, and the gap driving the thermal lag
//! are differences ([`TemperatureInterval`]).
//!
//! [`uom`] does not subtract two absolute temperatures into an interval, so
//! [`TemperatureDifference::minus`] fills that gap:
//!
//! ```
//! use uom::si::f64::ThermodynamicTemperature;
//! use uom::si::{temperature_interval, thermodynamic_temperature::degree_fahrenheit};
//! use indoor_temp_models::support::units::TemperatureDifference;
//!
//! let outdoor = ThermodynamicTemperature::new::<degree_fahrenheit>(90.0);
//! let indoor = ThermodynamicTemperature::new::<degree_fahrenheit>(70.0);
//! let gap = outdoor.minus(indoor);
//! assert!((gap.get::<temperature_interval::degree_fahrenheit>() - 20.0).abs() < 1e-9);
//! ```
//!
//! [`ThermodynamicTemperature`]: uom::si::f64::ThermodynamicTemperature
//! [`TemperatureInterval`]: uom::si::f64::TemperatureInterval

mod temperature_difference;

pub use temperature_difference::TemperatureDifference;
