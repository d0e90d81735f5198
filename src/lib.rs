//! # Indoor Temperature Models
//!
//! Predicts how warm a single-zone house gets over one day after its air
//! conditioning fails, driven by hourly outdoor temperature, relative
//! humidity, and sunlight.
//!
//! ## Crate layout
//!
//! - [`models`]: [`twine_core::Model`] implementations.
//! - [`support`]: Supporting utilities used by models.
//!
//! ## Example
//!
//! ```
//! use indoor_temp_models::models::thermal::indoor_temp::{
//!     IndoorTemperature, OutdoorConditions, SimulationConfig, resolve_material,
//! };
//! use twine_core::Model;
//! use uom::si::thermodynamic_temperature::degree_fahrenheit;
//!
//! let model = IndoorTemperature::new(SimulationConfig::default(), resolve_material("brick")?);
//! let results = model.call(&OutdoorConditions::memphis_heat_wave())?;
//!
//! let (hour, peak) = results.indoor.peak();
//! assert!(peak.get::<degree_fahrenheit>() > 80.0);
//! assert!(hour > 12);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! The models are illustrative estimates, not calibrated building physics.

pub mod models;
pub mod support;
