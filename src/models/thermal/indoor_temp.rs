//! Indoor temperature of a house without air conditioning.
//!
//! [`IndoorTemperature`] is the [`twine_core::Model`] adapter. It pairs a
//! [`SimulationConfig`] with a [`MaterialProfile`] and maps a day of
//! [`OutdoorConditions`] to [`Results`]: the daylight window, the effective
//! outdoor temperature for every hour, and the predicted indoor temperatures.
//!
//! The computational core is in the internal `core` module.

mod core;

pub use self::core::{
    HOURS_PER_DAY, HourlyRecord, IndoorTemperatureSeries, InputError, Material, MaterialError,
    MaterialProfile, OutdoorConditions, Results, Series, SimulationConfig, SimulationError,
    effective_temperature, resolve_material,
};

use twine_core::Model;

/// Single-zone indoor temperature model.
///
/// Each call is an independent, deterministic run: identical inputs always
/// produce an identical series.
#[derive(Debug, Clone, PartialEq)]
pub struct IndoorTemperature {
    config: SimulationConfig,
    material: MaterialProfile,
}

impl IndoorTemperature {
    /// Creates a model for the given configuration and house material.
    #[must_use]
    pub fn new(config: SimulationConfig, material: MaterialProfile) -> Self {
        Self { config, material }
    }

    /// Returns the simulation configuration.
    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    /// Returns the selected material.
    #[must_use]
    pub fn material(&self) -> &MaterialProfile {
        &self.material
    }

    /// Runs the model on raw hourly sequences in °F and percent.
    ///
    /// The sequences are validated before any daylight or integration work.
    ///
    /// # Errors
    ///
    /// Returns [`SimulationError::Input`] if either sequence does not hold
    /// exactly [`HOURS_PER_DAY`] values or a humidity is outside 0–100 %,
    /// and [`SimulationError::Astronomy`] if the configured location and day
    /// have no sunrise or sunset.
    pub fn call_fahrenheit(
        &self,
        temperatures: &[f64],
        humidity: &[f64],
    ) -> Result<Results, SimulationError> {
        let outdoor = OutdoorConditions::from_fahrenheit_and_percent(temperatures, humidity)?;
        self.call(&outdoor)
    }
}

impl Model for IndoorTemperature {
    type Input = OutdoorConditions;
    type Output = Results;
    type Error = SimulationError;

    fn call(&self, input: &Self::Input) -> Result<Self::Output, Self::Error> {
        self::core::simulate(&self.config, &self.material, input)
    }
}
