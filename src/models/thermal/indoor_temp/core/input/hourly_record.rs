use uom::si::f64::{Ratio, ThermodynamicTemperature};

use crate::support::constraint::{Constrained, ConstraintResult, UnitInterval};

/// Outdoor temperature and relative humidity for one hour.
///
/// Relative humidity is guaranteed to lie within 0–100 %.
/// No range is imposed on temperature.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HourlyRecord {
    temperature: ThermodynamicTemperature,
    relative_humidity: Constrained<Ratio, UnitInterval>,
}

impl HourlyRecord {
    /// Constructs a validated hourly record.
    ///
    /// # Errors
    ///
    /// Returns an error if the relative humidity is outside 0–100 % or NaN.
    pub fn new(
        temperature: ThermodynamicTemperature,
        relative_humidity: Ratio,
    ) -> ConstraintResult<Self> {
        let relative_humidity = UnitInterval::new(relative_humidity)?;
        Ok(Self::from_constrained(temperature, relative_humidity))
    }

    /// Constructs an hourly record from a pre-validated humidity.
    #[must_use]
    pub fn from_constrained(
        temperature: ThermodynamicTemperature,
        relative_humidity: Constrained<Ratio, UnitInterval>,
    ) -> Self {
        Self {
            temperature,
            relative_humidity,
        }
    }

    /// Returns the outdoor dry-bulb temperature.
    #[must_use]
    pub fn temperature(&self) -> ThermodynamicTemperature {
        self.temperature
    }

    /// Returns the relative humidity.
    #[must_use]
    pub fn relative_humidity(&self) -> Constrained<Ratio, UnitInterval> {
        self.relative_humidity
    }
}
