use uom::si::{
    angle::degree,
    f64::{Angle, TemperatureInterval, ThermodynamicTemperature},
    temperature_interval::degree_fahrenheit as delta_fahrenheit,
    thermodynamic_temperature::degree_fahrenheit,
};

use crate::support::astronomy::{AstronomyError, DayOfYear, DaylightWindow};

/// Site, day, and modeling parameters for a simulation run.
///
/// The defaults describe Memphis, Tennessee on September 21 with the house
/// starting at 70 °F, the temperature it held while the air conditioning
/// still worked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationConfig {
    /// Site latitude, positive north.
    pub latitude: Angle,

    /// Day of year used for the daylight window.
    pub day_of_year: DayOfYear,

    /// Indoor temperature at hour 0.
    pub initial_indoor_temperature: ThermodynamicTemperature,

    /// Gain added to the effective temperature during daylight hours.
    pub solar_gain_rate: TemperatureInterval,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            latitude: Angle::new::<degree>(35.15),
            day_of_year: DayOfYear::SEPTEMBER_21,
            initial_indoor_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(70.0),
            solar_gain_rate: TemperatureInterval::new::<delta_fahrenheit>(1.5),
        }
    }
}

impl SimulationConfig {
    /// Computes the daylight window for the configured site and day.
    pub(super) fn daylight(&self) -> Result<DaylightWindow, AstronomyError> {
        DaylightWindow::new(self.latitude, self.day_of_year)
    }
}
