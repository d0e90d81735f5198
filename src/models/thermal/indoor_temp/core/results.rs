use uom::si::f64::ThermodynamicTemperature;

use crate::support::astronomy::DaylightWindow;

use super::{HOURS_PER_DAY, IndoorTemperatureSeries};

/// Output of a one-day simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct Results {
    /// Sunrise, sunset, and day length used for solar gain.
    pub daylight: DaylightWindow,

    /// Effective outdoor temperature for each hour.
    ///
    /// Hour 0 is reported for completeness; the integration starts from the
    /// initial condition and first consumes hour 1.
    pub effective: [ThermodynamicTemperature; HOURS_PER_DAY],

    /// Predicted indoor temperature for each hour.
    pub indoor: IndoorTemperatureSeries,
}
