use uom::si::f64::{TemperatureInterval, ThermodynamicTemperature};

use crate::support::{
    astronomy::DaylightWindow,
    comfort::{hour_of_day, humidity_adjustment, solar_gain},
};

use super::HourlyRecord;

/// Returns the effective outdoor temperature for an hour.
///
/// The outdoor temperature plus the humidity adjustment plus the solar gain.
#[must_use]
pub fn effective_temperature(
    hour_index: usize,
    record: &HourlyRecord,
    daylight: &DaylightWindow,
    solar_gain_rate: TemperatureInterval,
) -> ThermodynamicTemperature {
    let humidity = humidity_adjustment(record.temperature(), record.relative_humidity());
    let solar = solar_gain(hour_of_day(hour_index), daylight, solar_gain_rate);

    record.temperature() + humidity.into_inner() + solar
}
