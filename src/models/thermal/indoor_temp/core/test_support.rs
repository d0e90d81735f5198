use uom::si::{f64::ThermodynamicTemperature, thermodynamic_temperature::degree_fahrenheit};

use super::OutdoorConditions;

pub(super) fn fahrenheit(value: f64) -> ThermodynamicTemperature {
    ThermodynamicTemperature::new::<degree_fahrenheit>(value)
}

pub(super) fn degrees_f(t: ThermodynamicTemperature) -> f64 {
    t.get::<degree_fahrenheit>()
}

pub(super) fn memphis() -> OutdoorConditions {
    OutdoorConditions::memphis_heat_wave()
}
