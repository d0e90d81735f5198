use tracing::trace;
use uom::si::{
    f64::{ThermodynamicTemperature, Time},
    ratio::ratio,
    thermodynamic_temperature::degree_fahrenheit,
    time::hour,
};

use crate::support::units::TemperatureDifference;

use super::{HOURS_PER_DAY, IndoorTemperatureSeries};

/// Integration step between successive hours.
fn time_step() -> Time {
    Time::new::<hour>(1.0)
}

/// Advances the indoor temperature by one explicit first-order step.
///
/// `T_next = T_prev + (T_eff − T_prev) · Δt / τ`
pub(super) fn lag_step(
    previous: ThermodynamicTemperature,
    effective: ThermodynamicTemperature,
    time_constant: Time,
    step: Time,
) -> ThermodynamicTemperature {
    let fraction = (step / time_constant).get::<ratio>();
    previous + effective.minus(previous) * fraction
}

/// Folds the effective temperatures for hours `1..24` into an indoor series.
///
/// The effective temperature at hour 0 is not used.
/// `time_constant` must be strictly positive.
pub(super) fn integrate(
    initial: ThermodynamicTemperature,
    time_constant: Time,
    effective: &[ThermodynamicTemperature; HOURS_PER_DAY],
) -> IndoorTemperatureSeries {
    let step = time_step();
    let mut temperatures = [initial; HOURS_PER_DAY];

    for index in 1..HOURS_PER_DAY {
        temperatures[index] = lag_step(temperatures[index - 1], effective[index], time_constant, step);
        trace!(
            hour = index,
            effective_f = effective[index].get::<degree_fahrenheit>(),
            indoor_f = temperatures[index].get::<degree_fahrenheit>(),
            "lag step"
        );
    }

    IndoorTemperatureSeries::new(temperatures)
}
