//! Single-zone, single-time-constant indoor temperature simulation.
//!
//! A day is simulated in three stages:
//!
//! 1. The daylight window is computed once from latitude and day of year.
//! 2. Each hour's outdoor temperature is corrected for humidity and solar gain
//!    into an effective temperature.
//! 3. The indoor temperature lags the effective temperature through an
//!    explicit first-order update with the material's time constant.

mod config;
mod effective;
mod error;
mod input;
mod integrate;
mod material;
mod results;
mod series;

#[cfg(test)]
mod test_support;

pub use config::SimulationConfig;
pub use effective::effective_temperature;
pub use error::SimulationError;
pub use input::{HourlyRecord, InputError, OutdoorConditions, Series};
pub use material::{Material, MaterialError, MaterialProfile, resolve_material};
pub use results::Results;
pub use series::IndoorTemperatureSeries;

use tracing::{debug, instrument};
use uom::si::{thermodynamic_temperature::degree_fahrenheit, time::hour};

use integrate::integrate;

/// Hours in a simulated day.
pub const HOURS_PER_DAY: usize = 24;

/// Simulates one day of indoor temperature.
///
/// # Errors
///
/// Returns [`SimulationError::Astronomy`] if the configured latitude and day
/// have no sunrise or sunset.
#[instrument(
    level = "debug",
    skip_all,
    fields(material = material.name(), tau_hours = material.time_constant().get::<hour>())
)]
pub(super) fn simulate(
    config: &SimulationConfig,
    material: &MaterialProfile,
    outdoor: &OutdoorConditions,
) -> Result<Results, SimulationError> {
    let daylight = config.daylight()?;
    debug!(
        sunrise_h = daylight.sunrise().get::<hour>(),
        sunset_h = daylight.sunset().get::<hour>(),
        "daylight window"
    );

    let effective = std::array::from_fn(|index| {
        effective_temperature(index, &outdoor[index], &daylight, config.solar_gain_rate)
    });

    let indoor = integrate(
        config.initial_indoor_temperature,
        material.time_constant(),
        &effective,
    );

    let (peak_hour, peak) = indoor.peak();
    debug!(
        peak_hour,
        peak_f = peak.get::<degree_fahrenheit>(),
        final_f = indoor.last().get::<degree_fahrenheit>(),
        "simulated indoor temperature"
    );

    Ok(Results {
        daylight,
        effective,
        indoor,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::{
        angle::degree,
        f64::{Angle, ThermodynamicTemperature},
    };

    use crate::support::astronomy::{AstronomyError, DayOfYear};

    use super::test_support::{degrees_f, memphis};

    #[test]
    fn first_brick_step_follows_the_lag_equation() {
        let config = SimulationConfig::default();
        let material = Material::Brick.profile();
        let outdoor = memphis();

        let results = simulate(&config, &material, &outdoor).unwrap();

        let t_eff = effective_temperature(1, &outdoor[1], &results.daylight, config.solar_gain_rate);
        // Hour 1 is dark and 72 °F is below the heat-index threshold.
        assert_relative_eq!(degrees_f(t_eff), 72.0, epsilon = 1e-9);

        let expected = 70.0 + (degrees_f(t_eff) - 70.0) / 6.0;
        assert_relative_eq!(degrees_f(results.indoor[1]), expected, epsilon = 1e-9);
    }

    #[test]
    fn memphis_brick_trajectory() {
        let results = simulate(
            &SimulationConfig::default(),
            &Material::Brick.profile(),
            &memphis(),
        )
        .unwrap();

        let expected = [
            70.0, 70.333, 70.278, 70.398, 70.832, 70.526, 70.439, 71.116, 72.680, 74.650, 76.625,
            78.604, 80.753, 82.544, 84.037, 85.114, 85.845, 86.454, 85.712, 84.760, 83.633,
            82.694, 81.412, 80.343,
        ];
        assert_eq!(results.indoor.iter().count(), HOURS_PER_DAY);
        for (&actual, expected) in results.indoor.iter().zip(expected) {
            assert_relative_eq!(degrees_f(actual), expected, epsilon = 1e-3);
        }

        let (peak_hour, peak) = results.indoor.peak();
        assert_eq!(peak_hour, 17);
        assert_relative_eq!(degrees_f(peak), 86.454, epsilon = 1e-3);
    }

    #[test]
    fn heavier_materials_respond_more_slowly() {
        let run = |material: Material| {
            simulate(&SimulationConfig::default(), &material.profile(), &memphis())
                .unwrap()
                .indoor
                .peak()
                .1
        };

        let wood = run(Material::Wood);
        let brick = run(Material::Brick);
        let concrete = run(Material::Concrete);

        assert_relative_eq!(degrees_f(wood), 88.674, epsilon = 1e-3);
        assert!(wood > brick && brick > concrete);
        assert_relative_eq!(degrees_f(concrete), 84.389, epsilon = 1e-3);
    }

    #[test]
    fn reruns_are_bit_for_bit_identical() {
        let config = SimulationConfig::default();
        let material = Material::Brick.profile();
        let outdoor = memphis();

        let first = simulate(&config, &material, &outdoor).unwrap();
        let second = simulate(&config, &material, &outdoor).unwrap();

        for (a, b) in first.indoor.iter().zip(second.indoor.iter()) {
            assert_eq!(a.value.to_bits(), b.value.to_bits());
        }
        assert_eq!(first, second);
    }

    #[test]
    fn effective_temperatures_cover_every_hour() {
        let results = simulate(
            &SimulationConfig::default(),
            &Material::Wood.profile(),
            &memphis(),
        )
        .unwrap();

        // Solar gain applies from 7:00 through 17:00.
        assert_relative_eq!(degrees_f(results.effective[6]), 70.0, epsilon = 1e-9);
        assert_relative_eq!(degrees_f(results.effective[7]), 74.5, epsilon = 1e-9);
        assert_relative_eq!(degrees_f(results.effective[17]), 89.5, epsilon = 1e-9);
        assert_relative_eq!(degrees_f(results.effective[18]), 82.0, epsilon = 1e-9);
    }

    #[test]
    fn initial_condition_comes_from_config() {
        let config = SimulationConfig {
            initial_indoor_temperature: ThermodynamicTemperature::new::<degree_fahrenheit>(78.0),
            ..SimulationConfig::default()
        };

        let results = simulate(&config, &Material::Concrete.profile(), &memphis()).unwrap();
        assert_relative_eq!(degrees_f(results.indoor.initial()), 78.0, epsilon = 1e-9);
    }

    #[test]
    fn polar_night_is_reported() {
        let config = SimulationConfig {
            latitude: Angle::new::<degree>(-80.0),
            day_of_year: DayOfYear::new(172).unwrap(),
            ..SimulationConfig::default()
        };

        let err = simulate(&config, &Material::Brick.profile(), &memphis()).unwrap_err();
        assert!(matches!(
            err,
            SimulationError::Astronomy(AstronomyError::PolarNight { .. })
        ));
    }
}
