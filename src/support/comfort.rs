//! Simplified comfort corrections applied to the outdoor temperature.
//!
//! Neither correction is a validated physical model. The heat-index term is a
//! linear-in-humidity approximation that only applies above 80 °F and is
//! clamped so it never lowers the apparent temperature, and the solar term is
//! a constant gain applied between sunrise and sunset.

use uom::{
    ConstZero,
    si::{
        f64::{Ratio, TemperatureInterval, ThermodynamicTemperature, Time},
        ratio::percent,
        temperature_interval::degree_fahrenheit as delta_fahrenheit,
        thermodynamic_temperature::degree_fahrenheit,
        time::hour,
    },
};

use crate::support::{
    astronomy::DaylightWindow,
    constraint::{Constrained, NonNegative, UnitInterval},
    units::TemperatureDifference,
};

/// Outdoor temperature at or below which humidity has no effect, in °F.
pub const HEAT_INDEX_THRESHOLD_F: f64 = 80.0;

/// Relative humidity at which the heat-index correction vanishes, in percent.
const NEUTRAL_HUMIDITY_PERCENT: f64 = 70.0;

/// Heat-index sensitivity, per percent humidity.
const HEAT_INDEX_COEFFICIENT: f64 = 0.0036;

/// Returns the humidity-driven heat-index correction.
///
/// Zero when `t_out ≤ 80 °F`. Above that the correction is
/// `0.0036 · (rh − 70) · (t_out − 80)` in °F, clamped at zero, so dry air
/// never cools the apparent temperature.
#[must_use]
pub fn humidity_adjustment(
    t_out: ThermodynamicTemperature,
    rh: Constrained<Ratio, UnitInterval>,
) -> Constrained<TemperatureInterval, NonNegative> {
    let threshold = ThermodynamicTemperature::new::<degree_fahrenheit>(HEAT_INDEX_THRESHOLD_F);
    if t_out <= threshold {
        return NonNegative::zero();
    }

    let excess = t_out.minus(threshold).get::<delta_fahrenheit>();
    let humidity = rh.into_inner().get::<percent>() - NEUTRAL_HUMIDITY_PERCENT;
    let correction = (HEAT_INDEX_COEFFICIENT * humidity * excess).max(0.0);

    // `f64::max` maps a NaN product to zero, so the correction is never negative.
    Constrained::new_unchecked(TemperatureInterval::new::<delta_fahrenheit>(correction))
}

/// Returns the solar gain for an hour of the day.
///
/// The full `rate` applies when `sunrise ≤ time ≤ sunset`; otherwise the gain is zero.
#[must_use]
pub fn solar_gain(
    time: Time,
    daylight: &DaylightWindow,
    rate: TemperatureInterval,
) -> TemperatureInterval {
    if daylight.contains(time) {
        rate
    } else {
        TemperatureInterval::ZERO
    }
}

/// Returns the start of the hour with the given index as a time after midnight.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn hour_of_day(index: usize) -> Time {
    Time::new::<hour>(index as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;
    use uom::si::angle::degree;
    use uom::si::f64::Angle;

    use crate::support::astronomy::DayOfYear;

    fn temp(f: f64) -> ThermodynamicTemperature {
        ThermodynamicTemperature::new::<degree_fahrenheit>(f)
    }

    fn rh(pct: f64) -> Constrained<Ratio, UnitInterval> {
        UnitInterval::new(Ratio::new::<percent>(pct)).unwrap()
    }

    fn adjustment(t_f: f64, rh_pct: f64) -> f64 {
        humidity_adjustment(temp(t_f), rh(rh_pct))
            .into_inner()
            .get::<delta_fahrenheit>()
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn no_adjustment_at_or_below_threshold() {
        for t_f in [-10.0, 32.0, 72.0, 79.9, 80.0] {
            for rh_pct in (0..=100).map(f64::from) {
                assert_eq!(adjustment(t_f, rh_pct), 0.0, "T={t_f} rh={rh_pct}");
            }
        }
    }

    #[test]
    fn humid_heat_feels_hotter() {
        assert_relative_eq!(adjustment(90.0, 80.0), 0.36, epsilon = 1e-9);
        assert_relative_eq!(adjustment(100.0, 100.0), 2.16, epsilon = 1e-9);
    }

    #[test]
    #[allow(clippy::float_cmp)]
    fn dry_heat_is_clamped_at_zero() {
        assert_eq!(adjustment(90.0, 39.0), 0.0);
        assert_eq!(adjustment(105.0, 0.0), 0.0);
        assert_relative_eq!(adjustment(90.0, 70.0), 0.0, epsilon = 1e-12);
    }

    #[test]
    fn solar_gain_only_between_sunrise_and_sunset() {
        let daylight =
            DaylightWindow::new(Angle::new::<degree>(35.15), DayOfYear::SEPTEMBER_21).unwrap();
        let rate = TemperatureInterval::new::<delta_fahrenheit>(1.5);

        for index in 0..24 {
            let gain = solar_gain(hour_of_day(index), &daylight, rate).get::<delta_fahrenheit>();
            let expected = if (7..=17).contains(&index) { 1.5 } else { 0.0 };
            assert_relative_eq!(gain, expected, epsilon = 1e-12);
        }
    }

    #[test]
    fn hour_indices_map_to_whole_hours() {
        assert_relative_eq!(hour_of_day(0).get::<hour>(), 0.0);
        assert_relative_eq!(hour_of_day(17).get::<hour>(), 17.0, epsilon = 1e-12);
    }
}
