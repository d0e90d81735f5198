use std::f64::consts::PI;

use uom::si::{
    angle::{degree, radian},
    f64::{Angle, Time},
    time::hour,
};

use super::{AstronomyError, ClockTime, DayOfYear};

/// Axial tilt used by the declination approximation, in degrees.
const AXIAL_TILT_DEG: f64 = 23.45;

/// Solar noon, in hours after midnight.
const SOLAR_NOON_HOURS: f64 = 12.0;

/// Returns the solar declination for a day of year.
///
/// Uses `δ = 23.45° · sin(360/365 · (284 + n))`.
#[must_use]
pub fn declination(day: DayOfYear) -> Angle {
    let position = Angle::new::<degree>(360.0 / 365.0 * (284.0 + f64::from(day.get())));
    Angle::new::<degree>(AXIAL_TILT_DEG * position.get::<radian>().sin())
}

/// The span of the day between sunrise and sunset.
///
/// Times are measured from midnight with solar noon fixed at 12:00, so
/// `0 ≤ sunrise ≤ 12 ≤ sunset ≤ 24` and `sunset − sunrise = length`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DaylightWindow {
    sunrise: Time,
    sunset: Time,
    length: Time,
}

impl DaylightWindow {
    /// Computes the daylight window for a latitude and day of year.
    ///
    /// # Errors
    ///
    /// Returns an [`AstronomyError`] if the latitude is not within ±90°, or if
    /// the sun neither rises nor sets on that day (polar day or night).
    pub fn new(latitude: Angle, day: DayOfYear) -> Result<Self, AstronomyError> {
        let latitude_deg = latitude.get::<degree>();
        if !latitude_deg.is_finite() || latitude_deg.abs() > 90.0 {
            return Err(AstronomyError::Latitude {
                latitude: latitude_deg,
            });
        }

        let delta = declination(day);
        let cos_hour_angle = -latitude.get::<radian>().tan() * delta.get::<radian>().tan();

        if cos_hour_angle < -1.0 {
            return Err(AstronomyError::PolarDay {
                latitude: latitude_deg,
                day,
            });
        }
        if cos_hour_angle > 1.0 {
            return Err(AstronomyError::PolarNight {
                latitude: latitude_deg,
                day,
            });
        }

        let length_hours = 24.0 / PI * cos_hour_angle.acos();

        Ok(Self {
            sunrise: Time::new::<hour>(SOLAR_NOON_HOURS - length_hours / 2.0),
            sunset: Time::new::<hour>(SOLAR_NOON_HOURS + length_hours / 2.0),
            length: Time::new::<hour>(length_hours),
        })
    }

    /// Time of sunrise after midnight.
    #[must_use]
    pub fn sunrise(&self) -> Time {
        self.sunrise
    }

    /// Time of sunset after midnight.
    #[must_use]
    pub fn sunset(&self) -> Time {
        self.sunset
    }

    /// Hours of daylight.
    #[must_use]
    pub fn length(&self) -> Time {
        self.length
    }

    /// Returns true if `time` lies within `[sunrise, sunset]`, inclusive.
    #[must_use]
    pub fn contains(&self, time: Time) -> bool {
        self.sunrise <= time && time <= self.sunset
    }

    /// Sunrise as a wall-clock time.
    #[must_use]
    pub fn sunrise_clock(&self) -> ClockTime {
        ClockTime::from_time_of_day(self.sunrise)
    }

    /// Sunset as a wall-clock time.
    #[must_use]
    pub fn sunset_clock(&self) -> ClockTime {
        ClockTime::from_time_of_day(self.sunset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn window(latitude_deg: f64, day: u16) -> Result<DaylightWindow, AstronomyError> {
        DaylightWindow::new(
            Angle::new::<degree>(latitude_deg),
            DayOfYear::new(day).unwrap(),
        )
    }

    #[test]
    fn memphis_on_september_21() {
        let w = window(35.15, 264).unwrap();

        assert_relative_eq!(w.sunrise().get::<hour>(), 6.02, epsilon = 0.05);
        assert_relative_eq!(w.sunset().get::<hour>(), 17.98, epsilon = 0.05);
        assert_relative_eq!(w.length().get::<hour>(), 11.96, epsilon = 0.05);

        assert_eq!(w.sunrise_clock().to_string(), "6:00 AM");
        assert_eq!(w.sunset_clock().to_string(), "5:59 PM");
    }

    #[test]
    fn declination_near_the_equinox_is_small() {
        let delta = declination(DayOfYear::SEPTEMBER_21).get::<degree>();
        assert_relative_eq!(delta, -0.2018, epsilon = 1e-3);

        // Close to the June solstice the tilt dominates.
        let june = declination(DayOfYear::new(172).unwrap()).get::<degree>();
        assert_relative_eq!(june, 23.45, epsilon = 0.01);
    }

    #[test]
    fn sunrise_and_sunset_are_symmetric_about_noon() {
        for latitude in (-65..=65).step_by(5) {
            for day in 1..=366 {
                let w = window(f64::from(latitude), day).unwrap();
                let sunrise = w.sunrise().get::<hour>();
                let sunset = w.sunset().get::<hour>();

                assert_relative_eq!(sunrise + sunset, 24.0, epsilon = 1e-9);
                assert_relative_eq!(sunset - sunrise, w.length().get::<hour>(), epsilon = 1e-9);
                assert!(
                    (0.0..12.0).contains(&sunrise),
                    "sunrise {sunrise} at {latitude}° on day {day}"
                );
                assert!(
                    sunset > 12.0 && sunset <= 24.0,
                    "sunset {sunset} at {latitude}° on day {day}"
                );
            }
        }
    }

    #[test]
    fn equator_always_has_twelve_hours() {
        for day in [1, 80, 172, 264, 355] {
            let w = window(0.0, day).unwrap();
            assert_relative_eq!(w.length().get::<hour>(), 12.0, epsilon = 1e-9);
        }
    }

    #[test]
    fn contains_is_inclusive() {
        let w = window(35.15, 264).unwrap();
        assert!(w.contains(w.sunrise()));
        assert!(w.contains(w.sunset()));
        assert!(w.contains(Time::new::<hour>(12.0)));
        assert!(!w.contains(Time::new::<hour>(6.0)));
        assert!(!w.contains(Time::new::<hour>(18.0)));
    }

    #[test]
    fn polar_conditions_are_errors() {
        let Err(AstronomyError::PolarDay { latitude, day }) = window(75.0, 172) else {
            panic!("expected polar day");
        };
        assert_relative_eq!(latitude, 75.0, epsilon = 1e-9);
        assert_eq!(day.get(), 172);
        assert!(matches!(
            window(75.0, 355),
            Err(AstronomyError::PolarNight { .. })
        ));

        // Seasons are reversed in the southern hemisphere.
        assert!(matches!(
            window(-75.0, 172),
            Err(AstronomyError::PolarNight { .. })
        ));
        assert!(matches!(
            window(-75.0, 355),
            Err(AstronomyError::PolarDay { .. })
        ));
    }

    #[test]
    fn rejects_invalid_latitudes() {
        assert!(matches!(
            window(90.5, 100),
            Err(AstronomyError::Latitude { .. })
        ));
        assert!(matches!(
            window(f64::NAN, 100),
            Err(AstronomyError::Latitude { .. })
        ));
    }
}
