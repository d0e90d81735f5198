use std::ops::Index;

use uom::si::{
    f64::{Ratio, TemperatureInterval, ThermodynamicTemperature},
    ratio::percent,
    thermodynamic_temperature::{degree_fahrenheit, kelvin},
};

use crate::support::{
    constraint::{Constrained, UnitInterval},
    units::TemperatureDifference,
};

use super::{HourlyRecord, InputError, Series};
use crate::models::thermal::indoor_temp::core::HOURS_PER_DAY;

/// Hourly outdoor temperatures for Memphis on a September 21 heat wave, in °F.
const MEMPHIS_TEMPERATURES_F: [f64; HOURS_PER_DAY] = [
    75.0, 72.0, 70.0, 71.0, 73.0, 69.0, // midnight to 5 AM
    70.0, 73.0, 79.0, 83.0, 85.0, 87.0, // 6 AM to 11 AM
    90.0, 90.0, 90.0, 89.0, 88.0, 88.0, // noon to 5 PM
    82.0, 80.0, 78.0, 78.0, 75.0, 75.0, // 6 PM to 11 PM
];

/// Hourly relative humidity matching [`MEMPHIS_TEMPERATURES_F`], in percent.
const MEMPHIS_HUMIDITY_PCT: [f64; HOURS_PER_DAY] = [
    62.0, 68.0, 76.0, 73.0, 66.0, 79.0, //
    73.0, 69.0, 56.0, 50.0, 45.0, 42.0, //
    39.0, 38.0, 35.0, 37.0, 36.0, 40.0, //
    45.0, 43.0, 53.0, 58.0, 62.0, 64.0, //
];

/// One day of hourly outdoor conditions, indexed by hour `0..24`.
#[derive(Debug, Clone, PartialEq)]
pub struct OutdoorConditions {
    records: [HourlyRecord; HOURS_PER_DAY],
}

impl OutdoorConditions {
    /// Creates outdoor conditions from exactly one record per hour.
    #[must_use]
    pub fn new(records: [HourlyRecord; HOURS_PER_DAY]) -> Self {
        Self { records }
    }

    /// Builds outdoor conditions from parallel sequences in °F and percent.
    ///
    /// Both lengths are checked before any value is converted.
    ///
    /// # Errors
    ///
    /// Returns [`InputError::Length`] if either sequence does not hold exactly
    /// [`HOURS_PER_DAY`] values, or [`InputError::Humidity`] for the first
    /// humidity outside 0–100 %.
    pub fn from_fahrenheit_and_percent(
        temperatures: &[f64],
        humidity: &[f64],
    ) -> Result<Self, InputError> {
        check_length(Series::Temperature, temperatures.len())?;
        check_length(Series::Humidity, humidity.len())?;

        let mut records = Vec::with_capacity(HOURS_PER_DAY);
        for (hour, (&t_f, &rh_pct)) in temperatures.iter().zip(humidity).enumerate() {
            let rh = UnitInterval::new(Ratio::new::<percent>(rh_pct))
                .map_err(|source| InputError::Humidity { hour, source })?;
            records.push(HourlyRecord::from_constrained(
                ThermodynamicTemperature::new::<degree_fahrenheit>(t_f),
                rh,
            ));
        }

        Self::try_from(records)
    }

    /// The documented Memphis heat-wave day (September 21).
    #[must_use]
    pub fn memphis_heat_wave() -> Self {
        Self::new(std::array::from_fn(|hour| {
            HourlyRecord::from_constrained(
                ThermodynamicTemperature::new::<degree_fahrenheit>(MEMPHIS_TEMPERATURES_F[hour]),
                Constrained::new_unchecked(Ratio::new::<percent>(MEMPHIS_HUMIDITY_PCT[hour])),
            )
        }))
    }

    /// Returns the hourly records in order.
    #[must_use]
    pub fn records(&self) -> &[HourlyRecord; HOURS_PER_DAY] {
        &self.records
    }

    /// Iterates over the hourly outdoor temperatures.
    pub fn temperatures(&self) -> impl Iterator<Item = ThermodynamicTemperature> + '_ {
        self.records.iter().map(HourlyRecord::temperature)
    }

    /// Returns the mean outdoor temperature over the day.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn mean_temperature(&self) -> ThermodynamicTemperature {
        let sum: f64 = self.temperatures().map(|t| t.get::<kelvin>()).sum();
        ThermodynamicTemperature::new::<kelvin>(sum / HOURS_PER_DAY as f64)
    }

    /// Returns half the spread between the warmest and coolest hour.
    #[must_use]
    pub fn amplitude(&self) -> TemperatureInterval {
        let (min, max) = self.temperatures().fold(
            (self.records[0].temperature(), self.records[0].temperature()),
            |(min, max), t| (if t < min { t } else { min }, if t > max { t } else { max }),
        );
        max.minus(min) / 2.0
    }
}

impl Index<usize> for OutdoorConditions {
    type Output = HourlyRecord;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.records[hour]
    }
}

impl TryFrom<Vec<HourlyRecord>> for OutdoorConditions {
    type Error = InputError;

    fn try_from(records: Vec<HourlyRecord>) -> Result<Self, Self::Error> {
        let actual = records.len();
        let records = <[HourlyRecord; HOURS_PER_DAY]>::try_from(records).map_err(|_| {
            InputError::Length {
                series: Series::Records,
                expected: HOURS_PER_DAY,
                actual,
            }
        })?;
        Ok(Self::new(records))
    }
}

fn check_length(series: Series, actual: usize) -> Result<(), InputError> {
    if actual == HOURS_PER_DAY {
        Ok(())
    } else {
        Err(InputError::Length {
            series,
            expected: HOURS_PER_DAY,
            actual,
        })
    }
}
