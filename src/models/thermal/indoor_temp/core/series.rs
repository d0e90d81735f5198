use std::{ops::Index, slice};

use uom::si::f64::ThermodynamicTemperature;

use super::HOURS_PER_DAY;

/// Predicted indoor temperature for each hour of the day.
///
/// Index 0 is the initial condition. Each later hour is derived from the
/// hour before it, so the series is read-only once built.
#[derive(Debug, Clone, PartialEq)]
pub struct IndoorTemperatureSeries {
    temperatures: [ThermodynamicTemperature; HOURS_PER_DAY],
}

impl IndoorTemperatureSeries {
    pub(super) fn new(temperatures: [ThermodynamicTemperature; HOURS_PER_DAY]) -> Self {
        Self { temperatures }
    }

    /// Indoor temperature at hour 0.
    #[must_use]
    pub fn initial(&self) -> ThermodynamicTemperature {
        self.temperatures[0]
    }

    /// Indoor temperature at the last simulated hour.
    #[must_use]
    pub fn last(&self) -> ThermodynamicTemperature {
        self.temperatures[HOURS_PER_DAY - 1]
    }

    /// Returns the warmest hour and its temperature.
    ///
    /// Ties resolve to the earliest hour.
    #[must_use]
    pub fn peak(&self) -> (usize, ThermodynamicTemperature) {
        self.temperatures
            .iter()
            .copied()
            .enumerate()
            .fold((0, self.initial()), |best, (index, t)| {
                if t > best.1 { (index, t) } else { best }
            })
    }

    /// Returns the temperature at `hour`, if it is within the day.
    #[must_use]
    pub fn get(&self, hour: usize) -> Option<ThermodynamicTemperature> {
        self.temperatures.get(hour).copied()
    }

    /// Iterates over the hourly temperatures in order.
    pub fn iter(&self) -> slice::Iter<'_, ThermodynamicTemperature> {
        self.temperatures.iter()
    }

    /// Returns the hourly temperatures as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[ThermodynamicTemperature] {
        &self.temperatures
    }
}

impl Index<usize> for IndoorTemperatureSeries {
    type Output = ThermodynamicTemperature;

    fn index(&self, hour: usize) -> &Self::Output {
        &self.temperatures[hour]
    }
}

impl<'a> IntoIterator for &'a IndoorTemperatureSeries {
    type Item = &'a ThermodynamicTemperature;
    type IntoIter = slice::Iter<'a, ThermodynamicTemperature>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
