use std::fmt;

use super::AstronomyError;

/// Ordinal day of the year, `1..=366`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DayOfYear(u16);

impl DayOfYear {
    /// September 21 in a common year.
    pub const SEPTEMBER_21: Self = Self(264);

    /// Constructs a validated day of year.
    ///
    /// # Errors
    ///
    /// Returns [`AstronomyError::DayOfYear`] if `day` is outside `1..=366`.
    pub fn new(day: u16) -> Result<Self, AstronomyError> {
        if (1..=366).contains(&day) {
            Ok(Self(day))
        } else {
            Err(AstronomyError::DayOfYear { day })
        }
    }

    /// Returns the ordinal day.
    #[must_use]
    pub fn get(self) -> u16 {
        self.0
    }
}

impl Default for DayOfYear {
    fn default() -> Self {
        Self::SEPTEMBER_21
    }
}

impl fmt::Display for DayOfYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl TryFrom<u16> for DayOfYear {
    type Error = AstronomyError;

    fn try_from(day: u16) -> Result<Self, Self::Error> {
        Self::new(day)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use jiff::civil::date;

    fn from_civil(year: i16, month: i8, day: i8) -> DayOfYear {
        let ordinal = date(year, month, day).day_of_year();
        DayOfYear::new(u16::try_from(ordinal).unwrap()).unwrap()
    }

    #[test]
    fn september_equinox_in_a_common_year() {
        assert_eq!(from_civil(2025, 9, 21), DayOfYear::SEPTEMBER_21);
        assert_eq!(DayOfYear::default().get(), 264);
    }

    #[test]
    fn leap_day_count() {
        assert_eq!(from_civil(2024, 12, 31).get(), 366);
        assert_eq!(from_civil(2025, 1, 1).get(), 1);
    }

    #[test]
    fn rejects_out_of_range() {
        assert_eq!(DayOfYear::new(0), Err(AstronomyError::DayOfYear { day: 0 }));
        assert_eq!(
            DayOfYear::try_from(367),
            Err(AstronomyError::DayOfYear { day: 367 })
        );
    }
}
