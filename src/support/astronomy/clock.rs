use std::fmt;

use uom::si::{f64::Time, time::hour};

/// Wall-clock time of day, truncated to the minute.
///
/// Displays in 12-hour form, e.g. `6:00 AM` or `5:59 PM`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClockTime {
    /// Hour of day, `0..=23`.
    pub hour: u8,
    /// Minute of hour, `0..=59`.
    pub minute: u8,
}

impl ClockTime {
    /// Converts a time since midnight into a clock time.
    ///
    /// Fractional minutes are truncated and times are wrapped into a single day.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_time_of_day(time: Time) -> Self {
        let total_minutes = (time.get::<hour>() * 60.0).floor().rem_euclid(24.0 * 60.0) as u32;
        Self {
            hour: (total_minutes / 60) as u8,
            minute: (total_minutes % 60) as u8,
        }
    }
}

impl fmt::Display for ClockTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let suffix = if self.hour < 12 { "AM" } else { "PM" };
        let display_hour = match self.hour % 12 {
            0 => 12,
            h => h,
        };
        write!(f, "{display_hour}:{:02} {suffix}", self.minute)
    }
}
