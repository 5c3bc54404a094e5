use std::{cmp, fmt};

use crate::trim_f64;

/// A duration, in seconds. Can be negative.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Duration(f64);

// By construction, Duration is a finite f64 with trimmed precision.
impl Eq for Duration {}

#[allow(clippy::derive_ord_xor_partial_ord)] // false positive
impl Ord for Duration {
    fn cmp(&self, other: &Duration) -> cmp::Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Duration {
    pub const ZERO: Duration = Duration::const_seconds(0.0);

    /// Creates a duration in seconds.
    pub fn seconds(value: f64) -> Duration {
        if !value.is_finite() {
            panic!("Bad Duration {}", value);
        }

        Duration(trim_f64(value))
    }

    /// Creates a duration in minutes.
    pub fn minutes(mins: usize) -> Duration {
        Duration::seconds((mins as f64) * 60.0)
    }

    pub const fn const_seconds(value: f64) -> Duration {
        Duration(value)
    }

    /// Returns the duration in seconds. Prefer working in typesafe `Duration`s.
    pub fn inner_seconds(self) -> f64 {
        self.0
    }

    /// Returns the duration as a whole number of minutes, rounded to the nearest minute. Negative
    /// durations round to zero.
    pub fn num_minutes_rounded(self) -> usize {
        (self.0 / 60.0).round().max(0.0) as usize
    }

    /// Splits the duration into (hours, minutes, seconds), dropping fractional seconds.
    fn get_parts(self) -> (usize, usize, usize) {
        // Force positive
        let mut remainder = self.inner_seconds().abs();
        let hours = (remainder / 3600.0).floor();
        remainder -= hours * 3600.0;
        let minutes = (remainder / 60.0).floor();
        remainder -= minutes * 60.0;
        let seconds = remainder.floor();

        (hours as usize, minutes as usize, seconds as usize)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let (hours, minutes, seconds) = self.get_parts();
        if hours == 0 && minutes == 0 && seconds == 0 {
            return write!(f, "0s");
        }

        let mut s = String::new();
        if *self < Duration::ZERO {
            s.push('-');
        }
        if hours != 0 {
            s = format!("{}{}hr ", s, hours);
        }
        if minutes != 0 {
            s = format!("{}{}min ", s, minutes);
        }
        if seconds != 0 {
            s = format!("{}{}s", s, seconds);
        }
        // Trim trailing whitespace, in case we have non-zero hours/minutes, but zero seconds
        write!(f, "{}", s.trim_end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounded_minutes() {
        assert_eq!(Duration::seconds(1709.0).num_minutes_rounded(), 28);
        assert_eq!(Duration::seconds(1680.0).num_minutes_rounded(), 28);
        assert_eq!(Duration::seconds(29.0).num_minutes_rounded(), 0);
        assert_eq!(Duration::seconds(-90.0).num_minutes_rounded(), 0);
    }

    #[test]
    fn describe() {
        assert_eq!(Duration::minutes(15).to_string(), "15min");
        assert_eq!(Duration::seconds(3725.5).to_string(), "1hr 2min 5s");
        assert_eq!(Duration::seconds(-90.0).to_string(), "-1min 30s");
        assert_eq!(Duration::ZERO.to_string(), "0s");
    }
}
