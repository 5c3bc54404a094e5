use std::{cmp, fmt};

use crate::trim_f64;

/// A distance, in meters. Can be negative.
///
/// Values are trimmed to 0.1mm (see `trim_f64`), so comparisons between two distances are only
/// meaningful down to that resolution.
#[derive(Clone, Copy, Debug, PartialEq, PartialOrd)]
pub struct Distance(f64);

// By construction, Distance is a finite f64 with trimmed precision.
impl Eq for Distance {}

#[allow(clippy::derive_ord_xor_partial_ord)] // false positive
impl Ord for Distance {
    fn cmp(&self, other: &Distance) -> cmp::Ordering {
        self.partial_cmp(other).unwrap()
    }
}

impl Distance {
    pub const ZERO: Distance = Distance::const_meters(0.0);

    /// Creates a distance in meters. Panics on NaN or infinity; callers validate untrusted input
    /// first.
    pub fn meters(value: f64) -> Distance {
        if !value.is_finite() {
            panic!("Bad Distance {}", value);
        }

        Distance(trim_f64(value))
    }

    // TODO Can't panic inside a const fn, seemingly. Don't pass in anything bad!
    pub const fn const_meters(value: f64) -> Distance {
        Distance(value)
    }

    /// Returns the distance in meters. Prefer to work with type-safe `Distance`s.
    pub fn inner_meters(self) -> f64 {
        self.0
    }

    /// Returns the distance in kilometers.
    pub fn to_km(self) -> f64 {
        self.0 / 1000.0
    }

    /// Returns the distance in miles, using the conventional 1 km = 0.621371 miles.
    pub fn to_miles(self) -> f64 {
        self.to_km() * 0.621371
    }
}

impl fmt::Display for Distance {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}m", self.0)
    }
}
