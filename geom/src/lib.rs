//! Units and GPS geometry shared by the route annotation crates. Everything here works in WGS84
//! degrees and meters; there's no projection into a map-space.

mod distance;
mod duration;
mod gps;

pub use crate::distance::Distance;
pub use crate::duration::Duration;
pub use crate::gps::{HashableLonLat, LonLat};

/// Reduce the precision of an f64 to 4 decimal places. `Distance` and `Duration` are always
/// stored this way, so two values closer than 0.00005 compare equal.
pub fn trim_f64(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
