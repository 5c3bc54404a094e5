use std::fmt;

use ordered_float::NotNan;
use serde::{Deserialize, Serialize};

use crate::Distance;

const EARTH_RADIUS_METERS: f64 = 6_371_000.0;

/// A WGS84 coordinate. Longitude is x, latitude is y.
#[derive(Clone, Copy, PartialEq, Debug, Serialize, Deserialize)]
pub struct LonLat {
    pub longitude: f64,
    pub latitude: f64,
}

impl LonLat {
    pub fn new(lon: f64, lat: f64) -> LonLat {
        LonLat {
            longitude: lon,
            latitude: lat,
        }
    }

    pub fn x(&self) -> f64 {
        self.longitude
    }

    pub fn y(&self) -> f64 {
        self.latitude
    }

    /// True if both components are finite and within the usual latitude/longitude ranges.
    pub fn is_valid(&self) -> bool {
        self.longitude.is_finite()
            && self.latitude.is_finite()
            && (-180.0..=180.0).contains(&self.longitude)
            && (-90.0..=90.0).contains(&self.latitude)
    }

    /// Great-circle distance, using the haversine formula.
    pub fn gps_dist_meters(&self, other: LonLat) -> Distance {
        let lon1 = self.longitude.to_radians();
        let lon2 = other.longitude.to_radians();
        let lat1 = self.latitude.to_radians();
        let lat2 = other.latitude.to_radians();

        let delta_lat = lat2 - lat1;
        let delta_lon = lon2 - lon1;

        let a = (delta_lat / 2.0).sin().powi(2)
            + (delta_lon / 2.0).sin().powi(2) * lat1.cos() * lat2.cos();
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());
        Distance::meters(EARTH_RADIUS_METERS * c)
    }

    /// How close this point is to a segment, measured only to the nearer of the two endpoints.
    /// This under-reports proximity to the middle of long segments; see
    /// `dist_to_segment_projected` for the true distance.
    pub fn dist_to_segment_endpoints(&self, start: LonLat, end: LonLat) -> Distance {
        self.gps_dist_meters(start).min(self.gps_dist_meters(end))
    }

    /// The shortest distance from this point to any point along the segment. The segment is
    /// projected onto a local equirectangular plane centered on this point, which is accurate
    /// for segments of a few dozen kilometers.
    pub fn dist_to_segment_projected(&self, start: LonLat, end: LonLat) -> Distance {
        let (ax, ay) = self.local_xy(start);
        let (bx, by) = self.local_xy(end);
        let (dx, dy) = (bx - ax, by - ay);
        let len_squared = dx * dx + dy * dy;
        if len_squared == 0.0 {
            return Distance::meters(ax.hypot(ay));
        }
        // Self is the origin of the local plane
        let t = (-(ax * dx + ay * dy) / len_squared).clamp(0.0, 1.0);
        Distance::meters((ax + t * dx).hypot(ay + t * dy))
    }

    /// Meters east and north of this point.
    fn local_xy(&self, pt: LonLat) -> (f64, f64) {
        let meters_per_degree = EARTH_RADIUS_METERS.to_radians();
        let x = (pt.longitude - self.longitude)
            * self.latitude.to_radians().cos()
            * meters_per_degree;
        let y = (pt.latitude - self.latitude) * meters_per_degree;
        (x, y)
    }

    /// The average of two points' coordinates. Good enough for short segments away from the
    /// antimeridian.
    pub fn midpoint(&self, other: LonLat) -> LonLat {
        LonLat::new(
            (self.longitude + other.longitude) / 2.0,
            (self.latitude + other.latitude) / 2.0,
        )
    }

    /// Panics if either component is NaN.
    pub fn to_hashable(&self) -> HashableLonLat {
        HashableLonLat::new(self.longitude, self.latitude)
    }
}

impl fmt::Display for LonLat {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "LonLat({0}, {1})", self.longitude, self.latitude)
    }
}

/// A LonLat that can be hashed and compared for exact equality. Useful as a key for things
/// placed at a fixed coordinate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct HashableLonLat {
    lon_nan: NotNan<f64>,
    lat_nan: NotNan<f64>,
}

impl HashableLonLat {
    /// Panics if either component is NaN.
    pub fn new(lon: f64, lat: f64) -> HashableLonLat {
        HashableLonLat {
            lon_nan: NotNan::new(lon).unwrap(),
            lat_nan: NotNan::new(lat).unwrap(),
        }
    }
}

impl From<LonLat> for HashableLonLat {
    fn from(pt: LonLat) -> Self {
        pt.to_hashable()
    }
}
