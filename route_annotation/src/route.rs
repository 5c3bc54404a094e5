use serde::{Deserialize, Serialize};

use geom::{Distance, Duration, LonLat};

use crate::AnnotationError;

/// A driving route produced by some routing backend. Validated once on construction and
/// read-only afterwards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawRoute", into = "RawRoute")]
pub struct Route {
    coordinates: Vec<LonLat>,
    total_distance: Distance,
    total_time: Duration,
}

/// The wire format of a `Route`, before validation.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawRoute {
    pub coordinates: Vec<LonLat>,
    pub total_distance_meters: f64,
    pub total_time_seconds: f64,
}

impl Route {
    pub fn new(
        coordinates: Vec<LonLat>,
        total_distance: Distance,
        total_time: Duration,
    ) -> Result<Route, AnnotationError> {
        if coordinates.len() < 2 {
            return Err(AnnotationError::InvalidRoute(format!(
                "a route needs at least 2 points, but this one has {}",
                coordinates.len()
            )));
        }
        for (idx, pt) in coordinates.iter().enumerate() {
            if !pt.is_valid() {
                return Err(AnnotationError::InvalidGeometry(format!(
                    "route point #{} is {}",
                    idx, pt
                )));
            }
        }
        if total_distance < Distance::ZERO {
            return Err(AnnotationError::InvalidRoute(format!(
                "negative total distance {}",
                total_distance
            )));
        }
        if total_time < Duration::ZERO {
            return Err(AnnotationError::InvalidRoute(format!(
                "negative total time {}",
                total_time
            )));
        }

        Ok(Route {
            coordinates,
            total_distance,
            total_time,
        })
    }

    pub fn coordinates(&self) -> &[LonLat] {
        &self.coordinates
    }

    pub fn total_distance(&self) -> Distance {
        self.total_distance
    }

    pub fn total_time(&self) -> Duration {
        self.total_time
    }

    /// Every point that begins an edge; that is, all but the destination. Point matching only
    /// looks at these.
    pub fn edge_starts(&self) -> &[LonLat] {
        &self.coordinates[..self.coordinates.len() - 1]
    }

    /// Consecutive pairs of points, in order.
    pub fn edges(&self) -> impl Iterator<Item = (LonLat, LonLat)> + '_ {
        self.coordinates.windows(2).map(|pair| (pair[0], pair[1]))
    }
}

impl TryFrom<RawRoute> for Route {
    type Error = AnnotationError;

    fn try_from(raw: RawRoute) -> Result<Route, AnnotationError> {
        // Distance and Duration panic on non-finite input, so check first
        if !raw.total_distance_meters.is_finite() || !raw.total_time_seconds.is_finite() {
            return Err(AnnotationError::InvalidRoute(format!(
                "summary has non-finite distance {} or time {}",
                raw.total_distance_meters, raw.total_time_seconds
            )));
        }
        Route::new(
            raw.coordinates,
            Distance::meters(raw.total_distance_meters),
            Duration::seconds(raw.total_time_seconds),
        )
    }
}

impl From<Route> for RawRoute {
    fn from(route: Route) -> RawRoute {
        RawRoute {
            coordinates: route.coordinates,
            total_distance_meters: route.total_distance.inner_meters(),
            total_time_seconds: route.total_time.inner_seconds(),
        }
    }
}
