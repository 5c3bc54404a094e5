use serde::{Deserialize, Serialize};
use structopt::StructOpt;

use geom::Distance;

use crate::AnnotationError;

/// Tunable distances and behavior for evaluating a route. Every distance comparison is strict: a
/// point exactly at the limit doesn't count.
///
/// Distances are compared at 0.1mm resolution, the precision `geom::Distance` keeps. A point less
/// than 0.05mm inside a limit rounds onto the limit itself, so it doesn't count either.
#[derive(Clone, Debug, PartialEq, StructOpt, Serialize, Deserialize)]
#[serde(default)]
pub struct AnnotationOptions {
    /// A route point closer than this to a toll segment means the route uses that segment.
    #[structopt(long, default_value = "500")]
    pub toll_match_threshold_meters: f64,
    /// A route point closer than this to a traffic incident puts the incident on the route.
    #[structopt(long, default_value = "1000")]
    pub traffic_detection_radius_meters: f64,
    /// Route edges with an endpoint closer than this to an incident are drawn in the incident's
    /// color.
    #[structopt(long, default_value = "2000")]
    pub visual_extension_radius_meters: f64,
    /// Measure proximity to toll segments along the whole segment, instead of only to its two
    /// endpoints. This detects more matches along long segments.
    #[structopt(long)]
    pub projected_segment_distance: bool,
    /// Color every stretch of route near an incident, instead of only the first one. Matters for
    /// routes that loop back near the same incident.
    #[structopt(long)]
    pub all_overlay_runs: bool,
}

impl Default for AnnotationOptions {
    fn default() -> AnnotationOptions {
        AnnotationOptions {
            toll_match_threshold_meters: 500.0,
            traffic_detection_radius_meters: 1000.0,
            visual_extension_radius_meters: 2000.0,
            projected_segment_distance: false,
            all_overlay_runs: false,
        }
    }
}

impl AnnotationOptions {
    /// Every distance must be finite and non-negative. Flags and JSON both happily produce `inf`
    /// and `NaN`, so check before using any of the accessors below.
    pub fn validate(&self) -> Result<(), AnnotationError> {
        for (name, value) in [
            ("toll_match_threshold_meters", self.toll_match_threshold_meters),
            (
                "traffic_detection_radius_meters",
                self.traffic_detection_radius_meters,
            ),
            (
                "visual_extension_radius_meters",
                self.visual_extension_radius_meters,
            ),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(AnnotationError::InvalidOptions(format!(
                    "{} is {}, but must be a finite distance of at least 0",
                    name, value
                )));
            }
        }
        Ok(())
    }

    /// Panics unless `validate` passes.
    pub fn toll_match_threshold(&self) -> Distance {
        Distance::meters(self.toll_match_threshold_meters)
    }

    /// Panics unless `validate` passes.
    pub fn traffic_detection_radius(&self) -> Distance {
        Distance::meters(self.traffic_detection_radius_meters)
    }

    /// Panics unless `validate` passes.
    pub fn visual_extension_radius(&self) -> Distance {
        Distance::meters(self.visual_extension_radius_meters)
    }
}
