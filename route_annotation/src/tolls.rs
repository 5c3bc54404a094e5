use serde::{Deserialize, Serialize};

use geom::{Distance, LonLat};

use crate::{
    AnnotationError, AnnotationOptions, Marker, MarkerSink, Money, Route, TollRoad, TollSegment,
};

/// Which toll roads a route uses, and what they'll cost.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TollReport {
    pub has_tolls: bool,
    /// Each road appears once, in the order it was first matched.
    pub toll_roads: Vec<String>,
    /// The sum over every matched segment. A road with two matched segments is billed twice.
    pub total_cost: Money,
}

/// Checks every segment of every toll road against the route. A segment is used if any route
/// point (besides the destination) is closer than the threshold; each segment is billed at most
/// once. Emits a marker per matched segment.
///
/// Fails before matching anything if the options or any segment's endpoints are unusable.
pub fn evaluate_tolls(
    route: &Route,
    toll_roads: &[TollRoad],
    opts: &AnnotationOptions,
    markers: &mut impl MarkerSink,
) -> Result<TollReport, AnnotationError> {
    opts.validate()?;
    for road in toll_roads {
        road.validate()?;
    }

    let threshold = opts.toll_match_threshold();
    let mut report = TollReport::default();

    for road in toll_roads {
        for segment in &road.segments {
            let hit = route.edge_starts().iter().position(|pt| {
                proximity(*pt, segment, opts.projected_segment_distance) < threshold
            });
            let Some(idx) = hit else {
                continue;
            };
            debug!(
                "Route point #{} uses a {} segment of {}",
                idx, segment.cost, road.name
            );

            if !report.toll_roads.contains(&road.name) {
                report.toll_roads.push(road.name.clone());
            }
            report.total_cost += segment.cost;
            markers.emit(Marker::Toll {
                position: segment.midpoint(),
                road: road.name.clone(),
                cost: segment.cost,
            });
        }
    }

    report.has_tolls = !report.toll_roads.is_empty();
    Ok(report)
}

fn proximity(pt: LonLat, segment: &TollSegment, projected: bool) -> Distance {
    if projected {
        pt.dist_to_segment_projected(segment.start, segment.end)
    } else {
        pt.dist_to_segment_endpoints(segment.start, segment.end)
    }
}
