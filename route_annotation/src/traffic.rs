use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use geom::{Duration, HashableLonLat};

use crate::{AnnotationError, AnnotationOptions, Marker, MarkerSink, Route, TrafficIncident};

/// Which known incidents lie along a route, and how much they'll slow it down.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficReport {
    pub has_traffic: bool,
    /// Each incident appears at most once, in the order of the reference table.
    pub matched_incidents: Vec<TrafficIncident>,
    pub total_delay_minutes: usize,
}

impl TrafficReport {
    pub fn total_delay(&self) -> Duration {
        Duration::minutes(self.total_delay_minutes)
    }
}

/// An incident is on the route if any route point (besides the destination) is closer than the
/// detection radius.
/// Incidents are keyed by location; a second incident at an already matched location is ignored.
/// Emits a marker per matched incident.
///
/// Fails before matching anything if the options or any incident's location are unusable.
pub fn evaluate_traffic(
    route: &Route,
    incidents: &[TrafficIncident],
    opts: &AnnotationOptions,
    markers: &mut impl MarkerSink,
) -> Result<TrafficReport, AnnotationError> {
    opts.validate()?;
    for incident in incidents {
        incident.validate()?;
    }

    let radius = opts.traffic_detection_radius();
    let mut seen: HashSet<HashableLonLat> = HashSet::new();
    let mut report = TrafficReport::default();

    for incident in incidents {
        let key = incident.location.to_hashable();
        if seen.contains(&key) {
            continue;
        }
        let Some(idx) = route
            .edge_starts()
            .iter()
            .position(|pt| pt.gps_dist_meters(incident.location) < radius)
        else {
            continue;
        };
        debug!(
            "Route point #{} passes {} traffic at {}",
            idx, incident.severity, incident.location
        );

        seen.insert(key);
        report.total_delay_minutes += incident.delay_minutes;
        report.matched_incidents.push(*incident);
        markers.emit(Marker::Incident {
            position: incident.location,
            severity: incident.severity,
            delay_minutes: incident.delay_minutes,
        });
    }

    report.has_traffic = !report.matched_incidents.is_empty();
    Ok(report)
}
