use std::ops::Range;

use serde::{Deserialize, Serialize};

use geom::{Distance, LonLat};

use crate::{AnnotationError, AnnotationOptions, Color, Route, TrafficIncident};

/// One edge of a route, drawn in some color.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ColoredSegment {
    pub from: LonLat,
    pub to: LonLat,
    pub color: Color,
}

/// How to draw a route: the whole thing in the clear color, then congested stretches on top.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Colorized {
    /// Every edge of the route exactly once, in order.
    pub base: Vec<ColoredSegment>,
    /// Edges near incidents, grouped by incident in reference table order.
    pub overlays: Vec<ColoredSegment>,
}

/// Colors a route by its proximity to traffic incidents. An edge is near an incident if either
/// endpoint is closer than the visual extension radius.
///
/// By default, only the first contiguous run of nearby edges per incident is colored. A route that
/// leaves an incident's vicinity and later comes back won't have the second pass highlighted;
/// `AnnotationOptions::all_overlay_runs` colors every run.
pub fn colorize(
    route: &Route,
    incidents: &[TrafficIncident],
    opts: &AnnotationOptions,
) -> Result<Colorized, AnnotationError> {
    opts.validate()?;
    for incident in incidents {
        incident.validate()?;
    }

    let edges: Vec<(LonLat, LonLat)> = route.edges().collect();
    let base = edges
        .iter()
        .map(|(from, to)| ColoredSegment {
            from: *from,
            to: *to,
            color: Color::CLEAR,
        })
        .collect();

    let radius = opts.visual_extension_radius();
    let mut overlays = Vec::new();
    for incident in incidents {
        let mut runs = runs_near(&edges, incident.location, radius);
        if !opts.all_overlay_runs {
            runs.truncate(1);
        }
        let color = Color::for_congestion(incident.severity);
        for run in runs {
            debug!(
                "Edges {:?} are near {} traffic at {}",
                run, incident.severity, incident.location
            );
            for (from, to) in &edges[run] {
                overlays.push(ColoredSegment {
                    from: *from,
                    to: *to,
                    color,
                });
            }
        }
    }

    Ok(Colorized { base, overlays })
}

/// Maximal ranges of consecutive edges with an endpoint closer than `radius` to `location`.
fn runs_near(edges: &[(LonLat, LonLat)], location: LonLat, radius: Distance) -> Vec<Range<usize>> {
    let mut runs = Vec::new();
    let mut current: Option<usize> = None;
    for (idx, (from, to)) in edges.iter().enumerate() {
        let near =
            from.gps_dist_meters(location) < radius || to.gps_dist_meters(location) < radius;
        match (near, current) {
            (true, None) => {
                current = Some(idx);
            }
            (false, Some(start)) => {
                runs.push(start..idx);
                current = None;
            }
            _ => {}
        }
    }
    if let Some(start) = current {
        runs.push(start..edges.len());
    }
    runs
}
