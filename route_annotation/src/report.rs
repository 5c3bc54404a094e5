use serde::{Deserialize, Serialize};

use crate::{Colorized, Route, TollReport, TrafficReport};

/// Everything the presentation layer needs to show about one route.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AnnotationReport {
    pub tolls: TollReport,
    pub traffic: TrafficReport,
    pub colorized: Colorized,
    /// Rounded to one decimal place
    pub distance_km: f64,
    /// Rounded to one decimal place
    pub distance_miles: f64,
    /// Rounded to the nearest minute
    pub duration_minutes: usize,
}

impl AnnotationReport {
    pub fn new(
        route: &Route,
        tolls: TollReport,
        traffic: TrafficReport,
        colorized: Colorized,
    ) -> AnnotationReport {
        AnnotationReport {
            tolls,
            traffic,
            colorized,
            distance_km: round_1(route.total_distance().to_km()),
            distance_miles: round_1(route.total_distance().to_miles()),
            duration_minutes: route.total_time().num_minutes_rounded(),
        }
    }

    /// A plain-text summary, one line per entry.
    pub fn describe(&self) -> Vec<String> {
        let mut lines = vec![
            format!(
                "Distance: {:.1} miles ({:.1} km)",
                self.distance_miles, self.distance_km
            ),
            format!("Estimated time: {} minutes", self.duration_minutes),
        ];
        if self.traffic.total_delay_minutes > 0 {
            lines.push(format!(
                "Potential delay: {} minutes due to traffic",
                self.traffic.total_delay_minutes
            ));
        } else {
            lines.push("No significant traffic delays".to_string());
        }

        if self.tolls.has_tolls {
            lines.push("Toll Roads:".to_string());
            for road in &self.tolls.toll_roads {
                lines.push(format!("  - {}", road));
            }
            lines.push(format!("Total Toll Cost: {}", self.tolls.total_cost));
        } else {
            lines.push("No toll roads on this route".to_string());
        }

        if self.traffic.has_traffic {
            lines.push("Current Traffic Conditions:".to_string());
            for incident in &self.traffic.matched_incidents {
                lines.push(format!(
                    "  - {} traffic ({} min delay)",
                    incident.severity.capitalized(),
                    incident.delay_minutes
                ));
            }
        } else {
            lines.push("No significant traffic on this route".to_string());
        }
        lines
    }
}

fn round_1(x: f64) -> f64 {
    (x * 10.0).round() / 10.0
}
