use serde::{Deserialize, Serialize};

use geom::LonLat;

use crate::{Color, Money, Severity};

/// A request for the presentation layer to place a marker on the map. Matching emits these as it
/// goes; drawing them is somebody else's job.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum Marker {
    /// The route uses a billed toll segment. Placed at the segment's midpoint.
    Toll {
        position: LonLat,
        road: String,
        cost: Money,
    },
    /// The route passes a traffic incident. Placed at the incident.
    Incident {
        position: LonLat,
        severity: Severity,
        delay_minutes: usize,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum MarkerIcon {
    Toll,
    Congestion(Color),
}

/// Receives markers as they're produced.
pub trait MarkerSink {
    fn emit(&mut self, marker: Marker);
}

impl MarkerSink for Vec<Marker> {
    fn emit(&mut self, marker: Marker) {
        self.push(marker);
    }
}

impl Marker {
    pub fn position(&self) -> LonLat {
        match self {
            Marker::Toll { position, .. } | Marker::Incident { position, .. } => *position,
        }
    }

    /// Popup text
    pub fn label(&self) -> String {
        match self {
            Marker::Toll { road, cost, .. } => format!("{}\nCost: {}", road, cost),
            Marker::Incident {
                severity,
                delay_minutes,
                ..
            } => format!("Traffic: {}\nDelay: {} mins", severity, delay_minutes),
        }
    }

    pub fn icon(&self) -> MarkerIcon {
        match self {
            Marker::Toll { .. } => MarkerIcon::Toll,
            Marker::Incident { severity, .. } => MarkerIcon::Congestion(severity.marker_color()),
        }
    }
}

impl Severity {
    /// The traffic-light palette used for incident markers. Not the same as the route overlay
    /// colors.
    pub fn marker_color(self) -> Color {
        match self {
            Severity::Severe => Color::RED,
            Severity::Moderate => Color::YELLOW,
            Severity::Light => Color::GREEN,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_icons() {
        let toll = Marker::Toll {
            position: LonLat::new(-96.82, 32.97),
            road: "Dallas North Tollway".to_string(),
            cost: Money::dollars(1.52),
        };
        assert_eq!(toll.label(), "Dallas North Tollway\nCost: $1.52");
        assert_eq!(toll.icon(), MarkerIcon::Toll);

        let incident = Marker::Incident {
            position: LonLat::new(-96.8238, 33.0176),
            severity: Severity::Moderate,
            delay_minutes: 8,
        };
        assert_eq!(incident.label(), "Traffic: moderate\nDelay: 8 mins");
        assert_eq!(incident.icon(), MarkerIcon::Congestion(Color::YELLOW));
        assert_eq!(incident.position(), LonLat::new(-96.8238, 33.0176));
    }
}
