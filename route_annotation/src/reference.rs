//! Static reference tables: the toll roads and traffic incidents that routes are checked against.
//! These are loaded once and never change while evaluating routes.

use std::fmt;

use anyhow::Result;
use serde::{Deserialize, Serialize};

use geom::LonLat;

use crate::{AnnotationError, Money};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub toll_roads: Vec<TollRoad>,
    pub incidents: Vec<TrafficIncident>,
}

/// A named toll road, made up of individually billed segments.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TollRoad {
    pub name: String,
    pub segments: Vec<TollSegment>,
}

/// A stretch of toll road between two points. Crossing it costs a fixed amount.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TollSegment {
    pub start: LonLat,
    pub end: LonLat,
    pub cost: Money,
}

/// A known, fixed point of congestion.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct TrafficIncident {
    pub location: LonLat,
    pub severity: Severity,
    /// Always whole minutes. Reference files with a fractional delay fail to load.
    pub delay_minutes: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Light,
    Moderate,
    Severe,
}

impl ReferenceData {
    /// Toll roads and incidents around Dallas, compiled into the build.
    pub fn dallas() -> ReferenceData {
        // The embedded file is covered by tests, so failing here means a broken build
        serde_json::from_str(include_str!("../data/dallas.json"))
            .expect("embedded Dallas reference data is malformed")
    }

    /// Reads reference data from a JSON file with the same shape as the built-in data.
    pub fn load(path: &str) -> Result<ReferenceData> {
        let data: ReferenceData = abstutil::read_json(path)?;
        data.validate()?;
        info!(
            "Loaded {} toll roads and {} incidents from {}",
            data.toll_roads.len(),
            data.incidents.len(),
            path
        );
        Ok(data)
    }

    /// Checks every coordinate in the tables.
    pub fn validate(&self) -> Result<(), AnnotationError> {
        for road in &self.toll_roads {
            road.validate()?;
        }
        for incident in &self.incidents {
            incident.validate()?;
        }
        Ok(())
    }
}

impl TollRoad {
    pub fn validate(&self) -> Result<(), AnnotationError> {
        for (idx, segment) in self.segments.iter().enumerate() {
            for pt in [segment.start, segment.end] {
                if !pt.is_valid() {
                    return Err(AnnotationError::InvalidGeometry(format!(
                        "segment #{} of {} has bad point {}",
                        idx, self.name, pt
                    )));
                }
            }
        }
        Ok(())
    }
}

impl TollSegment {
    /// Where to show this segment's marker.
    pub fn midpoint(&self) -> LonLat {
        self.start.midpoint(self.end)
    }
}

impl TrafficIncident {
    pub fn validate(&self) -> Result<(), AnnotationError> {
        if self.location.is_valid() {
            Ok(())
        } else {
            Err(AnnotationError::InvalidGeometry(format!(
                "{} incident at {}",
                self.severity, self.location
            )))
        }
    }
}

impl Severity {
    /// "Severe", "Moderate", or "Light"
    pub fn capitalized(self) -> &'static str {
        match self {
            Severity::Light => "Light",
            Severity::Moderate => "Moderate",
            Severity::Severe => "Severe",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Severity::Light => write!(f, "light"),
            Severity::Moderate => write!(f, "moderate"),
            Severity::Severe => write!(f, "severe"),
        }
    }
}
