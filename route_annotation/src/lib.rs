//! Annotates a driving route with the toll roads it uses, the known traffic incidents along it,
//! and a congestion coloring for drawing it. Routes come from elsewhere; this crate only matches
//! their points against small, static reference tables.
//!
//! Matching is approximate on purpose. A route "uses" a toll segment if some route point is near
//! one of the segment's endpoints (or anywhere along it, with
//! `AnnotationOptions::projected_segment_distance`), and an incident is "on" a route if some route
//! point is within a radius of it.

#[macro_use]
extern crate log;

mod color;
mod colorize;
mod error;
mod export;
mod markers;
mod money;
mod options;
mod reference;
mod report;
mod route;
mod session;
mod tolls;
mod traffic;

pub use crate::color::Color;
pub use crate::colorize::{colorize, ColoredSegment, Colorized};
pub use crate::error::AnnotationError;
pub use crate::export::to_geojson;
pub use crate::markers::{Marker, MarkerIcon, MarkerSink};
pub use crate::money::Money;
pub use crate::options::AnnotationOptions;
pub use crate::reference::{ReferenceData, Severity, TollRoad, TollSegment, TrafficIncident};
pub use crate::report::AnnotationReport;
pub use crate::route::{RawRoute, Route};
pub use crate::session::{Annotator, RenderSession};
pub use crate::tolls::{evaluate_tolls, TollReport};
pub use crate::traffic::{evaluate_traffic, TrafficReport};
