use std::{error, fmt};

/// Problems with the input handed to the annotation engine. Every entry point checks its input
/// before matching, so callers can tell "bad input" apart from "nothing matched".
#[derive(Clone, Debug, PartialEq)]
pub enum AnnotationError {
    /// The route's shape or summary can't be evaluated, like having fewer than two points.
    InvalidRoute(String),
    /// Some coordinate isn't a finite, in-range latitude/longitude.
    InvalidGeometry(String),
    /// A distance option is negative, infinite, or NaN.
    InvalidOptions(String),
}

impl fmt::Display for AnnotationError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AnnotationError::InvalidRoute(msg) => write!(f, "invalid route: {}", msg),
            AnnotationError::InvalidGeometry(msg) => write!(f, "invalid geometry: {}", msg),
            AnnotationError::InvalidOptions(msg) => write!(f, "invalid options: {}", msg),
        }
    }
}

impl error::Error for AnnotationError {}
