//! Error types for the land-title library.
//!
//! This module defines all error types that can occur while parsing a
//! technical description or traversing its boundary.

/// Result type alias for library operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during title parsing and traversal.
#[derive(Debug, thiserror::Error)]
#[allow(clippy::enum_variant_names)]
pub enum Error {
    /// The document was empty or whitespace only
    #[error("Input document is empty")]
    EmptyInput,

    /// No configured start phrase ("Beginning at a point ...") was found
    #[error("Could not find the 'Beginning at a point ...' anchor")]
    NoAnchorFound,

    /// The tie-line fragment does not split into exactly two parts on "from"
    #[error("Could not find tie-point in: {fragment:?}")]
    MissingTiePoint {
        /// The first fragment of the technical description
        fragment: String,
    },

    /// A bearing was recognized but no distance token followed it
    #[error("Could not parse distance in segment: {fragment:?}")]
    DistanceNotFound {
        /// The offending fragment
        fragment: String,
    },

    /// The description was segmented but yielded no boundary calls
    #[error("Technical description contains no boundary calls")]
    NoBoundaryCalls,

    /// Azimuth conversion of a bearing that has no E/W letter
    #[error("Bearing {bearing} has no east/west direction")]
    MissingEastWest {
        /// Rendered bearing
        bearing: String,
    },

    /// Text could not be read as a quadrant bearing
    #[error("Invalid bearing: {0:?}")]
    InvalidBearing(String),

    /// Starting coordinate out of range or not finite
    #[error("Invalid coordinate: lon={lon}, lat={lat}")]
    InvalidCoordinate {
        /// Longitude in degrees
        lon: f64,
        /// Latitude in degrees
        lat: f64,
    },

    /// Traversal leg with a non-finite azimuth or a negative distance
    #[error("Invalid leg #{index}: {reason}")]
    InvalidLeg {
        /// Zero-based leg index
        index: usize,
        /// What is wrong with the leg
        reason: String,
    },

    /// A configured pattern failed to compile
    #[error("Invalid pattern {pattern:?}: {reason}")]
    InvalidPattern {
        /// Pattern source text
        pattern: String,
        /// Compiler message
        reason: String,
    },

    /// Malformed configuration document
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Config(err.to_string())
    }
}
