//! Quadrant bearings and boundary calls.
//!
//! A technical description states each boundary leg as a quadrant bearing
//! (`N 45°30' E`) and a distance. This module holds the value types for those
//! legs, the tokenizer that recognizes them in OCR prose, and the conversion
//! to azimuths used by the geodesic solver.
//!
//! ## Example
//!
//! ```
//! use metes_oxide::bearing::{Bearing, SecondsPolicy};
//!
//! let bearing: Bearing = "S. 12 deg. 05' 30\" W.".parse().unwrap();
//! assert_eq!(bearing.to_string(), "S 12°05'30\" W");
//!
//! let azimuth = bearing.azimuth(SecondsPolicy::Fold).unwrap();
//! assert!((azimuth - 192.091_666).abs() < 1e-5);
//! ```

mod azimuth;
mod tokenizer;

pub use azimuth::{to_azimuth, SecondsPolicy};
pub use tokenizer::{tokenize, Token};

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Reference meridian direction of a quadrant bearing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NorthSouth {
    /// Measured from north
    #[serde(rename = "N")]
    North,
    /// Measured from south
    #[serde(rename = "S")]
    South,
}

/// Direction the bearing is turned toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EastWest {
    /// Turned toward east
    #[serde(rename = "E")]
    East,
    /// Turned toward west
    #[serde(rename = "W")]
    West,
}

impl NorthSouth {
    /// Read an `N`/`S` letter, either case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'N' => Some(Self::North),
            'S' => Some(Self::South),
            _ => None,
        }
    }

    /// Upper-case letter.
    pub fn letter(self) -> char {
        match self {
            Self::North => 'N',
            Self::South => 'S',
        }
    }
}

impl EastWest {
    /// Read an `E`/`W` letter, either case.
    pub fn from_letter(c: char) -> Option<Self> {
        match c.to_ascii_uppercase() {
            'E' => Some(Self::East),
            'W' => Some(Self::West),
            _ => None,
        }
    }

    /// Upper-case letter.
    pub fn letter(self) -> char {
        match self {
            Self::East => 'E',
            Self::West => 'W',
        }
    }
}

/// A quadrant bearing as written in the title.
///
/// No range validation is applied: an OCR-mangled `185°` is carried as-is.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bearing {
    /// N or S
    pub north_south: NorthSouth,
    /// Whole degrees
    pub degrees: u32,
    /// Whole minutes
    pub minutes: u32,
    /// Seconds, when stated
    pub seconds: Option<f64>,
    /// E or W, when stated
    pub east_west: Option<EastWest>,
}

impl Bearing {
    /// Create a bearing without seconds.
    pub fn new(north_south: NorthSouth, degrees: u32, minutes: u32, east_west: EastWest) -> Self {
        Self {
            north_south,
            degrees,
            minutes,
            seconds: None,
            east_west: Some(east_west),
        }
    }

    /// Set the seconds component.
    pub fn with_seconds(mut self, seconds: f64) -> Self {
        self.seconds = Some(seconds);
        self
    }

    /// Compass azimuth in [0, 360), clockwise from true north.
    pub fn azimuth(&self, policy: SecondsPolicy) -> Result<f64> {
        to_azimuth(self, policy)
    }
}

impl fmt::Display for Bearing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {}°{:02}'",
            self.north_south.letter(),
            self.degrees,
            self.minutes
        )?;
        if let Some(seconds) = self.seconds {
            if seconds.fract() == 0.0 {
                write!(f, "{:02}\"", seconds as u32)?;
            } else {
                write!(f, "{}\"", seconds)?;
            }
        }
        if let Some(ew) = self.east_west {
            write!(f, " {}", ew.letter())?;
        }
        Ok(())
    }
}

impl FromStr for Bearing {
    type Err = Error;

    /// Parse any bearing form the tokenizer grammar accepts. The whole
    /// input must be the bearing, apart from surrounding punctuation.
    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim().trim_end_matches([',', ';', ':']);
        match tokenizer::match_bearing(trimmed) {
            Some((bearing, range)) if range.start == 0 && trimmed[range.end..].trim().is_empty() => {
                Ok(bearing)
            },
            _ => Err(Error::InvalidBearing(s.to_string())),
        }
    }
}

/// One boundary leg: a bearing and a distance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoundaryCall {
    /// Quadrant bearing
    #[serde(flatten)]
    pub bearing: Bearing,
    /// Distance in meters, always positive
    pub distance_m: f64,
    /// Fragment the call was read from
    pub raw_text: String,
}

impl BoundaryCall {
    /// Create a call.
    pub fn new(bearing: Bearing, distance_m: f64, raw_text: impl Into<String>) -> Self {
        Self {
            bearing,
            distance_m,
            raw_text: raw_text.into(),
        }
    }

    /// Azimuth of this call.
    pub fn azimuth(&self, policy: SecondsPolicy) -> Result<f64> {
        self.bearing.azimuth(policy)
    }
}
