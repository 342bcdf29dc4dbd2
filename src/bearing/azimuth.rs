//! Quadrant bearing to azimuth conversion.

use super::{Bearing, EastWest, NorthSouth};
use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

/// Whether arc-seconds contribute to the azimuth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SecondsPolicy {
    /// angle = degrees + minutes/60 + seconds/3600
    #[default]
    Fold,
    /// angle = degrees + minutes/60, seconds ignored (minute precision)
    Discard,
}

/// Convert a quadrant bearing to an azimuth in [0, 360).
///
/// | ns | ew | azimuth     |
/// |----|----|-------------|
/// | N  | E  | angle       |
/// | N  | W  | 360 − angle |
/// | S  | E  | 180 − angle |
/// | S  | W  | 180 + angle |
///
/// A bearing without an E/W letter is rejected with `MissingEastWest`.
///
/// # Examples
///
/// ```
/// use metes_oxide::bearing::{to_azimuth, Bearing, EastWest, NorthSouth, SecondsPolicy};
///
/// let b = Bearing::new(NorthSouth::South, 45, 30, EastWest::East);
/// assert_eq!(to_azimuth(&b, SecondsPolicy::Fold).unwrap(), 134.5);
/// ```
pub fn to_azimuth(bearing: &Bearing, policy: SecondsPolicy) -> Result<f64> {
    let east_west = bearing.east_west.ok_or_else(|| Error::MissingEastWest {
        bearing: bearing.to_string(),
    })?;

    let mut angle = bearing.degrees as f64 + bearing.minutes as f64 / 60.0;
    if policy == SecondsPolicy::Fold {
        angle += bearing.seconds.unwrap_or(0.0) / 3600.0;
    }

    let azimuth = match (bearing.north_south, east_west) {
        (NorthSouth::North, EastWest::East) => angle,
        (NorthSouth::North, EastWest::West) => 360.0 - angle,
        (NorthSouth::South, EastWest::East) => 180.0 - angle,
        (NorthSouth::South, EastWest::West) => 180.0 + angle,
    };

    Ok(normalize_degrees(azimuth))
}

/// Wrap an angle into [0, 360).
pub(crate) fn normalize_degrees(angle: f64) -> f64 {
    let wrapped = angle.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if wrapped >= 360.0 {
        0.0
    } else {
        wrapped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn azimuth(ns: NorthSouth, deg: u32, min: u32, ew: EastWest) -> f64 {
        to_azimuth(&Bearing::new(ns, deg, min, ew), SecondsPolicy::Fold).unwrap()
    }

    #[test]
    fn test_quadrants() {
        assert_eq!(azimuth(NorthSouth::North, 45, 30, EastWest::East), 45.5);
        assert_eq!(azimuth(NorthSouth::North, 45, 30, EastWest::West), 314.5);
        assert_eq!(azimuth(NorthSouth::South, 45, 30, EastWest::East), 134.5);
        assert_eq!(azimuth(NorthSouth::South, 45, 30, EastWest::West), 225.5);
    }

    #[test]
    fn test_cardinal_edges() {
        assert_eq!(azimuth(NorthSouth::North, 0, 0, EastWest::East), 0.0);
        assert_eq!(azimuth(NorthSouth::North, 0, 0, EastWest::West), 0.0);
        assert_eq!(azimuth(NorthSouth::North, 90, 0, EastWest::East), 90.0);
        assert_eq!(azimuth(NorthSouth::South, 90, 0, EastWest::East), 90.0);
        assert_eq!(azimuth(NorthSouth::South, 90, 0, EastWest::West), 270.0);
        assert_eq!(azimuth(NorthSouth::South, 0, 0, EastWest::West), 180.0);
    }

    #[test]
    fn test_out_of_range_angles_wrap() {
        // OCR-mangled 185° is accepted by the tokenizer, the azimuth still wraps
        assert_eq!(azimuth(NorthSouth::South, 185, 0, EastWest::East), 355.0);
        assert_eq!(azimuth(NorthSouth::South, 185, 0, EastWest::West), 5.0);
        assert_eq!(azimuth(NorthSouth::North, 400, 0, EastWest::East), 40.0);
    }

    #[test]
    fn test_seconds_policy() {
        let b = Bearing::new(NorthSouth::North, 10, 0, EastWest::East).with_seconds(36.0);
        assert!((to_azimuth(&b, SecondsPolicy::Fold).unwrap() - 10.01).abs() < 1e-12);
        assert_eq!(to_azimuth(&b, SecondsPolicy::Discard).unwrap(), 10.0);
    }

    #[test]
    fn test_missing_east_west_is_rejected() {
        let b = Bearing {
            north_south: NorthSouth::South,
            degrees: 10,
            minutes: 0,
            seconds: None,
            east_west: None,
        };
        let err = to_azimuth(&b, SecondsPolicy::Fold).unwrap_err();
        assert!(matches!(err, Error::MissingEastWest { .. }));
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(-90.0), 270.0);
        assert_eq!(normalize_degrees(-1e-17), 0.0);
        assert_eq!(normalize_degrees(725.0), 5.0);
    }
}
