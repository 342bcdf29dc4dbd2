//! PRS92 grid coordinates.
//!
//! Tie points (BLLM monuments, cadastral control) are published as PRS92
//! grid eastings and northings. Traversal runs on WGS84 geographic
//! coordinates, so a tie point goes through two steps:
//!
//! 1. inverse Transverse Mercator on Clarke 1866 → PRS92 latitude/longitude
//! 2. seven-parameter Helmert shift → WGS84 latitude/longitude
//!
//! Ellipsoidal heights are taken as zero on both datums. The horizontal
//! error this introduces is about a millimeter.
//!
//! ## Example
//!
//! ```
//! use metes_oxide::grid::{GridCoordinate, Prs92Zone};
//!
//! let zone = Prs92Zone::from_epsg(3123).unwrap();
//! let vertex = zone.to_wgs84(GridCoordinate::new(505_240.70, 1_172_463.74));
//! assert!((vertex.lon - 121.05).abs() < 1e-6);
//! assert!((vertex.lat - 14.60).abs() < 1e-6);
//! ```

mod datum;
mod transverse_mercator;

use crate::geodesy::{Ellipsoid, Vertex};
use datum::{from_ecef, to_ecef, Helmert};
use serde::{Deserialize, Serialize};
use std::fmt;
use transverse_mercator::TransverseMercator;

/// A PRS92 easting/northing pair in meters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridCoordinate {
    /// Easting, meters
    pub easting: f64,
    /// Northing, meters
    pub northing: f64,
}

impl GridCoordinate {
    /// Create a grid coordinate.
    pub fn new(easting: f64, northing: f64) -> Self {
        Self { easting, northing }
    }
}

/// The five PRS92 Transverse Mercator zones.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Prs92Zone {
    /// Zone I, central meridian 117°E (EPSG:3121)
    I,
    /// Zone II, central meridian 119°E (EPSG:3122)
    II,
    /// Zone III, central meridian 121°E (EPSG:3123)
    III,
    /// Zone IV, central meridian 123°E (EPSG:3124)
    IV,
    /// Zone V, central meridian 125°E (EPSG:3125)
    V,
}

const LATITUDE_OF_ORIGIN: f64 = 4.0;
const SCALE_FACTOR: f64 = 0.99995;
const FALSE_EASTING: f64 = 500_000.0;
const FALSE_NORTHING: f64 = 0.0;

impl Prs92Zone {
    /// All zones, west to east.
    pub const ALL: [Prs92Zone; 5] = [Self::I, Self::II, Self::III, Self::IV, Self::V];

    /// EPSG code of the projected CRS.
    pub fn epsg(self) -> u32 {
        match self {
            Self::I => 3121,
            Self::II => 3122,
            Self::III => 3123,
            Self::IV => 3124,
            Self::V => 3125,
        }
    }

    /// Zone for an EPSG code.
    pub fn from_epsg(code: u32) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| zone.epsg() == code)
    }

    /// Central meridian, degrees east.
    pub fn central_meridian(self) -> f64 {
        match self {
            Self::I => 117.0,
            Self::II => 119.0,
            Self::III => 121.0,
            Self::IV => 123.0,
            Self::V => 125.0,
        }
    }

    /// Zone whose 2° band contains `lon`. Band edges belong to the zone to
    /// the east.
    pub fn containing(lon: f64) -> Option<Self> {
        Self::ALL.into_iter().find(|zone| {
            let cm = zone.central_meridian();
            lon >= cm - 1.0 && lon < cm + 1.0
        })
    }

    fn projection(self) -> TransverseMercator {
        TransverseMercator {
            ellipsoid: Ellipsoid::CLARKE_1866,
            lat0: LATITUDE_OF_ORIGIN,
            lon0: self.central_meridian(),
            k0: SCALE_FACTOR,
            false_easting: FALSE_EASTING,
            false_northing: FALSE_NORTHING,
        }
    }

    /// Convert a grid coordinate in this zone to WGS84.
    pub fn to_wgs84(self, grid: GridCoordinate) -> Vertex {
        let (lon, lat) = self.projection().inverse(grid.easting, grid.northing);
        let ecef = Helmert::PRS92_TO_WGS84.apply(to_ecef(&Ellipsoid::CLARKE_1866, lon, lat, 0.0));
        let (lon, lat, _) = from_ecef(&Ellipsoid::WGS84, ecef);
        log::trace!(
            "{} ({:.3}, {:.3}) -> ({:.9}, {:.9})",
            self,
            grid.easting,
            grid.northing,
            lon,
            lat
        );
        Vertex::new(lon, lat)
    }

    /// Project a WGS84 vertex onto this zone's grid.
    pub fn project(self, vertex: Vertex) -> GridCoordinate {
        let ecef = Helmert::PRS92_TO_WGS84.invert(to_ecef(&Ellipsoid::WGS84, vertex.lon, vertex.lat, 0.0));
        let (lon, lat, _) = from_ecef(&Ellipsoid::CLARKE_1866, ecef);
        let (easting, northing) = self.projection().forward(lon, lat);
        GridCoordinate::new(easting, northing)
    }
}

impl fmt::Display for Prs92Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let numeral = match self {
            Self::I => "I",
            Self::II => "II",
            Self::III => "III",
            Self::IV => "IV",
            Self::V => "V",
        };
        write!(f, "PRS92 Zone {} (EPSG:{})", numeral, self.epsg())
    }
}
