//! Geodesic boundary traversal on the WGS84 ellipsoid.
//!
//! Starting from a tie point, every boundary call is converted to an azimuth
//! and solved as a geodesic direct problem from the previous vertex. The
//! solver sits behind the [`ForwardSolver`] trait:
//!
//! - [`KarneySolver`]: WGS84, Karney (2013) through the `geo` crate
//! - [`VincentySolver`]: Vincenty (1975) iteration on any [`Ellipsoid`]
//!
//! ## Example
//!
//! ```
//! use metes_oxide::geodesy::{KarneySolver, Leg, Traversal, Vertex};
//!
//! let traversal = Traversal::new(KarneySolver);
//! let vertices = traversal
//!     .run(Vertex::new(0.0, 0.0), &[Leg::new(90.0, 111_319.49)])
//!     .unwrap();
//! assert!((vertices[0].lon - 1.0).abs() < 1e-3);
//! assert!(vertices[0].lat.abs() < 1e-3);
//! ```

pub mod closure;
pub mod solver;
pub mod traverse;

pub use closure::ClosureReport;
pub use solver::{ForwardSolver, KarneySolver, VincentySolver};
pub use traverse::Traversal;

use geo::Point;
use serde::{Deserialize, Serialize};

/// A point in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Vertex {
    /// Longitude, degrees east
    pub lon: f64,
    /// Latitude, degrees north
    pub lat: f64,
}

impl Vertex {
    /// Create a vertex from longitude and latitude.
    pub fn new(lon: f64, lat: f64) -> Self {
        Self { lon, lat }
    }

    /// `[lon, lat]`, the GeoJSON coordinate order.
    pub fn to_array(self) -> [f64; 2] {
        [self.lon, self.lat]
    }

    /// Finite, with latitude within ±90°.
    pub fn is_valid(&self) -> bool {
        self.lon.is_finite() && self.lat.is_finite() && self.lat.abs() <= 90.0
    }
}

impl From<Vertex> for Point<f64> {
    fn from(v: Vertex) -> Self {
        Point::new(v.lon, v.lat)
    }
}

impl From<Point<f64>> for Vertex {
    fn from(p: Point<f64>) -> Self {
        Self::new(p.x(), p.y())
    }
}

/// One traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Leg {
    /// Azimuth, degrees clockwise from true north
    pub azimuth_deg: f64,
    /// Distance, meters
    pub distance_m: f64,
}

impl Leg {
    /// Create a leg.
    pub fn new(azimuth_deg: f64, distance_m: f64) -> Self {
        Self {
            azimuth_deg,
            distance_m,
        }
    }
}

/// Reference ellipsoid.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Ellipsoid {
    /// Semi-major axis, meters
    pub a: f64,
    /// Flattening
    pub f: f64,
}

impl Ellipsoid {
    /// WGS84
    pub const WGS84: Ellipsoid = Ellipsoid {
        a: 6_378_137.0,
        f: 1.0 / 298.257_223_563,
    };

    /// Clarke 1866, the PRS92 ellipsoid
    pub const CLARKE_1866: Ellipsoid = Ellipsoid {
        a: 6_378_206.4,
        f: 1.0 / 294.978_698_214,
    };

    /// Semi-minor axis.
    pub fn b(&self) -> f64 {
        self.a * (1.0 - self.f)
    }

    /// First eccentricity squared.
    pub fn e2(&self) -> f64 {
        self.f * (2.0 - self.f)
    }
}

impl Default for Ellipsoid {
    fn default() -> Self {
        Self::WGS84
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vertex_point_conversion() {
        let v = Vertex::new(121.05, 14.6);
        let p: Point<f64> = v.into();
        assert_eq!((p.x(), p.y()), (121.05, 14.6));
        assert_eq!(Vertex::from(p), v);
        assert_eq!(v.to_array(), [121.05, 14.6]);
    }

    #[test]
    fn test_vertex_validation() {
        assert!(Vertex::new(181.0, 90.0).is_valid());
        assert!(!Vertex::new(0.0, 90.5).is_valid());
        assert!(!Vertex::new(f64::NAN, 0.0).is_valid());
        assert!(!Vertex::new(0.0, f64::INFINITY).is_valid());
    }

    #[test]
    fn test_ellipsoid_constants() {
        assert!((Ellipsoid::WGS84.b() - 6_356_752.314_245).abs() < 1e-3);
        assert!((Ellipsoid::CLARKE_1866.b() - 6_356_583.8).abs() < 0.1);
        assert!((Ellipsoid::WGS84.e2() - 0.006_694_379_990_14).abs() < 1e-12);
    }

    #[test]
    fn test_vertex_serializes_with_names() {
        let json = serde_json::to_string(&Vertex::new(1.5, -2.0)).unwrap();
        assert_eq!(json, r#"{"lon":1.5,"lat":-2.0}"#);
    }
}
