//! Geodesic direct problem solvers.

use super::{Ellipsoid, Vertex};
use geo::{GeodesicDestination, Point};

/// Solves the geodesic direct problem: start + azimuth + distance → end.
pub trait ForwardSolver: Send + Sync {
    /// Destination reached from `from` along `azimuth_deg` (clockwise from
    /// north) after `distance_m` meters.
    fn direct(&self, from: Vertex, azimuth_deg: f64, distance_m: f64) -> Vertex;
}

/// Karney's algorithm on WGS84, through `geo`'s geographiclib binding.
///
/// Accurate to a few nanometers over any distance.
#[derive(Debug, Clone, Copy, Default)]
pub struct KarneySolver;

impl ForwardSolver for KarneySolver {
    fn direct(&self, from: Vertex, azimuth_deg: f64, distance_m: f64) -> Vertex {
        Point::from(from)
            .geodesic_destination(azimuth_deg, distance_m)
            .into()
    }
}

const VINCENTY_TOLERANCE: f64 = 1e-12;
const VINCENTY_MAX_ITERATIONS: usize = 200;

/// Vincenty's iterative direct solution on an arbitrary ellipsoid.
///
/// Sub-millimeter for cadastral leg lengths. Used for non-WGS84 ellipsoids
/// and as a cross-check of [`KarneySolver`].
#[derive(Debug, Clone, Copy, Default)]
pub struct VincentySolver {
    /// Ellipsoid the solution runs on
    pub ellipsoid: Ellipsoid,
}

impl VincentySolver {
    /// Create a solver for `ellipsoid`.
    pub fn new(ellipsoid: Ellipsoid) -> Self {
        Self { ellipsoid }
    }
}

impl ForwardSolver for VincentySolver {
    fn direct(&self, from: Vertex, azimuth_deg: f64, distance_m: f64) -> Vertex {
        let Ellipsoid { a, f } = self.ellipsoid;
        let b = self.ellipsoid.b();

        let (sin_alpha1, cos_alpha1) = azimuth_deg.to_radians().sin_cos();

        let tan_u1 = (1.0 - f) * from.lat.to_radians().tan();
        let cos_u1 = 1.0 / (1.0 + tan_u1 * tan_u1).sqrt();
        let sin_u1 = tan_u1 * cos_u1;

        let sigma1 = tan_u1.atan2(cos_alpha1);
        let sin_alpha = cos_u1 * sin_alpha1;
        let cos_sq_alpha = 1.0 - sin_alpha * sin_alpha;
        let u_sq = cos_sq_alpha * (a * a - b * b) / (b * b);

        let big_a =
            1.0 + u_sq / 16384.0 * (4096.0 + u_sq * (-768.0 + u_sq * (320.0 - 175.0 * u_sq)));
        let big_b = u_sq / 1024.0 * (256.0 + u_sq * (-128.0 + u_sq * (74.0 - 47.0 * u_sq)));

        let sigma0 = distance_m / (b * big_a);
        let mut sigma = sigma0;
        let mut cos_2sigma_m;
        let mut sin_sigma;
        let mut cos_sigma;
        let mut iterations = 0;

        loop {
            cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
            sin_sigma = sigma.sin();
            cos_sigma = sigma.cos();

            let delta_sigma = big_b
                * sin_sigma
                * (cos_2sigma_m
                    + big_b / 4.0
                        * (cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)
                            - big_b / 6.0
                                * cos_2sigma_m
                                * (-3.0 + 4.0 * sin_sigma * sin_sigma)
                                * (-3.0 + 4.0 * cos_2sigma_m * cos_2sigma_m)));

            let previous = sigma;
            sigma = sigma0 + delta_sigma;
            iterations += 1;

            if (sigma - previous).abs() < VINCENTY_TOLERANCE
                || iterations >= VINCENTY_MAX_ITERATIONS
            {
                break;
            }
        }

        if iterations >= VINCENTY_MAX_ITERATIONS {
            log::warn!(
                "vincenty direct did not converge (azimuth {}, distance {})",
                azimuth_deg,
                distance_m
            );
        }

        cos_2sigma_m = (2.0 * sigma1 + sigma).cos();
        sin_sigma = sigma.sin();
        cos_sigma = sigma.cos();

        let x = sin_u1 * sin_sigma - cos_u1 * cos_sigma * cos_alpha1;
        let lat2 = (sin_u1 * cos_sigma + cos_u1 * sin_sigma * cos_alpha1)
            .atan2((1.0 - f) * (sin_alpha * sin_alpha + x * x).sqrt());
        let lambda =
            (sin_sigma * sin_alpha1).atan2(cos_u1 * cos_sigma - sin_u1 * sin_sigma * cos_alpha1);
        let c = f / 16.0 * cos_sq_alpha * (4.0 + f * (4.0 - 3.0 * cos_sq_alpha));
        let l = lambda
            - (1.0 - c)
                * f
                * sin_alpha
                * (sigma
                    + c * sin_sigma
                        * (cos_2sigma_m + c * cos_sigma * (-1.0 + 2.0 * cos_2sigma_m * cos_2sigma_m)));

        Vertex::new(normalize_longitude(from.lon + l.to_degrees()), lat2.to_degrees())
    }
}

/// Wrap a longitude into [-180, 180).
fn normalize_longitude(lon: f64) -> f64 {
    (lon + 180.0).rem_euclid(360.0) - 180.0
}
