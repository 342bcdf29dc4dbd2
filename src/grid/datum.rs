//! Geodetic datum shift through earth-centred coordinates.

use crate::geodesy::Ellipsoid;

const ARC_SECOND: f64 = std::f64::consts::PI / (180.0 * 3600.0);

/// Seven-parameter Helmert transformation, position-vector convention.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct Helmert {
    /// Translations, meters
    pub translation: [f64; 3],
    /// Rotations, arc-seconds
    pub rotation_arcsec: [f64; 3],
    /// Scale difference, parts per million
    pub scale_ppm: f64,
}

impl Helmert {
    /// PRS92 (Clarke 1866) to WGS84.
    pub const PRS92_TO_WGS84: Helmert = Helmert {
        translation: [-127.62, -67.24, -47.04],
        rotation_arcsec: [-3.068, 4.903, 1.578],
        scale_ppm: -1.06,
    };

    fn rotation_matrix(&self) -> [[f64; 3]; 3] {
        let [rx, ry, rz] = self.rotation_arcsec.map(|r| r * ARC_SECOND);
        [[1.0, -rz, ry], [rz, 1.0, -rx], [-ry, rx, 1.0]]
    }

    fn scale(&self) -> f64 {
        1.0 + self.scale_ppm * 1e-6
    }

    /// Source frame to target frame.
    pub fn apply(&self, p: [f64; 3]) -> [f64; 3] {
        let r = self.rotation_matrix();
        let s = self.scale();
        let t = self.translation;
        [
            t[0] + s * (r[0][0] * p[0] + r[0][1] * p[1] + r[0][2] * p[2]),
            t[1] + s * (r[1][0] * p[0] + r[1][1] * p[1] + r[1][2] * p[2]),
            t[2] + s * (r[2][0] * p[0] + r[2][1] * p[1] + r[2][2] * p[2]),
        ]
    }

    /// Target frame back to source frame, inverting the matrix exactly.
    pub fn invert(&self, p: [f64; 3]) -> [f64; 3] {
        let m = self.rotation_matrix();
        let s = self.scale();
        let t = self.translation;
        let q = [(p[0] - t[0]) / s, (p[1] - t[1]) / s, (p[2] - t[2]) / s];

        let det = m[0][0] * (m[1][1] * m[2][2] - m[1][2] * m[2][1])
            - m[0][1] * (m[1][0] * m[2][2] - m[1][2] * m[2][0])
            + m[0][2] * (m[1][0] * m[2][1] - m[1][1] * m[2][0]);

        let inv = [
            [
                (m[1][1] * m[2][2] - m[1][2] * m[2][1]) / det,
                (m[0][2] * m[2][1] - m[0][1] * m[2][2]) / det,
                (m[0][1] * m[1][2] - m[0][2] * m[1][1]) / det,
            ],
            [
                (m[1][2] * m[2][0] - m[1][0] * m[2][2]) / det,
                (m[0][0] * m[2][2] - m[0][2] * m[2][0]) / det,
                (m[0][2] * m[1][0] - m[0][0] * m[1][2]) / det,
            ],
            [
                (m[1][0] * m[2][1] - m[1][1] * m[2][0]) / det,
                (m[0][1] * m[2][0] - m[0][0] * m[2][1]) / det,
                (m[0][0] * m[1][1] - m[0][1] * m[1][0]) / det,
            ],
        ];

        [
            inv[0][0] * q[0] + inv[0][1] * q[1] + inv[0][2] * q[2],
            inv[1][0] * q[0] + inv[1][1] * q[1] + inv[1][2] * q[2],
            inv[2][0] * q[0] + inv[2][1] * q[1] + inv[2][2] * q[2],
        ]
    }
}

/// Geodetic (degrees, ellipsoidal height in meters) to ECEF meters.
pub(crate) fn to_ecef(ellipsoid: &Ellipsoid, lon: f64, lat: f64, h: f64) -> [f64; 3] {
    let e2 = ellipsoid.e2();
    let (sin_phi, cos_phi) = lat.to_radians().sin_cos();
    let (sin_lam, cos_lam) = lon.to_radians().sin_cos();
    let n = ellipsoid.a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
    [
        (n + h) * cos_phi * cos_lam,
        (n + h) * cos_phi * sin_lam,
        (n * (1.0 - e2) + h) * sin_phi,
    ]
}

/// ECEF meters to geodetic (lon, lat, h).
pub(crate) fn from_ecef(ellipsoid: &Ellipsoid, p: [f64; 3]) -> (f64, f64, f64) {
    let e2 = ellipsoid.e2();
    let [x, y, z] = p;
    let rho = x.hypot(y);
    let lon = y.atan2(x);

    let mut lat = z.atan2(rho * (1.0 - e2));
    let mut h = 0.0;
    for _ in 0..10 {
        let sin_phi = lat.sin();
        let n = ellipsoid.a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        h = rho / lat.cos() - n;
        let next = z.atan2(rho * (1.0 - e2 * n / (n + h)));
        let done = (next - lat).abs() < 1e-14;
        lat = next;
        if done {
            break;
        }
    }

    (lon.to_degrees(), lat.to_degrees(), h)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ecef_round_trip() {
        let e = Ellipsoid::WGS84;
        let p = to_ecef(&e, 121.05, 14.6, 35.0);
        let (lon, lat, h) = from_ecef(&e, p);
        assert!((lon - 121.05).abs() < 1e-10);
        assert!((lat - 14.6).abs() < 1e-10);
        assert!((h - 35.0).abs() < 1e-4);
    }

    #[test]
    fn test_ecef_equator_prime_meridian() {
        let p = to_ecef(&Ellipsoid::WGS84, 0.0, 0.0, 0.0);
        assert!((p[0] - 6_378_137.0).abs() < 1e-6);
        assert!(p[1].abs() < 1e-6);
        assert!(p[2].abs() < 1e-6);
    }

    #[test]
    fn test_helmert_invert_undoes_apply() {
        let h = Helmert::PRS92_TO_WGS84;
        let p = [-3_184_000.0, 5_280_000.0, 1_600_000.0];
        let back = h.invert(h.apply(p));
        for i in 0..3 {
            assert!((back[i] - p[i]).abs() < 1e-6);
        }
    }

    #[test]
    fn test_helmert_moves_points_by_about_the_translation() {
        let h = Helmert::PRS92_TO_WGS84;
        let p = to_ecef(&Ellipsoid::CLARKE_1866, 121.0, 14.0, 0.0);
        let q = h.apply(p);
        let shift = ((q[0] - p[0]).powi(2) + (q[1] - p[1]).powi(2) + (q[2] - p[2]).powi(2)).sqrt();
        assert!(shift > 100.0 && shift < 400.0, "shift {shift}");
    }
}
