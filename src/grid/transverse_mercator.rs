//! Transverse Mercator projection, Snyder's series (USGS PP 1395, §8).
//!
//! Accurate to well under a millimeter within a few degrees of the central
//! meridian, which covers the 2°-wide PRS92 zones.

use crate::geodesy::Ellipsoid;

/// Projection parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) struct TransverseMercator {
    pub ellipsoid: Ellipsoid,
    /// Latitude of origin, degrees
    pub lat0: f64,
    /// Central meridian, degrees
    pub lon0: f64,
    /// Scale factor on the central meridian
    pub k0: f64,
    pub false_easting: f64,
    pub false_northing: f64,
}

impl TransverseMercator {
    fn e2(&self) -> f64 {
        self.ellipsoid.e2()
    }

    fn ep2(&self) -> f64 {
        let e2 = self.e2();
        e2 / (1.0 - e2)
    }

    /// Meridian arc length from the equator to `phi` (radians).
    fn meridian_arc(&self, phi: f64) -> f64 {
        let e2 = self.e2();
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        self.ellipsoid.a
            * ((1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0) * phi
                - (3.0 * e2 / 8.0 + 3.0 * e4 / 32.0 + 45.0 * e6 / 1024.0) * (2.0 * phi).sin()
                + (15.0 * e4 / 256.0 + 45.0 * e6 / 1024.0) * (4.0 * phi).sin()
                - (35.0 * e6 / 3072.0) * (6.0 * phi).sin())
    }

    /// Geographic (degrees) to (easting, northing) meters.
    pub fn forward(&self, lon: f64, lat: f64) -> (f64, f64) {
        let e2 = self.e2();
        let ep2 = self.ep2();
        let phi = lat.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let tan_phi = phi.tan();

        let n = self.ellipsoid.a / (1.0 - e2 * sin_phi * sin_phi).sqrt();
        let t = tan_phi * tan_phi;
        let c = ep2 * cos_phi * cos_phi;
        let a = (lon - self.lon0).to_radians() * cos_phi;

        let a2 = a * a;
        let a3 = a2 * a;
        let a4 = a3 * a;
        let a5 = a4 * a;
        let a6 = a5 * a;

        let x = self.k0
            * n
            * (a + (1.0 - t + c) * a3 / 6.0
                + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * ep2) * a5 / 120.0);
        let y = self.k0
            * (self.meridian_arc(phi) - self.meridian_arc(self.lat0.to_radians())
                + n * tan_phi
                    * (a2 / 2.0
                        + (5.0 - t + 9.0 * c + 4.0 * c * c) * a4 / 24.0
                        + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * ep2) * a6 / 720.0));

        (self.false_easting + x, self.false_northing + y)
    }

    /// (easting, northing) meters to geographic (lon, lat) degrees.
    pub fn inverse(&self, easting: f64, northing: f64) -> (f64, f64) {
        let e2 = self.e2();
        let ep2 = self.ep2();
        let e4 = e2 * e2;
        let e6 = e4 * e2;
        let a = self.ellipsoid.a;

        let m = self.meridian_arc(self.lat0.to_radians()) + (northing - self.false_northing) / self.k0;
        let mu = m / (a * (1.0 - e2 / 4.0 - 3.0 * e4 / 64.0 - 5.0 * e6 / 256.0));
        let e1 = (1.0 - (1.0 - e2).sqrt()) / (1.0 + (1.0 - e2).sqrt());

        // footpoint latitude
        let phi1 = mu
            + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
            + (21.0 * e1 * e1 / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
            + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
            + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin();

        let (sin_phi1, cos_phi1) = phi1.sin_cos();
        let tan_phi1 = phi1.tan();
        let c1 = ep2 * cos_phi1 * cos_phi1;
        let t1 = tan_phi1 * tan_phi1;
        let w = 1.0 - e2 * sin_phi1 * sin_phi1;
        let n1 = a / w.sqrt();
        let r1 = a * (1.0 - e2) / w.powf(1.5);
        let d = (easting - self.false_easting) / (n1 * self.k0);

        let d2 = d * d;
        let d3 = d2 * d;
        let d4 = d3 * d;
        let d5 = d4 * d;
        let d6 = d5 * d;

        let phi = phi1
            - (n1 * tan_phi1 / r1)
                * (d2 / 2.0
                    - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * ep2) * d4 / 24.0
                    + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * ep2 - 3.0 * c1 * c1)
                        * d6
                        / 720.0);
        let lambda = (d - (1.0 + 2.0 * t1 + c1) * d3 / 6.0
            + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * ep2 + 24.0 * t1 * t1) * d5 / 120.0)
            / cos_phi1;

        (self.lon0 + lambda.to_degrees(), phi.to_degrees())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn zone_three() -> TransverseMercator {
        TransverseMercator {
            ellipsoid: Ellipsoid::CLARKE_1866,
            lat0: 4.0,
            lon0: 121.0,
            k0: 0.99995,
            false_easting: 500_000.0,
            false_northing: 0.0,
        }
    }

    #[test]
    fn test_origin_maps_to_false_origin() {
        let (e, n) = zone_three().forward(121.0, 4.0);
        assert!((e - 500_000.0).abs() < 1e-9);
        assert!(n.abs() < 1e-9);
    }

    #[test]
    fn test_central_meridian_northing() {
        let (e, n) = zone_three().forward(121.0, 14.0);
        assert!((e - 500_000.0).abs() < 1e-9);
        assert!((n - 1_105_918.6736).abs() < 1e-3);
    }

    #[test]
    fn test_round_trip() {
        let tm = zone_three();
        for (lon, lat) in [(120.1, 5.0), (121.5, 14.6), (121.99, 18.5), (120.0, 12.0)] {
            let (e, n) = tm.forward(lon, lat);
            let (lon2, lat2) = tm.inverse(e, n);
            assert!((lon2 - lon).abs() < 1e-8, "lon {lon} -> {lon2}");
            assert!((lat2 - lat).abs() < 1e-8, "lat {lat} -> {lat2}");
        }
    }

    #[test]
    fn test_east_of_meridian_has_larger_easting() {
        let (e, _) = zone_three().forward(121.5, 10.0);
        assert!(e > 500_000.0);
        let (e, _) = zone_three().forward(120.5, 10.0);
        assert!(e < 500_000.0);
    }
}
