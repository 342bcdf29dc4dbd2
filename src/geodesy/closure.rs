//! Traverse closure analysis.
//!
//! A surveyed parcel should end where it began. The misclosure, and its
//! ratio to the perimeter ("1 in 5 000"), are the usual checks that a
//! technical description was transcribed correctly.

use super::Vertex;
use geo::orient::{Direction, Orient};
use geo::{GeodesicArea, GeodesicDistance, LineString, Point, Polygon};
use serde::{Deserialize, Serialize};

/// Closure figures for a traversed boundary.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClosureReport {
    /// Distance from the last vertex back to the point of beginning, meters
    pub misclosure_m: f64,
    /// Length of the traversed path, meters
    pub perimeter_m: f64,
    /// Enclosed geodesic area, square meters
    pub area_m2: f64,
    /// Perimeter over misclosure, `None` for an exact closure
    pub relative_precision: Option<f64>,
}

impl ClosureReport {
    /// Analyse a traverse that starts at `start` (the point of beginning)
    /// and visits `vertices` in order.
    ///
    /// When the traversal began at a tie point, pass the first vertex as
    /// `start` and the remaining vertices.
    pub fn compute(start: Vertex, vertices: &[Vertex]) -> Self {
        let points: Vec<Point<f64>> = std::iter::once(start)
            .chain(vertices.iter().copied())
            .map(Point::from)
            .collect();

        let perimeter_m = points
            .windows(2)
            .map(|pair| pair[0].geodesic_distance(&pair[1]))
            .sum::<f64>();

        let misclosure_m = points
            .last()
            .map_or(0.0, |last| last.geodesic_distance(&points[0]));

        let area_m2 = if points.len() >= 3 {
            // Descriptions usually run clockwise; the area routine expects a
            // counter-clockwise exterior.
            let ring: LineString<f64> = points.iter().map(|p| p.0).collect();
            Polygon::new(ring, vec![])
                .orient(Direction::Default)
                .geodesic_area_unsigned()
        } else {
            0.0
        };

        let relative_precision = (misclosure_m > 0.0).then(|| perimeter_m / misclosure_m);

        log::debug!(
            "closure: misclosure {:.3} m over {:.3} m, area {:.2} m2",
            misclosure_m,
            perimeter_m,
            area_m2
        );

        Self {
            misclosure_m,
            perimeter_m,
            area_m2,
            relative_precision,
        }
    }

    /// Whether the misclosure is within `tolerance_m`.
    pub fn is_closed(&self, tolerance_m: f64) -> bool {
        self.misclosure_m <= tolerance_m
    }
}
