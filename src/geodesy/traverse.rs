//! Chained boundary traversal.

use super::{ForwardSolver, KarneySolver, Leg, Vertex};
use crate::bearing::{BoundaryCall, SecondsPolicy};
use crate::error::{Error, Result};

/// Walks boundary legs from a starting point.
///
/// Each leg starts where the previous one ended. No closure check is made;
/// see [`ClosureReport`](super::ClosureReport).
#[derive(Debug, Clone)]
pub struct Traversal<S = KarneySolver> {
    solver: S,
}

impl Default for Traversal<KarneySolver> {
    fn default() -> Self {
        Self::new(KarneySolver)
    }
}

impl<S: ForwardSolver> Traversal<S> {
    /// Create a traversal with a specific solver.
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    /// The underlying solver.
    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Run the legs from `start`. Returns one vertex per leg, in order.
    pub fn run(&self, start: Vertex, legs: &[Leg]) -> Result<Vec<Vertex>> {
        if !start.is_valid() {
            return Err(Error::InvalidCoordinate {
                lon: start.lon,
                lat: start.lat,
            });
        }

        let mut vertices = Vec::with_capacity(legs.len());
        let mut current = start;
        for (index, leg) in legs.iter().enumerate() {
            validate_leg(index, leg)?;
            current = self.solver.direct(current, leg.azimuth_deg, leg.distance_m);
            log::trace!(
                "leg {}: az {:.6} dist {:.3} -> ({:.9}, {:.9})",
                index,
                leg.azimuth_deg,
                leg.distance_m,
                current.lon,
                current.lat
            );
            vertices.push(current);
        }

        log::debug!("traversed {} legs from ({}, {})", legs.len(), start.lon, start.lat);
        Ok(vertices)
    }

    /// Convert boundary calls to azimuth legs, then run them.
    ///
    /// Fails with `MissingEastWest` before any leg is solved if a call has
    /// no E/W letter.
    pub fn run_calls(
        &self,
        start: Vertex,
        calls: &[BoundaryCall],
        seconds_policy: SecondsPolicy,
    ) -> Result<Vec<Vertex>> {
        let legs = calls
            .iter()
            .map(|call| Ok(Leg::new(call.azimuth(seconds_policy)?, call.distance_m)))
            .collect::<Result<Vec<_>>>()?;
        self.run(start, &legs)
    }
}

fn validate_leg(index: usize, leg: &Leg) -> Result<()> {
    if !leg.azimuth_deg.is_finite() {
        return Err(Error::InvalidLeg {
            index,
            reason: format!("azimuth is not finite ({})", leg.azimuth_deg),
        });
    }
    if !leg.distance_m.is_finite() || leg.distance_m < 0.0 {
        return Err(Error::InvalidLeg {
            index,
            reason: format!("distance must be finite and non-negative ({})", leg.distance_m),
        });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bearing::{Bearing, EastWest, NorthSouth};
    use crate::geodesy::VincentySolver;

    #[test]
    fn test_one_vertex_per_leg() {
        let legs = [Leg::new(0.0, 10.0), Leg::new(90.0, 10.0), Leg::new(180.0, 10.0)];
        let vertices = Traversal::new(KarneySolver).run(Vertex::new(121.0, 14.0), &legs).unwrap();
        assert_eq!(vertices.len(), 3);
        assert!(vertices[0].lat > 14.0);
        assert!(vertices[1].lon > 121.0);
    }

    #[test]
    fn test_empty_legs() {
        let vertices = Traversal::new(KarneySolver).run(Vertex::new(0.0, 0.0), &[]).unwrap();
        assert!(vertices.is_empty());
    }

    #[test]
    fn test_rectangle_closes() {
        let legs = [
            Leg::new(90.0, 100.0),
            Leg::new(180.0, 50.0),
            Leg::new(270.0, 100.0),
            Leg::new(0.0, 50.0),
        ];
        let start = Vertex::new(121.0, 14.0);
        let vertices = Traversal::new(VincentySolver::default()).run(start, &legs).unwrap();
        let last = vertices[3];
        assert!((last.lon - start.lon).abs() < 1e-5);
        assert!((last.lat - start.lat).abs() < 1e-5);
    }

    #[test]
    fn test_invalid_start() {
        let err = Traversal::new(KarneySolver)
            .run(Vertex::new(0.0, 91.0), &[Leg::new(0.0, 1.0)])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidCoordinate { .. }));
    }

    #[test]
    fn test_invalid_legs() {
        let start = Vertex::new(0.0, 0.0);
        let err = Traversal::new(KarneySolver)
            .run(start, &[Leg::new(0.0, 1.0), Leg::new(f64::NAN, 1.0)])
            .unwrap_err();
        assert!(matches!(err, Error::InvalidLeg { index: 1, .. }));

        let err = Traversal::new(KarneySolver).run(start, &[Leg::new(0.0, -5.0)]).unwrap_err();
        assert!(matches!(err, Error::InvalidLeg { index: 0, .. }));
    }

    #[test]
    fn test_run_calls_converts_bearings() {
        let calls = [BoundaryCall::new(
            Bearing::new(NorthSouth::North, 90, 0, EastWest::East),
            111_319.49,
            "N 90 00 E 111,319.49 m",
        )];
        let vertices = Traversal::new(KarneySolver)
            .run_calls(Vertex::new(0.0, 0.0), &calls, SecondsPolicy::Fold)
            .unwrap();
        assert!((vertices[0].lon - 1.0).abs() < 1e-3);
    }

    #[test]
    fn test_run_calls_missing_east_west() {
        let mut bearing = Bearing::new(NorthSouth::South, 10, 0, EastWest::West);
        bearing.east_west = None;
        let calls = [BoundaryCall::new(bearing, 10.0, "S 10 00 10 m")];
        let err = Traversal::new(KarneySolver)
            .run_calls(Vertex::new(0.0, 0.0), &calls, SecondsPolicy::Fold)
            .unwrap_err();
        assert!(matches!(err, Error::MissingEastWest { .. }));
    }
}
