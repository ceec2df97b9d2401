use super::{convert_with, FootpointSolver};
use crate::internal::*;
use rayon::prelude::*;

/// Convert a batch of grid coordinates, one result per input, in input order.
/// A failure for one coordinate does not affect the others.
pub fn convert_all(
    ellipsoid: &Ellipsoid,
    origin: &GridOrigin,
    solver: &FootpointSolver,
    coordinates: &[GridCoordinate],
) -> Vec<Result<GeodeticCoordinate, Error>> {
    coordinates
        .iter()
        .map(|coord| convert_with(ellipsoid, origin, coord, solver))
        .collect()
}

/// As [`convert_all`], but spread over the rayon thread pool. The conversions
/// share no mutable state, so the results are identical to those of
/// [`convert_all`], bit for bit, and in the same order.
pub fn par_convert_all(
    ellipsoid: &Ellipsoid,
    origin: &GridOrigin,
    solver: &FootpointSolver,
    coordinates: &[GridCoordinate],
) -> Vec<Result<GeodeticCoordinate, Error>> {
    coordinates
        .par_iter()
        .map(|coord| convert_with(ellipsoid, origin, coord, solver))
        .collect()
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parallel_matches_sequential() -> Result<(), Error> {
        let airy = Ellipsoid::named("airy")?;
        let origin = GridOrigin::new(400000., -100000., 49., -2., 0.9996012717)?;
        let solver = FootpointSolver::default();

        let mut coordinates = Vec::new();
        for i in 0..50 {
            for j in 0..50 {
                let e = 10000. + 13000. * i as f64;
                let n = 10000. + 24000. * j as f64;
                coordinates.push(GridCoordinate::new(e, n));
            }
        }
        coordinates.push(GridCoordinate::new(400000., 1e12));

        let sequential = convert_all(&airy, &origin, &solver, &coordinates);
        let parallel = par_convert_all(&airy, &origin, &solver, &coordinates);
        assert_eq!(sequential.len(), coordinates.len());
        assert_eq!(sequential, parallel);

        // The failure is isolated to the offending coordinate
        assert!(sequential[..2500].iter().all(|r| r.is_ok()));
        assert!(matches!(sequential[2500], Err(Error::Convergence { .. })));
        Ok(())
    }
}
