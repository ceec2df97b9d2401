use crate::internal::*;
use std::f64::consts::FRAC_PI_2;

/// Default convergence tolerance for the footpoint iteration, in metres
pub const DEFAULT_TOLERANCE: f64 = 1e-5;

/// Default upper bound on the number of footpoint iterations
pub const DEFAULT_MAX_ITERATIONS: usize = 20;

/// The fixed point iteration for the *footpoint latitude*, *φ'*: the latitude
/// at which the scaled meridional arc from the true origin equals the northing
/// offset of the grid coordinate.
///
/// Each step updates the latitude by `residual / (a F0)`, where the residual
/// is the northing offset minus the meridional arc at the current estimate.
/// The iteration contracts by a factor of order *e²* per step, so a handful of
/// steps reach the default tolerance of 0.01 mm anywhere within a national grid.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootpointSolver {
    tolerance: f64,
    max_iterations: usize,
}

impl Default for FootpointSolver {
    fn default() -> FootpointSolver {
        FootpointSolver {
            tolerance: DEFAULT_TOLERANCE,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }
}

/// A single step of the footpoint iteration: the updated latitude estimate
/// (radians), and the signed residual (metres) that led to it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FootpointStep {
    pub latitude: f64,
    pub residual: f64,
}

/// The (unbounded) sequence of footpoint iteration steps.
/// See [`FootpointSolver::steps`].
pub struct FootpointSteps<'a> {
    ellipsoid: &'a Ellipsoid,
    origin: &'a GridOrigin,
    offset: f64,
    latitude: f64,
    arc: f64,
}

impl Iterator for FootpointSteps<'_> {
    type Item = FootpointStep;

    fn next(&mut self) -> Option<FootpointStep> {
        let f0 = self.origin.scale_factor();
        let residual = self.offset - self.arc;
        self.latitude += residual / (self.ellipsoid.semimajor_axis() * f0);
        self.arc = self
            .ellipsoid
            .meridional_arc(self.latitude, self.origin.latitude_radians(), f0);
        Some(FootpointStep {
            latitude: self.latitude,
            residual: self.offset - self.arc,
        })
    }
}

impl FootpointSolver {
    #[must_use]
    pub fn new(tolerance: f64, max_iterations: usize) -> FootpointSolver {
        FootpointSolver {
            tolerance,
            max_iterations,
        }
    }

    #[must_use]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[must_use]
    pub fn max_iterations(&self) -> usize {
        self.max_iterations
    }

    /// The iteration steps for `northing`, starting from the latitude of the
    /// true origin. The sequence never ends by itself: bound it with `take`.
    /// The residual reported with each step is the one remaining *after*
    /// the step.
    #[must_use]
    pub fn steps<'a>(
        &self,
        ellipsoid: &'a Ellipsoid,
        origin: &'a GridOrigin,
        northing: f64,
    ) -> FootpointSteps<'a> {
        FootpointSteps {
            ellipsoid,
            origin,
            offset: northing - origin.northing(),
            latitude: origin.latitude_radians(),
            arc: 0.,
        }
    }

    /// The footpoint latitude (radians) of `northing`.
    ///
    /// A northing within the tolerance of the false northing returns the
    /// latitude of the true origin with no iterations at all. Fails with
    /// [`Error::Convergence`] if the residual is still above tolerance after
    /// `max_iterations` steps, or as soon as an estimate leaves the domain
    /// of latitudes (non-finite, or beyond a pole).
    pub fn solve(
        &self,
        ellipsoid: &Ellipsoid,
        origin: &GridOrigin,
        northing: f64,
    ) -> Result<f64, Error> {
        let offset = northing - origin.northing();
        if offset.abs() < self.tolerance {
            return Ok(origin.latitude_radians());
        }

        let mut iterations = 0;
        let mut residual = offset.abs();
        for step in self.steps(ellipsoid, origin, northing).take(self.max_iterations) {
            iterations += 1;
            residual = step.residual.abs();
            trace!(
                "footpoint iteration {iterations}: latitude {:.12}, residual {residual:e}",
                step.latitude
            );

            if step.latitude.is_nan() || step.latitude.abs() > FRAC_PI_2 {
                warn!("Footpoint latitude for northing {northing} left the domain after {iterations} iterations");
                return Err(Error::Convergence {
                    northing,
                    iterations,
                    residual,
                });
            }

            if residual < self.tolerance {
                return Ok(step.latitude);
            }
        }

        warn!("Footpoint latitude for northing {northing} did not converge in {iterations} iterations");
        Err(Error::Convergence {
            northing,
            iterations,
            residual,
        })
    }
}

// ----- Tests ---------------------------------------------------------------------
