//! Grid to geodetic conversion: the footpoint iteration followed by the
//! correction series, plus the forward projection.

mod batch;
mod curvature;
mod footpoint;
mod project;
mod series;

pub use batch::convert_all;
pub use batch::par_convert_all;
pub use curvature::CurvatureParameters;
pub use footpoint::FootpointSolver;
pub use footpoint::FootpointStep;
pub use footpoint::FootpointSteps;
pub use footpoint::DEFAULT_MAX_ITERATIONS;
pub use footpoint::DEFAULT_TOLERANCE;
pub use project::project;
pub use series::SeriesCorrector;

use crate::internal::*;

/// Convert `coordinate` on the grid given by `ellipsoid` and `origin` to
/// latitude and longitude on the same ellipsoid, using the default
/// [`FootpointSolver`].
///
/// Pure and deterministic: the same input always gives the same output,
/// bit for bit. The only failure mode is [`Error::Convergence`].
pub fn convert(
    ellipsoid: &Ellipsoid,
    origin: &GridOrigin,
    coordinate: &GridCoordinate,
) -> Result<GeodeticCoordinate, Error> {
    convert_with(ellipsoid, origin, coordinate, &FootpointSolver::default())
}

/// As [`convert`], with an explicitly configured footpoint solver
pub fn convert_with(
    ellipsoid: &Ellipsoid,
    origin: &GridOrigin,
    coordinate: &GridCoordinate,
    solver: &FootpointSolver,
) -> Result<GeodeticCoordinate, Error> {
    let footpoint = solver.solve(ellipsoid, origin, coordinate.northing)?;
    let curvature = CurvatureParameters::at(ellipsoid, origin.scale_factor(), footpoint);
    let series = SeriesCorrector::new(footpoint, &curvature);

    let de = coordinate.easting - origin.easting();
    let latitude = series.latitude(de);
    let longitude = series.longitude(origin.longitude_radians(), de);
    Ok(GeodeticCoordinate::from_radians(latitude, longitude))
}

// ----- Tests ---------------------------------------------------------------------
