//! *Conversion of national grid coordinates to geographical coordinates*.
//!
//! Natgrid
//! =======
//!
//! Many national mapping agencies publish their coordinates as Easting/Northing
//! on a Transverse Mercator grid, defined on a regional ellipsoid. The classic
//! example is the British National Grid on the Airy 1830 ellipsoid.
//!
//! This crate converts such grid coordinates to latitude/longitude, following
//! the Redfearn series as published by the Ordnance Survey
//! ([OS 2020](crate::Bibliography::Ord20)):
//!
//! 1. derive the shape parameters of the ellipsoid ([`Ellipsoid`]),
//! 2. iterate to the *footpoint latitude* ([`FootpointSolver`]),
//! 3. apply the latitude and longitude correction series ([`SeriesCorrector`]).
//!
//! The forward direction ([`project`]) and a Helmert shift to the global WGS84
//! ellipsoid ([`DatumShift`]) are provided as well.
//!
//! ```
//! use natgrid::prelude::*;
//! let bng = GridSystem::named("osgb36")?;
//! let geo = bng.to_geodetic(GridCoordinate::new(651409.903, 313177.270))?;
//! assert!((geo.latitude - 52.657570306).abs() < 1e-7);
//! assert!((geo.longitude - 1.717921583).abs() < 1e-7);
//! # Ok::<(), natgrid::Error>(())
//! ```

mod coordinate;
mod datum;
mod ellipsoid;
mod grid;
pub mod math;
mod transform;

pub use crate::coordinate::GeodeticCoordinate;
pub use crate::coordinate::GridCoordinate;
pub use crate::datum::DatumShift;
pub use crate::datum::Helmert;
pub use crate::ellipsoid::Ellipsoid;
pub use crate::grid::GridOrigin;
pub use crate::grid::GridSystem;
pub use crate::transform::convert;
pub use crate::transform::convert_all;
pub use crate::transform::convert_with;
pub use crate::transform::par_convert_all;
pub use crate::transform::project;
pub use crate::transform::CurvatureParameters;
pub use crate::transform::FootpointSolver;
pub use crate::transform::FootpointStep;
pub use crate::transform::FootpointSteps;
pub use crate::transform::DEFAULT_MAX_ITERATIONS;
pub use crate::transform::DEFAULT_TOLERANCE;
pub use crate::transform::SeriesCorrector;

/// Preamble for application code
pub mod prelude {
    pub use crate::convert;
    pub use crate::project;
    pub use crate::DatumShift;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::FootpointSolver;
    pub use crate::GeodeticCoordinate;
    pub use crate::GridCoordinate;
    pub use crate::GridOrigin;
    pub use crate::GridSystem;
}

/// Preamble for crate-internal modules
pub(crate) mod internal {
    pub use log::debug;
    pub use log::error;
    pub use log::trace;
    pub use log::warn;
    pub use std::collections::BTreeMap;

    pub use crate::math::angular;
    pub use crate::math::horner;
    pub use crate::Direction;
    pub use crate::Direction::Fwd;
    pub use crate::Direction::Inv;
    pub use crate::Ellipsoid;
    pub use crate::Error;
    pub use crate::GeodeticCoordinate;
    pub use crate::GridCoordinate;
    pub use crate::GridOrigin;
}

use thiserror::Error;

/// The single error type of the crate.
///
/// `InvalidEllipsoid` and `Convergence` are the only failure modes of the
/// numerical transformation itself. The remaining variants belong to the
/// configuration layer (presets and textual grid definitions).
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error("invalid ellipsoid (a = {a}, b = {b}): expected a > b > 0")]
    InvalidEllipsoid { a: f64, b: f64 },

    #[error("footpoint latitude did not converge for northing {northing} (after {iterations} iterations, residual {residual} m)")]
    Convergence {
        northing: f64,
        iterations: usize,
        residual: f64,
    },

    #[error("{0} not found")]
    NotFound(String),

    #[error("syntax error: {0}")]
    Syntax(String),

    #[error("missing required parameter {0}")]
    MissingParam(String),

    #[error("malformed value for parameter {0}: {1}")]
    BadParam(String, String),
}

/// `Fwd`: Indicate that a two-way operation should run in the *forward* direction.
/// `Inv`: Indicate that a two-way operation should run in the *inverse* direction.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Direction {
    Fwd,
    Inv,
}

/// Literature, that has been useful in designing and implementing this library.
pub enum Bibliography {
    /// B.R. Bowring (1976): *Transformation from spatial to geographical coordinates*.
    /// Survey Review 23(181), pp. 323–327.
    Bow76,

    /// B.R. Bowring (1985): *The accuracy of geodetic latitude and height equations*.
    /// Survey Review, 28(218), pp.202-206,
    /// [DOI](https://doi.org/10.1179/sre.1985.28.218.202)
    Bow85,

    /// Toshio Fukushima (1999): *Fast transform from geocentric to geodetic coordinates*.
    /// Journal of Geodesy, 73(11), pp.603–610
    /// [DOI](https://doi.org/10.1007/s001900050271)
    Fuk99,

    /// Ordnance Survey (2020): *A Guide to Coordinate Systems in Great Britain*.
    /// Version 3.6. Appendix C: *Transverse Mercator map projection formulae*.
    /// [pdf](https://www.ordnancesurvey.co.uk/documents/resources/guide-coordinate-systems-great-britain.pdf)
    Ord20,

    /// J.C.B. Redfearn (1948): *Transverse Mercator formulae*.
    /// Empire Survey Review, 9(69), pp.318-322,
    /// [DOI](https://doi.org/10.1179/sre.1948.9.69.318)
    Red48,
}
