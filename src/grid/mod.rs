//! Grid systems: an ellipsoid, a true origin, and (optionally) the datum
//! shift taking the grid's geodetic coordinates to WGS84.

mod definition;
mod presets;

use crate::datum::DatumShift;
use crate::internal::*;
use crate::transform::{self, FootpointSolver};

/// The defining constants of a transverse mercator grid: the grid coordinates
/// of the true origin, the geodetic coordinates of the true origin, and the
/// scale factor on the central meridian, *F0*.
///
/// Angles are given and returned in degrees, but kept in radians.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GridOrigin {
    easting: f64,
    northing: f64,
    latitude: f64,
    longitude: f64,
    scale_factor: f64,
}

impl GridOrigin {
    /// False easting and northing in metres, latitude and longitude of the
    /// true origin in degrees. Fails with [`Error::BadParam`] unless all
    /// values are finite, the latitude is within ±90°, and the scale
    /// factor is positive.
    pub fn new(
        easting: f64,
        northing: f64,
        latitude: f64,
        longitude: f64,
        scale_factor: f64,
    ) -> Result<GridOrigin, Error> {
        let checks = [
            ("x_0", easting, easting.is_finite()),
            ("y_0", northing, northing.is_finite()),
            ("lat_0", latitude, latitude.is_finite() && latitude.abs() <= 90.),
            ("lon_0", longitude, longitude.is_finite()),
            ("k_0", scale_factor, scale_factor.is_finite() && scale_factor > 0.),
        ];
        for (key, value, valid) in checks {
            if !valid {
                warn!("Invalid grid origin parameter {key}={value}");
                return Err(Error::BadParam(key.to_string(), value.to_string()));
            }
        }

        Ok(GridOrigin {
            easting,
            northing,
            latitude: latitude.to_radians(),
            longitude: longitude.to_radians(),
            scale_factor,
        })
    }

    /// False easting, *E0*, in metres
    #[must_use]
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// False northing, *N0*, in metres
    #[must_use]
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Latitude of the true origin, *φ0*, in degrees
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.latitude.to_degrees()
    }

    /// Longitude of the true origin (the central meridian), *λ0*, in degrees
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.longitude.to_degrees()
    }

    #[must_use]
    pub fn latitude_radians(&self) -> f64 {
        self.latitude
    }

    #[must_use]
    pub fn longitude_radians(&self) -> f64 {
        self.longitude
    }

    /// Scale factor on the central meridian, *F0*
    #[must_use]
    pub fn scale_factor(&self) -> f64 {
        self.scale_factor
    }
}

// ----- G R I D   S Y S T E M -------------------------------------------------

/// A named, fully specified grid: what is needed to go from grid coordinates
/// to geodetic coordinates on the grid's own ellipsoid and, if a datum shift
/// is given, onwards to WGS84.
#[derive(Clone, Debug, PartialEq)]
pub struct GridSystem {
    name: String,
    ellipsoid: Ellipsoid,
    origin: GridOrigin,
    datum_shift: Option<DatumShift>,
    solver: FootpointSolver,
}

impl GridSystem {
    #[must_use]
    pub fn new(name: &str, ellipsoid: Ellipsoid, origin: GridOrigin) -> GridSystem {
        debug!("Grid system '{name}': {ellipsoid:?}, {origin:?}");
        GridSystem {
            name: name.to_string(),
            ellipsoid,
            origin,
            datum_shift: None,
            solver: FootpointSolver::default(),
        }
    }

    /// One of the predefined grid systems: `osgb36` (also known as `bng` and
    /// `british_national_grid`), `irish_grid` and `itm`
    pub fn named(name: &str) -> Result<GridSystem, Error> {
        presets::named(name)
    }

    /// Universal Transverse Mercator, zone `zone` (1..=60), on WGS84
    pub fn utm(zone: usize, south: bool) -> Result<GridSystem, Error> {
        presets::utm(zone, south)
    }

    /// A grid system from a textual definition, in the `key=value` style,
    /// e.g. `osgb36 k_0=1`, `utm zone=32` or
    /// `tmerc ellps=intl lat_0=0 lon_0=9 x_0=500000 k_0=0.9996`.
    /// The first word names a predefined grid system, `utm`, or `tmerc`.
    /// The parameters given override those of the named system.
    pub fn from_definition(definition: &str) -> Result<GridSystem, Error> {
        definition::parse(definition)
    }

    #[must_use]
    pub fn with_datum_shift(mut self, datum_shift: DatumShift) -> GridSystem {
        self.datum_shift = Some(datum_shift);
        self
    }

    #[must_use]
    pub fn with_solver(mut self, solver: FootpointSolver) -> GridSystem {
        self.solver = solver;
        self
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn ellipsoid(&self) -> &Ellipsoid {
        &self.ellipsoid
    }

    #[must_use]
    pub fn origin(&self) -> &GridOrigin {
        &self.origin
    }

    #[must_use]
    pub fn datum_shift(&self) -> Option<&DatumShift> {
        self.datum_shift.as_ref()
    }

    #[must_use]
    pub fn solver(&self) -> &FootpointSolver {
        &self.solver
    }

    // ----- Conversions -------------------------------------------------------

    /// Grid coordinates to geodetic coordinates on the grid's own ellipsoid
    pub fn to_geodetic(&self, coordinate: GridCoordinate) -> Result<GeodeticCoordinate, Error> {
        transform::convert_with(&self.ellipsoid, &self.origin, &coordinate, &self.solver)
    }

    /// Geodetic coordinates on the grid's own ellipsoid to grid coordinates
    #[must_use]
    pub fn to_grid(&self, geodetic: GeodeticCoordinate) -> GridCoordinate {
        transform::project(&self.ellipsoid, &self.origin, &geodetic)
    }

    /// Convert a batch of grid coordinates, optionally in parallel.
    /// The results are the same either way.
    #[must_use]
    pub fn to_geodetic_all(
        &self,
        coordinates: &[GridCoordinate],
        parallel: bool,
    ) -> Vec<Result<GeodeticCoordinate, Error>> {
        let (ellps, origin, solver) = (&self.ellipsoid, &self.origin, &self.solver);
        if parallel {
            return transform::par_convert_all(ellps, origin, solver, coordinates);
        }
        transform::convert_all(ellps, origin, solver, coordinates)
    }

    /// Grid coordinates to geodetic coordinates on WGS84. Fails with
    /// [`Error::MissingParam`] if the grid system has no datum shift.
    pub fn to_wgs84(&self, coordinate: GridCoordinate) -> Result<GeodeticCoordinate, Error> {
        let shift = self.required_datum_shift()?;
        Ok(shift.fwd(&self.to_geodetic(coordinate)?))
    }

    /// Geodetic coordinates on WGS84 to grid coordinates
    pub fn from_wgs84(&self, geodetic: GeodeticCoordinate) -> Result<GridCoordinate, Error> {
        let shift = self.required_datum_shift()?;
        Ok(self.to_grid(shift.inv(&geodetic)))
    }

    fn required_datum_shift(&self) -> Result<&DatumShift, Error> {
        self.datum_shift.as_ref().ok_or_else(|| {
            error!("Grid system '{}' has no datum shift to WGS84", self.name);
            Error::MissingParam("towgs84".to_string())
        })
    }
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn origin() -> Result<(), Error> {
        let origin = GridOrigin::new(400000., -100000., 49., -2., 0.9996012717)?;
        assert_eq!(origin.easting(), 400000.);
        assert_eq!(origin.northing(), -100000.);
        assert_eq!(origin.latitude_radians(), 49_f64.to_radians());
        assert_eq!(origin.longitude_radians(), -2_f64.to_radians());
        assert_float_eq!(origin.latitude(), 49., abs <= 1e-12);
        assert_float_eq!(origin.longitude(), -2., abs <= 1e-12);
        assert_eq!(origin.scale_factor(), 0.9996012717);

        assert!(GridOrigin::new(0., 0., 90., 0., 1.).is_ok());
        assert!(matches!(
            GridOrigin::new(0., 0., 91., 0., 1.),
            Err(Error::BadParam(key, _)) if key == "lat_0"
        ));
        assert!(matches!(
            GridOrigin::new(0., 0., 0., 0., 0.),
            Err(Error::BadParam(key, _)) if key == "k_0"
        ));
        assert!(GridOrigin::new(f64::NAN, 0., 0., 0., 1.).is_err());
        Ok(())
    }

    #[test]
    fn grid_system() -> Result<(), Error> {
        let bng = GridSystem::named("osgb36")?;
        assert_eq!(bng.name(), "osgb36");
        assert_eq!(*bng.ellipsoid(), Ellipsoid::named("airy")?);
        assert_eq!(bng.solver(), &FootpointSolver::default());

        let en = GridCoordinate::new(651409.903, 313177.270);
        let geo = bng.to_geodetic(en)?;
        assert_float_eq!(geo.latitude, 52.657570301933156, abs <= 1e-9);
        assert_float_eq!(geo.longitude, 1.7179215806450958, abs <= 1e-9);
        assert!(bng.to_grid(geo).distance(&en) < 1e-3);

        let wgs84 = bng.to_wgs84(en)?;
        assert_float_eq!(wgs84.latitude, 52.65797859580823, abs <= 1e-8);
        assert_float_eq!(wgs84.longitude, 1.7160519866025936, abs <= 1e-8);
        assert!(bng.from_wgs84(wgs84)?.distance(&en) < 1e-2);

        // The solver configuration is honoured
        let strict = bng.clone().with_solver(FootpointSolver::new(1e-5, 2));
        assert!(matches!(strict.to_geodetic(en), Err(Error::Convergence { .. })));

        // No datum shift, no WGS84
        let bare = GridSystem::new("bare", *bng.ellipsoid(), *bng.origin());
        assert!(bare.datum_shift().is_none());
        assert!(matches!(bare.to_wgs84(en), Err(Error::MissingParam(_))));
        assert_eq!(bare.to_geodetic(en)?, geo);
        Ok(())
    }

    #[test]
    fn batch() -> Result<(), Error> {
        let bng = GridSystem::named("bng")?;
        let coordinates = [
            GridCoordinate::new(651409.903, 313177.270),
            GridCoordinate::new(400000., 1e12),
            GridCoordinate::new(429157., 623009.),
        ];
        let sequential = bng.to_geodetic_all(&coordinates, false);
        let parallel = bng.to_geodetic_all(&coordinates, true);
        assert_eq!(sequential, parallel);
        assert!(sequential[0].is_ok());
        assert!(sequential[1].is_err());
        assert_eq!(sequential[2], bng.to_geodetic(coordinates[2]));
        Ok(())
    }
}
