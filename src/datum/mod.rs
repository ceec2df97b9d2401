//! Shifting geodetic coordinates between the regional ellipsoid of a grid
//! and the global WGS84 ellipsoid, by way of geocentric cartesian coordinates.

mod helmert;

pub use helmert::Helmert;

use crate::internal::*;

/// `towgs84` parameters for OSGB36, as published by the Ordnance Survey
pub const OSGB36_TOWGS84: [f64; 7] = [446.448, -125.157, 542.06, 0.15, 0.247, 0.842, -20.489];

/// `towgs84` parameters for the Ireland 1965 datum of the Irish Grid
pub const IRELAND_1965_TOWGS84: [f64; 7] = [482.5, -130.6, 564.6, -1.042, -0.214, -0.631, 8.15];

/// A datum shift from geodetic coordinates on `source` to geodetic coordinates
/// on `target`: geographic to cartesian on the source ellipsoid, a Helmert
/// transformation, and cartesian to geographic on the target ellipsoid.
///
/// Points are taken to lie on the source ellipsoid, i.e. at zero height. On the
/// target ellipsoid they are generally not (the OS worked example ends up 44.7 m
/// above WGS84), so `inv` first recovers the target height that corresponds to
/// zero source height. Otherwise the roundtrip would be off by about a millimetre.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DatumShift {
    source: Ellipsoid,
    target: Ellipsoid,
    helmert: Helmert,
}

impl DatumShift {
    #[must_use]
    pub fn new(source: Ellipsoid, target: Ellipsoid, helmert: Helmert) -> DatumShift {
        DatumShift {
            source,
            target,
            helmert,
        }
    }

    /// Shift from `source` to WGS84, given PROJ style `towgs84` parameters
    pub fn towgs84(source: Ellipsoid, parameters: &[f64]) -> Result<DatumShift, Error> {
        let target = Ellipsoid::named("WGS84")?;
        Ok(DatumShift::new(source, target, Helmert::towgs84(parameters)?))
    }

    /// Predefined datum shifts to WGS84: `osgb36`, `ireland_1965`, and
    /// `etrs89` (which coincides with WGS84 at the metre level)
    pub fn named(name: &str) -> Result<DatumShift, Error> {
        match name {
            "osgb36" => DatumShift::towgs84(Ellipsoid::named("airy")?, &OSGB36_TOWGS84),
            "ireland_1965" => {
                DatumShift::towgs84(Ellipsoid::named("mod_airy")?, &IRELAND_1965_TOWGS84)
            }
            "etrs89" => DatumShift::towgs84(Ellipsoid::named("GRS80")?, &[0., 0., 0.]),
            _ => Err(Error::NotFound(format!("datum shift '{name}'"))),
        }
    }

    #[must_use]
    pub fn source(&self) -> &Ellipsoid {
        &self.source
    }

    #[must_use]
    pub fn target(&self) -> &Ellipsoid {
        &self.target
    }

    #[must_use]
    pub fn helmert(&self) -> &Helmert {
        &self.helmert
    }

    /// The same shift, but from another source ellipsoid
    #[must_use]
    pub fn with_source(&self, source: Ellipsoid) -> DatumShift {
        DatumShift::new(source, self.target, self.helmert)
    }

    /// From the source ellipsoid to the target ellipsoid
    #[must_use]
    pub fn fwd(&self, geodetic: &GeodeticCoordinate) -> GeodeticCoordinate {
        let (lat, lon) = geodetic.to_radians();
        let cartesian = self.source.cartesian(lat, lon, 0.);
        let shifted = self.helmert.fwd(&cartesian);
        let (lat, lon, _) = self.target.geographic(&shifted);
        GeodeticCoordinate::from_radians(lat, lon)
    }

    /// From the target ellipsoid back to the source ellipsoid
    #[must_use]
    pub fn inv(&self, geodetic: &GeodeticCoordinate) -> GeodeticCoordinate {
        let (lat, lon) = geodetic.to_radians();

        // The source height is nearly linear in the target height, with a slope
        // close to 1, so two corrections bring it from tens of metres to nanometres
        let mut height = 0.;
        let mut source = (lat, lon, 0.);
        for _ in 0..3 {
            let cartesian = self.target.cartesian(lat, lon, height);
            source = self.source.geographic(&self.helmert.inv(&cartesian));
            height -= source.2;
        }
        trace!("target height {height:.3} m, residual {:.1e} m", source.2);
        GeodeticCoordinate::from_radians(source.0, source.1)
    }

    #[must_use]
    pub fn apply(&self, geodetic: &GeodeticCoordinate, direction: Direction) -> GeodeticCoordinate {
        match direction {
            Fwd => self.fwd(geodetic),
            Inv => self.inv(geodetic),
        }
    }
}

// ----- T E S T S ------------------------------------------------------------------
