use crate::internal::*;

/// The radii of curvature at a given latitude, scaled to the grid, and the
/// squared second eccentricity term *η²* of the transverse mercator formulae.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CurvatureParameters {
    /// Scaled radius of curvature in the prime vertical, *ν*
    pub nu: f64,
    /// Scaled meridian radius of curvature, *ρ*
    pub rho: f64,
    /// *η² = ν/ρ - 1*
    pub eta_squared: f64,
}

impl CurvatureParameters {
    /// Evaluate at `latitude` (radians). Defined for all latitudes: the
    /// denominators `1 - e² sin²φ` are positive for any ellipsoid with `e² < 1`.
    #[must_use]
    pub fn at(ellipsoid: &Ellipsoid, scale_factor: f64, latitude: f64) -> CurvatureParameters {
        let nu = scale_factor * ellipsoid.prime_vertical_radius_of_curvature(latitude);
        let rho = scale_factor * ellipsoid.meridian_radius_of_curvature(latitude);
        CurvatureParameters {
            nu,
            rho,
            eta_squared: nu / rho - 1.,
        }
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn curvature_at_the_os_footpoint() -> Result<(), Error> {
        let airy = Ellipsoid::named("airy")?;
        let c = CurvatureParameters::at(&airy, 0.9996012717, 0.9200662095411078);
        assert_float_eq!(c.nu, 6388523.342112784, abs <= 1e-6);
        assert_float_eq!(c.rho, 6372819.309263136, abs <= 1e-6);
        assert_float_eq!(c.eta_squared, 0.0024642206357272656, abs <= 1e-12);
        Ok(())
    }

    #[test]
    fn eta_squared_is_second_eccentricity_at_the_equator() -> Result<(), Error> {
        let grs80 = Ellipsoid::named("GRS80")?;
        let c = CurvatureParameters::at(&grs80, 0.9996, 0.);
        assert!((c.eta_squared - grs80.second_eccentricity_squared()).abs() < 1e-14);

        // ... and vanishes at the poles
        let c = CurvatureParameters::at(&grs80, 0.9996, 90_f64.to_radians());
        assert!(c.eta_squared.abs() < 1e-14);
        assert!((c.nu - c.rho).abs() < 1e-6);
        Ok(())
    }
}
