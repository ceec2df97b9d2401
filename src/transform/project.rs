use super::CurvatureParameters;
use crate::internal::*;

/// Geodetic to grid coordinates: the forward Redfearn series,
/// [OS 2020](crate::Bibliography::Ord20) eqs. (C4) - (C7).
///
/// Accurate to about a millimetre within a few hundred kilometres of the
/// central meridian, which makes it the inverse of [`convert`](super::convert)
/// to the same level. Undefined at the poles (the series involve *tan φ*).
#[must_use]
#[allow(non_snake_case)]
pub fn project(
    ellipsoid: &Ellipsoid,
    origin: &GridOrigin,
    geodetic: &GeodeticCoordinate,
) -> GridCoordinate {
    let (lat, lon) = geodetic.to_radians();
    let f0 = origin.scale_factor();
    let CurvatureParameters {
        nu,
        rho,
        eta_squared,
    } = CurvatureParameters::at(ellipsoid, f0, lat);

    let (s, c) = lat.sin_cos();
    let t2 = lat.tan().powi(2);
    let c3 = c.powi(3);
    let c5 = c.powi(5);

    let I = ellipsoid.meridional_arc(lat, origin.latitude_radians(), f0) + origin.northing();
    let II = nu / 2. * s * c;
    let III = nu / 24. * s * c3 * (5. - t2 + 9. * eta_squared);
    let IIIA = nu / 720. * s * c5 * horner(t2, &[61., -58., 1.]);
    let IV = nu * c;
    let V = nu / 6. * c3 * (nu / rho - t2);
    let VI = nu / 120. * c5 * (horner(t2, &[5., -18., 1.]) + eta_squared * (14. - 58. * t2));

    let p = angular::normalize_symmetric(lon - origin.longitude_radians());
    let p2 = p * p;

    let northing = horner(p2, &[I, II, III, IIIA]);
    let easting = origin.easting() + p * horner(p2, &[IV, V, VI]);
    GridCoordinate::new(easting, northing)
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn os_worked_example() -> Result<(), Error> {
        let airy = Ellipsoid::named("airy")?;
        let origin = GridOrigin::new(400000., -100000., 49., -2., 0.9996012717)?;

        // 52°39′27.2531″N 1°43′4.5177″E
        let geo = GeodeticCoordinate::new(
            angular::dms_to_dd(52, 39, 27.2531),
            angular::dms_to_dd(1, 43, 4.5177),
        );
        let en = project(&airy, &origin, &geo);
        assert_float_eq!(
            [en.easting, en.northing],
            [651409.9029631378, 313177.2703307828],
            abs_all <= 1e-6
        );

        // The published values, to the millimetre
        assert!(en.distance(&GridCoordinate::new(651409.903, 313177.270)) < 1e-3);
        Ok(())
    }

    #[test]
    fn true_origin() -> Result<(), Error> {
        let airy = Ellipsoid::named("airy")?;
        let origin = GridOrigin::new(400000., -100000., 49., -2., 0.9996012717)?;
        let en = project(&airy, &origin, &GeodeticCoordinate::new(49., -2.));
        assert_float_eq!([en.easting, en.northing], [400000., -100000.], abs_all <= 1e-9);
        Ok(())
    }
}
