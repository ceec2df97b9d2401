use super::*;

use std::f64::consts::FRAC_PI_2;

impl Ellipsoid {
    // ----- Cartesian <--> Geographic conversion ----------------------------------

    /// Geographic to geocentric cartesian conversion. Angles in radians,
    /// height above the ellipsoid in metres.
    ///
    /// Follows the derivation given by
    /// Bowring ([1976](crate::Bibliography::Bow76) and
    /// [1985](crate::Bibliography::Bow85))
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn cartesian(&self, latitude: f64, longitude: f64, height: f64) -> [f64; 3] {
        let N = self.prime_vertical_radius_of_curvature(latitude);
        let (sinphi, cosphi) = latitude.sin_cos();
        let (sinlam, coslam) = longitude.sin_cos();

        let X = (N + height) * cosphi * coslam;
        let Y = (N + height) * cosphi * sinlam;
        let Z = (N * (1.0 - self.es) + height) * sinphi;

        [X, Y, Z]
    }

    /// Geocentric cartesian to geographic conversion. Returns
    /// `(latitude, longitude, height)`, angles in radians.
    ///
    /// Follows the derivation given by
    /// Bowring ([1976](crate::Bibliography::Bow76) and
    /// [1985](crate::Bibliography::Bow85)), in the formulation by
    /// [Fukushima (1999)](crate::Bibliography::Fuk99), Appendix B.
    #[must_use]
    #[allow(non_snake_case)] // make it possible to mimic math notation from original paper
    pub fn geographic(&self, cartesian: &[f64; 3]) -> (f64, f64, f64) {
        let [X, Y, Z] = *cartesian;

        // We need a few additional ellipsoidal parameters
        let b = self.b;
        let eps = self.second_eccentricity_squared();
        let es = self.es;

        // The longitude is straightforward
        let lam = Y.atan2(X);

        // The perpendicular distance from the point coordinate to the Z-axis
        // (HM eq. 5-28)
        let p = X.hypot(Y);

        // For p < 1 picometer, we simplify things to avoid numerical havoc.
        if p < 1.0e-12 {
            // The sign of Z determines the hemisphere
            let phi = FRAC_PI_2.copysign(Z);
            // We have forced phi to one of the poles, so the height is |Z| - b
            let h = Z.abs() - b;
            return (phi, lam, h);
        }

        let T = (Z * self.a) / (p * b);
        let c = 1.0 / (1.0 + T * T).sqrt();
        let s = c * T;

        let phi_num = Z + eps * b * s.powi(3);
        let phi_denom = p - es * self.a * c.powi(3);
        let phi = phi_num.atan2(phi_denom);

        let lenphi = phi_num.hypot(phi_denom);
        let sinphi = phi_num / lenphi;
        let cosphi = phi_denom / lenphi;

        // We already have sinphi and es, so we can compute the radius
        // of curvature faster by inlining
        let N = self.a / (1.0 - sinphi.powi(2) * es).sqrt();

        // Bowring (1985), as quoted by Burtch (2006), suggests this expression
        // as more accurate than the commonly used h = p / cosphi - N;
        let h = p * cosphi + Z * sinphi - self.a * self.a / N;

        (phi, lam, h)
    }
}
