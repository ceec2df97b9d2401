use super::*;

// ----- Meridian geometry -----------------------------------------------------

/// The four coefficients of the meridional arc series, as polynomials in the
/// third flattening, *n*. [OS 2020](crate::Bibliography::Ord20) eq. (C3).
pub(super) fn arc_coefficients(n: f64) -> [f64; 4] {
    [
        horner(n, &[1., 1., 5. / 4., 5. / 4.]),
        n * horner(n, &[3., 3., 21. / 8.]),
        n * n * horner(n, &[15. / 8., 15. / 8.]),
        n * n * n * 35. / 24.,
    ]
}

impl Ellipsoid {
    /// The meridional arc, *M*, from the latitude `origin` to `latitude`
    /// (both in radians), scaled by `scale_factor`, i.e. the northing
    /// difference along the central meridian of a transverse mercator
    /// grid with true origin at `origin`.
    ///
    /// This is the truncated series (to third order in *n*) of
    /// [Redfearn 1948](crate::Bibliography::Red48), in the form given by
    /// [OS 2020](crate::Bibliography::Ord20) eq. (C3). Within the national
    /// grid extents it deviates from the exact arc length by well below a
    /// millimetre.
    #[must_use]
    pub fn meridional_arc(&self, latitude: f64, origin: f64, scale_factor: f64) -> f64 {
        let [c0, c1, c2, c3] = self.arc;
        let dif = latitude - origin;
        let sum = latitude + origin;
        self.b
            * scale_factor
            * (c0 * dif - c1 * dif.sin() * sum.cos() + c2 * (2. * dif).sin() * (2. * sum).cos()
                - c3 * (3. * dif).sin() * (3. * sum).cos())
    }
}
