mod cartesians;
mod meridians;

use crate::internal::*;

/// Representation of a biaxial ellipsoid, given by its semimajor and
/// semiminor axes.
///
/// The shape parameters (eccentricity squared, third flattening, and the
/// coefficients of the meridional arc series) depend on the ellipsoid only,
/// so they are computed once, at construction, and reused for every
/// coordinate converted.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    a: f64,
    b: f64,
    es: f64,
    n: f64,
    arc: [f64; 4],
}

/// GRS80 is the default ellipsoid.
impl Default for Ellipsoid {
    fn default() -> Ellipsoid {
        Ellipsoid::derived(6_378_137.0, 6_356_752.314_140_347)
    }
}

impl Ellipsoid {
    /// User defined ellipsoid. Fails with [`Error::InvalidEllipsoid`] unless
    /// `a > b > 0`, with both axes finite.
    pub fn new(semimajor_axis: f64, semiminor_axis: f64) -> Result<Ellipsoid, Error> {
        let (a, b) = (semimajor_axis, semiminor_axis);
        if !(a.is_finite() && b.is_finite() && b > 0. && a > b) {
            error!("Invalid ellipsoid axes: a = {a}, b = {b}");
            return Err(Error::InvalidEllipsoid { a, b });
        }
        Ok(Ellipsoid::derived(a, b))
    }

    /// Predefined ellipsoid
    pub fn named(name: &str) -> Result<Ellipsoid, Error> {
        #[rustfmt::skip]
        let (a, b) = match name {
            "airy"     => (6_377_563.396, 6_356_256.909),
            "mod_airy" => (6_377_340.189, 6_356_034.447),
            "GRS80"    => (6_378_137.0,   6_356_752.314_140_347),
            "WGS84"    => (6_378_137.0,   6_356_752.314_245_179),
            "intl"     => (6_378_388.0,   6_356_911.946_127_946),
            _ => return Err(Error::NotFound(format!("ellipsoid '{name}'"))),
        };
        Ok(Ellipsoid::derived(a, b))
    }

    /// The shape parameters *(e², n)* of the ellipsoid with axes *a* and *b*:
    /// the squared eccentricity, *e² = (a² - b²) / a²*, and the third flattening,
    /// *n = (a - b) / (a + b)*.
    ///
    /// Exact to floating point precision for any finite *a > b > 0*. Other
    /// inputs are a precondition violation: use [`Ellipsoid::new`] to validate.
    #[must_use]
    pub fn shape(a: f64, b: f64) -> (f64, f64) {
        let es = (a * a - b * b) / (a * a);
        let n = (a - b) / (a + b);
        (es, n)
    }

    // Construct from axes already known to be valid
    fn derived(a: f64, b: f64) -> Ellipsoid {
        let (es, n) = Ellipsoid::shape(a, b);
        let arc = meridians::arc_coefficients(n);
        Ellipsoid { a, b, es, n, arc }
    }

    // ----- Axes ------------------------------------------------------------------

    /// The semimajor axis, *a*
    #[must_use]
    pub fn semimajor_axis(&self) -> f64 {
        self.a
    }

    /// The semiminor axis, *b*
    #[must_use]
    pub fn semiminor_axis(&self) -> f64 {
        self.b
    }

    // ----- Shape -----------------------------------------------------------------

    /// The squared eccentricity *e² = (a² - b²) / a²*.
    #[must_use]
    pub fn eccentricity_squared(&self) -> f64 {
        self.es
    }

    /// The squared second eccentricity *e'² = (a² - b²) / b² = e² / (1 - e²)*
    #[must_use]
    pub fn second_eccentricity_squared(&self) -> f64 {
        self.es / (1.0 - self.es)
    }

    /// The flattening, *f = (a - b)/a*
    #[must_use]
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// The third flattening, *n = (a - b) / (a + b)*
    #[must_use]
    pub fn third_flattening(&self) -> f64 {
        self.n
    }

    // ----- Curvatures ------------------------------------------------------------

    /// The radius of curvature in the prime vertical, *N* (or *ν* in the
    /// notation of the transverse mercator formulae)
    #[must_use]
    pub fn prime_vertical_radius_of_curvature(&self, latitude: f64) -> f64 {
        self.a / (1.0 - latitude.sin().powi(2) * self.es).sqrt()
    }

    /// The meridian radius of curvature, *M* (or *ρ* in the notation of the
    /// transverse mercator formulae)
    #[must_use]
    pub fn meridian_radius_of_curvature(&self, latitude: f64) -> f64 {
        let num = self.a * (1.0 - self.es);
        let denom = (1.0 - latitude.sin().powi(2) * self.es).powf(1.5);
        num / denom
    }
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ellipsoid() -> Result<(), Error> {
        // Constructors
        let ellps = Ellipsoid::named("airy")?;
        assert_eq!(ellps.semimajor_axis(), 6377563.396);
        assert_eq!(ellps.semiminor_axis(), 6356256.909);

        let custom = Ellipsoid::new(6377563.396, 6356256.909)?;
        assert_eq!(ellps, custom);

        let ellps = Ellipsoid::named("GRS80")?;
        assert_eq!(ellps, Ellipsoid::default());
        assert!((ellps.flattening() - 1. / 298.257_222_100_882_7).abs() < 1e-15);

        let ellps = Ellipsoid::named("WGS84")?;
        assert!((ellps.flattening() - 1. / 298.257_223_563).abs() < 1e-15);

        let ellps = Ellipsoid::named("intl")?;
        assert!((ellps.flattening() - 1. / 297.).abs() < 1e-15);

        assert!(matches!(Ellipsoid::named("bessel"), Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn invalid_axes() {
        let bad = [
            (6356256.909, 6377563.396),
            (6377563.396, 6377563.396),
            (6377563.396, 0.),
            (6377563.396, -1.),
            (-1., -2.),
            (f64::INFINITY, 6356256.909),
            (f64::NAN, 6356256.909),
            (6377563.396, f64::NAN),
        ];
        for (a, b) in bad {
            assert!(
                matches!(Ellipsoid::new(a, b), Err(Error::InvalidEllipsoid { .. })),
                "accepted a = {a}, b = {b}"
            );
        }
    }

    #[test]
    fn shape() -> Result<(), Error> {
        // Airy 1830, as used by the British National Grid
        let (es, n) = Ellipsoid::shape(6377563.396, 6356256.909);
        assert!((es - 0.006_670_540_074_149_084).abs() < 1e-15);
        assert!((n - 0.001_673_220_328_987_494_2).abs() < 1e-15);

        // The shape parameters are cached at construction
        let ellps = Ellipsoid::named("airy")?;
        assert_eq!(ellps.eccentricity_squared(), es);
        assert_eq!(ellps.third_flattening(), n);

        // GRS80
        let ellps = Ellipsoid::named("GRS80")?;
        assert!((ellps.eccentricity_squared() - 0.00669_43800_22903_41574).abs() < 1.0e-10);
        let es = ellps.eccentricity_squared();
        assert!((ellps.second_eccentricity_squared() - es / (1. - es)).abs() < 1e-15);

        // n = f / (2 - f)
        let f = ellps.flattening();
        assert!((ellps.third_flattening() - f / (2. - f)).abs() < 1e-15);
        Ok(())
    }

    #[test]
    fn curvatures() -> Result<(), Error> {
        let ellps = Ellipsoid::named("GRS80")?;
        // The curvatures at the North Pole
        assert!(
            (ellps.meridian_radius_of_curvature(90_f64.to_radians()) - 6_399_593.6259).abs() < 1e-4
        );
        assert!(
            (ellps.prime_vertical_radius_of_curvature(90_f64.to_radians()) - 6_399_593.6259).abs()
                < 1e-4
        );

        // The curvatures at the Equator
        assert!((ellps.meridian_radius_of_curvature(0.0) - 6_335_439.3271).abs() < 1.0e-4);
        assert!(
            (ellps.prime_vertical_radius_of_curvature(0.0) - ellps.semimajor_axis()).abs() < 1.0e-4
        );
        Ok(())
    }
}
