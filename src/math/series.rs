// --- Taylor series polynomium evaluation ----

/// Evaluate Σ cᵢ · xⁱ using Horner's scheme
///
/// The Redfearn series are all written as polynomials in the squared
/// easting offset (or squared longitude difference), so this is the
/// work horse for both directions of the transverse mercator.
pub fn horner(arg: f64, coefficients: &[f64]) -> f64 {
    let mut coefficients = coefficients.iter().rev();
    let Some(highest) = coefficients.next() else {
        return 0.;
    };
    let mut value = *highest;
    for c in coefficients {
        value = value.mul_add(arg, *c);
    }
    value
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_horner() {
        // Coefficients for 3x² + 2x + 1
        let coefficients = [1_f64, 2., 3.];
        assert_eq!(horner(1., &coefficients), 6.);
        assert_eq!(horner(2., &coefficients), 17.);
        assert_eq!(horner(-2., &coefficients), 9.);

        assert_eq!(horner(-2., &[1_f64]), 1.);
        assert_eq!(horner(-2., &[3_f64]), 3.);

        assert_eq!(horner(-2., &[]), 0.);

        // A series with a vanishing constant term vanishes at the origin,
        // which is what makes the grid origin map exactly onto itself
        assert_eq!(horner(0., &[0., -1e-14, 2e-28, -3e-42]), 0.);

        // The leading factor of the meridional arc series, for Airy 1830
        let n: f64 = 0.0016732203289874942;
        let leading = horner(n, &[1., 1., 5. / 4., 5. / 4.]);
        assert!((leading - (1. + n + 1.25 * n * n + 1.25 * n * n * n)).abs() < 1e-15);
    }
}
