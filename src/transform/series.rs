use super::CurvatureParameters;
use crate::internal::*;

/// The Redfearn series taking the footpoint latitude, *φ'*, and the easting
/// offset from the central meridian, *dE*, to latitude and longitude.
/// [OS 2020](crate::Bibliography::Ord20) eqs. (C8) and (C9).
///
/// The coefficients depend on the footpoint only, so they are evaluated once
/// and reused for both outputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SeriesCorrector {
    footpoint: f64,
    // VII, VIII, IX
    latitude_terms: [f64; 3],
    // X, XI, XII, XIIA
    longitude_terms: [f64; 4],
}

impl SeriesCorrector {
    #[must_use]
    #[allow(non_snake_case)]
    pub fn new(footpoint: f64, curvature: &CurvatureParameters) -> SeriesCorrector {
        let CurvatureParameters {
            nu,
            rho,
            eta_squared,
        } = *curvature;

        let t = footpoint.tan();
        let t2 = t * t;
        let sec = footpoint.cos().recip();
        let nu3 = nu.powi(3);
        let nu5 = nu.powi(5);

        let VII = t / (2. * rho * nu);
        let VIII = t / (24. * rho * nu3) * (5. + 3. * t2 + eta_squared * (1. - 9. * t2));
        let IX = t / (720. * rho * nu5) * horner(t2, &[61., 90., 45.]);

        let X = sec / nu;
        let XI = sec / (6. * nu3) * (nu / rho + 2. * t2);
        let XII = sec / (120. * nu5) * horner(t2, &[5., 28., 24.]);
        let XIIA = sec / (5040. * nu.powi(7)) * horner(t2, &[61., 662., 1320., 720.]);

        SeriesCorrector {
            footpoint,
            latitude_terms: [VII, VIII, IX],
            longitude_terms: [X, XI, XII, XIIA],
        }
    }

    /// The latitude coefficients *(VII, VIII, IX)*
    #[must_use]
    pub fn latitude_terms(&self) -> [f64; 3] {
        self.latitude_terms
    }

    /// The longitude coefficients *(X, XI, XII, XIIA)*
    #[must_use]
    pub fn longitude_terms(&self) -> [f64; 4] {
        self.longitude_terms
    }

    /// Latitude (radians) at easting offset `de` (metres)
    #[must_use]
    pub fn latitude(&self, de: f64) -> f64 {
        let [vii, viii, ix] = self.latitude_terms;
        let de2 = de * de;
        self.footpoint + de2 * horner(de2, &[-vii, viii, -ix])
    }

    /// Longitude (radians) at easting offset `de` (metres), from the
    /// central meridian `central_meridian` (radians)
    #[must_use]
    pub fn longitude(&self, central_meridian: f64, de: f64) -> f64 {
        let [x, xi, xii, xiia] = self.longitude_terms;
        central_meridian + de * horner(de * de, &[x, -xi, xii, -xiia])
    }
}

// ----- Tests ---------------------------------------------------------------------
