#![allow(non_snake_case)]
use crate::internal::*;

/// The 7 parameter Helmert transformation of geocentric cartesian coordinates,
/// in the *position vector* convention, with small-angle rotations:
///
/// ```text
/// X' = (1 + s·1e-6) · R · X + T
///
///     |  1  -rz  ry |
/// R = |  rz  1  -rx |
///     | -ry  rx  1  |
/// ```
///
/// The inverse undoes the linear map exactly, i.e. it does not stop at the
/// transposed rotation matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Helmert {
    translation: [f64; 3],
    rotation: [[f64; 3]; 3],
    inverse: [[f64; 3]; 3],
    scale: f64,
}

impl Default for Helmert {
    fn default() -> Helmert {
        Helmert::new([0.; 3], [0.; 3], 0.)
    }
}

impl Helmert {
    /// Translations in metres, rotations in arcseconds, scale in ppm
    #[must_use]
    pub fn new(translation: [f64; 3], rotation: [f64; 3], scale: f64) -> Helmert {
        let R = rotation.map(|r| (r / 3600.).to_radians());
        Helmert {
            translation,
            rotation: rotation_matrix(&R),
            inverse: inverse_rotation_matrix(&R),
            scale: 1. + scale * 1e-6,
        }
    }

    /// The Helmert parameters in the `towgs84` ordering of PROJ:
    /// `tx, ty, tz` or `tx, ty, tz, rx, ry, rz, s`.
    pub fn towgs84(parameters: &[f64]) -> Result<Helmert, Error> {
        match *parameters {
            [tx, ty, tz] => Ok(Helmert::new([tx, ty, tz], [0.; 3], 0.)),
            [tx, ty, tz, rx, ry, rz, s] => Ok(Helmert::new([tx, ty, tz], [rx, ry, rz], s)),
            _ => {
                let given = parameters
                    .iter()
                    .map(|p| p.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                warn!("towgs84 takes 3 or 7 parameters, got {}", parameters.len());
                Err(Error::BadParam("towgs84".to_string(), given))
            }
        }
    }

    #[must_use]
    pub fn fwd(&self, cartesian: &[f64; 3]) -> [f64; 3] {
        let ROT = &self.rotation;
        let T = &self.translation;
        let S = self.scale;
        let [x, y, z] = *cartesian;

        // Rotate
        let rx = x * ROT[0][0] + y * ROT[0][1] + z * ROT[0][2];
        let ry = x * ROT[1][0] + y * ROT[1][1] + z * ROT[1][2];
        let rz = x * ROT[2][0] + y * ROT[2][1] + z * ROT[2][2];

        // scale and offset
        [S * rx + T[0], S * ry + T[1], S * rz + T[2]]
    }

    #[must_use]
    pub fn inv(&self, cartesian: &[f64; 3]) -> [f64; 3] {
        let INV = &self.inverse;
        let T = &self.translation;
        let S = self.scale;

        // Deoffset and unscale
        let x = (cartesian[0] - T[0]) / S;
        let y = (cartesian[1] - T[1]) / S;
        let z = (cartesian[2] - T[2]) / S;

        // Unrotate
        [
            x * INV[0][0] + y * INV[0][1] + z * INV[0][2],
            x * INV[1][0] + y * INV[1][1] + z * INV[1][2],
            x * INV[2][0] + y * INV[2][1] + z * INV[2][2],
        ]
    }

    #[must_use]
    pub fn apply(&self, cartesian: &[f64; 3], direction: Direction) -> [f64; 3] {
        match direction {
            Fwd => self.fwd(cartesian),
            Inv => self.inv(cartesian),
        }
    }
}

// Small-angle approximation, sin(r) = r, cos(r) = 1, position vector convention
fn rotation_matrix(r: &[f64; 3]) -> [[f64; 3]; 3] {
    let [rx, ry, rz] = *r;
    [[1., -rz, ry], [rz, 1., -rx], [-ry, rx, 1.]]
}

// The rotation matrix is I + W, with W the cross product matrix of r. Since
// W·r = 0 and W² = r·rᵀ - |r|²·I, its inverse is (I - W + r·rᵀ) / (1 + |r|²)
fn inverse_rotation_matrix(r: &[f64; 3]) -> [[f64; 3]; 3] {
    let [rx, ry, rz] = *r;
    let d = 1. + rx * rx + ry * ry + rz * rz;
    [
        [(1. + rx * rx) / d, (rz + rx * ry) / d, (-ry + rx * rz) / d],
        [(-rz + ry * rx) / d, (1. + ry * ry) / d, (rx + ry * rz) / d],
        [(ry + rz * rx) / d, (-rx + rz * ry) / d, (1. + rz * rz) / d],
    ]
}

// ----- T E S T S ------------------------------------------------------------------
