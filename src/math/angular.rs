/// Simplistic transformation from degrees, minutes and seconds-with-decimals
/// to degrees-with-decimals. No sanity check: Sign taken from degree-component,
/// which means that angles in the interval (-1°, 0°) cannot be represented -
/// use [`dms_to_dd_signed`] for those.
pub fn dms_to_dd(d: i32, m: u32, s: f64) -> f64 {
    let sign = if d < 0 { -1. } else { 1. };
    dms_to_dd_signed(sign, d.unsigned_abs(), m, s)
}

/// Degrees, minutes and seconds-with-decimals to degrees-with-decimals, with
/// the sign given separately, as in "52°39′27.2531″N" (sign = 1) or
/// "0°25′12″W" (sign = -1).
pub fn dms_to_dd_signed(sign: f64, d: u32, m: u32, s: f64) -> f64 {
    sign.signum() * (d as f64 + (m as f64 + s / 60.) / 60.)
}

/// Split degrees-with-decimals into sign, degrees, minutes and seconds, with
/// the seconds rounded to `decimals` decimal places. The rounding carries over
/// into minutes and degrees, so we never return 60 seconds or 60 minutes.
pub fn dd_to_dms(dd: f64, decimals: usize) -> (f64, u32, u32, f64) {
    let sign = if dd < 0. { -1. } else { 1. };
    let scale = 10_f64.powi(decimals.min(12) as i32);
    let total = (dd.abs() * 3600. * scale).round() / scale;
    let d = (total / 3600.).floor();
    let m = ((total - d * 3600.) / 60.).floor();
    let s = total - d * 3600. - m * 60.;
    (sign, d as u32, m as u32, s.max(0.))
}

/// Format an angle as degrees, minutes and seconds with a hemisphere letter,
/// e.g. `52°39′27.2531″N`.
pub fn format_dms(dd: f64, positive: char, negative: char, decimals: usize) -> String {
    let (sign, d, m, s) = dd_to_dms(dd, decimals);
    let hemisphere = if sign < 0. { negative } else { positive };
    let width = if decimals == 0 { 2 } else { decimals + 3 };
    format!("{d}°{m:02}′{s:0width$.decimals$}″{hemisphere}")
}

/// normalize arbitrary angles to [-π, π):
pub fn normalize_symmetric(angle: f64) -> f64 {
    use std::f64::consts::PI;
    let angle = (angle + PI) % (2.0 * PI);
    angle - PI * angle.signum()
}

// ----- Tests ---------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_angular() {
        // dms
        assert_eq!(dms_to_dd(55, 30, 36.), 55.51);
        assert_eq!(dms_to_dd(-55, 30, 36.), -55.51);
        assert!((dms_to_dd_signed(-1., 0, 30, 36.) + 0.51).abs() < 1e-15);
        assert_eq!(dms_to_dd_signed(1., 55, 30, 36.), dms_to_dd(55, 30, 36.));

        // The OS worked example, 52°39′27.2531″N 1°43′4.5177″E
        assert!((dms_to_dd(52, 39, 27.2531) - 52.657570305555).abs() < 1e-11);
        assert!((dms_to_dd(1, 43, 4.5177) - 1.717921583333).abs() < 1e-11);

        // ... and back again
        let (sign, d, m, s) = dd_to_dms(52.657570305555, 4);
        assert_eq!((sign, d, m), (1., 52, 39));
        assert!((s - 27.2531).abs() < 1e-9);

        let (sign, d, m, s) = dd_to_dms(-0.51, 2);
        assert_eq!((sign, d, m), (-1., 0, 30));
        assert!((s - 36.).abs() < 1e-9);

        // Rounding carries all the way up
        let (_, d, m, s) = dd_to_dms(55. - 1e-9, 3);
        assert_eq!((d, m), (55, 0));
        assert_eq!(s, 0.);
    }

    #[test]
    fn formatting() {
        assert_eq!(format_dms(dms_to_dd(52, 39, 27.2531), 'N', 'S', 4), "52°39′27.2531″N");
        assert_eq!(format_dms(-dms_to_dd(1, 43, 4.5177), 'E', 'W', 2), "1°43′04.52″W");
        assert_eq!(format_dms(-0.51, 'E', 'W', 0), "0°30′36″W");
    }

    #[test]
    fn normalization() {
        use std::f64::consts::PI;
        assert!((normalize_symmetric(3. * PI / 2.) + PI / 2.).abs() < 1e-14);
        assert!((normalize_symmetric(-3. * PI / 2.) - PI / 2.).abs() < 1e-14);
        assert!((normalize_symmetric(0.25) - 0.25).abs() < 1e-14);
    }
}
