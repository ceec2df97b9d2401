use crate::internal::*;
use std::fmt;

/// A point on a projected grid: easting and northing, in metres, reckoned in
/// the grid's own system (i.e. including the false easting and northing).
///
/// No validity range is enforced: points far outside the design envelope
/// of the grid are the caller's responsibility.
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GridCoordinate {
    pub easting: f64,
    pub northing: f64,
}

/// A point on an ellipsoid: latitude and longitude, in signed degrees
/// (south and west negative).
#[derive(Debug, Default, PartialEq, Copy, Clone)]
pub struct GeodeticCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

// ----- C O N S T R U C T O R S ---------------------------------------------

impl GridCoordinate {
    #[must_use]
    pub fn new(easting: f64, northing: f64) -> GridCoordinate {
        GridCoordinate { easting, northing }
    }

    /// Euclidean distance between two grid points, in metres
    #[must_use]
    pub fn distance(&self, other: &GridCoordinate) -> f64 {
        (self.easting - other.easting).hypot(self.northing - other.northing)
    }
}

impl GeodeticCoordinate {
    /// A `GeodeticCoordinate` from latitude and longitude in degrees
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate {
            latitude,
            longitude,
        }
    }

    /// A `GeodeticCoordinate` from latitude and longitude in radians
    #[must_use]
    pub fn from_radians(latitude: f64, longitude: f64) -> GeodeticCoordinate {
        GeodeticCoordinate::new(latitude.to_degrees(), longitude.to_degrees())
    }

    /// A `GeodeticCoordinate` consisting of 2 `NaN`s
    #[must_use]
    pub fn nan() -> GeodeticCoordinate {
        GeodeticCoordinate::new(f64::NAN, f64::NAN)
    }

    /// Latitude and longitude, in that order, in radians
    #[must_use]
    pub fn to_radians(&self) -> (f64, f64) {
        (self.latitude.to_radians(), self.longitude.to_radians())
    }

    /// Latitude and longitude in degrees, minutes and seconds, with hemisphere
    /// letters, e.g. `52°39′27.2531″N 1°43′04.5177″E`
    #[must_use]
    pub fn to_dms(&self, decimals: usize) -> String {
        let lat = angular::format_dms(self.latitude, 'N', 'S', decimals);
        let lon = angular::format_dms(self.longitude, 'E', 'W', decimals);
        format!("{lat} {lon}")
    }
}

impl From<(f64, f64)> for GridCoordinate {
    fn from(en: (f64, f64)) -> GridCoordinate {
        GridCoordinate::new(en.0, en.1)
    }
}

impl From<(f64, f64)> for GeodeticCoordinate {
    fn from(latlon: (f64, f64)) -> GeodeticCoordinate {
        GeodeticCoordinate::new(latlon.0, latlon.1)
    }
}

// ----- F O R M A T T I N G -------------------------------------------------

// The precision flag is passed on to both elements, so `{:.3}` gives millimetres
impl fmt::Display for GridCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(3);
        write!(f, "{:.decimals$} {:.decimals$}", self.easting, self.northing)
    }
}

impl fmt::Display for GeodeticCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let decimals = f.precision().unwrap_or(9);
        write!(f, "{:.decimals$} {:.decimals$}", self.latitude, self.longitude)
    }
}

// ----- T E S T S ---------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors() {
        let en = GridCoordinate::new(651409.903, 313177.270);
        assert_eq!(en, GridCoordinate::from((651409.903, 313177.270)));
        assert!((en.distance(&GridCoordinate::new(651413.903, 313180.270)) - 5.).abs() < 1e-9);

        let geo = GeodeticCoordinate::new(55., 12.);
        let (lat, lon) = geo.to_radians();
        assert_eq!(lat, 55_f64.to_radians());
        assert_eq!(lon, 12_f64.to_radians());
        let back = GeodeticCoordinate::from_radians(lat, lon);
        assert!((back.latitude - 55.).abs() < 1e-13);
        assert!((back.longitude - 12.).abs() < 1e-13);
    }

    #[test]
    fn formatting() {
        let en = GridCoordinate::new(651409.9034, 313177.2702);
        assert_eq!(en.to_string(), "651409.903 313177.270");
        assert_eq!(format!("{en:.1}"), "651409.9 313177.3");

        let geo = GeodeticCoordinate::new(
            angular::dms_to_dd(52, 39, 27.2531),
            angular::dms_to_dd(1, 43, 4.5177),
        );
        assert_eq!(format!("{geo:.4}"), "52.6576 1.7179");
        assert_eq!(geo.to_dms(4), "52°39′27.2531″N 1°43′04.5177″E");

        let south_west = GeodeticCoordinate::new(-33.5, -70.25);
        assert_eq!(south_west.to_dms(0), "33°30′00″S 70°15′00″W");

        // The placeholder for points that cannot be converted
        assert_eq!(GeodeticCoordinate::nan().to_string(), "NaN NaN");
        assert_eq!(format!("{:.3}", GeodeticCoordinate::nan()), "NaN NaN");
    }
}
