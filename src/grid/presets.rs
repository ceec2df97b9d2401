use super::{GridOrigin, GridSystem};
use crate::datum::DatumShift;
use crate::internal::*;

pub(super) fn named(name: &str) -> Result<GridSystem, Error> {
    match name {
        "osgb36" | "bng" | "british_national_grid" => osgb36(),
        "irish_grid" => irish_grid(),
        "itm" => itm(),
        _ => Err(Error::NotFound(format!("grid system '{name}'"))),
    }
}

// British National Grid, on OSGB36
fn osgb36() -> Result<GridSystem, Error> {
    let origin = GridOrigin::new(400_000., -100_000., 49., -2., 0.999_601_271_7)?;
    let grid = GridSystem::new("osgb36", Ellipsoid::named("airy")?, origin);
    Ok(grid.with_datum_shift(DatumShift::named("osgb36")?))
}

// Irish Grid, on Ireland 1965
fn irish_grid() -> Result<GridSystem, Error> {
    let origin = GridOrigin::new(200_000., 250_000., 53.5, -8., 1.000_035)?;
    let grid = GridSystem::new("irish_grid", Ellipsoid::named("mod_airy")?, origin);
    Ok(grid.with_datum_shift(DatumShift::named("ireland_1965")?))
}

// Irish Transverse Mercator, on ETRS89
fn itm() -> Result<GridSystem, Error> {
    let origin = GridOrigin::new(600_000., 750_000., 53.5, -8., 0.999_82)?;
    let grid = GridSystem::new("itm", Ellipsoid::named("GRS80")?, origin);
    Ok(grid.with_datum_shift(DatumShift::named("etrs89")?))
}

pub(super) fn utm(zone: usize, south: bool) -> Result<GridSystem, Error> {
    // The UTM zone should be an integer between 1 and 60
    if !(1..61).contains(&zone) {
        error!("UTM: {zone}. Must be an integer in the interval 1..60");
        return Err(Error::BadParam("zone".to_string(), zone.to_string()));
    }

    // The central meridian is determined by the zone, and the false
    // northing by the hemisphere
    let lon_0 = -183. + 6. * zone as f64;
    let y_0 = if south { 10_000_000. } else { 0. };
    let origin = GridOrigin::new(500_000., y_0, 0., lon_0, 0.9996)?;

    let hemisphere = if south { 'S' } else { 'N' };
    let wgs84 = Ellipsoid::named("WGS84")?;
    let grid = GridSystem::new(&format!("utm{zone}{hemisphere}"), wgs84, origin);
    Ok(grid.with_datum_shift(DatumShift::towgs84(wgs84, &[0., 0., 0.])?))
}

// ----- T E S T S ------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use float_eq::assert_float_eq;

    #[test]
    fn aliases() -> Result<(), Error> {
        let osgb36 = named("osgb36")?;
        assert_eq!(named("bng")?, osgb36);
        assert_eq!(named("british_national_grid")?, osgb36);
        assert!(matches!(named("rd_new"), Err(Error::NotFound(_))));
        Ok(())
    }

    #[test]
    fn irish_grids() -> Result<(), Error> {
        // Both grids share the true origin, 53.5N 8W
        let ig = named("irish_grid")?;
        let geo = ig.to_geodetic(GridCoordinate::new(200_000., 250_000.))?;
        assert_float_eq!([geo.latitude, geo.longitude], [53.5, -8.], abs_all <= 1e-12);

        let itm = named("itm")?;
        let geo = itm.to_geodetic(GridCoordinate::new(600_000., 750_000.))?;
        assert_float_eq!([geo.latitude, geo.longitude], [53.5, -8.], abs_all <= 1e-12);

        // Dublin: Irish Grid to ITM by way of WGS84 agrees with the
        // published coordinate pair to within the accuracy of the datum shift
        let ig_wgs84 = ig.to_wgs84(GridCoordinate::new(315_904., 234_671.))?;
        let itm_en = itm.from_wgs84(ig_wgs84)?;
        assert!(itm_en.distance(&GridCoordinate::new(715_830., 734_697.)) < 1.);
        Ok(())
    }

    #[test]
    fn utm_zones() -> Result<(), Error> {
        let utm32 = utm(32, false)?;
        assert_eq!(utm32.name(), "utm32N");
        assert_float_eq!(utm32.origin().longitude(), 9., abs <= 1e-12);
        assert_eq!(utm32.origin().northing(), 0.);

        let utm56s = utm(56, true)?;
        assert_eq!(utm56s.name(), "utm56S");
        assert_eq!(utm56s.origin().northing(), 10_000_000.);

        // Copenhagen, as computed by PROJ: "+proj=utm +zone=32"
        let geo = utm32.to_geodetic(GridCoordinate::new(691_875.632_139_661, 6_098_907.825_005_012))?;
        assert_float_eq!([geo.latitude, geo.longitude], [55., 12.], abs_all <= 1e-7);

        for zone in [0, 61] {
            assert!(matches!(utm(zone, false), Err(Error::BadParam(_, _))));
        }
        Ok(())
    }
}
