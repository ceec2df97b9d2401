use super::{GridOrigin, GridSystem};
use crate::datum::DatumShift;
use crate::internal::*;

/// The parameters accepted in a grid definition, and how to read them
#[derive(Debug, Clone, Copy)]
enum Parameter {
    Flag { key: &'static str },
    Natural { key: &'static str },
    Real { key: &'static str },
    Series { key: &'static str },
    Text { key: &'static str },
}

impl Parameter {
    fn key(&self) -> &'static str {
        match *self {
            Parameter::Flag { key }
            | Parameter::Natural { key }
            | Parameter::Real { key }
            | Parameter::Series { key }
            | Parameter::Text { key } => key,
        }
    }
}

#[rustfmt::skip]
const GAMUT: [Parameter; 11] = [
    Parameter::Text    { key: "ellps" },
    Parameter::Real    { key: "a" },
    Parameter::Real    { key: "b" },
    Parameter::Real    { key: "lat_0" },
    Parameter::Real    { key: "lon_0" },
    Parameter::Real    { key: "x_0" },
    Parameter::Real    { key: "y_0" },
    Parameter::Real    { key: "k_0" },
    Parameter::Natural { key: "zone" },
    Parameter::Flag    { key: "south" },
    Parameter::Series  { key: "towgs84" },
];

/// The values given in a definition, type checked against the [`GAMUT`]
#[derive(Debug, Default)]
struct Given {
    name: String,
    boolean: Vec<&'static str>,
    natural: BTreeMap<&'static str, usize>,
    real: BTreeMap<&'static str, f64>,
    series: BTreeMap<&'static str, Vec<f64>>,
    text: BTreeMap<&'static str, String>,
}

impl Given {
    fn new(definition: &str) -> Result<Given, Error> {
        let mut locals = split_into_parameters(definition);
        let Some(name) = locals.remove("name") else {
            return Err(Error::Syntax(format!("no grid name in '{definition}'")));
        };

        for key in locals.keys() {
            if !GAMUT.iter().any(|p| p.key() == key) {
                warn!("Ignoring unknown parameter '{key}' in grid definition '{definition}'");
            }
        }

        let mut given = Given {
            name,
            ..Default::default()
        };

        for p in GAMUT {
            let key = p.key();
            let Some(value) = locals.get(key) else {
                continue;
            };
            let bad = || {
                warn!("Cannot parse {key}:{value} for {p:?}");
                Error::BadParam(key.to_string(), value.to_string())
            };

            match p {
                Parameter::Flag { .. } => {
                    if !(value.is_empty() || value.to_lowercase() == "true") {
                        return Err(bad());
                    }
                    given.boolean.push(key);
                }
                Parameter::Natural { .. } => {
                    let v = value.parse::<usize>().map_err(|_| bad())?;
                    given.natural.insert(key, v);
                }
                Parameter::Real { .. } => {
                    let v = value.parse::<f64>().map_err(|_| bad())?;
                    given.real.insert(key, v);
                }
                Parameter::Series { .. } => {
                    let mut elements = Vec::new();
                    for element in value.split(',') {
                        elements.push(element.trim().parse::<f64>().map_err(|_| bad())?);
                    }
                    given.series.insert(key, elements);
                }
                Parameter::Text { .. } => {
                    given.text.insert(key, value.to_string());
                }
            }
        }
        Ok(given)
    }

    fn boolean(&self, key: &str) -> bool {
        self.boolean.contains(&key)
    }

    fn natural(&self, key: &str) -> Option<usize> {
        self.natural.get(key).copied()
    }

    fn real(&self, key: &str) -> Option<f64> {
        self.real.get(key).copied()
    }

    fn series(&self, key: &str) -> Option<&[f64]> {
        self.series.get(key).map(Vec::as_slice)
    }

    fn text(&self, key: &str) -> Option<&str> {
        self.text.get(key).map(String::as_str)
    }
}

/// Build a grid system from a definition such as `utm zone=32 south` or
/// `osgb36 towgs84=375,-111,431`. Parameters given explicitly override
/// those of the named system.
pub(super) fn parse(definition: &str) -> Result<GridSystem, Error> {
    let given = Given::new(definition)?;
    let name = given.name.as_str();

    let base = match name {
        // Transverse mercator, with the defaults of PROJ's `tmerc`
        "tmerc" => {
            let origin = GridOrigin::new(0., 0., 0., 0., 1.)?;
            GridSystem::new("tmerc", Ellipsoid::default(), origin)
        }
        "utm" => {
            let Some(zone) = given.natural("zone") else {
                error!("UTM: missing zone in '{definition}'");
                return Err(Error::MissingParam("zone".to_string()));
            };
            GridSystem::utm(zone, given.boolean("south"))?
        }
        _ => {
            for key in ["zone", "south"] {
                if given.boolean(key) || given.natural(key).is_some() {
                    warn!("Ignoring '{key}', which only applies to utm");
                }
            }
            GridSystem::named(name)?
        }
    };

    // The ellipsoid: by name, or by its axes
    let mut ellipsoid = *base.ellipsoid();
    if let Some(ellps) = given.text("ellps") {
        ellipsoid = Ellipsoid::named(ellps)?;
    }
    match (given.real("a"), given.real("b")) {
        (Some(a), Some(b)) => ellipsoid = Ellipsoid::new(a, b)?,
        (None, None) => {}
        (Some(_), None) => {
            error!("Semimajor axis given without semiminor axis in '{definition}'");
            return Err(Error::MissingParam("b".to_string()));
        }
        (None, Some(_)) => {
            error!("Semiminor axis given without semimajor axis in '{definition}'");
            return Err(Error::MissingParam("a".to_string()));
        }
    }

    let mut origin = *base.origin();
    if ["x_0", "y_0", "lat_0", "lon_0", "k_0"].iter().any(|key| given.real(key).is_some()) {
        origin = GridOrigin::new(
            given.real("x_0").unwrap_or(origin.easting()),
            given.real("y_0").unwrap_or(origin.northing()),
            given.real("lat_0").unwrap_or(origin.latitude()),
            given.real("lon_0").unwrap_or(origin.longitude()),
            given.real("k_0").unwrap_or(origin.scale_factor()),
        )?;
    }

    // An explicit datum shift replaces that of the named system, which
    // otherwise follows the grid to its (possibly redefined) ellipsoid
    let datum_shift = match given.series("towgs84") {
        Some(towgs84) => Some(DatumShift::towgs84(ellipsoid, towgs84)?),
        None => base.datum_shift().map(|shift| shift.with_source(ellipsoid)),
    };

    let mut grid = GridSystem::new(base.name(), ellipsoid, origin).with_solver(*base.solver());
    if let Some(shift) = datum_shift {
        grid = grid.with_datum_shift(shift);
    }
    Ok(grid)
}

/// Split a definition into its `key=value` elements. Whitespace around `=`
/// and `,` is ignored. Keys given without a value (flags) get the value
/// `true`, except for the first one, which is the name of the grid system.
pub(super) fn split_into_parameters(definition: &str) -> BTreeMap<String, String> {
    // Conflate contiguous whitespace, then remove whitespace around "=" and ","
    let elements: Vec<_> = definition.split_whitespace().collect();
    let definition = elements
        .join(" ")
        .replace("= ", "=")
        .replace(", ", ",")
        .replace(" =", "=")
        .replace(" ,", ",");

    let mut params = BTreeMap::new();
    for element in definition.split_whitespace() {
        match element.split_once('=') {
            Some((key, value)) => {
                params.insert(key.to_string(), value.to_string());
            }
            None if params.is_empty() => {
                params.insert("name".to_string(), element.to_string());
            }
            None => {
                params.insert(element.to_string(), "true".to_string());
            }
        }
    }
    params
}

// ----- T E S T S ------------------------------------------------------------------
