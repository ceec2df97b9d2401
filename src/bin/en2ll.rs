//! en2ll: Easting/Northing to Latitude/Longitude, on national grids
use anyhow::Context;
use clap::Parser;
use log::{debug, trace, warn};
use natgrid::prelude::*;
use natgrid::{DEFAULT_MAX_ITERATIONS, DEFAULT_TOLERANCE};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::path::PathBuf;

/// Convert grid coordinates (easting northing, one pair per line) to
/// latitude and longitude. Input is read from the files given, or from
/// stdin if none are. Elements may be separated by whitespace or commas,
/// and anything after a '#' is ignored.
#[derive(Parser, Debug)]
#[clap(name = "en2ll")]
#[clap(author, version, about, long_about = None)]
struct Cli {
    /// The grid system: osgb36 (bng), irish_grid, itm, or a definition
    /// like "utm zone=32" or "tmerc ellps=intl lon_0=9 k_0=0.9996 x_0=500000"
    #[clap(short, long, default_value = "osgb36")]
    grid: String,

    /// Shift the output to WGS84, using the datum shift of the grid system
    #[clap(long)]
    wgs84: bool,

    /// Inverse operation: latitude longitude to easting northing
    #[clap(long = "inv")]
    inverse: bool,

    /// Number of decimals in the output
    #[clap(short = 'd', long)]
    decimals: Option<usize>,

    /// Output latitude and longitude as degrees, minutes and seconds
    #[clap(long)]
    dms: bool,

    /// Convergence tolerance of the footpoint iteration, in metres
    #[clap(long, default_value_t = DEFAULT_TOLERANCE)]
    tolerance: f64,

    /// Maximum number of footpoint iterations
    #[clap(long, default_value_t = DEFAULT_MAX_ITERATIONS)]
    max_iterations: usize,

    /// Convert in parallel
    #[clap(long)]
    parallel: bool,

    #[clap(flatten)]
    verbose: clap_verbosity_flag::Verbosity,

    /// The files to operate on
    args: Vec<PathBuf>,
}

fn main() -> Result<(), anyhow::Error> {
    let options = Cli::parse();
    env_logger::Builder::new()
        .filter_level(options.verbose.log_level_filter())
        .init();
    debug!("{options:#?}");

    let solver = FootpointSolver::new(options.tolerance, options.max_iterations);
    let grid = GridSystem::from_definition(&options.grid)
        .with_context(|| format!("Cannot establish grid system '{}'", options.grid))?
        .with_solver(solver);

    let datum_shift = match (options.wgs84, grid.datum_shift()) {
        (false, _) => None,
        (true, Some(shift)) => Some(*shift),
        (true, None) => anyhow::bail!("Grid system '{}' has no datum shift to WGS84", grid.name()),
    };

    let mut pairs = Vec::new();
    if options.args.is_empty() {
        read_pairs(io::stdin().lock(), &mut pairs)?;
    }
    for path in &options.args {
        let file =
            File::open(path).with_context(|| format!("Cannot open '{}'", path.display()))?;
        read_pairs(BufReader::new(file), &mut pairs)?;
    }
    debug!("Read {} coordinate pairs", pairs.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();

    // Latitude, longitude to easting, northing
    if options.inverse {
        let decimals = options.decimals.unwrap_or(3);
        for (lat, lon) in pairs {
            let mut geo = GeodeticCoordinate::new(lat, lon);
            if let Some(shift) = &datum_shift {
                geo = shift.inv(&geo);
            }
            let en = grid.to_grid(geo);
            writeln!(out, "{en:.decimals$}")?;
        }
        return Ok(());
    }

    // Easting, northing to latitude, longitude
    let coordinates: Vec<GridCoordinate> = pairs.into_iter().map(GridCoordinate::from).collect();
    let results = grid.to_geodetic_all(&coordinates, options.parallel);
    for (en, result) in coordinates.iter().zip(results) {
        let result = result.map(|geo| match &datum_shift {
            Some(shift) => shift.fwd(&geo),
            None => geo,
        });
        if let Err(e) = &result {
            warn!("{en}: {e}");
        }
        writeln!(out, "{}", format_geodetic(&result, &options))?;
    }
    Ok(())
}

// Failed conversions are written as NaNs, also when DMS output is requested
fn format_geodetic(result: &Result<GeodeticCoordinate, Error>, options: &Cli) -> String {
    let Ok(geo) = result else {
        return GeodeticCoordinate::nan().to_string();
    };
    if options.dms {
        geo.to_dms(options.decimals.unwrap_or(4))
    } else {
        let decimals = options.decimals.unwrap_or(9);
        format!("{geo:.decimals$}")
    }
}

// Lines that cannot be parsed are passed on as NaNs, so the output stays
// in step with the input
fn read_pairs(reader: impl BufRead, pairs: &mut Vec<(f64, f64)>) -> Result<(), anyhow::Error> {
    for line in reader.lines() {
        let line = line?;
        trace!("{line}");
        match parse_line(&line) {
            Some(Ok(pair)) => pairs.push(pair),
            Some(Err(element)) => {
                warn!("Cannot parse '{element}' in line '{line}'");
                pairs.push((f64::NAN, f64::NAN));
            }
            None => {}
        }
    }
    Ok(())
}

// None for blank and comment lines, the offending element for lines that
// do not start with two numbers
fn parse_line(line: &str) -> Option<Result<(f64, f64), String>> {
    let content = line.split('#').next().unwrap_or_default().trim();
    if content.is_empty() {
        return None;
    }

    let mut elements = content
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|e| !e.is_empty());
    let mut next = || {
        let element = elements.next().unwrap_or_default();
        element.parse::<f64>().map_err(|_| element.to_string())
    };
    let first = match next() {
        Ok(v) => v,
        Err(e) => return Some(Err(e)),
    };
    let second = match next() {
        Ok(v) => v,
        Err(e) => return Some(Err(e)),
    };
    Some(Ok((first, second)))
}
