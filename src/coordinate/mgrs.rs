//! Military Grid Reference System
//!
//! An MGRS reference is a UTM zone, a latitude band, a 100 km grid square
//! named by a column and a row letter, and an offset inside that square.
//! Row letters repeat every 2,000,000 m of northing, so the latitude band is
//! needed to recover the absolute northing.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{ensure_finite, GeoError, GeoResult};
use super::point::GeoPoint;
use super::utm::{self, central_meridian, validate_zone, Hemisphere, UtmCoordinate};

/// Latitude band letters from 80°S northwards
pub const BAND_LETTERS: &str = "CDEFGHJKLMNPQRSTUVWX";

/// Column letter sets, selected by `(zone - 1) % 3`
const COLUMN_LETTERS: [&str; 3] = ["ABCDEFGH", "JKLMNPQR", "STUVWXYZ"];

/// Row letter sets, selected by `(zone - 1) % 2`
const ROW_LETTERS: [&str; 2] = ["ABCDEFGHJKLMNPQRSTUV", "FGHJKLMNPQRSTUVABCDE"];

/// Grid zones that do not exist because of the Svalbard zone exceptions
const MISSING_GRID_ZONES: [(u8, char); 3] = [(32, 'X'), (34, 'X'), (36, 'X')];

const SQUARE_SIZE: f64 = 100_000.0;
const ROW_CYCLE: f64 = 2_000_000.0;
const SOUTHERNMOST_LATITUDE: f64 = -80.0;
const NORTHERNMOST_LATITUDE: f64 = 84.0;

/// Most digits per axis: 1 m resolution
pub const MAX_PRECISION: u8 = 5;

lazy_static! {
    static ref MGRS_PATTERN: Regex = Regex::new(
        r"(?i)^(\d{1,2})([A-Z])(?:([A-Z])([A-Z])(\d*))?$"
    ).expect("MGRS pattern is valid");
}

/// Fail unless `band` is one of C-X without I and O
pub fn validate_band(band: char) -> GeoResult<()> {
    if !BAND_LETTERS.contains(band) {
        return Err(GeoError::Validation(format!(
            "Invalid band letter (CDEFGHJKLMNPQRSTUVWX): {}", band
        )));
    }
    Ok(())
}

/// Latitude range `[south, north)` covered by a band; X spans 12°
pub fn band_latitude_range(band: char) -> GeoResult<(f64, f64)> {
    let index = BAND_LETTERS
        .find(band)
        .ok_or_else(|| GeoError::Validation(format!("Invalid band letter: {}", band)))?;

    let south = SOUTHERNMOST_LATITUDE + index as f64 * 8.0;
    let north = if band == 'X' { NORTHERNMOST_LATITUDE } else { south + 8.0 };
    Ok((south, north))
}

/// Band letter containing a latitude
pub fn band_for_latitude(latitude: f64) -> GeoResult<char> {
    if !(SOUTHERNMOST_LATITUDE..=NORTHERNMOST_LATITUDE).contains(&latitude) {
        return Err(GeoError::Validation(format!(
            "Latitude {} outside the MGRS range (-80, 84)", latitude
        )));
    }

    let index = (((latitude - SOUTHERNMOST_LATITUDE) / 8.0).floor() as usize).min(BAND_LETTERS.len() - 1);
    Ok(BAND_LETTERS.as_bytes()[index] as char)
}

fn column_letters(zone: u8) -> &'static str {
    COLUMN_LETTERS[(zone as usize - 1) % 3]
}

fn row_letters(zone: u8) -> &'static str {
    ROW_LETTERS[(zone as usize - 1) % 2]
}

fn validate_grid_zone(zone: u8, band: char) -> GeoResult<()> {
    validate_zone(zone)?;
    validate_band(band)?;
    if MISSING_GRID_ZONES.contains(&(zone, band)) {
        return Err(GeoError::Validation(format!("Grid zone {}{} does not exist", zone, band)));
    }
    Ok(())
}

/// An MGRS grid reference
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MgrsCoordinate {
    zone: u8,
    band: char,
    column: char,
    row: char,
    easting: f64,
    northing: f64,
    precision: u8,
}

impl MgrsCoordinate {
    /// Create a reference from its parts
    ///
    /// # Arguments
    /// * `zone` - UTM zone, 1-60
    /// * `band` - Latitude band letter
    /// * `column`, `row` - 100 km square letters, checked against the zone's letter sets
    /// * `easting`, `northing` - Offset inside the square in meters, 0..100000
    /// * `precision` - Digits per axis, 0-5
    pub fn new(
        zone: u8,
        band: char,
        column: char,
        row: char,
        easting: f64,
        northing: f64,
        precision: u8,
    ) -> GeoResult<Self> {
        let band = band.to_ascii_uppercase();
        let column = column.to_ascii_uppercase();
        let row = row.to_ascii_uppercase();

        validate_grid_zone(zone, band)?;

        if !column_letters(zone).contains(column) {
            return Err(GeoError::Validation(format!(
                "Column letter {} not used in zone {} ({})", column, zone, column_letters(zone)
            )));
        }
        if !row_letters(zone).contains(row) {
            return Err(GeoError::Validation(format!(
                "Row letter {} not used in zone {} ({})", row, zone, row_letters(zone)
            )));
        }
        if precision > MAX_PRECISION {
            return Err(GeoError::Validation(format!("MGRS precision must be 0-5, got {}", precision)));
        }

        ensure_finite(&[("easting", easting), ("northing", northing)])?;
        for (name, value) in [("easting", easting), ("northing", northing)] {
            if !(0.0..SQUARE_SIZE).contains(&value) {
                return Err(GeoError::Validation(format!(
                    "MGRS {} offset must be within the 100 km square, got {}", name, value
                )));
            }
        }

        Ok(MgrsCoordinate { zone, band, column, row, easting, northing, precision })
    }

    /// Parse `<zone><band><column><row><digits>`, ignoring whitespace and case
    ///
    /// The digit block holds 0-10 digits, split evenly between easting and
    /// northing; its length fixes the precision.
    pub fn parse(text: &str) -> GeoResult<Self> {
        let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();

        let caps = MGRS_PATTERN
            .captures(&compact)
            .ok_or_else(|| GeoError::parse(text, "expected '<zone><band><column><row><digits>'"))?;

        let zone: u8 = caps[1]
            .parse()
            .map_err(|_| GeoError::parse(text, "invalid zone number"))?;
        let band = caps[2].to_ascii_uppercase().chars().next().unwrap_or(' ');
        validate_grid_zone(zone, band)?;

        let (column, row, digits) = match (caps.get(3), caps.get(4), caps.get(5)) {
            (Some(c), Some(r), Some(d)) => (
                c.as_str().chars().next().unwrap_or(' '),
                r.as_str().chars().next().unwrap_or(' '),
                d.as_str(),
            ),
            _ => {
                return Err(GeoError::parse(
                    text,
                    format!("grid zone {}{} has no 100 km square letters", zone, band),
                ))
            }
        };

        if digits.len() % 2 != 0 || digits.len() > 2 * MAX_PRECISION as usize {
            let start = caps.get(5).map_or(0, |m| m.start());
            return Err(GeoError::parse_at(
                &compact,
                start,
                format!("digit block must be 0, 2, 4, 6, 8 or 10 digits, got {}", digits.len()),
            ));
        }

        let precision = (digits.len() / 2) as u8;
        let scale = 10f64.powi((MAX_PRECISION - precision) as i32);
        let (easting_digits, northing_digits) = digits.split_at(precision as usize);
        let easting = parse_digits(easting_digits, text)? * scale;
        let northing = parse_digits(northing_digits, text)? * scale;

        debug!("Parsed MGRS: zone={} band={} square={}{} offset=({}, {}) precision={}",
               zone, band, column, row, easting, northing, precision);

        MgrsCoordinate::new(zone, band, column, row, easting, northing, precision)
    }

    /// Build a reference from a UTM coordinate and the latitude it projects from
    ///
    /// Offsets are truncated to `precision` digits, so the reference names
    /// the grid cell containing the position.
    pub fn from_utm(utm: &UtmCoordinate, latitude: f64, precision: u8) -> GeoResult<Self> {
        if precision > MAX_PRECISION {
            return Err(GeoError::Validation(format!("MGRS precision must be 0-5, got {}", precision)));
        }

        let zone = utm.zone();
        let band = band_for_latitude(latitude)?;

        let column_index = (utm.easting() / SQUARE_SIZE).floor() as i64 - 1;
        let column = column_letters(zone)
            .chars()
            .nth(usize::try_from(column_index).unwrap_or(usize::MAX))
            .ok_or_else(|| GeoError::Validation(format!(
                "Easting {} is outside the MGRS grid of zone {}", utm.easting(), zone
            )))?;

        let row_index = ((utm.northing() / SQUARE_SIZE).floor() as i64).rem_euclid(20) as usize;
        let row = row_letters(zone).as_bytes()[row_index] as char;

        let cell = 10f64.powi((MAX_PRECISION - precision) as i32);
        let easting = (utm.easting().rem_euclid(SQUARE_SIZE) / cell).floor() * cell;
        let northing = (utm.northing().rem_euclid(SQUARE_SIZE) / cell).floor() * cell;

        MgrsCoordinate::new(zone, band, column, row, easting, northing, precision)
    }

    /// MGRS reference of a geographic point
    pub fn from_geo_point(point: &GeoPoint, precision: u8) -> GeoResult<Self> {
        Self::from_utm(&utm::project(point), point.latitude(), precision)
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn band(&self) -> char {
        self.band
    }

    pub fn column(&self) -> char {
        self.column
    }

    pub fn row(&self) -> char {
        self.row
    }

    /// Easting offset inside the 100 km square
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing offset inside the 100 km square
    pub fn northing(&self) -> f64 {
        self.northing
    }

    pub fn precision(&self) -> u8 {
        self.precision
    }

    /// Full UTM easting
    pub fn utm_easting(&self) -> f64 {
        let column_index = column_letters(self.zone).find(self.column).unwrap_or(0);
        (column_index + 1) as f64 * SQUARE_SIZE + self.easting
    }

    /// Full UTM northing, resolving which 2,000,000 m row cycle the band lies in
    pub fn utm_northing(&self) -> GeoResult<f64> {
        let row_index = row_letters(self.zone).find(self.row).unwrap_or(0);
        let within_cycle = row_index as f64 * SQUARE_SIZE + self.northing;

        let band_floor = self.band_floor_northing()?;

        let mut cycle = 0.0;
        while cycle + within_cycle < band_floor {
            cycle += ROW_CYCLE;
        }

        debug!("MGRS {}: row {} in cycle {} (band floor {})", self, self.row, cycle, band_floor);
        Ok(cycle + within_cycle)
    }

    /// Lowest northing the band can reach in this zone, rounded down to a 100 km line
    ///
    /// Parallels curve away from the equator off the central meridian, so the
    /// band's southern boundary is lowest at the central meridian in the north
    /// and at the zone edge in the south; both are checked.
    fn band_floor_northing(&self) -> GeoResult<f64> {
        let (south_latitude, _) = band_latitude_range(self.band)?;
        let hemisphere = Hemisphere::from_band(self.band)?;
        let meridian = central_meridian(self.zone);

        let (_, at_meridian) = utm::forward(meridian, south_latitude, self.zone, hemisphere);
        let (_, at_edge) = utm::forward(meridian + 3.0, south_latitude, self.zone, hemisphere);

        Ok((at_meridian.min(at_edge) / SQUARE_SIZE).floor() * SQUARE_SIZE)
    }

    /// Convert to UTM
    pub fn to_utm(&self) -> GeoResult<UtmCoordinate> {
        let hemisphere = Hemisphere::from_band(self.band)?;
        UtmCoordinate::new(self.zone, hemisphere, self.utm_easting(), self.utm_northing()?)
    }

    /// Convert to latitude/longitude (south-west corner of the referenced cell)
    pub fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        self.to_utm()?.to_geo_point()
    }

    /// Compact text form, e.g. `31NAA6602100000`
    pub fn format(&self) -> String {
        let precision = self.precision as usize;
        let mut text = format!("{}{}{}{}", self.zone, self.band, self.column, self.row);

        if precision > 0 {
            let cell = 10f64.powi((MAX_PRECISION - self.precision) as i32);
            let easting = (self.easting / cell).floor() as u64;
            let northing = (self.northing / cell).floor() as u64;
            text.push_str(&format!("{:0width$}{:0width$}", easting, northing, width = precision));
        }

        text
    }
}

impl FromStr for MgrsCoordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        MgrsCoordinate::parse(s)
    }
}

impl fmt::Display for MgrsCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format())
    }
}

fn parse_digits(digits: &str, text: &str) -> GeoResult<f64> {
    if digits.is_empty() {
        return Ok(0.0);
    }
    digits
        .parse::<u32>()
        .map(f64::from)
        .map_err(|_| GeoError::parse(text, format!("invalid digits '{}'", digits)))
}
