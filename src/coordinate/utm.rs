//! Universal Transverse Mercator projection
//!
//! Forward and inverse ellipsoidal Transverse Mercator on WGS84 with the
//! UTM parameters: k0 = 0.9996, false easting 500 km, false northing
//! 10,000 km in the southern hemisphere.

use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use crate::errors::{ensure_finite, GeoError, GeoResult};
use crate::utils::format_utils::{fixed, round_to};
use super::ellipsoid::{
    footpoint_latitude, meridian_arc, meridian_radius, prime_vertical_radius, EP2,
    FALSE_EASTING, FALSE_NORTHING_SOUTH, K0,
};
use super::mgrs::validate_band;
use super::point::GeoPoint;

/// Number of UTM zones
pub const ZONE_COUNT: u8 = 60;

/// Decimal places kept by the inverse transform (~1 cm)
const INVERSE_DECIMALS: u32 = 7;

lazy_static! {
    // <zone><band-or-hemisphere> <easting>[m][E] <northing>[m][N]
    static ref UTM_PATTERN: Regex = Regex::new(
        r"(?i)^\s*(\d{1,2})\s*([A-Z])\s+(\d+(?:\.\d+)?)\s*M?\s*E?\s+(\d+(?:\.\d+)?)\s*M?\s*N?\s*$"
    ).expect("UTM pattern is valid");
}

/// Hemisphere of a UTM coordinate
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hemisphere {
    North,
    South,
}

impl Hemisphere {
    /// Hemisphere of a latitude band letter: `N` and later bands are north
    pub fn from_band(band: char) -> GeoResult<Self> {
        let band = band.to_ascii_uppercase();
        validate_band(band)?;
        Ok(if band >= 'N' { Hemisphere::North } else { Hemisphere::South })
    }

    /// Hemisphere of a latitude in degrees
    pub fn from_latitude(latitude: f64) -> Self {
        if latitude >= 0.0 { Hemisphere::North } else { Hemisphere::South }
    }

    /// `N` or `S`
    pub fn letter(&self) -> char {
        match self {
            Hemisphere::North => 'N',
            Hemisphere::South => 'S',
        }
    }
}

/// Fail unless `zone` is in 1..=60
pub fn validate_zone(zone: u8) -> GeoResult<()> {
    if zone < 1 || zone > ZONE_COUNT {
        return Err(GeoError::Validation(format!("Invalid UTM zone (1-60): {}", zone)));
    }
    Ok(())
}

/// UTM zone containing a longitude; 180° belongs to zone 60
pub fn zone_for_longitude(longitude: f64) -> u8 {
    let zone = ((longitude + 180.0) / 6.0).floor() as i64 + 1;
    zone.clamp(1, ZONE_COUNT as i64) as u8
}

/// Longitude of a zone's central meridian in degrees
pub fn central_meridian(zone: u8) -> f64 {
    zone as f64 * 6.0 - 183.0
}

/// A projected UTM position
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UtmCoordinate {
    zone: u8,
    hemisphere: Hemisphere,
    easting: f64,
    northing: f64,
}

impl UtmCoordinate {
    /// Create a coordinate, validating the zone
    ///
    /// Easting and northing are only required to be finite; whether the pair
    /// lies inside the zone is the caller's concern.
    pub fn new(zone: u8, hemisphere: Hemisphere, easting: f64, northing: f64) -> GeoResult<Self> {
        validate_zone(zone)?;
        ensure_finite(&[("easting", easting), ("northing", northing)])?;

        Ok(UtmCoordinate { zone, hemisphere, easting, northing })
    }

    pub fn zone(&self) -> u8 {
        self.zone
    }

    pub fn hemisphere(&self) -> Hemisphere {
        self.hemisphere
    }

    /// Easting in meters, including the 500 km false easting
    pub fn easting(&self) -> f64 {
        self.easting
    }

    /// Northing in meters, including the false northing in the south
    pub fn northing(&self) -> f64 {
        self.northing
    }

    /// Parse `<zone><band-or-hemisphere> <easting>[m][E] <northing>[m][N]`
    ///
    /// `N` and `S` are read as hemispheres. Any other latitude band letter
    /// selects the hemisphere it lies in.
    pub fn parse(text: &str) -> GeoResult<Self> {
        let caps = UTM_PATTERN
            .captures(text)
            .ok_or_else(|| GeoError::parse(text, "expected '<zone><band> <easting> <northing>'"))?;

        let zone: u8 = caps[1]
            .parse()
            .map_err(|_| GeoError::parse_at(text, caps.get(1).map_or(0, |m| m.start()), "invalid zone number"))?;
        if validate_zone(zone).is_err() {
            return Err(GeoError::parse_at(
                text,
                caps.get(1).map_or(0, |m| m.start()),
                format!("zone {} outside 1-60", zone),
            ));
        }

        let letter_match = caps.get(2).map_or(0, |m| m.start());
        let hemisphere = match caps[2].to_ascii_uppercase().as_str() {
            "N" => Hemisphere::North,
            "S" => Hemisphere::South,
            band => {
                let band = band.chars().next().unwrap_or(' ');
                Hemisphere::from_band(band).map_err(|_| {
                    GeoError::parse_at(text, letter_match, format!("'{}' is neither a hemisphere nor a latitude band", band))
                })?
            }
        };

        let easting: f64 = caps[3]
            .parse()
            .map_err(|_| GeoError::parse(text, format!("invalid easting '{}'", &caps[3])))?;
        let northing: f64 = caps[4]
            .parse()
            .map_err(|_| GeoError::parse(text, format!("invalid northing '{}'", &caps[4])))?;

        debug!("Parsed UTM: zone={} hemisphere={:?} easting={} northing={}",
               zone, hemisphere, easting, northing);

        UtmCoordinate::new(zone, hemisphere, easting, northing)
    }

    /// Inverse projection back to latitude/longitude
    ///
    /// The result is rounded to 7 decimal digits (~1 cm).
    pub fn to_geo_point(&self) -> GeoResult<GeoPoint> {
        let (longitude, latitude) = inverse(self.zone, self.hemisphere, self.easting, self.northing);

        GeoPoint::new(
            round_to(longitude, INVERSE_DECIMALS),
            round_to(latitude, INVERSE_DECIMALS),
        )
    }

    /// Render as `<zone><N|S> <easting> <northing>` with `decimals` places
    pub fn format(&self, decimals: Option<u32>) -> String {
        format!("{}{} {} {}",
                self.zone,
                self.hemisphere.letter(),
                fixed(self.easting, decimals),
                fixed(self.northing, decimals))
    }
}

impl FromStr for UtmCoordinate {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        UtmCoordinate::parse(s)
    }
}

impl fmt::Display for UtmCoordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(Some(0)))
    }
}

/// Project a point into the zone given by its longitude
pub fn project(point: &GeoPoint) -> UtmCoordinate {
    let zone = zone_for_longitude(point.longitude());
    let hemisphere = Hemisphere::from_latitude(point.latitude());
    let (easting, northing) = forward(point.longitude(), point.latitude(), zone, hemisphere);

    UtmCoordinate { zone, hemisphere, easting, northing }
}

/// Inverse projection of a UTM coordinate
pub fn to_geo_point(utm: &UtmCoordinate) -> GeoResult<GeoPoint> {
    utm.to_geo_point()
}

/// Forward Transverse Mercator in a fixed zone, returning (easting, northing)
pub(crate) fn forward(longitude: f64, latitude: f64, zone: u8, hemisphere: Hemisphere) -> (f64, f64) {
    let phi = latitude.to_radians();
    let (sin_phi, cos_phi) = phi.sin_cos();
    let tan_phi = sin_phi / cos_phi;

    let n = prime_vertical_radius(phi);
    let t = tan_phi * tan_phi;
    let c = EP2 * cos_phi * cos_phi;
    let a = (longitude - central_meridian(zone)).to_radians() * cos_phi;
    let m = meridian_arc(phi);

    let x = K0 * n
        * (a
            + (1.0 - t + c) * a.powi(3) / 6.0
            + (5.0 - 18.0 * t + t * t + 72.0 * c - 58.0 * EP2) * a.powi(5) / 120.0);

    let y = K0
        * (m + n * tan_phi
            * (a * a / 2.0
                + (5.0 - t + 9.0 * c + 4.0 * c * c) * a.powi(4) / 24.0
                + (61.0 - 58.0 * t + t * t + 600.0 * c - 330.0 * EP2) * a.powi(6) / 720.0));

    let easting = x + FALSE_EASTING;
    let northing = match hemisphere {
        Hemisphere::North => y,
        Hemisphere::South => y + FALSE_NORTHING_SOUTH,
    };

    (easting, northing)
}

/// Inverse Transverse Mercator, returning unrounded (longitude, latitude)
fn inverse(zone: u8, hemisphere: Hemisphere, easting: f64, northing: f64) -> (f64, f64) {
    let x = easting - FALSE_EASTING;
    let y = match hemisphere {
        Hemisphere::North => northing,
        Hemisphere::South => northing - FALSE_NORTHING_SOUTH,
    };

    let phi1 = footpoint_latitude(y / K0);
    let (sin_phi1, cos_phi1) = phi1.sin_cos();
    let tan_phi1 = sin_phi1 / cos_phi1;

    let n1 = prime_vertical_radius(phi1);
    let r1 = meridian_radius(phi1);
    let t1 = tan_phi1 * tan_phi1;
    let c1 = EP2 * cos_phi1 * cos_phi1;
    let d = x / (n1 * K0);

    let latitude = phi1
        - (n1 * tan_phi1 / r1)
            * (d * d / 2.0
                - (5.0 + 3.0 * t1 + 10.0 * c1 - 4.0 * c1 * c1 - 9.0 * EP2) * d.powi(4) / 24.0
                + (61.0 + 90.0 * t1 + 298.0 * c1 + 45.0 * t1 * t1 - 252.0 * EP2 - 3.0 * c1 * c1)
                    * d.powi(6) / 720.0);

    let longitude = (d
        - (1.0 + 2.0 * t1 + c1) * d.powi(3) / 6.0
        + (5.0 - 2.0 * c1 + 28.0 * t1 - 3.0 * c1 * c1 + 8.0 * EP2 + 24.0 * t1 * t1) * d.powi(5) / 120.0)
        / cos_phi1;

    (longitude.to_degrees() + central_meridian(zone), latitude.to_degrees())
}
