//! Geographic point on the WGS84 ellipsoid

use std::fmt;
use std::str::FromStr;

use crate::errors::{ensure_finite, GeoError, GeoResult};
use crate::utils::format_utils::fixed;
use super::mgrs::MgrsCoordinate;
use super::utm::{self, UtmCoordinate};

/// Notation used when rendering a point as text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeoFormat {
    /// Decimal degrees
    Dd,
    /// Degrees and decimal minutes
    Ddm,
    /// Degrees, minutes and decimal seconds
    Dms,
}

impl FromStr for GeoFormat {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "dd" => Ok(GeoFormat::Dd),
            "ddm" => Ok(GeoFormat::Ddm),
            "dms" => Ok(GeoFormat::Dms),
            other => Err(GeoError::parse(s, format!("unknown lat/lon format '{}' (expected dd, ddm or dms)", other))),
        }
    }
}

/// A latitude/longitude pair in degrees
///
/// Always normalized: latitude in [-90, 90], longitude in (-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    longitude: f64,
    latitude: f64,
}

impl GeoPoint {
    /// Create a point, wrapping longitude and reflecting latitude past the poles
    ///
    /// A latitude that overshoots a pole is reflected back and the sign of the
    /// longitude is flipped, so `(10, 91)` becomes `(-10, 89)`.
    ///
    /// # Errors
    /// `GeoError::Domain` when either value is NaN or infinite.
    pub fn new(longitude: f64, latitude: f64) -> GeoResult<Self> {
        ensure_finite(&[("longitude", longitude), ("latitude", latitude)])?;

        let (latitude, crossed_pole) = normalize_latitude(latitude);
        let mut longitude = normalize_longitude(longitude);
        if crossed_pole {
            longitude = flip_longitude(longitude);
        }

        Ok(GeoPoint { longitude, latitude })
    }

    /// Alias of [`GeoPoint::new`]
    pub fn normalize(longitude: f64, latitude: f64) -> GeoResult<Self> {
        Self::new(longitude, latitude)
    }

    /// Longitude in degrees, (-180, 180]
    pub fn longitude(&self) -> f64 {
        self.longitude
    }

    /// Latitude in degrees, [-90, 90]
    pub fn latitude(&self) -> f64 {
        self.latitude
    }

    /// Render with hemisphere letters, e.g. `52°31'12''N 13°24'18''E`
    ///
    /// # Arguments
    /// * `mode` - DD, DDM or DMS
    /// * `decimals` - Decimal places of the smallest unit shown, `None` for full precision
    /// * `separator` - Text placed between the latitude and longitude parts
    pub fn format(&self, mode: GeoFormat, decimals: Option<u32>, separator: &str) -> String {
        let lat_hemisphere = if self.latitude >= 0.0 { 'N' } else { 'S' };
        let lon_hemisphere = if self.longitude >= 0.0 { 'E' } else { 'W' };

        let lat = format_angle(self.latitude.abs(), mode, decimals);
        let lon = format_angle(self.longitude.abs(), mode, decimals);

        format!("{}{}{}{}{}", lat, lat_hemisphere, separator, lon, lon_hemisphere)
    }

    /// Well-Known Text `POINT(<lon> <lat>)`
    pub fn to_wkt(&self, decimals: Option<u32>) -> String {
        crate::wkt::point_to_wkt(self, decimals)
    }

    /// Project into the UTM zone containing this point
    pub fn to_utm(&self) -> UtmCoordinate {
        utm::project(self)
    }

    /// MGRS reference with `precision` digits per axis (0-5)
    pub fn to_mgrs(&self, precision: u8) -> GeoResult<MgrsCoordinate> {
        MgrsCoordinate::from_geo_point(self, precision)
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.format(GeoFormat::Dms, Some(2), " "))
    }
}

/// Wrap into (-180, 180]
fn normalize_longitude(lon: f64) -> f64 {
    if lon > -180.0 && lon <= 180.0 {
        return lon;
    }
    let wrapped = (lon + 180.0).rem_euclid(360.0) - 180.0;
    if wrapped == -180.0 { 180.0 } else { wrapped }
}

/// Negate a longitude already in (-180, 180], keeping 180 and folding -0
fn flip_longitude(lon: f64) -> f64 {
    if lon == 180.0 || lon == 0.0 {
        lon.abs()
    } else {
        -lon
    }
}

/// Wrap into [-90, 90], reporting whether a pole was crossed
fn normalize_latitude(lat: f64) -> (f64, bool) {
    let wrapped = normalize_longitude(lat);

    if wrapped > 90.0 {
        (180.0 - wrapped, true)
    } else if wrapped < -90.0 {
        (-180.0 - wrapped, true)
    } else {
        (wrapped, false)
    }
}

fn format_angle(value: f64, mode: GeoFormat, decimals: Option<u32>) -> String {
    match mode {
        GeoFormat::Dd => format!("{}°", fixed(value, decimals)),
        GeoFormat::Ddm => {
            let mut degrees = value.floor();
            let mut minutes = round_unit((value - degrees) * 60.0, decimals);
            if minutes >= 60.0 {
                minutes -= 60.0;
                degrees += 1.0;
            }
            format!("{}°{}'", degrees, fixed(minutes, decimals))
        }
        GeoFormat::Dms => {
            let mut degrees = value.floor();
            let total_minutes = (value - degrees) * 60.0;
            let mut minutes = total_minutes.floor();
            let mut seconds = round_unit((total_minutes - minutes) * 60.0, decimals);
            if seconds >= 60.0 {
                seconds -= 60.0;
                minutes += 1.0;
            }
            if minutes >= 60.0 {
                minutes -= 60.0;
                degrees += 1.0;
            }
            format!("{}°{}'{}''", degrees, minutes, fixed(seconds, decimals))
        }
    }
}

/// Round the smallest displayed unit so a carry into the next unit can be detected
fn round_unit(value: f64, decimals: Option<u32>) -> f64 {
    match decimals {
        Some(d) => crate::utils::format_utils::round_to(value, d),
        None => value,
    }
}
