//! TOML configuration for output defaults and logging
//!
//! ```toml
//! [output]
//! format = "dms"
//! decimals = 2
//! separator = " "
//! mgrs_precision = 5
//! wkt_decimals = 6
//!
//! [log]
//! file = "geokit.log"
//! level = "info"
//! ```

use std::fs;
use std::path::Path;
use std::str::FromStr;

use log::{debug, LevelFilter};

use crate::coordinate::GeoFormat;
use crate::errors::{GeoError, GeoResult};
use crate::utils::format_utils::MAX_DECIMALS;

/// Config file looked up in the working directory when none is given
pub const DEFAULT_CONFIG_FILE: &str = "geokit.toml";

/// Output and logging settings
#[derive(Debug, Clone, PartialEq)]
pub struct GeoKitConfig {
    /// Lat/lon notation
    pub format: GeoFormat,
    /// Decimal places of the smallest lat/lon unit, `None` for full precision
    pub decimals: Option<u32>,
    /// Text between latitude and longitude
    pub separator: String,
    /// MGRS digits per axis
    pub mgrs_precision: u8,
    /// Decimal places in WKT output
    pub wkt_decimals: u32,
    /// Log file mirror
    pub log_file: Option<String>,
    /// Console log level
    pub log_level: LevelFilter,
}

impl Default for GeoKitConfig {
    fn default() -> Self {
        GeoKitConfig {
            format: GeoFormat::Dms,
            decimals: None,
            separator: " ".to_string(),
            mgrs_precision: 5,
            wkt_decimals: 6,
            log_file: None,
            log_level: LevelFilter::Info,
        }
    }
}

impl GeoKitConfig {
    /// Parse configuration from a TOML string; missing keys keep their defaults
    pub fn from_str(content: &str) -> GeoResult<Self> {
        let toml_value: toml::Value = content
            .parse()
            .map_err(|e| GeoError::Config(format!("Failed to parse TOML: {}", e)))?;

        let mut config = GeoKitConfig::default();

        if let Some(output) = toml_value.get("output").and_then(|v| v.as_table()) {
            if let Some(value) = output.get("format") {
                let text = value.as_str().ok_or_else(|| type_error("output.format", "a string"))?;
                config.format = GeoFormat::from_str(text)
                    .map_err(|_| GeoError::Config(format!("output.format: unknown format '{}'", text)))?;
            }
            if let Some(value) = output.get("decimals") {
                config.decimals = Some(integer_in_range(value, "output.decimals", 0, MAX_DECIMALS as i64)? as u32);
            }
            if let Some(value) = output.get("separator") {
                config.separator = value
                    .as_str()
                    .ok_or_else(|| type_error("output.separator", "a string"))?
                    .to_string();
            }
            if let Some(value) = output.get("mgrs_precision") {
                config.mgrs_precision = integer_in_range(value, "output.mgrs_precision", 0, 5)? as u8;
            }
            if let Some(value) = output.get("wkt_decimals") {
                config.wkt_decimals = integer_in_range(value, "output.wkt_decimals", 0, MAX_DECIMALS as i64)? as u32;
            }
        }

        if let Some(log) = toml_value.get("log").and_then(|v| v.as_table()) {
            if let Some(value) = log.get("file") {
                config.log_file = Some(
                    value.as_str().ok_or_else(|| type_error("log.file", "a string"))?.to_string(),
                );
            }
            if let Some(value) = log.get("level") {
                let text = value.as_str().ok_or_else(|| type_error("log.level", "a string"))?;
                config.log_level = LevelFilter::from_str(text)
                    .map_err(|_| GeoError::Config(format!("log.level: unknown level '{}'", text)))?;
            }
        }

        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Load configuration from a file
    pub fn load(path: &str) -> GeoResult<Self> {
        let content = fs::read_to_string(Path::new(path))?;
        Self::from_str(&content)
    }

    /// Load `path`, or `geokit.toml` if it exists, or fall back to defaults
    pub fn load_or_default(path: Option<&str>) -> GeoResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).exists() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }
}

fn type_error(key: &str, expected: &str) -> GeoError {
    GeoError::Config(format!("{} must be {}", key, expected))
}

fn integer_in_range(value: &toml::Value, key: &str, min: i64, max: i64) -> GeoResult<i64> {
    let number = value.as_integer().ok_or_else(|| type_error(key, "an integer"))?;
    if number < min || number > max {
        return Err(GeoError::Config(format!("{} must be between {} and {}, got {}", key, min, max, number)));
    }
    Ok(number)
}
