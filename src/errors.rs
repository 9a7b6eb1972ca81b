//! Error types for coordinate conversion, parsing and WKT processing

use std::fmt;
use std::io;
use thiserror::Error;

/// Coordinate text formats tried by the dispatcher, in precedence order
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CoordinateFormat {
    /// Latitude/longitude in degrees, degrees-minutes or degrees-minutes-seconds
    LatLon,
    /// Universal Transverse Mercator
    Utm,
    /// Military Grid Reference System
    Mgrs,
}

impl fmt::Display for CoordinateFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoordinateFormat::LatLon => write!(f, "lat/lon"),
            CoordinateFormat::Utm => write!(f, "UTM"),
            CoordinateFormat::Mgrs => write!(f, "MGRS"),
        }
    }
}

/// A failed attempt to read text in one format
#[derive(Debug, Clone, PartialEq)]
pub struct ParseAttempt {
    /// Format that was tried
    pub format: CoordinateFormat,
    /// Why it did not match
    pub reason: String,
}

/// Errors raised by the coordinate engine
#[derive(Debug, Error)]
pub enum GeoError {
    /// Non-finite numeric input
    #[error("Domain error: {0}")]
    Domain(String),

    /// Zone, band, precision or grid letter out of the legal range
    #[error("Validation error: {0}")]
    Validation(String),

    /// Text does not match a grammar
    #[error("Parse error in '{input}'{}: {message}", position_suffix(.position))]
    Parse {
        input: String,
        position: Option<usize>,
        message: String,
    },

    /// No coordinate format could read the text
    #[error("Unrecognized coordinate format: '{input}'")]
    UnrecognizedFormat {
        input: String,
        attempts: Vec<ParseAttempt>,
    },

    /// Invalid configuration value
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

fn position_suffix(position: &Option<usize>) -> String {
    match position {
        Some(pos) => format!(" at position {}", pos),
        None => String::new(),
    }
}

impl GeoError {
    /// Build a parse error without position information
    pub fn parse(input: &str, message: impl Into<String>) -> Self {
        GeoError::Parse {
            input: input.to_string(),
            position: None,
            message: message.into(),
        }
    }

    /// Build a parse error pointing at a byte offset of the input
    pub fn parse_at(input: &str, position: usize, message: impl Into<String>) -> Self {
        GeoError::Parse {
            input: input.to_string(),
            position: Some(position),
            message: message.into(),
        }
    }

    /// Original input text for parse-related errors
    pub fn input(&self) -> Option<&str> {
        match self {
            GeoError::Parse { input, .. } | GeoError::UnrecognizedFormat { input, .. } => Some(input),
            _ => None,
        }
    }
}

/// Result type for coordinate operations
pub type GeoResult<T> = Result<T, GeoError>;

/// Fail with a domain error unless every value is finite
pub(crate) fn ensure_finite(values: &[(&str, f64)]) -> GeoResult<()> {
    for (name, value) in values {
        if !value.is_finite() {
            return Err(GeoError::Domain(format!("{} must be finite, got {}", name, value)));
        }
    }
    Ok(())
}
