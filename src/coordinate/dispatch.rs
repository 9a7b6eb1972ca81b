//! Coordinate text dispatcher
//!
//! Tries lat/lon, then UTM, then MGRS, and returns the first success. UTM
//! and MGRS text both start with a zone number, so the order is fixed.

use log::debug;

use crate::errors::{CoordinateFormat, GeoError, GeoResult, ParseAttempt};
use super::latlon::{CoordinateGrammar, LatLonGrammar};
use super::mgrs::MgrsCoordinate;
use super::point::GeoPoint;
use super::utm::UtmCoordinate;

/// A point read from text, with the format that matched
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedCoordinate {
    pub format: CoordinateFormat,
    pub point: GeoPoint,
}

/// Ordered-fallback parser over the supported coordinate formats
pub struct CoordinateDispatcher {
    grammar: Box<dyn CoordinateGrammar + Send + Sync>,
}

impl CoordinateDispatcher {
    /// Dispatcher using the built-in lat/lon grammar
    pub fn new() -> Self {
        Self::with_grammar(LatLonGrammar::new())
    }

    /// Dispatcher using another lat/lon grammar for the first stage
    pub fn with_grammar<G>(grammar: G) -> Self
    where
        G: CoordinateGrammar + Send + Sync + 'static,
    {
        CoordinateDispatcher { grammar: Box::new(grammar) }
    }

    /// Read a point from text in any supported format
    ///
    /// # Errors
    /// `GeoError::UnrecognizedFormat` carrying the original text and the
    /// reason each format rejected it.
    pub fn parse(&self, text: &str) -> GeoResult<ParsedCoordinate> {
        let mut attempts = Vec::with_capacity(3);

        for format in [CoordinateFormat::LatLon, CoordinateFormat::Utm, CoordinateFormat::Mgrs] {
            match self.parse_as(format, text) {
                Ok(point) => {
                    debug!("'{}' read as {}", text, format);
                    return Ok(ParsedCoordinate { format, point });
                }
                Err(e) => {
                    debug!("'{}' is not {}: {}", text, format, e);
                    attempts.push(ParseAttempt { format, reason: e.to_string() });
                }
            }
        }

        Err(GeoError::UnrecognizedFormat { input: text.to_string(), attempts })
    }

    /// Read a point from text in one specific format
    pub fn parse_as(&self, format: CoordinateFormat, text: &str) -> GeoResult<GeoPoint> {
        match format {
            CoordinateFormat::LatLon => {
                let (longitude, latitude) = self.grammar.parse(text)?;
                GeoPoint::new(longitude, latitude)
            }
            CoordinateFormat::Utm => UtmCoordinate::parse(text)?.to_geo_point(),
            CoordinateFormat::Mgrs => MgrsCoordinate::parse(text)?.to_geo_point(),
        }
    }
}

impl Default for CoordinateDispatcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Read a point from lat/lon, UTM or MGRS text, in that order
pub fn parse_coordinates(text: &str) -> GeoResult<GeoPoint> {
    CoordinateDispatcher::new().parse(text).map(|parsed| parsed.point)
}
