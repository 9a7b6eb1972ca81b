use std::fmt;
use std::str::FromStr;

use log::{debug, info};

use crate::coordinate::{BoundingBox, CoordinateDispatcher, ParsedCoordinate};
use crate::errors::{GeoError, GeoResult};
use crate::utils::config::GeoKitConfig;
use crate::wkt::{parse_wkt_polygon, ring_to_points};

/// Output notation requested for a conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputTarget {
    All,
    LatLon,
    Utm,
    Mgrs,
    Wkt,
}

impl FromStr for OutputTarget {
    type Err = GeoError;

    fn from_str(s: &str) -> GeoResult<Self> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(OutputTarget::All),
            "latlon" => Ok(OutputTarget::LatLon),
            "utm" => Ok(OutputTarget::Utm),
            "mgrs" => Ok(OutputTarget::Mgrs),
            "wkt" => Ok(OutputTarget::Wkt),
            other => Err(GeoError::Config(format!("unknown output target '{}'", other))),
        }
    }
}

impl fmt::Display for OutputTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            OutputTarget::All => "all",
            OutputTarget::LatLon => "Lat/Lon",
            OutputTarget::Utm => "UTM",
            OutputTarget::Mgrs => "MGRS",
            OutputTarget::Wkt => "WKT",
        };
        write!(f, "{}", name)
    }
}

/// One rendered output of a conversion
#[derive(Debug, Clone, PartialEq)]
pub struct Conversion {
    pub target: OutputTarget,
    pub text: String,
}

/// Main interface to the GeoKit library
///
/// Holds the output settings and a dispatcher, and renders parsed
/// coordinates in the configured notations.
pub struct GeoKit {
    config: GeoKitConfig,
    dispatcher: CoordinateDispatcher,
}

impl GeoKit {
    /// Create a GeoKit instance with the given output settings
    pub fn new(config: GeoKitConfig) -> Self {
        GeoKit {
            config,
            dispatcher: CoordinateDispatcher::new(),
        }
    }

    /// Output settings in use
    pub fn config(&self) -> &GeoKitConfig {
        &self.config
    }

    /// Read coordinate text in any supported format
    pub fn parse(&self, text: &str) -> GeoResult<ParsedCoordinate> {
        self.dispatcher.parse(text)
    }

    /// Convert coordinate text into the requested notation(s)
    ///
    /// With `OutputTarget::All` a point outside the MGRS latitude range is
    /// still converted; its MGRS entry reports why it has no grid reference.
    ///
    /// # Returns
    /// The detected input format and the rendered outputs
    pub fn convert(&self, text: &str, target: OutputTarget) -> GeoResult<(ParsedCoordinate, Vec<Conversion>)> {
        let parsed = self.parse(text)?;
        info!("Read '{}' as {}", text.trim(), parsed.format);

        let targets: &[OutputTarget] = match target {
            OutputTarget::All => &[OutputTarget::LatLon, OutputTarget::Utm, OutputTarget::Mgrs, OutputTarget::Wkt],
            OutputTarget::LatLon => &[OutputTarget::LatLon],
            OutputTarget::Utm => &[OutputTarget::Utm],
            OutputTarget::Mgrs => &[OutputTarget::Mgrs],
            OutputTarget::Wkt => &[OutputTarget::Wkt],
        };

        let mut conversions = Vec::with_capacity(targets.len());
        for &single in targets {
            let text = match self.render(&parsed, single) {
                Ok(text) => text,
                Err(e) if target == OutputTarget::All => {
                    debug!("No {} rendering: {}", single, e);
                    format!("unavailable ({})", e)
                }
                Err(e) => return Err(e),
            };
            conversions.push(Conversion { target: single, text });
        }

        Ok((parsed, conversions))
    }

    /// Convert one line of text into a single-line result
    ///
    /// Multiple outputs are joined with `" | "`.
    pub fn convert_line(&self, text: &str, target: OutputTarget) -> GeoResult<String> {
        let (_, conversions) = self.convert(text, target)?;
        Ok(conversions
            .iter()
            .map(|c| c.text.as_str())
            .collect::<Vec<_>>()
            .join(" | "))
    }

    /// WKT polygon for `"minlon,minlat,maxlon,maxlat"`
    pub fn bbox_wkt(&self, text: &str) -> GeoResult<String> {
        let bbox = BoundingBox::from_string(text)?;
        Ok(bbox.to_wkt(self.config.wkt_decimals))
    }

    /// Human-readable listing of the rings of a WKT polygon
    pub fn describe_polygon(&self, wkt: &str) -> GeoResult<String> {
        let rings = parse_wkt_polygon(wkt)?;

        let mut result = format!("Polygon with {} ring(s)\n", rings.len());
        for (i, ring) in rings.iter().enumerate() {
            let points = ring_to_points(ring)?;
            result.push_str(&format!("\nRing #{} ({} vertices)\n", i + 1, points.len()));
            for point in &points {
                result.push_str(&format!(
                    "  {}\n",
                    point.format(self.config.format, self.config.decimals, &self.config.separator)
                ));
            }
        }

        Ok(result)
    }

    fn render(&self, parsed: &ParsedCoordinate, target: OutputTarget) -> GeoResult<String> {
        let point = &parsed.point;
        match target {
            OutputTarget::LatLon => Ok(point.format(self.config.format, self.config.decimals, &self.config.separator)),
            OutputTarget::Utm => Ok(point.to_utm().to_string()),
            OutputTarget::Mgrs => Ok(point.to_mgrs(self.config.mgrs_precision)?.to_string()),
            OutputTarget::Wkt => Ok(point.to_wkt(Some(self.config.wkt_decimals))),
            OutputTarget::All => Err(GeoError::Config("'all' is not a single output".to_string())),
        }
    }
}

impl Default for GeoKit {
    fn default() -> Self {
        Self::new(GeoKitConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::coordinate::GeoFormat;
    use crate::errors::CoordinateFormat;

    #[test]
    fn test_convert_all_from_mgrs() {
        let geokit = GeoKit::default();
        let (parsed, conversions) = geokit.convert("18SUJ2348606483", OutputTarget::All).unwrap();

        assert_eq!(parsed.format, CoordinateFormat::Mgrs);
        assert_eq!(conversions.len(), 4);
        assert_eq!(conversions[1].text, "18N 323486 4306483");
        assert!(conversions[2].text.starts_with("18SUJ2348"));
        assert!(conversions[3].text.starts_with("POINT(-77.03"));
    }

    #[test]
    fn test_convert_single_target() {
        let config = GeoKitConfig {
            format: GeoFormat::Dd,
            decimals: Some(1),
            ..GeoKitConfig::default()
        };
        let geokit = GeoKit::new(config);

        let line = geokit.convert_line("12.5, 45.25", OutputTarget::LatLon).unwrap();
        assert_eq!(line, "12.5°N 45.3°E");
    }

    #[test]
    fn test_mgrs_unavailable_near_pole() {
        let geokit = GeoKit::default();

        let line = geokit.convert_line("85, 10", OutputTarget::All).unwrap();
        assert!(line.contains("unavailable"));

        assert!(geokit.convert_line("85, 10", OutputTarget::Mgrs).is_err());
    }

    #[test]
    fn test_bbox_wkt() {
        let config = GeoKitConfig {
            wkt_decimals: 2,
            ..GeoKitConfig::default()
        };
        let geokit = GeoKit::new(config);
        assert_eq!(
            geokit.bbox_wkt("-1,-1,1,1").unwrap(),
            "POLYGON((-1 -1, 1 -1, 1 1, -1 1, -1 -1))"
        );
    }

    #[test]
    fn test_describe_polygon() {
        let geokit = GeoKit::default();
        let summary = geokit.describe_polygon("POLYGON((0 0, 1 0, 1 1, 0 0))").unwrap();
        assert!(summary.starts_with("Polygon with 1 ring(s)"));
        assert!(summary.contains("Ring #1 (4 vertices)"));
    }

    #[test]
    fn test_output_target_from_str() {
        assert_eq!("MGRS".parse::<OutputTarget>().unwrap(), OutputTarget::Mgrs);
        assert!("kml".parse::<OutputTarget>().is_err());
    }
}
