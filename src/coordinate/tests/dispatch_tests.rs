//! Tests for the coordinate text dispatcher

extern crate std;

use crate::coordinate::{parse_coordinates, CoordinateDispatcher, CoordinateGrammar};
use crate::errors::{CoordinateFormat, GeoError, GeoResult};

/// Grammar that reads nothing, so every text falls through to UTM and MGRS
struct RejectingGrammar;

impl CoordinateGrammar for RejectingGrammar {
    fn parse(&self, text: &str) -> GeoResult<(f64, f64)> {
        Err(GeoError::parse(text, "rejected"))
    }
}

/// Grammar that reads every text as the same point
struct FixedGrammar;

impl CoordinateGrammar for FixedGrammar {
    fn parse(&self, _text: &str) -> GeoResult<(f64, f64)> {
        Ok((10.0, 20.0))
    }
}

#[test]
fn test_lat_lon_detected_first() {
    let parsed = CoordinateDispatcher::new().parse("52.52, 13.405").unwrap();
    std::assert_eq!(parsed.format, CoordinateFormat::LatLon);
    std::assert_eq!(parsed.point.longitude(), 13.405);
    std::assert_eq!(parsed.point.latitude(), 52.52);
}

#[test]
fn test_utm_detected() {
    let parsed = CoordinateDispatcher::new().parse("31N 166021 0").unwrap();
    std::assert_eq!(parsed.format, CoordinateFormat::Utm);
    std::assert!(parsed.point.longitude().abs() < 1e-4);
    std::assert!(parsed.point.latitude().abs() < 1e-4);
}

#[test]
fn test_mgrs_detected() {
    let parsed = CoordinateDispatcher::new().parse("33UUU9177920072").unwrap();
    std::assert_eq!(parsed.format, CoordinateFormat::Mgrs);
    std::assert!((parsed.point.longitude() - 13.405).abs() < 1e-4);
    std::assert!((parsed.point.latitude() - 52.52).abs() < 1e-4);
}

#[test]
fn test_unrecognized_carries_every_attempt() {
    let err = CoordinateDispatcher::new().parse("somewhere over the rainbow").unwrap_err();
    std::assert_eq!(err.input(), Some("somewhere over the rainbow"));

    match err {
        GeoError::UnrecognizedFormat { input, attempts } => {
            std::assert_eq!(input, "somewhere over the rainbow");
            let formats: Vec<CoordinateFormat> = attempts.iter().map(|a| a.format).collect();
            std::assert_eq!(formats, vec![CoordinateFormat::LatLon, CoordinateFormat::Utm, CoordinateFormat::Mgrs]);
            std::assert!(attempts.iter().all(|a| !a.reason.is_empty()));
        }
        other => std::panic!("expected UnrecognizedFormat, got {:?}", other),
    }
}

#[test]
fn test_custom_grammar_is_tried_first() {
    let dispatcher = CoordinateDispatcher::with_grammar(FixedGrammar);
    let parsed = dispatcher.parse("31N 166021 0").unwrap();
    std::assert_eq!(parsed.format, CoordinateFormat::LatLon);
    std::assert_eq!(parsed.point.longitude(), 10.0);
}

#[test]
fn test_rejecting_grammar_falls_through() {
    let dispatcher = CoordinateDispatcher::with_grammar(RejectingGrammar);
    std::assert_eq!(dispatcher.parse("31N 166021 0").unwrap().format, CoordinateFormat::Utm);
    std::assert!(dispatcher.parse("52.52, 13.405").is_err());
}

#[test]
fn test_parse_as_single_format() {
    let dispatcher = CoordinateDispatcher::default();
    std::assert!(dispatcher.parse_as(CoordinateFormat::Mgrs, "31N 166021 0").is_err());
    std::assert!(dispatcher.parse_as(CoordinateFormat::Utm, "31N 166021 0").is_ok());
}

#[test]
fn test_parse_coordinates_free_function() {
    let point = parse_coordinates("18SUJ2348606483").unwrap();
    std::assert!((point.longitude() + 77.0352).abs() < 1e-4);
    std::assert!((point.latitude() - 38.8895).abs() < 1e-4);

    std::assert!(matches!(parse_coordinates(""), Err(GeoError::UnrecognizedFormat { .. })));
}
