//! Tests for the lat/lon text grammar

extern crate std;

use crate::coordinate::{CoordinateGrammar, LatLonGrammar};
use crate::errors::GeoError;

fn parse(text: &str) -> (f64, f64) {
    LatLonGrammar::new()
        .parse(text)
        .unwrap_or_else(|e| std::panic!("'{}' should parse: {}", text, e))
}

fn assert_pair(text: &str, lon: f64, lat: f64) {
    let (actual_lon, actual_lat) = parse(text);
    std::assert!((actual_lon - lon).abs() < 1e-9, "'{}': longitude {} != {}", text, actual_lon, lon);
    std::assert!((actual_lat - lat).abs() < 1e-9, "'{}': latitude {} != {}", text, actual_lat, lat);
}

#[test]
fn test_decimal_degrees() {
    assert_pair("52.52, 13.405", 13.405, 52.52);
    assert_pair("52.52;13.405", 13.405, 52.52);
    assert_pair("-33.8688 151.2093", 151.2093, -33.8688);
    assert_pair("+12.5, -45", -45.0, 12.5);
}

#[test]
fn test_hemisphere_letters() {
    assert_pair("52.52°N, 13.405°E", 13.405, 52.52);
    assert_pair("33.8688S 151.2093E", 151.2093, -33.8688);
    assert_pair("n 52.52 w 13.405", -13.405, 52.52);
}

#[test]
fn test_longitude_first_with_letters() {
    assert_pair("13.405E 52.52N", 13.405, 52.52);
    assert_pair("77.0352W, 38.8895N", -77.0352, 38.8895);
}

#[test]
fn test_degrees_minutes() {
    assert_pair("N 52°31.2' E 13°24.3'", 13.405, 52.52);
    assert_pair("52 31.2, 13 24.3", 13.405, 52.52);
}

#[test]
fn test_degrees_minutes_seconds() {
    assert_pair("52°31'12\"N 13°24'18\"E", 13.405, 52.52);
    assert_pair("52°31'12''N, 13°24'18''E", 13.405, 52.52);
    assert_pair("52 31 12N 13 24 18E", 13.405, 52.52);
    assert_pair("52:31:12 13:24:18", 13.405, 52.52);
    assert_pair("38°53′22.2″N 77°2′6.72″W", -77.0352, 38.8895);
}

#[test]
fn test_rejects_out_of_range() {
    for text in ["91, 0", "0, 181", "-90.5 10", "52°60' 13", "52°30'60\" 13"] {
        std::assert!(LatLonGrammar::new().parse(text).is_err(), "'{}' should not parse", text);
    }
}

#[test]
fn test_rejects_conflicting_letters() {
    for text in ["52N, 13N", "13E 52W", "N52S, 13", "-52N, 13"] {
        std::assert!(LatLonGrammar::new().parse(text).is_err(), "'{}' should not parse", text);
    }
}

#[test]
fn test_rejects_grid_references() {
    for text in ["31N 166021 0", "33U 391779 5820072", "31NAA6602100000", "56S 334368 6250948", "hello", "", "52.52"] {
        let result = LatLonGrammar::new().parse(text);
        std::assert!(matches!(result, Err(GeoError::Parse { .. })), "'{}' should not parse", text);
    }
}
