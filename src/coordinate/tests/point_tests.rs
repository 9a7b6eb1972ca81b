//! Tests for GeoPoint normalization and rendering

extern crate std;

use crate::coordinate::{GeoFormat, GeoPoint};
use crate::errors::GeoError;

fn assert_point(point: &GeoPoint, lon: f64, lat: f64) {
    std::assert!((point.longitude() - lon).abs() < 1e-9, "longitude {} != {}", point.longitude(), lon);
    std::assert!((point.latitude() - lat).abs() < 1e-9, "latitude {} != {}", point.latitude(), lat);
}

#[test]
fn test_point_in_range_is_unchanged() {
    let point = GeoPoint::new(13.405, 52.52).unwrap();
    std::assert_eq!(point.longitude(), 13.405);
    std::assert_eq!(point.latitude(), 52.52);
}

#[test]
fn test_latitude_past_north_pole_reflects() {
    let point = GeoPoint::normalize(10.0, 91.0).unwrap();
    assert_point(&point, -10.0, 89.0);
}

#[test]
fn test_pole_crossing_keeps_prime_and_antimeridian_positive() {
    let prime = GeoPoint::new(0.0, 91.0).unwrap();
    std::assert_eq!(prime.longitude().to_bits(), 0.0f64.to_bits());
    std::assert_eq!(prime.latitude(), 89.0);

    assert_point(&GeoPoint::new(180.0, -91.0).unwrap(), 180.0, -89.0);
    assert_point(&GeoPoint::new(190.0, 100.0).unwrap(), 170.0, 80.0);
}

#[test]
fn test_latitude_past_south_pole_reflects() {
    let point = GeoPoint::normalize(10.0, -95.0).unwrap();
    assert_point(&point, -10.0, -85.0);
}

#[test]
fn test_longitude_wraps() {
    assert_point(&GeoPoint::new(181.0, 0.0).unwrap(), -179.0, 0.0);
    assert_point(&GeoPoint::new(540.0, 0.0).unwrap(), 180.0, 0.0);
    assert_point(&GeoPoint::new(-361.0, 5.0).unwrap(), -1.0, 5.0);
}

#[test]
fn test_antimeridian_is_positive() {
    std::assert_eq!(GeoPoint::new(-180.0, 0.0).unwrap().longitude(), 180.0);
    std::assert_eq!(GeoPoint::new(180.0, 0.0).unwrap().longitude(), 180.0);
}

#[test]
fn test_poles_are_kept() {
    assert_point(&GeoPoint::new(45.0, 90.0).unwrap(), 45.0, 90.0);
    assert_point(&GeoPoint::new(45.0, -90.0).unwrap(), 45.0, -90.0);
}

#[test]
fn test_normalize_is_idempotent() {
    for (lon, lat) in [(0.0, 91.0), (181.0, -100.0), (-725.5, 33.3), (359.9, 179.0)] {
        let once = GeoPoint::new(lon, lat).unwrap();
        let twice = GeoPoint::new(once.longitude(), once.latitude()).unwrap();
        std::assert_eq!(once, twice);
    }
}

#[test]
fn test_non_finite_is_domain_error() {
    std::assert!(matches!(GeoPoint::new(f64::NAN, 0.0), Err(GeoError::Domain(_))));
    std::assert!(matches!(GeoPoint::new(0.0, f64::INFINITY), Err(GeoError::Domain(_))));
}

#[test]
fn test_format_decimal_degrees() {
    let point = GeoPoint::new(45.25, 12.5).unwrap();
    std::assert_eq!(point.format(GeoFormat::Dd, None, " "), "12.5°N 45.25°E");
    std::assert_eq!(point.format(GeoFormat::Dd, Some(2), ", "), "12.50°N, 45.25°E");
}

#[test]
fn test_format_degrees_minutes() {
    let point = GeoPoint::new(45.25, 12.5).unwrap();
    std::assert_eq!(point.format(GeoFormat::Ddm, None, " "), "12°30'N 45°15'E");

    let sydney = GeoPoint::new(151.2093, -33.8688).unwrap();
    std::assert_eq!(sydney.format(GeoFormat::Ddm, Some(2), " "), "33°52.13'S 151°12.56'E");
}

#[test]
fn test_format_degrees_minutes_seconds() {
    let point = GeoPoint::new(45.25, 12.5).unwrap();
    std::assert_eq!(point.format(GeoFormat::Dms, None, " "), "12°30'0''N 45°15'0''E");

    let washington = GeoPoint::new(-77.0352, 38.8895).unwrap();
    std::assert_eq!(washington.format(GeoFormat::Dms, Some(2), " "), "38°53'22.20''N 77°2'6.72''W");
}

#[test]
fn test_rounding_carries_into_next_unit() {
    let point = GeoPoint::new(1.0, 0.9999999).unwrap();
    std::assert_eq!(point.format(GeoFormat::Dms, Some(0), " "), "1°0'0''N 1°0'0''E");
    std::assert_eq!(point.format(GeoFormat::Ddm, Some(0), " "), "1°0'N 1°0'E");
}

#[test]
fn test_display_is_dms_with_two_decimals() {
    let berlin = GeoPoint::new(13.405, 52.52).unwrap();
    std::assert_eq!(berlin.to_string(), "52°31'12.00''N 13°24'18.00''E");
}

#[test]
fn test_geo_format_from_str() {
    std::assert_eq!("DMS".parse::<GeoFormat>().unwrap(), GeoFormat::Dms);
    std::assert_eq!(" ddm ".parse::<GeoFormat>().unwrap(), GeoFormat::Ddm);
    std::assert!("utm".parse::<GeoFormat>().is_err());
}

#[test]
fn test_point_conversions() {
    let berlin = GeoPoint::new(13.405, 52.52).unwrap();
    std::assert_eq!(berlin.to_wkt(None), "POINT(13.405 52.52)");
    std::assert_eq!(berlin.to_utm().to_string(), "33N 391779 5820072");
    std::assert_eq!(berlin.to_mgrs(5).unwrap().to_string(), "33UUU9177920072");
}
