//! Integration tests for the coordinate engine

extern crate std;

use std::io::Write;

use geokit::coordinate::BoundingBox;
use geokit::utils::config::GeoKitConfig;
use geokit::wkt::{bbox_to_wkt, parse_wkt_polygon, polygon_to_wkt, ring_to_points};
use geokit::{
    parse_coordinates, CoordinateDispatcher, CoordinateFormat, GeoError, GeoFormat, GeoKit, GeoPoint,
    MgrsCoordinate, OutputTarget, UtmCoordinate,
};

#[test]
fn test_every_format_describes_the_same_place() {
    let dispatcher = CoordinateDispatcher::new();
    let inputs = [
        ("52.52, 13.405", CoordinateFormat::LatLon),
        ("52°31'12\"N 13°24'18\"E", CoordinateFormat::LatLon),
        ("33U 391779 5820072", CoordinateFormat::Utm),
        ("33UUU9177920072", CoordinateFormat::Mgrs),
        ("33U UU 91779 20072", CoordinateFormat::Mgrs),
    ];

    for (text, format) in inputs {
        let parsed = dispatcher.parse(text).unwrap();
        std::assert_eq!(parsed.format, format, "format of '{}'", text);
        std::assert!((parsed.point.longitude() - 13.405).abs() < 1e-4, "'{}'", text);
        std::assert!((parsed.point.latitude() - 52.52).abs() < 1e-4, "'{}'", text);
    }
}

#[test]
fn test_lat_lon_to_mgrs_and_back() {
    let sydney = parse_coordinates("33.8688S, 151.2093E").unwrap();
    let mgrs = sydney.to_mgrs(5).unwrap();
    std::assert_eq!(mgrs.to_string(), "56HLH3436850948");

    let back = MgrsCoordinate::parse(&mgrs.to_string()).unwrap().to_geo_point().unwrap();
    std::assert!((back.longitude() - 151.2093).abs() < 1e-4);
    std::assert!((back.latitude() + 33.8688).abs() < 1e-4);
}

#[test]
fn test_utm_text_round_trip() {
    let utm: UtmCoordinate = "31N 166021 0".parse().unwrap();
    let point = utm.to_geo_point().unwrap();
    std::assert!(point.longitude().abs() < 1e-4);
    std::assert!(point.latitude().abs() < 1e-4);
}

#[test]
fn test_unrecognized_text_keeps_input() {
    match parse_coordinates("not a place") {
        Err(GeoError::UnrecognizedFormat { input, attempts }) => {
            std::assert_eq!(input, "not a place");
            std::assert_eq!(attempts.len(), 3);
        }
        other => std::panic!("expected UnrecognizedFormat, got {:?}", other),
    }
}

#[test]
fn test_bbox_scenario() {
    std::assert_eq!(
        bbox_to_wkt(&[-1.0, -1.0, 1.0, 1.0], 2),
        "POLYGON((-1 -1, 1 -1, 1 1, -1 1, -1 -1))"
    );

    let bbox = BoundingBox::from_string("-1, -1, 1, 1").unwrap();
    std::assert_eq!(bbox.width(), 2.0);
    std::assert_eq!(bbox.height(), 2.0);
    std::assert!(bbox.contains(&bbox.center().unwrap()));
    std::assert_eq!(bbox.to_wkt(2), bbox_to_wkt(&bbox.to_array(), 2));

    std::assert!(BoundingBox::from_string("1,2,3").is_err());
    std::assert!(BoundingBox::from_string("1,2,x,4").is_err());
}

#[test]
fn test_polygon_scenario() {
    let rings = parse_wkt_polygon("POLYGON((-1 -1, 1 -1, 1 1, -1 1, -1 -1))").unwrap();
    std::assert_eq!(polygon_to_wkt(&rings, 2), "POLYGON((-1 -1, 1 -1, 1 1, -1 1, -1 -1))");

    let points = ring_to_points(&rings[0]).unwrap();
    std::assert_eq!(points[2], GeoPoint::new(1.0, 1.0).unwrap());
    std::assert_eq!(polygon_to_wkt(&[], 6), "POLYGON EMPTY");
}

#[test]
fn test_normalization_scenarios() {
    let over_pole = GeoPoint::new(10.0, 91.0).unwrap();
    std::assert_eq!((over_pole.longitude(), over_pole.latitude()), (-10.0, 89.0));

    let wrapped = GeoPoint::new(181.0, 0.0).unwrap();
    std::assert_eq!(wrapped.longitude(), -179.0);

    let antimeridian = GeoPoint::new(-180.0, 0.0).unwrap();
    std::assert_eq!(antimeridian.longitude(), 180.0);
}

#[test]
fn test_geokit_facade_with_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[output]\nformat = \"dd\"\ndecimals = 4\nseparator = \", \"\nmgrs_precision = 2").unwrap();

    let config = GeoKitConfig::load(file.path().to_str().unwrap()).unwrap();
    std::assert_eq!(config.format, GeoFormat::Dd);

    let geokit = GeoKit::new(config);
    std::assert_eq!(
        geokit.convert_line("33UUU9177920072", OutputTarget::LatLon).unwrap(),
        "52.5200°N, 13.4050°E"
    );
    std::assert_eq!(
        geokit.convert_line("52.52, 13.405", OutputTarget::Mgrs).unwrap(),
        "33UUU9120"
    );
}
