//! Geographic bounding box

use crate::errors::{ensure_finite, GeoError, GeoResult};
use super::point::GeoPoint;

/// A longitude/latitude rectangle in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Western edge
    pub min_lon: f64,
    /// Southern edge
    pub min_lat: f64,
    /// Eastern edge
    pub max_lon: f64,
    /// Northern edge
    pub max_lat: f64,
}

impl BoundingBox {
    /// Create a new bounding box
    pub fn new(min_lon: f64, min_lat: f64, max_lon: f64, max_lat: f64) -> Self {
        BoundingBox { min_lon, min_lat, max_lon, max_lat }
    }

    /// Parse a bounding box from a string (format: "minlon,minlat,maxlon,maxlat")
    pub fn from_string(bbox_str: &str) -> GeoResult<Self> {
        let parts: Vec<&str> = bbox_str.split(',').collect();
        if parts.len() != 4 {
            return Err(GeoError::parse(bbox_str, "bounding box must have 4 comma-separated values"));
        }

        let mut values = [0.0; 4];
        let names = ["min_lon", "min_lat", "max_lon", "max_lat"];
        for (i, part) in parts.iter().enumerate() {
            values[i] = part.trim().parse::<f64>()
                .map_err(|_| GeoError::parse(bbox_str, format!("invalid {} value '{}'", names[i], part.trim())))?;
        }

        ensure_finite(&[
            (names[0], values[0]), (names[1], values[1]),
            (names[2], values[2]), (names[3], values[3]),
        ])?;

        Ok(BoundingBox::from(values))
    }

    /// Get the width of the bounding box in degrees
    pub fn width(&self) -> f64 {
        self.max_lon - self.min_lon
    }

    /// Get the height of the bounding box in degrees
    pub fn height(&self) -> f64 {
        self.max_lat - self.min_lat
    }

    /// Get the center point of the bounding box
    pub fn center(&self) -> GeoResult<GeoPoint> {
        GeoPoint::new(
            self.min_lon + self.width() / 2.0,
            self.min_lat + self.height() / 2.0,
        )
    }

    /// Check if this bounding box contains a point
    pub fn contains(&self, point: &GeoPoint) -> bool {
        point.longitude() >= self.min_lon && point.longitude() <= self.max_lon &&
            point.latitude() >= self.min_lat && point.latitude() <= self.max_lat
    }

    /// `[min_lon, min_lat, max_lon, max_lat]`
    pub fn to_array(&self) -> [f64; 4] {
        [self.min_lon, self.min_lat, self.max_lon, self.max_lat]
    }

    /// Closed rectangular `POLYGON` with coordinates rounded to `decimals`
    pub fn to_wkt(&self, decimals: u32) -> String {
        crate::wkt::bbox_to_wkt(&self.to_array(), decimals)
    }
}

impl From<[f64; 4]> for BoundingBox {
    fn from(values: [f64; 4]) -> Self {
        BoundingBox::new(values[0], values[1], values[2], values[3])
    }
}
