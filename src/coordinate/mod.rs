//! Coordinate handling for geodetic positions
//!
//! This module provides the geographic point type, the UTM projector,
//! the MGRS codec and the text dispatcher that reads any of them.

pub mod ellipsoid;
mod bbox;
mod point;
pub mod utm;
pub mod mgrs;
pub mod latlon;
mod dispatch;

#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bbox::BoundingBox;
pub use self::point::{GeoFormat, GeoPoint};
pub use self::utm::{Hemisphere, UtmCoordinate};
pub use self::mgrs::MgrsCoordinate;
pub use self::latlon::{CoordinateGrammar, LatLonGrammar};
pub use self::dispatch::{parse_coordinates, CoordinateDispatcher, ParsedCoordinate};
