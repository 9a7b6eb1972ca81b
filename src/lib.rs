pub mod errors;
pub mod utils;
pub mod coordinate;
pub mod wkt;
pub mod commands;
pub mod api;

pub use crate::api::{GeoKit, OutputTarget};
pub use crate::errors::{CoordinateFormat, GeoError, GeoResult};

pub use coordinate::{
    parse_coordinates, BoundingBox, CoordinateDispatcher, GeoFormat, GeoPoint, Hemisphere,
    MgrsCoordinate, ParsedCoordinate, UtmCoordinate,
};
