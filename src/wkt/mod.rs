//! Well-Known Text geometry codec
//!
//! Writes points, rectangles and polygons at a controlled decimal
//! precision and reads `POLYGON` / `POINT` text back into coordinates.

mod writer;
mod parser;


/// One polygon ring: `[longitude, latitude]` pairs in order
pub type Ring = Vec<[f64; 2]>;

pub use self::writer::{bbox_to_wkt, point_to_wkt, points_to_wkt, polygon_to_wkt};
pub use self::parser::{parse_wkt_point, parse_wkt_polygon, ring_to_points, WktParser};
