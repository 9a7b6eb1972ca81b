//! WKT emission for points, rectangles and polygons

use crate::coordinate::GeoPoint;
use crate::utils::format_utils::{fixed, round_trimmed};
use super::Ring;

/// `POINT(<lon> <lat>)`, rounded to `decimals` places or at full precision
pub fn point_to_wkt(point: &GeoPoint, decimals: Option<u32>) -> String {
    let render = |v: f64| match decimals {
        Some(d) => round_trimmed(v, d),
        None => fixed(v, None),
    };
    format!("POINT({} {})", render(point.longitude()), render(point.latitude()))
}

/// Closed five-point rectangle for `[min_lon, min_lat, max_lon, max_lat]`
///
/// ```
/// use geokit::wkt::bbox_to_wkt;
///
/// assert_eq!(
///     bbox_to_wkt(&[-1.0, -1.0, 1.0, 1.0], 2),
///     "POLYGON((-1 -1, 1 -1, 1 1, -1 1, -1 -1))"
/// );
/// ```
pub fn bbox_to_wkt(bbox: &[f64; 4], decimals: u32) -> String {
    let [min_lon, min_lat, max_lon, max_lat] = *bbox;

    let x1 = round_trimmed(min_lon, decimals);
    let y1 = round_trimmed(min_lat, decimals);
    let x2 = round_trimmed(max_lon, decimals);
    let y2 = round_trimmed(max_lat, decimals);

    let corners = [
        format!("{} {}", x1, y1),
        format!("{} {}", x2, y1),
        format!("{} {}", x2, y2),
        format!("{} {}", x1, y2),
        format!("{} {}", x1, y1),
    ];

    format!("POLYGON(({}))", corners.join(", "))
}

/// `POLYGON((...))` for the outer ring; inner rings are not written
///
/// Ring closure is left to the caller. No rings gives `POLYGON EMPTY`.
pub fn polygon_to_wkt(rings: &[Ring], decimals: u32) -> String {
    let outer = match rings.first() {
        Some(ring) => ring,
        None => return "POLYGON EMPTY".to_string(),
    };

    let coords: Vec<String> = outer
        .iter()
        .map(|[lon, lat]| format!("{} {}", round_trimmed(*lon, decimals), round_trimmed(*lat, decimals)))
        .collect();

    format!("POLYGON(({}))", coords.join(", "))
}

/// Outer ring of points as a `POLYGON`
pub fn points_to_wkt(points: &[GeoPoint], decimals: u32) -> String {
    let ring: Ring = points.iter().map(|p| [p.longitude(), p.latitude()]).collect();
    polygon_to_wkt(&[ring], decimals)
}
