//! WGS84 reference ellipsoid and Transverse Mercator series terms
//!
//! Series follow Snyder, "Map Projections: A Working Manual" (USGS 1395),
//! equations 3-21 (meridional arc) and 3-26 (footpoint latitude).

/// Semi-major axis in meters
pub const SEMI_MAJOR_AXIS: f64 = 6_378_137.0;

/// Inverse flattening
pub const INVERSE_FLATTENING: f64 = 298.257_223_563;

/// Flattening
pub const FLATTENING: f64 = 1.0 / INVERSE_FLATTENING;

/// First eccentricity squared (~0.00669438)
pub const E2: f64 = FLATTENING * (2.0 - FLATTENING);

/// Second eccentricity squared
pub const EP2: f64 = E2 / (1.0 - E2);

/// UTM central meridian scale factor
pub const K0: f64 = 0.9996;

/// False easting applied in every zone
pub const FALSE_EASTING: f64 = 500_000.0;

/// False northing applied in the southern hemisphere only
pub const FALSE_NORTHING_SOUTH: f64 = 10_000_000.0;

const E4: f64 = E2 * E2;
const E6: f64 = E4 * E2;

/// Leading coefficient of the meridional arc series
const M1: f64 = 1.0 - E2 / 4.0 - 3.0 * E4 / 64.0 - 5.0 * E6 / 256.0;

/// Meridional arc length from the equator to `phi` (radians), in meters
pub fn meridian_arc(phi: f64) -> f64 {
    SEMI_MAJOR_AXIS
        * (M1 * phi
            - (3.0 * E2 / 8.0 + 3.0 * E4 / 32.0 + 45.0 * E6 / 1024.0) * (2.0 * phi).sin()
            + (15.0 * E4 / 256.0 + 45.0 * E6 / 1024.0) * (4.0 * phi).sin()
            - (35.0 * E6 / 3072.0) * (6.0 * phi).sin())
}

/// Footpoint latitude (radians) for a meridional arc length in meters
pub fn footpoint_latitude(arc: f64) -> f64 {
    let mu = arc / (SEMI_MAJOR_AXIS * M1);

    let root = (1.0 - E2).sqrt();
    let e1 = (1.0 - root) / (1.0 + root);

    mu + (3.0 * e1 / 2.0 - 27.0 * e1.powi(3) / 32.0) * (2.0 * mu).sin()
        + (21.0 * e1.powi(2) / 16.0 - 55.0 * e1.powi(4) / 32.0) * (4.0 * mu).sin()
        + (151.0 * e1.powi(3) / 96.0) * (6.0 * mu).sin()
        + (1097.0 * e1.powi(4) / 512.0) * (8.0 * mu).sin()
}

/// Radius of curvature in the prime vertical at `phi` (radians)
pub fn prime_vertical_radius(phi: f64) -> f64 {
    SEMI_MAJOR_AXIS / (1.0 - E2 * phi.sin().powi(2)).sqrt()
}

/// Radius of curvature in the meridian at `phi` (radians)
pub fn meridian_radius(phi: f64) -> f64 {
    SEMI_MAJOR_AXIS * (1.0 - E2) / (1.0 - E2 * phi.sin().powi(2)).powf(1.5)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eccentricity() {
        assert!((E2 - 0.006_694_38).abs() < 1e-8);
    }

    #[test]
    fn test_meridian_arc_quarter() {
        // Equator to pole on WGS84 is 10,001,965.729 m
        let quarter = meridian_arc(std::f64::consts::FRAC_PI_2);
        assert!((quarter - 10_001_965.729).abs() < 0.01, "quarter meridian: {}", quarter);
    }

    #[test]
    fn test_footpoint_inverts_arc() {
        for deg in [-75.0_f64, -33.3, 0.0, 12.5, 45.0, 83.9] {
            let phi = deg.to_radians();
            let back = footpoint_latitude(meridian_arc(phi));
            assert!((back - phi).abs() < 1e-9, "{} -> {}", phi, back);
        }
    }
}
