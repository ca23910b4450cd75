use crate::units::{KM_PER_STATUTE_MILE, MILES_PER_ARC_DEGREE, PI_APPROX};

fn deg2rad(deg: f64) -> f64 {
    deg * PI_APPROX / 180.0
}

fn rad2deg(rad: f64) -> f64 {
    rad * 180.0 / PI_APPROX
}

/// Great-circle distance via the spherical law of cosines.
/// Input lng/lat in degrees. Output in kilometers.
///
/// No range validation is done on the inputs; out-of-range coordinates are
/// the caller's problem.
pub fn great_circle_distance_km(lng1: f64, lat1: f64, lng2: f64, lat2: f64) -> f64 {
    if lat1 == lat2 && lng1 == lng2 {
        return 0.0;
    }

    let theta = lng1 - lng2;
    let cos_central = deg2rad(lat1).sin() * deg2rad(lat2).sin()
        + deg2rad(lat1).cos() * deg2rad(lat2).cos() * deg2rad(theta).cos();
    // Rounding can push the cosine just outside [-1, 1] for near-identical
    // or near-antipodal points, where acos returns NaN.
    let central = cos_central.clamp(-1.0, 1.0).acos();

    rad2deg(central) * MILES_PER_ARC_DEGREE * KM_PER_STATUTE_MILE
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identical_points_are_zero() {
        assert_eq!(great_circle_distance_km(0.0, 0.0, 0.0, 0.0), 0.0);
        assert_eq!(
            great_circle_distance_km(120.265942, 22.616677, 120.265942, 22.616677),
            0.0
        );
    }

    #[test]
    fn distance_is_symmetric() {
        let ab = great_circle_distance_km(120.265942, 22.616677, 120.316716, 22.552638);
        let ba = great_circle_distance_km(120.316716, 22.552638, 120.265942, 22.616677);
        assert_eq!(ab, ba);
    }

    #[test]
    fn distance_is_non_negative() {
        let d = great_circle_distance_km(-73.9857, 40.7484, 151.2153, -33.8568);
        assert!(d >= 0.0);
    }

    #[test]
    fn quarter_equator() {
        // 90 degrees of arc along the equator: 90 * 60 * 1.1515 * 1.609344.
        let d = great_circle_distance_km(0.0, 0.0, 90.0, 0.0);
        assert!((d - 10007.0619264).abs() < 0.01);
    }

    #[test]
    fn antipodal_points() {
        let d = great_circle_distance_km(0.0, 0.0, 180.0, 0.0);
        assert!((d - 20014.1238528).abs() < 0.01);
    }

    #[test]
    fn anchorage_to_anchorage() {
        // The two harbor entrance anchorages, roughly 8.8 km apart.
        let d = great_circle_distance_km(120.265942, 22.616677, 120.316716, 22.552638);
        assert!((d - 8.82).abs() < 0.05);
    }

    #[test]
    fn near_identical_points_stay_finite() {
        // Close enough that the law-of-cosines argument can drift past 1.0.
        let d = great_circle_distance_km(120.3, 22.6, 120.3 + 1e-13, 22.6);
        assert!(d.is_finite());
        assert!(d >= 0.0);
        assert!(d < 1e-3);
    }
}
