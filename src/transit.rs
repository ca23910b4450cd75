use std::time::Duration;

use anyhow::{anyhow, Result};

use crate::units::KM_PER_NAUTICAL_MILE;

/// Time in hours to cover `distance_km` at `speed_knots`.
///
/// No guard on the speed: zero yields infinity and a negative speed a
/// negative time, both left to the caller.
pub fn travel_time_hours(distance_km: f64, speed_knots: f64) -> f64 {
    distance_km / KM_PER_NAUTICAL_MILE / speed_knots
}

/// Same conversion as a `Duration`, for schedule arithmetic.
///
/// Fails when the hour count does not fit a `Duration`: non-finite,
/// negative, or too large.
pub fn travel_time(distance_km: f64, speed_knots: f64) -> Result<Duration> {
    let hours = travel_time_hours(distance_km, speed_knots);
    Duration::try_from_secs_f64(hours * 3600.0).map_err(|_| {
        anyhow!(
            "{} km at {} kn gives {} hours, which does not fit a duration",
            distance_km,
            speed_knots,
            hours
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_nautical_mile_at_one_knot() {
        assert_eq!(travel_time_hours(1.852, 1.0), 1.0);
    }

    #[test]
    fn matches_the_raw_quotient() {
        let (d, v) = (42.5, 8.0);
        assert_eq!(travel_time_hours(d, v), d / 1.852 / v);
    }

    #[test]
    fn zero_speed_is_infinite() {
        assert_eq!(travel_time_hours(1.0, 0.0), f64::INFINITY);
    }

    #[test]
    fn negative_speed_is_negative() {
        assert!(travel_time_hours(1.0, -4.0) < 0.0);
    }

    #[test]
    fn duration_for_one_hour() {
        let t = travel_time(1.852, 1.0).unwrap();
        assert_eq!(t, Duration::from_secs(3600));
    }

    #[test]
    fn duration_rejects_zero_speed() {
        assert!(travel_time(1.0, 0.0).is_err());
    }

    #[test]
    fn duration_rejects_negative_time() {
        assert!(travel_time(-1.852, 1.0).is_err());
        assert!(travel_time(1.852, -1.0).is_err());
    }

    #[test]
    fn duration_rejects_oversized_time() {
        // Finite and non-negative, but far beyond what a Duration can hold.
        assert!(travel_time(1e30, 1.0).is_err());
    }
}
