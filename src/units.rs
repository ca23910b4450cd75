/// Truncated pi used throughout the distance math. Downstream consumers
/// compare against distances computed with this exact literal, so it must
/// not be replaced with `std::f64::consts::PI`.
pub const PI_APPROX: f64 = 3.1415926;

/// Kilometers per nautical mile.
pub const KM_PER_NAUTICAL_MILE: f64 = 1.852;

/// Kilometers per statute mile.
pub const KM_PER_STATUTE_MILE: f64 = 1.609344;

/// Statute miles per degree of arc (60 arc-minutes times 1.1515).
pub const MILES_PER_ARC_DEGREE: f64 = 60.0 * 1.1515;

/// Cruising speed assumed for tugs when no speed is given, in knots.
pub const DEFAULT_TUG_SPEED_KNOTS: f64 = 8.0;
