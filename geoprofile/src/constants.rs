/// Earth's radius in miles, as used by the Haversine formula.
pub const EARTH_RADIUS_MILES: f64 = 3958.8;

/// Multiply meters by this to get feet.
pub const METERS_TO_FEET: f64 = 3.28084;

/// Feet per statute mile.
pub const FEET_PER_MILE: f64 = 5280.0;

/// Baseline elevation, in feet, for simulated profiles.
pub(crate) const SIMULATED_START_ELEVATION_FT: f64 = 500.0;

/// Simulated elevation never drops below this floor.
pub(crate) const SIMULATED_ELEVATION_FLOOR_FT: f64 = 300.0;

/// Simulated per-segment deltas are drawn uniformly from
/// `[-SIMULATED_MAX_DELTA_FT, SIMULATED_MAX_DELTA_FT]`.
pub(crate) const SIMULATED_MAX_DELTA_FT: f64 = 20.0;
