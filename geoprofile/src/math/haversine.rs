//! Great-circle distance on a spherical Earth.

use crate::constants::EARTH_RADIUS_MILES;
use geo::{CoordFloat, Point};
use num_traits::clamp;

/// Returns the great-circle distance between `a` and `b` in miles.
///
/// Plain Haversine on a sphere of radius 3958.8 mi. The half-chord
/// term is clamped to `[0, 1]` so that floating-point error on
/// near-identical or near-antipodal inputs can never put a negative
/// value under a square root.
///
/// Non-finite input propagates as NaN. Validation happens at the
/// profile boundary, not here.
pub fn haversine<T>(a: Point<T>, b: Point<T>) -> T
where
    T: CoordFloat,
{
    let one = T::one();
    let two = one + one;
    let radius = T::from(EARTH_RADIUS_MILES).unwrap();

    let lat1 = a.y().to_radians();
    let lat2 = b.y().to_radians();
    let dlat = (b.y() - a.y()).to_radians();
    let dlon = (b.x() - a.x()).to_radians();

    let h = (dlat / two).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / two).sin().powi(2);
    let h = clamp(h, T::zero(), one);
    let c = two * h.sqrt().atan2((one - h).sqrt());

    radius * c
}

/// Distance between two possibly-missing coordinates, in miles.
///
/// Either side missing yields zero, so boundary calls with incomplete
/// data degrade to a zero-length segment instead of failing the whole
/// profile computation.
pub fn distance_between<T>(a: Option<Point<T>>, b: Option<Point<T>>) -> T
where
    T: CoordFloat,
{
    match (a, b) {
        (Some(a), Some(b)) => haversine(a, b),
        _ => T::zero(),
    }
}
