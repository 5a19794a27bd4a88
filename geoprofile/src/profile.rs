use crate::{
    constants::{
        SIMULATED_ELEVATION_FLOOR_FT, SIMULATED_MAX_DELTA_FT, SIMULATED_START_ELEVATION_FT,
    },
    math::haversine,
    ProfileError,
};
use geo::{CoordFloat, Point};
use itertools::Itertools;
use log::debug;
use rand::Rng;

/// A single charted point: cumulative distance from the start of the
/// route, in miles, and the elevation there, in feet.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProfilePoint<C: CoordFloat = f64> {
    pub distance: C,
    pub elevation: C,
}

/// A distance-vs-elevation profile of a route path.
///
/// Holds one [`ProfilePoint`] per input coordinate, in input order,
/// with non-decreasing cumulative distance.
#[derive(Debug, Clone, PartialEq)]
pub struct Profile<C: CoordFloat = f64> {
    /// Total distance along the path, in miles.
    pub distance: C,

    /// One point per input coordinate.
    pub points: Vec<ProfilePoint<C>>,
}

impl<C: CoordFloat> Default for Profile<C> {
    fn default() -> Self {
        Self {
            distance: C::zero(),
            points: Vec::new(),
        }
    }
}

impl<C: CoordFloat> Profile<C> {
    /// Builds a profile for a path with no elevation data, perturbing
    /// a 500 ft baseline by a uniform [-20, +20] ft delta per segment
    /// and flooring the result at 300 ft.
    ///
    /// This is an offline fallback for driving a chart when no real
    /// samples are available. Backend data goes through
    /// [`Profile::from_samples`].
    pub fn simulated<R>(path: &[Point<C>], rng: &mut R) -> Result<Self, ProfileError>
    where
        R: Rng + ?Sized,
    {
        Self::simulated_with(path, || {
            C::from(rng.gen_range(-SIMULATED_MAX_DELTA_FT..=SIMULATED_MAX_DELTA_FT)).unwrap()
        })
    }

    /// Like [`Profile::simulated`], but with a caller-supplied delta
    /// source. Deterministic tests inject a fixed sequence here.
    pub fn simulated_with<F>(path: &[Point<C>], mut delta: F) -> Result<Self, ProfileError>
    where
        F: FnMut() -> C,
    {
        validate_path(path)?;

        // A degenerate path cannot produce a meaningful profile.
        if path.len() < 2 {
            return Ok(Self::default());
        }

        let floor = C::from(SIMULATED_ELEVATION_FLOOR_FT).unwrap();
        let mut elevation = C::from(SIMULATED_START_ELEVATION_FT).unwrap();
        let mut distance = C::zero();

        let mut points = Vec::with_capacity(path.len());
        points.push(ProfilePoint {
            distance,
            elevation,
        });

        for (prev, next) in path.iter().tuple_windows() {
            distance = distance + haversine(*prev, *next);
            elevation = (elevation + delta()).max(floor);
            points.push(ProfilePoint {
                distance,
                elevation,
            });
        }

        debug!("simulated profile; len: {}, miles: {:?}", points.len(), distance);

        Ok(Self { distance, points })
    }

    /// Builds a profile from per-point elevation samples supplied by a
    /// backend, applying `unit` to each raw sample. Pass
    /// [`crate::METERS_TO_FEET`] for metric sources, or one for
    /// samples already in feet.
    ///
    /// Samples are trusted as-is; no floor is applied. A sample count
    /// that disagrees with the path length is an error, never a silent
    /// truncation.
    pub fn from_samples(path: &[Point<C>], samples: &[C], unit: C) -> Result<Self, ProfileError> {
        if path.len() != samples.len() {
            return Err(ProfileError::SampleMismatch {
                path: path.len(),
                samples: samples.len(),
            });
        }
        validate_path(path)?;

        let mut distance = C::zero();
        let mut points = Vec::with_capacity(path.len());
        let mut prev: Option<Point<C>> = None;

        for (&point, &sample) in path.iter().zip(samples) {
            if let Some(prev) = prev {
                distance = distance + haversine(prev, point);
            }
            points.push(ProfilePoint {
                distance,
                elevation: sample * unit,
            });
            prev = Some(point);
        }

        debug!("sampled profile; len: {}, miles: {:?}", points.len(), distance);

        Ok(Self { distance, points })
    }
}

/// Fails fast on non-finite or out-of-range coordinates instead of
/// letting NaN flow through the distance accumulation.
fn validate_path<C: CoordFloat>(path: &[Point<C>]) -> Result<(), ProfileError> {
    let quarter_turn = C::from(90.0).unwrap();
    let half_turn = C::from(180.0).unwrap();

    for (index, point) in path.iter().enumerate() {
        let (lon, lat) = (point.x(), point.y());
        let valid = lon.is_finite()
            && lat.is_finite()
            && (-quarter_turn..=quarter_turn).contains(&lat)
            && (-half_turn..=half_turn).contains(&lon);
        if !valid {
            return Err(ProfileError::InvalidCoordinate {
                index,
                longitude: lon.to_f64().unwrap_or(f64::NAN),
                latitude: lat.to_f64().unwrap_or(f64::NAN),
            });
        }
    }

    Ok(())
}
