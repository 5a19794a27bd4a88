//! Route elevation profiling.
//!
//! Turns an ordered sequence of geographic coordinates into a
//! cumulative-distance elevation profile suitable for driving a
//! distance-vs-elevation chart: Haversine segment distances, elevation
//! values either simulated or supplied per-point by a backend, and
//! grade statistics over the result.
//!
//! All operations are pure single-pass transformations. The crate
//! allocates and returns fresh sequences and retains nothing between
//! calls.

mod constants;
mod error;
mod grade;
mod math;
mod profile;
mod route;

pub use crate::{
    constants::{EARTH_RADIUS_MILES, FEET_PER_MILE, METERS_TO_FEET},
    error::ProfileError,
    grade::{GradeEvaluation, GradeSummary, InclineParams},
    math::{distance_between, haversine},
    profile::{Profile, ProfilePoint},
    route::kml_path,
};

pub use geo;
