//! Grade analysis over a computed profile.
//!
//! Rise-over-run statistics of the kind a route scorer uses to rank
//! or prune candidate routes against a desired incline.

use crate::{constants::FEET_PER_MILE, Profile};
use geo::CoordFloat;
use itertools::Itertools;

/// Aggregate climb statistics for a [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeSummary<C: CoordFloat = f64> {
    /// Sum of positive elevation change, in feet.
    pub total_climb: C,

    /// Sum of negative elevation change, in feet, as a non-negative
    /// value.
    pub total_descent: C,

    /// Signed start-to-end grade over the whole profile, in percent.
    pub overall_grade: C,

    /// Largest per-segment grade by absolute value, in percent.
    pub steepest_segment_grade: C,
}

impl<C: CoordFloat> Profile<C> {
    /// Walks the profile once and aggregates climb statistics.
    ///
    /// Zero-length segments contribute no grade. Empty and
    /// single-point profiles summarize to all zeros.
    pub fn grade_summary(&self) -> GradeSummary<C> {
        let mut total_climb = C::zero();
        let mut total_descent = C::zero();
        let mut steepest = C::zero();

        for (a, b) in self.points.iter().tuple_windows() {
            let rise = b.elevation - a.elevation;
            if rise > C::zero() {
                total_climb = total_climb + rise;
            } else {
                total_descent = total_descent - rise;
            }

            let segment = grade_percent(rise, b.distance - a.distance);
            if segment.abs() > steepest.abs() {
                steepest = segment;
            }
        }

        let overall_grade = match (self.points.first(), self.points.last()) {
            (Some(first), Some(last)) => grade_percent(
                last.elevation - first.elevation,
                last.distance - first.distance,
            ),
            _ => C::zero(),
        };

        GradeSummary {
            total_climb,
            total_descent,
            overall_grade,
            steepest_segment_grade: steepest,
        }
    }
}

/// Incline acceptance parameters for scoring a candidate route.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InclineParams<C: CoordFloat = f64> {
    /// Desired grade, in percent.
    pub target_grade: C,

    /// Fractional band around the target that a grade may sit in.
    pub overall_tolerance: C,

    /// Fraction of total distance allowed to fall outside the band.
    pub local_tolerance: C,
}

impl<C: CoordFloat> Default for InclineParams<C> {
    fn default() -> Self {
        Self {
            target_grade: C::from(2.0).unwrap(),
            overall_tolerance: C::from(0.10).unwrap(),
            local_tolerance: C::from(0.01).unwrap(),
        }
    }
}

/// Outcome of checking a profile against [`InclineParams`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeEvaluation<C: CoordFloat = f64> {
    /// Distance spent outside the acceptable band, in miles.
    pub out_of_band_distance: C,

    /// Overall grade of the profile, in percent.
    pub overall_grade: C,

    /// Whether the profile passes.
    pub accepted: bool,
}

impl<C: CoordFloat> InclineParams<C> {
    /// Checks each segment's grade and the overall grade against the
    /// band `target ± target * overall_tolerance`.
    ///
    /// A profile is rejected only when the overall grade is out of
    /// band *and* more than `local_tolerance` of its distance is out
    /// of band. Violating one check alone is survivable.
    pub fn evaluate(&self, profile: &Profile<C>) -> GradeEvaluation<C> {
        let min = self.target_grade * (C::one() - self.overall_tolerance);
        let max = self.target_grade * (C::one() + self.overall_tolerance);

        let mut out_of_band = C::zero();
        for (a, b) in profile.points.iter().tuple_windows() {
            let run = b.distance - a.distance;
            if run == C::zero() {
                continue;
            }
            let segment = grade_percent(b.elevation - a.elevation, run);
            if segment < min || segment > max {
                out_of_band = out_of_band + run;
            }
        }

        let overall = profile.grade_summary().overall_grade;
        let overall_out = overall < min || overall > max;
        let local_out = out_of_band > profile.distance * self.local_tolerance;

        GradeEvaluation {
            out_of_band_distance: out_of_band,
            overall_grade: overall,
            accepted: !(overall_out && local_out),
        }
    }
}

/// Signed grade, in percent, of a rise in feet over a run in miles.
/// Zero-length runs grade as zero rather than dividing by zero.
fn grade_percent<C: CoordFloat>(rise_ft: C, run_miles: C) -> C {
    if run_miles == C::zero() {
        return C::zero();
    }
    let run_ft = run_miles * C::from(FEET_PER_MILE).unwrap();
    rise_ft / run_ft * C::from(100.0).unwrap()
}

#[cfg(test)]
mod tests {
    use super::InclineParams;
    use crate::{Profile, ProfilePoint};
    use approx::assert_relative_eq;

    fn profile_of(points: &[(f64, f64)]) -> Profile {
        Profile {
            distance: points.last().map_or(0.0, |(d, _)| *d),
            points: points
                .iter()
                .map(|&(distance, elevation)| ProfilePoint {
                    distance,
                    elevation,
                })
                .collect(),
        }
    }

    #[test]
    fn test_summary_of_steady_climb() {
        let profile = profile_of(&[(0.0, 500.0), (1.0, 600.0)]);
        let summary = profile.grade_summary();

        assert_eq!(summary.total_climb, 100.0);
        assert_eq!(summary.total_descent, 0.0);
        assert_relative_eq!(summary.overall_grade, 100.0 / 5280.0 * 100.0);
        assert_relative_eq!(summary.steepest_segment_grade, summary.overall_grade);
    }

    #[test]
    fn test_summary_splits_climb_and_descent() {
        let profile = profile_of(&[(0.0, 500.0), (1.0, 650.0), (2.0, 550.0)]);
        let summary = profile.grade_summary();

        assert_eq!(summary.total_climb, 150.0);
        assert_eq!(summary.total_descent, 100.0);
        // Steepest by absolute value is the climb segment.
        assert_relative_eq!(summary.steepest_segment_grade, 150.0 / 5280.0 * 100.0);
    }

    #[test]
    fn test_summary_of_degenerate_profiles() {
        let summary = profile_of(&[]).grade_summary();
        assert_eq!(summary.total_climb, 0.0);
        assert_eq!(summary.overall_grade, 0.0);

        let summary = profile_of(&[(0.0, 500.0)]).grade_summary();
        assert_eq!(summary.overall_grade, 0.0);
        assert_eq!(summary.steepest_segment_grade, 0.0);
    }

    #[test]
    fn test_zero_length_segment_grades_as_zero() {
        let profile = profile_of(&[(0.0, 500.0), (0.0, 520.0), (1.0, 520.0)]);
        let summary = profile.grade_summary();
        assert_eq!(summary.steepest_segment_grade, 0.0);
    }

    #[test]
    fn test_evaluate_accepts_on_target_profile() {
        // 2% grade is 105.6 ft of rise per mile.
        let profile = profile_of(&[(0.0, 500.0), (1.0, 605.6), (2.0, 711.2)]);
        let evaluation = InclineParams::default().evaluate(&profile);

        assert!(evaluation.accepted);
        assert_eq!(evaluation.out_of_band_distance, 0.0);
        assert_relative_eq!(evaluation.overall_grade, 2.0, epsilon = 1e-9);
    }

    #[test]
    fn test_evaluate_rejects_when_both_checks_fail() {
        let profile = profile_of(&[(0.0, 500.0), (1.0, 500.0), (2.0, 500.0)]);
        let evaluation = InclineParams::default().evaluate(&profile);

        assert!(!evaluation.accepted);
        assert_eq!(evaluation.out_of_band_distance, 2.0);
    }

    #[test]
    fn test_evaluate_survives_single_check_failure() {
        // Every segment is out of band, but the overall grade lands on
        // target, so the route survives.
        let profile = profile_of(&[(0.0, 500.0), (1.0, 711.2), (2.0, 711.2)]);
        let evaluation = InclineParams::default().evaluate(&profile);

        assert!(evaluation.accepted);
        assert_eq!(evaluation.out_of_band_distance, 2.0);
        assert_relative_eq!(evaluation.overall_grade, 2.0, epsilon = 1e-9);
    }
}
