// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Coordinate helpers for locating parts and openings on the axis index.
//!
//! The host does not expose where coordinate-0 of a wall sweep lies, so an
//! adapter finds it by probing: it places reference cuts at increasing
//! distances until one lands on the part, measures them, and removes them.
//! That procedure lives behind [`CoordinateProbe`]; this module only holds
//! the arithmetic around it.

use nalgebra::{Point3, Vector3};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Tolerance when checking that a wall direction is axis-aligned.
const AXIS_EPSILON: f64 = 1e-9;

/// First distance a probe cut is tried at.
pub const PROBE_START: f64 = 3.0;

/// Increment between probe attempts.
pub const PROBE_STEP: f64 = 3.0;

/// Probing gives up once the distance exceeds this.
pub const PROBE_LIMIT: f64 = 100.0;

/// Offset of the second probe cut (2").
pub const PROBE_NUDGE: f64 = 0.166667;

/// Plane axis a wall's path curve runs along.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// Determines the plane axis from the wall's path curve direction.
    ///
    /// Only orthogonal walls can be panelized; anything else is reported as
    /// [`Error::NonOrthogonalWall`].
    pub fn from_direction(direction: &Vector3<f64>) -> Result<Self> {
        if (direction.x.abs() - 1.0).abs() <= AXIS_EPSILON {
            Ok(Axis::X)
        } else if (direction.y.abs() - 1.0).abs() <= AXIS_EPSILON {
            Ok(Axis::Y)
        } else {
            Err(Error::NonOrthogonalWall {
                x: direction.x,
                y: direction.y,
            })
        }
    }

    /// Picks the coordinate of `point` along this axis.
    #[inline]
    pub fn plane_coordinate(self, point: &Point3<f64>) -> f64 {
        match self {
            Axis::X => point.x,
            Axis::Y => point.y,
        }
    }
}

/// Recovers the coordinate-0 plane coordinate from two probe cuts.
///
/// `first` was placed `probe_distance` from coordinate-0 and `second` a
/// nudge further. Whichever way `second` moved tells which way the index
/// grows, and coordinate-0 lies `probe_distance` back the other way.
pub fn origin_from_probe_cuts(first: f64, second: f64, probe_distance: f64) -> f64 {
    if second < first {
        first + probe_distance
    } else {
        first - probe_distance
    }
}

/// Host-side discovery of the coordinate-0 origin for a part.
///
/// Implementations typically place and delete reference cuts in the host
/// document. Tests substitute a fixed value.
pub trait CoordinateProbe {
    /// Returns the plane coordinate of coordinate-0.
    fn resolve_origin_index(&mut self) -> Result<f64>;
}

impl<F> CoordinateProbe for F
where
    F: FnMut() -> Result<f64>,
{
    fn resolve_origin_index(&mut self) -> Result<f64> {
        self()
    }
}

/// Distances at which successive probe cuts are attempted.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProbeSchedule {
    pub start: f64,
    pub step: f64,
    pub limit: f64,
}

impl ProbeSchedule {
    pub fn distances(&self) -> impl Iterator<Item = f64> {
        let ProbeSchedule { start, step, limit } = *self;
        (0..)
            .map(move |attempt| start + step * attempt as f64)
            .take_while(move |distance| *distance <= limit)
    }

    /// Number of attempts before the schedule is exhausted.
    pub fn attempts(&self) -> usize {
        self.distances().count()
    }

    /// Runs `try_distance` over the schedule until it yields a plane
    /// coordinate, returning the distance used alongside it.
    pub fn search<F>(&self, mut try_distance: F) -> Result<(f64, f64)>
    where
        F: FnMut(f64) -> Option<f64>,
    {
        for distance in self.distances() {
            if let Some(coordinate) = try_distance(distance) {
                return Ok((distance, coordinate));
            }
        }
        Err(Error::OriginNotFound {
            attempts: self.attempts(),
        })
    }
}

impl Default for ProbeSchedule {
    fn default() -> Self {
        Self {
            start: PROBE_START,
            step: PROBE_STEP,
            limit: PROBE_LIMIT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn axis_from_direction() {
        assert_eq!(Axis::from_direction(&Vector3::new(1.0, 0.0, 0.0)), Ok(Axis::X));
        assert_eq!(Axis::from_direction(&Vector3::new(-1.0, 0.0, 0.0)), Ok(Axis::X));
        assert_eq!(Axis::from_direction(&Vector3::new(0.0, -1.0, 0.0)), Ok(Axis::Y));
    }

    #[test]
    fn diagonal_wall_is_rejected() {
        let s = std::f64::consts::FRAC_1_SQRT_2;
        let result = Axis::from_direction(&Vector3::new(s, s, 0.0));
        assert!(matches!(result, Err(Error::NonOrthogonalWall { .. })));
    }

    #[test]
    fn plane_coordinate_picks_axis() {
        let point = Point3::new(4.0, 9.0, 1.0);
        assert_eq!(Axis::X.plane_coordinate(&point), 4.0);
        assert_eq!(Axis::Y.plane_coordinate(&point), 9.0);
    }

    #[test]
    fn origin_follows_probe_direction() {
        // Index grows with the coordinate: origin lies below the first cut.
        assert_relative_eq!(origin_from_probe_cuts(13.0, 13.17, 3.0), 10.0);
        // Index grows against the coordinate: origin lies above it.
        assert_relative_eq!(origin_from_probe_cuts(7.0, 6.83, 3.0), 10.0);
    }

    #[test]
    fn default_schedule_matches_probe_limits() {
        let schedule = ProbeSchedule::default();
        let distances: Vec<f64> = schedule.distances().collect();
        assert_eq!(distances.first(), Some(&3.0));
        assert_eq!(distances.last(), Some(&99.0));
        assert_eq!(schedule.attempts(), 33);
    }

    #[test]
    fn search_returns_first_hit() {
        let schedule = ProbeSchedule::default();
        let hit = schedule
            .search(|d| if d >= 9.0 { Some(d * 2.0) } else { None })
            .unwrap();
        assert_eq!(hit, (9.0, 18.0));

        let miss = schedule.search(|_| None);
        assert_eq!(miss, Err(Error::OriginNotFound { attempts: 33 }));
    }

    #[test]
    fn closures_are_probes() {
        let mut probe = || -> Result<f64> { Ok(12.5) };
        assert_eq!(probe.resolve_origin_index(), Ok(12.5));
    }
}
