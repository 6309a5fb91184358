// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Opening (window/door) geometry on the axis index.
//!
//! Each opening contributes two out-ranges, one around each of its edges,
//! so reveals keep a displacement distance away from the opening jambs.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::interval::OutRange;

/// Amount taken off the half-width when a displacement has to be clamped.
pub const DISPLACEMENT_CLEARANCE: f64 = 0.5;

/// Default displacement distance from opening edges.
pub const DEFAULT_DISPLACEMENT: f64 = 0.5;

/// An opening already mapped into axis-index space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Opening {
    pub centre_index: f64,
    pub width: f64,
}

impl Opening {
    pub fn new(centre_index: f64, width: f64) -> Self {
        Self { centre_index, width }
    }

    /// Picks the nominal width, falling back to the rough width when the
    /// family reports a nominal width of zero.
    pub fn effective_width(width: f64, rough_width: Option<f64>) -> f64 {
        if width == 0.0 {
            rough_width.unwrap_or(width)
        } else {
            width
        }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.centre_index.is_finite() {
            return Err(Error::InvalidOpening(format!(
                "centre index {} is not finite",
                self.centre_index
            )));
        }
        if !self.width.is_finite() || self.width <= 0.0 {
            return Err(Error::InvalidOpening(format!(
                "width must be positive, got {}",
                self.width
            )));
        }
        Ok(())
    }

    /// Returns `(left_edge, right_edge)` indexes.
    pub fn edge_indexes(&self) -> (f64, f64) {
        opening_edge_indexes(self.centre_index, self.width)
    }

    pub fn out_range(&self, displacement: f64) -> OpeningOutRange {
        opening_out_range(self.centre_index, self.width, displacement)
    }
}

/// A displacement that had to be reduced to stay clear of the opening centre.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DisplacementWarning {
    pub requested: f64,
    pub applied: f64,
    pub opening_width: f64,
}

impl std::fmt::Display for DisplacementWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "displacement {} reaches past half of the {} wide opening, using {}",
            self.requested, self.opening_width, self.applied
        )
    }
}

/// Displacement after clamping against the opening half-width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Displacement {
    pub value: f64,
    pub warning: Option<DisplacementWarning>,
}

/// Clamps `displacement` so an out-range never crosses the opening centre.
///
/// A displacement at or beyond half the opening width is replaced with the
/// half-width less [`DISPLACEMENT_CLEARANCE`]. Openings narrow enough that
/// this would leave nothing fall back to a quarter of their width.
pub fn check_displacement(displacement: f64, opening_width: f64) -> Displacement {
    let limit = opening_width / 2.0;
    if displacement < limit {
        return Displacement {
            value: displacement,
            warning: None,
        };
    }

    let mut applied = limit - DISPLACEMENT_CLEARANCE;
    if applied <= 0.0 {
        applied = opening_width / 4.0;
    }
    Displacement {
        value: applied,
        warning: Some(DisplacementWarning {
            requested: displacement,
            applied,
            opening_width,
        }),
    }
}

/// Maps a plane coordinate onto the axis index.
///
/// The origin and the coordinate must lie on the same plane axis; resolving
/// that axis is the host adapter's job.
#[inline]
pub fn opening_centre_index(world_coordinate: f64, origin_coordinate: f64) -> f64 {
    (world_coordinate - origin_coordinate).abs()
}

/// Returns `(left_edge, right_edge)` indexes of an opening.
#[inline]
pub fn opening_edge_indexes(centre_index: f64, width: f64) -> (f64, f64) {
    let half = width / 2.0;
    (centre_index + half, centre_index - half)
}

/// Out-ranges around both edges of one opening.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningOutRange {
    pub left: OutRange,
    pub right: OutRange,
    pub warning: Option<DisplacementWarning>,
}

pub fn opening_out_range(centre_index: f64, width: f64, displacement: f64) -> OpeningOutRange {
    let (left_edge, right_edge) = opening_edge_indexes(centre_index, width);
    let displacement = check_displacement(displacement, width);

    OpeningOutRange {
        left: OutRange::around(left_edge, displacement.value),
        right: OutRange::around(right_edge, displacement.value),
        warning: displacement.warning,
    }
}

/// Out-ranges for a group of openings, plus any clamping warnings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutRangeSet {
    pub ranges: Vec<OutRange>,
    pub warnings: Vec<DisplacementWarning>,
}

impl OutRangeSet {
    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    /// Appends another set, keeping its ranges after the existing ones.
    pub fn extend(&mut self, other: OutRangeSet) {
        self.ranges.extend(other.ranges);
        self.warnings.extend(other.warnings);
    }
}

/// Builds the out-ranges of every opening, left edge range first.
pub fn collect_out_ranges(openings: &[Opening], displacement: f64) -> Result<OutRangeSet> {
    let mut set = OutRangeSet {
        ranges: Vec::with_capacity(openings.len() * 2),
        warnings: Vec::new(),
    };
    for opening in openings {
        opening.validate()?;
        let out_range = opening.out_range(displacement);
        set.ranges.push(out_range.left);
        set.ranges.push(out_range.right);
        if let Some(warning) = out_range.warning {
            set.warnings.push(warning);
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn centre_index_is_distance_from_origin() {
        assert_relative_eq!(opening_centre_index(42.0, 30.0), 12.0);
        assert_relative_eq!(opening_centre_index(18.0, 30.0), 12.0);
    }

    #[test]
    fn edge_indexes_straddle_centre() {
        let (left, right) = opening_edge_indexes(10.0, 4.0);
        assert_relative_eq!(left, 12.0);
        assert_relative_eq!(right, 8.0);
    }

    #[test]
    fn out_range_around_each_edge() {
        let out_range = opening_out_range(10.0, 4.0, 0.5);
        assert_eq!(out_range.left.bounds(), (11.5, 12.5));
        assert_eq!(out_range.right.bounds(), (7.5, 8.5));
        assert!(out_range.warning.is_none());
    }

    #[test]
    fn oversized_displacement_is_clamped_with_warning() {
        let out_range = opening_out_range(10.0, 4.0, 3.0);
        let warning = out_range.warning.expect("displacement should be clamped");
        assert_relative_eq!(warning.applied, 1.5);
        assert_relative_eq!(warning.requested, 3.0);
        assert_eq!(out_range.left.bounds(), (10.5, 13.5));
        assert_eq!(out_range.right.bounds(), (6.5, 9.5));
    }

    #[test]
    fn displacement_at_exact_half_width_is_clamped() {
        let displacement = check_displacement(2.0, 4.0);
        assert_relative_eq!(displacement.value, 1.5);
        assert!(displacement.warning.is_some());
    }

    #[test]
    fn narrow_opening_keeps_a_positive_displacement() {
        let displacement = check_displacement(0.5, 1.0);
        assert_relative_eq!(displacement.value, 0.25);
        assert!(displacement.warning.is_some());
    }

    #[test]
    fn rough_width_fallback() {
        assert_eq!(Opening::effective_width(0.0, Some(3.5)), 3.5);
        assert_eq!(Opening::effective_width(3.0, Some(3.5)), 3.0);
        assert_eq!(Opening::effective_width(0.0, None), 0.0);
    }

    #[test]
    fn collects_ranges_in_opening_order() {
        let openings = [Opening::new(10.0, 4.0), Opening::new(20.0, 2.0)];
        let set = collect_out_ranges(&openings, 1.0).unwrap();
        assert_eq!(set.ranges.len(), 4);
        assert_eq!(set.ranges[0].bounds(), (11.0, 13.0));
        assert_eq!(set.ranges[1].bounds(), (7.0, 9.0));
        // 1.0 is half of the 2' opening, clamped to 0.5
        assert_eq!(set.ranges[2].bounds(), (20.5, 21.5));
        assert_eq!(set.warnings.len(), 1);
    }

    #[test]
    fn rejects_zero_width_opening() {
        let result = collect_out_ranges(&[Opening::new(10.0, 0.0)], 0.5);
        assert!(matches!(result, Err(Error::InvalidOpening(_))));
    }
}
