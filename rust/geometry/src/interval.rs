// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! One-dimensional interval model along a wall's reference curve.
//!
//! Every position is an *axis index*: the distance from coordinate-0 along
//! the wall path. The right end of the path sits at the low end of the
//! index, so a part always spans `right..=left`.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Span of a part along the axis index, `left >= right`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extent {
    pub left: f64,
    pub right: f64,
}

impl Extent {
    /// Creates an extent from two edge indexes in either order.
    pub fn new(a: f64, b: f64) -> Self {
        if a >= b {
            Self { left: a, right: b }
        } else {
            Self { left: b, right: a }
        }
    }

    /// Derives the part edges from its centre index and length.
    ///
    /// The smaller index becomes the right edge since coordinate-0 lies at
    /// the right end of the wall's path curve.
    pub fn from_centre(centre_index: f64, length: f64) -> Self {
        let half_length = length / 2.0;
        Self::new(centre_index + half_length, centre_index - half_length)
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.left - self.right
    }

    #[inline]
    pub fn contains(&self, index: f64) -> bool {
        self.right <= index && index <= self.left
    }

    /// Rejects extents that cannot be subdivided.
    pub fn validate(&self) -> Result<()> {
        if !self.left.is_finite() || !self.right.is_finite() || self.length() <= 0.0 {
            return Err(Error::DegenerateExtent {
                left: self.left,
                right: self.right,
            });
        }
        Ok(())
    }

    /// Reflects the extent about `axis`.
    pub fn mirrored(&self, axis: f64) -> Self {
        Self::new(2.0 * axis - self.right, 2.0 * axis - self.left)
    }
}

/// Closed sub-interval of the axis index where no reveal may be placed.
///
/// The bounds are stored as given; [`OutRange::bounds`] sorts them on read.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OutRange {
    pub a: f64,
    pub b: f64,
}

impl OutRange {
    pub fn new(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    /// Builds the range `centre - half_width ..= centre + half_width`.
    pub fn around(centre: f64, half_width: f64) -> Self {
        Self::new(centre - half_width, centre + half_width)
    }

    /// Returns `(lo, hi)` with `lo <= hi`.
    #[inline]
    pub fn bounds(&self) -> (f64, f64) {
        if self.a <= self.b {
            (self.a, self.b)
        } else {
            (self.b, self.a)
        }
    }

    #[inline]
    pub fn contains(&self, index: f64) -> bool {
        let (lo, hi) = self.bounds();
        lo <= index && index <= hi
    }

    #[inline]
    pub fn strictly_contains(&self, index: f64) -> bool {
        let (lo, hi) = self.bounds();
        lo < index && index < hi
    }

    pub fn mirrored(&self, axis: f64) -> Self {
        Self::new(2.0 * axis - self.b, 2.0 * axis - self.a)
    }
}

/// Traversal direction of the reveal walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Exterior face: starts at the left edge and walks toward lower indexes.
    Exterior,
    /// Interior face: starts at the right edge and walks toward higher indexes.
    Interior,
}

impl Direction {
    pub fn from_exterior(exterior: bool) -> Self {
        if exterior {
            Direction::Exterior
        } else {
            Direction::Interior
        }
    }

    #[inline]
    pub fn is_exterior(self) -> bool {
        matches!(self, Direction::Exterior)
    }

    /// The opposite traversal.
    pub fn switched(self) -> Self {
        match self {
            Direction::Exterior => Direction::Interior,
            Direction::Interior => Direction::Exterior,
        }
    }

    /// Sign of a forward step along the axis index.
    #[inline]
    pub(crate) fn step(self) -> f64 {
        match self {
            Direction::Exterior => -1.0,
            Direction::Interior => 1.0,
        }
    }

    /// Edge the walk starts from.
    #[inline]
    pub(crate) fn start_edge(self, extent: &Extent) -> f64 {
        match self {
            Direction::Exterior => extent.left,
            Direction::Interior => extent.right,
        }
    }

    /// Edge the walk heads toward.
    #[inline]
    pub(crate) fn far_edge(self, extent: &Extent) -> f64 {
        match self {
            Direction::Exterior => extent.right,
            Direction::Interior => extent.left,
        }
    }
}

/// Lengths of the panels produced by cutting `extent` at `cuts`.
///
/// Panels are listed from the left edge to the right edge regardless of the
/// order the cuts were placed in. Cuts outside the extent are clamped to it.
pub fn panel_lengths(extent: &Extent, cuts: &[f64]) -> Vec<f64> {
    let mut boundaries: Vec<f64> = cuts
        .iter()
        .map(|cut| cut.clamp(extent.right, extent.left))
        .collect();
    boundaries.sort_by(|a, b| b.total_cmp(a));

    let mut lengths = Vec::with_capacity(boundaries.len() + 1);
    let mut previous = extent.left;
    for boundary in boundaries {
        lengths.push(previous - boundary);
        previous = boundary;
    }
    lengths.push(previous - extent.right);
    lengths
}
