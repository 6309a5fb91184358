// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for reveal geometry.

use thiserror::Error;

/// Result type for geometry operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while laying out reveals along a part
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The part has no usable length.
    #[error("degenerate extent: left edge {left} is not beyond right edge {right}")]
    DegenerateExtent { left: f64, right: f64 },

    #[error("invalid panel spec: {0}")]
    InvalidPanelSpec(String),

    /// The stride loop did not reach a stopping condition.
    #[error("partition did not terminate after {iterations} iterations")]
    NonTerminatingPartition { iterations: usize },

    /// An out-range pushed a cut back onto (or behind) the previous cut.
    #[error("cut at {cut} does not advance past previous position {previous}")]
    CutRegressed { previous: f64, cut: f64 },

    /// A re-split reveal landed outside the part it was meant to split.
    #[error("cut at {cut} lies outside the part ({right}..={left})")]
    CutOutsideExtent { cut: f64, left: f64, right: f64 },

    /// The wall path curve runs along neither the x nor the y axis.
    #[error("wall direction ({x}, {y}) is not aligned with the x or y axis")]
    NonOrthogonalWall { x: f64, y: f64 },

    #[error("invalid opening: {0}")]
    InvalidOpening(String),

    /// A coordinate probe could not place a reference cut on the part.
    #[error("coordinate origin not found after {attempts} attempts")]
    OriginNotFound { attempts: usize },
}
