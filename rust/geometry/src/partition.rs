// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel partitioning.
//!
//! Reveals are placed greedily from one edge of the part at a fixed stride,
//! each candidate moved out of any out-range it lands in. The walk stops once
//! what remains is smaller than a maximum panel. If what remains is also
//! smaller than a minimum panel, the last reveal is withdrawn and the last two
//! panels are re-split so the final one is exactly a minimum panel.

use crate::error::{Error, Result};
use crate::interval::{Direction, Extent, OutRange};
use crate::out_range::resolve;
use crate::panel_spec::PanelSpec;

/// Tolerance for treating an extent as exactly one stride long.
const LENGTH_EPSILON: f64 = 1e-9;

/// Computes reveal indexes that split `extent` into panels.
///
/// Indexes are returned in placement order, moving away from the starting
/// edge. An extent exactly one stride long gets the reveal from
/// [`single_panel`]; a shorter one is already a single panel and gets none.
///
/// The final panel is measured against `reveal_edge_width` and then the far
/// edge loses `trail_offset`, so it can come out at
/// `minimum_panel - reveal_edge_width + trail_offset`, slightly under
/// `minimum_panel` for both presets.
pub fn partition(
    extent: &Extent,
    out_ranges: &[OutRange],
    direction: Direction,
    spec: &PanelSpec,
) -> Result<Vec<f64>> {
    spec.validate()?;
    extent.validate()?;

    if extent.length() <= spec.panelling_distance + LENGTH_EPSILON {
        return single_panel_layout(extent, direction, spec);
    }

    let step = direction.step();
    let start = direction.start_edge(extent) + step * spec.lead_offset;
    let far = direction.far_edge(extent) - step * spec.trail_offset;

    // Distance from `index` to the far edge, measured along the walk.
    let remaining = |index: f64| (far - index) * step;

    let mut reveal_indexes: Vec<f64> = Vec::new();
    let mut cursor = start;

    for _ in 0..spec.max_iterations {
        let candidate = cursor + step * spec.panelling_distance;
        let reveal = resolve(candidate, out_ranges, direction);
        if (reveal - cursor) * step <= 0.0 {
            return Err(Error::CutRegressed {
                previous: cursor,
                cut: reveal,
            });
        }

        cursor = reveal;
        reveal_indexes.push(reveal);

        let rem_length = remaining(cursor) + spec.reveal_edge_width;
        if rem_length >= spec.maximum_panel {
            continue;
        }
        if rem_length >= spec.minimum_panel {
            return Ok(reveal_indexes);
        }

        // Too little left for a final panel: withdraw the last reveal and
        // re-split what it leaves behind.
        reveal_indexes.pop();
        cursor = reveal_indexes.last().copied().unwrap_or(start);

        let left_behind = remaining(cursor);
        let rem = left_behind - (spec.minimum_panel - spec.reveal_edge_width);
        let reveal = cursor + step * rem;
        if rem <= 0.0 {
            return Err(Error::CutRegressed {
                previous: cursor,
                cut: reveal,
            });
        }
        if !extent.contains(reveal) {
            return Err(Error::CutOutsideExtent {
                cut: reveal,
                left: extent.left,
                right: extent.right,
            });
        }
        reveal_indexes.push(reveal);
        return Ok(reveal_indexes);
    }

    Err(Error::NonTerminatingPartition {
        iterations: spec.max_iterations,
    })
}

/// Reveal index for a part that yields one full panel.
///
/// The reveal sits one stride in from the starting edge.
pub fn single_panel(extent: &Extent, direction: Direction, spec: &PanelSpec) -> f64 {
    direction.start_edge(extent) + direction.step() * spec.panelling_distance
}

/// Reveals for a part laid out as one panel.
///
/// Parts at least one stride long get the [`single_panel`] reveal. Shorter
/// parts would put it outside the part, so they get no reveal.
pub fn single_panel_layout(
    extent: &Extent,
    direction: Direction,
    spec: &PanelSpec,
) -> Result<Vec<f64>> {
    spec.validate()?;
    extent.validate()?;

    if extent.length() < spec.panelling_distance - LENGTH_EPSILON {
        return Ok(Vec::new());
    }
    let reveal = single_panel(extent, direction, spec).clamp(extent.right, extent.left);
    Ok(vec![reveal])
}

/// Exterior-only layout that splits the leftover stride in half.
///
/// Places `floor(L / d)` reveals at the full stride `d` from the left edge;
/// when the length is not a whole number of strides the last full stride is
/// replaced with a half stride. Kept for comparing layouts against parts
/// panelized before the minimum-panel rule existed.
pub fn half_panel_layout(extent: &Extent, spec: &PanelSpec) -> Result<Vec<f64>> {
    spec.validate()?;
    extent.validate()?;

    let panel_size = spec.panelling_distance;
    let part_length = extent.length();
    let complete_panels = (part_length / panel_size).floor() as usize;
    let incomplete_length = part_length % panel_size;

    let mut left_edge = extent.left;
    let mut reveal_indexes = Vec::with_capacity(complete_panels);

    if incomplete_length == 0.0 {
        for _ in 0..complete_panels {
            left_edge -= panel_size;
            reveal_indexes.push(left_edge);
        }
    } else {
        for _ in 0..complete_panels.saturating_sub(1) {
            left_edge -= panel_size;
            reveal_indexes.push(left_edge);
        }
        left_edge -= panel_size / 2.0;
        reveal_indexes.push(left_edge);
    }

    Ok(reveal_indexes)
}
