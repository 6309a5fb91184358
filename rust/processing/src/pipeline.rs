// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Single-part panelization pipeline.
//!
//! Takes a part and its hosted openings in world coordinates, maps them onto
//! the wall's axis index, and produces the reveal indexes the host adapter
//! should materialize.

use reveal_lite_geometry::{
    collect_out_ranges, opening_centre_index, panel_lengths, partition, single_panel_layout, Axis,
    CoordinateProbe, Direction, DisplacementWarning, Extent, Opening, OutRange,
};
use serde::{Deserialize, Serialize};

use crate::config::{LayoutMode, PanelizeOptions};
use crate::error::{Error, Result};
use crate::part::{doors_then_windows, switch_direction, Lap, OpeningRecord, PartGeometry, WallSide};

/// Reveal layout for an extent, independent of any host element.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutPlan {
    pub extent: Extent,
    pub direction: Direction,
    /// Reveal indexes in placement order.
    pub reveal_indexes: Vec<f64>,
    pub out_ranges: Vec<OutRange>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<DisplacementWarning>,
    /// Panel lengths from the left edge to the right edge.
    pub panels: Vec<f64>,
}

/// Reveal layout for a host part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PanelLayout {
    pub part_id: u64,
    pub side: WallSide,
    pub lap: Lap,
    #[serde(flatten)]
    pub plan: LayoutPlan,
}

impl LayoutPlan {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Plans reveals for an extent whose openings are already on the axis index.
pub fn plan_layout(
    extent: Extent,
    openings: &[Opening],
    direction: Direction,
    options: &PanelizeOptions,
) -> Result<LayoutPlan> {
    let spec = options.panel_spec();
    let out_ranges = collect_out_ranges(openings, options.displacement)?;
    for warning in &out_ranges.warnings {
        tracing::warn!(
            requested = warning.requested,
            applied = warning.applied,
            opening_width = warning.opening_width,
            "Displacement distance is beyond the half-width of the opening"
        );
    }

    let reveal_indexes = match options.mode {
        LayoutMode::Multiple => partition(&extent, &out_ranges.ranges, direction, &spec)?,
        LayoutMode::Single => single_panel_layout(&extent, direction, &spec)?,
    };
    if reveal_indexes.is_empty() {
        tracing::debug!(length = extent.length(), "Part is shorter than one stride, no reveal placed");
    }
    let panels = panel_lengths(&extent, &reveal_indexes);

    tracing::debug!(
        left = extent.left,
        right = extent.right,
        ?direction,
        out_ranges = out_ranges.ranges.len(),
        reveals = reveal_indexes.len(),
        "Planned reveal layout"
    );

    Ok(LayoutPlan {
        extent,
        direction,
        reveal_indexes,
        out_ranges: out_ranges.ranges,
        warnings: out_ranges.warnings,
        panels,
    })
}

/// Panelizes one part.
///
/// The probe supplies the plane coordinate of coordinate-0 for the part's
/// wall. Core layers are rejected with [`Error::UnsupportedLayer`].
pub fn panelize_part<P>(
    part: &PartGeometry,
    openings: &[OpeningRecord],
    probe: &mut P,
    options: &PanelizeOptions,
) -> Result<PanelLayout>
where
    P: CoordinateProbe + ?Sized,
{
    let face = part.face();
    let base_direction = face.direction().ok_or(Error::UnsupportedLayer {
        layer_index: part.layer_index,
    })?;

    tracing::info!(part_id = part.id, role = ?face.role, length = part.length, "Panelizing part");

    let axis = Axis::from_direction(&part.wall_direction)?;
    let origin = probe.resolve_origin_index()?;

    let centre_index = opening_centre_index(axis.plane_coordinate(&part.centre), origin);
    let extent = Extent::from_centre(centre_index, part.length);

    let openings: Vec<Opening> = doors_then_windows(openings)
        .into_iter()
        .map(|record| {
            Opening::new(
                opening_centre_index(axis.plane_coordinate(&record.location), origin),
                record.effective_width(),
            )
        })
        .collect();

    let direction = switch_direction(base_direction, options.switch_direction);
    let plan = plan_layout(extent, &openings, direction, options)?;

    tracing::info!(part_id = part.id, reveals = plan.reveal_indexes.len(), "Part panelized");

    Ok(PanelLayout {
        part_id: part.id,
        side: face.side,
        lap: face.lap,
        plan,
    })
}

/// A probe for a wall whose coordinate-0 is already known.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedOrigin(pub f64);

impl CoordinateProbe for FixedOrigin {
    fn resolve_origin_index(&mut self) -> reveal_lite_geometry::Result<f64> {
        Ok(self.0)
    }
}
