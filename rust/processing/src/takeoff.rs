// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel takeoff: status of parts and quantity/cost summaries of panels.

use reveal_lite_geometry::PanelSpec;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::part::{LayerRole, PartGeometry};

/// Where a part stands relative to the panel size limits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelStatus {
    /// Shorter than a minimum panel.
    Underpanelized,
    /// Within the panel size limits.
    Panelized,
    /// Longer than a maximum panel, still needs reveals.
    Unpanelized,
}

impl PanelStatus {
    /// Classifies a part length, rounded to hundredths of a foot, against
    /// the panel limits of `spec`.
    pub fn classify(length: f64, spec: &PanelSpec) -> Self {
        let length = (length * 100.0).round() / 100.0;
        if length > spec.maximum_panel {
            PanelStatus::Unpanelized
        } else if length < spec.minimum_panel {
            PanelStatus::Underpanelized
        } else {
            PanelStatus::Panelized
        }
    }
}

/// Part ids grouped by status. Core parts are left out.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusGroups {
    pub underpanelized: Vec<u64>,
    pub panelized: Vec<u64>,
    pub unpanelized: Vec<u64>,
}

pub fn classify_parts(parts: &[PartGeometry], spec: &PanelSpec) -> StatusGroups {
    let mut groups = StatusGroups::default();
    for part in parts.iter().filter(|p| p.face().role != LayerRole::Core) {
        match PanelStatus::classify(part.length, spec) {
            PanelStatus::Underpanelized => groups.underpanelized.push(part.id),
            PanelStatus::Panelized => groups.panelized.push(part.id),
            PanelStatus::Unpanelized => groups.unpanelized.push(part.id),
        }
    }
    groups
}

/// Measured panel, as reported by the host after reveals are placed.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelRecord {
    pub part_id: u64,
    pub height: f64,
    pub length: f64,
    /// Face area, net of any openings.
    pub area: f64,
}

impl PanelRecord {
    /// Type label grouping panels of equal size.
    pub fn panel_type(&self) -> String {
        format!("{:.2} x {:.2}", self.height, self.length)
    }
}

/// Aggregate of all panels sharing a type.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TakeoffRow {
    pub panel_type: String,
    pub height: f64,
    pub length: f64,
    pub count: usize,
    pub total_area: f64,
    pub cost_per_sf: f64,
    pub total_cost: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TakeoffReport {
    /// One row per panel type, ordered by type label.
    pub rows: Vec<TakeoffRow>,
    pub total_panels: usize,
    pub total_area: f64,
    pub total_cost: f64,
}

/// Summarizes panels by type with area and cost totals.
///
/// A type's area is taken from the first panel of that type seen.
pub fn takeoff(panels: &[PanelRecord], cost_per_sf: f64) -> TakeoffReport {
    let mut by_type: FxHashMap<String, (PanelRecord, usize)> = FxHashMap::default();
    for panel in panels {
        by_type
            .entry(panel.panel_type())
            .and_modify(|(_, count)| *count += 1)
            .or_insert((*panel, 1));
    }

    let mut rows: Vec<TakeoffRow> = by_type
        .into_iter()
        .map(|(panel_type, (first, count))| {
            let total_area = count as f64 * first.area;
            TakeoffRow {
                panel_type,
                height: first.height,
                length: first.length,
                count,
                total_area,
                cost_per_sf,
                total_cost: total_area * cost_per_sf,
            }
        })
        .collect();
    rows.sort_by(|a, b| a.panel_type.cmp(&b.panel_type));

    TakeoffReport {
        total_panels: rows.iter().map(|r| r.count).sum(),
        total_area: rows.iter().map(|r| r.total_area).sum(),
        total_cost: rows.iter().map(|r| r.total_cost).sum(),
        rows,
    }
}
