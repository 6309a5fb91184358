// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panel sizing constants.
//!
//! All lengths are in feet. Two reveal templates are in circulation and
//! they differ in reveal width, which changes both the stride between
//! reveals and the correction applied at the part edges. Callers pick the
//! template; nothing in this crate inspects a host version.

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// 3' 11 1/8": the stride that leaves a 4' panel between two 7/8" reveals.
pub const LEGACY_PANELLING_DISTANCE: f64 = 3.927083;

/// 1/16" taken off the stride for the wider 15/16" reveal.
pub const CURRENT_STRIDE_REDUCTION: f64 = 0.005208;

/// Edge correction for the 7/8" reveal template.
pub const LEGACY_REVEAL_WIDTH: f64 = 0.072917;

/// Edge correction for the 15/16" reveal template.
pub const CURRENT_REVEAL_WIDTH: f64 = 0.039063;

/// 15/16" allowance kept at the far edge so the last panel can be cut.
pub const REVEAL_EDGE_WIDTH: f64 = 0.078125;

pub const DEFAULT_MINIMUM_PANEL: f64 = 2.0;

pub const DEFAULT_MAXIMUM_PANEL: f64 = 4.0;

pub const DEFAULT_MAX_ITERATIONS: usize = 10_000;

/// Reveal template the part was modelled with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateGeneration {
    /// 7/8" reveals.
    Legacy,
    /// 15/16" reveals.
    #[default]
    Current,
}

impl std::str::FromStr for TemplateGeneration {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(TemplateGeneration::Legacy),
            "current" => Ok(TemplateGeneration::Current),
            other => Err(Error::InvalidPanelSpec(format!(
                "unknown reveal template '{other}'"
            ))),
        }
    }
}

/// Sizing rules for one panelization run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelSpec {
    /// Stride between consecutive reveals.
    pub panelling_distance: f64,
    /// Correction taken off the edge the walk starts from.
    pub lead_offset: f64,
    /// Correction taken off the edge the walk heads toward.
    pub trail_offset: f64,
    /// Allowance at the far edge when measuring what is left to panelize.
    pub reveal_edge_width: f64,
    /// Smallest acceptable final panel.
    pub minimum_panel: f64,
    /// Remaining lengths at or above this keep the walk going.
    pub maximum_panel: f64,
    /// Upper bound on stride iterations before giving up.
    pub max_iterations: usize,
}

impl PanelSpec {
    /// Constants for the 7/8" reveal template.
    pub fn legacy() -> Self {
        Self {
            panelling_distance: LEGACY_PANELLING_DISTANCE,
            lead_offset: 0.0,
            trail_offset: LEGACY_REVEAL_WIDTH,
            reveal_edge_width: REVEAL_EDGE_WIDTH,
            minimum_panel: DEFAULT_MINIMUM_PANEL,
            maximum_panel: DEFAULT_MAXIMUM_PANEL,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    /// Constants for the 15/16" reveal template.
    pub fn current() -> Self {
        Self {
            panelling_distance: LEGACY_PANELLING_DISTANCE - CURRENT_STRIDE_REDUCTION,
            lead_offset: CURRENT_REVEAL_WIDTH,
            trail_offset: CURRENT_REVEAL_WIDTH,
            reveal_edge_width: REVEAL_EDGE_WIDTH,
            minimum_panel: DEFAULT_MINIMUM_PANEL,
            maximum_panel: DEFAULT_MAXIMUM_PANEL,
            max_iterations: DEFAULT_MAX_ITERATIONS,
        }
    }

    pub fn for_template(template: TemplateGeneration) -> Self {
        match template {
            TemplateGeneration::Legacy => Self::legacy(),
            TemplateGeneration::Current => Self::current(),
        }
    }

    pub fn with_minimum_panel(mut self, minimum_panel: f64) -> Self {
        self.minimum_panel = minimum_panel;
        self
    }

    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Checks that the constants describe a walk that can make progress.
    pub fn validate(&self) -> Result<()> {
        let lengths = [
            ("panelling_distance", self.panelling_distance),
            ("lead_offset", self.lead_offset),
            ("trail_offset", self.trail_offset),
            ("reveal_edge_width", self.reveal_edge_width),
            ("minimum_panel", self.minimum_panel),
            ("maximum_panel", self.maximum_panel),
        ];
        for (name, value) in lengths {
            if !value.is_finite() {
                return Err(Error::InvalidPanelSpec(format!("{name} is not finite")));
            }
            if value < 0.0 {
                return Err(Error::InvalidPanelSpec(format!("{name} is negative ({value})")));
            }
        }
        if self.panelling_distance <= 0.0 {
            return Err(Error::InvalidPanelSpec(format!(
                "panelling_distance must be positive, got {}",
                self.panelling_distance
            )));
        }
        if self.minimum_panel <= 0.0 {
            return Err(Error::InvalidPanelSpec(format!(
                "minimum_panel must be positive, got {}",
                self.minimum_panel
            )));
        }
        if self.minimum_panel > self.panelling_distance {
            return Err(Error::InvalidPanelSpec(format!(
                "minimum_panel {} exceeds panelling_distance {}",
                self.minimum_panel, self.panelling_distance
            )));
        }
        if self.maximum_panel < self.minimum_panel {
            return Err(Error::InvalidPanelSpec(format!(
                "maximum_panel {} is below minimum_panel {}",
                self.maximum_panel, self.minimum_panel
            )));
        }
        if self.max_iterations == 0 {
            return Err(Error::InvalidPanelSpec("max_iterations must be at least 1".into()));
        }
        Ok(())
    }
}

impl Default for PanelSpec {
    fn default() -> Self {
        Self::current()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn presets_differ_in_stride_and_edges() {
        let legacy = PanelSpec::legacy();
        let current = PanelSpec::current();
        assert_relative_eq!(legacy.panelling_distance, 3.927083);
        assert_relative_eq!(current.panelling_distance, 3.921875, epsilon = 1e-9);
        assert_eq!(legacy.lead_offset, 0.0);
        assert_eq!(current.lead_offset, current.trail_offset);
        assert!(legacy.validate().is_ok());
        assert!(current.validate().is_ok());
    }

    #[test]
    fn template_selects_preset() {
        assert_eq!(PanelSpec::for_template(TemplateGeneration::Legacy), PanelSpec::legacy());
        assert_eq!(PanelSpec::default(), PanelSpec::current());
        assert_eq!("Legacy".parse::<TemplateGeneration>(), Ok(TemplateGeneration::Legacy));
        assert!("2019".parse::<TemplateGeneration>().is_err());
    }

    #[test]
    fn rejects_non_positive_stride() {
        let mut spec = PanelSpec::legacy();
        spec.panelling_distance = 0.0;
        assert!(matches!(spec.validate(), Err(Error::InvalidPanelSpec(_))));
        spec.panelling_distance = f64::INFINITY;
        assert!(spec.validate().is_err());
    }

    #[test]
    fn rejects_inverted_panel_bounds() {
        let spec = PanelSpec::current().with_minimum_panel(5.0);
        assert!(spec.validate().is_err());
        assert!(PanelSpec::current().with_minimum_panel(0.0).validate().is_err());
        assert!(PanelSpec::current().with_max_iterations(0).validate().is_err());
    }

    #[test]
    fn rejects_minimum_panel_beyond_stride() {
        let spec = PanelSpec::current().with_minimum_panel(3.95);
        assert!(matches!(spec.validate(), Err(Error::InvalidPanelSpec(_))));
        let stride = PanelSpec::current().panelling_distance;
        assert!(PanelSpec::current().with_minimum_panel(stride).validate().is_ok());
    }
}
