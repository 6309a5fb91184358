// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Panelization options, loaded from environment variables.

use std::str::FromStr;

use reveal_lite_geometry::fenestration::DEFAULT_DISPLACEMENT;
use reveal_lite_geometry::panel_spec::DEFAULT_MINIMUM_PANEL;
use reveal_lite_geometry::{PanelSpec, TemplateGeneration};
use serde::{Deserialize, Serialize};

/// Whether a part is split into as many panels as fit or just one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutMode {
    #[default]
    Multiple,
    Single,
}

impl FromStr for LayoutMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "multiple" | "multi" => Ok(LayoutMode::Multiple),
            "single" => Ok(LayoutMode::Single),
            other => Err(format!("unknown layout mode '{other}'")),
        }
    }
}

/// Options for one panelization run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanelizeOptions {
    /// Distance reveals keep from opening edges.
    pub displacement: f64,
    /// Walk the part from the opposite edge to the face default.
    pub switch_direction: bool,
    pub mode: LayoutMode,
    /// Reveal template the model was built with.
    pub template: TemplateGeneration,
    /// Smallest acceptable panel.
    pub minimum_panel: f64,
}

impl PanelizeOptions {
    /// Load options from environment variables.
    ///
    /// Reads `REVEAL_DISPLACEMENT`, `REVEAL_SWITCH_DIRECTION`,
    /// `REVEAL_LAYOUT_MODE`, `REVEAL_TEMPLATE` and `REVEAL_MINIMUM_PANEL`.
    /// Missing or unparsable values keep their defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Load options through an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        Self {
            displacement: parse_or(&lookup, "REVEAL_DISPLACEMENT", defaults.displacement),
            switch_direction: parse_or(&lookup, "REVEAL_SWITCH_DIRECTION", defaults.switch_direction),
            mode: parse_or(&lookup, "REVEAL_LAYOUT_MODE", defaults.mode),
            template: parse_or(&lookup, "REVEAL_TEMPLATE", defaults.template),
            minimum_panel: parse_or(&lookup, "REVEAL_MINIMUM_PANEL", defaults.minimum_panel),
        }
    }

    /// Panel sizing for the configured template and minimum panel.
    pub fn panel_spec(&self) -> PanelSpec {
        PanelSpec::for_template(self.template).with_minimum_panel(self.minimum_panel)
    }
}

impl Default for PanelizeOptions {
    fn default() -> Self {
        Self {
            displacement: DEFAULT_DISPLACEMENT,
            switch_direction: false,
            mode: LayoutMode::Multiple,
            template: TemplateGeneration::Current,
            minimum_panel: DEFAULT_MINIMUM_PANEL,
        }
    }
}

fn parse_or<T, F>(lookup: &F, key: &str, default: T) -> T
where
    T: FromStr,
    F: Fn(&str) -> Option<String>,
{
    lookup(key)
        .and_then(|value| value.trim().parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: FxHashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn defaults_without_variables() {
        let options = PanelizeOptions::from_lookup(|_| None);
        assert_eq!(options, PanelizeOptions::default());
        assert_eq!(options.displacement, 0.5);
        assert_eq!(options.minimum_panel, 2.0);
        assert_eq!(options.panel_spec(), PanelSpec::current());
    }

    #[test]
    fn reads_every_variable() {
        let options = PanelizeOptions::from_lookup(lookup_from(&[
            ("REVEAL_DISPLACEMENT", "0.75"),
            ("REVEAL_SWITCH_DIRECTION", "true"),
            ("REVEAL_LAYOUT_MODE", "single"),
            ("REVEAL_TEMPLATE", "legacy"),
            ("REVEAL_MINIMUM_PANEL", " 1.5 "),
        ]));
        assert_eq!(options.displacement, 0.75);
        assert!(options.switch_direction);
        assert_eq!(options.mode, LayoutMode::Single);
        assert_eq!(options.template, TemplateGeneration::Legacy);
        assert_eq!(options.minimum_panel, 1.5);
        assert_eq!(options.panel_spec(), PanelSpec::legacy().with_minimum_panel(1.5));
    }

    #[test]
    fn unparsable_values_fall_back() {
        let options = PanelizeOptions::from_lookup(lookup_from(&[
            ("REVEAL_DISPLACEMENT", "half a foot"),
            ("REVEAL_TEMPLATE", "2019"),
        ]));
        assert_eq!(options.displacement, 0.5);
        assert_eq!(options.template, TemplateGeneration::Current);
    }
}
