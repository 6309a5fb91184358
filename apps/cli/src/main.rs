// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Reveal-Lite CLI - lay out reveals for one part on its axis index.
//!
//! Options default to the `REVEAL_*` environment variables and can be
//! overridden per run. The layout is printed as JSON on stdout; logs go to
//! stderr.
//!
//! Usage:
//!   reveal-lite --left 19.73 --right -0.52 --opening 10:4 --opening 15.5:3

use anyhow::{Context, Result};
use clap::Parser;
use reveal_lite_geometry::{Direction, Extent, Opening, TemplateGeneration};
use reveal_lite_processing::{plan_layout, LayoutMode, PanelizeOptions};

#[derive(Debug, Parser)]
#[command(name = "reveal-lite", version, about = "Lay out panel reveals along a wall part")]
struct Args {
    /// Left edge index of the part.
    #[arg(long, allow_hyphen_values = true)]
    left: f64,

    /// Right edge index of the part.
    #[arg(long, allow_hyphen_values = true)]
    right: f64,

    /// Walk from the right edge (interior face) instead of the left edge.
    #[arg(long)]
    interior: bool,

    /// Opening as CENTRE:WIDTH on the axis index. Repeatable.
    #[arg(long = "opening", value_parser = parse_opening)]
    openings: Vec<Opening>,

    /// Distance reveals keep from opening edges.
    #[arg(long)]
    displacement: Option<f64>,

    /// Reveal template: legacy or current.
    #[arg(long)]
    template: Option<TemplateGeneration>,

    /// Smallest acceptable panel.
    #[arg(long)]
    minimum_panel: Option<f64>,

    /// Place a single reveal one stride from the starting edge.
    #[arg(long)]
    single: bool,
}

fn parse_opening(value: &str) -> Result<Opening, String> {
    let (centre, width) = value
        .split_once(':')
        .ok_or_else(|| format!("expected CENTRE:WIDTH, got '{value}'"))?;
    let centre: f64 = centre
        .trim()
        .parse()
        .map_err(|e| format!("invalid opening centre '{centre}': {e}"))?;
    let width: f64 = width
        .trim()
        .parse()
        .map_err(|e| format!("invalid opening width '{width}': {e}"))?;
    Ok(Opening::new(centre, width))
}

impl Args {
    fn options(&self) -> PanelizeOptions {
        let mut options = PanelizeOptions::from_env();
        if let Some(displacement) = self.displacement {
            options.displacement = displacement;
        }
        if let Some(template) = self.template {
            options.template = template;
        }
        if let Some(minimum_panel) = self.minimum_panel {
            options.minimum_panel = minimum_panel;
        }
        if self.single {
            options.mode = LayoutMode::Single;
        }
        options
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            std::env::var("RUST_LOG")
                .unwrap_or_else(|_| "info,reveal_lite_processing=debug".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let options = args.options();
    let extent = Extent::new(args.left, args.right);
    let direction = Direction::from_exterior(!args.interior);

    tracing::info!(
        left = extent.left,
        right = extent.right,
        ?direction,
        openings = args.openings.len(),
        template = ?options.template,
        "Laying out reveals"
    );

    let plan = plan_layout(extent, &args.openings, direction, &options)
        .context("failed to lay out reveals")?;
    println!("{}", plan.to_json()?);
    Ok(())
}
