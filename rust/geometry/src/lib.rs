// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Reveal-Lite Geometry
//!
//! One-dimensional layout of reveals along a wall part.
//!
//! A part is described by its [`Extent`] on the wall's axis index. Openings
//! hosted by the wall become [`OutRange`]s around their edges, and
//! [`partition`] walks the part at a fixed stride to place reveals that cut
//! it into panels no larger than a maximum and no smaller than a minimum
//! panel, keeping reveals out of the opening ranges.
//!
//! ```
//! use reveal_lite_geometry::{partition, Direction, Extent, Opening, PanelSpec, collect_out_ranges};
//!
//! let extent = Extent::new(24.0, 0.0);
//! let openings = [Opening::new(10.0, 4.0)];
//! let out_ranges = collect_out_ranges(&openings, 0.5)?;
//! let reveals = partition(&extent, &out_ranges.ranges, Direction::Exterior, &PanelSpec::current())?;
//! assert!(reveals.iter().all(|r| extent.contains(*r)));
//! # Ok::<(), reveal_lite_geometry::Error>(())
//! ```

pub mod coordinate;
pub mod error;
pub mod fenestration;
pub mod interval;
pub mod out_range;
pub mod panel_spec;
pub mod partition;

// Re-export nalgebra types for convenience
pub use nalgebra::{Point3, Vector3};

pub use coordinate::{origin_from_probe_cuts, Axis, CoordinateProbe, ProbeSchedule};
pub use error::{Error, Result};
pub use fenestration::{
    check_displacement, collect_out_ranges, opening_centre_index, opening_edge_indexes,
    opening_out_range, Displacement, DisplacementWarning, Opening, OpeningOutRange, OutRangeSet,
};
pub use interval::{panel_lengths, Direction, Extent, OutRange};
pub use out_range::resolve;
pub use panel_spec::{PanelSpec, TemplateGeneration};
pub use partition::{half_panel_layout, partition, single_panel, single_panel_layout};
