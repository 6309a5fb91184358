// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! # Reveal-Lite Processing
//!
//! Panelization pipeline shared by host adapters and the command line.
//!
//! Host adapters hand over parts and openings in world coordinates together
//! with a [`CoordinateProbe`](reveal_lite_geometry::CoordinateProbe) for the
//! wall's coordinate-0; the pipeline returns the reveal indexes to place.
//! Placing them in the host document is left to the adapter.

pub mod batch;
pub mod config;
pub mod error;
pub mod part;
pub mod pipeline;
pub mod takeoff;

pub use batch::{panelize_all, BatchReport, PartFailure, PartJob, SkipReason, SkippedPart};
pub use config::{LayoutMode, PanelizeOptions};
pub use error::{Error, Result};
pub use part::{
    switch_direction, FaceAssignment, Lap, LayerRole, OpeningKind, OpeningRecord, PartGeometry,
    WallKind, WallSide,
};
pub use pipeline::{panelize_part, plan_layout, FixedOrigin, LayoutPlan, PanelLayout};
pub use takeoff::{classify_parts, takeoff, PanelRecord, PanelStatus, StatusGroups, TakeoffReport};
