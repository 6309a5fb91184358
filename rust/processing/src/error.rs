// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Error types for the panelization pipeline.

use thiserror::Error;

/// Result type for processing operations
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// The part is a wall layer that does not receive reveals.
    #[error("layer {layer_index} is a core layer and cannot be panelized")]
    UnsupportedLayer { layer_index: u32 },

    #[error("geometry error: {0}")]
    Geometry(#[from] reveal_lite_geometry::Error),
}
