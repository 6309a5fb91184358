// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Wall parts and hosted openings as supplied by a host adapter.
//!
//! A wall is split into layer parts. Only the finish layers receive reveals:
//! the exterior face is walked from its left edge with a right-hand lap, the
//! interior face from its right edge with a left-hand lap.

use reveal_lite_geometry::{Direction, Opening, Point3, Vector3};
use serde::{Deserialize, Serialize};

/// Construction of the host wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallKind {
    /// Exterior wall: exterior finish, core, interior finish.
    #[default]
    Envelope,
    /// Interior partition: core and one interior finish.
    Partition,
}

/// What a layer part is within its wall.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayerRole {
    Exterior,
    Interior,
    Core,
}

/// Wall face a reveal is placed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WallSide {
    Exterior,
    Interior,
}

/// Hand of the lap joint profile used at each reveal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lap {
    Left,
    Right,
}

/// Reveal placement parameters for one layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaceAssignment {
    pub role: LayerRole,
    pub side: WallSide,
    pub lap: Lap,
}

impl FaceAssignment {
    const EXTERIOR: Self = Self {
        role: LayerRole::Exterior,
        side: WallSide::Exterior,
        lap: Lap::Right,
    };

    const INTERIOR: Self = Self {
        role: LayerRole::Interior,
        side: WallSide::Interior,
        lap: Lap::Left,
    };

    const CORE: Self = Self {
        role: LayerRole::Core,
        side: WallSide::Exterior,
        lap: Lap::Right,
    };

    /// Assigns a face from the part's layer index within its wall.
    ///
    /// Envelope walls: layer 1 is the exterior finish, layer 3 the interior
    /// finish. Partitions: layer 2 is the interior finish. Everything else is
    /// core.
    pub fn classify(layer_index: u32, wall_kind: WallKind) -> Self {
        match (wall_kind, layer_index) {
            (WallKind::Envelope, 1) => Self::EXTERIOR,
            (WallKind::Envelope, 3) => Self::INTERIOR,
            (WallKind::Partition, 2) => Self::INTERIOR,
            _ => Self::CORE,
        }
    }

    /// Default walk direction for the face, `None` for core layers.
    pub fn direction(&self) -> Option<Direction> {
        match self.role {
            LayerRole::Exterior => Some(Direction::Exterior),
            LayerRole::Interior => Some(Direction::Interior),
            LayerRole::Core => None,
        }
    }
}

/// Flips the walk direction when `switch` is set.
pub fn switch_direction(direction: Direction, switch: bool) -> Direction {
    if switch {
        direction.switched()
    } else {
        direction
    }
}

/// A wall layer part.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartGeometry {
    pub id: u64,
    /// Computed length along the wall path.
    pub length: f64,
    pub height: f64,
    /// Bounding box centre of the part.
    pub centre: Point3<f64>,
    /// Direction of the host wall's path curve.
    pub wall_direction: Vector3<f64>,
    pub layer_index: u32,
    pub wall_kind: WallKind,
}

impl PartGeometry {
    pub fn face(&self) -> FaceAssignment {
        FaceAssignment::classify(self.layer_index, self.wall_kind)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OpeningKind {
    Door,
    Window,
}

/// A door or window hosted by the part's wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OpeningRecord {
    pub kind: OpeningKind,
    /// Insertion point of the opening.
    pub location: Point3<f64>,
    pub width: f64,
    /// Rough opening width, used when the nominal width is zero.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rough_width: Option<f64>,
}

impl OpeningRecord {
    pub fn effective_width(&self) -> f64 {
        Opening::effective_width(self.width, self.rough_width)
    }
}

/// Orders openings doors first, then windows, keeping host order within each.
pub fn doors_then_windows(openings: &[OpeningRecord]) -> Vec<&OpeningRecord> {
    let doors = openings.iter().filter(|o| o.kind == OpeningKind::Door);
    let windows = openings.iter().filter(|o| o.kind == OpeningKind::Window);
    doors.chain(windows).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn envelope_layers() {
        let exterior = FaceAssignment::classify(1, WallKind::Envelope);
        assert_eq!(exterior.role, LayerRole::Exterior);
        assert_eq!(exterior.lap, Lap::Right);
        assert_eq!(exterior.side, WallSide::Exterior);
        assert_eq!(exterior.direction(), Some(Direction::Exterior));

        let interior = FaceAssignment::classify(3, WallKind::Envelope);
        assert_eq!(interior.lap, Lap::Left);
        assert_eq!(interior.side, WallSide::Interior);
        assert_eq!(interior.direction(), Some(Direction::Interior));

        assert_eq!(FaceAssignment::classify(2, WallKind::Envelope).role, LayerRole::Core);
    }

    #[test]
    fn partition_layers() {
        let finish = FaceAssignment::classify(2, WallKind::Partition);
        assert_eq!(finish.role, LayerRole::Interior);
        assert_eq!(finish.direction(), Some(Direction::Interior));
        assert_eq!(FaceAssignment::classify(1, WallKind::Partition).direction(), None);
    }

    #[test]
    fn switching_direction() {
        assert_eq!(switch_direction(Direction::Exterior, false), Direction::Exterior);
        assert_eq!(switch_direction(Direction::Exterior, true), Direction::Interior);
        assert_eq!(switch_direction(Direction::Interior, true), Direction::Exterior);
    }

    #[test]
    fn doors_come_before_windows() {
        let at = |x: f64| Point3::new(x, 0.0, 0.0);
        let openings = [
            OpeningRecord { kind: OpeningKind::Window, location: at(1.0), width: 3.0, rough_width: None },
            OpeningRecord { kind: OpeningKind::Door, location: at(2.0), width: 3.0, rough_width: None },
            OpeningRecord { kind: OpeningKind::Window, location: at(3.0), width: 0.0, rough_width: Some(2.5) },
        ];
        let ordered: Vec<f64> = doors_then_windows(&openings).iter().map(|o| o.location.x).collect();
        assert_eq!(ordered, vec![2.0, 1.0, 3.0]);
        assert_eq!(openings[2].effective_width(), 2.5);
    }
}
