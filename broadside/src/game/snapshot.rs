// Copyright 2020 Zachary Stewart
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use crate::{
    game::{Fleet, Phase, Side},
    geometry::Orientation,
    ships::ShipKind,
    weapons::Weapon,
};

/// Owned copy of everything a renderer may want to show. Changing it has no effect on
/// the game it was taken from.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct GameSnapshot {
    /// Phase at the time of the snapshot.
    pub phase: Phase,
    /// Side to move.
    pub turn: Side,
    /// The human player's fleet.
    pub player: Fleet,
    /// The computer's fleet.
    pub ai: Fleet,
    /// Ship selected for placement, if any.
    pub ship_selection: Option<ShipKind>,
    /// Rotation used for the next placement.
    pub ship_orientation: Orientation,
    /// Weapon selected for the next shot.
    pub weapon: Weapon,
    /// Rotation used for the next shot.
    pub weapon_orientation: Orientation,
}

impl GameSnapshot {
    /// The fleet of the given side.
    pub fn fleet(&self, side: Side) -> &Fleet {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.ai,
        }
    }
}
