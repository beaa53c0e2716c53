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

//! The weapons a side can fire and the cells each one covers.
use std::fmt;

use crate::{
    board::{Coordinate, Dimensions},
    geometry::{self, Orientation},
};

/// Style a renderer should use for a previewed cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Highlight {
    /// The action can be taken here.
    Ok,
    /// The action would be rejected here.
    Invalid,
    /// Rail gun aim point.
    Rail,
    /// Cells of an already placed ship.
    Ship,
}

/// The weapons available to a side.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Weapon {
    /// Single cell artillery shot.
    Standard,
    /// Deep sea scanner. Can be selected but has no firing pattern.
    Scanner,
    /// Sweeps a whole row or column.
    Torpedo,
    /// Single cell shot with its own aiming highlight.
    RailGun,
    /// Blast over part of the 3x3 block around the aim point.
    ClusterBomb,
}

impl Weapon {
    /// All weapons, in menu order.
    pub const ALL: &'static [Weapon] = &[
        Weapon::Standard,
        Weapon::Scanner,
        Weapon::Torpedo,
        Weapon::RailGun,
        Weapon::ClusterBomb,
    ];

    /// Human readable name of this weapon.
    pub fn name(self) -> &'static str {
        match self {
            Weapon::Standard => "Standard Artillery",
            Weapon::Scanner => "Deep Sea Scanner",
            Weapon::Torpedo => "Torpedo Launcher",
            Weapon::RailGun => "Electromagnetic Rail Gun",
            Weapon::ClusterBomb => "Cluster Bomb",
        }
    }

    /// Whether the weapon can be fired at all.
    pub fn is_armed(self) -> bool {
        self != Weapon::Scanner
    }

    /// Whether the weapon's pattern depends on the selected orientation.
    pub fn is_rotatable(self) -> bool {
        matches!(self, Weapon::Torpedo | Weapon::ClusterBomb)
    }

    /// Whether each use of the weapon spends ammunition.
    pub fn uses_ammo(self) -> bool {
        matches!(self, Weapon::Torpedo | Weapon::ClusterBomb)
    }

    /// Whether a rejected shot on a single cell rejects the whole weapon. Multi-cell
    /// weapons skip cells that can't be shot instead.
    pub fn is_single_cell(self) -> bool {
        matches!(self, Weapon::Standard | Weapon::RailGun)
    }

    /// The cells a shot aimed at `aim` covers. May include cells off the board.
    pub fn pattern(self, dim: &Dimensions, aim: Coordinate, orientation: Orientation) -> Vec<Coordinate> {
        match self {
            Weapon::Standard | Weapon::RailGun => vec![aim],
            Weapon::Torpedo => geometry::torpedo_cells(dim, aim, orientation),
            Weapon::ClusterBomb => geometry::cluster_cells(aim, orientation),
            Weapon::Scanner => Vec::new(),
        }
    }

    /// Check the weapon's placement rule for the aim point. Only the cluster bomb has
    /// one: both corners of its 3x3 block must be on the board.
    pub fn precondition_met(self, dim: &Dimensions, aim: Coordinate) -> bool {
        match self {
            Weapon::ClusterBomb => geometry::cluster_corners_fit(dim, aim),
            _ => true,
        }
    }

    /// The highlight to show over the weapon's pattern when aimed at `aim`.
    pub fn highlight(self, dim: &Dimensions, aim: Coordinate) -> Highlight {
        match self {
            Weapon::RailGun => Highlight::Rail,
            _ if !self.precondition_met(dim, aim) => Highlight::Invalid,
            _ => Highlight::Ok,
        }
    }

    /// The on-board cells to highlight when aiming at `aim`, each with its style.
    pub fn target_preview(
        self,
        dim: &Dimensions,
        aim: Coordinate,
        orientation: Orientation,
    ) -> Vec<(Coordinate, Highlight)> {
        let highlight = self.highlight(dim, aim);
        self.pattern(dim, aim, orientation)
            .into_iter()
            .filter(|&coord| dim.contains(coord))
            .map(|coord| (coord, highlight))
            .collect()
    }

    /// The weapon's pattern at the given rotation, drawn on a 3x3 grid around (1, 1).
    /// Used to show what a rotation does before aiming.
    pub fn rotation_preview(self, orientation: Orientation) -> Vec<(Coordinate, Highlight)> {
        self.target_preview(&Dimensions::new(3, 3), Coordinate::new(1, 1), orientation)
    }
}

impl Default for Weapon {
    fn default() -> Self {
        Weapon::Standard
    }
}

impl fmt::Display for Weapon {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Remaining uses of the limited weapons for one side.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Ammo {
    torpedoes: u32,
    cluster_bombs: u32,
}

impl Ammo {
    /// Start with the given number of torpedoes and cluster bombs.
    pub fn new(torpedoes: u32, cluster_bombs: u32) -> Self {
        Self {
            torpedoes,
            cluster_bombs,
        }
    }

    /// Remaining uses of the weapon, or `None` if it is not limited.
    pub fn remaining(&self, weapon: Weapon) -> Option<u32> {
        match weapon {
            Weapon::Torpedo => Some(self.torpedoes),
            Weapon::ClusterBomb => Some(self.cluster_bombs),
            _ => None,
        }
    }

    /// Whether the weapon can be fired at least once more.
    pub fn can_fire(&self, weapon: Weapon) -> bool {
        self.remaining(weapon).map_or(true, |n| n > 0)
    }

    /// Spend one use of the weapon. Unlimited weapons are unaffected.
    pub(crate) fn spend(&mut self, weapon: Weapon) {
        match weapon {
            Weapon::Torpedo => self.torpedoes = self.torpedoes.saturating_sub(1),
            Weapon::ClusterBomb => self.cluster_bombs = self.cluster_bombs.saturating_sub(1),
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_cell_weapons_hit_aim_only() {
        let dim = Dimensions::default();
        let aim = Coordinate::new(2, 3);
        for &weapon in &[Weapon::Standard, Weapon::RailGun] {
            for &o in Orientation::ALL {
                assert_eq!(weapon.pattern(&dim, aim, o), vec![aim]);
            }
        }
        assert!(Weapon::Scanner.pattern(&dim, aim, Orientation::None).is_empty());
    }

    #[test]
    fn rail_gun_has_own_highlight() {
        let dim = Dimensions::default();
        let preview = Weapon::RailGun.target_preview(&dim, Coordinate::new(0, 0), Orientation::None);
        assert_eq!(preview, vec![(Coordinate::new(0, 0), Highlight::Rail)]);
    }

    #[test]
    fn cluster_preview_marks_invalid_near_edge() {
        let dim = Dimensions::default();
        let preview =
            Weapon::ClusterBomb.target_preview(&dim, Coordinate::new(0, 0), Orientation::None);
        assert_eq!(
            preview,
            vec![
                (Coordinate::new(0, 0), Highlight::Invalid),
                (Coordinate::new(1, 1), Highlight::Invalid),
            ]
        );
        let preview =
            Weapon::ClusterBomb.target_preview(&dim, Coordinate::new(4, 4), Orientation::Diag);
        assert_eq!(preview.len(), 5);
        assert!(preview.iter().all(|&(_, h)| h == Highlight::Ok));
    }

    #[test]
    fn limited_weapons_rotate() {
        let limited: Vec<_> = Weapon::ALL.iter().copied().filter(|w| w.uses_ammo()).collect();
        assert_eq!(limited, vec![Weapon::Torpedo, Weapon::ClusterBomb]);
        for &weapon in Weapon::ALL {
            assert_eq!(weapon.is_rotatable(), weapon.uses_ammo());
            assert_eq!(weapon.is_single_cell(), weapon.is_armed() && !weapon.uses_ammo());
        }
    }

    #[test]
    fn rotation_preview_on_small_grid() {
        let cells = |weapon: Weapon, o| -> Vec<Coordinate> {
            let mut cells: Vec<_> = weapon
                .rotation_preview(o)
                .into_iter()
                .map(|(c, _)| c)
                .collect();
            cells.sort();
            cells
        };
        assert_eq!(
            cells(Weapon::Torpedo, Orientation::None),
            vec![Coordinate::new(1, 0), Coordinate::new(1, 1), Coordinate::new(1, 2)]
        );
        assert_eq!(
            cells(Weapon::Torpedo, Orientation::Diag),
            vec![Coordinate::new(0, 1), Coordinate::new(1, 1), Coordinate::new(2, 1)]
        );
        assert_eq!(
            cells(Weapon::ClusterBomb, Orientation::Flip),
            vec![
                Coordinate::new(0, 0),
                Coordinate::new(0, 2),
                Coordinate::new(1, 1),
                Coordinate::new(2, 0),
                Coordinate::new(2, 2),
            ]
        );
        assert_eq!(
            Weapon::RailGun.rotation_preview(Orientation::Antidiag),
            vec![(Coordinate::new(1, 1), Highlight::Rail)]
        );
        assert!(Weapon::Scanner.rotation_preview(Orientation::None).is_empty());
    }

    #[test]
    fn ammo_only_limits_special_weapons() {
        let mut ammo = Ammo::new(1, 2);
        assert_eq!(ammo.remaining(Weapon::Standard), None);
        assert!(ammo.can_fire(Weapon::Torpedo));
        ammo.spend(Weapon::Torpedo);
        assert!(!ammo.can_fire(Weapon::Torpedo));
        ammo.spend(Weapon::Torpedo);
        assert_eq!(ammo.remaining(Weapon::Torpedo), Some(0));
        ammo.spend(Weapon::Standard);
        assert_eq!(ammo.remaining(Weapon::ClusterBomb), Some(2));
        assert!(ammo.can_fire(Weapon::RailGun));
    }
}
