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

use log::info;

use crate::{
    board::{Board, CannotPlaceReason, CellShot, CellState, Coordinate, ShotError},
    config::GameConfig,
    ships::{self, Placement, ShipKind, ShipRegistry, ShipSet},
    weapons::{Ammo, Weapon},
};

/// Everything one side owns: its defensive board, where its ships are, which of them
/// have been sunk and how much special ammunition it has left.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Fleet {
    board: Board,
    ships: ShipRegistry,
    sunk: ShipSet,
    ammo: Ammo,
}

impl Fleet {
    pub(super) fn new(config: &GameConfig) -> Self {
        Self {
            board: Board::new(config.dimensions),
            ships: ShipRegistry::new(),
            sunk: ShipSet::empty(),
            ammo: Ammo::new(config.torpedo_ammo, config.cluster_bomb_ammo),
        }
    }

    /// This side's defensive board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Where this side's ships are placed.
    pub fn ships(&self) -> &ShipRegistry {
        &self.ships
    }

    /// The ships this side has lost.
    pub fn sunk(&self) -> ShipSet {
        self.sunk
    }

    /// Returns true if the given ship of this side has been sunk.
    pub fn is_sunk(&self, kind: ShipKind) -> bool {
        self.sunk.contains(kind)
    }

    /// Number of this side's ships that have been sunk.
    pub fn sunk_count(&self) -> usize {
        ships::count(self.sunk)
    }

    /// Remaining special ammunition.
    pub fn ammo(&self) -> &Ammo {
        &self.ammo
    }

    /// Returns true once all of this side's ships are sunk.
    pub fn is_defeated(&self) -> bool {
        self.sunk.is_all()
    }

    /// Returns true if every cell of the given ship is hit. Unplaced ships are never
    /// destroyed.
    pub fn is_destroyed(&self, kind: ShipKind) -> bool {
        match self.ships.get(kind) {
            None => false,
            Some(placement) => placement
                .cells()
                .into_iter()
                .all(|coord| self.board.get(coord) == Some(CellState::Hit)),
        }
    }

    /// Record a ship placement and mark its cells on the board.
    pub(super) fn place(&mut self, placement: Placement) -> Result<(), CannotPlaceReason> {
        self.ships.place(placement, self.board.dimensions())?;
        for coord in placement.cells() {
            self.board.set_ship(coord);
        }
        Ok(())
    }

    /// Take a shot on this side's board.
    pub(super) fn receive(&mut self, coord: Coordinate) -> Result<CellShot, ShotError> {
        self.board.shoot(coord)
    }

    /// After a hit at `coord`, check whether the ship there went down. Returns the ship
    /// kind the first time it is found destroyed and `None` otherwise.
    pub(super) fn check_sunk(&mut self, coord: Coordinate) -> Option<ShipKind> {
        let kind = self.ships.ship_at(coord)?;
        if self.is_sunk(kind) || !self.is_destroyed(kind) {
            return None;
        }
        self.sunk.insert(kind);
        info!("{} sunk ({} of {})", kind, self.sunk_count(), ShipKind::COUNT);
        Some(kind)
    }

    /// Use up one shot of a limited weapon.
    pub(super) fn spend(&mut self, weapon: Weapon) {
        self.ammo.spend(weapon);
    }
}
