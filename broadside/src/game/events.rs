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
    board::{CellShot, CellState, Coordinate},
    game::Side,
    ships::ShipKind,
    weapons::Weapon,
};

/// Something a renderer should react to. Queued by the game and drained with
/// [`Game::drain_events`][crate::game::Game::drain_events].
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum GameEvent {
    /// A cell on the given side's board changed state.
    CellUpdated {
        side: Side,
        coord: Coordinate,
        state: CellState,
    },
    /// Both fleets are placed and play has begun.
    Started,
    /// The given side lost a ship.
    ShipSunk { side: Side, kind: ShipKind },
    /// It is now the given side's turn.
    TurnChanged(Side),
    /// The game is over.
    Finished { winner: Side },
}

/// Result of a single cell within a volley.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct CellResult {
    /// The cell that was shot.
    pub coord: Coordinate,
    /// Whether it struck a ship.
    pub shot: CellShot,
}

/// Outcome of an accepted fire action.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Volley {
    /// Side that fired.
    pub shooter: Side,
    /// Weapon used.
    pub weapon: Weapon,
    /// Each cell that was shot, in the order it was resolved. Cells of the pattern that
    /// were off the board or already shot are not included.
    pub cells: Vec<CellResult>,
    /// Ships that went down because of this volley.
    pub sunk: Vec<ShipKind>,
    /// Set if this volley ended the game.
    pub winner: Option<Side>,
}

impl Volley {
    /// Number of cells that struck a ship.
    pub fn hits(&self) -> usize {
        self.cells.iter().filter(|cell| cell.shot.is_hit()).count()
    }

    /// Returns true if any cell struck a ship.
    pub fn is_hit(&self) -> bool {
        self.hits() > 0
    }
}

/// A player move and the computer's reply, if the game was still running.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Round {
    /// The player's volley.
    pub player: Volley,
    /// The computer's reply.
    pub ai: Option<Volley>,
}
