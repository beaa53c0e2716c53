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

//! The game as a whole: setup, turn order, firing and win detection.
//!
//! A [`Game`] starts in [`Phase::Setup`] where the player places their five ships. Once
//! the last one is down the computer places its own fleet and play begins with the
//! player to move. Each accepted shot hands the turn to the other side; rejected shots
//! leave everything as it was. The game ends when either side has lost all five ships.

use std::{fmt, mem};

use log::{debug, error, info, warn};
use rand::Rng;

use crate::{
    ai::AiOpponent,
    board::{CannotPlaceReason, CellState, Coordinate, Dimensions, PlaceError},
    config::{ConfigError, GameConfig},
    geometry::Orientation,
    ships::{Placement, ShipKind},
    weapons::{Highlight, Weapon},
};

pub use self::{
    errors::{CannotFireReason, EngineError, FireError},
    events::{CellResult, GameEvent, Round, Volley},
    fleet::Fleet,
    snapshot::GameSnapshot,
};

mod errors;
mod events;
mod fleet;
mod snapshot;

/// One of the two sides of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Side {
    /// The human player.
    Player,
    /// The computer opponent.
    Ai,
}

impl Side {
    /// Get the opponent of this side.
    pub fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Ai,
            Side::Ai => Side::Player,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(match self {
            Side::Player => "player",
            Side::Ai => "computer",
        })
    }
}

/// Stage of the game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum Phase {
    /// The player is placing ships.
    Setup,
    /// Shots are being traded.
    Playing,
    /// One side has lost every ship.
    Finished {
        /// The side that sank the other's fleet.
        winner: Side,
    },
}

/// Which orientation [`Game::rotate`] should turn.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub enum RotateContext {
    /// The orientation used for placing the selected ship.
    ShipSetup,
    /// The orientation used for firing the selected weapon.
    Weapon,
}

/// A single-player game against the computer. `R` is the source of randomness used by
/// the computer opponent.
pub struct Game<R> {
    /// Randomness for the computer's choices.
    rng: R,
    /// Computer decision making.
    ai: AiOpponent,
    /// Current stage of the game.
    phase: Phase,
    /// Side to move.
    turn: Side,
    /// The human player's fleet.
    player: Fleet,
    /// The computer's fleet.
    computer: Fleet,
    /// Ship the player has picked to place next.
    ship_selection: Option<ShipKind>,
    /// Rotation for the next placement.
    ship_orientation: Orientation,
    /// Weapon the player will fire next.
    weapon: Weapon,
    /// Rotation for the next shot.
    weapon_orientation: Orientation,
    /// Events not yet picked up by the renderer.
    events: Vec<GameEvent>,
}

impl<R: Rng> Game<R> {
    /// Start a new game against the standard computer opponent.
    pub fn new(config: GameConfig, rng: R) -> Result<Self, ConfigError> {
        Self::with_opponent(config, AiOpponent::standard(), rng)
    }

    /// Start a new game against the given computer opponent. Fails if the opponent has
    /// no layouts or any of them can't be placed on the configured board.
    pub fn with_opponent(config: GameConfig, ai: AiOpponent, rng: R) -> Result<Self, ConfigError> {
        if ai.layouts().is_empty() {
            return Err(ConfigError::EmptyLayoutPool);
        }
        if !ai.supports(&config.dimensions) {
            return Err(ConfigError::UnsupportedDimensions(config.dimensions));
        }
        debug!("new game with {:?}", config);
        Ok(Self {
            rng,
            ai,
            phase: Phase::Setup,
            turn: Side::Player,
            player: Fleet::new(&config),
            computer: Fleet::new(&config),
            ship_selection: None,
            ship_orientation: Orientation::None,
            weapon: Weapon::Standard,
            weapon_orientation: Orientation::None,
            events: Vec::new(),
        })
    }

    /// Current stage of the game.
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Side to move.
    pub fn turn(&self) -> Side {
        self.turn
    }

    /// The winner, once the game is over.
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::Finished { winner } => Some(winner),
            _ => None,
        }
    }

    /// Dimensions shared by both boards.
    pub fn dimensions(&self) -> &Dimensions {
        self.player.board().dimensions()
    }

    /// The fleet of the given side.
    pub fn fleet(&self, side: Side) -> &Fleet {
        match side {
            Side::Player => &self.player,
            Side::Ai => &self.computer,
        }
    }

    fn fleet_mut(&mut self, side: Side) -> &mut Fleet {
        match side {
            Side::Player => &mut self.player,
            Side::Ai => &mut self.computer,
        }
    }

    /// Ship selected for placement, if any.
    pub fn ship_selection(&self) -> Option<ShipKind> {
        self.ship_selection
    }

    /// Rotation used for the next placement.
    pub fn ship_orientation(&self) -> Orientation {
        self.ship_orientation
    }

    /// Weapon selected for the next shot.
    pub fn selected_weapon(&self) -> Weapon {
        self.weapon
    }

    /// Rotation used for the next shot.
    pub fn weapon_orientation(&self) -> Orientation {
        self.weapon_orientation
    }

    /// Take an owned copy of the game state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            phase: self.phase,
            turn: self.turn,
            player: self.player.clone(),
            ai: self.computer.clone(),
            ship_selection: self.ship_selection,
            ship_orientation: self.ship_orientation,
            weapon: self.weapon,
            weapon_orientation: self.weapon_orientation,
        }
    }

    /// Take all events queued since the last call.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        mem::take(&mut self.events)
    }

    /// Pick the ship to place next. Resets the placement rotation.
    pub fn select_ship(&mut self, kind: ShipKind) -> Result<(), CannotPlaceReason> {
        if self.phase != Phase::Setup {
            return Err(CannotPlaceReason::WrongPhase);
        }
        if self.player.ships().is_placed(kind) {
            return Err(CannotPlaceReason::AlreadyPlaced);
        }
        self.ship_selection = Some(kind);
        self.ship_orientation = Orientation::None;
        Ok(())
    }

    /// Pick the weapon to fire next.
    pub fn select_weapon(&mut self, weapon: Weapon) {
        self.weapon = weapon;
    }

    /// Turn the placement or weapon rotation by 90 degrees and return the new value.
    pub fn rotate(&mut self, context: RotateContext) -> Orientation {
        let orientation = match context {
            RotateContext::ShipSetup => &mut self.ship_orientation,
            RotateContext::Weapon => &mut self.weapon_orientation,
        };
        *orientation = orientation.rotated();
        *orientation
    }

    /// Place one of the player's ships. After the fifth ship the computer places its
    /// fleet and play begins.
    pub fn place_ship(
        &mut self,
        kind: ShipKind,
        center: Coordinate,
        orientation: Orientation,
    ) -> Result<(), PlaceError> {
        if self.phase != Phase::Setup {
            warn!("rejected placement of {} at {}: wrong phase", kind, center);
            return Err(PlaceError::new(CannotPlaceReason::WrongPhase, center));
        }
        let placement = Placement::new(kind, center, orientation);
        if let Err(reason) = self.player.place(placement) {
            warn!("rejected placement of {} at {}: {}", kind, center, reason);
            return Err(PlaceError::new(reason, center));
        }
        debug!(
            "player placed {} at {} facing {} degrees",
            kind,
            center,
            orientation.degrees()
        );
        for coord in placement.cells() {
            self.events.push(GameEvent::CellUpdated {
                side: Side::Player,
                coord,
                state: CellState::Ship,
            });
        }
        if self.ship_selection == Some(kind) {
            self.ship_selection = None;
        }
        if self.player.ships().is_complete() {
            self.setup_ai();
        }
        Ok(())
    }

    /// Place the selected ship at `center` with the current placement rotation.
    pub fn place_selected(&mut self, center: Coordinate) -> Result<(), PlaceError> {
        match self.ship_selection {
            Some(kind) => self.place_ship(kind, center, self.ship_orientation),
            None => Err(PlaceError::new(CannotPlaceReason::NoSelection, center)),
        }
    }

    /// Place the computer's fleet and begin play.
    fn setup_ai(&mut self) {
        let layout = *self
            .ai
            .choose_layout(&mut self.rng)
            .expect("AI layout pool is checked when the game is created");
        for placement in layout.iter() {
            self.computer
                .place(*placement)
                .expect("AI layouts are validated when the game is created");
        }
        self.phase = Phase::Playing;
        self.turn = Side::Player;
        info!("all ships placed, game started");
        self.events.push(GameEvent::Started);
        self.events.push(GameEvent::TurnChanged(Side::Player));
    }

    /// Fire a weapon for the player.
    pub fn fire(
        &mut self,
        weapon: Weapon,
        orientation: Orientation,
        aim: Coordinate,
    ) -> Result<Volley, FireError> {
        self.fire_as(Side::Player, weapon, orientation, aim)
    }

    /// Fire the selected weapon for the player, using the current weapon rotation.
    pub fn fire_selected(&mut self, aim: Coordinate) -> Result<Volley, FireError> {
        self.fire(self.weapon, self.weapon_orientation, aim)
    }

    /// Let the computer take its turn: a standard shot at a random open cell.
    pub fn ai_move(&mut self) -> Result<Volley, EngineError> {
        self.check_turn(Side::Ai, Weapon::Standard, Coordinate::new(0, 0))?;
        let target = self.ai.choose_target(self.player.board(), &mut self.rng)?;
        self.fire_as(Side::Ai, Weapon::Standard, Orientation::None, target)
            .map_err(|err| {
                error!("AI shot rejected: {}", err);
                EngineError::InvariantViolation("unsuccessful AI move")
            })
    }

    /// Fire for the player and, if the game goes on, let the computer reply.
    pub fn play_round(
        &mut self,
        weapon: Weapon,
        orientation: Orientation,
        aim: Coordinate,
    ) -> Result<Round, EngineError> {
        let player = self.fire(weapon, orientation, aim)?;
        let ai = if player.winner.is_none() {
            Some(self.ai_move()?)
        } else {
            None
        };
        Ok(Round { player, ai })
    }

    /// Play a round with the selected weapon and rotation.
    pub fn play_selected(&mut self, aim: Coordinate) -> Result<Round, EngineError> {
        self.play_round(self.weapon, self.weapon_orientation, aim)
    }

    /// Cells to highlight while hovering over `aim`.
    ///
    /// During setup this previews the selected ship, marked invalid if it can't be
    /// placed there. During the player's turn it previews the selected weapon over the
    /// computer's board, as long as `aim` itself hasn't been shot. A weapon with no
    /// ammo left is previewed as invalid. Otherwise nothing is highlighted.
    pub fn hover_preview(&self, aim: Coordinate) -> Vec<(Coordinate, Highlight)> {
        let dim = self.dimensions();
        match self.phase {
            Phase::Setup => match self.ship_selection {
                Some(kind) => {
                    let placement = Placement::new(kind, aim, self.ship_orientation);
                    let highlight = match self.player.ships().check(&placement, dim) {
                        Ok(()) => Highlight::Ok,
                        Err(_) => Highlight::Invalid,
                    };
                    placement
                        .cells()
                        .into_iter()
                        .filter(|&coord| dim.contains(coord))
                        .map(|coord| (coord, highlight))
                        .collect()
                }
                None => Vec::new(),
            },
            Phase::Playing if self.turn == Side::Player => {
                match self.computer.board().get(aim) {
                    Some(state) if !state.is_shot() => {
                        let preview = self
                            .weapon
                            .target_preview(dim, aim, self.weapon_orientation);
                        if self.player.ammo().can_fire(self.weapon) {
                            preview
                        } else {
                            preview
                                .into_iter()
                                .map(|(coord, _)| (coord, Highlight::Invalid))
                                .collect()
                        }
                    }
                    _ => Vec::new(),
                }
            }
            _ => Vec::new(),
        }
    }

    /// Cells of one of a side's placed ships, for highlighting it.
    pub fn ship_preview(&self, side: Side, kind: ShipKind) -> Vec<(Coordinate, Highlight)> {
        self.fleet(side)
            .ships()
            .get(kind)
            .map(|placement| {
                placement
                    .cells()
                    .into_iter()
                    .map(|coord| (coord, Highlight::Ship))
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Reject the shot unless it is `shooter`'s turn in a running game.
    fn check_turn(&self, shooter: Side, weapon: Weapon, aim: Coordinate) -> Result<(), FireError> {
        let reason = match self.phase {
            Phase::Setup => CannotFireReason::WrongPhase,
            Phase::Finished { .. } => CannotFireReason::GameOver,
            Phase::Playing if self.turn != shooter => CannotFireReason::OutOfTurn,
            Phase::Playing => return Ok(()),
        };
        Err(reject(shooter, reason, weapon, aim))
    }

    /// Validate and resolve a shot. Nothing changes unless every check passes.
    fn fire_as(
        &mut self,
        shooter: Side,
        weapon: Weapon,
        orientation: Orientation,
        aim: Coordinate,
    ) -> Result<Volley, FireError> {
        self.check_turn(shooter, weapon, aim)?;
        let dim = *self.dimensions();
        let target = shooter.opponent();
        let reason = if !weapon.is_armed() {
            Some(CannotFireReason::Unarmed)
        } else if !dim.contains(aim) {
            Some(CannotFireReason::OutOfBounds)
        } else if !self.fleet(shooter).ammo().can_fire(weapon) {
            Some(CannotFireReason::OutOfAmmo)
        } else if !weapon.precondition_met(&dim, aim) {
            Some(CannotFireReason::PreconditionFailed)
        } else if weapon.is_single_cell()
            && self.fleet(target).board().get(aim).map_or(false, CellState::is_shot)
        {
            Some(CannotFireReason::AlreadyShot)
        } else {
            None
        };
        if let Some(reason) = reason {
            return Err(reject(shooter, reason, weapon, aim));
        }

        let mut cells = Vec::new();
        let mut sunk = Vec::new();
        let mut events = Vec::new();
        for coord in weapon.pattern(&dim, aim, orientation) {
            let fleet = self.fleet_mut(target);
            // Stray cells of multi-cell patterns are skipped one by one.
            let shot = match fleet.receive(coord) {
                Ok(shot) => shot,
                Err(_) => continue,
            };
            cells.push(CellResult { coord, shot });
            let state = if shot.is_hit() {
                CellState::Hit
            } else {
                CellState::Miss
            };
            events.push(GameEvent::CellUpdated {
                side: target,
                coord,
                state,
            });
            if shot.is_hit() {
                if let Some(kind) = fleet.check_sunk(coord) {
                    sunk.push(kind);
                    events.push(GameEvent::ShipSunk { side: target, kind });
                }
            }
        }
        self.fleet_mut(shooter).spend(weapon);
        debug!(
            "{} fired {} at {}: {} cells, {} hits",
            shooter,
            weapon,
            aim,
            cells.len(),
            cells.iter().filter(|c| c.shot.is_hit()).count()
        );

        self.turn = target;
        events.push(GameEvent::TurnChanged(target));
        let winner = if self.fleet(target).is_defeated() {
            info!("{} wins", shooter);
            self.phase = Phase::Finished { winner: shooter };
            events.push(GameEvent::Finished { winner: shooter });
            Some(shooter)
        } else {
            None
        };
        self.events.extend(events);

        Ok(Volley {
            shooter,
            weapon,
            cells,
            sunk,
            winner,
        })
    }
}

/// Log and build a rejected shot.
fn reject(shooter: Side, reason: CannotFireReason, weapon: Weapon, aim: Coordinate) -> FireError {
    warn!("{} shot with {} at {} rejected: {}", shooter, weapon, aim, reason);
    FireError::new(reason, weapon, aim)
}
