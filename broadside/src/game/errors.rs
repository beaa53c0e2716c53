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

use thiserror::Error;

use crate::{board::Coordinate, weapons::Weapon};

/// Reason why a weapon could not be fired.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotFireReason {
    /// Ships are still being placed.
    #[error("the game has not started yet")]
    WrongPhase,

    /// The game is already over.
    #[error("the game is already over")]
    GameOver,

    /// The shooter attempted to fire out of turn.
    #[error("it is not your turn")]
    OutOfTurn,

    /// The weapon has no firing pattern.
    #[error("that weapon cannot be fired")]
    Unarmed,

    /// The aim point is off the board.
    #[error("invalid cell location")]
    OutOfBounds,

    /// The weapon has no uses left.
    #[error("out of ammunition")]
    OutOfAmmo,

    /// The weapon's placement rule rejected the aim point.
    #[error("invalid weapon placement")]
    PreconditionFailed,

    /// The single target cell was already shot.
    #[error("cell has already been shot")]
    AlreadyShot,
}

/// Error returned when a fire action is rejected. Nothing about the game changes when
/// this is returned and the shooter keeps the turn.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not fire {weapon} at {aim}: {reason}")]
pub struct FireError {
    reason: CannotFireReason,
    weapon: Weapon,
    aim: Coordinate,
}

impl FireError {
    pub(super) fn new(reason: CannotFireReason, weapon: Weapon, aim: Coordinate) -> Self {
        Self {
            reason,
            weapon,
            aim,
        }
    }

    /// Get the reason the shot was rejected.
    pub fn reason(&self) -> CannotFireReason {
        self.reason
    }

    /// The weapon that was fired.
    pub fn weapon(&self) -> Weapon {
        self.weapon
    }

    /// The cell the weapon was aimed at.
    pub fn aim(&self) -> Coordinate {
        self.aim
    }
}

/// Errors from running a full move.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum EngineError {
    /// The move was rejected and can be retried.
    #[error(transparent)]
    Rejected(#[from] FireError),

    /// The engine reached a state that should be impossible. The game can't continue.
    #[error("invariant violated: {0}")]
    InvariantViolation(&'static str),
}

impl EngineError {
    /// Returns true if the game can't continue after this error.
    pub fn is_fatal(&self) -> bool {
        matches!(self, EngineError::InvariantViolation(_))
    }
}
