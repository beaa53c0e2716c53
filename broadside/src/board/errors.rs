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

//! Errors used by the `Board` and the ship setup.

use thiserror::Error;

use crate::board::Coordinate;

/// Reason why a ship could not be placed with a given center and orientation.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotPlaceReason {
    /// Ships can only be placed while the game is being set up.
    #[error("ships can only be placed during setup")]
    WrongPhase,
    /// No ship was selected before trying to place the selection.
    #[error("no ship is selected")]
    NoSelection,
    /// The given ship was already placed.
    #[error("ship was already placed")]
    AlreadyPlaced,
    /// One or more cells of the ship would fall off the edge of the board.
    #[error("the ship does not fit on the board at that position")]
    OutOfBounds,
    /// One or more of the cells is already occupied by another ship.
    #[error("the requested position overlaps another ship")]
    Overlap,
}

impl CannotPlaceReason {
    /// Returns true if the placement itself was invalid, as opposed to being attempted
    /// at the wrong time or without a selection.
    pub fn is_invalid_placement(self) -> bool {
        matches!(self, CannotPlaceReason::OutOfBounds | CannotPlaceReason::Overlap)
    }
}

/// Error caused when attempting to place a ship in an invalid position.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not place ship at {center}: {reason}")]
pub struct PlaceError {
    reason: CannotPlaceReason,
    center: Coordinate,
}

impl PlaceError {
    /// Construct a placement error from a reason and the requested center.
    pub(crate) fn new(reason: CannotPlaceReason, center: Coordinate) -> Self {
        Self { reason, center }
    }

    /// Get the reason placement was aborted.
    pub fn reason(&self) -> CannotPlaceReason {
        self.reason
    }

    /// Get the center cell where placement was attempted.
    pub fn center(&self) -> Coordinate {
        self.center
    }
}

/// Reason why a particular cell could not be shot.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum CannotShootReason {
    /// The cell selected was out of bounds on the board.
    #[error("invalid cell location")]
    OutOfBounds,

    /// A shot has already been fired at that cell.
    #[error("cell has already been shot")]
    AlreadyShot,
}

/// Error returned when trying to shoot a cell.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
#[error("could not shoot cell {coord}: {reason}")]
pub struct ShotError {
    /// Reason why the cell could not be shot.
    reason: CannotShootReason,

    /// The coordinates of the cell.
    coord: Coordinate,
}

impl ShotError {
    /// Construct a shot error with the given reason for the specified cell.
    pub(crate) fn new(reason: CannotShootReason, coord: Coordinate) -> Self {
        Self { reason, coord }
    }

    /// Get the reason the shot failed.
    pub fn reason(&self) -> CannotShootReason {
        self.reason
    }

    /// Get the coordinate of the shot cell.
    pub fn coord(&self) -> Coordinate {
        self.coord
    }
}
