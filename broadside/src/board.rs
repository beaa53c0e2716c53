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

//! Types that make up the game board.

use log::trace;

use self::grid::Grid;
pub use self::{
    coordinate::Coordinate,
    dimensions::Dimensions,
    errors::{CannotPlaceReason, CannotShootReason, PlaceError, ShotError},
};

mod coordinate;
mod dimensions;
mod errors;
mod grid;

/// Contents of a single cell of a board.
///
/// A cell only ever moves forward: `Empty` becomes `Miss` and `Ship` becomes `Hit`,
/// after which it never changes again.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellState {
    /// Open water that has not been shot.
    Empty,
    /// Part of a ship that has not been shot.
    Ship,
    /// Part of a ship that has been shot.
    Hit,
    /// Open water that has been shot.
    Miss,
}

impl CellState {
    /// Returns true if this cell has already received a shot.
    pub fn is_shot(self) -> bool {
        matches!(self, CellState::Hit | CellState::Miss)
    }
}

/// Result of a shot accepted by a single cell.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum CellShot {
    /// The shot struck part of a ship.
    Hit,
    /// The shot landed in open water.
    Miss,
}

impl CellShot {
    /// Returns true if this shot struck a ship.
    pub fn is_hit(self) -> bool {
        self == CellShot::Hit
    }
}

/// Represents a single side's defensive board: where its ships sit and which cells the
/// opponent has shot.
#[derive(Debug, Clone, Eq, PartialEq)]
pub struct Board {
    /// Grid of cell states.
    grid: Grid,
}

impl Board {
    /// Construct an empty board with the given [`Dimensions`].
    pub fn new(dim: Dimensions) -> Self {
        Self {
            grid: Grid::new(dim),
        }
    }

    /// Get the [`Dimensions`] of this [`Board`].
    pub fn dimensions(&self) -> &Dimensions {
        &self.grid.dim
    }

    /// Get the state of the cell at the given coordinate. Returns `None` if the
    /// coordinate is out of bounds.
    pub fn get(&self, coord: Coordinate) -> Option<CellState> {
        self.grid.get(coord).copied()
    }

    /// Returns true if the coordinate lies on this board.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.grid.dim.contains(coord)
    }

    /// Mark a cell as occupied by a ship. Only valid on cells that have not been
    /// shot; callers check bounds and overlap beforehand.
    pub(crate) fn set_ship(&mut self, coord: Coordinate) {
        let cell = &mut self.grid[coord];
        debug_assert_eq!(*cell, CellState::Empty);
        *cell = CellState::Ship;
    }

    /// Fire a shot at a single cell.
    ///
    /// Fails with [`CannotShootReason::OutOfBounds`] for coordinates off the board and
    /// with [`CannotShootReason::AlreadyShot`] for cells that are already `Hit` or
    /// `Miss`; in both cases nothing changes.
    pub fn shoot(&mut self, coord: Coordinate) -> Result<CellShot, ShotError> {
        let cell = match self.grid.get_mut(coord) {
            None => return Err(ShotError::new(CannotShootReason::OutOfBounds, coord)),
            Some(cell) => cell,
        };
        let shot = match *cell {
            CellState::Ship => {
                *cell = CellState::Hit;
                CellShot::Hit
            }
            CellState::Empty => {
                *cell = CellState::Miss;
                CellShot::Miss
            }
            CellState::Hit | CellState::Miss => {
                return Err(ShotError::new(CannotShootReason::AlreadyShot, coord))
            }
        };
        trace!("shot {} -> {:?}", coord, shot);
        Ok(shot)
    }

    /// Get an iterator over all cells that have not been shot yet, in row-major order.
    pub fn open_cells(&self) -> impl '_ + Iterator<Item = Coordinate> {
        let dim = self.grid.dim;
        self.grid
            .cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| !cell.is_shot())
            .map(move |(i, _)| dim.un_linearize(i))
    }

    /// Count the cells that are in the given state.
    pub fn count(&self, state: CellState) -> usize {
        self.grid.cells.iter().filter(|&&cell| cell == state).count()
    }

    /// Get an iterator over the rows of this board. Each row is an iterator over the
    /// coordinates and states of that row.
    pub fn iter_rows(
        &self,
    ) -> impl '_ + Iterator<Item = impl '_ + Iterator<Item = (Coordinate, CellState)>> {
        let grid = &self.grid;
        grid.dim
            .iter_coordinates()
            .map(move |row| row.map(move |coord| (coord, grid[coord])))
    }
}
