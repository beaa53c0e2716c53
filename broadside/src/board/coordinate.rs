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

use std::fmt;

/// The coordinates of a cell in the board.
///
/// Components are signed because weapon and ship patterns are computed relative to an
/// aim point and may extend past any edge of the board, including above row 0 or left
/// of column 0. The board decides whether a coordinate is in bounds.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Ord, PartialOrd)]
pub struct Coordinate {
    /// Vertical position of the cell, counted from the top row.
    pub row: i32,
    /// Horizontal position of the cell, counted from the left column.
    pub col: i32,
}

impl Coordinate {
    /// Construct a [`Coordinate`] from the given `row` and `col`.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Get the coordinate shifted by the given row and column deltas.
    pub fn offset(self, drow: i32, dcol: i32) -> Self {
        Self::new(self.row + drow, self.col + dcol)
    }
}

impl From<(i32, i32)> for Coordinate {
    /// Construct a [`Coordinate`] from the given `(row, col)` pair.
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

impl From<Coordinate> for (i32, i32) {
    /// Convert the [`Coordinate`] into a `(row, col)` pair.
    fn from(coord: Coordinate) -> Self {
        (coord.row, coord.col)
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
