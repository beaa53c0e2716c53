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

use crate::board::Coordinate;

/// Simple rectangular dimensions of a board.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct Dimensions {
    /// Number of rows. This cooresponds to the `row` of a [`Coordinate`].
    rows: usize,
    /// Number of columns. This cooresponds to the `col` of a [`Coordinate`].
    cols: usize,
}

impl Dimensions {
    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Panics if either is 0 or if the board would not be addressable with `i32`
    /// coordinates.
    pub fn new(rows: usize, cols: usize) -> Self {
        match Self::try_new(rows, cols) {
            Some(dim) => dim,
            None => panic!("invalid board dimensions {}x{}", rows, cols),
        }
    }

    /// Create new [`Dimensions`] with the specified number of rows and columns.
    /// Returns `None` if either is 0, if `rows * cols` overflows, or if either side
    /// exceeds `i32::MAX`.
    pub fn try_new(rows: usize, cols: usize) -> Option<Self> {
        if rows == 0 || cols == 0 || rows > i32::MAX as usize || cols > i32::MAX as usize {
            None
        } else {
            rows.checked_mul(cols).map(|_| Self { rows, cols })
        }
    }

    /// Get the number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Get the number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Compute the linear total size of these [`Dimensions`].
    pub fn total_size(&self) -> usize {
        self.rows * self.cols
    }

    /// Returns true if the coordinate lies on the board.
    #[inline]
    pub fn contains(&self, coord: Coordinate) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.rows
            && (coord.col as usize) < self.cols
    }

    /// Convert a coordinate to a row-major linear index.
    /// Returns `None` if the coordinate is out of range.
    pub fn try_linearize(&self, coord: Coordinate) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.cols + coord.col as usize)
        } else {
            None
        }
    }

    /// Convert a linear index back into a [`Coordinate`].
    pub fn un_linearize(&self, idx: usize) -> Coordinate {
        Coordinate::new((idx / self.cols) as i32, (idx % self.cols) as i32)
    }

    /// Get an iterator over rows of this grid. Each row is an iterator over the
    /// coordinates of that row.
    pub fn iter_coordinates(&self) -> impl Iterator<Item = impl Iterator<Item = Coordinate>> {
        let cols = self.cols as i32;
        (0..self.rows as i32).map(move |row| (0..cols).map(move |col| Coordinate { row, col }))
    }
}

impl Default for Dimensions {
    /// Construct the default dimensions, a 10x10 board.
    fn default() -> Self {
        Self { rows: 10, cols: 10 }
    }
}
