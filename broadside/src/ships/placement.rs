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
    board::{Coordinate, Dimensions},
    geometry::{self, Orientation},
    ships::ShipKind,
};

/// Where a ship sits: its kind, center cell and rotation. The occupied cells are
/// derived from these on demand rather than stored.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct Placement {
    kind: ShipKind,
    center: Coordinate,
    orientation: Orientation,
}

impl Placement {
    /// Describe a ship of the given kind centered on `center`.
    pub fn new(kind: ShipKind, center: Coordinate, orientation: Orientation) -> Self {
        Self {
            kind,
            center,
            orientation,
        }
    }

    /// The kind of ship placed.
    pub fn kind(&self) -> ShipKind {
        self.kind
    }

    /// The center cell of the ship.
    pub fn center(&self) -> Coordinate {
        self.center
    }

    /// The rotation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Length of the ship, fixed by its kind.
    pub fn len(&self) -> usize {
        self.kind.len()
    }

    /// The cells this ship covers, in order from its first to its last segment.
    pub fn cells(&self) -> Vec<Coordinate> {
        geometry::ship_cells(self.center, self.orientation, self.len())
    }

    /// Returns true if the ship covers `coord`.
    pub fn contains(&self, coord: Coordinate) -> bool {
        self.cells().contains(&coord)
    }

    /// Returns true if every cell of the ship is on a board of the given dimensions.
    pub fn fits(&self, dim: &Dimensions) -> bool {
        geometry::ship_fits(dim, self.center, self.orientation, self.len())
    }
}
