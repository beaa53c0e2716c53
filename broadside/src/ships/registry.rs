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
    board::{CannotPlaceReason, Coordinate, Dimensions},
    ships::{Placement, ShipKind},
};

/// Records where each of a side's five ships was placed.
///
/// Every kind starts out unplaced. A kind can be placed exactly once and its placement
/// never changes afterwards.
#[derive(Debug, Clone, Default, Eq, PartialEq)]
pub struct ShipRegistry {
    /// Placement per kind, indexed by [`ShipKind::index`].
    ships: [Option<Placement>; ShipKind::COUNT],
}

impl ShipRegistry {
    /// Create a registry with all five ships unplaced.
    pub fn new() -> Self {
        Self::default()
    }

    /// If the ship is placed, get the placement. Otherwise return `None`.
    pub fn get(&self, kind: ShipKind) -> Option<&Placement> {
        self.ships[kind.index()].as_ref()
    }

    /// Returns true if the given ship has been placed.
    pub fn is_placed(&self, kind: ShipKind) -> bool {
        self.get(kind).is_some()
    }

    /// Returns true once all five ships are placed.
    pub fn is_complete(&self) -> bool {
        self.ships.iter().all(Option::is_some)
    }

    /// Get an iterator over the kinds of any ships which still need to be placed.
    pub fn pending(&self) -> impl '_ + Iterator<Item = ShipKind> {
        ShipKind::ALL
            .iter()
            .copied()
            .filter(move |&kind| !self.is_placed(kind))
    }

    /// Get an iterator over all placed ships.
    pub fn iter(&self) -> impl '_ + Iterator<Item = &Placement> {
        self.ships.iter().filter_map(Option::as_ref)
    }

    /// Check whether the placement could be recorded on a board of the given dimensions
    /// without actually recording it.
    pub fn check(&self, placement: &Placement, dim: &Dimensions) -> Result<(), CannotPlaceReason> {
        if self.is_placed(placement.kind()) {
            return Err(CannotPlaceReason::AlreadyPlaced);
        }
        if !placement.fits(dim) {
            return Err(CannotPlaceReason::OutOfBounds);
        }
        let cells = placement.cells();
        if cells.iter().any(|&coord| self.ship_at(coord).is_some()) {
            return Err(CannotPlaceReason::Overlap);
        }
        Ok(())
    }

    /// Record the placement, after validating it with [`ShipRegistry::check`].
    pub(crate) fn place(
        &mut self,
        placement: Placement,
        dim: &Dimensions,
    ) -> Result<(), CannotPlaceReason> {
        self.check(&placement, dim)?;
        self.ships[placement.kind().index()] = Some(placement);
        Ok(())
    }

    /// Find the ship covering `coord`. Kinds are tried in [`ShipKind::ALL`] order and
    /// the first match wins.
    pub fn ship_at(&self, coord: Coordinate) -> Option<ShipKind> {
        self.iter()
            .find(|placement| placement.contains(coord))
            .map(Placement::kind)
    }
}
