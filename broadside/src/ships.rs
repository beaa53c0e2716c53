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

//! Types used for defining ships and where they sit.
use std::fmt;

use enumflags2::BitFlags;

pub use self::{placement::Placement, registry::ShipRegistry};

mod placement;
mod registry;

/// The five ships each side places.
///
/// Variants are bit flags so that a set of ship kinds, such as the ships a side has
/// lost, fits in a [`BitFlags<ShipKind>`].
#[derive(BitFlags, Debug, Copy, Clone, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum ShipKind {
    /// Patrol Boat: length 2.
    Patrol = 0b00001,
    /// Submarine: length 3.
    Submarine = 0b00010,
    /// Destroyer: length 3.
    Destroyer = 0b00100,
    /// Battleship: length 4.
    Battleship = 0b01000,
    /// Carrier: length 5.
    Carrier = 0b10000,
}

/// Set of ship kinds.
pub type ShipSet = BitFlags<ShipKind>;

impl ShipKind {
    /// All ship kinds, in the order they are searched when looking up which ship
    /// occupies a cell.
    pub const ALL: &'static [ShipKind] = &[
        ShipKind::Patrol,
        ShipKind::Submarine,
        ShipKind::Destroyer,
        ShipKind::Battleship,
        ShipKind::Carrier,
    ];

    /// Number of ships in a fleet.
    pub const COUNT: usize = 5;

    /// Get the length of this ship type.
    pub fn len(self) -> usize {
        match self {
            ShipKind::Patrol => 2,
            ShipKind::Submarine => 3,
            ShipKind::Destroyer => 3,
            ShipKind::Battleship => 4,
            ShipKind::Carrier => 5,
        }
    }

    /// Human readable name of this ship type.
    pub fn name(self) -> &'static str {
        match self {
            ShipKind::Patrol => "Patrol Boat",
            ShipKind::Submarine => "Submarine",
            ShipKind::Destroyer => "Destroyer",
            ShipKind::Battleship => "Battleship",
            ShipKind::Carrier => "Carrier",
        }
    }

    /// Position of this kind within [`ShipKind::ALL`].
    pub(crate) fn index(self) -> usize {
        match self {
            ShipKind::Patrol => 0,
            ShipKind::Submarine => 1,
            ShipKind::Destroyer => 2,
            ShipKind::Battleship => 3,
            ShipKind::Carrier => 4,
        }
    }
}

impl fmt::Display for ShipKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.pad(self.name())
    }
}

/// Number of ship kinds in the set.
pub fn count(set: ShipSet) -> usize {
    set.bits().count_ones() as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lengths_match_fleet() {
        let lens: Vec<_> = ShipKind::ALL.iter().map(|k| k.len()).collect();
        assert_eq!(lens, vec![2, 3, 3, 4, 5]);
        assert_eq!(ShipKind::ALL.len(), ShipKind::COUNT);
    }

    #[test]
    fn index_follows_search_order() {
        for (i, kind) in ShipKind::ALL.iter().enumerate() {
            assert_eq!(kind.index(), i);
        }
    }

    #[test]
    fn set_counts_members() {
        let mut set = ShipSet::empty();
        assert_eq!(count(set), 0);
        set.insert(ShipKind::Carrier);
        set.insert(ShipKind::Carrier);
        set.insert(ShipKind::Patrol);
        assert_eq!(count(set), 2);
        for &kind in ShipKind::ALL {
            set.insert(kind);
        }
        assert!(set.is_all());
        assert_eq!(count(set), ShipKind::COUNT);
    }
}
