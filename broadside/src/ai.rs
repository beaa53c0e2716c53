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

//! The computer opponent.
//!
//! The opponent places its fleet from a fixed pool of layouts that are known to be valid
//! on the standard board, and shoots at a uniformly random cell that hasn't been shot
//! yet. It never uses special weapons.

use log::{debug, error};
use rand::Rng;

use crate::{
    board::{Board, Coordinate, Dimensions},
    game::EngineError,
    geometry::Orientation,
    ships::{Placement, ShipKind, ShipRegistry},
};

/// A full fleet placement, one entry per ship in [`ShipKind::ALL`] order.
pub type Layout = [Placement; ShipKind::COUNT];

/// Builds the only layout in the stock pool.
fn stock_layout() -> Layout {
    [
        Placement::new(ShipKind::Patrol, Coordinate::new(2, 8), Orientation::None),
        Placement::new(ShipKind::Submarine, Coordinate::new(9, 1), Orientation::Flip),
        Placement::new(ShipKind::Destroyer, Coordinate::new(4, 7), Orientation::Diag),
        Placement::new(ShipKind::Battleship, Coordinate::new(2, 2), Orientation::Antidiag),
        Placement::new(ShipKind::Carrier, Coordinate::new(6, 3), Orientation::Flip),
    ]
}

/// Decision making for the computer side.
#[derive(Debug, Clone)]
pub struct AiOpponent {
    /// Pool of layouts to pick from at setup.
    layouts: Vec<Layout>,
}

impl AiOpponent {
    /// Create an opponent that picks from the given layouts. A game refuses to start
    /// with an opponent whose pool is empty.
    pub fn new(layouts: Vec<Layout>) -> Self {
        Self { layouts }
    }

    /// The opponent used in a standard game.
    pub fn standard() -> Self {
        Self::new(vec![stock_layout()])
    }

    /// The layouts this opponent picks from.
    pub fn layouts(&self) -> &[Layout] {
        &self.layouts
    }

    /// Returns true if every layout in the pool can be placed on a board of the given
    /// dimensions.
    pub fn supports(&self, dim: &Dimensions) -> bool {
        self.layouts.iter().all(|layout| {
            let mut registry = ShipRegistry::new();
            layout
                .iter()
                .all(|placement| registry.place(*placement, dim).is_ok())
        })
    }

    /// Pick a layout uniformly at random from the pool. Returns `None` if the pool is
    /// empty.
    pub fn choose_layout<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Layout> {
        if self.layouts.is_empty() {
            return None;
        }
        let idx = rng.gen_range(0, self.layouts.len());
        debug!("AI picked layout {} of {}", idx, self.layouts.len());
        self.layouts.get(idx)
    }

    /// Pick a cell of the player's board that hasn't been shot yet, uniformly at
    /// random.
    ///
    /// Having nothing left to shoot means the game should already have ended, so an
    /// empty pool is reported as [`EngineError::InvariantViolation`].
    pub fn choose_target<R: Rng + ?Sized>(
        &self,
        board: &Board,
        rng: &mut R,
    ) -> Result<Coordinate, EngineError> {
        let open: Vec<_> = board.open_cells().collect();
        if open.is_empty() {
            error!("AI asked to move with no open cells left");
            return Err(EngineError::InvariantViolation(
                "AI has no cells left to target",
            ));
        }
        let target = open[rng.gen_range(0, open.len())];
        debug!("AI targets {} ({} open cells)", target, open.len());
        Ok(target)
    }
}

impl Default for AiOpponent {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn stock_layout_fits_standard_board() {
        let ai = AiOpponent::standard();
        assert!(ai.supports(&Dimensions::default()));
        assert!(!ai.supports(&Dimensions::new(8, 8)));
        for (placement, kind) in ai.layouts()[0].iter().zip(ShipKind::ALL) {
            assert_eq!(placement.kind(), *kind);
        }
    }

    #[test]
    fn choose_layout_from_pool() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut other = stock_layout();
        other[4] = Placement::new(ShipKind::Carrier, Coordinate::new(7, 3), Orientation::Flip);
        let ai = AiOpponent::new(vec![stock_layout(), other]);
        let mut seen = [false; 2];
        for _ in 0..64 {
            let layout = ai.choose_layout(&mut rng).unwrap();
            let idx = ai.layouts().iter().position(|l| l == layout).unwrap();
            seen[idx] = true;
        }
        assert_eq!(seen, [true, true]);
    }

    #[test]
    fn empty_pool_has_no_layout() {
        let ai = AiOpponent::new(Vec::new());
        assert!(ai.layouts().is_empty());
        assert_eq!(ai.choose_layout(&mut StdRng::seed_from_u64(1)), None);
    }

    #[test]
    fn targets_only_open_cells() {
        let mut rng = StdRng::seed_from_u64(11);
        let ai = AiOpponent::standard();
        let mut board = Board::new(Dimensions::new(3, 3));
        for _ in 0..9 {
            let target = ai.choose_target(&board, &mut rng).unwrap();
            assert!(!board.get(target).unwrap().is_shot());
            board.shoot(target).unwrap();
        }
        let err = ai.choose_target(&board, &mut rng).unwrap_err();
        assert_eq!(
            err,
            EngineError::InvariantViolation("AI has no cells left to target")
        );
        assert!(err.is_fatal());
    }
}
