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

use broadside::{
    game::{CannotFireReason, EngineError},
    CellState, Coordinate, Game, GameConfig, Orientation, ShipKind, Side, Weapon,
};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};

fn started_game(seed: u64) -> Game<StdRng> {
    let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
    for (i, &kind) in ShipKind::ALL.iter().enumerate() {
        game.place_ship(kind, Coordinate::new(4, i as i32 * 2), Orientation::None)
            .unwrap();
    }
    game
}

fn cell() -> impl Strategy<Value = Coordinate> {
    (0..10i32, 0..10i32).prop_map(Coordinate::from)
}

fn orientation() -> impl Strategy<Value = Orientation> {
    prop::sample::select(Orientation::ALL)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn second_shot_is_rejected(seed in any::<u64>(), aim in cell()) {
        let mut game = started_game(seed);
        game.play_round(Weapon::Standard, Orientation::None, aim).unwrap();
        let before = game.snapshot();
        let err = game.fire(Weapon::Standard, Orientation::None, aim).unwrap_err();
        prop_assert_eq!(err.reason(), CannotFireReason::AlreadyShot);
        prop_assert_eq!(game.snapshot(), before);
        prop_assert_eq!(game.turn(), Side::Player);
    }

    #[test]
    fn placed_ships_cover_exact_cells(
        placements in prop::collection::vec((cell(), orientation()), ShipKind::COUNT),
    ) {
        let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(0)).unwrap();
        for (&kind, &(center, orientation)) in ShipKind::ALL.iter().zip(&placements) {
            let before = game.snapshot();
            if game.place_ship(kind, center, orientation).is_err() {
                prop_assert_eq!(game.snapshot(), before);
            }
        }
        let fleet = game.fleet(Side::Player);
        let expected: usize = fleet.ships().iter().map(|p| p.len()).sum();
        prop_assert_eq!(fleet.board().count(CellState::Ship), expected);
        for placement in fleet.ships().iter() {
            for coord in placement.cells() {
                prop_assert_eq!(fleet.board().get(coord), Some(CellState::Ship));
                prop_assert_eq!(fleet.ships().ship_at(coord), Some(placement.kind()));
            }
        }
    }

    #[test]
    fn ai_only_targets_open_cells(
        seed in any::<u64>(),
        aims in prop::collection::vec(cell(), 1..80),
    ) {
        let mut game = started_game(seed);
        for aim in aims {
            let before = game.fleet(Side::Player).board().clone();
            let round = match game.play_round(Weapon::Standard, Orientation::None, aim) {
                Ok(round) => round,
                Err(EngineError::Rejected(err)) => {
                    prop_assert_eq!(err.reason(), CannotFireReason::AlreadyShot);
                    continue;
                }
                Err(err) => return Err(TestCaseError::fail(err.to_string())),
            };
            if let Some(ai) = round.ai {
                let target = ai.cells[0].coord;
                prop_assert!(!before.get(target).unwrap().is_shot());
                // Shot cells never change again.
                let after = game.fleet(Side::Player).board();
                for (coord, state) in before.iter_rows().flatten() {
                    if state.is_shot() {
                        prop_assert_eq!(after.get(coord), Some(state));
                    }
                }
                prop_assert_eq!(after.open_cells().count(), before.open_cells().count() - 1);
            }
            if game.winner().is_some() {
                break;
            }
        }
    }
}
