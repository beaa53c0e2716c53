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
    ai::AiOpponent,
    board::CellShot,
    game::{CannotFireReason, EngineError, GameEvent, Phase, Side},
    CellState, Coordinate, Game, GameConfig, Orientation, ShipKind, Weapon,
};
use rand::{rngs::StdRng, SeedableRng};

fn started_game(seed: u64) -> Game<StdRng> {
    let mut game = Game::new(GameConfig::default(), StdRng::seed_from_u64(seed)).unwrap();
    for (i, &kind) in ShipKind::ALL.iter().enumerate() {
        game.place_ship(kind, Coordinate::new(4, i as i32 * 2), Orientation::None)
            .unwrap();
    }
    game.drain_events();
    game
}

fn ai_ship_cells(game: &Game<StdRng>) -> Vec<Coordinate> {
    game.fleet(Side::Ai)
        .ships()
        .iter()
        .flat_map(|placement| placement.cells())
        .collect()
}

#[test]
fn player_sinks_whole_fleet() {
    let mut game = started_game(11);
    let targets = ai_ship_cells(&game);
    assert_eq!(targets.len(), 17);

    let mut sunk = Vec::new();
    for (i, &aim) in targets.iter().enumerate() {
        let round = game.play_round(Weapon::Standard, Orientation::None, aim).unwrap();
        assert_eq!(round.player.cells.len(), 1);
        assert_eq!(round.player.cells[0].shot, CellShot::Hit);
        sunk.extend(round.player.sunk.iter().copied());
        if i + 1 < targets.len() {
            assert_eq!(round.player.winner, None);
            assert!(round.ai.is_some());
            assert_eq!(game.turn(), Side::Player);
        } else {
            assert_eq!(round.player.winner, Some(Side::Player));
            assert_eq!(round.ai, None);
        }
    }
    assert_eq!(sunk.len(), ShipKind::COUNT);
    assert_eq!(game.phase(), Phase::Finished { winner: Side::Player });
    assert_eq!(game.winner(), Some(Side::Player));
    assert!(game.fleet(Side::Ai).is_defeated());
    // The winning shot still hands over the turn.
    assert_eq!(game.turn(), Side::Ai);

    let events = game.drain_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::Finished {
            winner: Side::Player
        })
    );
    let sunk_events = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShipSunk { side: Side::Ai, .. }))
        .count();
    assert_eq!(sunk_events, ShipKind::COUNT);

    let err = game
        .fire(Weapon::Standard, Orientation::None, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotFireReason::GameOver);
    match game.ai_move() {
        Err(EngineError::Rejected(err)) => assert_eq!(err.reason(), CannotFireReason::GameOver),
        other => panic!("unexpected AI move result: {:?}", other),
    }
}

#[test]
fn computer_sinks_whole_fleet() {
    let config = GameConfig::default().with_torpedo_ammo(200);
    let mut game = Game::with_opponent(config, AiOpponent::standard(), StdRng::seed_from_u64(17))
        .unwrap();
    for (i, &kind) in ShipKind::ALL.iter().enumerate() {
        game.place_ship(kind, Coordinate::new(4, i as i32 * 2), Orientation::None)
            .unwrap();
    }
    game.drain_events();

    // Row 7 of the computer's board is open water, so the player never scores. After
    // the first sweep the whole row is already shot and each torpedo resolves nothing.
    let aim = Coordinate::new(7, 0);
    let mut last = None;
    for round_no in 0..100 {
        let round = game.play_round(Weapon::Torpedo, Orientation::None, aim).unwrap();
        assert_eq!(round.player.hits(), 0);
        if round_no == 0 {
            assert_eq!(round.player.cells.len(), 10);
        } else {
            assert!(round.player.cells.is_empty());
        }
        let ai = round.ai.expect("player can't win by missing");
        if ai.winner.is_some() {
            last = Some(ai);
            break;
        }
        assert_eq!(game.turn(), Side::Player);
    }

    let last = last.expect("computer wins within 100 shots");
    assert_eq!(last.shooter, Side::Ai);
    assert_eq!(last.winner, Some(Side::Ai));
    assert!(last.is_hit());
    assert_eq!(last.sunk.len(), 1);
    assert_eq!(game.phase(), Phase::Finished { winner: Side::Ai });
    assert!(game.fleet(Side::Player).is_defeated());
    assert_eq!(game.fleet(Side::Player).sunk_count(), ShipKind::COUNT);
    assert_eq!(game.fleet(Side::Ai).sunk_count(), 0);

    let events = game.drain_events();
    assert_eq!(events.last(), Some(&GameEvent::Finished { winner: Side::Ai }));
    let sunk_events = events
        .iter()
        .filter(|e| matches!(e, GameEvent::ShipSunk { side: Side::Player, .. }))
        .count();
    assert_eq!(sunk_events, ShipKind::COUNT);

    // The winning shot handed the turn back, but the game is over.
    assert_eq!(game.turn(), Side::Player);
    let err = game
        .fire(Weapon::Standard, Orientation::None, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotFireReason::GameOver);
    assert!(game.hover_preview(Coordinate::new(0, 0)).is_empty());
}

#[test]
fn random_game_alternates_until_someone_wins() {
    let mut game = started_game(42);
    let dim = *game.dimensions();
    let mut rounds = 0;
    'outer: for row in dim.iter_coordinates() {
        for aim in row {
            rounds += 1;
            assert_eq!(game.turn(), Side::Player);
            let round = game.play_round(Weapon::Standard, Orientation::None, aim).unwrap();
            if round.player.winner.is_some() {
                break 'outer;
            }
            let ai = round.ai.expect("game still running");
            assert_eq!(ai.shooter, Side::Ai);
            assert_eq!(ai.cells.len(), 1);
            if ai.winner.is_some() {
                break 'outer;
            }
        }
    }
    assert!(rounds <= 100);
    let winner = game.winner().expect("someone wins within 100 rounds");
    assert!(game.fleet(winner.opponent()).is_defeated());
    assert!(!game.fleet(winner).is_defeated());
    assert_eq!(game.fleet(winner.opponent()).board().count(CellState::Ship), 0);
}

#[test]
fn torpedo_sweeps_row_three() {
    let mut game = started_game(1);
    let volley = game
        .fire(Weapon::Torpedo, Orientation::None, Coordinate::new(3, 5))
        .unwrap();
    assert_eq!(volley.cells.len(), 10);
    assert!(volley.cells.iter().all(|cell| cell.coord.row == 3));
    // The computer's battleship and destroyer each cross row 3 once.
    assert_eq!(volley.hits(), 2);
    assert!(volley.sunk.is_empty());
    assert_eq!(
        game.fleet(Side::Player).ammo().remaining(Weapon::Torpedo),
        Some(1)
    );
    assert_eq!(game.turn(), Side::Ai);
}

#[test]
fn cluster_bomb_needs_room() {
    let mut game = started_game(2);
    let err = game
        .fire(Weapon::ClusterBomb, Orientation::None, Coordinate::new(0, 0))
        .unwrap_err();
    assert_eq!(err.reason(), CannotFireReason::PreconditionFailed);
    assert_eq!(game.turn(), Side::Player);
    assert_eq!(
        game.fleet(Side::Player).ammo().remaining(Weapon::ClusterBomb),
        Some(2)
    );

    let volley = game
        .fire(Weapon::ClusterBomb, Orientation::None, Coordinate::new(5, 5))
        .unwrap();
    let mut cells: Vec<_> = volley.cells.iter().map(|cell| cell.coord).collect();
    cells.sort();
    assert_eq!(
        cells,
        vec![
            Coordinate::new(4, 4),
            Coordinate::new(4, 6),
            Coordinate::new(5, 5),
            Coordinate::new(6, 4),
            Coordinate::new(6, 6),
        ]
    );
    // Only the carrier's cell at (6, 4) is under the blast.
    assert_eq!(volley.hits(), 1);
    assert_eq!(
        game.fleet(Side::Player).ammo().remaining(Weapon::ClusterBomb),
        Some(1)
    );
}

#[test]
fn events_follow_the_board() {
    let mut game = started_game(9);
    game.play_round(Weapon::RailGun, Orientation::None, Coordinate::new(6, 3))
        .unwrap();
    let events = game.drain_events();
    assert_eq!(
        events[0],
        GameEvent::CellUpdated {
            side: Side::Ai,
            coord: Coordinate::new(6, 3),
            state: CellState::Hit,
        }
    );
    assert_eq!(events[1], GameEvent::TurnChanged(Side::Ai));
    for event in &events {
        if let GameEvent::CellUpdated { side, coord, state } = *event {
            assert_eq!(game.fleet(side).board().get(coord), Some(state));
        }
    }
    assert_eq!(events.last(), Some(&GameEvent::TurnChanged(Side::Player)));
    assert!(game.drain_events().is_empty());
}
