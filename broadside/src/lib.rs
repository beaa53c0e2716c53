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

//! Single-player Battleship against a computer opponent.
//!
//! The crate is split by concern:
//!
//! - [`board`] holds the per-side grid of cell states and the coordinate types.
//! - [`geometry`] computes the cells covered by ships and weapon patterns.
//! - [`ships`] describes the five ship kinds and where each side placed them.
//! - [`weapons`] lists what can be fired, what it covers and how much ammo is left.
//! - [`ai`] picks the computer's fleet layout and targets.
//! - [`game`] ties it together into the setup and play state machine.
//!
//! The engine never draws anything. A frontend drives a [`Game`], reads its state
//! through accessors or a [`GameSnapshot`](game::GameSnapshot) and reacts to the
//! [`GameEvent`](game::GameEvent)s it queues.

pub mod ai;
pub mod board;
pub mod config;
pub mod game;
pub mod geometry;
pub mod ships;
pub mod weapons;

pub use self::{
    board::{CellState, Coordinate, Dimensions},
    config::{ConfigError, GameConfig},
    game::{Game, Phase, Side},
    geometry::Orientation,
    ships::ShipKind,
    weapons::Weapon,
};
