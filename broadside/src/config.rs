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

//! Settings fixed at the start of a game.
use thiserror::Error;

use crate::board::Dimensions;

/// Starting uses of each limited weapon in a standard game.
pub const DEFAULT_AMMO: u32 = 2;

/// Board size and starting ammunition for a game.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct GameConfig {
    /// Dimensions of both boards.
    pub dimensions: Dimensions,
    /// Torpedoes each side starts with.
    pub torpedo_ammo: u32,
    /// Cluster bombs each side starts with.
    pub cluster_bomb_ammo: u32,
}

impl GameConfig {
    /// Use boards of the given dimensions.
    pub fn with_dimensions(mut self, dimensions: Dimensions) -> Self {
        self.dimensions = dimensions;
        self
    }

    /// Start each side with the given number of torpedoes.
    pub fn with_torpedo_ammo(mut self, ammo: u32) -> Self {
        self.torpedo_ammo = ammo;
        self
    }

    /// Start each side with the given number of cluster bombs.
    pub fn with_cluster_bomb_ammo(mut self, ammo: u32) -> Self {
        self.cluster_bomb_ammo = ammo;
        self
    }
}

impl Default for GameConfig {
    /// A 10x10 board with two torpedoes and two cluster bombs per side.
    fn default() -> Self {
        Self {
            dimensions: Dimensions::default(),
            torpedo_ammo: DEFAULT_AMMO,
            cluster_bomb_ammo: DEFAULT_AMMO,
        }
    }
}

/// Reason a [`GameConfig`] can't be used to start a game.
#[derive(Debug, Error, Copy, Clone, Eq, PartialEq)]
pub enum ConfigError {
    /// The computer's ship layouts don't fit on boards of this size.
    #[error("board size {}x{} not supported", .0.rows(), .0.cols())]
    UnsupportedDimensions(Dimensions),

    /// The computer opponent has no layouts to place its fleet from.
    #[error("computer opponent has no fleet layouts")]
    EmptyLayoutPool,
}
