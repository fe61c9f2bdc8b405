//! Game setup: the fixed setting of a game and the builder used to create one.

use std::time::Duration;

use serde::Serialize;

use crate::error::EngineResult;
use crate::player::{Player, create_players};

/// Fixed parameters of a running game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Setting {
    /// Number of players in the roster.
    pub total_players: usize,
    /// Dice each player started with.
    pub total_dice: usize,
    /// Pause between rounds. Only the presenter uses it.
    pub delay: Duration,
}

/// Configuration for setting up a game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    /// Requested number of players.
    pub players: i64,
    /// Requested dice per player.
    pub dice: i64,
    /// Pause between rounds.
    pub delay: Duration,
    /// RNG seed; `None` draws one from the operating system.
    pub seed: Option<u64>,
    /// Maximum event log size (oldest events dropped when exceeded). 0 = unlimited.
    pub max_events: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            players: 4,
            dice: 4,
            delay: Duration::ZERO,
            seed: None,
            max_events: 0,
        }
    }
}

impl GameConfig {
    /// Set the number of players.
    pub fn with_players(mut self, players: i64) -> Self {
        self.players = players;
        self
    }

    /// Set the dice per player.
    pub fn with_dice(mut self, dice: i64) -> Self {
        self.dice = dice;
        self
    }

    /// Set the pause between rounds.
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = delay;
        self
    }

    /// Fix the RNG seed for a reproducible game.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Set the maximum event log size (0 = unlimited).
    pub fn with_max_events(mut self, max: usize) -> Self {
        self.max_events = max;
        self
    }

    /// Build the starting roster.
    pub fn roster(&self) -> EngineResult<Vec<Player>> {
        create_players(self.players, self.dice)
    }
}
