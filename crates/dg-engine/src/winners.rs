//! Winner selection at the end of a game.

use serde::Serialize;

use crate::player::{Player, PlayerId};

/// Every player holding the highest score, in roster order.
///
/// Starts from the first player and scans the full roster: a strictly
/// higher score replaces the candidates, an equal score (from anyone but
/// the first player) joins them. Returns an empty set only for an empty
/// roster, which a [`Game`](crate::Game) never has.
pub fn select_winners(players: &[Player]) -> Vec<Player> {
    let Some(first) = players.first() else {
        return Vec::new();
    };

    let mut winners = vec![first.clone()];
    for player in players {
        let best = winners[0].score;
        if player.score > best {
            winners = vec![player.clone()];
        } else if player.score == best && player.id != first.id {
            winners.push(player.clone());
        }
    }
    winners
}

/// How a finished game ended.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "result", rename_all = "snake_case")]
pub enum Outcome {
    /// A single player has the highest score.
    Winner {
        /// The winning player.
        player: PlayerId,
        /// Their final score.
        score: u32,
    },
    /// Several players share the highest score.
    Tie {
        /// The tied players, in roster order.
        players: Vec<PlayerId>,
        /// The shared score.
        score: u32,
    },
}

impl Outcome {
    /// Build the outcome from a non-empty winner set.
    pub fn from_winners(winners: &[Player]) -> Option<Self> {
        match winners {
            [] => None,
            [only] => Some(Self::Winner {
                player: only.id,
                score: only.score,
            }),
            [first, ..] => Some(Self::Tie {
                players: winners.iter().map(|p| p.id).collect(),
                score: first.score,
            }),
        }
    }

    /// Returns true for a shared result.
    pub fn is_tie(&self) -> bool {
        matches!(self, Self::Tie { .. })
    }

    /// The winning score.
    pub fn score(&self) -> u32 {
        match self {
            Self::Winner { score, .. } | Self::Tie { score, .. } => *score,
        }
    }

    /// The players holding the winning score.
    pub fn players(&self) -> Vec<PlayerId> {
        match self {
            Self::Winner { player, .. } => vec![*player],
            Self::Tie { players, .. } => players.clone(),
        }
    }

    /// Returns true when every one of `roster_size` players tied.
    pub fn everyone_tied(&self, roster_size: usize) -> bool {
        match self {
            Self::Tie { players, .. } => players.len() == roster_size,
            Self::Winner { .. } => false,
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Winner { player, score } => {
                write!(f, "Player {player} wins with {score} points")
            }
            Self::Tie { players, score } => {
                let names: Vec<String> = players.iter().map(|p| format!("Player {p}")).collect();
                write!(
                    f,
                    "{}-way tie between {} at {score} points",
                    players.len(),
                    names.join(", ")
                )
            }
        }
    }
}
