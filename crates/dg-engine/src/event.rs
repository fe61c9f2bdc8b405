use serde::Serialize;

use crate::player::PlayerId;
use crate::winners::Outcome;

/// What kind of game event occurred.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum GameEventKind {
    /// A player rolled their hand.
    Rolled {
        /// The player who rolled.
        player: PlayerId,
        /// The faces shown, in hand order.
        faces: Vec<u8>,
    },
    /// A player turned sixes into points.
    Scored {
        /// The scoring player.
        player: PlayerId,
        /// Points gained this round.
        points: u32,
    },
    /// Ones were handed to the next player.
    OnesPassed {
        /// The player who rolled the ones.
        from: PlayerId,
        /// The player who received them.
        to: PlayerId,
        /// Number of dice passed.
        count: usize,
    },
    /// Ones were dropped because the next player was already out.
    OnesWithheld {
        /// The player who rolled the ones.
        from: PlayerId,
        /// The eliminated player who would have received them.
        to: PlayerId,
        /// Number of dice dropped.
        count: usize,
    },
    /// A player ran out of dice.
    Eliminated {
        /// The eliminated player.
        player: PlayerId,
    },
    /// The game finished.
    GameEnded {
        /// The final result.
        outcome: Outcome,
    },
}

impl GameEventKind {
    /// Check whether a given player is involved in this event.
    pub fn involves(&self, id: PlayerId) -> bool {
        match self {
            Self::Rolled { player, .. }
            | Self::Scored { player, .. }
            | Self::Eliminated { player } => *player == id,
            Self::OnesPassed { from, to, .. } | Self::OnesWithheld { from, to, .. } => {
                *from == id || *to == id
            }
            Self::GameEnded { outcome } => outcome.players().contains(&id),
        }
    }
}

/// A record of something that happened during a game.
#[derive(Debug, Clone, Serialize)]
pub struct GameEvent {
    /// The turn when this event occurred.
    pub turn: u32,
    /// The specific kind of event.
    pub kind: GameEventKind,
    /// A human-readable description of the event.
    pub description: String,
}

impl GameEvent {
    /// Create a new game event.
    pub fn new(turn: u32, kind: GameEventKind, description: impl Into<String>) -> Self {
        Self {
            turn,
            kind,
            description: description.into(),
        }
    }
}

/// Accumulates events over the course of a game.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EventLog {
    events: Vec<GameEvent>,
    #[serde(skip)]
    max_events: usize,
}

impl EventLog {
    /// Create a new event log with the given maximum capacity (0 = unlimited).
    pub fn new(max_events: usize) -> Self {
        Self {
            events: Vec::new(),
            max_events,
        }
    }

    /// Append an event, dropping the oldest events if the log exceeds its capacity.
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
        if self.max_events > 0 && self.events.len() > self.max_events {
            let drain_count = self.events.len() - self.max_events;
            self.events.drain(..drain_count);
        }
    }

    /// The capacity of the log (0 = unlimited).
    pub fn max_events(&self) -> usize {
        self.max_events
    }

    /// All recorded events, oldest first.
    pub fn events(&self) -> &[GameEvent] {
        &self.events
    }

    /// Events that occurred on the given turn.
    pub fn events_at_turn(&self, turn: u32) -> Vec<&GameEvent> {
        self.events.iter().filter(|e| e.turn == turn).collect()
    }

    /// Events involving the given player.
    pub fn events_for_player(&self, id: PlayerId) -> Vec<&GameEvent> {
        self.events.iter().filter(|e| e.kind.involves(id)).collect()
    }

    /// Number of recorded events.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Returns `true` if nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_query() {
        let mut log = EventLog::new(0);
        assert!(log.is_empty());
        log.push(GameEvent::new(
            1,
            GameEventKind::Rolled {
                player: PlayerId(1),
                faces: vec![3, 6],
            },
            "Player #1 rolled 3, 6",
        ));
        log.push(GameEvent::new(
            2,
            GameEventKind::Eliminated {
                player: PlayerId(2),
            },
            "Player #2 is out",
        ));
        assert_eq!(log.len(), 2);
        assert_eq!(log.events_at_turn(1).len(), 1);
        assert_eq!(log.events_at_turn(3).len(), 0);
        assert_eq!(log.events_for_player(PlayerId(2)).len(), 1);
        assert_eq!(log.events()[1].description, "Player #2 is out");
    }

    #[test]
    fn max_events_drops_oldest() {
        let mut log = EventLog::new(2);
        for turn in 1..=5 {
            log.push(GameEvent::new(
                turn,
                GameEventKind::Eliminated {
                    player: PlayerId(turn),
                },
                "out",
            ));
        }
        assert_eq!(log.len(), 2);
        assert_eq!(log.max_events(), 2);
        assert_eq!(log.events()[0].turn, 4);
        assert_eq!(log.events()[1].turn, 5);
    }

    #[test]
    fn passing_involves_both_sides() {
        let kind = GameEventKind::OnesPassed {
            from: PlayerId(1),
            to: PlayerId(2),
            count: 1,
        };
        assert!(kind.involves(PlayerId(1)));
        assert!(kind.involves(PlayerId(2)));
        assert!(!kind.involves(PlayerId(3)));
    }

    #[test]
    fn game_end_involves_winners() {
        let kind = GameEventKind::GameEnded {
            outcome: Outcome::Tie {
                players: vec![PlayerId(1), PlayerId(3)],
                score: 12,
            },
        };
        assert!(kind.involves(PlayerId(3)));
        assert!(!kind.involves(PlayerId(2)));
    }
}
