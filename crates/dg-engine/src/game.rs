//! The turn loop that drives a game from the first roll to the winners.

use std::time::Duration;

use serde::Serialize;
use tracing::{debug, info};

use crate::config::Setting;
use crate::dice::DieSource;
use crate::error::{EngineError, EngineResult};
use crate::event::{EventLog, GameEvent, GameEventKind};
use crate::player::{Player, PlayerId};
use crate::rules::{self, EvaluationReport};
use crate::winners::{Outcome, select_winners};

/// Whether the game is still being played.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    /// Rounds are still being played.
    Running,
    /// At most one player is left; the game is read-only.
    Ended,
}

/// Summary of one completed round.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoundReport {
    /// The round number, starting at 1.
    pub turn: u32,
    /// What the rule engine did to each hand.
    pub evaluation: EvaluationReport,
    /// Players still in the game after this round.
    pub remaining: usize,
    /// Whether this round ended the game.
    pub ended: bool,
}

/// Observer for a game in progress.
///
/// All methods default to doing nothing, so a presenter only implements
/// the moments it cares about.
pub trait Narrator {
    /// Called once before the first round.
    fn on_start(&mut self, _setting: &Setting) {}

    /// Called after every active hand has been rolled.
    fn on_rolled(&mut self, _turn: u32, _players: &[Player]) {}

    /// Called after the round has been evaluated.
    fn on_evaluated(&mut self, _turn: u32, _players: &[Player], _report: &EvaluationReport) {}

    /// Called once after the winners have been decided.
    fn on_finished(&mut self, _game: &Game) {}
}

/// A narrator that stays quiet.
#[derive(Debug, Clone, Copy, Default)]
pub struct Silent;

impl Narrator for Silent {}

/// A dice-elimination game.
#[derive(Debug, Clone)]
pub struct Game {
    setting: Setting,
    players: Vec<Player>,
    remaining: usize,
    winners: Vec<Player>,
    outcome: Option<Outcome>,
    turn: u32,
    status: GameStatus,
    events: EventLog,
}

impl Game {
    /// Create a game from a roster.
    ///
    /// Fails with [`EngineError::NoPlayers`] for an empty roster. Players
    /// already marked eliminated do not count as remaining. The winner
    /// candidates start out as just the first player.
    pub fn new(players: Vec<Player>, delay: Duration) -> EngineResult<Self> {
        let first = players.first().ok_or(EngineError::NoPlayers)?;
        let setting = Setting {
            total_players: players.len(),
            total_dice: first.dice_count(),
            delay,
        };
        let winners = vec![first.clone()];
        let remaining = players.iter().filter(|p| p.is_active()).count();
        Ok(Self {
            setting,
            players,
            remaining,
            winners,
            outcome: None,
            turn: 0,
            status: GameStatus::Running,
            events: EventLog::new(0),
        })
    }

    /// Cap the event log at `max_events` entries (0 = unlimited).
    pub fn with_event_limit(mut self, max_events: usize) -> Self {
        self.events = EventLog::new(max_events);
        self
    }

    /// Play one round. Returns `None` once the game has ended.
    pub fn tick(&mut self, dice: &mut dyn DieSource) -> Option<RoundReport> {
        if self.status == GameStatus::Ended {
            return None;
        }
        self.roll(dice);
        Some(self.resolve())
    }

    /// Play rounds until the game ends, reporting to `narrator` as it goes.
    pub fn play(
        &mut self,
        dice: &mut dyn DieSource,
        narrator: &mut dyn Narrator,
    ) -> Option<&Outcome> {
        if self.status == GameStatus::Running {
            narrator.on_start(&self.setting);
            while self.status == GameStatus::Running {
                self.roll(dice);
                narrator.on_rolled(self.turn, &self.players);
                let report = self.resolve();
                narrator.on_evaluated(report.turn, &self.players, &report.evaluation);
            }
            narrator.on_finished(self);
        }
        self.outcome.as_ref()
    }

    /// Start a new round and roll every hand that can still roll.
    fn roll(&mut self, dice: &mut dyn DieSource) {
        self.turn += 1;
        for player in &mut self.players {
            if player.eliminated || player.dice.is_empty() {
                continue;
            }
            player.roll_dice(dice);
            let faces = player.faces();
            let description = format!("Player {} rolled {}", player.id, player.hand_label());
            self.events.push(GameEvent::new(
                self.turn,
                GameEventKind::Rolled {
                    player: player.id,
                    faces,
                },
                description,
            ));
        }
    }

    /// Evaluate the rolled round and check whether the game is over.
    fn resolve(&mut self) -> RoundReport {
        let evaluation = rules::evaluate(&mut self.players);
        self.remaining = self.remaining.saturating_sub(evaluation.eliminated.len());
        self.record(&evaluation);
        debug!(
            turn = self.turn,
            remaining = self.remaining,
            eliminated = evaluation.eliminated.len(),
            "round evaluated"
        );

        let ended = self.remaining <= 1;
        if ended {
            self.finish();
        }
        RoundReport {
            turn: self.turn,
            evaluation,
            remaining: self.remaining,
            ended,
        }
    }

    fn record(&mut self, evaluation: &EvaluationReport) {
        let turn = self.turn;
        for tally in &evaluation.tallies {
            if tally.points > 0 {
                self.events.push(GameEvent::new(
                    turn,
                    GameEventKind::Scored {
                        player: tally.player,
                        points: tally.points,
                    },
                    format!("Player {} scored {} points", tally.player, tally.points),
                ));
            }
            let Some(to) = tally.passed_to else {
                continue;
            };
            if tally.awarded > 0 {
                self.events.push(GameEvent::new(
                    turn,
                    GameEventKind::OnesPassed {
                        from: tally.player,
                        to,
                        count: tally.awarded,
                    },
                    format!(
                        "Player {} passed {} dice to Player {to}",
                        tally.player, tally.awarded
                    ),
                ));
            }
            if tally.withheld > 0 {
                self.events.push(GameEvent::new(
                    turn,
                    GameEventKind::OnesWithheld {
                        from: tally.player,
                        to,
                        count: tally.withheld,
                    },
                    format!(
                        "Player {} lost {} dice: Player {to} is out",
                        tally.player, tally.withheld
                    ),
                ));
            }
        }
        for id in &evaluation.eliminated {
            self.events.push(GameEvent::new(
                turn,
                GameEventKind::Eliminated { player: *id },
                format!("Player {id} has no dice left"),
            ));
        }
    }

    fn finish(&mut self) {
        self.status = GameStatus::Ended;
        self.winners = select_winners(&self.players);
        self.outcome = Outcome::from_winners(&self.winners);
        if let Some(outcome) = &self.outcome {
            info!(turns = self.turn, %outcome, "game over");
            self.events.push(GameEvent::new(
                self.turn,
                GameEventKind::GameEnded {
                    outcome: outcome.clone(),
                },
                outcome.to_string(),
            ));
        }
    }

    /// The fixed parameters of this game.
    pub fn setting(&self) -> &Setting {
        &self.setting
    }

    /// The roster, in its original order.
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// Look up a player by id.
    pub fn player(&self, id: PlayerId) -> Option<&Player> {
        self.players.iter().find(|p| p.id == id)
    }

    /// Players not yet eliminated.
    pub fn remaining(&self) -> usize {
        self.remaining
    }

    /// Winner candidates; final once the game has ended.
    pub fn winners(&self) -> &[Player] {
        &self.winners
    }

    /// The result, once the game has ended.
    pub fn outcome(&self) -> Option<&Outcome> {
        self.outcome.as_ref()
    }

    /// The number of rounds played so far.
    pub fn turn(&self) -> u32 {
        self.turn
    }

    /// Whether the game is still running.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        self.status == GameStatus::Ended
    }

    /// Everything that has happened so far.
    pub fn events(&self) -> &EventLog {
        &self.events
    }

    /// A serializable snapshot of the game.
    pub fn summary(&self) -> GameSummary {
        GameSummary {
            setting: self.setting.clone(),
            status: self.status,
            turns: self.turn,
            players: self.players.clone(),
            winners: self.winners.iter().map(|p| p.id).collect(),
            outcome: self.outcome.clone(),
        }
    }
}

/// Serializable snapshot of a game, used for machine-readable output.
#[derive(Debug, Clone, Serialize)]
pub struct GameSummary {
    /// The fixed parameters of the game.
    pub setting: Setting,
    /// Whether the game has ended.
    pub status: GameStatus,
    /// Rounds played.
    pub turns: u32,
    /// Final state of every player.
    pub players: Vec<Player>,
    /// Ids of the winner candidates.
    pub winners: Vec<PlayerId>,
    /// The result, if the game has ended.
    pub outcome: Option<Outcome>,
}
