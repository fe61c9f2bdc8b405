//! Rule engine for `dg`, a multiplayer dice-elimination game.
//!
//! Each round every active player rolls their hand. Sixes are removed and
//! scored, ones are removed and handed to the next player in roster order,
//! and anyone left without dice is eliminated. When at most one player
//! remains, the highest score wins (ties are shared).
//!
//! Randomness is injected through [`DieSource`], so a game can be replayed
//! from a seed or scripted face by face.

pub mod config;
pub mod dice;
pub mod error;
/// Game event types and the event log.
pub mod event;
pub mod game;
pub mod player;
pub mod rules;
pub mod winners;

pub use config::{GameConfig, Setting};
pub use dice::{Die, DieSource, ScriptedDice, SeededDice};
pub use error::{EngineError, EngineResult};
pub use event::{EventLog, GameEvent, GameEventKind};
pub use game::{Game, GameStatus, GameSummary, Narrator, RoundReport, Silent};
pub use player::{MAX_DICE, MAX_PLAYERS, Player, PlayerId, create_players};
pub use rules::{EvaluationReport, PlayerTally, evaluate};
pub use winners::{Outcome, select_winners};
