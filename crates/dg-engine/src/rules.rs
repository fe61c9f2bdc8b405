//! Per-round evaluation of rolled dice.
//!
//! A round is evaluated in three passes over the whole roster, each one
//! finishing for every player before the next starts:
//!
//! 1. **Resolve**: every 1 is counted and removed, every 6 is removed and
//!    scores [`POINTS_PER_SIX`]. Faces 2 to 5 stay in hand.
//! 2. **Pass ones**: each player's 1s become fresh unrolled dice for the
//!    next player in roster order (wrapping to the first). A recipient who
//!    is already eliminated does not receive them; those dice are withheld
//!    and reported.
//! 3. **Eliminate**: anyone left with an empty hand is out.

use serde::Serialize;
use tracing::debug;

use crate::player::{Player, PlayerId};

/// Face that is passed on to the next player.
pub const PASSING_FACE: u8 = 1;
/// Face that is converted into score.
pub const SCORING_FACE: u8 = 6;
/// Points added to a player's score for each scoring die.
pub const POINTS_PER_SIX: u32 = 6;

/// What happened to one player's hand during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerTally {
    /// The player the tally belongs to.
    pub player: PlayerId,
    /// Dice removed because they showed a 1.
    pub ones: usize,
    /// Dice removed because they showed a 6.
    pub sixes: usize,
    /// Points gained this round.
    pub points: u32,
    /// Who the 1s were passed to, if there were any.
    pub passed_to: Option<PlayerId>,
    /// Dice actually added to the recipient's hand.
    pub awarded: usize,
    /// Dice not added because the recipient was eliminated.
    pub withheld: usize,
}

impl PlayerTally {
    fn new(player: PlayerId) -> Self {
        Self {
            player,
            ones: 0,
            sixes: 0,
            points: 0,
            passed_to: None,
            awarded: 0,
            withheld: 0,
        }
    }
}

/// The outcome of evaluating one round.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct EvaluationReport {
    /// One tally per player, in roster order.
    pub tallies: Vec<PlayerTally>,
    /// Players eliminated by this round, in roster order.
    pub eliminated: Vec<PlayerId>,
}

impl EvaluationReport {
    /// Total dice removed for showing a 1.
    pub fn total_ones(&self) -> usize {
        self.tallies.iter().map(|t| t.ones).sum()
    }

    /// Total dice handed to recipients.
    pub fn total_awarded(&self) -> usize {
        self.tallies.iter().map(|t| t.awarded).sum()
    }

    /// Total dice dropped because their recipient was out.
    pub fn total_withheld(&self) -> usize {
        self.tallies.iter().map(|t| t.withheld).sum()
    }

    /// Tally for a specific player.
    pub fn tally(&self, player: PlayerId) -> Option<&PlayerTally> {
        self.tallies.iter().find(|t| t.player == player)
    }
}

/// Roster index of the player after `index`, wrapping to the first.
pub fn next_index(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index + 1) % len }
}

/// Evaluate one round of rolled dice for the whole roster.
pub fn evaluate(players: &mut [Player]) -> EvaluationReport {
    let mut tallies: Vec<PlayerTally> = players.iter().map(|p| PlayerTally::new(p.id)).collect();

    for (player, tally) in players.iter_mut().zip(tallies.iter_mut()) {
        resolve_hand(player, tally);
    }

    let len = players.len();
    for (index, tally) in tallies.iter_mut().enumerate() {
        if tally.ones == 0 {
            continue;
        }
        let recipient = &mut players[next_index(index, len)];
        tally.passed_to = Some(recipient.id);
        if recipient.eliminated {
            tally.withheld = tally.ones;
        } else {
            recipient.receive_dice(tally.ones);
            tally.awarded = tally.ones;
        }
        debug!(
            from = %tally.player,
            to = %recipient.id,
            awarded = tally.awarded,
            withheld = tally.withheld,
            "passed ones"
        );
    }

    let mut eliminated = Vec::new();
    for player in players.iter_mut() {
        if player.dice.is_empty() && !player.eliminated {
            player.eliminated = true;
            eliminated.push(player.id);
            debug!(player = %player.id, score = player.score, "eliminated");
        }
    }

    EvaluationReport {
        tallies,
        eliminated,
    }
}

/// Strip 1s and 6s from a single hand, left to right.
fn resolve_hand(player: &mut Player, tally: &mut PlayerTally) {
    let mut index = 0;
    while index < player.dice.len() {
        let die = player.dice[index];
        if die.shows(PASSING_FACE) {
            player.remove_die(index);
            tally.ones += 1;
        } else if die.shows(SCORING_FACE) {
            player.remove_die(index);
            player.score += POINTS_PER_SIX;
            tally.sixes += 1;
            tally.points += POINTS_PER_SIX;
        } else {
            index += 1;
        }
    }
}
