//! Players and their hands of dice.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::dice::{Die, DieSource};
use crate::error::{EngineError, EngineResult};

/// Largest roster [`create_players`] will build.
pub const MAX_PLAYERS: u32 = 10_000;
/// Largest starting hand [`create_players`] will deal.
pub const MAX_DICE: usize = 1_000;

/// Stable identifier of a player, assigned 1..=N in roster order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub u32);

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// A participant in the game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Player {
    /// Identity, unique within a game.
    pub id: PlayerId,
    /// Points collected from sixes. Never decreases.
    pub score: u32,
    /// Set once the hand runs empty; never cleared.
    pub eliminated: bool,
    /// The dice currently held, in hand order.
    pub dice: Vec<Die>,
}

impl Player {
    /// Create a player holding `dice` unrolled dice.
    pub fn new(id: PlayerId, dice: usize) -> Self {
        Self {
            id,
            score: 0,
            eliminated: false,
            dice: vec![Die::Unrolled; dice],
        }
    }

    /// Number of dice in hand.
    pub fn dice_count(&self) -> usize {
        self.dice.len()
    }

    /// Returns true if the player is still in the game.
    pub fn is_active(&self) -> bool {
        !self.eliminated
    }

    /// Face values of the hand; unrolled dice are skipped.
    pub fn faces(&self) -> Vec<u8> {
        self.dice.iter().filter_map(|d| d.face()).collect()
    }

    /// Re-roll every die in hand. Does nothing for an empty hand.
    pub fn roll_dice(&mut self, source: &mut dyn DieSource) {
        for die in &mut self.dice {
            *die = Die::Rolled(source.roll_face());
        }
    }

    /// Remove the die at `index`, keeping the order of the rest.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_die(&mut self, index: usize) -> Die {
        self.dice.remove(index)
    }

    /// Append `count` unrolled dice to the hand.
    pub fn receive_dice(&mut self, count: usize) {
        self.dice.extend(std::iter::repeat_n(Die::Unrolled, count));
    }

    /// Render the hand as `"3, 5, 2"`, or `"_"` when empty.
    pub fn hand_label(&self) -> String {
        if self.dice.is_empty() {
            return "_".to_string();
        }
        self.dice
            .iter()
            .map(|d| d.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

/// Create `total_players` players, each holding `total_dice` unrolled dice.
///
/// IDs run from 1 to N in roster order. Counts above [`MAX_PLAYERS`] or
/// [`MAX_DICE`] are rejected. Zero players is allowed here;
/// [`Game::new`](crate::Game::new) rejects an empty roster.
pub fn create_players(total_players: i64, total_dice: i64) -> EngineResult<Vec<Player>> {
    if total_players < 0 {
        return Err(EngineError::NegativePlayerCount(total_players));
    }
    if total_dice < 0 {
        return Err(EngineError::NegativeDiceCount(total_dice));
    }
    let players = u32::try_from(total_players)
        .ok()
        .filter(|n| *n <= MAX_PLAYERS)
        .ok_or(EngineError::TooManyPlayers(total_players))?;
    let dice = usize::try_from(total_dice)
        .ok()
        .filter(|n| *n <= MAX_DICE)
        .ok_or(EngineError::TooManyDice(total_dice))?;

    Ok((1..=players)
        .map(|id| Player::new(PlayerId(id), dice))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dice::ScriptedDice;

    #[test]
    fn create_players_assigns_ids_in_order() {
        let players = create_players(3, 5).unwrap();
        assert_eq!(players.len(), 3);
        for (i, p) in players.iter().enumerate() {
            assert_eq!(p.id, PlayerId(i as u32 + 1));
            assert_eq!(p.dice_count(), 5);
            assert_eq!(p.score, 0);
            assert!(p.is_active());
            assert!(p.dice.iter().all(|d| *d == Die::Unrolled));
        }
    }

    #[test]
    fn create_players_rejects_negative_count() {
        assert_eq!(
            create_players(-1, 5),
            Err(EngineError::NegativePlayerCount(-1))
        );
    }

    #[test]
    fn create_players_rejects_negative_dice() {
        assert_eq!(
            create_players(2, -3),
            Err(EngineError::NegativeDiceCount(-3))
        );
    }

    #[test]
    fn create_players_rejects_counts_past_u32() {
        let huge = i64::from(u32::MAX) + 2;
        assert_eq!(
            create_players(huge, 1),
            Err(EngineError::TooManyPlayers(huge))
        );
        assert_eq!(
            create_players(1 << 32, 1),
            Err(EngineError::TooManyPlayers(1 << 32))
        );
    }

    #[test]
    fn create_players_caps_roster_size() {
        let over = i64::from(MAX_PLAYERS) + 1;
        assert_eq!(
            create_players(over, 1),
            Err(EngineError::TooManyPlayers(over))
        );
        assert_eq!(create_players(i64::from(MAX_PLAYERS), 0).unwrap().len(), 10_000);
    }

    #[test]
    fn create_players_rejects_oversized_hands() {
        assert_eq!(
            create_players(1, i64::MAX),
            Err(EngineError::TooManyDice(i64::MAX))
        );
        let over = MAX_DICE as i64 + 1;
        assert_eq!(create_players(2, over), Err(EngineError::TooManyDice(over)));
        let full = create_players(1, MAX_DICE as i64).unwrap();
        assert_eq!(full[0].dice_count(), MAX_DICE);
    }

    #[test]
    fn create_zero_players() {
        assert!(create_players(0, 4).unwrap().is_empty());
    }

    #[test]
    fn roll_assigns_faces_to_every_die() {
        let mut p = Player::new(PlayerId(1), 3);
        let mut dice = ScriptedDice::new([4, 2, 6]);
        p.roll_dice(&mut dice);
        assert_eq!(p.faces(), vec![4, 2, 6]);
    }

    #[test]
    fn roll_empty_hand_is_noop() {
        let mut p = Player::new(PlayerId(1), 0);
        let mut dice = ScriptedDice::new([3]);
        p.roll_dice(&mut dice);
        assert_eq!(p.dice_count(), 0);
        assert_eq!(dice.remaining(), 1);
    }

    #[test]
    fn remove_die_compacts_in_order() {
        let mut p = Player::new(PlayerId(1), 4);
        let mut dice = ScriptedDice::new([2, 3, 4, 5]);
        p.roll_dice(&mut dice);
        assert_eq!(p.remove_die(1), Die::Rolled(3));
        assert_eq!(p.faces(), vec![2, 4, 5]);
    }

    #[test]
    fn receive_dice_appends_unrolled() {
        let mut p = Player::new(PlayerId(1), 0);
        p.receive_dice(2);
        assert_eq!(p.dice, vec![Die::Unrolled, Die::Unrolled]);
    }

    #[test]
    fn hand_label_formats() {
        let mut p = Player::new(PlayerId(1), 2);
        assert_eq!(p.hand_label(), "?, ?");
        p.roll_dice(&mut ScriptedDice::new([5, 3]));
        assert_eq!(p.hand_label(), "5, 3");
        p.dice.clear();
        assert_eq!(p.hand_label(), "_");
    }

    #[test]
    fn player_id_display() {
        assert_eq!(PlayerId(7).to_string(), "#7");
    }
}
